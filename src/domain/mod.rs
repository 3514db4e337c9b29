//! Domain types and capability traits.
//!
//! Nothing here knows about CSV, the CLI or a concrete repository.

pub mod legacy;
pub mod money;
pub mod payment;
pub mod player;
pub mod ports;
pub mod transport;
