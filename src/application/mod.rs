//! Application layer wiring domain capabilities together.
//!
//! `PaymentRegistry` selects a payment method by kind, `fleet` builds and
//! drives transports through the shared `Transport` capability, and
//! `PlayerService` delegates to whatever repository it was given.

pub mod fleet;
pub mod payment_registry;
pub mod player_service;
