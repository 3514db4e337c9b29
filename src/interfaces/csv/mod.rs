//! CSV adapters used by the command-line interface.

pub mod checkout_writer;
pub mod payment_reader;
pub mod player_reader;
pub mod ride_writer;
