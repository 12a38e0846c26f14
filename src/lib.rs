pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::address::{is_valid_address, to_checksum_address};
pub use crate::core::errors::WalletError;
pub use crate::core::services::WalletService;

#[cfg(test)]
mod tests; // Include integration tests
