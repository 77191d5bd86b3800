//! Spanbridge Gateway Contract - Transfer Entry Point
//!
//! The single user-facing surface of the protocol. A sender submits the
//! transfer tuple together with a secp256k1 signature over its operation
//! hash; the gateway verifies sender, signature and nonce, checks the
//! destination chain and asset against the registry allow-lists, escrows the
//! value in the vault, and opens the operation record in the relay.
//!
//! The gateway holds the Bridge role in the registry, which is what lets it
//! drive vault deposits and relay record creation.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
