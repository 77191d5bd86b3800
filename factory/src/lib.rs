//! Spanbridge Factory Contract - Wrapped Asset Creation
//!
//! Instantiates cw20 wrapped-asset tokens on demand, hands their minting
//! authority to the vault, and registers their address with the registry's
//! asset address table for the current chain.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
