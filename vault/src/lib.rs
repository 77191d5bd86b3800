//! Spanbridge Vault Contract - Custody Ledger
//!
//! Per-account, per-asset bookkeeping for funds held in escrow. The vault is a
//! pure ledger: it knows nothing about operation hashes or the lifecycle state
//! machine. The transfer entry point drives deposits, and the operation relay
//! drives finalization, unlocks and wrapped-asset minting.
//!
//! # Balance model
//! - *User balance* (account, asset): deposited but not yet finalized into
//!   custody, or pending refund.
//! - *Vault balance* (asset): funds the ledger is confirmed to hold. Never
//!   negative; an unlock can never draw it below zero.
//!
//! Wrapped assets are cw20 tokens for which this contract is the sole minter.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::state::AssetMode;
