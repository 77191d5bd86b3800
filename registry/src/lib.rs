//! Spanbridge Registry Contract - Authorization and Component Binding
//!
//! The registry is the sole authorization source for the protocol: a typed
//! key/value slot store, the operator-role table, membership sets for
//! authorized chains and assets, and the per-chain asset address table.
//!
//! Every other contract resolves its collaborators (and checks its callers)
//! through the operator table, which is populated by the admin in a single
//! pass after all contracts are instantiated. This breaks the mutual
//! construction dependency between the gateway and the relay.

pub mod contract;
pub mod error;
mod execute;
pub mod helpers;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::helpers::Registry;
