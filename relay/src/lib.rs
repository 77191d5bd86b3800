//! Spanbridge Relay Contract - Operation Lifecycle State Machine
//!
//! One relay instance runs per chain and tracks every operation that touches
//! that chain, keyed by the 32-byte operation hash. A record progresses
//! through one of two status tracks depending on which side of the transfer
//! this chain is on:
//!
//! - origin: `Created -> FeesLocked -> Ready -> Closed`
//! - destination: `FeesDeposited -> FeesConfirmed -> Finalized`
//!
//! `Cancelled` is reachable from the pre-finalization states on either side.
//! Terminal records are retained for audit and never deleted.
//!
//! The entry point (holding the Bridge role) creates records; the off-chain
//! oracle (holding the Oracle role) drives the confirmation handshake between
//! the two chains. Block-depth gates protect both value-moving transitions.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
