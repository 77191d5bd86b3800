//! Common - Shared Types and Utilities for the Spanbridge Relay Protocol
//!
//! This package provides the type definitions and hashing primitives shared
//! across the protocol contracts: the operator role enumeration, the transfer
//! intent tuple, the operation lifecycle status, and the canonical operation
//! hash computation.

pub mod hash;
pub mod intent;
pub mod roles;
pub mod status;

pub use hash::{bytes32_to_hex, compute_operation_hash, derive_signer_id, hex_to_bytes32, keccak256};
pub use intent::TransferIntent;
pub use roles::Role;
pub use status::{BlockCheckpoints, OperationStatus, Side};
