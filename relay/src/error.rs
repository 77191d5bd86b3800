//! Error types for the relay contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller does not hold the {role} role")]
    CallerLacksRole { role: String },

    #[error("Operation already exists: {hash}")]
    AlreadyExists { hash: String },

    #[error("Operation not found: {hash}")]
    OperationNotFound { hash: String },

    #[error("Invalid status: expected {expected}, actual {actual}")]
    InvalidStatus { expected: String, actual: String },

    #[error("Operation hash must be exactly 32 bytes")]
    InvalidHashLength,

    #[error("Tuple hash does not match the operation hash")]
    HashMismatch,

    #[error(
        "Confirmation depth not reached for {hash}: height {current_height}, required {required_height}"
    )]
    ConfirmationNotReached {
        hash: String,
        current_height: u64,
        required_height: u64,
    },

    #[error("No confirmation depth configured for chain {chain_id}")]
    ChainNotConfigured { chain_id: u64 },

    #[error("No fee funds attached")]
    NoFeesAttached,

    #[error("Asset {asset} has no identifier registered for chain {chain_id}")]
    AssetNotRegistered { asset: String, chain_id: u64 },

    #[error("No payout mode registered for asset {asset}")]
    AssetModeNotSet { asset: String },
}

impl ContractError {
    pub fn lacks_role(role: &str) -> Self {
        ContractError::CallerLacksRole {
            role: role.to_string(),
        }
    }

    pub fn invalid_status(expected: &str, actual: &str) -> Self {
        ContractError::InvalidStatus {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
