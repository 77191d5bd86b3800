//! Error types for the vault contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller lacks role {role}")]
    CallerLacksRole { role: String },

    #[error("Insufficient balance: {context}")]
    InsufficientBalance { context: String },

    #[error("Funds mismatch: expected exactly {expected} {denom}")]
    FundsMismatch { expected: String, denom: String },

    #[error("Asset not registered: {asset}")]
    AssetNotRegistered { asset: String },
}

impl ContractError {
    pub fn lacks_role(role: &str) -> Self {
        ContractError::CallerLacksRole {
            role: role.to_string(),
        }
    }

    pub fn insufficient(context: &str) -> Self {
        ContractError::InsufficientBalance {
            context: context.to_string(),
        }
    }
}
