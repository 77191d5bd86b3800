//! Error types for the registry contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    NotAdmin,

    #[error("Chain not authorized: {chain_id}")]
    ChainNotAuthorized { chain_id: u64 },

    #[error("Asset not authorized: {asset}")]
    AssetNotAuthorized { asset: String },

    #[error("Asset address already set for ({asset}, {chain_id})")]
    AddressAlreadySet { asset: String, chain_id: u64 },

    #[error("Asset address not set for ({asset}, {chain_id})")]
    AddressNotSet { asset: String, chain_id: u64 },

    #[error("Length mismatch: batch input arrays must have equal lengths")]
    LengthMismatch,
}
