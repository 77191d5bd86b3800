//! Error types for the factory contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only admin can perform this action")]
    NotAdmin,

    #[error("Asset symbol already exists: {symbol}")]
    AssetSymbolExists { symbol: String },

    #[error("No pending asset creation for reply id {id}")]
    UnknownReply { id: u64 },

    #[error("Instantiate reply carried no contract address")]
    MissingContractAddress,
}
