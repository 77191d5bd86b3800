//! Error types for the gateway contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Tuple sender does not match the caller")]
    SenderMismatch,

    #[error("Signature does not recover to the tuple sender")]
    InvalidSignature,

    #[error("Wrong nonce: expected {expected}, got {actual}")]
    WrongNonce { expected: u64, actual: u64 },

    #[error("Destination chain {chain_id} is not authorized")]
    ChainNotAuthorized { chain_id: u64 },

    #[error("Asset is not authorized or has no local identifier: {asset}")]
    UnauthorizedAsset { asset: String },

    #[error("Attached funds must be exactly the transferred native amount")]
    NativeValueMismatch,

    #[error("Token transfers must not attach native funds")]
    TokenValueMismatch,

    #[error("No fee funds attached")]
    NoFeesAttached,
}
