//! Message types for the gateway contract.

use common::TransferIntent;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the registry contract.
    pub registry: String,
    /// Denom of this chain's native asset.
    pub native_denom: String,
    /// This chain's id in the protocol's chain numbering.
    pub chain_id: u64,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Submit a signed transfer. The origin chain id is this chain's.
    ///
    /// Guards, in order: the caller must be `from`; the 65-byte signature
    /// (r || s || recovery id) over the raw operation hash must recover to
    /// `from`; `nonce` must equal the sender's current counter; destination
    /// chain and asset must be allow-listed and the asset resolvable on this
    /// chain; native transfers must attach exactly the transferred amount,
    /// token transfers must attach nothing (the token is pulled via cw20
    /// allowance to the vault).
    CreateTransfer {
        from: String,
        to: String,
        destination_chain_id: u64,
        asset: String,
        amount: Uint128,
        nonce: u64,
        signature: Binary,
    },

    /// Deposit destination-side relay fees for an operation. The attached
    /// native funds are escrowed by the relay until finalization or
    /// cancellation.
    DepositFees {
        operation_hash: Binary,
        origin_chain_id: u64,
        destination_chain_id: u64,
    },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The next expected nonce for an account. Starts at zero.
    #[returns(NonceResponse)]
    CurrentNonce { account: String },

    /// Hash preview: the canonical operation hash of a tuple.
    #[returns(OperationHashResponse)]
    OperationHash { intent: TransferIntent },

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct OperationHashResponse {
    pub hash: Binary,
}

#[cw_serde]
pub struct ConfigResponse {
    pub registry: Addr,
    pub native_denom: String,
    pub chain_id: u64,
}
