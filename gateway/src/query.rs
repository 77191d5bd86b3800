//! Query handlers for the gateway contract.

use common::TransferIntent;
use cosmwasm_std::{Binary, Deps, StdResult};

use crate::msg::{ConfigResponse, NonceResponse, OperationHashResponse};
use crate::state::{CONFIG, NONCES};

pub fn query_current_nonce(deps: Deps, account: String) -> StdResult<NonceResponse> {
    let nonce = NONCES.may_load(deps.storage, &account)?.unwrap_or(0);
    Ok(NonceResponse { nonce })
}

pub fn query_operation_hash(intent: TransferIntent) -> StdResult<OperationHashResponse> {
    Ok(OperationHashResponse {
        hash: Binary::from(intent.operation_hash().as_slice()),
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry: config.registry,
        native_denom: config.native_denom,
        chain_id: config.chain_id,
    })
}
