//! Query handlers for the relay contract.

use cosmwasm_std::{Binary, Deps, Env, Order, StdResult};

use crate::msg::{
    ConfigResponse, FeeEscrowResponse, OperationResponse, RequiredConfirmationsResponse,
    StaleOperation, StaleOperationsResponse, UserOperationsResponse,
};
use crate::state::{CONFIG, FEE_ESCROW, OPERATIONS, REQUIRED_CONFIRMATIONS, USER_OPERATIONS};

pub fn query_operation(deps: Deps, operation_hash: Binary) -> StdResult<OperationResponse> {
    let record = OPERATIONS.may_load(deps.storage, operation_hash.as_slice())?;
    Ok(OperationResponse { record })
}

pub fn query_user_operations(deps: Deps, account: String) -> StdResult<UserOperationsResponse> {
    let hashes = USER_OPERATIONS
        .may_load(deps.storage, &account)?
        .unwrap_or_default();
    Ok(UserOperationsResponse { hashes })
}

pub fn query_required_confirmations(
    deps: Deps,
    chain_id: u64,
) -> StdResult<RequiredConfirmationsResponse> {
    let blocks = REQUIRED_CONFIRMATIONS.may_load(deps.storage, chain_id)?;
    Ok(RequiredConfirmationsResponse { blocks })
}

pub fn query_fee_escrow(deps: Deps, operation_hash: Binary) -> StdResult<FeeEscrowResponse> {
    let escrow = FEE_ESCROW.may_load(deps.storage, operation_hash.as_slice())?;
    Ok(FeeEscrowResponse { escrow })
}

/// Non-terminal operations whose newest checkpoint is more than
/// `older_than_blocks` blocks behind the current height.
pub fn query_stale_operations(
    deps: Deps,
    env: Env,
    older_than_blocks: u64,
) -> StdResult<StaleOperationsResponse> {
    let cutoff = env.block.height.saturating_sub(older_than_blocks);
    let operations = OPERATIONS
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|entry| match entry {
            Ok((hash, record)) => {
                if !record.status.is_terminal() && record.last_checkpoint() < cutoff {
                    Some(Ok(StaleOperation {
                        hash: Binary::from(hash),
                        record,
                    }))
                } else {
                    None
                }
            }
            Err(err) => Some(Err(err)),
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(StaleOperationsResponse { operations })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry: config.registry,
        chain_id: config.chain_id,
    })
}
