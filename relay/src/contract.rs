//! Relay Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{admin, destination, origin};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REQUIRED_CONFIRMATIONS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        registry: deps.api.addr_validate(&msg.registry)?,
        chain_id: msg.chain_id,
    };
    CONFIG.save(deps.storage, &config)?;

    for entry in msg.required_confirmations {
        REQUIRED_CONFIRMATIONS.save(deps.storage, entry.chain_id, &entry.blocks)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry", config.registry)
        .add_attribute("chain_id", config.chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateOperation { intent, signature } => {
            origin::create_operation(deps, env, info, intent, signature)
        }
        ExecuteMsg::ReceiveFeeLockConfirmation {
            operation_hash,
            remote_block,
        } => origin::receive_fee_lock_confirmation(deps, env, info, operation_hash, remote_block),
        ExecuteMsg::ConfirmFeesAndDeposit { operation_hash } => {
            origin::confirm_fees_and_deposit(deps, env, operation_hash)
        }
        ExecuteMsg::ReceiveFinalizedOperation {
            operation_hash,
            remote_block,
        } => origin::receive_finalized_operation(deps, env, info, operation_hash, remote_block),
        ExecuteMsg::ReceiveCancelOperation { operation_hash } => {
            origin::receive_cancel_operation(deps, env, info, operation_hash)
        }
        ExecuteMsg::LockDestinationFees {
            operation_hash,
            origin_chain_id,
            destination_chain_id,
            payer,
        } => destination::lock_destination_fees(
            deps,
            env,
            info,
            operation_hash,
            origin_chain_id,
            destination_chain_id,
            payer,
        ),
        ExecuteMsg::SendFeeLockConfirmation {
            operation_hash,
            intent,
        } => destination::send_fee_lock_confirmation(deps, env, info, operation_hash, intent),
        ExecuteMsg::CompleteOperation {
            operation_hash,
            intent,
        } => destination::complete_operation(deps, env, info, operation_hash, intent),
        ExecuteMsg::EmitCancelOperation { operation_hash } => {
            destination::emit_cancel_operation(deps, env, info, operation_hash)
        }
        ExecuteMsg::SetRequiredConfirmations { chain_id, blocks } => {
            admin::set_required_confirmations(deps, info, chain_id, blocks)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Operation { operation_hash } => {
            to_json_binary(&query::query_operation(deps, operation_hash)?)
        }
        QueryMsg::UserOperations { account } => {
            to_json_binary(&query::query_user_operations(deps, account)?)
        }
        QueryMsg::RequiredConfirmations { chain_id } => {
            to_json_binary(&query::query_required_confirmations(deps, chain_id)?)
        }
        QueryMsg::FeeEscrow { operation_hash } => {
            to_json_binary(&query::query_fee_escrow(deps, operation_hash)?)
        }
        QueryMsg::StaleOperations { older_than_blocks } => {
            to_json_binary(&query::query_stale_operations(deps, env, older_than_blocks)?)
        }
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
