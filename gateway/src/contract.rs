//! Gateway Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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
        native_denom: msg.native_denom,
        chain_id: msg.chain_id,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry", config.registry)
        .add_attribute("native_denom", config.native_denom)
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
        ExecuteMsg::CreateTransfer {
            from,
            to,
            destination_chain_id,
            asset,
            amount,
            nonce,
            signature,
        } => execute::create_transfer(
            deps,
            env,
            info,
            from,
            to,
            destination_chain_id,
            asset,
            amount,
            nonce,
            signature,
        ),
        ExecuteMsg::DepositFees {
            operation_hash,
            origin_chain_id,
            destination_chain_id,
        } => execute::deposit_fees(
            deps,
            info,
            operation_hash,
            origin_chain_id,
            destination_chain_id,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CurrentNonce { account } => {
            to_json_binary(&query::query_current_nonce(deps, account)?)
        }
        QueryMsg::OperationHash { intent } => to_json_binary(&query::query_operation_hash(intent)?),
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
