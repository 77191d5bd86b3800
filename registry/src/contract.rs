//! Registry Contract - Entry Points

use common::Role;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_assets, execute_add_chains, execute_set_asset_address,
    execute_set_asset_addresses, execute_set_slot, execute_update_asset_address,
    execute_update_asset_addresses, execute_update_operator,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_asset_address, query_assets, query_chains, query_is_asset_authorized,
    query_is_chain_authorized, query_operator, query_operators, query_slot,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, OPERATORS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    OPERATORS.save(deps.storage, Role::Admin.as_str(), &admin)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetSlot { key, value } => execute_set_slot(deps, info, key, value),
        ExecuteMsg::UpdateOperator { role, account } => {
            execute_update_operator(deps, info, role, account)
        }
        ExecuteMsg::AddChain { chain_id } => execute_add_chains(deps, info, vec![chain_id]),
        ExecuteMsg::AddChains { chain_ids } => execute_add_chains(deps, info, chain_ids),
        ExecuteMsg::AddAsset { asset } => execute_add_assets(deps, info, vec![asset]),
        ExecuteMsg::AddAssets { assets } => execute_add_assets(deps, info, assets),
        ExecuteMsg::SetAssetAddress {
            asset,
            chain_id,
            address,
        } => execute_set_asset_address(deps, info, asset, chain_id, address),
        ExecuteMsg::SetAssetAddresses {
            assets,
            chain_ids,
            addresses,
        } => execute_set_asset_addresses(deps, info, assets, chain_ids, addresses),
        ExecuteMsg::UpdateAssetAddress {
            asset,
            chain_id,
            address,
        } => execute_update_asset_address(deps, info, asset, chain_id, address),
        ExecuteMsg::UpdateAssetAddresses {
            assets,
            chain_ids,
            addresses,
        } => execute_update_asset_addresses(deps, info, assets, chain_ids, addresses),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Slot { key } => to_json_binary(&query_slot(deps, key)?),
        QueryMsg::Operator { role } => to_json_binary(&query_operator(deps, role)?),
        QueryMsg::IsChainAuthorized { chain_id } => {
            to_json_binary(&query_is_chain_authorized(deps, chain_id)?)
        }
        QueryMsg::IsAssetAuthorized { asset } => {
            to_json_binary(&query_is_asset_authorized(deps, asset)?)
        }
        QueryMsg::AssetAddress { asset, chain_id } => {
            to_json_binary(&query_asset_address(deps, asset, chain_id)?)
        }
        QueryMsg::Chains {} => to_json_binary(&query_chains(deps)?),
        QueryMsg::Assets {} => to_json_binary(&query_assets(deps)?),
        QueryMsg::Operators {} => to_json_binary(&query_operators(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
