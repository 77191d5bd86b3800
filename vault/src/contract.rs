//! Vault Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_deposit_asset, execute_deposit_native, execute_finalize_deposit,
    execute_mint, execute_refund_deposit, execute_register_asset, execute_unlock_asset,
    execute_unlock_native,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_asset_mode, query_config, query_user_balance, query_vault_balance};
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
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry", config.registry)
        .add_attribute("native_denom", config.native_denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DepositNative { account, amount } => {
            execute_deposit_native(deps, info, account, amount)
        }
        ExecuteMsg::DepositAsset {
            account,
            asset,
            amount,
        } => execute_deposit_asset(deps, env, info, account, asset, amount),
        ExecuteMsg::FinalizeDeposit {
            account,
            asset,
            amount,
        } => execute_finalize_deposit(deps, info, account, asset, amount),
        ExecuteMsg::Mint {
            account,
            asset,
            amount,
        } => execute_mint(deps, info, account, asset, amount),
        ExecuteMsg::Burn {
            account,
            asset,
            amount,
        } => execute_burn(deps, info, account, asset, amount),
        ExecuteMsg::UnlockNative { account, amount } => {
            execute_unlock_native(deps, info, account, amount)
        }
        ExecuteMsg::UnlockAsset {
            account,
            asset,
            amount,
        } => execute_unlock_asset(deps, info, account, asset, amount),
        ExecuteMsg::RefundDeposit {
            account,
            asset,
            amount,
        } => execute_refund_deposit(deps, info, account, asset, amount),
        ExecuteMsg::RegisterAsset { asset, mode } => {
            execute_register_asset(deps, info, asset, mode)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::UserBalance { account, asset } => {
            to_json_binary(&query_user_balance(deps, account, asset)?)
        }
        QueryMsg::VaultBalance { asset } => to_json_binary(&query_vault_balance(deps, asset)?),
        QueryMsg::AssetMode { asset } => to_json_binary(&query_asset_mode(deps, asset)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
