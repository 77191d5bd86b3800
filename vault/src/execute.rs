//! Execute message handlers for the vault contract.

use common::Role;
use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    Storage, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use registry::Registry;

use crate::error::ContractError;
use crate::state::{AssetMode, ASSET_MODES, CONFIG, USER_BALANCES, VAULT_BALANCES};

/// Require the caller to hold the Bridge or Relay role (or be the admin).
///
/// The entry point (Bridge) drives deposits; the relay drives finalization
/// and payout. The reported role is "bridge", the ledger's primary caller.
fn ensure_ledger_caller(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    for role in [Role::Bridge, Role::Relay, Role::Admin] {
        if registry.has_role(&deps.querier, role, &info.sender)? {
            return Ok(());
        }
    }
    Err(ContractError::lacks_role("bridge"))
}

/// Require the caller to be the admin or the Factory operator.
fn ensure_asset_registrar(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    for role in [Role::Admin, Role::Factory] {
        if registry.has_role(&deps.querier, role, &info.sender)? {
            return Ok(());
        }
    }
    Err(ContractError::lacks_role("admin"))
}

pub fn execute_deposit_native(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_ledger_caller(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;

    // The attached funds must be exactly the declared amount of the native
    // denom; anything else would desynchronize the ledger from real holdings.
    let attached = match info.funds.as_slice() {
        [coin] if coin.denom == config.native_denom => coin.amount,
        _ => Uint128::zero(),
    };
    if attached != amount || amount.is_zero() {
        return Err(ContractError::FundsMismatch {
            expected: amount.to_string(),
            denom: config.native_denom,
        });
    }

    credit_user(deps.storage, &account, &config.native_denom, amount)?;

    Ok(Response::new()
        .add_attribute("method", "deposit_native")
        .add_attribute("account", account)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_deposit_asset(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    account: String,
    asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_ledger_caller(deps.as_ref(), &info)?;

    credit_user(deps.storage, &account, &asset, amount)?;

    // Pull the tokens from the depositor. Insufficient balance or allowance
    // aborts the whole call atomically at the cw20 contract.
    let pull = WasmMsg::Execute {
        contract_addr: asset.clone(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: account.clone(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("method", "deposit_asset")
        .add_attribute("account", account)
        .add_attribute("asset", asset)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_finalize_deposit(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_ledger_caller(deps.as_ref(), &info)?;

    debit_user(deps.storage, &account, &asset, amount, "pending")?;

    let held = VAULT_BALANCES
        .may_load(deps.storage, &asset)?
        .unwrap_or_default();
    let held = held.checked_add(amount).map_err(StdError::from)?;
    VAULT_BALANCES.save(deps.storage, &asset, &held)?;

    Ok(Response::new()
        .add_attribute("method", "finalize_deposit")
        .add_attribute("account", account)
        .add_attribute("asset", asset)
        .add_attribute("amount", amount.to_string())
        .add_attribute("vault_balance", held.to_string()))
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_ledger_caller(deps.as_ref(), &info)?;
    require_mode(deps.storage, &asset, AssetMode::MintBurn)?;

    let mint = WasmMsg::Execute {
        contract_addr: asset.clone(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: account.clone(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("method", "mint")
        .add_attribute("account", account)
        .add_attribute("asset", asset)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_ledger_caller(deps.as_ref(), &info)?;
    require_mode(deps.storage, &asset, AssetMode::MintBurn)?;

    let burn = WasmMsg::Execute {
        contract_addr: asset.clone(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: account.clone(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn)
        .add_attribute("method", "burn")
        .add_attribute("account", account)
        .add_attribute("asset", asset)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_unlock_native(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_ledger_caller(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;

    debit_vault(deps.storage, &config.native_denom, amount)?;

    let payout = BankMsg::Send {
        to_address: account.clone(),
        amount: vec![Coin {
            denom: config.native_denom,
            amount,
        }],
    };

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("method", "unlock_native")
        .add_attribute("account", account)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_unlock_asset(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_ledger_caller(deps.as_ref(), &info)?;

    debit_vault(deps.storage, &asset, amount)?;

    let payout = WasmMsg::Execute {
        contract_addr: asset.clone(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: account.clone(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("method", "unlock_asset")
        .add_attribute("account", account)
        .add_attribute("asset", asset)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_refund_deposit(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_ledger_caller(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;

    debit_user(deps.storage, &account, &asset, amount, "pending")?;

    let refund: CosmosMsg = if asset == config.native_denom {
        BankMsg::Send {
            to_address: account.clone(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount,
            }],
        }
        .into()
    } else {
        WasmMsg::Execute {
            contract_addr: asset.clone(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: account.clone(),
                amount,
            })?,
            funds: vec![],
        }
        .into()
    };

    Ok(Response::new()
        .add_message(refund)
        .add_attribute("method", "refund_deposit")
        .add_attribute("account", account)
        .add_attribute("asset", asset)
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_register_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    mode: AssetMode,
) -> Result<Response, ContractError> {
    ensure_asset_registrar(deps.as_ref(), &info)?;
    ASSET_MODES.save(deps.storage, &asset, &mode)?;

    Ok(Response::new()
        .add_attribute("method", "register_asset")
        .add_attribute("asset", asset)
        .add_attribute("mode", mode.as_str()))
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn credit_user(
    storage: &mut dyn Storage,
    account: &str,
    asset: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    let pending = USER_BALANCES
        .may_load(storage, (account, asset))?
        .unwrap_or_default();
    let pending = pending.checked_add(amount).map_err(StdError::from)?;
    USER_BALANCES.save(storage, (account, asset), &pending)?;
    Ok(())
}

fn debit_user(
    storage: &mut dyn Storage,
    account: &str,
    asset: &str,
    amount: Uint128,
    context: &str,
) -> Result<(), ContractError> {
    let pending = USER_BALANCES
        .may_load(storage, (account, asset))?
        .unwrap_or_default();
    if pending < amount {
        return Err(ContractError::insufficient(context));
    }
    let remaining = pending - amount;
    if remaining.is_zero() {
        USER_BALANCES.remove(storage, (account, asset));
    } else {
        USER_BALANCES.save(storage, (account, asset), &remaining)?;
    }
    Ok(())
}

fn debit_vault(storage: &mut dyn Storage, asset: &str, amount: Uint128) -> Result<(), ContractError> {
    let held = VAULT_BALANCES
        .may_load(storage, asset)?
        .unwrap_or_default();
    if held < amount {
        return Err(ContractError::insufficient("vault"));
    }
    VAULT_BALANCES.save(storage, asset, &(held - amount))?;
    Ok(())
}

fn require_mode(
    storage: &dyn Storage,
    asset: &str,
    expected: AssetMode,
) -> Result<(), ContractError> {
    match ASSET_MODES.may_load(storage, asset)? {
        Some(mode) if mode == expected => Ok(()),
        _ => Err(ContractError::AssetNotRegistered {
            asset: asset.to_string(),
        }),
    }
}
