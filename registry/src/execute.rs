//! Execute message handlers for the registry contract.

use common::Role;
use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{ASSETS, ASSET_ADDRESSES, CHAINS, OPERATORS, SLOTS};

/// Require the caller to be the Admin operator.
fn ensure_admin(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
    let admin = OPERATORS.may_load(storage, Role::Admin.as_str())?;
    if admin.as_ref() != Some(&info.sender) {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}

/// Require the caller to be the Admin or the Factory operator.
///
/// The factory registers the wrapped assets it creates, so it shares the
/// asset-address write path with the admin.
fn ensure_admin_or_factory(
    storage: &dyn Storage,
    info: &MessageInfo,
) -> Result<(), ContractError> {
    let admin = OPERATORS.may_load(storage, Role::Admin.as_str())?;
    if admin.as_ref() == Some(&info.sender) {
        return Ok(());
    }
    let factory = OPERATORS.may_load(storage, Role::Factory.as_str())?;
    if factory.as_ref() == Some(&info.sender) {
        return Ok(());
    }
    Err(ContractError::NotAdmin)
}

pub fn execute_set_slot(
    deps: DepsMut,
    info: MessageInfo,
    key: String,
    value: Binary,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    SLOTS.save(deps.storage, &key, &value)?;

    Ok(Response::new()
        .add_attribute("method", "set_slot")
        .add_attribute("key", key))
}

pub fn execute_update_operator(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    let account = deps.api.addr_validate(&account)?;
    OPERATORS.save(deps.storage, role.as_str(), &account)?;

    Ok(Response::new()
        .add_attribute("method", "update_operator")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account))
}

pub fn execute_add_chains(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    // Idempotent set insertion; re-adding an existing chain is a no-op.
    for chain_id in &chain_ids {
        CHAINS.save(deps.storage, *chain_id, &true)?;
    }

    Ok(Response::new()
        .add_attribute("method", "add_chains")
        .add_attribute("count", chain_ids.len().to_string()))
}

pub fn execute_add_assets(
    deps: DepsMut,
    info: MessageInfo,
    assets: Vec<String>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    for asset in &assets {
        ASSETS.save(deps.storage, asset, &true)?;
    }

    Ok(Response::new()
        .add_attribute("method", "add_assets")
        .add_attribute("count", assets.len().to_string()))
}

pub fn execute_set_asset_address(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    chain_id: u64,
    address: String,
) -> Result<Response, ContractError> {
    ensure_admin_or_factory(deps.storage, &info)?;
    set_asset_address(deps.storage, &asset, chain_id, &address)?;

    Ok(Response::new()
        .add_attribute("method", "set_asset_address")
        .add_attribute("asset", asset)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("address", address))
}

pub fn execute_set_asset_addresses(
    deps: DepsMut,
    info: MessageInfo,
    assets: Vec<String>,
    chain_ids: Vec<u64>,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    ensure_admin_or_factory(deps.storage, &info)?;
    if assets.len() != chain_ids.len() || assets.len() != addresses.len() {
        return Err(ContractError::LengthMismatch);
    }
    for ((asset, chain_id), address) in assets.iter().zip(&chain_ids).zip(&addresses) {
        set_asset_address(deps.storage, asset, *chain_id, address)?;
    }

    Ok(Response::new()
        .add_attribute("method", "set_asset_addresses")
        .add_attribute("count", assets.len().to_string()))
}

pub fn execute_update_asset_address(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    chain_id: u64,
    address: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    update_asset_address(deps.storage, &asset, chain_id, &address)?;

    Ok(Response::new()
        .add_attribute("method", "update_asset_address")
        .add_attribute("asset", asset)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("address", address))
}

pub fn execute_update_asset_addresses(
    deps: DepsMut,
    info: MessageInfo,
    assets: Vec<String>,
    chain_ids: Vec<u64>,
    addresses: Vec<String>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.storage, &info)?;
    if assets.len() != chain_ids.len() || assets.len() != addresses.len() {
        return Err(ContractError::LengthMismatch);
    }
    for ((asset, chain_id), address) in assets.iter().zip(&chain_ids).zip(&addresses) {
        update_asset_address(deps.storage, asset, *chain_id, address)?;
    }

    Ok(Response::new()
        .add_attribute("method", "update_asset_addresses")
        .add_attribute("count", assets.len().to_string()))
}

/// First registration: the chain and asset must be authorized and the pair
/// must be unset.
fn set_asset_address(
    storage: &mut dyn Storage,
    asset: &str,
    chain_id: u64,
    address: &str,
) -> Result<(), ContractError> {
    if !CHAINS.has(storage, chain_id) {
        return Err(ContractError::ChainNotAuthorized { chain_id });
    }
    if !ASSETS.has(storage, asset) {
        return Err(ContractError::AssetNotAuthorized {
            asset: asset.to_string(),
        });
    }
    if ASSET_ADDRESSES.has(storage, (asset, chain_id)) {
        return Err(ContractError::AddressAlreadySet {
            asset: asset.to_string(),
            chain_id,
        });
    }
    ASSET_ADDRESSES.save(storage, (asset, chain_id), &address.to_string())?;
    Ok(())
}

/// Correction path: a prior value must exist.
fn update_asset_address(
    storage: &mut dyn Storage,
    asset: &str,
    chain_id: u64,
    address: &str,
) -> Result<(), ContractError> {
    if !ASSET_ADDRESSES.has(storage, (asset, chain_id)) {
        return Err(ContractError::AddressNotSet {
            asset: asset.to_string(),
            chain_id,
        });
    }
    ASSET_ADDRESSES.save(storage, (asset, chain_id), &address.to_string())?;
    Ok(())
}
