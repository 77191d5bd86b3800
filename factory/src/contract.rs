//! Factory Contract - Entry Points
//!
//! Asset creation is a two-step dance: the instantiate submessage deploys the
//! cw20, and the reply handler captures its address, records it locally and
//! registers it with the registry and the vault. The factory must hold the
//! Factory role for those registrations to be accepted, and the symbol must
//! already be in the registry's authorized asset set.

use common::Role;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Reply, Response,
    StdError, StdResult, SubMsg, WasmMsg,
};
use cw2::set_contract_version;
use cw20::MinterResponse;
use registry::Registry;
use vault::AssetMode;

use crate::error::ContractError;
use crate::msg::{
    AssetAddressResponse, AssetEntry, ConfigResponse, ExecuteMsg, InstantiateMsg, ListAssetsResponse,
    MigrateMsg, QueryMsg,
};
use crate::state::{
    Config, PendingAsset, ASSETS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    INSTANTIATE_ASSET_REPLY_ID, PENDING,
};

/// Decimals for wrapped assets, uniform across chains.
const WRAPPED_DECIMALS: u8 = 6;

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
        asset_code_id: msg.asset_code_id,
        chain_id: msg.chain_id,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("registry", config.registry)
        .add_attribute("asset_code_id", config.asset_code_id.to_string())
        .add_attribute("chain_id", config.chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateAsset { name, symbol } => execute_create_asset(deps, info, name, symbol),
    }
}

fn execute_create_asset(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    symbol: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);

    if !registry.has_role(&deps.querier, Role::Admin, &info.sender)? {
        return Err(ContractError::NotAdmin);
    }

    if ASSETS.has(deps.storage, &symbol) {
        return Err(ContractError::AssetSymbolExists { symbol });
    }

    // The vault receives both the cw20 minting authority and the contract
    // admin slot: custody is the sole authority over wrapped supply.
    let vault = registry.require_operator(&deps.querier, Role::Vault)?;

    let init = WasmMsg::Instantiate {
        admin: Some(vault.to_string()),
        code_id: config.asset_code_id,
        msg: to_json_binary(&cw20_base::msg::InstantiateMsg {
            name: name.clone(),
            symbol: symbol.clone(),
            decimals: WRAPPED_DECIMALS,
            initial_balances: vec![],
            mint: Some(MinterResponse {
                minter: vault.to_string(),
                cap: None,
            }),
            marketing: None,
        })?,
        funds: vec![],
        label: format!("wrapped-{}", symbol),
    };

    PENDING.save(deps.storage, &PendingAsset { name, symbol: symbol.clone() })?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(init, INSTANTIATE_ASSET_REPLY_ID))
        .add_attribute("method", "create_asset")
        .add_attribute("symbol", symbol))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INSTANTIATE_ASSET_REPLY_ID {
        return Err(ContractError::UnknownReply { id: msg.id });
    }

    let pending = PENDING
        .may_load(deps.storage)?
        .ok_or(ContractError::UnknownReply { id: msg.id })?;
    PENDING.remove(deps.storage);

    let response = msg.result.into_result().map_err(StdError::generic_err)?;
    let address = response
        .events
        .iter()
        .filter(|event| event.ty == "instantiate")
        .flat_map(|event| &event.attributes)
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.clone())
        .ok_or(ContractError::MissingContractAddress)?;
    let address = deps.api.addr_validate(&address)?;

    ASSETS.save(deps.storage, &pending.symbol, &address)?;

    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry.clone());
    let vault = registry.require_operator(&deps.querier, Role::Vault)?;

    let register_address = WasmMsg::Execute {
        contract_addr: config.registry.to_string(),
        msg: to_json_binary(&registry::msg::ExecuteMsg::SetAssetAddress {
            asset: pending.symbol.clone(),
            chain_id: config.chain_id,
            address: address.to_string(),
        })?,
        funds: vec![],
    };
    let register_mode = WasmMsg::Execute {
        contract_addr: vault.to_string(),
        msg: to_json_binary(&vault::msg::ExecuteMsg::RegisterAsset {
            asset: address.to_string(),
            mode: AssetMode::MintBurn,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(register_address)
        .add_message(register_mode)
        .add_attribute("method", "create_asset_reply")
        .add_attribute("symbol", pending.symbol)
        .add_attribute("address", address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::AssetAddress { symbol } => to_json_binary(&AssetAddressResponse {
            address: ASSETS.may_load(deps.storage, &symbol)?,
        }),
        QueryMsg::ListAssets {} => {
            let assets = ASSETS
                .range(deps.storage, None, None, Order::Ascending)
                .map(|entry| entry.map(|(symbol, address)| AssetEntry { symbol, address }))
                .collect::<StdResult<Vec<_>>>()?;
            to_json_binary(&ListAssetsResponse { assets })
        }
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                registry: config.registry,
                asset_code_id: config.asset_code_id,
                chain_id: config.chain_id,
            })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
