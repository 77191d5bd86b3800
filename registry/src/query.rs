//! Query handlers for the registry contract.

use common::Role;
use cosmwasm_std::{Deps, Order, StdResult};

use crate::msg::{
    AssetAddressResponse, AssetsResponse, AuthorizedResponse, ChainsResponse, OperatorEntry,
    OperatorResponse, OperatorsResponse, SlotResponse,
};
use crate::state::{ASSETS, ASSET_ADDRESSES, CHAINS, OPERATORS, SLOTS};

pub fn query_slot(deps: Deps, key: String) -> StdResult<SlotResponse> {
    Ok(SlotResponse {
        value: SLOTS.may_load(deps.storage, &key)?,
    })
}

pub fn query_operator(deps: Deps, role: Role) -> StdResult<OperatorResponse> {
    Ok(OperatorResponse {
        account: OPERATORS.may_load(deps.storage, role.as_str())?,
    })
}

pub fn query_is_chain_authorized(deps: Deps, chain_id: u64) -> StdResult<AuthorizedResponse> {
    Ok(AuthorizedResponse {
        authorized: CHAINS.has(deps.storage, chain_id),
    })
}

pub fn query_is_asset_authorized(deps: Deps, asset: String) -> StdResult<AuthorizedResponse> {
    Ok(AuthorizedResponse {
        authorized: ASSETS.has(deps.storage, &asset),
    })
}

/// Unset entries yield an empty string, never an error.
pub fn query_asset_address(deps: Deps, asset: String, chain_id: u64) -> StdResult<AssetAddressResponse> {
    Ok(AssetAddressResponse {
        address: ASSET_ADDRESSES
            .may_load(deps.storage, (&asset, chain_id))?
            .unwrap_or_default(),
    })
}

pub fn query_chains(deps: Deps) -> StdResult<ChainsResponse> {
    let chain_ids = CHAINS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(ChainsResponse { chain_ids })
}

pub fn query_assets(deps: Deps) -> StdResult<AssetsResponse> {
    let assets = ASSETS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(AssetsResponse { assets })
}

pub fn query_operators(deps: Deps) -> StdResult<OperatorsResponse> {
    let operators = OPERATORS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|entry| {
            entry.map(|(role, account)| OperatorEntry {
                role,
                account,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(OperatorsResponse { operators })
}
