//! Query handlers for the vault contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{AssetModeResponse, BalanceResponse, ConfigResponse};
use crate::state::{ASSET_MODES, CONFIG, USER_BALANCES, VAULT_BALANCES};

pub fn query_user_balance(deps: Deps, account: String, asset: String) -> StdResult<BalanceResponse> {
    Ok(BalanceResponse {
        amount: USER_BALANCES
            .may_load(deps.storage, (&account, &asset))?
            .unwrap_or_default(),
    })
}

pub fn query_vault_balance(deps: Deps, asset: String) -> StdResult<BalanceResponse> {
    Ok(BalanceResponse {
        amount: VAULT_BALANCES
            .may_load(deps.storage, &asset)?
            .unwrap_or_default(),
    })
}

pub fn query_asset_mode(deps: Deps, asset: String) -> StdResult<AssetModeResponse> {
    Ok(AssetModeResponse {
        mode: ASSET_MODES.may_load(deps.storage, &asset)?,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        registry: config.registry,
        native_denom: config.native_denom,
    })
}
