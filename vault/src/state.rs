//! State definitions for the vault contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info.
pub const CONTRACT_NAME: &str = "crates.io:spanbridge-vault";

/// Contract version for cw2 migration info.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract configuration.
#[cw_serde]
pub struct Config {
    /// The registry resolving roles and collaborators.
    pub registry: Addr,
    /// Denom of this chain's native asset.
    pub native_denom: String,
}

/// How a completed operation pays out in this asset.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum AssetMode {
    /// Escrowed funds are unlocked from the vault balance.
    LockUnlock,
    /// Wrapped supply is minted under this contract's minting authority.
    MintBurn,
}

impl AssetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetMode::LockUnlock => "lock_unlock",
            AssetMode::MintBurn => "mint_burn",
        }
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Pending (unfinalized) deposits.
/// Key: (account, asset id), value: amount.
pub const USER_BALANCES: Map<(&str, &str), Uint128> = Map::new("user_balances");

/// Confirmed custody holdings.
/// Key: asset id, value: amount. Invariant: never decremented below zero.
pub const VAULT_BALANCES: Map<&str, Uint128> = Map::new("vault_balances");

/// Payout mode per asset id.
pub const ASSET_MODES: Map<&str, AssetMode> = Map::new("asset_modes");
