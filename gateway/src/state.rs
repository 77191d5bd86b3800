//! State definitions for the gateway contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info.
pub const CONTRACT_NAME: &str = "crates.io:spanbridge-gateway";

/// Contract version for cw2 migration info.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract configuration.
#[cw_serde]
pub struct Config {
    /// The registry resolving roles, allow-lists and asset addresses.
    pub registry: Addr,
    /// Denom of this chain's native asset.
    pub native_denom: String,
    /// This chain's id in the protocol's chain numbering.
    pub chain_id: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Next expected transfer nonce per sender. Absent means zero.
pub const NONCES: Map<&str, u64> = Map::new("nonces");
