//! State definitions for the factory contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info.
pub const CONTRACT_NAME: &str = "crates.io:spanbridge-factory";

/// Contract version for cw2 migration info.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for wrapped-asset instantiation.
pub const INSTANTIATE_ASSET_REPLY_ID: u64 = 1;

/// Contract configuration.
#[cw_serde]
pub struct Config {
    /// The registry resolving roles and receiving address registrations.
    pub registry: Addr,
    /// Code id the wrapped-asset cw20 is instantiated from.
    pub asset_code_id: u64,
    /// This chain's id in the protocol's chain numbering.
    pub chain_id: u64,
}

/// Creation in flight between the instantiate submessage and its reply.
#[cw_serde]
pub struct PendingAsset {
    pub name: String,
    pub symbol: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Instantiated wrapped assets. Key: symbol, value: token address.
pub const ASSETS: Map<&str, Addr> = Map::new("assets");

/// The creation awaiting its instantiate reply, if any.
pub const PENDING: Item<PendingAsset> = Item::new("pending");
