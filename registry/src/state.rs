//! State definitions for the registry contract.

use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::Map;

/// Contract name for cw2 migration info.
pub const CONTRACT_NAME: &str = "crates.io:spanbridge-registry";

/// Contract version for cw2 migration info.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Typed key/value slots (admin-gated writes, open reads).
pub const SLOTS: Map<&str, Binary> = Map::new("slots");

/// Operator-role table. Key: `Role::as_str()`, value: the bound account.
///
/// Doubles as the component locator for deferred binding.
pub const OPERATORS: Map<&str, Addr> = Map::new("operators");

/// Authorized chain set. Key: chain id. Insertion is idempotent; no removal
/// path exists (membership is append-only).
pub const CHAINS: Map<u64, bool> = Map::new("chains");

/// Authorized asset set. Key: protocol-level asset name. Append-only.
pub const ASSETS: Map<&str, bool> = Map::new("assets");

/// Asset address table. Key: (asset name, chain id), value: the asset's
/// identifier on that chain (native denom or token contract address).
/// Write-once via SetAssetAddress; corrections go through UpdateAssetAddress.
pub const ASSET_ADDRESSES: Map<(&str, u64), String> = Map::new("asset_addresses");
