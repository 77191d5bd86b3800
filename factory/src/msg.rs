//! Message types for the factory contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the registry contract.
    pub registry: String,
    /// Code id for wrapped-asset cw20 instantiation.
    pub asset_code_id: u64,
    /// This chain's id in the protocol's chain numbering.
    pub chain_id: u64,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Create a wrapped asset. Fails if the symbol is already registered.
    /// Minting authority goes to the vault; the address is registered with
    /// the registry for this chain.
    ///
    /// Authorization: Admin only
    CreateAsset { name: String, symbol: String },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Address of a wrapped asset by symbol, if created.
    #[returns(AssetAddressResponse)]
    AssetAddress { symbol: String },

    /// Enumerate all wrapped assets created by this factory.
    #[returns(ListAssetsResponse)]
    ListAssets {},

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct AssetAddressResponse {
    pub address: Option<Addr>,
}

#[cw_serde]
pub struct ListAssetsResponse {
    pub assets: Vec<AssetEntry>,
}

#[cw_serde]
pub struct AssetEntry {
    pub symbol: String,
    pub address: Addr,
}

#[cw_serde]
pub struct ConfigResponse {
    pub registry: Addr,
    pub asset_code_id: u64,
    pub chain_id: u64,
}
