//! Message types for the registry contract.

use common::Role;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// The account bound to the Admin role.
    pub admin: String,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Write a typed key/value slot.
    ///
    /// Authorization: Admin only
    SetSlot { key: String, value: Binary },

    /// Bind an account to an operator role.
    ///
    /// Authorization: Admin only
    UpdateOperator { role: Role, account: String },

    /// Authorize a chain id. Idempotent.
    ///
    /// Authorization: Admin only
    AddChain { chain_id: u64 },

    /// Authorize several chain ids at once. Idempotent.
    ///
    /// Authorization: Admin only
    AddChains { chain_ids: Vec<u64> },

    /// Authorize an asset name. Idempotent.
    ///
    /// Authorization: Admin only
    AddAsset { asset: String },

    /// Authorize several asset names at once. Idempotent.
    ///
    /// Authorization: Admin only
    AddAssets { assets: Vec<String> },

    /// Register an asset's identifier on a chain. Fails if the (asset, chain)
    /// pair is already set, or if either the chain or the asset is not
    /// authorized.
    ///
    /// Authorization: Admin or the Factory operator
    SetAssetAddress {
        asset: String,
        chain_id: u64,
        address: String,
    },

    /// Batch variant of SetAssetAddress. All three arrays must have equal
    /// lengths.
    ///
    /// Authorization: Admin or the Factory operator
    SetAssetAddresses {
        assets: Vec<String>,
        chain_ids: Vec<u64>,
        addresses: Vec<String>,
    },

    /// Correct an existing asset address. Fails if no prior value exists.
    ///
    /// Authorization: Admin only
    UpdateAssetAddress {
        asset: String,
        chain_id: u64,
        address: String,
    },

    /// Batch variant of UpdateAssetAddress.
    ///
    /// Authorization: Admin only
    UpdateAssetAddresses {
        assets: Vec<String>,
        chain_ids: Vec<u64>,
        addresses: Vec<String>,
    },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Read a typed key/value slot. Unset slots yield `None`.
    #[returns(SlotResponse)]
    Slot { key: String },

    /// Read the account bound to a role. Unbound roles yield `None`.
    #[returns(OperatorResponse)]
    Operator { role: Role },

    /// Whether a chain id is in the authorized set.
    #[returns(AuthorizedResponse)]
    IsChainAuthorized { chain_id: u64 },

    /// Whether an asset name is in the authorized set.
    #[returns(AuthorizedResponse)]
    IsAssetAuthorized { asset: String },

    /// Read an asset's identifier on a chain. Unset entries yield an empty
    /// string rather than an error.
    #[returns(AssetAddressResponse)]
    AssetAddress { asset: String, chain_id: u64 },

    /// Enumerate the authorized chain set.
    #[returns(ChainsResponse)]
    Chains {},

    /// Enumerate the authorized asset set.
    #[returns(AssetsResponse)]
    Assets {},

    /// Enumerate the operator-role table.
    #[returns(OperatorsResponse)]
    Operators {},
}

#[cw_serde]
pub struct SlotResponse {
    pub value: Option<Binary>,
}

#[cw_serde]
pub struct OperatorResponse {
    pub account: Option<Addr>,
}

#[cw_serde]
pub struct AuthorizedResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct AssetAddressResponse {
    /// The registered identifier, or `""` when unset.
    pub address: String,
}

#[cw_serde]
pub struct ChainsResponse {
    pub chain_ids: Vec<u64>,
}

#[cw_serde]
pub struct AssetsResponse {
    pub assets: Vec<String>,
}

#[cw_serde]
pub struct OperatorsResponse {
    pub operators: Vec<OperatorEntry>,
}

#[cw_serde]
pub struct OperatorEntry {
    pub role: String,
    pub account: Addr,
}
