//! Message types for the vault contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::AssetMode;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the registry contract.
    pub registry: String,
    /// Denom of this chain's native asset.
    pub native_denom: String,
}

/// Execute messages. All ledger mutations are gated to the Bridge and Relay
/// operators (plus the admin); other callers fail `CallerLacksRole`.
#[cw_serde]
pub enum ExecuteMsg {
    /// Credit a native deposit to (account, native denom). The attached funds
    /// must be exactly `amount` of the native denom.
    DepositNative { account: String, amount: Uint128 },

    /// Credit a token deposit to (account, asset), pulling `amount` from
    /// `account` via cw20 allowance to this contract.
    DepositAsset {
        account: String,
        asset: String,
        amount: Uint128,
    },

    /// Move `amount` from (account, asset) pending balance into custody.
    /// Fails rather than letting the pending balance go negative.
    FinalizeDeposit {
        account: String,
        asset: String,
        amount: Uint128,
    },

    /// Mint wrapped supply to `account`. This contract is the sole minter.
    Mint {
        account: String,
        asset: String,
        amount: Uint128,
    },

    /// Burn wrapped supply from `account` (requires cw20 allowance).
    Burn {
        account: String,
        asset: String,
        amount: Uint128,
    },

    /// Release `amount` of the native asset from custody to `account`.
    /// Fails with `InsufficientBalance("vault")` on underflow.
    UnlockNative { account: String, amount: Uint128 },

    /// Release `amount` of a token asset from custody to `account`.
    UnlockAsset {
        account: String,
        asset: String,
        amount: Uint128,
    },

    /// Return a pending (unfinalized) deposit to its depositor. Used by
    /// origin-side cancellation.
    RefundDeposit {
        account: String,
        asset: String,
        amount: Uint128,
    },

    /// Record the payout mode for an asset id.
    ///
    /// Authorization: Admin or the Factory operator
    RegisterAsset { asset: String, mode: AssetMode },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Pending balance for (account, asset).
    #[returns(BalanceResponse)]
    UserBalance { account: String, asset: String },

    /// Confirmed custody balance for an asset.
    #[returns(BalanceResponse)]
    VaultBalance { asset: String },

    /// Payout mode for an asset, if registered.
    #[returns(AssetModeResponse)]
    AssetMode { asset: String },

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct BalanceResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct AssetModeResponse {
    pub mode: Option<AssetMode>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub registry: Addr,
    pub native_denom: String,
}
