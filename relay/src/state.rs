//! State definitions for the relay contract.

use common::{BlockCheckpoints, OperationStatus, Side, TransferIntent};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Coin};
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info.
pub const CONTRACT_NAME: &str = "crates.io:spanbridge-relay";

/// Contract version for cw2 migration info.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract configuration.
#[cw_serde]
pub struct Config {
    /// The registry resolving roles and asset addresses.
    pub registry: Addr,
    /// This chain's id in the protocol's chain numbering.
    pub chain_id: u64,
}

/// One tracked operation, keyed by its 32-byte hash.
#[cw_serde]
pub struct OperationRecord {
    /// The full transfer tuple. Known at creation on the origin side; on the
    /// destination side it arrives with the fee-lock confirmation.
    pub intent: Option<TransferIntent>,
    /// Sender signature over the operation hash, retained for audit.
    pub signature: Option<Binary>,
    pub status: OperationStatus,
    pub side: Side,
    pub checkpoints: BlockCheckpoints,
}

impl OperationRecord {
    /// Height of the most recent phase boundary this record crossed.
    pub fn last_checkpoint(&self) -> u64 {
        let c = &self.checkpoints;
        [
            c.creation_block,
            c.fee_deposit_block,
            c.confirmation_block,
            c.finalization_block,
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
    }
}

/// Destination-side fee held until finalization or cancellation.
#[cw_serde]
pub struct FeeEscrow {
    /// Account refunded on cancellation.
    pub payer: Addr,
    /// The native funds attached to the fee deposit.
    pub funds: Vec<Coin>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// All operations this chain has seen. Key: 32-byte operation hash.
/// Records are never deleted.
pub const OPERATIONS: Map<&[u8], OperationRecord> = Map::new("operations");

/// Confirmation depth required per chain id before gated transitions fire.
pub const REQUIRED_CONFIRMATIONS: Map<u64, u64> = Map::new("required_confirmations");

/// Operation hashes per sender, in creation order. Origin side only.
pub const USER_OPERATIONS: Map<&str, Vec<Binary>> = Map::new("user_operations");

/// Fee escrow per operation hash. Destination side only; removed on payout
/// or refund.
pub const FEE_ESCROW: Map<&[u8], FeeEscrow> = Map::new("fee_escrow");
