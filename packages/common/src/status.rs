//! Operation lifecycle status.

use cosmwasm_schema::cw_serde;

/// Which role a chain plays for a given operation record.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Side {
    /// Funds were escrowed here; the record was created by the entry point.
    Origin,
    /// Value is released or minted here; the record was created by a fee lock.
    Destination,
}

/// Lifecycle status of an operation record.
///
/// "None" is represented by the absence of a record. `Closed`, `Finalized`
/// and `Cancelled` are terminal; records are retained for audit and never
/// deleted.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum OperationStatus {
    // Origin side
    Created,
    FeesLocked,
    Ready,
    Closed,
    // Destination side
    FeesDeposited,
    FeesConfirmed,
    Finalized,
    // Either side
    Cancelled,
}

impl OperationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Created => "created",
            OperationStatus::FeesLocked => "fees_locked",
            OperationStatus::Ready => "ready",
            OperationStatus::Closed => "closed",
            OperationStatus::FeesDeposited => "fees_deposited",
            OperationStatus::FeesConfirmed => "fees_confirmed",
            OperationStatus::Finalized => "finalized",
            OperationStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OperationStatus::Closed | OperationStatus::Finalized | OperationStatus::Cancelled
        )
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block heights at which an operation crossed each phase boundary.
#[cw_serde]
#[derive(Default)]
pub struct BlockCheckpoints {
    /// Height of origin-side creation.
    pub creation_block: Option<u64>,
    /// Height of destination-side fee deposit.
    pub fee_deposit_block: Option<u64>,
    /// Height at which the fee lock was confirmed.
    pub confirmation_block: Option<u64>,
    /// Height of the terminal transition.
    pub finalization_block: Option<u64>,
}
