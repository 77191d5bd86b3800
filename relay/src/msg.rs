//! Message types for the relay contract.

use common::TransferIntent;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

use crate::state::{FeeEscrow, OperationRecord};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Confirmation depth for one chain.
#[cw_serde]
pub struct ChainConfirmations {
    pub chain_id: u64,
    pub blocks: u64,
}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the registry contract.
    pub registry: String,
    /// This chain's id in the protocol's chain numbering.
    pub chain_id: u64,
    /// Initial confirmation depths per chain id.
    pub required_confirmations: Vec<ChainConfirmations>,
}

/// Execute messages. The Bridge operator creates records, the Oracle operator
/// drives confirmations, and `ConfirmFeesAndDeposit` is open to anyone once
/// its depth gate passes.
#[cw_serde]
pub enum ExecuteMsg {
    /// Origin side: record a new operation at status `Created`.
    ///
    /// Authorization: Bridge operator
    CreateOperation {
        intent: TransferIntent,
        signature: Binary,
    },

    /// Origin side: the oracle reports that destination fees were locked.
    /// `Created -> FeesLocked`.
    ///
    /// Authorization: Oracle operator
    ReceiveFeeLockConfirmation {
        operation_hash: Binary,
        remote_block: u64,
    },

    /// Origin side: finalize the escrowed deposit into custody once this
    /// chain is `required_confirmations(origin)` blocks past creation.
    /// `FeesLocked -> Ready`.
    ///
    /// Authorization: any caller
    ConfirmFeesAndDeposit { operation_hash: Binary },

    /// Origin side: the oracle reports destination-side finalization.
    /// `Ready -> Closed`.
    ///
    /// Authorization: Oracle operator
    ReceiveFinalizedOperation {
        operation_hash: Binary,
        remote_block: u64,
    },

    /// Origin side: cancel before the deposit is finalized into custody and
    /// refund it to the sender. Allowed from `Created` or `FeesLocked`.
    ///
    /// Authorization: Oracle operator
    ReceiveCancelOperation { operation_hash: Binary },

    /// Destination side: escrow the attached fee funds and open the partial
    /// record at status `FeesDeposited`.
    ///
    /// Authorization: Bridge operator
    LockDestinationFees {
        operation_hash: Binary,
        origin_chain_id: u64,
        destination_chain_id: u64,
        /// Account refunded if the operation is cancelled.
        payer: String,
    },

    /// Destination side: the oracle delivers the full tuple once this chain
    /// is `required_confirmations(destination)` blocks past the fee deposit.
    /// `FeesDeposited -> FeesConfirmed`.
    ///
    /// Authorization: Oracle operator
    SendFeeLockConfirmation {
        operation_hash: Binary,
        intent: TransferIntent,
    },

    /// Destination side: release value to the recipient (unlock or mint per
    /// the asset's registered mode) and pay the fee escrow to the oracle.
    /// `FeesConfirmed -> Finalized`.
    ///
    /// Authorization: Oracle operator
    CompleteOperation {
        operation_hash: Binary,
        intent: TransferIntent,
    },

    /// Destination side: cancel before finalization and refund the fee
    /// escrow to its payer. Allowed from `FeesDeposited` or `FeesConfirmed`.
    ///
    /// Authorization: Oracle operator
    EmitCancelOperation { operation_hash: Binary },

    /// Update the confirmation depth for a chain.
    ///
    /// Authorization: Admin only
    SetRequiredConfirmations { chain_id: u64, blocks: u64 },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Full record for an operation hash, if tracked.
    #[returns(OperationResponse)]
    Operation { operation_hash: Binary },

    /// Operation hashes created by `account` on this chain, oldest first.
    #[returns(UserOperationsResponse)]
    UserOperations { account: String },

    /// Configured confirmation depth for a chain, if any.
    #[returns(RequiredConfirmationsResponse)]
    RequiredConfirmations { chain_id: u64 },

    /// Fee escrow held for an operation, if any.
    #[returns(FeeEscrowResponse)]
    FeeEscrow { operation_hash: Binary },

    /// Non-terminal operations whose newest checkpoint is more than
    /// `older_than_blocks` blocks in the past. Watcher surface for stuck
    /// operations.
    #[returns(StaleOperationsResponse)]
    StaleOperations { older_than_blocks: u64 },

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct OperationResponse {
    pub record: Option<OperationRecord>,
}

#[cw_serde]
pub struct UserOperationsResponse {
    pub hashes: Vec<Binary>,
}

#[cw_serde]
pub struct RequiredConfirmationsResponse {
    pub blocks: Option<u64>,
}

#[cw_serde]
pub struct FeeEscrowResponse {
    pub escrow: Option<FeeEscrow>,
}

#[cw_serde]
pub struct StaleOperation {
    pub hash: Binary,
    pub record: OperationRecord,
}

#[cw_serde]
pub struct StaleOperationsResponse {
    pub operations: Vec<StaleOperation>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub registry: Addr,
    pub chain_id: u64,
}
