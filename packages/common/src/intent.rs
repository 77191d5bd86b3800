//! The transfer intent tuple.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// The seven-field tuple describing one cross-chain transfer.
///
/// The sender signs the operation hash of this tuple; both chains recompute
/// the hash independently, so the tuple travels with every confirmation call.
#[cw_serde]
pub struct TransferIntent {
    /// Sender identifier (the signer id recovered from the signature).
    pub from: String,
    /// Recipient account on the destination chain.
    pub to: String,
    /// Chain id where funds are escrowed.
    pub origin_chain_id: u64,
    /// Chain id where value is released or minted.
    pub destination_chain_id: u64,
    /// Protocol-level asset name (resolved per chain via the registry).
    pub asset: String,
    /// Transfer amount in the asset's smallest unit.
    pub amount: Uint128,
    /// The sender's strictly-increasing transfer nonce.
    pub nonce: u64,
}

impl TransferIntent {
    /// Canonical 32-byte operation hash of this intent.
    pub fn operation_hash(&self) -> [u8; 32] {
        crate::hash::compute_operation_hash(self)
    }
}
