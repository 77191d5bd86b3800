//! Canonical operation hash computation.
//!
//! Every operation is identified by a 32-byte keccak256 digest of its transfer
//! intent. Both chains must compute a bit-identical digest from the same tuple,
//! so the byte layout is fixed here and must never change:
//!
//! # Byte layout (fields concatenated in this exact order)
//! - `from`:                 u64 BE byte length, then UTF-8 bytes
//! - `to`:                   u64 BE byte length, then UTF-8 bytes
//! - `origin_chain_id`:      u64 BE (8 bytes)
//! - `destination_chain_id`: u64 BE (8 bytes)
//! - `asset`:                u64 BE byte length, then UTF-8 bytes
//! - `amount`:               u128 BE, left-padded to 32 bytes
//! - `nonce`:                u64 BE, left-padded to 32 bytes
//!
//! Variable-length fields carry a length prefix so that no permutation or
//! re-segmentation of field contents can produce the same preimage.

use tiny_keccak::{Hasher, Keccak};

use crate::intent::TransferIntent;

/// Compute keccak256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the canonical 32-byte operation hash for a transfer intent.
pub fn compute_operation_hash(intent: &TransferIntent) -> [u8; 32] {
    let mut data = Vec::with_capacity(
        3 * 8 + intent.from.len() + intent.to.len() + intent.asset.len() + 8 + 8 + 32 + 32,
    );

    push_str(&mut data, &intent.from);
    push_str(&mut data, &intent.to);
    data.extend_from_slice(&intent.origin_chain_id.to_be_bytes());
    data.extend_from_slice(&intent.destination_chain_id.to_be_bytes());
    push_str(&mut data, &intent.asset);

    // amount as uint256: u128 big-endian in the low 16 bytes, high 16 zero
    let mut amount = [0u8; 32];
    amount[16..].copy_from_slice(&intent.amount.u128().to_be_bytes());
    data.extend_from_slice(&amount);

    // nonce as uint256: u64 big-endian in the low 8 bytes
    let mut nonce = [0u8; 32];
    nonce[24..].copy_from_slice(&intent.nonce.to_be_bytes());
    data.extend_from_slice(&nonce);

    keccak256(&data)
}

/// Derive the signer identifier from a recovered secp256k1 public key.
///
/// Accepts the 65-byte uncompressed form (0x04-prefixed) or the raw 64-byte
/// coordinate pair; the identifier is the lowercase hex of the last 20 bytes
/// of the keccak256 digest of the coordinates, with a `0x` prefix.
pub fn derive_signer_id(pubkey: &[u8]) -> Option<String> {
    let coords = match pubkey.len() {
        65 if pubkey[0] == 0x04 => &pubkey[1..],
        64 => pubkey,
        _ => return None,
    };
    let digest = keccak256(coords);
    let mut id = String::with_capacity(42);
    id.push_str("0x");
    for byte in &digest[12..] {
        id.push_str(&format!("{:02x}", byte));
    }
    Some(id)
}

/// Convert a 32-byte hash to a hex string (for attributes/logging).
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a hex string (with or without 0x prefix) into a 32-byte array.
pub fn hex_to_bytes32(input: &str) -> Result<[u8; 32], &'static str> {
    let input = input.strip_prefix("0x").unwrap_or(input);
    if input.len() != 64 {
        return Err("Invalid hex length: expected 64 characters");
    }
    let raw = hex::decode(input).map_err(|_| "Invalid hex character")?;
    let mut result = [0u8; 32];
    result.copy_from_slice(&raw);
    Ok(result)
}

fn push_str(data: &mut Vec<u8>, value: &str) {
    data.extend_from_slice(&(value.len() as u64).to_be_bytes());
    data.extend_from_slice(value.as_bytes());
}
