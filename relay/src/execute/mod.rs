//! Execute handlers, split by which side of a transfer this chain plays.

pub mod admin;
pub mod destination;
pub mod origin;

use common::{OperationStatus, Role, TransferIntent};
use cosmwasm_std::{Addr, Binary, Deps, Event, Storage};
use registry::Registry;

use crate::error::ContractError;
use crate::state::{OperationRecord, CONFIG, OPERATIONS, REQUIRED_CONFIRMATIONS};

/// Validate a caller-supplied operation hash and borrow it as a storage key.
pub(crate) fn parse_hash(operation_hash: &Binary) -> Result<&[u8], ContractError> {
    if operation_hash.len() != 32 {
        return Err(ContractError::InvalidHashLength);
    }
    Ok(operation_hash.as_slice())
}

/// Caller must hold `role` or the Admin role.
pub(crate) fn ensure_role(
    deps: &Deps,
    registry: &Registry,
    role: Role,
    sender: &Addr,
) -> Result<(), ContractError> {
    if registry.has_role(&deps.querier, role, sender)?
        || registry.has_role(&deps.querier, Role::Admin, sender)?
    {
        return Ok(());
    }
    Err(ContractError::lacks_role(role.as_str()))
}

pub(crate) fn load_record(
    storage: &dyn Storage,
    hash: &[u8],
) -> Result<OperationRecord, ContractError> {
    OPERATIONS
        .may_load(storage, hash)?
        .ok_or_else(|| ContractError::OperationNotFound {
            hash: hex::encode(hash),
        })
}

pub(crate) fn expect_status(
    record: &OperationRecord,
    expected: OperationStatus,
) -> Result<(), ContractError> {
    if record.status != expected {
        return Err(ContractError::invalid_status(
            expected.as_str(),
            record.status.as_str(),
        ));
    }
    Ok(())
}

/// Depth gate: the current height must be at least `anchor + required(chain)`.
pub(crate) fn ensure_confirmation_depth(
    storage: &dyn Storage,
    hash: &[u8],
    chain_id: u64,
    anchor_block: u64,
    current_height: u64,
) -> Result<(), ContractError> {
    let required = REQUIRED_CONFIRMATIONS
        .may_load(storage, chain_id)?
        .ok_or(ContractError::ChainNotConfigured { chain_id })?;
    let required_height = anchor_block + required;
    if current_height < required_height {
        return Err(ContractError::ConfirmationNotReached {
            hash: hex::encode(hash),
            current_height,
            required_height,
        });
    }
    Ok(())
}

/// The asset's identifier on this chain, per the registry's address table.
pub(crate) fn resolve_local_asset(
    deps: &Deps,
    registry: &Registry,
    asset: &str,
) -> Result<String, ContractError> {
    let chain_id = CONFIG.load(deps.storage)?.chain_id;
    let local = registry.asset_address(&deps.querier, asset, chain_id)?;
    if local.is_empty() {
        return Err(ContractError::AssetNotRegistered {
            asset: asset.to_string(),
            chain_id,
        });
    }
    Ok(local)
}

/// Protocol event carrying the hash, the emission height, and the tuple
/// fields when the record knows them.
pub(crate) fn operation_event(
    name: &str,
    hash: &[u8],
    height: u64,
    intent: Option<&TransferIntent>,
) -> Event {
    let mut event = Event::new(name)
        .add_attribute("operation_hash", hex::encode(hash))
        .add_attribute("block_height", height.to_string());
    if let Some(intent) = intent {
        event = event
            .add_attribute("from", &intent.from)
            .add_attribute("to", &intent.to)
            .add_attribute("origin_chain_id", intent.origin_chain_id.to_string())
            .add_attribute(
                "destination_chain_id",
                intent.destination_chain_id.to_string(),
            )
            .add_attribute("asset", &intent.asset)
            .add_attribute("amount", intent.amount.to_string())
            .add_attribute("nonce", intent.nonce.to_string());
    }
    event
}
