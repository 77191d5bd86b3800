//! Origin-side handlers: the chain where funds were escrowed.

use common::{BlockCheckpoints, OperationStatus, Role, Side, TransferIntent};
use cosmwasm_std::{to_json_binary, Binary, DepsMut, Env, MessageInfo, Response, WasmMsg};
use registry::Registry;

use crate::error::ContractError;
use crate::execute::{
    ensure_confirmation_depth, ensure_role, expect_status, load_record, operation_event,
    parse_hash, resolve_local_asset,
};
use crate::state::{OperationRecord, CONFIG, OPERATIONS, USER_OPERATIONS};

/// Open a new origin-side record at `Created`. Called by the entry point
/// after it has escrowed the deposit in the vault.
pub fn create_operation(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    intent: TransferIntent,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    ensure_role(&deps.as_ref(), &registry, Role::Bridge, &info.sender)?;

    let hash = intent.operation_hash();
    if OPERATIONS.has(deps.storage, &hash) {
        return Err(ContractError::AlreadyExists {
            hash: hex::encode(hash),
        });
    }

    let record = OperationRecord {
        intent: Some(intent.clone()),
        signature: Some(signature),
        status: OperationStatus::Created,
        side: Side::Origin,
        checkpoints: BlockCheckpoints {
            creation_block: Some(env.block.height),
            ..Default::default()
        },
    };
    OPERATIONS.save(deps.storage, &hash, &record)?;

    USER_OPERATIONS.update(deps.storage, &intent.from, |hashes| {
        let mut hashes = hashes.unwrap_or_default();
        hashes.push(Binary::from(hash.as_slice()));
        Ok::<_, ContractError>(hashes)
    })?;

    Ok(Response::new()
        .add_event(operation_event(
            "operation_created",
            &hash,
            env.block.height,
            Some(&intent),
        ))
        .add_attribute("method", "create_operation"))
}

/// Oracle report that the destination chain locked its fees.
/// `Created -> FeesLocked`.
pub fn receive_fee_lock_confirmation(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    operation_hash: Binary,
    remote_block: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    ensure_role(&deps.as_ref(), &registry, Role::Oracle, &info.sender)?;

    let hash = parse_hash(&operation_hash)?;
    let mut record = load_record(deps.storage, hash)?;
    expect_status(&record, OperationStatus::Created)?;

    record.status = OperationStatus::FeesLocked;
    OPERATIONS.save(deps.storage, hash, &record)?;

    Ok(Response::new()
        .add_event(
            operation_event(
                "fees_locked_confirmed",
                hash,
                env.block.height,
                record.intent.as_ref(),
            )
            .add_attribute("remote_block", remote_block.to_string()),
        )
        .add_attribute("method", "receive_fee_lock_confirmation"))
}

/// Finalize the escrowed deposit into custody once this chain is deep enough
/// past the creation block. Open to any caller: the depth gate and the status
/// check are the authorization. `FeesLocked -> Ready`.
pub fn confirm_fees_and_deposit(
    deps: DepsMut,
    env: Env,
    operation_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);

    let hash = parse_hash(&operation_hash)?;
    let mut record = load_record(deps.storage, hash)?;
    expect_status(&record, OperationStatus::FeesLocked)?;

    let intent = record
        .intent
        .clone()
        .ok_or_else(|| ContractError::OperationNotFound {
            hash: hex::encode(hash),
        })?;
    let creation_block = record.checkpoints.creation_block.unwrap_or(0);
    ensure_confirmation_depth(
        deps.storage,
        hash,
        intent.origin_chain_id,
        creation_block,
        env.block.height,
    )?;

    record.status = OperationStatus::Ready;
    record.checkpoints.confirmation_block = Some(env.block.height);
    OPERATIONS.save(deps.storage, hash, &record)?;

    let local_asset = resolve_local_asset(&deps.as_ref(), &registry, &intent.asset)?;
    let vault_addr = registry.require_operator(&deps.querier, Role::Vault)?;
    let finalize = WasmMsg::Execute {
        contract_addr: vault_addr.to_string(),
        msg: to_json_binary(&vault::msg::ExecuteMsg::FinalizeDeposit {
            account: intent.from.clone(),
            asset: local_asset,
            amount: intent.amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(finalize)
        .add_event(operation_event(
            "fees_locked_and_deposit_confirmed",
            hash,
            env.block.height,
            Some(&intent),
        ))
        .add_attribute("method", "confirm_fees_and_deposit"))
}

/// Oracle report that the destination chain finalized. `Ready -> Closed`.
pub fn receive_finalized_operation(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    operation_hash: Binary,
    remote_block: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    ensure_role(&deps.as_ref(), &registry, Role::Oracle, &info.sender)?;

    let hash = parse_hash(&operation_hash)?;
    let mut record = load_record(deps.storage, hash)?;
    expect_status(&record, OperationStatus::Ready)?;

    record.status = OperationStatus::Closed;
    record.checkpoints.finalization_block = Some(env.block.height);
    OPERATIONS.save(deps.storage, hash, &record)?;

    Ok(Response::new()
        .add_event(
            operation_event(
                "operation_closed",
                hash,
                env.block.height,
                record.intent.as_ref(),
            )
            .add_attribute("remote_block", remote_block.to_string()),
        )
        .add_attribute("method", "receive_finalized_operation"))
}

/// Cancel before the deposit was finalized into custody and refund the
/// sender's pending balance. Allowed from `Created` or `FeesLocked`; once
/// `Ready` the deposit has moved into the vault balance and is no longer
/// refundable here.
pub fn receive_cancel_operation(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    operation_hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    ensure_role(&deps.as_ref(), &registry, Role::Oracle, &info.sender)?;

    let hash = parse_hash(&operation_hash)?;
    let mut record = load_record(deps.storage, hash)?;
    if !matches!(
        record.status,
        OperationStatus::Created | OperationStatus::FeesLocked
    ) {
        return Err(ContractError::invalid_status(
            "created or fees_locked",
            record.status.as_str(),
        ));
    }

    let intent = record
        .intent
        .clone()
        .ok_or_else(|| ContractError::OperationNotFound {
            hash: hex::encode(hash),
        })?;

    record.status = OperationStatus::Cancelled;
    record.checkpoints.finalization_block = Some(env.block.height);
    OPERATIONS.save(deps.storage, hash, &record)?;

    let local_asset = resolve_local_asset(&deps.as_ref(), &registry, &intent.asset)?;
    let vault_addr = registry.require_operator(&deps.querier, Role::Vault)?;
    let refund = WasmMsg::Execute {
        contract_addr: vault_addr.to_string(),
        msg: to_json_binary(&vault::msg::ExecuteMsg::RefundDeposit {
            account: intent.from.clone(),
            asset: local_asset,
            amount: intent.amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(refund)
        .add_event(operation_event(
            "operation_cancelled",
            hash,
            env.block.height,
            Some(&intent),
        ))
        .add_attribute("method", "receive_cancel_operation"))
}
