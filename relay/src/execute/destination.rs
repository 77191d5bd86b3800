//! Destination-side handlers: the chain where value is released or minted.

use common::{BlockCheckpoints, OperationStatus, Role, Side, TransferIntent};
use cosmwasm_std::{
    to_json_binary, BankMsg, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg,
};
use registry::Registry;
use vault::AssetMode;

use crate::error::ContractError;
use crate::execute::{
    ensure_confirmation_depth, ensure_role, expect_status, load_record, operation_event,
    parse_hash, resolve_local_asset,
};
use crate::state::{FeeEscrow, OperationRecord, CONFIG, FEE_ESCROW, OPERATIONS};

/// Escrow the attached fee and open the partial record at `FeesDeposited`.
/// The tuple is not yet known here; it arrives with the oracle's fee-lock
/// confirmation.
pub fn lock_destination_fees(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    operation_hash: Binary,
    origin_chain_id: u64,
    destination_chain_id: u64,
    payer: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    ensure_role(&deps.as_ref(), &registry, Role::Bridge, &info.sender)?;

    if info.funds.is_empty() {
        return Err(ContractError::NoFeesAttached);
    }

    let hash = parse_hash(&operation_hash)?;
    if OPERATIONS.has(deps.storage, hash) {
        return Err(ContractError::AlreadyExists {
            hash: hex::encode(hash),
        });
    }

    let record = OperationRecord {
        intent: None,
        signature: None,
        status: OperationStatus::FeesDeposited,
        side: Side::Destination,
        checkpoints: BlockCheckpoints {
            fee_deposit_block: Some(env.block.height),
            ..Default::default()
        },
    };
    OPERATIONS.save(deps.storage, hash, &record)?;

    let payer = deps.api.addr_validate(&payer)?;
    FEE_ESCROW.save(
        deps.storage,
        hash,
        &FeeEscrow {
            payer,
            funds: info.funds,
        },
    )?;

    Ok(Response::new()
        .add_event(
            operation_event("fees_deposited", hash, env.block.height, None)
                .add_attribute("origin_chain_id", origin_chain_id.to_string())
                .add_attribute("destination_chain_id", destination_chain_id.to_string()),
        )
        .add_attribute("method", "lock_destination_fees"))
}

/// Oracle delivers the full tuple once this chain is deep enough past the
/// fee deposit. The tuple must hash to the stored key.
/// `FeesDeposited -> FeesConfirmed`.
pub fn send_fee_lock_confirmation(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    operation_hash: Binary,
    intent: TransferIntent,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    ensure_role(&deps.as_ref(), &registry, Role::Oracle, &info.sender)?;

    let hash = parse_hash(&operation_hash)?;
    let mut record = load_record(deps.storage, hash)?;
    expect_status(&record, OperationStatus::FeesDeposited)?;

    if intent.operation_hash().as_slice() != hash {
        return Err(ContractError::HashMismatch);
    }

    let fee_deposit_block = record.checkpoints.fee_deposit_block.unwrap_or(0);
    ensure_confirmation_depth(
        deps.storage,
        hash,
        config.chain_id,
        fee_deposit_block,
        env.block.height,
    )?;

    record.intent = Some(intent.clone());
    record.status = OperationStatus::FeesConfirmed;
    record.checkpoints.confirmation_block = Some(env.block.height);
    OPERATIONS.save(deps.storage, hash, &record)?;

    Ok(Response::new()
        .add_event(operation_event(
            "fees_locked_confirmed",
            hash,
            env.block.height,
            Some(&intent),
        ))
        .add_attribute("method", "send_fee_lock_confirmation"))
}

/// Release value to the recipient and pay the fee escrow to the oracle
/// operator. `FeesConfirmed -> Finalized`.
pub fn complete_operation(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    operation_hash: Binary,
    intent: TransferIntent,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);
    ensure_role(&deps.as_ref(), &registry, Role::Oracle, &info.sender)?;

    let hash = parse_hash(&operation_hash)?;
    let mut record = load_record(deps.storage, hash)?;
    expect_status(&record, OperationStatus::FeesConfirmed)?;

    if intent.operation_hash().as_slice() != hash {
        return Err(ContractError::HashMismatch);
    }

    record.status = OperationStatus::Finalized;
    record.checkpoints.finalization_block = Some(env.block.height);
    OPERATIONS.save(deps.storage, hash, &record)?;

    let local_asset = resolve_local_asset(&deps.as_ref(), &registry, &intent.asset)?;
    let vault_addr = registry.require_operator(&deps.querier, Role::Vault)?;

    let mode: vault::msg::AssetModeResponse = deps.querier.query_wasm_smart(
        &vault_addr,
        &vault::msg::QueryMsg::AssetMode {
            asset: local_asset.clone(),
        },
    )?;
    let mode = mode.mode.ok_or_else(|| ContractError::AssetModeNotSet {
        asset: local_asset.clone(),
    })?;

    let payout = match mode {
        AssetMode::MintBurn => vault::msg::ExecuteMsg::Mint {
            account: intent.to.clone(),
            asset: local_asset.clone(),
            amount: intent.amount,
        },
        AssetMode::LockUnlock => {
            let vault_config: vault::msg::ConfigResponse = deps
                .querier
                .query_wasm_smart(&vault_addr, &vault::msg::QueryMsg::Config {})?;
            if local_asset == vault_config.native_denom {
                vault::msg::ExecuteMsg::UnlockNative {
                    account: intent.to.clone(),
                    amount: intent.amount,
                }
            } else {
                vault::msg::ExecuteMsg::UnlockAsset {
                    account: intent.to.clone(),
                    asset: local_asset.clone(),
                    amount: intent.amount,
                }
            }
        }
    };
    let payout = WasmMsg::Execute {
        contract_addr: vault_addr.to_string(),
        msg: to_json_binary(&payout)?,
        funds: vec![],
    };

    let mut messages: Vec<CosmosMsg> = vec![payout.into()];
    if let Some(escrow) = FEE_ESCROW.may_load(deps.storage, hash)? {
        let oracle = registry.require_operator(&deps.querier, Role::Oracle)?;
        messages.push(
            BankMsg::Send {
                to_address: oracle.to_string(),
                amount: escrow.funds,
            }
            .into(),
        );
        FEE_ESCROW.remove(deps.storage, hash);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_event(
            operation_event("operation_finalized", hash, env.block.height, Some(&intent))
                .add_attribute("payout_mode", mode.as_str())
                .add_attribute("local_asset", local_asset),
        )
        .add_attribute("method", "complete_operation"))
}

/// Cancel before finalization and refund the fee escrow to its payer.
/// Allowed from `FeesDeposited` or `FeesConfirmed`.
pub fn emit_cancel_operation(
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
        OperationStatus::FeesDeposited | OperationStatus::FeesConfirmed
    ) {
        return Err(ContractError::invalid_status(
            "fees_deposited or fees_confirmed",
            record.status.as_str(),
        ));
    }

    record.status = OperationStatus::Cancelled;
    record.checkpoints.finalization_block = Some(env.block.height);
    OPERATIONS.save(deps.storage, hash, &record)?;

    let mut response = Response::new();
    if let Some(escrow) = FEE_ESCROW.may_load(deps.storage, hash)? {
        response = response.add_message(BankMsg::Send {
            to_address: escrow.payer.to_string(),
            amount: escrow.funds,
        });
        FEE_ESCROW.remove(deps.storage, hash);
    }

    Ok(response
        .add_event(operation_event(
            "operation_cancelled",
            hash,
            env.block.height,
            record.intent.as_ref(),
        ))
        .add_attribute("method", "emit_cancel_operation"))
}
