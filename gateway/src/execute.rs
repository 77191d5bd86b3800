//! Execute handlers for the gateway contract.

use common::{derive_signer_id, Role, TransferIntent};
use cosmwasm_std::{
    to_json_binary, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use registry::Registry;

use crate::error::ContractError;
use crate::state::{CONFIG, NONCES};

/// 65-byte signature layout: r || s || recovery id.
const SIGNATURE_LEN: usize = 65;

#[allow(clippy::too_many_arguments)]
pub fn create_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    from: String,
    to: String,
    destination_chain_id: u64,
    asset: String,
    amount: Uint128,
    nonce: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);

    if from != info.sender.as_str() {
        return Err(ContractError::SenderMismatch);
    }

    let intent = TransferIntent {
        from: from.clone(),
        to,
        origin_chain_id: config.chain_id,
        destination_chain_id,
        asset: asset.clone(),
        amount,
        nonce,
    };
    let hash = intent.operation_hash();

    let signer = recover_signer(&deps.as_ref(), &hash, &signature)?;
    if signer != from {
        return Err(ContractError::InvalidSignature);
    }

    let current = NONCES.may_load(deps.storage, &from)?.unwrap_or(0);
    if nonce != current {
        return Err(ContractError::WrongNonce {
            expected: current,
            actual: nonce,
        });
    }
    NONCES.save(deps.storage, &from, &(current + 1))?;

    if !registry.is_chain_authorized(&deps.querier, destination_chain_id)? {
        return Err(ContractError::ChainNotAuthorized {
            chain_id: destination_chain_id,
        });
    }
    if !registry.is_asset_authorized(&deps.querier, &asset)? {
        return Err(ContractError::UnauthorizedAsset { asset });
    }
    let local_asset = registry.asset_address(&deps.querier, &asset, config.chain_id)?;
    if local_asset.is_empty() {
        return Err(ContractError::UnauthorizedAsset { asset });
    }

    let vault_addr = registry.require_operator(&deps.querier, Role::Vault)?;
    let deposit = if local_asset == config.native_denom {
        let expected = Coin {
            denom: config.native_denom.clone(),
            amount,
        };
        if amount.is_zero() || info.funds != vec![expected] {
            return Err(ContractError::NativeValueMismatch);
        }
        WasmMsg::Execute {
            contract_addr: vault_addr.to_string(),
            msg: to_json_binary(&vault::msg::ExecuteMsg::DepositNative {
                account: from.clone(),
                amount,
            })?,
            funds: info.funds,
        }
    } else {
        if !info.funds.is_empty() {
            return Err(ContractError::TokenValueMismatch);
        }
        WasmMsg::Execute {
            contract_addr: vault_addr.to_string(),
            msg: to_json_binary(&vault::msg::ExecuteMsg::DepositAsset {
                account: from.clone(),
                asset: local_asset,
                amount,
            })?,
            funds: vec![],
        }
    };

    let relay_addr = registry.require_operator(&deps.querier, Role::Relay)?;
    let create = WasmMsg::Execute {
        contract_addr: relay_addr.to_string(),
        msg: to_json_binary(&relay::msg::ExecuteMsg::CreateOperation { intent, signature })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(deposit)
        .add_message(create)
        .add_attribute("method", "create_transfer")
        .add_attribute("operation_hash", hex::encode(hash))
        .add_attribute("from", from)
        .add_attribute("nonce", nonce.to_string()))
}

pub fn deposit_fees(
    deps: DepsMut,
    info: MessageInfo,
    operation_hash: Binary,
    origin_chain_id: u64,
    destination_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = Registry(config.registry);

    if info.funds.is_empty() || info.funds.iter().all(|coin| coin.amount.is_zero()) {
        return Err(ContractError::NoFeesAttached);
    }

    let relay_addr = registry.require_operator(&deps.querier, Role::Relay)?;
    let lock = WasmMsg::Execute {
        contract_addr: relay_addr.to_string(),
        msg: to_json_binary(&relay::msg::ExecuteMsg::LockDestinationFees {
            operation_hash: operation_hash.clone(),
            origin_chain_id,
            destination_chain_id,
            payer: info.sender.to_string(),
        })?,
        funds: info.funds,
    };

    Ok(Response::new()
        .add_message(lock)
        .add_attribute("method", "deposit_fees")
        .add_attribute("operation_hash", hex::encode(operation_hash.as_slice()))
        .add_attribute("payer", info.sender))
}

/// Recover the signer id from a 65-byte recoverable signature over the raw
/// operation hash. Ethereum-style 27/28 recovery ids are normalized to 0/1.
fn recover_signer(deps: &Deps, hash: &[u8; 32], signature: &[u8]) -> Result<String, ContractError> {
    if signature.len() != SIGNATURE_LEN {
        return Err(ContractError::InvalidSignature);
    }
    let recovery_id = match signature[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return Err(ContractError::InvalidSignature),
    };
    let pubkey = deps
        .api
        .secp256k1_recover_pubkey(hash, &signature[..64], recovery_id)
        .map_err(|_| ContractError::InvalidSignature)?;
    derive_signer_id(&pubkey).ok_or(ContractError::InvalidSignature)
}
