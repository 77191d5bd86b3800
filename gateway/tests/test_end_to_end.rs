//! Full cross-chain relay scenario across two simulated chains.
//!
//! Two independent `App` instances stand in for the origin chain (31337,
//! where SPAN is the native coin) and the destination chain (441, where SPAN
//! is a factory-created wrapped cw20). Test code plays the off-chain oracle,
//! mirroring confirmations between the two relays:
//!
//! 1. sender submits a signed transfer on the origin chain (escrow + record)
//! 2. a relayer deposits fees on the destination chain
//! 3. oracle confirms the fee lock back on the origin chain
//! 4. origin confirms depth and finalizes the deposit into custody
//! 5. destination confirms depth and receives the tuple
//! 6. destination completes: wrapped SPAN minted to the recipient, fee paid
//! 7. origin closes the record

use common::{derive_signer_id, OperationStatus, Role, TransferIntent};
use cosmwasm_std::{coins, Addr, Binary, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

const ORIGIN_CHAIN: u64 = 31337;
const DEST_CHAIN: u64 = 441;
const ORIGIN_DEPTH: u64 = 3;
const DEST_DEPTH: u64 = 2;
const AMOUNT: u128 = 5_000_000;
const FEE: u128 = 1_000;

// ============================================================================
// Contract Wrappers
// ============================================================================

fn contract_registry() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        registry::contract::execute,
        registry::contract::instantiate,
        registry::contract::query,
    ))
}

fn contract_vault() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        vault::contract::execute,
        vault::contract::instantiate,
        vault::contract::query,
    ))
}

fn contract_relay() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        relay::contract::execute,
        relay::contract::instantiate,
        relay::contract::query,
    ))
}

fn contract_gateway() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        gateway::contract::execute,
        gateway::contract::instantiate,
        gateway::contract::query,
    ))
}

fn contract_factory() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(
        ContractWrapper::new(
            factory::contract::execute,
            factory::contract::instantiate,
            factory::contract::query,
        )
        .with_reply(factory::contract::reply),
    )
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

// ============================================================================
// One Chain's Deployment
// ============================================================================

struct Chain {
    app: App,
    registry: Addr,
    vault: Addr,
    relay: Addr,
    gateway: Addr,
    admin: Addr,
    oracle: Addr,
}

fn deploy_chain(chain_id: u64, native_denom: &str) -> Chain {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let oracle = Addr::unchecked("terra1oracle");

    let registry_code = app.store_code(contract_registry());
    let registry = app
        .instantiate_contract(
            registry_code,
            admin.clone(),
            &registry::msg::InstantiateMsg {
                admin: admin.to_string(),
            },
            &[],
            "registry",
            Some(admin.to_string()),
        )
        .unwrap();

    let vault_code = app.store_code(contract_vault());
    let vault = app
        .instantiate_contract(
            vault_code,
            admin.clone(),
            &vault::msg::InstantiateMsg {
                registry: registry.to_string(),
                native_denom: native_denom.to_string(),
            },
            &[],
            "vault",
            Some(admin.to_string()),
        )
        .unwrap();

    let relay_code = app.store_code(contract_relay());
    let relay = app
        .instantiate_contract(
            relay_code,
            admin.clone(),
            &relay::msg::InstantiateMsg {
                registry: registry.to_string(),
                chain_id,
                required_confirmations: vec![
                    relay::msg::ChainConfirmations {
                        chain_id: ORIGIN_CHAIN,
                        blocks: ORIGIN_DEPTH,
                    },
                    relay::msg::ChainConfirmations {
                        chain_id: DEST_CHAIN,
                        blocks: DEST_DEPTH,
                    },
                ],
            },
            &[],
            "relay",
            Some(admin.to_string()),
        )
        .unwrap();

    let gateway_code = app.store_code(contract_gateway());
    let gateway = app
        .instantiate_contract(
            gateway_code,
            admin.clone(),
            &gateway::msg::InstantiateMsg {
                registry: registry.to_string(),
                native_denom: native_denom.to_string(),
                chain_id,
            },
            &[],
            "gateway",
            Some(admin.to_string()),
        )
        .unwrap();

    for (role, account) in [
        (Role::Bridge, gateway.clone()),
        (Role::Vault, vault.clone()),
        (Role::Relay, relay.clone()),
        (Role::Oracle, oracle.clone()),
    ] {
        app.execute_contract(
            admin.clone(),
            registry.clone(),
            &registry::msg::ExecuteMsg::UpdateOperator {
                role,
                account: account.to_string(),
            },
            &[],
        )
        .unwrap();
    }

    app.execute_contract(
        admin.clone(),
        registry.clone(),
        &registry::msg::ExecuteMsg::AddChains {
            chain_ids: vec![ORIGIN_CHAIN, DEST_CHAIN],
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        registry.clone(),
        &registry::msg::ExecuteMsg::AddAsset {
            asset: "SPAN".to_string(),
        },
        &[],
    )
    .unwrap();

    Chain {
        app,
        registry,
        vault,
        relay,
        gateway,
        admin,
        oracle,
    }
}

fn advance_blocks(chain: &mut Chain, n: u64) {
    chain.app.update_block(|block| {
        block.height += n;
        block.time = block.time.plus_seconds(n * 6);
    });
}

fn relay_status(chain: &Chain, hash: &Binary) -> OperationStatus {
    let res: relay::msg::OperationResponse = chain
        .app
        .wrap()
        .query_wasm_smart(
            &chain.relay,
            &relay::msg::QueryMsg::Operation {
                operation_hash: hash.clone(),
            },
        )
        .unwrap();
    res.record.expect("operation not found").status
}

// ============================================================================
// The Scenario
// ============================================================================

#[test]
fn test_cross_chain_transfer_with_wrapped_mint() {
    // --- Origin chain: SPAN is the native coin uspan.
    let mut origin = deploy_chain(ORIGIN_CHAIN, "uspan");
    origin
        .app
        .execute_contract(
            origin.admin.clone(),
            origin.registry.clone(),
            &registry::msg::ExecuteMsg::SetAssetAddress {
                asset: "SPAN".to_string(),
                chain_id: ORIGIN_CHAIN,
                address: "uspan".to_string(),
            },
            &[],
        )
        .unwrap();
    origin
        .app
        .execute_contract(
            origin.admin.clone(),
            origin.vault.clone(),
            &vault::msg::ExecuteMsg::RegisterAsset {
                asset: "uspan".to_string(),
                mode: vault::AssetMode::LockUnlock,
            },
            &[],
        )
        .unwrap();

    // --- Destination chain: SPAN is a factory-created wrapped cw20.
    let mut dest = deploy_chain(DEST_CHAIN, "uusd");
    let cw20_code = dest.app.store_code(contract_cw20());
    let factory_code = dest.app.store_code(contract_factory());
    let dest_factory = dest
        .app
        .instantiate_contract(
            factory_code,
            dest.admin.clone(),
            &factory::msg::InstantiateMsg {
                registry: dest.registry.to_string(),
                asset_code_id: cw20_code,
                chain_id: DEST_CHAIN,
            },
            &[],
            "factory",
            Some(dest.admin.to_string()),
        )
        .unwrap();
    dest.app
        .execute_contract(
            dest.admin.clone(),
            dest.registry.clone(),
            &registry::msg::ExecuteMsg::UpdateOperator {
                role: Role::Factory,
                account: dest_factory.to_string(),
            },
            &[],
        )
        .unwrap();
    dest.app
        .execute_contract(
            dest.admin.clone(),
            dest_factory.clone(),
            &factory::msg::ExecuteMsg::CreateAsset {
                name: "Wrapped Span".to_string(),
                symbol: "SPAN".to_string(),
            },
            &[],
        )
        .unwrap();
    let wrapped: factory::msg::AssetAddressResponse = dest
        .app
        .wrap()
        .query_wasm_smart(
            &dest_factory,
            &factory::msg::QueryMsg::AssetAddress {
                symbol: "SPAN".to_string(),
            },
        )
        .unwrap();
    let wrapped = wrapped.address.expect("wrapped asset missing");

    // --- The sender: a secp256k1 keypair whose derived id is the account.
    let key = SigningKey::from_slice(&[0x42; 32]).unwrap();
    let sender_id = derive_signer_id(key.verifying_key().to_encoded_point(false).as_bytes())
        .expect("signer id");
    let sender = Addr::unchecked(sender_id.clone());
    let recipient = "terra1recipient".to_string();

    origin.app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &sender, coins(10_000_000, "uspan"))
            .unwrap();
    });
    let relayer = Addr::unchecked("terra1relayer");
    dest.app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &relayer, coins(1_000_000, "uusd"))
            .unwrap();
    });

    let intent = TransferIntent {
        from: sender_id.clone(),
        to: recipient.clone(),
        origin_chain_id: ORIGIN_CHAIN,
        destination_chain_id: DEST_CHAIN,
        asset: "SPAN".to_string(),
        amount: Uint128::from(AMOUNT),
        nonce: 0,
    };
    let hash = intent.operation_hash();
    let hash_bin = Binary::from(hash.as_slice());
    let (sig, recovery_id) = key.sign_prehash_recoverable(&hash).unwrap();
    let mut signature = sig.to_bytes().to_vec();
    signature.push(recovery_id.to_byte());

    // 1. Signed transfer on the origin chain.
    origin
        .app
        .execute_contract(
            sender.clone(),
            origin.gateway.clone(),
            &gateway::msg::ExecuteMsg::CreateTransfer {
                from: sender_id.clone(),
                to: recipient.clone(),
                destination_chain_id: DEST_CHAIN,
                asset: "SPAN".to_string(),
                amount: Uint128::from(AMOUNT),
                nonce: 0,
                signature: Binary::from(signature),
            },
            &coins(AMOUNT, "uspan"),
        )
        .unwrap();
    assert_eq!(relay_status(&origin, &hash_bin), OperationStatus::Created);

    // 2. Relayer deposits fees on the destination chain.
    dest.app
        .execute_contract(
            relayer.clone(),
            dest.gateway.clone(),
            &gateway::msg::ExecuteMsg::DepositFees {
                operation_hash: hash_bin.clone(),
                origin_chain_id: ORIGIN_CHAIN,
                destination_chain_id: DEST_CHAIN,
            },
            &coins(FEE, "uusd"),
        )
        .unwrap();
    assert_eq!(relay_status(&dest, &hash_bin), OperationStatus::FeesDeposited);

    // 3. Oracle mirrors the fee lock back to the origin.
    origin
        .app
        .execute_contract(
            origin.oracle.clone(),
            origin.relay.clone(),
            &relay::msg::ExecuteMsg::ReceiveFeeLockConfirmation {
                operation_hash: hash_bin.clone(),
                remote_block: dest.app.block_info().height,
            },
            &[],
        )
        .unwrap();
    assert_eq!(relay_status(&origin, &hash_bin), OperationStatus::FeesLocked);

    // 4. Origin passes its depth gate; deposit finalizes into custody.
    advance_blocks(&mut origin, ORIGIN_DEPTH);
    origin
        .app
        .execute_contract(
            Addr::unchecked("terra1anyone"),
            origin.relay.clone(),
            &relay::msg::ExecuteMsg::ConfirmFeesAndDeposit {
                operation_hash: hash_bin.clone(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(relay_status(&origin, &hash_bin), OperationStatus::Ready);
    let held: vault::msg::BalanceResponse = origin
        .app
        .wrap()
        .query_wasm_smart(
            &origin.vault,
            &vault::msg::QueryMsg::VaultBalance {
                asset: "uspan".to_string(),
            },
        )
        .unwrap();
    assert_eq!(held.amount, Uint128::from(AMOUNT));

    // 5. Destination passes its depth gate and receives the tuple.
    advance_blocks(&mut dest, DEST_DEPTH);
    dest.app
        .execute_contract(
            dest.oracle.clone(),
            dest.relay.clone(),
            &relay::msg::ExecuteMsg::SendFeeLockConfirmation {
                operation_hash: hash_bin.clone(),
                intent: intent.clone(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(relay_status(&dest, &hash_bin), OperationStatus::FeesConfirmed);

    // 6. Completion mints wrapped SPAN to the recipient and pays the fee.
    dest.app
        .execute_contract(
            dest.oracle.clone(),
            dest.relay.clone(),
            &relay::msg::ExecuteMsg::CompleteOperation {
                operation_hash: hash_bin.clone(),
                intent: intent.clone(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(relay_status(&dest, &hash_bin), OperationStatus::Finalized);

    let minted: cw20::BalanceResponse = dest
        .app
        .wrap()
        .query_wasm_smart(
            &wrapped,
            &cw20_base::msg::QueryMsg::Balance {
                address: recipient.clone(),
            },
        )
        .unwrap();
    assert_eq!(minted.balance, Uint128::from(AMOUNT));

    let fee_paid = dest
        .app
        .wrap()
        .query_balance(&dest.oracle, "uusd")
        .unwrap();
    assert_eq!(fee_paid.amount, Uint128::from(FEE));

    // 7. Origin closes the record.
    origin
        .app
        .execute_contract(
            origin.oracle.clone(),
            origin.relay.clone(),
            &relay::msg::ExecuteMsg::ReceiveFinalizedOperation {
                operation_hash: hash_bin.clone(),
                remote_block: dest.app.block_info().height,
            },
            &[],
        )
        .unwrap();
    assert_eq!(relay_status(&origin, &hash_bin), OperationStatus::Closed);

    // The sender's nonce advanced exactly once.
    let nonce: gateway::msg::NonceResponse = origin
        .app
        .wrap()
        .query_wasm_smart(
            &origin.gateway,
            &gateway::msg::QueryMsg::CurrentNonce { account: sender_id },
        )
        .unwrap();
    assert_eq!(nonce.nonce, 1);
}
