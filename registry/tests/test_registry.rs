//! Registry integration tests.
//!
//! Covers:
//! - Slot store write/read and admin gating
//! - Operator role binding and rebinding
//! - Chain/asset allow-list idempotency
//! - Asset address table: set-once, update, batch length checks
//! - Factory-operator access to SetAssetAddress

use common::Role;
use cosmwasm_std::{Addr, Binary};
use cw_multi_test::{App, ContractWrapper, Executor};

use registry::msg::{
    AssetAddressResponse, AssetsResponse, AuthorizedResponse, ChainsResponse, ExecuteMsg,
    InstantiateMsg, OperatorResponse, OperatorsResponse, QueryMsg, SlotResponse,
};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_registry() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        registry::contract::execute,
        registry::contract::instantiate,
        registry::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    registry: Addr,
    admin: Addr,
    outsider: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let outsider = Addr::unchecked("terra1outsider");

    let code_id = app.store_code(contract_registry());
    let registry = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
            },
            &[],
            "registry",
            Some(admin.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        registry,
        admin,
        outsider,
    }
}

// ============================================================================
// Slots and Operators
// ============================================================================

#[test]
fn test_instantiate_binds_admin_role() {
    let env = setup();
    let res: OperatorResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::Operator { role: Role::Admin })
        .unwrap();
    assert_eq!(res.account, Some(env.admin));
}

#[test]
fn test_set_slot_and_read_back() {
    let mut env = setup();
    let value = Binary::from(b"slot-value".as_slice());

    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::SetSlot {
                key: "fee_collector".to_string(),
                value: value.clone(),
            },
            &[],
        )
        .unwrap();

    let res: SlotResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.registry,
            &QueryMsg::Slot {
                key: "fee_collector".to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.value, Some(value));

    // Unset key reads as None, not an error.
    let res: SlotResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.registry,
            &QueryMsg::Slot {
                key: "missing".to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.value, None);
}

#[test]
fn test_set_slot_rejects_non_admin() {
    let mut env = setup();
    let res = env.app.execute_contract(
        env.outsider.clone(),
        env.registry.clone(),
        &ExecuteMsg::SetSlot {
            key: "k".to_string(),
            value: Binary::from(b"v".as_slice()),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("admin"), "unexpected error: {}", err_str);
}

#[test]
fn test_update_operator_binds_and_rebinds() {
    let mut env = setup();
    let oracle_a = Addr::unchecked("terra1oraclea");
    let oracle_b = Addr::unchecked("terra1oracleb");

    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::UpdateOperator {
                role: Role::Oracle,
                account: oracle_a.to_string(),
            },
            &[],
        )
        .unwrap();

    let res: OperatorResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::Operator { role: Role::Oracle })
        .unwrap();
    assert_eq!(res.account, Some(oracle_a));

    // Rebinding overwrites.
    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::UpdateOperator {
                role: Role::Oracle,
                account: oracle_b.to_string(),
            },
            &[],
        )
        .unwrap();

    let res: OperatorResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::Operator { role: Role::Oracle })
        .unwrap();
    assert_eq!(res.account, Some(oracle_b));

    let res: OperatorsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::Operators {})
        .unwrap();
    assert_eq!(res.operators.len(), 2); // admin + oracle
}

#[test]
fn test_unbound_operator_reads_none() {
    let env = setup();
    let res: OperatorResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::Operator { role: Role::Bridge })
        .unwrap();
    assert_eq!(res.account, None);
}

// ============================================================================
// Chain and Asset Allow-Lists
// ============================================================================

#[test]
fn test_add_chain_is_idempotent() {
    let mut env = setup();

    for _ in 0..2 {
        env.app
            .execute_contract(
                env.admin.clone(),
                env.registry.clone(),
                &ExecuteMsg::AddChain { chain_id: 31337 },
                &[],
            )
            .unwrap();
    }

    let res: ChainsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::Chains {})
        .unwrap();
    assert_eq!(res.chain_ids, vec![31337]);

    let res: AuthorizedResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::IsChainAuthorized { chain_id: 31337 })
        .unwrap();
    assert!(res.authorized);

    let res: AuthorizedResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::IsChainAuthorized { chain_id: 1 })
        .unwrap();
    assert!(!res.authorized);
}

#[test]
fn test_add_assets_batch_is_idempotent() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::AddAssets {
                assets: vec!["SPAN".to_string(), "USDB".to_string(), "SPAN".to_string()],
            },
            &[],
        )
        .unwrap();

    let res: AssetsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.registry, &QueryMsg::Assets {})
        .unwrap();
    assert_eq!(res.assets.len(), 2);

    let res: AuthorizedResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.registry,
            &QueryMsg::IsAssetAuthorized {
                asset: "SPAN".to_string(),
            },
        )
        .unwrap();
    assert!(res.authorized);
}

#[test]
fn test_add_chain_rejects_non_admin() {
    let mut env = setup();
    let res = env.app.execute_contract(
        env.outsider.clone(),
        env.registry.clone(),
        &ExecuteMsg::AddChain { chain_id: 1 },
        &[],
    );
    assert!(res.is_err());
}

// ============================================================================
// Asset Address Table
// ============================================================================

fn authorize_span(env: &mut TestEnv) {
    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::AddChain { chain_id: 31337 },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::AddAsset {
                asset: "SPAN".to_string(),
            },
            &[],
        )
        .unwrap();
}

#[test]
fn test_set_asset_address_once_then_update() {
    let mut env = setup();
    authorize_span(&mut env);

    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::SetAssetAddress {
                asset: "SPAN".to_string(),
                chain_id: 31337,
                address: "uluna".to_string(),
            },
            &[],
        )
        .unwrap();

    // Second set over the same pair must fail.
    let res = env.app.execute_contract(
        env.admin.clone(),
        env.registry.clone(),
        &ExecuteMsg::SetAssetAddress {
            asset: "SPAN".to_string(),
            chain_id: 31337,
            address: "other".to_string(),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("already set"), "unexpected: {}", err_str);

    // Update corrects it.
    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::UpdateAssetAddress {
                asset: "SPAN".to_string(),
                chain_id: 31337,
                address: "uluna2".to_string(),
            },
            &[],
        )
        .unwrap();

    let res: AssetAddressResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.registry,
            &QueryMsg::AssetAddress {
                asset: "SPAN".to_string(),
                chain_id: 31337,
            },
        )
        .unwrap();
    assert_eq!(res.address, "uluna2");
}

#[test]
fn test_unset_asset_address_reads_empty_string() {
    let env = setup();
    let res: AssetAddressResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.registry,
            &QueryMsg::AssetAddress {
                asset: "SPAN".to_string(),
                chain_id: 31337,
            },
        )
        .unwrap();
    assert_eq!(res.address, "");
}

#[test]
fn test_set_asset_address_requires_authorized_chain_and_asset() {
    let mut env = setup();

    // Neither chain nor asset authorized yet.
    let res = env.app.execute_contract(
        env.admin.clone(),
        env.registry.clone(),
        &ExecuteMsg::SetAssetAddress {
            asset: "SPAN".to_string(),
            chain_id: 31337,
            address: "uluna".to_string(),
        },
        &[],
    );
    assert!(res.is_err());

    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::AddChain { chain_id: 31337 },
            &[],
        )
        .unwrap();

    // Chain authorized, asset still not.
    let res = env.app.execute_contract(
        env.admin.clone(),
        env.registry.clone(),
        &ExecuteMsg::SetAssetAddress {
            asset: "SPAN".to_string(),
            chain_id: 31337,
            address: "uluna".to_string(),
        },
        &[],
    );
    assert!(res.is_err());
}

#[test]
fn test_update_asset_address_requires_prior_value() {
    let mut env = setup();
    authorize_span(&mut env);

    let res = env.app.execute_contract(
        env.admin.clone(),
        env.registry.clone(),
        &ExecuteMsg::UpdateAssetAddress {
            asset: "SPAN".to_string(),
            chain_id: 31337,
            address: "uluna".to_string(),
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("not set"), "unexpected: {}", err_str);
}

#[test]
fn test_batch_set_rejects_ragged_inputs() {
    let mut env = setup();
    authorize_span(&mut env);

    let res = env.app.execute_contract(
        env.admin.clone(),
        env.registry.clone(),
        &ExecuteMsg::SetAssetAddresses {
            assets: vec!["SPAN".to_string()],
            chain_ids: vec![31337, 441],
            addresses: vec!["uluna".to_string()],
        },
        &[],
    );
    assert!(res.is_err());
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("length"), "unexpected: {}", err_str);
}

#[test]
fn test_factory_operator_can_set_asset_address() {
    let mut env = setup();
    authorize_span(&mut env);
    let factory = Addr::unchecked("terra1factory");

    env.app
        .execute_contract(
            env.admin.clone(),
            env.registry.clone(),
            &ExecuteMsg::UpdateOperator {
                role: Role::Factory,
                account: factory.to_string(),
            },
            &[],
        )
        .unwrap();

    env.app
        .execute_contract(
            factory,
            env.registry.clone(),
            &ExecuteMsg::SetAssetAddress {
                asset: "SPAN".to_string(),
                chain_id: 31337,
                address: "wspan".to_string(),
            },
            &[],
        )
        .unwrap();

    // But a plain account still cannot.
    let res = env.app.execute_contract(
        env.outsider.clone(),
        env.registry.clone(),
        &ExecuteMsg::UpdateAssetAddress {
            asset: "SPAN".to_string(),
            chain_id: 31337,
            address: "x".to_string(),
        },
        &[],
    );
    assert!(res.is_err());
}
