//! End-to-end transfer between two chains, each simulated by its own App.
//!
//! Chain 1 locks tokens and registers the outbound message; the test plays the
//! relayer, committing that message into a signed relay header that chain 2
//! verifies before unlocking from its escrow.

use common::testing::{chain_config_payload, header_at, sign_header, Bookkeeper};
use common::{audit_path, merkle_root, AmountEncoding, MakeTxParam, ToMerkleValue, TxArgs};
use cosmwasm_std::{Addr, HexBinary, Uint128, Uint256};
use cw20::BalanceResponse;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use lock_proxy::msg::{ExecuteMsg, InstantiateMsg, ProxyHashResponse, QueryMsg};

const CHAIN_A: u64 = 1;
const CHAIN_B: u64 = 2;

// ============================================================================
// Test Setup
// ============================================================================

struct Chain {
    app: App,
    owner: Addr,
    manager: Addr,
    token: Addr,
    proxy: Addr,
}

fn store_codes(app: &mut App) -> (u64, u64, u64) {
    let manager = app.store_code(Box::new(ContractWrapper::new(
        cross_chain_manager::contract::execute,
        cross_chain_manager::contract::instantiate,
        cross_chain_manager::contract::query,
    )));
    let token = app.store_code(Box::new(ContractWrapper::new(
        token::contract::execute,
        token::contract::instantiate,
        token::contract::query,
    )));
    let proxy = app.store_code(Box::new(ContractWrapper::new(
        lock_proxy::contract::execute,
        lock_proxy::contract::instantiate,
        lock_proxy::contract::query,
    )));
    (manager, token, proxy)
}

/// Manager, lock proxy and a token whose lock proxy is bound. With
/// `escrow_supply` the whole supply starts in the proxy's escrow.
fn deploy(chain_id: u64, escrow_supply: bool, encoding: AmountEncoding) -> Chain {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let (manager_code, token_code, proxy_code) = store_codes(&mut app);

    let manager = app
        .instantiate_contract(
            manager_code,
            owner.clone(),
            &cross_chain_manager::msg::InstantiateMsg { chain_id },
            &[],
            "ccm",
            None,
        )
        .unwrap();
    let proxy = app
        .instantiate_contract(
            proxy_code,
            owner.clone(),
            &InstantiateMsg {
                amount_encoding: Some(encoding),
            },
            &[],
            "lock-proxy",
            None,
        )
        .unwrap();
    let token = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &token::msg::InstantiateMsg {
                name: "Poly Token".to_string(),
                symbol: "PT".to_string(),
                decimals: 6,
                total_supply: Uint128::new(1000),
                manager: None,
                lock_proxy: Some(proxy.to_string()),
                escrow_supply,
                cross_chain: false,
            },
            &[],
            "token",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        proxy.clone(),
        &ExecuteMsg::SetManager {
            manager: manager.to_string(),
        },
        &[],
    )
    .unwrap();

    Chain {
        app,
        owner,
        manager,
        token,
        proxy,
    }
}

fn bind(chain: &mut Chain, remote_chain_id: u64, remote: &Chain) {
    chain
        .app
        .execute_contract(
            chain.owner.clone(),
            chain.proxy.clone(),
            &ExecuteMsg::BindProxyHash {
                to_chain_id: remote_chain_id,
                target_proxy: HexBinary::from(remote.proxy.as_bytes()),
            },
            &[],
        )
        .unwrap();
    chain
        .app
        .execute_contract(
            chain.owner.clone(),
            chain.proxy.clone(),
            &ExecuteMsg::BindAssetHash {
                from_asset: chain.token.to_string(),
                to_chain_id: remote_chain_id,
                to_asset: HexBinary::from(remote.token.as_bytes()),
            },
            &[],
        )
        .unwrap();
}

fn install_genesis(chain: &mut Chain, keepers: &[Bookkeeper]) {
    let mut genesis = header_at(100);
    genesis.consensus_payload = chain_config_payload(keepers);
    chain
        .app
        .execute_contract(
            chain.owner.clone(),
            chain.manager.clone(),
            &cross_chain_manager::msg::ExecuteMsg::InitGenesisBlock {
                raw_header: HexBinary::from(genesis.to_bytes()),
            },
            &[],
        )
        .unwrap();
}

/// Two chains wired to each other; chain A holds supply with the owner,
/// chain B holds its supply in escrow.
fn setup(encoding: AmountEncoding) -> (Chain, Chain, Vec<Bookkeeper>) {
    let mut a = deploy(CHAIN_A, false, encoding);
    let mut b = deploy(CHAIN_B, true, encoding);
    bind(&mut a, CHAIN_B, &b);
    bind(&mut b, CHAIN_A, &a);

    let keepers: Vec<Bookkeeper> = (1..5).map(Bookkeeper::from_seed).collect();
    install_genesis(&mut b, &keepers);
    (a, b, keepers)
}

fn balance(chain: &Chain, who: &Addr) -> Uint128 {
    let res: BalanceResponse = chain
        .app
        .wrap()
        .query_wasm_smart(
            &chain.token,
            &token::msg::QueryMsg::Balance {
                address: who.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn event_attr(res: &AppResponse, ty: &str, key: &str) -> String {
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("missing {}.{}", ty, key))
}

fn lock(chain: &mut Chain, sender: &Addr, to: &str, amount: u128) -> AppResponse {
    chain
        .app
        .execute_contract(
            sender.clone(),
            chain.proxy.clone(),
            &ExecuteMsg::Lock {
                from_asset: chain.token.to_string(),
                to_chain_id: CHAIN_B,
                to_address: HexBinary::from(to.as_bytes()),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .unwrap()
}

/// Plays the relayer: commits the outbound message into a relay header signed
/// by `signers` and submits it to `dest`.
fn relay(
    dest: &mut Chain,
    lock_res: &AppResponse,
    signers: &[Bookkeeper],
) -> anyhow::Result<AppResponse> {
    let raw_param = hex::decode(event_attr(lock_res, "wasm-cross_chain", "raw_param")).unwrap();
    let value = ToMerkleValue {
        tx_hash: vec![0x77; 32],
        from_chain_id: CHAIN_A,
        make_tx_param: MakeTxParam::from_bytes(&raw_param).unwrap(),
    };
    let leaves = vec![value.to_bytes()];

    let mut header = header_at(120);
    header.cross_state_root = merkle_root(&leaves);
    let refs: Vec<&Bookkeeper> = signers.iter().collect();
    sign_header(&mut header, &refs);

    dest.app.execute_contract(
        Addr::unchecked("terra1relayer"),
        dest.manager.clone(),
        &cross_chain_manager::msg::ExecuteMsg::VerifyHeaderAndExecuteTx {
            proof: HexBinary::from(audit_path(&leaves, 0).unwrap()),
            raw_header: HexBinary::from(header.to_bytes()),
            header_proof: HexBinary::from(vec![]),
            cur_raw_header: HexBinary::from(vec![]),
        },
        &[],
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_lock_and_unlock_across_chains() {
    let (mut a, mut b, keepers) = setup(AmountEncoding::Fixed32);
    let alice = a.owner.clone();
    let bob = Addr::unchecked("terra1bob");

    let res = lock(&mut a, &alice, bob.as_str(), 100);
    assert_eq!(balance(&a, &a.proxy.clone()), Uint128::new(100));
    assert_eq!(balance(&a, &alice), Uint128::new(900));
    assert_eq!(
        event_attr(&res, "wasm-cross_chain", "cross_chain_id"),
        hex::encode([0u8; 32])
    );

    relay(&mut b, &res, &keepers[..3]).unwrap();
    assert_eq!(balance(&b, &bob), Uint128::new(100));
    assert_eq!(balance(&b, &b.proxy.clone()), Uint128::new(900));

    let err = relay(&mut b, &res, &keepers[..3]).unwrap_err();
    assert!(err.root_cause().to_string().contains("already executed"));
    assert_eq!(balance(&b, &bob), Uint128::new(100));
}

#[test]
fn test_var_uint_pair_round_trip() {
    let (mut a, mut b, keepers) = setup(AmountEncoding::VarUint);
    let alice = a.owner.clone();
    let bob = Addr::unchecked("terra1bob");

    let res = lock(&mut a, &alice, bob.as_str(), 250);
    let raw_param = hex::decode(event_attr(&res, "wasm-cross_chain", "raw_param")).unwrap();
    let param = MakeTxParam::from_bytes(&raw_param).unwrap();
    let args = TxArgs::from_bytes(&param.args, AmountEncoding::VarUint).unwrap();
    assert_eq!(args.amount, Uint256::from(250u128));
    assert_eq!(args.to_address, bob.as_bytes());
    assert_eq!(args.to_asset_hash, b.token.as_bytes());

    relay(&mut b, &res, &keepers[..3]).unwrap();
    assert_eq!(balance(&b, &bob), Uint128::new(250));
}

#[test]
fn test_lock_requires_bindings() {
    let mut a = deploy(CHAIN_A, false, AmountEncoding::Fixed32);
    let alice = a.owner.clone();

    let err = a
        .app
        .execute_contract(
            alice.clone(),
            a.proxy.clone(),
            &ExecuteMsg::Lock {
                from_asset: a.token.to_string(),
                to_chain_id: CHAIN_B,
                to_address: HexBinary::from(b"terra1bob".as_slice()),
                amount: Uint128::new(10),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("No asset binding"));
    assert_eq!(balance(&a, &alice), Uint128::new(1000));

    let res: ProxyHashResponse = a
        .app
        .wrap()
        .query_wasm_smart(&a.proxy, &QueryMsg::ProxyHash { to_chain_id: CHAIN_B })
        .unwrap();
    assert!(res.proxy_hash.is_none());
}

#[test]
fn test_lock_insufficient_balance_aborts() {
    let (mut a, _b, _) = setup(AmountEncoding::Fixed32);
    let carol = Addr::unchecked("terra1carol");

    let err = a
        .app
        .execute_contract(
            carol,
            a.proxy.clone(),
            &ExecuteMsg::Lock {
                from_asset: a.token.to_string(),
                to_chain_id: CHAIN_B,
                to_address: HexBinary::from(b"terra1bob".as_slice()),
                amount: Uint128::new(10),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Insufficient balance"));

    let counter: cross_chain_manager::msg::CrossChainCounterResponse = a
        .app
        .wrap()
        .query_wasm_smart(
            &a.manager,
            &cross_chain_manager::msg::QueryMsg::CrossChainCounter {},
        )
        .unwrap();
    assert_eq!(counter.counter, Uint256::zero());
}

#[test]
fn test_unlock_only_from_manager() {
    let (_a, mut b, _) = setup(AmountEncoding::Fixed32);
    let args = TxArgs {
        to_asset_hash: b.token.as_bytes().to_vec(),
        to_address: b"terra1mallory".to_vec(),
        amount: Uint256::from(500u128),
    }
    .to_bytes(AmountEncoding::Fixed32)
    .unwrap();

    let err = b
        .app
        .execute_contract(
            Addr::unchecked("terra1mallory"),
            b.proxy.clone(),
            &ExecuteMsg::Unlock {
                args: HexBinary::from(args),
                from_contract: HexBinary::from(b"anything".as_slice()),
                from_chain_id: CHAIN_A,
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("only the cross-chain manager"));
}

#[test]
fn test_unlock_rejects_unbound_source_proxy() {
    let (_a, mut b, keepers) = setup(AmountEncoding::Fixed32);

    // a rogue contract on chain A registers a message for B's proxy directly
    let mut rogue = deploy(CHAIN_A, false, AmountEncoding::Fixed32);
    let args = TxArgs {
        to_asset_hash: b.token.as_bytes().to_vec(),
        to_address: b"terra1mallory".to_vec(),
        amount: Uint256::from(500u128),
    }
    .to_bytes(AmountEncoding::Fixed32)
    .unwrap();
    let res = rogue
        .app
        .execute_contract(
            Addr::unchecked("terra1mallory"),
            rogue.manager.clone(),
            &cross_chain_manager::msg::ExecuteMsg::CrossChain {
                to_chain_id: CHAIN_B,
                to_contract: HexBinary::from(b.proxy.as_bytes()),
                method: "unlock".to_string(),
                args: HexBinary::from(args),
            },
            &[],
        )
        .unwrap();

    let err = relay(&mut b, &res, &keepers[..3]).unwrap_err();
    assert!(err.root_cause().to_string().contains("Unknown source proxy"));
    assert_eq!(balance(&b, &Addr::unchecked("terra1mallory")), Uint128::zero());
}
