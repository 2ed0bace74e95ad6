//! Token-native cross-chain mode.
//!
//! When enabled at instantiation the token is its own lock proxy: `Lock`
//! escrows into the contract's own balance and registers an `unlock` with the
//! cross-chain manager, and the manager delivers inbound `Unlock`s here. Tx
//! args carry the amount as a var-uint, so a single lock is capped at u64.

use common::cross_chain::UNLOCK_METHOD;
use common::{AmountEncoding, TxArgs};
use cosmwasm_std::{
    to_json_binary, Addr, Api, Binary, Deps, DepsMut, Env, Event, HexBinary, MessageInfo,
    Response, StdError, Uint128, Uint256, WasmMsg,
};

use crate::error::ContractError;
use crate::ledger;
use crate::state::{Config, ASSET_HASHES, CONFIG, PROXY_HASHES};

const AMOUNT_ENCODING: AmountEncoding = AmountEncoding::VarUint;

fn cross_chain_config(deps: Deps) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.cross_chain {
        return Err(ContractError::CrossChainOff);
    }
    Ok(config)
}

fn owned_cross_chain_config(deps: Deps, sender: &Addr) -> Result<Config, ContractError> {
    let config = cross_chain_config(deps)?;
    if *sender != config.owner {
        return Err(ContractError::NotOwner);
    }
    Ok(config)
}

// ============================================================================
// Owner Operations
// ============================================================================

pub fn execute_set_manager(
    deps: DepsMut,
    info: MessageInfo,
    manager: String,
) -> Result<Response, ContractError> {
    let mut config = owned_cross_chain_config(deps.as_ref(), &info.sender)?;
    let manager = deps.api.addr_validate(&manager)?;
    config.manager = Some(manager.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_manager")
        .add_attribute("manager", manager))
}

pub fn execute_bind_proxy_hash(
    deps: DepsMut,
    info: MessageInfo,
    to_chain_id: u64,
    target_proxy: HexBinary,
) -> Result<Response, ContractError> {
    owned_cross_chain_config(deps.as_ref(), &info.sender)?;
    if target_proxy.is_empty() {
        return Err(ContractError::EmptyBinding);
    }
    PROXY_HASHES.save(
        deps.storage,
        to_chain_id,
        &Binary::from(target_proxy.to_vec()),
    )?;

    Ok(Response::new()
        .add_attribute("action", "bind_proxy_hash")
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("target_proxy", target_proxy.to_hex()))
}

pub fn execute_bind_asset_hash(
    deps: DepsMut,
    info: MessageInfo,
    to_chain_id: u64,
    to_asset: HexBinary,
) -> Result<Response, ContractError> {
    owned_cross_chain_config(deps.as_ref(), &info.sender)?;
    if to_asset.is_empty() {
        return Err(ContractError::EmptyBinding);
    }
    ASSET_HASHES.save(deps.storage, to_chain_id, &Binary::from(to_asset.to_vec()))?;

    Ok(Response::new()
        .add_attribute("action", "bind_asset_hash")
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("to_asset", to_asset.to_hex()))
}

// ============================================================================
// Lock / Unlock
// ============================================================================

/// Moves the caller's tokens into the contract's escrow and registers an
/// `unlock` for the counterpart bound to `to_chain_id`.
pub fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to_chain_id: u64,
    to_address: HexBinary,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = cross_chain_config(deps.as_ref())?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    if to_address.is_empty() {
        return Err(ContractError::EmptyToAddress);
    }
    let manager = config.manager.ok_or(ContractError::ManagerNotSet)?;

    let to_asset = ASSET_HASHES
        .may_load(deps.storage, to_chain_id)?
        .ok_or(ContractError::NoAssetBinding { to_chain_id })?;
    let to_proxy = PROXY_HASHES
        .may_load(deps.storage, to_chain_id)?
        .ok_or(ContractError::NoProxyBinding { to_chain_id })?;

    let args = TxArgs {
        to_asset_hash: to_asset.to_vec(),
        to_address: to_address.to_vec(),
        amount: Uint256::from(amount),
    }
    .to_bytes(AMOUNT_ENCODING)?;

    let escrow = env.contract.address;
    let transfer = ledger::transfer(deps.storage, &info.sender, &escrow, amount)?;

    let cross_chain_msg = WasmMsg::Execute {
        contract_addr: manager.to_string(),
        msg: to_json_binary(&cross_chain_manager::msg::ExecuteMsg::CrossChain {
            to_chain_id,
            to_contract: HexBinary::from(to_proxy.to_vec()),
            method: UNLOCK_METHOD.to_string(),
            args: HexBinary::from(args),
        })?,
        funds: vec![],
    };

    deps.api.debug(&format!(
        "lock: to_chain_id={} to_contract={} to_address={} amount={}",
        to_chain_id,
        hex::encode(to_proxy.as_slice()),
        to_address.to_hex(),
        amount
    ));

    let event = Event::new("lock")
        .add_attribute("from_address", info.sender)
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("to_asset", hex::encode(to_asset.as_slice()))
        .add_attribute("to_address", to_address.to_hex())
        .add_attribute("amount", amount);

    Ok(Response::new()
        .add_message(cross_chain_msg)
        .add_event(transfer)
        .add_event(event)
        .add_attribute("action", "lock"))
}

/// Pays out escrow for a message from the counterpart bound to
/// `from_chain_id`. Only the manager may call this.
pub fn execute_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    args: HexBinary,
    from_contract: HexBinary,
    from_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = cross_chain_config(deps.as_ref())?;
    let manager = config.manager.ok_or(ContractError::ManagerNotSet)?;
    if info.sender != manager {
        return Err(ContractError::NotManager);
    }

    let source = PROXY_HASHES
        .may_load(deps.storage, from_chain_id)?
        .ok_or(ContractError::UnknownSourceProxy { from_chain_id })?;
    if source.as_slice() != from_contract.as_slice() {
        return Err(ContractError::UnknownSourceProxy { from_chain_id });
    }

    let tx_args = TxArgs::from_bytes(args.as_slice(), AMOUNT_ENCODING)?;
    let escrow = env.contract.address;
    if tx_args.to_asset_hash != escrow.as_bytes() {
        return Err(ContractError::WrongAsset {
            asset: hex::encode(&tx_args.to_asset_hash),
        });
    }
    // var-uint amounts are at most u64
    let amount = Uint128::try_from(tx_args.amount).map_err(StdError::from)?;
    let recipient = parse_address(deps.api, &tx_args.to_address)?;

    let transfer = ledger::transfer(deps.storage, &escrow, &recipient, amount)?;

    deps.api.debug(&format!(
        "unlock: from_chain_id={} to_address={} amount={}",
        from_chain_id, recipient, amount
    ));

    let event = Event::new("unlock")
        .add_attribute("from_chain_id", from_chain_id.to_string())
        .add_attribute("to_address", recipient)
        .add_attribute("amount", amount);

    Ok(Response::new()
        .add_event(transfer)
        .add_event(event)
        .add_attribute("action", "unlock"))
}

/// Local addresses travel as the UTF-8 bytes of their bech32 form.
fn parse_address(api: &dyn Api, raw: &[u8]) -> Result<Addr, ContractError> {
    let addr = std::str::from_utf8(raw).map_err(|_| ContractError::InvalidAddress {
        reason: format!("{} is not UTF-8", hex::encode(raw)),
    })?;
    api.addr_validate(addr)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })
}
