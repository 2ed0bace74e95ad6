//! Lock and Unlock handlers.

use common::cross_chain::UNLOCK_METHOD;
use common::TxArgs;
use cosmwasm_std::{
    to_json_binary, Addr, Api, DepsMut, Env, Event, HexBinary, MessageInfo, Response, Uint128,
    Uint256, WasmMsg,
};

use crate::error::ContractError;
use crate::state::{ASSET_HASHES, CONFIG, PROXY_HASHES};

/// Escrows the caller's tokens and registers an `unlock` for the remote proxy.
///
/// Both bindings are checked before any tokens move.
pub fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from_asset: String,
    to_chain_id: u64,
    to_address: HexBinary,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    if to_address.is_empty() {
        return Err(ContractError::EmptyToAddress);
    }
    let config = CONFIG.load(deps.storage)?;
    let manager = config.manager.ok_or(ContractError::ManagerNotSet)?;
    let asset = deps.api.addr_validate(&from_asset)?;

    let to_asset = ASSET_HASHES
        .may_load(deps.storage, (to_chain_id, &asset))?
        .ok_or(ContractError::NoAssetBinding {
            asset: asset.to_string(),
            to_chain_id,
        })?;
    let to_proxy = PROXY_HASHES
        .may_load(deps.storage, to_chain_id)?
        .ok_or(ContractError::NoProxyBinding { to_chain_id })?;

    let args = TxArgs {
        to_asset_hash: to_asset.to_vec(),
        to_address: to_address.to_vec(),
        amount: Uint256::from(amount),
    }
    .to_bytes(config.amount_encoding)?;

    let escrow = env.contract.address;
    let lock_msg = WasmMsg::Execute {
        contract_addr: asset.to_string(),
        msg: to_json_binary(&token::msg::ExecuteMsg::ProxyTransfer {
            from: info.sender.to_string(),
            to: escrow.to_string(),
            amount,
        })?,
        funds: vec![],
    };
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
        "lock: to_chain_id={} to_contract={} to_asset={} to_address={} amount={}",
        to_chain_id,
        hex::encode(to_proxy.as_slice()),
        hex::encode(to_asset.as_slice()),
        to_address.to_hex(),
        amount
    ));

    let event = Event::new("lock")
        .add_attribute("from_asset", asset)
        .add_attribute("from_address", info.sender)
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("to_asset", hex::encode(to_asset.as_slice()))
        .add_attribute("to_address", to_address.to_hex())
        .add_attribute("amount", amount);

    Ok(Response::new()
        .add_message(lock_msg)
        .add_message(cross_chain_msg)
        .add_event(event)
        .add_attribute("action", "lock"))
}

/// Pays out escrow for a message from the proxy bound to `from_chain_id`.
pub fn execute_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    args: HexBinary,
    from_contract: HexBinary,
    from_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let manager = config.manager.ok_or(ContractError::ManagerNotSet)?;
    if info.sender != manager {
        return Err(ContractError::NotManager);
    }

    let source = PROXY_HASHES
        .may_load(deps.storage, from_chain_id)?
        .ok_or(ContractError::NoProxyBinding {
            to_chain_id: from_chain_id,
        })?;
    if source.as_slice() != from_contract.as_slice() {
        return Err(ContractError::UnknownSourceProxy { from_chain_id });
    }

    let tx_args = TxArgs::from_bytes(args.as_slice(), config.amount_encoding)?;
    let amount = Uint128::try_from(tx_args.amount).map_err(|_| ContractError::AmountOverflow {
        amount: tx_args.amount.to_string(),
    })?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let asset = parse_address(deps.api, &tx_args.to_asset_hash)?;
    let recipient = parse_address(deps.api, &tx_args.to_address)?;

    let unlock_msg = WasmMsg::Execute {
        contract_addr: asset.to_string(),
        msg: to_json_binary(&token::msg::ExecuteMsg::ProxyTransfer {
            from: env.contract.address.to_string(),
            to: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    deps.api.debug(&format!(
        "unlock: from_chain_id={} to_asset={} to_address={} amount={}",
        from_chain_id, asset, recipient, amount
    ));

    let event = Event::new("unlock")
        .add_attribute("from_chain_id", from_chain_id.to_string())
        .add_attribute("to_asset", asset)
        .add_attribute("to_address", recipient)
        .add_attribute("amount", amount);

    Ok(Response::new()
        .add_message(unlock_msg)
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
