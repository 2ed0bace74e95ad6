//! Token Contract - Entry Points and Execute Handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::cross_chain::{
    execute_bind_asset_hash, execute_bind_proxy_hash, execute_lock, execute_set_manager,
    execute_unlock,
};
use crate::error::ContractError;
use crate::ledger;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowance, query_asset_hash, query_balance, query_is_cross_chain_on, query_lock_proxy,
    query_manager, query_owner, query_proxy_hash, query_token_info,
};
use crate::state::{
    Config, TokenInfo, BALANCES, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOKEN_INFO,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.name.is_empty() {
        return Err(ContractError::InvalidTokenInfo {
            reason: "name can't be empty".to_string(),
        });
    }
    if msg.symbol.is_empty() {
        return Err(ContractError::InvalidTokenInfo {
            reason: "symbol can't be empty".to_string(),
        });
    }
    if msg.decimals == 0 {
        return Err(ContractError::InvalidTokenInfo {
            reason: "decimals must be positive".to_string(),
        });
    }
    if msg.total_supply.is_zero() {
        return Err(ContractError::InvalidTokenInfo {
            reason: "total supply must be positive".to_string(),
        });
    }

    if msg.manager.is_some() && !msg.cross_chain {
        return Err(ContractError::CrossChainOff);
    }
    let manager = msg
        .manager
        .map(|m| deps.api.addr_validate(&m))
        .transpose()?;
    let lock_proxy = msg
        .lock_proxy
        .map(|p| deps.api.addr_validate(&p))
        .transpose()?;

    // cross-chain mode escrows in the contract itself
    let holder = match (msg.escrow_supply, msg.cross_chain, &lock_proxy) {
        (false, _, _) => info.sender.clone(),
        (true, true, _) => env.contract.address.clone(),
        (true, false, Some(proxy)) => proxy.clone(),
        (true, false, None) => return Err(ContractError::EscrowRequired),
    };

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply: msg.total_supply,
        },
    )?;
    CONFIG.save(
        deps.storage,
        &Config {
            owner: info.sender.clone(),
            cross_chain: msg.cross_chain,
            manager,
            lock_proxy,
        },
    )?;
    BALANCES.save(deps.storage, &holder, &msg.total_supply)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("total_supply", msg.total_supply)
        .add_attribute("holder", holder)
        .add_attribute("cross_chain", msg.cross_chain.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            let recipient = deps.api.addr_validate(&recipient)?;
            let event = ledger::transfer(deps.storage, &info.sender, &recipient, amount)?;
            Ok(respond("transfer", vec![event]))
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => {
            let owner = deps.api.addr_validate(&owner)?;
            let recipient = deps.api.addr_validate(&recipient)?;
            let events =
                ledger::transfer_from(deps.storage, &info.sender, &owner, &recipient, amount)?;
            Ok(respond("transfer_from", events))
        }
        ExecuteMsg::Approve { spender, amount } => {
            let spender = deps.api.addr_validate(&spender)?;
            let event = ledger::approve(deps.storage, &info.sender, &spender, amount)?;
            Ok(respond("approve", vec![event]))
        }
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            let spender = deps.api.addr_validate(&spender)?;
            let event = ledger::increase_allowance(deps.storage, &info.sender, &spender, amount)?;
            Ok(respond("increase_allowance", vec![event]))
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            let spender = deps.api.addr_validate(&spender)?;
            let event = ledger::decrease_allowance(deps.storage, &info.sender, &spender, amount)?;
            Ok(respond("decrease_allowance", vec![event]))
        }
        ExecuteMsg::Burn { amount } => {
            let event = ledger::burn(deps.storage, &info.sender, amount)?;
            Ok(respond("burn", vec![event]))
        }

        // Owner operations
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::SetLockProxy { lock_proxy } => execute_set_lock_proxy(deps, info, lock_proxy),
        ExecuteMsg::SetManager { manager } => execute_set_manager(deps, info, manager),
        ExecuteMsg::BindProxyHash {
            to_chain_id,
            target_proxy,
        } => execute_bind_proxy_hash(deps, info, to_chain_id, target_proxy),
        ExecuteMsg::BindAssetHash {
            to_chain_id,
            to_asset,
        } => execute_bind_asset_hash(deps, info, to_chain_id, to_asset),

        // Cross-chain operations
        ExecuteMsg::Lock {
            to_chain_id,
            to_address,
            amount,
        } => execute_lock(deps, env, info, to_chain_id, to_address, amount),
        ExecuteMsg::Unlock {
            args,
            from_contract,
            from_chain_id,
        } => execute_unlock(deps, env, info, args, from_contract, from_chain_id),

        // Lock proxy operations
        ExecuteMsg::ProxyTransfer { from, to, amount } => {
            execute_proxy_transfer(deps, info, from, to, amount)
        }
    }
}

fn respond(action: &str, events: Vec<Event>) -> Response {
    Response::new()
        .add_events(events)
        .add_attribute("action", action)
}

fn load_owned_config(deps: Deps, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::NotOwner);
    }
    Ok(config)
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    load_owned_config(deps.as_ref(), &info.sender)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let event = ledger::mint(deps.storage, &recipient, amount)?;
    Ok(respond("mint", vec![event]))
}

fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = load_owned_config(deps.as_ref(), &info.sender)?;
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let old_owner = std::mem::replace(&mut config.owner, new_owner.clone());
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("transfer_ownership")
        .add_attribute("old_owner", old_owner)
        .add_attribute("new_owner", new_owner);
    Ok(respond("transfer_ownership", vec![event]))
}

fn execute_set_lock_proxy(
    deps: DepsMut,
    info: MessageInfo,
    lock_proxy: String,
) -> Result<Response, ContractError> {
    let mut config = load_owned_config(deps.as_ref(), &info.sender)?;
    let lock_proxy = deps.api.addr_validate(&lock_proxy)?;
    config.lock_proxy = Some(lock_proxy.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_lock_proxy")
        .add_attribute("lock_proxy", lock_proxy))
}

/// Escrow movement on behalf of the bound lock proxy. No allowance is
/// consulted; the proxy is trusted to only move funds its own callers
/// authorised.
fn execute_proxy_transfer(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.lock_proxy.as_ref() != Some(&info.sender) {
        return Err(ContractError::NotLockProxy);
    }
    let from = deps.api.addr_validate(&from)?;
    let to = deps.api.addr_validate(&to)?;
    let event = ledger::transfer(deps.storage, &from, &to, amount)?;
    Ok(respond("proxy_transfer", vec![event]))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Manager {} => to_json_binary(&query_manager(deps)?),
        QueryMsg::LockProxy {} => to_json_binary(&query_lock_proxy(deps)?),
        QueryMsg::IsCrossChainOn {} => to_json_binary(&query_is_cross_chain_on(deps)?),
        QueryMsg::ProxyHash { to_chain_id } => {
            to_json_binary(&query_proxy_hash(deps, to_chain_id)?)
        }
        QueryMsg::AssetHash { to_chain_id } => {
            to_json_binary(&query_asset_hash(deps, to_chain_id)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
