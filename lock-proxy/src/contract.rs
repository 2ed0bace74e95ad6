//! Lock Proxy Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_bind_asset_hash, execute_bind_proxy_hash, execute_lock, execute_set_manager,
    execute_transfer_ownership, execute_unlock,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_asset_hash, query_config, query_lock_proxy_addr, query_manager, query_owner,
    query_proxy_hash,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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

    let config = Config {
        owner: info.sender,
        manager: None,
        amount_encoding: msg.amount_encoding.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("escrow", env.contract.address)
        .add_attribute("amount_encoding", format!("{:?}", config.amount_encoding)))
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
        // Owner operations
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::SetManager { manager } => execute_set_manager(deps, info, manager),
        ExecuteMsg::BindProxyHash {
            to_chain_id,
            target_proxy,
        } => execute_bind_proxy_hash(deps, info, to_chain_id, target_proxy),
        ExecuteMsg::BindAssetHash {
            from_asset,
            to_chain_id,
            to_asset,
        } => execute_bind_asset_hash(deps, info, from_asset, to_chain_id, to_asset),

        // Transfers
        ExecuteMsg::Lock {
            from_asset,
            to_chain_id,
            to_address,
            amount,
        } => execute_lock(deps, env, info, from_asset, to_chain_id, to_address, amount),
        ExecuteMsg::Unlock {
            args,
            from_contract,
            from_chain_id,
        } => execute_unlock(deps, env, info, args, from_contract, from_chain_id),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Manager {} => to_json_binary(&query_manager(deps)?),
        QueryMsg::LockProxyAddr {} => to_json_binary(&query_lock_proxy_addr(env)),
        QueryMsg::ProxyHash { to_chain_id } => {
            to_json_binary(&query_proxy_hash(deps, to_chain_id)?)
        }
        QueryMsg::AssetHash {
            from_asset,
            to_chain_id,
        } => to_json_binary(&query_asset_hash(deps, from_asset, to_chain_id)?),
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
