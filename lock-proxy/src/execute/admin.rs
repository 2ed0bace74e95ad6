//! Owner-only configuration handlers.

use cosmwasm_std::{Binary, Deps, DepsMut, Event, HexBinary, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Config, ASSET_HASHES, CONFIG, PROXY_HASHES};

fn load_owned_config(deps: Deps, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotOwner);
    }
    Ok(config)
}

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = load_owned_config(deps.as_ref(), &info)?;
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let old_owner = std::mem::replace(&mut config.owner, new_owner.clone());
    CONFIG.save(deps.storage, &config)?;

    let event = Event::new("transfer_ownership")
        .add_attribute("old_owner", old_owner)
        .add_attribute("new_owner", new_owner);

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "transfer_ownership"))
}

pub fn execute_set_manager(
    deps: DepsMut,
    info: MessageInfo,
    manager: String,
) -> Result<Response, ContractError> {
    let mut config = load_owned_config(deps.as_ref(), &info)?;
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
    load_owned_config(deps.as_ref(), &info)?;
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
    from_asset: String,
    to_chain_id: u64,
    to_asset: HexBinary,
) -> Result<Response, ContractError> {
    load_owned_config(deps.as_ref(), &info)?;
    if to_asset.is_empty() {
        return Err(ContractError::EmptyBinding);
    }
    let from_asset = deps.api.addr_validate(&from_asset)?;
    ASSET_HASHES.save(
        deps.storage,
        (to_chain_id, &from_asset),
        &Binary::from(to_asset.to_vec()),
    )?;

    Ok(Response::new()
        .add_attribute("action", "bind_asset_hash")
        .add_attribute("from_asset", from_asset)
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("to_asset", to_asset.to_hex()))
}
