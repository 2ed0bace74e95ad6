//! Query handlers for the lock proxy.

use cosmwasm_std::{Deps, Env, HexBinary, StdResult};

use crate::msg::{
    AssetHashResponse, ConfigResponse, LockProxyAddrResponse, ManagerResponse, OwnerResponse,
    ProxyHashResponse,
};
use crate::state::{ASSET_HASHES, CONFIG, PROXY_HASHES};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        manager: config.manager,
        amount_encoding: config.amount_encoding,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
    })
}

pub fn query_manager(deps: Deps) -> StdResult<ManagerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ManagerResponse {
        manager: config.manager,
    })
}

pub fn query_lock_proxy_addr(env: Env) -> LockProxyAddrResponse {
    LockProxyAddrResponse {
        address: env.contract.address,
    }
}

pub fn query_proxy_hash(deps: Deps, to_chain_id: u64) -> StdResult<ProxyHashResponse> {
    let proxy_hash = PROXY_HASHES
        .may_load(deps.storage, to_chain_id)?
        .map(|raw| HexBinary::from(raw.to_vec()));
    Ok(ProxyHashResponse {
        to_chain_id,
        proxy_hash,
    })
}

pub fn query_asset_hash(
    deps: Deps,
    from_asset: String,
    to_chain_id: u64,
) -> StdResult<AssetHashResponse> {
    let asset = deps.api.addr_validate(&from_asset)?;
    let asset_hash = ASSET_HASHES
        .may_load(deps.storage, (to_chain_id, &asset))?
        .map(|raw| HexBinary::from(raw.to_vec()));
    Ok(AssetHashResponse {
        from_asset,
        to_chain_id,
        asset_hash,
    })
}
