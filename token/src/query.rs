//! Query handlers for the token contract.

use cosmwasm_std::{Deps, HexBinary, StdResult};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};

use crate::ledger;
use crate::msg::{
    AssetHashResponse, IsCrossChainOnResponse, LockProxyResponse, ManagerResponse, OwnerResponse,
    ProxyHashResponse,
};
use crate::state::{ASSET_HASHES, CONFIG, PROXY_HASHES, TOKEN_INFO};

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = ledger::balance_of(deps.storage, &address)?;
    Ok(BalanceResponse { balance })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ledger::allowance(deps.storage, &owner, &spender)?;
    Ok(AllowanceResponse {
        allowance,
        expires: Expiration::Never {},
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

pub fn query_lock_proxy(deps: Deps) -> StdResult<LockProxyResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(LockProxyResponse {
        lock_proxy: config.lock_proxy,
    })
}

pub fn query_is_cross_chain_on(deps: Deps) -> StdResult<IsCrossChainOnResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(IsCrossChainOnResponse {
        enabled: config.cross_chain,
    })
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

pub fn query_asset_hash(deps: Deps, to_chain_id: u64) -> StdResult<AssetHashResponse> {
    let asset_hash = ASSET_HASHES
        .may_load(deps.storage, to_chain_id)?
        .map(|raw| HexBinary::from(raw.to_vec()));
    Ok(AssetHashResponse {
        to_chain_id,
        asset_hash,
    })
}
