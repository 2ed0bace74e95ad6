//! State definitions for the token contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:poly-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Token-native cross-chain mode; fixed at instantiation
    pub cross_chain: bool,
    /// Cross-chain manager used by `Lock` and allowed to `Unlock`
    pub manager: Option<Addr>,
    /// Lock proxy allowed to move escrowed balances
    pub lock_proxy: Option<Addr>,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
pub const CONFIG: Item<Config> = Item::new("config");

/// Non-zero balances only
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balance");

/// Non-zero allowances by (owner, spender)
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowance");

/// Remote counterpart that sends and receives `unlock`, by chain id
pub const PROXY_HASHES: Map<u64, Binary> = Map::new("proxy_hash");

/// Remote asset credited on unlock, by chain id
pub const ASSET_HASHES: Map<u64, Binary> = Map::new("asset_hash");
