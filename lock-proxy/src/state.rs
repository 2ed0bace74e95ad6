//! State definitions for the lock proxy

use common::AmountEncoding;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:poly-lock-proxy";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Cross-chain manager; the only caller allowed to unlock
    pub manager: Option<Addr>,
    /// Wire form of amounts in tx args, shared with every remote proxy
    pub amount_encoding: AmountEncoding,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Remote proxy by chain id
pub const PROXY_HASHES: Map<u64, Binary> = Map::new("proxy");

/// Remote asset by (chain id, local asset)
pub const ASSET_HASHES: Map<(u64, &Addr), Binary> = Map::new("asset");
