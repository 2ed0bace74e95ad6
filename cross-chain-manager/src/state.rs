//! State definitions for the cross-chain manager

use common::ConsensusPeers;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint256};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:poly-cross-chain-manager";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Chain id of this chain in the relay network
    pub chain_id: u64,
    /// Instantiating account, allowed to install the genesis peer set
    pub deployer: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

// ============================================================================
// Relay Chain Consensus
// ============================================================================

/// Current consensus peer set, replaced wholesale on every rotation
pub const CONSENSUS_PEERS: Item<ConsensusPeers> = Item::new("consensus_peers");

/// Height of the header the current peer set was adopted from
pub const EPOCH_HEIGHT: Item<u32> = Item::new("epoch_height");

/// Raw genesis header, written once
pub const GENESIS_HEADER: Item<Binary> = Item::new("genesis_header");

// ============================================================================
// Messages
// ============================================================================

/// Next outbound cross-chain id
pub const CROSS_CHAIN_COUNTER: Item<Uint256> = Item::new("cross_chain_counter");

/// Serialized outbound params by 32-byte cross-chain id
pub const TO_POLY_TXS: Map<&[u8], Binary> = Map::new("to_poly");

/// Executed inbound messages by (source chain, cross-chain id), holding the
/// relay chain tx hash
pub const FROM_POLY_TXS: Map<(u64, &[u8]), Binary> = Map::new("from_poly");
