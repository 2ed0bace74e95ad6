//! Consensus peer registry.
//!
//! The set is read and written whole. The epoch height always equals the
//! height of the stored set.

use common::ConsensusPeers;
use cosmwasm_std::{StdResult, Storage};

use crate::error::ContractError;
use crate::state::{CONSENSUS_PEERS, EPOCH_HEIGHT};

pub fn load(storage: &dyn Storage) -> Result<ConsensusPeers, ContractError> {
    CONSENSUS_PEERS
        .may_load(storage)?
        .ok_or(ContractError::GenesisNotInitialized)
}

pub fn epoch_height(storage: &dyn Storage) -> Result<u32, ContractError> {
    EPOCH_HEIGHT
        .may_load(storage)?
        .ok_or(ContractError::GenesisNotInitialized)
}

pub fn is_initialized(storage: &dyn Storage) -> bool {
    CONSENSUS_PEERS.exists(storage)
}

/// Unconditional write, used to install the genesis set.
pub fn store(storage: &mut dyn Storage, peers: &ConsensusPeers) -> StdResult<()> {
    CONSENSUS_PEERS.save(storage, peers)?;
    EPOCH_HEIGHT.save(storage, &peers.height)
}

/// Replaces the stored set only when `peers` is from a later height.
pub fn adopt(storage: &mut dyn Storage, peers: &ConsensusPeers) -> Result<(), ContractError> {
    let epoch = epoch_height(storage)?;
    if peers.height <= epoch {
        return Err(ContractError::StaleEpoch {
            epoch,
            height: peers.height,
        });
    }
    store(storage, peers)?;
    Ok(())
}
