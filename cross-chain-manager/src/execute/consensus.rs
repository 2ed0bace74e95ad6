//! Consensus peer set handlers.

use common::{ConsensusPeers, Header};
use cosmwasm_std::{Binary, DepsMut, Event, HexBinary, MessageInfo, Response};

use crate::error::ContractError;
use crate::registry;
use crate::state::{CONFIG, GENESIS_HEADER};
use crate::verifier::verify_header;

/// Installs the genesis peer set without verification. Deployer only, once.
pub fn execute_init_genesis_block(
    deps: DepsMut,
    info: MessageInfo,
    raw_header: HexBinary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.deployer {
        return Err(ContractError::Unauthorized);
    }
    if registry::is_initialized(deps.storage) {
        return Err(ContractError::GenesisAlreadyInitialized);
    }

    let header = Header::from_bytes(raw_header.as_slice())?;
    let peers = announced_peers(&header)?;

    GENESIS_HEADER.save(deps.storage, &Binary::from(raw_header.to_vec()))?;
    registry::store(deps.storage, &peers)?;

    Ok(Response::new()
        .add_attribute("action", "init_genesis_block")
        .add_attribute("height", header.height.to_string())
        .add_attribute("peer_count", peers.len().to_string()))
}

/// Adopts the peer set announced by a header signed by the current set.
pub fn execute_change_book_keeper(
    deps: DepsMut,
    raw_header: HexBinary,
) -> Result<Response, ContractError> {
    let peers = registry::load(deps.storage)?;
    let epoch = registry::epoch_height(deps.storage)?;

    let header = Header::from_bytes(raw_header.as_slice())?;
    if header.height <= epoch {
        return Err(ContractError::StaleEpoch {
            epoch,
            height: header.height,
        });
    }

    verify_header(deps.api, &header, &peers)?;
    let next = announced_peers(&header)?;
    registry::adopt(deps.storage, &next)?;

    let event = Event::new("change_book_keeper")
        .add_attribute("height", header.height.to_string())
        .add_attribute("peer_count", next.len().to_string())
        .add_attribute("raw_peers", hex::encode(next.to_bytes()));

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "change_book_keeper")
        .add_attribute("previous_epoch", epoch.to_string()))
}

fn announced_peers(header: &Header) -> Result<ConsensusPeers, ContractError> {
    let info = header
        .block_info()
        .map_err(|e| ContractError::InvalidConsensusPayload {
            reason: e.to_string(),
        })?;
    let config = info
        .new_chain_config
        .ok_or(ContractError::NoNewChainConfig)?;
    if config.peers.is_empty() {
        return Err(ContractError::EmptyPeerSet);
    }
    Ok(ConsensusPeers::from_chain_config(
        header.chain_id,
        header.height,
        &config,
    ))
}
