//! Query handlers for the cross-chain manager.

use cosmwasm_std::{Deps, HexBinary, StdError, StdResult};

use crate::msg::{
    ConfigResponse, ConsensusPeersResponse, CrossChainCounterResponse, EpochHeightResponse,
    GenesisHeaderResponse, IsTxExecutedResponse, ToPolyTxResponse,
};
use crate::state::{
    CONFIG, CONSENSUS_PEERS, CROSS_CHAIN_COUNTER, EPOCH_HEIGHT, FROM_POLY_TXS, GENESIS_HEADER,
    TO_POLY_TXS,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        chain_id: config.chain_id,
        deployer: config.deployer,
    })
}

pub fn query_consensus_peers(deps: Deps) -> StdResult<ConsensusPeersResponse> {
    let peers = CONSENSUS_PEERS
        .may_load(deps.storage)?
        .ok_or_else(|| StdError::not_found("consensus peers"))?;
    Ok(ConsensusPeersResponse {
        chain_id: peers.chain_id,
        height: peers.height,
        raw: HexBinary::from(peers.to_bytes()),
        peers: peers.peers.into_values().collect(),
    })
}

pub fn query_epoch_height(deps: Deps) -> StdResult<EpochHeightResponse> {
    let height = EPOCH_HEIGHT.may_load(deps.storage)?.unwrap_or_default();
    Ok(EpochHeightResponse { height })
}

pub fn query_cross_chain_counter(deps: Deps) -> StdResult<CrossChainCounterResponse> {
    let counter = CROSS_CHAIN_COUNTER.load(deps.storage)?;
    Ok(CrossChainCounterResponse { counter })
}

pub fn query_to_poly_tx(deps: Deps, cross_chain_id: HexBinary) -> StdResult<ToPolyTxResponse> {
    let raw_param = TO_POLY_TXS
        .may_load(deps.storage, cross_chain_id.as_slice())?
        .map(|raw| HexBinary::from(raw.to_vec()));
    Ok(ToPolyTxResponse {
        cross_chain_id,
        raw_param,
    })
}

pub fn query_is_tx_executed(
    deps: Deps,
    from_chain_id: u64,
    cross_chain_id: HexBinary,
) -> StdResult<IsTxExecutedResponse> {
    let executed = FROM_POLY_TXS.has(deps.storage, (from_chain_id, cross_chain_id.as_slice()));
    Ok(IsTxExecutedResponse { executed })
}

pub fn query_genesis_header(deps: Deps) -> StdResult<GenesisHeaderResponse> {
    let raw_header = GENESIS_HEADER
        .may_load(deps.storage)?
        .map(|raw| HexBinary::from(raw.to_vec()));
    Ok(GenesisHeaderResponse { raw_header })
}
