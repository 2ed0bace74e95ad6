//! Cross-Chain Manager Contract - Entry Points
//!
//! Handlers live in:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint256,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_change_book_keeper, execute_cross_chain, execute_init_genesis_block,
    execute_verify_header_and_execute_tx,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_consensus_peers, query_cross_chain_counter, query_epoch_height,
    query_genesis_header, query_is_tx_executed, query_to_poly_tx,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, CROSS_CHAIN_COUNTER};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        chain_id: msg.chain_id,
        deployer: info.sender,
    };
    CONFIG.save(deps.storage, &config)?;
    CROSS_CHAIN_COUNTER.save(deps.storage, &Uint256::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("chain_id", msg.chain_id.to_string())
        .add_attribute("deployer", config.deployer))
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
        // Consensus
        ExecuteMsg::InitGenesisBlock { raw_header } => {
            execute_init_genesis_block(deps, info, raw_header)
        }
        ExecuteMsg::ChangeBookKeeper { raw_header } => {
            execute_change_book_keeper(deps, raw_header)
        }

        // Messages
        ExecuteMsg::CrossChain {
            to_chain_id,
            to_contract,
            method,
            args,
        } => execute_cross_chain(deps, env, info, to_chain_id, to_contract, method, args),
        ExecuteMsg::VerifyHeaderAndExecuteTx {
            proof,
            raw_header,
            header_proof,
            cur_raw_header,
        } => execute_verify_header_and_execute_tx(
            deps,
            proof,
            raw_header,
            header_proof,
            cur_raw_header,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ConsensusPeers {} => to_json_binary(&query_consensus_peers(deps)?),
        QueryMsg::EpochHeight {} => to_json_binary(&query_epoch_height(deps)?),
        QueryMsg::CrossChainCounter {} => to_json_binary(&query_cross_chain_counter(deps)?),
        QueryMsg::ToPolyTx { cross_chain_id } => {
            to_json_binary(&query_to_poly_tx(deps, cross_chain_id)?)
        }
        QueryMsg::IsTxExecuted {
            from_chain_id,
            cross_chain_id,
        } => to_json_binary(&query_is_tx_executed(deps, from_chain_id, cross_chain_id)?),
        QueryMsg::GenesisHeader {} => to_json_binary(&query_genesis_header(deps)?),
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
