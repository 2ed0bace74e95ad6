//! Inbound message verification and dispatch.

use std::collections::BTreeMap;

use common::{prove, Header, ToMerkleValue};
use cosmwasm_std::{
    to_json_binary, Addr, Api, Binary, DepsMut, Event, HexBinary, Response, WasmMsg,
};

use crate::error::ContractError;
use crate::msg::CrossChainCall;
use crate::registry;
use crate::state::{CONFIG, FROM_POLY_TXS};
use crate::verifier::verify_header;

/// Proves a message against a relay header and dispatches it.
///
/// Headers at or above the epoch height are verified directly. Older headers
/// must be committed in the block root of an anchor header that verifies
/// against the current set.
///
/// The replay record is written before the target is invoked. A failing
/// target aborts the whole transaction, record included, so the message can
/// be resubmitted.
pub fn execute_verify_header_and_execute_tx(
    deps: DepsMut,
    proof: HexBinary,
    raw_header: HexBinary,
    header_proof: HexBinary,
    cur_raw_header: HexBinary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let peers = registry::load(deps.storage)?;
    let epoch = registry::epoch_height(deps.storage)?;

    let header = Header::from_bytes(raw_header.as_slice())?;
    if header.height >= epoch {
        verify_header(deps.api, &header, &peers)?;
    } else {
        let anchor = Header::from_bytes(cur_raw_header.as_slice())?;
        verify_header(deps.api, &anchor, &peers)?;
        let committed = prove(header_proof.as_slice(), &anchor.block_root)?;
        if committed != header.hash() {
            return Err(ContractError::HeaderNotInAnchor);
        }
    }

    let leaf = prove(proof.as_slice(), &header.cross_state_root)?;
    let value = ToMerkleValue::from_bytes(&leaf)?;
    let param = value.make_tx_param;

    let replay_key = (value.from_chain_id, param.cross_chain_id.as_slice());
    if FROM_POLY_TXS.has(deps.storage, replay_key) {
        return Err(ContractError::AlreadyExecuted {
            from_chain_id: value.from_chain_id,
            cross_chain_id: hex::encode(&param.cross_chain_id),
        });
    }
    if param.to_chain_id != config.chain_id {
        return Err(ContractError::WrongDestinationChain {
            expected: config.chain_id,
            got: param.to_chain_id,
        });
    }
    if param.method.is_empty() {
        return Err(ContractError::EmptyMethod);
    }
    let target = target_address(deps.api, &param.to_contract)?;

    FROM_POLY_TXS.save(deps.storage, replay_key, &Binary::from(value.tx_hash.clone()))?;

    let call = BTreeMap::from([(
        param.method.clone(),
        CrossChainCall {
            args: HexBinary::from(param.args),
            from_contract: HexBinary::from(param.from_contract.clone()),
            from_chain_id: value.from_chain_id,
        },
    )]);
    let msg = WasmMsg::Execute {
        contract_addr: target.to_string(),
        msg: to_json_binary(&call)?,
        funds: vec![],
    };

    let event = Event::new("verify_header_and_execute_tx")
        .add_attribute("from_chain_id", value.from_chain_id.to_string())
        .add_attribute("cross_chain_id", hex::encode(&param.cross_chain_id))
        .add_attribute("poly_tx_hash", hex::encode(&value.tx_hash))
        .add_attribute("from_contract", hex::encode(&param.from_contract))
        .add_attribute("to_contract", target.to_string())
        .add_attribute("method", param.method);

    Ok(Response::new()
        .add_message(msg)
        .add_event(event)
        .add_attribute("action", "verify_header_and_execute_tx")
        .add_attribute("header_height", header.height.to_string()))
}

/// Target contracts are addressed by the UTF-8 bytes of their bech32 address.
fn target_address(api: &dyn Api, raw: &[u8]) -> Result<Addr, ContractError> {
    let addr = std::str::from_utf8(raw).map_err(|_| ContractError::InvalidTargetContract {
        reason: "address is not valid UTF-8".to_string(),
    })?;
    api.addr_validate(addr)
        .map_err(|e| ContractError::InvalidTargetContract {
            reason: e.to_string(),
        })
}
