//! Outbound message registration.

use common::{sha256, MakeTxParam, Sink};
use cosmwasm_std::{
    Binary, DepsMut, Env, Event, HexBinary, MessageInfo, Response, StdError, Uint256,
};

use crate::error::ContractError;
use crate::state::{CONFIG, CROSS_CHAIN_COUNTER, TO_POLY_TXS};

/// Records a message for the relay chain under the next cross-chain id.
///
/// The id is the counter as 32 big-endian bytes and is returned as the
/// response data. The local tx hash commits to the chain id, the block, the
/// transaction index and the id.
pub fn execute_cross_chain(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to_chain_id: u64,
    to_contract: HexBinary,
    method: String,
    args: HexBinary,
) -> Result<Response, ContractError> {
    if method.is_empty() {
        return Err(ContractError::EmptyMethod);
    }
    let config = CONFIG.load(deps.storage)?;

    let counter = CROSS_CHAIN_COUNTER.load(deps.storage)?;
    let cross_chain_id = counter.to_be_bytes();

    let tx_index = env.transaction.as_ref().map(|t| t.index).unwrap_or_default();
    let mut preimage = Sink::new();
    preimage.write_u64(config.chain_id);
    preimage.write_u64(env.block.height);
    preimage.write_u32(tx_index);
    preimage.write_hash(&cross_chain_id);
    let tx_hash = sha256(preimage.as_slice());

    let param = MakeTxParam {
        tx_hash: tx_hash.to_vec(),
        cross_chain_id: cross_chain_id.to_vec(),
        from_contract: info.sender.as_bytes().to_vec(),
        to_chain_id,
        to_contract: to_contract.to_vec(),
        method,
        args: args.to_vec(),
    };
    let raw = param.to_bytes();

    TO_POLY_TXS.save(deps.storage, &cross_chain_id, &Binary::from(raw.clone()))?;
    let next = counter
        .checked_add(Uint256::one())
        .map_err(StdError::from)?;
    CROSS_CHAIN_COUNTER.save(deps.storage, &next)?;

    let id_hex = hex::encode(cross_chain_id);
    let event = Event::new("cross_chain")
        .add_attribute("key", format!("to_poly-{}", id_hex))
        .add_attribute("cross_chain_id", id_hex.clone())
        .add_attribute("tx_hash", hex::encode(tx_hash))
        .add_attribute("from_contract", info.sender.to_string())
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("to_contract", hex::encode(&param.to_contract))
        .add_attribute("method", param.method)
        .add_attribute("raw_param", hex::encode(&raw));

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "cross_chain")
        .add_attribute("cross_chain_id", id_hex)
        .set_data(Binary::from(cross_chain_id.to_vec())))
}
