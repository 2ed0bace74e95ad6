//! Error types for the lock proxy

use common::CodecError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the owner can perform this action")]
    NotOwner,

    #[error("Unauthorized: only the cross-chain manager can unlock")]
    NotManager,

    #[error("Cross-chain manager not set")]
    ManagerNotSet,

    #[error("Unknown source proxy for chain {from_chain_id}")]
    UnknownSourceProxy { from_chain_id: u64 },

    // ========================================================================
    // Binding Errors
    // ========================================================================

    #[error("No proxy binding for chain {to_chain_id}")]
    NoProxyBinding { to_chain_id: u64 },

    #[error("No asset binding for {asset} on chain {to_chain_id}")]
    NoAssetBinding { asset: String, to_chain_id: u64 },

    #[error("Binding target must not be empty")]
    EmptyBinding,

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Destination address must not be empty")]
    EmptyToAddress,

    #[error("Amount {amount} exceeds the token amount range")]
    AmountOverflow { amount: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid tx args: {0}")]
    Codec(#[from] CodecError),
}
