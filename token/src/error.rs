//! Error types for the token contract

use common::CodecError;
use cosmwasm_std::{StdError, Uint128};
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

    #[error("Unauthorized: only the bound lock proxy can perform this action")]
    NotLockProxy,

    #[error("Unauthorized: only the cross-chain manager can unlock")]
    NotManager,

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Uint128,
        required: Uint128,
    },

    #[error("Insufficient allowance: available {available}, required {required}")]
    InsufficientAllowance {
        available: Uint128,
        required: Uint128,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid token info: {reason}")]
    InvalidTokenInfo { reason: String },

    #[error("Escrowed supply requires a lock proxy or cross-chain mode")]
    EscrowRequired,

    // ========================================================================
    // Cross-Chain Errors
    // ========================================================================

    #[error("Cross-chain mode is not enabled for this token")]
    CrossChainOff,

    #[error("Cross-chain manager not set")]
    ManagerNotSet,

    #[error("No proxy binding for chain {to_chain_id}")]
    NoProxyBinding { to_chain_id: u64 },

    #[error("No asset binding for chain {to_chain_id}")]
    NoAssetBinding { to_chain_id: u64 },

    #[error("Binding target must not be empty")]
    EmptyBinding,

    #[error("Destination address must not be empty")]
    EmptyToAddress,

    #[error("Unknown source proxy for chain {from_chain_id}")]
    UnknownSourceProxy { from_chain_id: u64 },

    /// Tx args name an asset other than this token
    #[error("Unlock targets asset {asset}, not this token")]
    WrongAsset { asset: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid tx args: {0}")]
    Codec(#[from] CodecError),
}
