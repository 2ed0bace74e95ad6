//! Error types for the cross-chain manager

use common::{CodecError, MerkleError};
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the deployer can perform this action")]
    Unauthorized,

    // ========================================================================
    // Genesis Errors
    // ========================================================================

    #[error("Genesis block already initialized")]
    GenesisAlreadyInitialized,

    #[error("Genesis block not initialized")]
    GenesisNotInitialized,

    #[error("No new chain config in consensus payload")]
    NoNewChainConfig,

    #[error("Chain config announces an empty peer set")]
    EmptyPeerSet,

    #[error("Invalid consensus payload: {reason}")]
    InvalidConsensusPayload { reason: String },

    // ========================================================================
    // Verification Errors
    // ========================================================================

    #[error("Insufficient signer quorum: {signers} of {peers} peers signed")]
    InsufficientSignerQuorum { signers: usize, peers: usize },

    #[error("Signature count {signatures} does not match bookkeeper count {bookkeepers}")]
    SignatureCountMismatch {
        signatures: usize,
        bookkeepers: usize,
    },

    #[error("Invalid public key for bookkeeper {index}")]
    InvalidPublicKey { index: usize },

    #[error("Unknown bookkeeper {index}")]
    UnknownBookkeeper { index: usize },

    #[error("Duplicate bookkeeper {index}")]
    DuplicateBookkeeper { index: usize },

    #[error("Invalid signature from bookkeeper {index}")]
    SignatureInvalid { index: usize },

    #[error("Stale epoch: header height {height} is not above epoch height {epoch}")]
    StaleEpoch { epoch: u32, height: u32 },

    #[error("Header hash does not match the anchor header proof")]
    HeaderNotInAnchor,

    // ========================================================================
    // Relay Errors
    // ========================================================================

    #[error("Cross-chain tx already executed: chain {from_chain_id}, id {cross_chain_id}")]
    AlreadyExecuted {
        from_chain_id: u64,
        cross_chain_id: String,
    },

    #[error("Wrong destination chain: expected {expected}, got {got}")]
    WrongDestinationChain { expected: u64, got: u64 },

    #[error("Invalid target contract: {reason}")]
    InvalidTargetContract { reason: String },

    #[error("Method must not be empty")]
    EmptyMethod,

    // ========================================================================
    // Decoding Errors
    // ========================================================================

    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("{0}")]
    Merkle(#[from] MerkleError),
}
