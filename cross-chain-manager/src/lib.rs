//! Poly Cross-Chain Manager Contract
//!
//! Anchors this chain to the relay chain. Relay headers are trusted only when
//! signed by a quorum of the registered consensus peers; the peer set itself
//! is installed once at genesis and rotated only through verified headers.
//!
//! Outbound messages are recorded under an incrementing cross-chain id for
//! relayers to pick up. Inbound messages are proven against a verified header's
//! cross-state root, guarded against replay and dispatched to their target.

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod registry;
pub mod state;
pub mod verifier;

pub use crate::error::ContractError;
