//! Common - Shared Types and Utilities for the Poly Bridge Contracts
//!
//! This package holds everything both ends of a cross-chain message must agree
//! on byte-for-byte: the binary codec, the remote chain's block header, the
//! consensus peer set, Merkle audit paths and the message envelope.

pub mod bigint;
pub mod codec;
pub mod cross_chain;
pub mod header;
pub mod merkle;
pub mod peers;
#[cfg(feature = "testing")]
pub mod testing;

pub use bigint::NeoInt;
pub use codec::{CodecError, Sink, Source};
pub use cross_chain::{AmountEncoding, MakeTxParam, ToMerkleValue, TxArgs};
pub use header::{ChainConfig, Header, PeerConfig, VbftBlockInfo};
pub use merkle::{audit_path, merkle_root, prove, MerkleError};
pub use peers::{pubkey_id, ConsensusPeer, ConsensusPeers};

use sha2::{Digest, Sha256};

/// sha256 of `data`
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}
