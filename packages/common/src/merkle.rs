//! Merkle audit paths over the relay chain's cross-state root.
//!
//! Leaves hash as `sha256(0x00 || value)` and inner nodes as
//! `sha256(0x01 || left || right)`. A proof is the var-bytes leaf value
//! followed by one `(position, sibling)` pair per level, leaf upward. Position
//! `0` puts the sibling on the left and `1` on the right; any other byte is
//! rejected.

use thiserror::Error;

use crate::codec::{CodecError, Sink, Source, HASH_LEN};
use crate::sha256;

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;
const PATH_ENTRY_LEN: usize = 1 + HASH_LEN;

const SIBLING_LEFT: u8 = 0;
const SIBLING_RIGHT: u8 = 1;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Malformed audit path: {0}")]
    Codec(#[from] CodecError),

    #[error("Malformed audit path: {remaining} trailing bytes are not whole entries")]
    PartialEntry { remaining: usize },

    #[error("Malformed audit path: invalid position byte {position} at level {level}")]
    InvalidPosition { position: u8, level: usize },

    #[error("Merkle root mismatch: expected {expected}, computed {computed}")]
    RootMismatch { expected: String, computed: String },

    #[error("Leaf index {index} out of range for {size} leaves")]
    IndexOutOfRange { index: usize, size: usize },
}

pub fn hash_leaf(value: &[u8]) -> [u8; HASH_LEN] {
    let mut buf = Vec::with_capacity(value.len() + 1);
    buf.push(LEAF_PREFIX);
    buf.extend_from_slice(value);
    sha256(&buf)
}

pub fn hash_children(left: &[u8; HASH_LEN], right: &[u8; HASH_LEN]) -> [u8; HASH_LEN] {
    let mut buf = [0u8; 1 + 2 * HASH_LEN];
    buf[0] = NODE_PREFIX;
    buf[1..1 + HASH_LEN].copy_from_slice(left);
    buf[1 + HASH_LEN..].copy_from_slice(right);
    sha256(&buf)
}

/// Walks the audit path and returns the leaf value when it reproduces `root`.
pub fn prove(proof: &[u8], root: &[u8; HASH_LEN]) -> Result<Vec<u8>, MerkleError> {
    let mut source = Source::new(proof);
    let value = source.read_var_bytes()?;

    let remaining = source.remaining();
    if remaining % PATH_ENTRY_LEN != 0 {
        return Err(MerkleError::PartialEntry { remaining });
    }

    let mut hash = hash_leaf(value);
    for level in 0..remaining / PATH_ENTRY_LEN {
        let position = source.read_u8()?;
        let sibling = source.read_hash()?;
        hash = match position {
            SIBLING_LEFT => hash_children(&sibling, &hash),
            SIBLING_RIGHT => hash_children(&hash, &sibling),
            _ => return Err(MerkleError::InvalidPosition { position, level }),
        };
    }

    if &hash != root {
        return Err(MerkleError::RootMismatch {
            expected: hex::encode(root),
            computed: hex::encode(hash),
        });
    }
    Ok(value.to_vec())
}

// ============ Tree building ============

/// Root of the tree over `leaves`, splitting at the largest power of two
/// below the leaf count.
pub fn merkle_root<T: AsRef<[u8]>>(leaves: &[T]) -> [u8; HASH_LEN] {
    match leaves.len() {
        0 => sha256(&[]),
        1 => hash_leaf(leaves[0].as_ref()),
        n => {
            let k = split_point(n);
            hash_children(&merkle_root(&leaves[..k]), &merkle_root(&leaves[k..]))
        }
    }
}

/// Encoded audit path for `leaves[index]`, in the form [`prove`] consumes.
pub fn audit_path<T: AsRef<[u8]>>(leaves: &[T], index: usize) -> Result<Vec<u8>, MerkleError> {
    if index >= leaves.len() {
        return Err(MerkleError::IndexOutOfRange {
            index,
            size: leaves.len(),
        });
    }
    let mut entries = Vec::new();
    collect_path(leaves, index, &mut entries);

    let mut sink = Sink::new();
    sink.write_var_bytes(leaves[index].as_ref());
    for (position, sibling) in entries {
        sink.write_u8(position);
        sink.write_hash(&sibling);
    }
    Ok(sink.into_bytes())
}

fn collect_path<T: AsRef<[u8]>>(leaves: &[T], index: usize, out: &mut Vec<(u8, [u8; HASH_LEN])>) {
    if leaves.len() <= 1 {
        return;
    }
    let k = split_point(leaves.len());
    if index < k {
        collect_path(&leaves[..k], index, out);
        out.push((SIBLING_RIGHT, merkle_root(&leaves[k..])));
    } else {
        collect_path(&leaves[k..], index - k, out);
        out.push((SIBLING_LEFT, merkle_root(&leaves[..k])));
    }
}

fn split_point(n: usize) -> usize {
    let mut k = 1;
    while k << 1 < n {
        k <<= 1;
    }
    k
}
