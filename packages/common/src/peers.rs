//! Consensus peer set of the relay chain.

use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;

use crate::codec::{CodecError, Sink, Source};
use crate::header::ChainConfig;

/// Compressed SEC1 public key length
pub const COMPRESSED_KEY_LEN: usize = 33;
/// Uncompressed SEC1 public key length
pub const UNCOMPRESSED_KEY_LEN: usize = 65;

#[cw_serde]
pub struct ConsensusPeer {
    pub index: u32,
    pub pubkey_id: String,
}

/// Peers keyed by public key id, plus the chain and height they were
/// adopted at.
#[cw_serde]
#[derive(Default)]
pub struct ConsensusPeers {
    pub chain_id: u64,
    pub height: u32,
    pub peers: BTreeMap<String, ConsensusPeer>,
}

impl ConsensusPeers {
    pub fn from_chain_config(chain_id: u64, height: u32, config: &ChainConfig) -> Self {
        let peers = config
            .peers
            .iter()
            .map(|p| {
                (
                    p.id.clone(),
                    ConsensusPeer {
                        index: p.index,
                        pubkey_id: p.id.clone(),
                    },
                )
            })
            .collect();
        Self {
            chain_id,
            height,
            peers,
        }
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn contains(&self, pubkey_id: &str) -> bool {
        self.peers.contains_key(pubkey_id)
    }

    /// Strictly more than two thirds of the set.
    pub fn is_quorum(&self, signers: usize) -> bool {
        signers * 3 > self.peers.len() * 2
    }

    /// Peers are written in descending key order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut sink = Sink::new();
        sink.write_u64(self.chain_id);
        sink.write_u32(self.height);
        sink.write_var_uint(self.peers.len() as u64);
        for peer in self.peers.values().rev() {
            sink.write_u32(peer.index);
            sink.write_string(&peer.pubkey_id);
        }
        sink.into_bytes()
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self, CodecError> {
        let mut source = Source::new(raw);
        let chain_id = source.read_u64()?;
        let height = source.read_u32()?;
        let count = source.read_var_uint()?;
        let mut peers = BTreeMap::new();
        for _ in 0..count {
            let index = source.read_u32()?;
            let pubkey_id = source.read_string()?;
            peers.insert(pubkey_id.clone(), ConsensusPeer { index, pubkey_id });
        }
        Ok(Self {
            chain_id,
            height,
            peers,
        })
    }
}

/// Hex id of a secp256k1 public key in compressed SEC1 form.
///
/// Uncompressed keys are compressed first so both encodings of the same key
/// map to one id. Returns `None` for anything that is not a SEC1 key.
pub fn pubkey_id(raw: &[u8]) -> Option<String> {
    match raw.len() {
        COMPRESSED_KEY_LEN if raw[0] == 0x02 || raw[0] == 0x03 => Some(hex::encode(raw)),
        UNCOMPRESSED_KEY_LEN if raw[0] == 0x04 => {
            let mut compressed = Vec::with_capacity(COMPRESSED_KEY_LEN);
            compressed.push(0x02 | (raw[64] & 1));
            compressed.extend_from_slice(&raw[1..33]);
            Some(hex::encode(compressed))
        }
        _ => None,
    }
}
