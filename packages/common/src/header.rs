//! Block header of the relay chain and the consensus payload it may carry.

use cosmwasm_std::{from_json, StdResult};
use serde::Deserialize;

use crate::codec::{CodecError, Sink, Source};
use crate::sha256;

/// Width of the `next_bookkeeper` address
pub const ADDRESS_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    pub version: u32,
    pub chain_id: u64,
    pub prev_block_hash: [u8; 32],
    pub transactions_root: [u8; 32],
    pub cross_state_root: [u8; 32],
    pub block_root: [u8; 32],
    pub timestamp: u32,
    pub height: u32,
    pub consensus_data: u64,
    pub consensus_payload: Vec<u8>,
    pub next_bookkeeper: [u8; ADDRESS_LEN],
    /// Public keys of the signers, in signature order
    pub bookkeepers: Vec<Vec<u8>>,
    pub sig_data: Vec<Vec<u8>>,
}

impl Header {
    /// Fields covered by the block hash.
    pub fn serialize_unsigned(&self, sink: &mut Sink) {
        sink.write_u32(self.version);
        sink.write_u64(self.chain_id);
        sink.write_hash(&self.prev_block_hash);
        sink.write_hash(&self.transactions_root);
        sink.write_hash(&self.cross_state_root);
        sink.write_hash(&self.block_root);
        sink.write_u32(self.timestamp);
        sink.write_u32(self.height);
        sink.write_u64(self.consensus_data);
        sink.write_var_bytes(&self.consensus_payload);
        sink.write_bytes(&self.next_bookkeeper);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut sink = Sink::new();
        self.serialize_unsigned(&mut sink);
        sink.write_var_uint(self.bookkeepers.len() as u64);
        for key in &self.bookkeepers {
            sink.write_var_bytes(key);
        }
        sink.write_var_uint(self.sig_data.len() as u64);
        for sig in &self.sig_data {
            sink.write_var_bytes(sig);
        }
        sink.into_bytes()
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self, CodecError> {
        let mut source = Source::new(raw);
        let mut header = Header {
            version: source.read_u32()?,
            chain_id: source.read_u64()?,
            prev_block_hash: source.read_hash()?,
            transactions_root: source.read_hash()?,
            cross_state_root: source.read_hash()?,
            block_root: source.read_hash()?,
            timestamp: source.read_u32()?,
            height: source.read_u32()?,
            consensus_data: source.read_u64()?,
            consensus_payload: source.read_var_bytes()?.to_vec(),
            ..Default::default()
        };
        header
            .next_bookkeeper
            .copy_from_slice(source.next_bytes(ADDRESS_LEN)?);
        header.bookkeepers = read_list(&mut source)?;
        header.sig_data = read_list(&mut source)?;
        Ok(header)
    }

    /// Double sha256 over the unsigned fields.
    pub fn hash(&self) -> [u8; 32] {
        let mut sink = Sink::new();
        self.serialize_unsigned(&mut sink);
        sha256(&sha256(sink.as_slice()))
    }

    /// Parses the consensus payload. Only epoch-switch headers carry a
    /// `new_chain_config`.
    pub fn block_info(&self) -> StdResult<VbftBlockInfo> {
        from_json(&self.consensus_payload)
    }
}

fn read_list(source: &mut Source) -> Result<Vec<Vec<u8>>, CodecError> {
    let count = source.read_var_uint()?;
    // each entry takes at least its one-byte length prefix
    let remaining = source.remaining();
    if count > remaining as u64 {
        return Err(CodecError::Truncated {
            needed: usize::try_from(count).unwrap_or(usize::MAX),
            remaining,
        });
    }
    (0..count)
        .map(|_| source.read_var_bytes().map(<[u8]>::to_vec))
        .collect()
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VbftBlockInfo {
    #[serde(default)]
    pub new_chain_config: Option<ChainConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    #[serde(default)]
    pub peers: Vec<PeerConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PeerConfig {
    pub index: u32,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Header {
        Header {
            version: 0,
            chain_id: 0,
            prev_block_hash: [1u8; 32],
            transactions_root: [2u8; 32],
            cross_state_root: [3u8; 32],
            block_root: [4u8; 32],
            timestamp: 1_600_000_000,
            height: 120,
            consensus_data: 42,
            consensus_payload: br#"{"leader":1}"#.to_vec(),
            next_bookkeeper: [5u8; ADDRESS_LEN],
            bookkeepers: vec![vec![0x02; 33], vec![0x03; 33]],
            sig_data: vec![vec![0xAA; 65], vec![0xBB; 65]],
        }
    }

    #[test]
    fn test_header_decode() {
        let header = sample();
        let decoded = Header::from_bytes(&header.to_bytes()).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_hash_ignores_signatures() {
        let header = sample();
        let mut resigned = header.clone();
        resigned.sig_data = vec![vec![0xCC; 65]];
        assert_eq!(header.hash(), resigned.hash());

        let mut other = header.clone();
        other.height += 1;
        assert_ne!(header.hash(), other.hash());
    }

    #[test]
    fn test_truncated_header() {
        let raw = sample().to_bytes();
        let err = Header::from_bytes(&raw[..raw.len() - 10]).unwrap_err();
        assert!(matches!(err, CodecError::Truncated { .. }));
    }

    #[test]
    fn test_block_info_without_config() {
        let info = sample().block_info().unwrap();
        assert!(info.new_chain_config.is_none());
    }

    #[test]
    fn test_block_info_with_peers() {
        let mut header = sample();
        header.consensus_payload =
            br#"{"leader":1,"new_chain_config":{"view":2,"peers":[{"index":1,"id":"0203"}]}}"#
                .to_vec();
        let config = header.block_info().unwrap().new_chain_config.unwrap();
        assert_eq!(
            config.peers,
            vec![PeerConfig {
                index: 1,
                id: "0203".to_string()
            }]
        );
    }
}
