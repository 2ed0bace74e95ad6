//! Bookkeeper keys and header signing for tests.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};

use crate::header::Header;
use crate::sha256;

pub struct Bookkeeper {
    key: SigningKey,
}

impl Bookkeeper {
    /// Deterministic key derived from `seed`
    pub fn from_seed(seed: u8) -> Self {
        let secret = sha256(&[b'b', b'k', seed]);
        let key = SigningKey::from_slice(&secret).expect("valid secp256k1 scalar");
        Self { key }
    }

    /// Compressed SEC1 public key
    pub fn public_key(&self) -> Vec<u8> {
        self.key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    pub fn pubkey_id(&self) -> String {
        hex::encode(self.public_key())
    }

    /// Signs `sha256(header_hash)`, the digest the manager verifies.
    pub fn sign(&self, header_hash: &[u8; 32]) -> Vec<u8> {
        let digest = sha256(header_hash);
        let signature: Signature = self.key.sign_prehash(&digest).expect("prehash signing");
        signature.to_bytes().to_vec()
    }
}

pub fn bookkeepers(n: u8) -> Vec<Bookkeeper> {
    (1..=n).map(Bookkeeper::from_seed).collect()
}

/// Consensus payload announcing `peers` as the next set.
pub fn chain_config_payload(peers: &[Bookkeeper]) -> Vec<u8> {
    let entries: Vec<String> = peers
        .iter()
        .enumerate()
        .map(|(i, p)| format!(r#"{{"index":{},"id":"{}"}}"#, i + 1, p.pubkey_id()))
        .collect();
    format!(
        r#"{{"leader":1,"vrf_value":"","new_chain_config":{{"version":1,"view":1,"n":{},"peers":[{}]}}}}"#,
        peers.len(),
        entries.join(",")
    )
    .into_bytes()
}

/// Unsigned header for the relay chain at `height`.
pub fn header_at(height: u32) -> Header {
    Header {
        height,
        timestamp: 1_600_000_000 + height,
        ..Default::default()
    }
}

/// Replaces the signer list and signatures of `header`.
pub fn sign_header(header: &mut Header, signers: &[&Bookkeeper]) {
    let hash = header.hash();
    header.bookkeepers = signers.iter().map(|s| s.public_key()).collect();
    header.sig_data = signers.iter().map(|s| s.sign(&hash)).collect();
}
