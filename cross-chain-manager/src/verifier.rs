//! Relay header verification against a consensus peer set.

use std::collections::BTreeSet;

use common::{pubkey_id, sha256, ConsensusPeers, Header};
use cosmwasm_std::Api;

use crate::error::ContractError;

const SIGNATURE_LEN: usize = 64;

/// Checks that `header` is signed by a quorum of distinct known peers and
/// returns its hash.
///
/// Signature `i` must be by bookkeeper `i` over `sha256(header.hash())`, as
/// 64-byte `r || s` with an optional trailing recovery byte.
pub fn verify_header(
    api: &dyn Api,
    header: &Header,
    peers: &ConsensusPeers,
) -> Result<[u8; 32], ContractError> {
    let signers = header.bookkeepers.len();
    if !peers.is_quorum(signers) {
        return Err(ContractError::InsufficientSignerQuorum {
            signers,
            peers: peers.len(),
        });
    }
    if header.sig_data.len() != signers {
        return Err(ContractError::SignatureCountMismatch {
            signatures: header.sig_data.len(),
            bookkeepers: signers,
        });
    }

    let mut seen = BTreeSet::new();
    for (index, key) in header.bookkeepers.iter().enumerate() {
        let id = pubkey_id(key).ok_or(ContractError::InvalidPublicKey { index })?;
        if !peers.contains(&id) {
            return Err(ContractError::UnknownBookkeeper { index });
        }
        if !seen.insert(id) {
            return Err(ContractError::DuplicateBookkeeper { index });
        }
    }

    let hash = header.hash();
    let digest = sha256(&hash);
    for (index, (key, sig)) in header
        .bookkeepers
        .iter()
        .zip(header.sig_data.iter())
        .enumerate()
    {
        if sig.len() != SIGNATURE_LEN && sig.len() != SIGNATURE_LEN + 1 {
            return Err(ContractError::SignatureInvalid { index });
        }
        let valid = api
            .secp256k1_verify(&digest, &sig[..SIGNATURE_LEN], key)
            .map_err(|_| ContractError::SignatureInvalid { index })?;
        if !valid {
            return Err(ContractError::SignatureInvalid { index });
        }
    }

    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::testing::{bookkeepers, chain_config_payload, header_at, sign_header, Bookkeeper};
    use cosmwasm_std::testing::mock_dependencies;

    fn peer_set(keepers: &[Bookkeeper]) -> ConsensusPeers {
        let mut genesis = header_at(0);
        genesis.consensus_payload = chain_config_payload(keepers);
        let config = genesis.block_info().unwrap().new_chain_config.unwrap();
        ConsensusPeers::from_chain_config(0, 0, &config)
    }

    fn signed_by(signers: &[&Bookkeeper]) -> Header {
        let mut header = header_at(10);
        header.cross_state_root = [7u8; 32];
        sign_header(&mut header, signers);
        header
    }

    #[test]
    fn test_quorum_boundary() {
        let deps = mock_dependencies();
        let keepers = bookkeepers(7);
        let peers = peer_set(&keepers);

        // 7 peers need 5 signers
        let four: Vec<_> = keepers.iter().take(4).collect();
        assert_eq!(
            verify_header(&deps.api, &signed_by(&four), &peers).unwrap_err(),
            ContractError::InsufficientSignerQuorum {
                signers: 4,
                peers: 7
            }
        );

        let five: Vec<_> = keepers.iter().take(5).collect();
        let header = signed_by(&five);
        assert_eq!(
            verify_header(&deps.api, &header, &peers).unwrap(),
            header.hash()
        );
    }

    #[test]
    fn test_unknown_bookkeeper() {
        let deps = mock_dependencies();
        let keepers = bookkeepers(4);
        let peers = peer_set(&keepers[..3]);

        let signers = vec![&keepers[0], &keepers[3], &keepers[1]];
        assert_eq!(
            verify_header(&deps.api, &signed_by(&signers), &peers).unwrap_err(),
            ContractError::UnknownBookkeeper { index: 1 }
        );
    }

    #[test]
    fn test_duplicate_bookkeeper_does_not_count_twice() {
        let deps = mock_dependencies();
        let keepers = bookkeepers(4);
        let peers = peer_set(&keepers);

        let signers = vec![&keepers[0], &keepers[1], &keepers[1]];
        assert_eq!(
            verify_header(&deps.api, &signed_by(&signers), &peers).unwrap_err(),
            ContractError::DuplicateBookkeeper { index: 2 }
        );
    }

    #[test]
    fn test_tampered_header_rejected() {
        let deps = mock_dependencies();
        let keepers = bookkeepers(3);
        let peers = peer_set(&keepers);

        let all: Vec<_> = keepers.iter().collect();
        let mut header = signed_by(&all);
        header.cross_state_root = [8u8; 32];
        assert_eq!(
            verify_header(&deps.api, &header, &peers).unwrap_err(),
            ContractError::SignatureInvalid { index: 0 }
        );
    }

    #[test]
    fn test_swapped_signatures_rejected() {
        let deps = mock_dependencies();
        let keepers = bookkeepers(3);
        let peers = peer_set(&keepers);

        let all: Vec<_> = keepers.iter().collect();
        let mut header = signed_by(&all);
        header.sig_data.swap(0, 1);
        assert_eq!(
            verify_header(&deps.api, &header, &peers).unwrap_err(),
            ContractError::SignatureInvalid { index: 0 }
        );
    }

    #[test]
    fn test_recovery_byte_accepted() {
        let deps = mock_dependencies();
        let keepers = bookkeepers(3);
        let peers = peer_set(&keepers);

        let all: Vec<_> = keepers.iter().collect();
        let mut header = signed_by(&all);
        for sig in header.sig_data.iter_mut() {
            sig.push(0x01);
        }
        assert!(verify_header(&deps.api, &header, &peers).is_ok());

        header.sig_data.pop();
        assert_eq!(
            verify_header(&deps.api, &header, &peers).unwrap_err(),
            ContractError::SignatureCountMismatch {
                signatures: 2,
                bookkeepers: 3
            }
        );
    }
}
