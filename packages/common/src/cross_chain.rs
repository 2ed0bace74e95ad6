//! Cross-chain message envelope and the asset payload carried inside it.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Uint128, Uint256};

use crate::codec::{CodecError, Sink, Source};

/// Method name the lock proxy registers on outbound messages
pub const UNLOCK_METHOD: &str = "unlock";

/// Parameters of an outbound message, committed into the relay chain's state
/// tree and replayed on the destination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MakeTxParam {
    pub tx_hash: Vec<u8>,
    pub cross_chain_id: Vec<u8>,
    pub from_contract: Vec<u8>,
    pub to_chain_id: u64,
    pub to_contract: Vec<u8>,
    pub method: String,
    pub args: Vec<u8>,
}

impl MakeTxParam {
    pub fn write_to(&self, sink: &mut Sink) {
        sink.write_var_bytes(&self.tx_hash);
        sink.write_var_bytes(&self.cross_chain_id);
        sink.write_var_bytes(&self.from_contract);
        sink.write_u64(self.to_chain_id);
        sink.write_var_bytes(&self.to_contract);
        sink.write_string(&self.method);
        sink.write_var_bytes(&self.args);
    }

    pub fn read_from(source: &mut Source) -> Result<Self, CodecError> {
        Ok(Self {
            tx_hash: source.read_var_bytes()?.to_vec(),
            cross_chain_id: source.read_var_bytes()?.to_vec(),
            from_contract: source.read_var_bytes()?.to_vec(),
            to_chain_id: source.read_u64()?,
            to_contract: source.read_var_bytes()?.to_vec(),
            method: source.read_string()?,
            args: source.read_var_bytes()?.to_vec(),
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut sink = Sink::new();
        self.write_to(&mut sink);
        sink.into_bytes()
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self, CodecError> {
        Self::read_from(&mut Source::new(raw))
    }
}

/// Leaf value proven against the cross-state root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToMerkleValue {
    /// Relay chain transaction hash
    pub tx_hash: Vec<u8>,
    pub from_chain_id: u64,
    pub make_tx_param: MakeTxParam,
}

impl ToMerkleValue {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut sink = Sink::new();
        sink.write_var_bytes(&self.tx_hash);
        sink.write_u64(self.from_chain_id);
        self.make_tx_param.write_to(&mut sink);
        sink.into_bytes()
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self, CodecError> {
        let mut source = Source::new(raw);
        Ok(Self {
            tx_hash: source.read_var_bytes()?.to_vec(),
            from_chain_id: source.read_u64()?,
            make_tx_param: MakeTxParam::read_from(&mut source)?,
        })
    }
}

/// Wire form of the amount in [`TxArgs`]. Both ends of a route must agree.
#[cw_serde]
#[derive(Copy, Default, Eq)]
pub enum AmountEncoding {
    /// var-uint, limited to u64
    VarUint,
    /// Two's-complement little-endian, zero padded to 32 bytes
    #[default]
    Fixed32,
}

/// Asset transfer payload carried as `MakeTxParam::args`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxArgs {
    pub to_asset_hash: Vec<u8>,
    pub to_address: Vec<u8>,
    pub amount: Uint256,
}

impl TxArgs {
    pub fn to_bytes(&self, encoding: AmountEncoding) -> Result<Vec<u8>, CodecError> {
        let mut sink = Sink::new();
        sink.write_var_bytes(&self.to_asset_hash);
        sink.write_var_bytes(&self.to_address);
        match encoding {
            AmountEncoding::VarUint => {
                let amount = Uint128::try_from(self.amount)
                    .ok()
                    .and_then(|a| u64::try_from(a.u128()).ok())
                    .ok_or(CodecError::AmountOverflow { width: 8 })?;
                sink.write_var_uint(amount);
            }
            AmountEncoding::Fixed32 => sink.write_fixed32(self.amount)?,
        }
        Ok(sink.into_bytes())
    }

    pub fn from_bytes(raw: &[u8], encoding: AmountEncoding) -> Result<Self, CodecError> {
        let mut source = Source::new(raw);
        let to_asset_hash = source.read_var_bytes()?.to_vec();
        let to_address = source.read_var_bytes()?.to_vec();
        let amount = match encoding {
            AmountEncoding::VarUint => Uint256::from(source.read_var_uint()?),
            AmountEncoding::Fixed32 => source.read_fixed32()?,
        };
        Ok(Self {
            to_asset_hash,
            to_address,
            amount,
        })
    }
}
