//! Binary codec for every cross-chain payload.
//!
//! Fixed-width integers are little-endian. Variable-length unsigned integers
//! use a one-byte marker for anything wider than `0xFC`:
//!
//! | value                      | encoding        |
//! |----------------------------|-----------------|
//! | `0x00..=0xFC`              | 1 byte          |
//! | `0xFD..=0xFFFF`            | `0xFD` + u16    |
//! | `0x1_0000..=0xFFFF_FFFF`   | `0xFE` + u32    |
//! | larger                     | `0xFF` + u64    |
//!
//! Field order and width are frozen: the two ends of a message are deployed
//! independently and must decode what the other encoded.

use cosmwasm_std::Uint256;
use thiserror::Error;

use crate::bigint::NeoInt;

/// Length of a hash field
pub const HASH_LEN: usize = 32;

/// Width of the padded amount field
pub const FIXED_AMOUNT_LEN: usize = 32;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Truncated input: field needs {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("Non-canonical var-uint encoding")]
    NonCanonicalVarUint,

    #[error("Invalid UTF-8 in string field")]
    InvalidUtf8,

    #[error("Amount does not fit in {width} bytes")]
    AmountOverflow { width: usize },

    #[error("Amount must not be negative")]
    NegativeAmount,
}

/// Append-only writer.
#[derive(Debug, Default, Clone)]
pub struct Sink {
    buf: Vec<u8>,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Raw bytes, no length prefix
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    pub fn write_hash(&mut self, hash: &[u8; HASH_LEN]) {
        self.buf.extend_from_slice(hash);
    }

    pub fn write_var_uint(&mut self, v: u64) {
        if v < 0xFD {
            self.write_u8(v as u8);
        } else if v <= 0xFFFF {
            self.write_u8(0xFD);
            self.write_u16(v as u16);
        } else if v <= 0xFFFF_FFFF {
            self.write_u8(0xFE);
            self.write_u32(v as u32);
        } else {
            self.write_u8(0xFF);
            self.write_u64(v);
        }
    }

    /// Length-prefixed byte string
    pub fn write_var_bytes(&mut self, data: &[u8]) {
        self.write_var_uint(data.len() as u64);
        self.write_bytes(data);
    }

    pub fn write_string(&mut self, s: &str) {
        self.write_var_bytes(s.as_bytes());
    }

    /// Non-negative amount as a [`NeoInt`] right-padded with zeros to 32 bytes.
    pub fn write_fixed32(&mut self, amount: Uint256) -> Result<(), CodecError> {
        let mut raw = NeoInt::from_unsigned(amount).to_bytes();
        if raw.len() > FIXED_AMOUNT_LEN {
            return Err(CodecError::AmountOverflow {
                width: FIXED_AMOUNT_LEN,
            });
        }
        raw.resize(FIXED_AMOUNT_LEN, 0);
        self.write_bytes(&raw);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor over a borrowed buffer. Every read fails with
/// [`CodecError::Truncated`] as soon as a field declares more bytes than remain.
#[derive(Debug, Clone)]
pub struct Source<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Source<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn next_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::Truncated {
                needed: n,
                remaining,
            });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn next_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.next_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.next_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        self.next_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        self.next_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        self.next_array().map(u64::from_le_bytes)
    }

    pub fn read_hash(&mut self) -> Result<[u8; HASH_LEN], CodecError> {
        self.next_array()
    }

    pub fn read_var_uint(&mut self) -> Result<u64, CodecError> {
        let value = match self.read_u8()? {
            0xFD => {
                let v = self.read_u16()? as u64;
                if v < 0xFD {
                    return Err(CodecError::NonCanonicalVarUint);
                }
                v
            }
            0xFE => {
                let v = self.read_u32()? as u64;
                if v <= 0xFFFF {
                    return Err(CodecError::NonCanonicalVarUint);
                }
                v
            }
            0xFF => {
                let v = self.read_u64()?;
                if v <= 0xFFFF_FFFF {
                    return Err(CodecError::NonCanonicalVarUint);
                }
                v
            }
            small => small as u64,
        };
        Ok(value)
    }

    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], CodecError> {
        let len = self.read_var_uint()?;
        let remaining = self.remaining();
        if len > remaining as u64 {
            return Err(CodecError::Truncated {
                needed: usize::try_from(len).unwrap_or(usize::MAX),
                remaining,
            });
        }
        self.next_bytes(len as usize)
    }

    pub fn read_string(&mut self) -> Result<String, CodecError> {
        let raw = self.read_var_bytes()?;
        String::from_utf8(raw.to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }

    pub fn read_fixed32(&mut self) -> Result<Uint256, CodecError> {
        let raw = self.next_bytes(FIXED_AMOUNT_LEN)?;
        let value = NeoInt::from_bytes(raw)?;
        if value.is_negative() {
            return Err(CodecError::NegativeAmount);
        }
        Ok(value.magnitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var_uint_bytes(v: u64) -> Vec<u8> {
        let mut sink = Sink::new();
        sink.write_var_uint(v);
        sink.into_bytes()
    }

    #[test]
    fn test_var_uint_widths() {
        assert_eq!(var_uint_bytes(0), vec![0x00]);
        assert_eq!(var_uint_bytes(0xFC), vec![0xFC]);
        assert_eq!(var_uint_bytes(0xFD), vec![0xFD, 0xFD, 0x00]);
        assert_eq!(var_uint_bytes(0xFFFF), vec![0xFD, 0xFF, 0xFF]);
        assert_eq!(var_uint_bytes(0x1_0000), vec![0xFE, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(
            var_uint_bytes(0x1_0000_0000),
            vec![0xFF, 0, 0, 0, 0, 1, 0, 0, 0]
        );
    }

    #[test]
    fn test_var_uint_boundaries_decode() {
        for v in [0, 0xFC, 0xFD, 0xFFFF, 0x1_0000, 0xFFFF_FFFF, 0x1_0000_0000, u64::MAX] {
            let raw = var_uint_bytes(v);
            let mut source = Source::new(&raw);
            assert_eq!(source.read_var_uint().unwrap(), v);
            assert!(source.is_empty());
        }
    }

    #[test]
    fn test_non_canonical_var_uint_rejected() {
        // 5 encoded with the u16 marker
        let mut source = Source::new(&[0xFD, 0x05, 0x00]);
        assert_eq!(
            source.read_var_uint().unwrap_err(),
            CodecError::NonCanonicalVarUint
        );

        let mut source = Source::new(&[0xFE, 0xFF, 0xFF, 0x00, 0x00]);
        assert_eq!(
            source.read_var_uint().unwrap_err(),
            CodecError::NonCanonicalVarUint
        );
    }

    #[test]
    fn test_var_bytes_truncated() {
        // declares 4 bytes, only 2 follow
        let mut source = Source::new(&[0x04, 0xAA, 0xBB]);
        assert_eq!(
            source.read_var_bytes().unwrap_err(),
            CodecError::Truncated {
                needed: 4,
                remaining: 2
            }
        );
    }

    #[test]
    fn test_fixed_width_little_endian() {
        let mut sink = Sink::new();
        sink.write_u32(1);
        sink.write_u64(0x0102_0304_0506_0708);
        assert_eq!(
            sink.as_slice(),
            &[1, 0, 0, 0, 8, 7, 6, 5, 4, 3, 2, 1]
        );

        let mut source = Source::new(sink.as_slice());
        assert_eq!(source.read_u32().unwrap(), 1);
        assert_eq!(source.read_u64().unwrap(), 0x0102_0304_0506_0708);
        assert!(source.read_u8().is_err());
    }

    #[test]
    fn test_fixed32_layout() {
        let mut sink = Sink::new();
        sink.write_fixed32(Uint256::from(100u128)).unwrap();
        let raw = sink.into_bytes();
        assert_eq!(raw.len(), 32);
        assert_eq!(raw[0], 100);
        assert!(raw[1..].iter().all(|b| *b == 0));

        // 0x80 needs a sign byte: [0x80, 0x00, ...]
        let mut sink = Sink::new();
        sink.write_fixed32(Uint256::from(0x80u128)).unwrap();
        let mut source = Source::new(sink.as_slice());
        assert_eq!(source.read_fixed32().unwrap(), Uint256::from(0x80u128));
    }

    #[test]
    fn test_fixed32_rejects_top_bit() {
        // 2^255 needs 33 bytes in two's complement
        let big = Uint256::one() << 255;
        let mut sink = Sink::new();
        assert_eq!(
            sink.write_fixed32(big).unwrap_err(),
            CodecError::AmountOverflow { width: 32 }
        );

        let mut raw = [0u8; 32];
        raw[31] = 0x80;
        let mut source = Source::new(&raw);
        assert_eq!(source.read_fixed32().unwrap_err(), CodecError::NegativeAmount);
    }

    #[test]
    fn test_string_utf8() {
        let mut source = Source::new(&[0x02, 0xC3, 0x28]);
        assert_eq!(source.read_string().unwrap_err(), CodecError::InvalidUtf8);
    }
}
