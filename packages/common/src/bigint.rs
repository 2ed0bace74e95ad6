//! Signed integers in minimal little-endian two's-complement form.
//!
//! Zero is the empty string. A positive value gets a trailing `0x00` when its
//! top byte would otherwise read as negative, and a negative value gets a
//! trailing `0xFF` in the mirror case. Magnitudes are bounded to 256 bits.

use cosmwasm_std::Uint256;

use crate::codec::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeoInt {
    negative: bool,
    magnitude: Uint256,
}

impl NeoInt {
    /// Longest valid encoding: 32 magnitude bytes plus a sign byte
    pub const MAX_LEN: usize = 33;

    /// Negative zero normalises to zero.
    pub fn new(negative: bool, magnitude: Uint256) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn from_unsigned(magnitude: Uint256) -> Self {
        Self::new(false, magnitude)
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> Uint256 {
        self.magnitude
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        if self.magnitude.is_zero() {
            return Vec::new();
        }
        let le = self.magnitude.to_le_bytes();
        let len = le.len() - le.iter().rev().take_while(|b| **b == 0).count();
        let mut out = le[..len].to_vec();
        if self.negative {
            negate(&mut out);
            if out[len - 1] & 0x80 == 0 {
                out.push(0xFF);
            }
        } else if out[len - 1] & 0x80 != 0 {
            out.push(0x00);
        }
        out
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self, CodecError> {
        let Some(last) = raw.last() else {
            return Ok(Self::default());
        };
        let negative = last & 0x80 != 0;
        let mut magnitude = raw.to_vec();
        if negative {
            negate(&mut magnitude);
        }
        while magnitude.last() == Some(&0) {
            magnitude.pop();
        }
        if magnitude.len() > 32 {
            return Err(CodecError::AmountOverflow { width: 32 });
        }
        let mut buf = [0u8; 32];
        buf[..magnitude.len()].copy_from_slice(&magnitude);
        Ok(Self::new(negative, Uint256::from_le_bytes(buf)))
    }
}

/// Two's-complement negation in place: invert, then add one.
fn negate(bytes: &mut [u8]) {
    let mut carry = true;
    for b in bytes.iter_mut() {
        *b = !*b;
        if carry {
            let (v, c) = b.overflowing_add(1);
            *b = v;
            carry = c;
        }
    }
}
