//! RK packed numbers.
//!
//! BIFF stores many numeric cells as a 32-bit RK word instead of a full 8-byte float:
//!
//! - bit 0: the value was multiplied by 100 before encoding
//! - bit 1: the payload is a signed integer (otherwise it is the top 30 bits of an f64)
//! - bits 2-31: the 30-bit payload
//!
//! Decoding is total: every `u32` yields exactly one [`RkValue`].

use std::fmt;

use crate::error::ValueError;
use crate::number::format_minimal;

const MULTIPLIED: u32 = 0x01;
const INTEGER: u32 = 0x02;
const PAYLOAD_MASK: u32 = 0xFFFF_FFFC;

/// Smallest integer representable in a 30-bit signed payload.
pub const RK_INT_MIN: i32 = -(1 << 29);
/// Largest integer representable in a 30-bit signed payload.
pub const RK_INT_MAX: i32 = (1 << 29) - 1;

/// A raw RK word as read from a cell record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rk(pub u32);

/// The decoded form of an RK word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RkValue {
    Int(i64),
    Float(f64),
}

impl Rk {
    /// Decode this word into an integer or a float.
    ///
    /// The multiplied flag always yields a float, even when the payload is an
    /// integer: `Rk` with payload 314 and both flags set decodes to `3.14`.
    pub fn decode(self) -> RkValue {
        let multiplied = self.is_multiplied();

        if !self.is_integer() {
            // Low 34 bits of the f64 are implicitly zero.
            let bits = u64::from(self.0 & PAYLOAD_MASK) << 32;
            let value = f64::from_bits(bits);
            return RkValue::Float(if multiplied { value / 100.0 } else { value });
        }

        // Arithmetic shift sign-extends the 30-bit payload.
        let payload = (self.0 as i32) >> 2;
        if multiplied {
            RkValue::Float(f64::from(payload) / 100.0)
        } else {
            RkValue::Int(i64::from(payload))
        }
    }

    /// Returns the float value, or [`ValueError::IsInteger`] if the word holds an integer.
    pub fn as_float(self) -> Result<f64, ValueError> {
        match self.decode() {
            RkValue::Float(f) => Ok(f),
            RkValue::Int(i) => Err(ValueError::IsInteger(i)),
        }
    }

    /// Returns the value widened to a float regardless of tag.
    pub fn to_f64(self) -> f64 {
        self.decode().to_f64()
    }

    /// Encode an integer as an RK word, if it fits the 30-bit payload.
    pub fn from_int(value: i32) -> Option<Rk> {
        if !(RK_INT_MIN..=RK_INT_MAX).contains(&value) {
            return None;
        }
        Some(Rk(((value as u32) << 2) | INTEGER))
    }

    /// Encode a float as an RK word, if its low 34 mantissa bits are zero.
    pub fn from_f64(value: f64) -> Option<Rk> {
        let bits = value.to_bits();
        if bits & 0x3_FFFF_FFFF != 0 {
            return None;
        }
        Some(Rk((bits >> 32) as u32))
    }

    /// Bit 0: the encoded value is 100 times the real one.
    pub fn is_multiplied(self) -> bool {
        self.0 & MULTIPLIED != 0
    }

    /// Bit 1: the payload is a signed integer.
    pub fn is_integer(self) -> bool {
        self.0 & INTEGER != 0
    }
}

impl From<u32> for Rk {
    fn from(word: u32) -> Self {
        Rk(word)
    }
}

impl RkValue {
    pub fn to_f64(self) -> f64 {
        match self {
            RkValue::Int(i) => i as f64,
            RkValue::Float(f) => f,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, RkValue::Float(_))
    }
}

impl fmt::Display for RkValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RkValue::Int(i) => write!(f, "{}", i),
            RkValue::Float(v) => f.write_str(&format_minimal(*v)),
        }
    }
}

impl fmt::Display for Rk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.decode().fmt(f)
    }
}

/// An RK value paired with the index of its style (XF) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XfRk {
    pub xf: u16,
    pub rk: Rk,
}

impl XfRk {
    pub fn new(xf: u16, rk: Rk) -> Self {
        XfRk { xf, rk }
    }
}
