use crate::utils::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of the second, fixed-size rendering.
pub const REFERENCE_WIDTH: usize = 32;
/// Longest accepted input once whitespace is removed (`b` plus 32 bits).
pub const MAX_INPUT_LENGTH: usize = REFERENCE_WIDTH + 1;
pub const MAX_HEX_DIGITS: usize = REFERENCE_WIDTH / NIBBLE;
/// `b`, the sign bit and one data bit.
pub const MIN_BINARY_LENGTH: usize = 3;
pub const NIBBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralKind {
    Decimal,
    Binary,
    Hexadecimal,
}

impl fmt::Display for NumeralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumeralKind::Decimal => "decimal",
            NumeralKind::Binary => "binary",
            NumeralKind::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

/// A classified numeral. `normalized` has every whitespace character removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralInput {
    pub raw: String,
    pub normalized: String,
    pub kind: NumeralKind,
}

impl NumeralInput {
    /// The digits with the `b` / `0x` prefix stripped. Decimal input keeps its sign.
    pub fn digits(&self) -> &str {
        match self.kind {
            NumeralKind::Decimal => &self.normalized,
            NumeralKind::Binary => &self.normalized[1..],
            NumeralKind::Hexadecimal => &self.normalized[2..],
        }
    }
}

/// Bits in most-significant-first order. The first bit is the sign bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn zeros(width: usize) -> Self {
        Self {
            bits: vec![false; width],
        }
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn sign_bit(&self) -> bool {
        self.bits.first().copied().unwrap_or(false)
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Nibble values from the most significant group down.
    pub fn nibbles(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits
            .chunks(NIBBLE)
            .map(|group| group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
    }
}

impl FromStr for BitVector {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.chars().any(|c| c != '0' && c != '1') {
            return Err(ConvertError::InvalidInput {
                input: s.to_string(),
            });
        }
        Ok(Self {
            bits: s.chars().map(|c| c == '1').collect(),
        })
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Decimal value of an input together with its minimal width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub input: NumeralInput,
    pub value: i32,
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    pub binary: String,
    pub hexadecimal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub kind: NumeralKind,
    pub decimal: i32,
    pub width: usize,
    pub minimal: Rendering,
    pub reference: Rendering,
}
