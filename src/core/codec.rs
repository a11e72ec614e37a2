use crate::domain::model::{BitVector, NIBBLE};
use crate::utils::error::{ConvertError, Result};

/// Expands hexadecimal digits into four bits each.
pub fn hex_to_bits(digits: &str) -> Result<BitVector> {
    let mut bits = Vec::with_capacity(digits.len() * NIBBLE);
    for c in digits.chars() {
        let nibble = c.to_digit(16).ok_or_else(|| ConvertError::InvalidInput {
            input: digits.to_string(),
        })?;
        bits.extend((0..NIBBLE).rev().map(|shift| (nibble >> shift) & 1 == 1));
    }
    Ok(BitVector::from_bits(bits))
}

/// Subtracts one, borrowing from the least significant bit upward.
fn decrement(bits: &[bool]) -> Vec<bool> {
    let mut result = bits.to_vec();
    for bit in result.iter_mut().rev() {
        if *bit {
            *bit = false;
            break;
        }
        *bit = true;
    }
    result
}

/// Adds one; a carry out of the most significant bit is dropped.
fn increment(bits: &[bool]) -> Vec<bool> {
    let mut result = bits.to_vec();
    for bit in result.iter_mut().rev() {
        if !*bit {
            *bit = true;
            break;
        }
        *bit = false;
    }
    result
}

fn invert(bits: &[bool]) -> Vec<bool> {
    bits.iter().map(|bit| !bit).collect()
}

fn unsigned_value(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Reads a two's-complement bit vector as a signed value.
pub fn decode(bits: &BitVector) -> Result<i32> {
    let width = bits.width();
    if width > 63 {
        return Err(ConvertError::Overflow {
            value: i64::MAX,
            width,
        });
    }

    let value = if bits.sign_bit() {
        let magnitude = unsigned_value(&invert(&decrement(bits.bits())));
        -(magnitude as i64)
    } else {
        unsigned_value(bits.bits()) as i64
    };

    i32::try_from(value).map_err(|_| ConvertError::Overflow { value, width })
}

/// Writes `value` as a `width`-bit two's-complement vector.
pub fn encode(value: i32, width: usize) -> Result<BitVector> {
    if value == 0 {
        return Ok(BitVector::zeros(width));
    }

    let mut bits = vec![false; width];
    let mut magnitude = value.unsigned_abs();
    let mut index = width;
    while magnitude != 0 {
        if index == 0 {
            return Err(ConvertError::Overflow {
                value: i64::from(value),
                width,
            });
        }
        index -= 1;
        bits[index] = magnitude % 2 == 1;
        magnitude /= 2;
    }

    if value > 0 {
        return Ok(BitVector::from_bits(bits));
    }
    Ok(BitVector::from_bits(increment(&invert(&bits))))
}
