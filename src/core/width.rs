use crate::domain::model::{BitVector, MAX_HEX_DIGITS, NIBBLE};
use crate::utils::error::{ConvertError, Result};

/// Rounds `bits` up to the next multiple of a nibble.
pub fn round_up_to_nibble(bits: usize) -> usize {
    bits + padding_for(bits)
}

/// Number of bits needed to reach the next nibble boundary.
pub fn padding_for(bits: usize) -> usize {
    (NIBBLE - bits % NIBBLE) % NIBBLE
}

pub fn hex_width(digits: &str) -> Result<usize> {
    let count = digits.chars().count();
    if count > MAX_HEX_DIGITS {
        return Err(ConvertError::OutOfRange {
            input: digits.to_string(),
            reason: format!(
                "Hexadecimal input has {} digits; at most {} fit in 32 bits",
                count, MAX_HEX_DIGITS
            ),
        });
    }
    Ok(count * NIBBLE)
}

/// Sign-extends binary digits to a whole number of nibbles.
///
/// The padding copies the first digit as entered, so `10111` becomes
/// `11110111`.
pub fn pad_binary(digits: &str) -> Result<BitVector> {
    let bits: BitVector = digits.parse()?;

    let sign = bits.sign_bit();
    let padding = padding_for(bits.width());

    let mut extended = vec![sign; padding];
    extended.extend(bits.into_bits());
    Ok(BitVector::from_bits(extended))
}

pub fn parse_decimal(digits: &str) -> Result<i32> {
    digits.parse::<i32>().map_err(|e| ConvertError::OutOfRange {
        input: digits.to_string(),
        reason: format!("Decimal input does not fit a 32-bit signed integer: {}", e),
    })
}

/// Smallest multiple-of-four width holding `value` in two's complement.
pub fn decimal_width(value: i32) -> usize {
    let mut bits = 1;
    let mut remaining = value;
    while remaining / 2 != 0 {
        remaining /= 2;
        bits += 1;
    }

    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    let value = i64::from(value);
    if value > max || value < min {
        bits += 1;
    }

    round_up_to_nibble(bits)
}
