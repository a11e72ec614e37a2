use crate::domain::model::{NumeralInput, NumeralKind, MAX_INPUT_LENGTH, MIN_BINARY_LENGTH};
use crate::utils::error::{ConvertError, Result};
use regex::Regex;

/// Removes ASCII whitespace (including vertical tab), so `"-1 2 3  4"` reads
/// as `"-1234"`. Unicode spaces such as U+00A0 are kept and fail classification.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !(c.is_ascii_whitespace() || c == '\x0B'))
        .collect()
}

pub struct Classifier {
    hexadecimal: Regex,
    binary: Regex,
    decimal: Regex,
}

impl Classifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            hexadecimal: Regex::new(r"^0[xX][0-9a-fA-F]+$")?,
            binary: Regex::new(r"^b[01]+$")?,
            decimal: Regex::new(r"^-?[0-9]+$")?,
        })
    }

    /// Detects the numeral kind. The length bound is checked before any pattern.
    pub fn classify(&self, raw: &str) -> Result<NumeralInput> {
        let normalized = normalize(raw);
        let length = normalized.chars().count();

        if length > MAX_INPUT_LENGTH {
            return Err(ConvertError::OutOfRange {
                input: normalized,
                reason: format!(
                    "Input has {} characters; at most {} are accepted",
                    length, MAX_INPUT_LENGTH
                ),
            });
        }

        let kind = if self.hexadecimal.is_match(&normalized) {
            NumeralKind::Hexadecimal
        } else if self.binary.is_match(&normalized) {
            if length < MIN_BINARY_LENGTH {
                return Err(ConvertError::BinaryTooShort { length });
            }
            NumeralKind::Binary
        } else if self.decimal.is_match(&normalized) {
            NumeralKind::Decimal
        } else {
            return Err(ConvertError::InvalidInput { input: normalized });
        };

        tracing::debug!("Classified '{}' as {}", normalized, kind);

        Ok(NumeralInput {
            raw: raw.to_string(),
            normalized,
            kind,
        })
    }
}
