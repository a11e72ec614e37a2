use crate::domain::model::{BitVector, Conversion, NumeralKind, Rendering, NIBBLE, REFERENCE_WIDTH};
use crate::utils::error::Result;
use std::fmt::Write;

/// One character per bit; `grouped` puts a space between nibbles.
pub fn binary(bits: &BitVector, grouped: bool) -> String {
    let mut out = String::with_capacity(bits.width() * 2);
    for (i, &bit) in bits.bits().iter().enumerate() {
        out.push(if bit { '1' } else { '0' });
        if grouped && (i + 1) % NIBBLE == 0 && i + 1 != bits.width() {
            out.push(' ');
        }
    }
    out
}

pub fn hexadecimal(bits: &BitVector) -> String {
    let digits: String = bits
        .nibbles()
        .map(|nibble| format!("{:X}", nibble))
        .collect();
    format!("0X{}", digits)
}

pub fn rendering(bits: &BitVector, grouped: bool) -> Rendering {
    Rendering {
        binary: binary(bits, grouped),
        hexadecimal: hexadecimal(bits),
    }
}

/// The report printed on stdout.
pub fn text(conversion: &Conversion) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Input: {}", conversion.input);
    let _ = writeln!(out);
    if conversion.kind != NumeralKind::Decimal {
        let _ = writeln!(out, "Decimal: {}", conversion.decimal);
    }
    let _ = writeln!(out, "Binary : {}", conversion.minimal.binary);
    let _ = writeln!(out, "Hexadecimal : {}", conversion.minimal.hexadecimal);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}-bit version:", REFERENCE_WIDTH);
    let _ = writeln!(out, "Binary : {}", conversion.reference.binary);
    let _ = writeln!(out, "Hexadecimal : {}", conversion.reference.hexadecimal);
    out
}

pub fn json(conversion: &Conversion) -> Result<String> {
    let mut out = serde_json::to_string_pretty(conversion)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitVector {
        s.parse().unwrap()
    }

    fn sample(kind: NumeralKind) -> Conversion {
        Conversion {
            input: "0xF".to_string(),
            kind,
            decimal: -1,
            width: 4,
            minimal: rendering(&bits("1111"), true),
            reference: rendering(&bits(&"1".repeat(32)), false),
        }
    }

    #[test]
    fn test_binary_grouping() {
        assert_eq!(binary(&bits("111100000000"), true), "1111 0000 0000");
        assert_eq!(binary(&bits("0001"), true), "0001");
        assert_eq!(binary(&bits("111100000000"), false), "111100000000");
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(hexadecimal(&bits("00001010")), "0X0A");
        assert_eq!(hexadecimal(&bits("111100000000")), "0XF00");
        assert_eq!(hexadecimal(&bits("1010101111001101")), "0XABCD");
    }

    #[test]
    fn test_text_report() {
        let expected = "Input: 0xF\n\
                        \n\
                        Decimal: -1\n\
                        Binary : 1111\n\
                        Hexadecimal : 0XF\n\
                        \n\
                        32-bit version:\n\
                        Binary : 11111111111111111111111111111111\n\
                        Hexadecimal : 0XFFFFFFFF\n";
        assert_eq!(text(&sample(NumeralKind::Hexadecimal)), expected);
    }

    #[test]
    fn test_text_report_skips_decimal_echo() {
        let report = text(&sample(NumeralKind::Decimal));
        assert!(!report.contains("Decimal:"));
    }

    #[test]
    fn test_json_report() {
        let value: serde_json::Value =
            serde_json::from_str(&json(&sample(NumeralKind::Hexadecimal)).unwrap()).unwrap();
        assert_eq!(value["kind"], "hexadecimal");
        assert_eq!(value["decimal"], -1);
        assert_eq!(value["reference"]["hexadecimal"], "0XFFFFFFFF");
    }
}
