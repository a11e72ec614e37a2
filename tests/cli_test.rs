use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

fn twos_comp() -> Result<Command> {
    Ok(Command::cargo_bin("twos-comp")?)
}

#[test]
fn test_positive_decimal() -> Result<()> {
    twos_comp()?
        .arg("10")
        .assert()
        .success()
        .stdout(
            "Input: 10\n\
             \n\
             Binary : 0000 1010\n\
             Hexadecimal : 0X0A\n\
             \n\
             32-bit version:\n\
             Binary : 00000000000000000000000000001010\n\
             Hexadecimal : 0X0000000A\n",
        )
        .stderr("");
    Ok(())
}

#[test]
fn test_negative_decimal() -> Result<()> {
    twos_comp()?
        .arg("-256")
        .assert()
        .success()
        .stdout(predicate::str::contains("Binary : 1111 0000 0000\n"))
        .stdout(predicate::str::contains("Hexadecimal : 0XF00\n"))
        .stdout(predicate::str::contains("Hexadecimal : 0XFFFFFF00\n"))
        .stdout(predicate::str::contains("Decimal:").not());
    Ok(())
}

#[test]
fn test_hex_input_echoes_decimal() -> Result<()> {
    twos_comp()?
        .arg("0xF")
        .assert()
        .success()
        .stdout(predicate::str::contains("Decimal: -1\n"))
        .stdout(predicate::str::contains("Hexadecimal : 0XFFFFFFFF\n"));
    Ok(())
}

#[test]
fn test_binary_split_across_arguments() -> Result<()> {
    twos_comp()?
        .args(["b", "1111", "0000", "1101"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Input: b 1111 0000 1101\n"))
        .stdout(predicate::str::contains("Decimal: -243\n"))
        .stdout(predicate::str::contains("Binary : 1111 0000 1101\n"));
    Ok(())
}

#[test]
fn test_sign_extended_binary() -> Result<()> {
    twos_comp()?
        .arg("b10111")
        .assert()
        .success()
        .stdout(predicate::str::contains("Decimal: -9\n"))
        .stdout(predicate::str::contains("Binary : 1111 0111\n"));
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let output = twos_comp()?.args(["--json", "b0001"]).output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["kind"], "binary");
    assert_eq!(value["decimal"], 1);
    assert_eq!(value["minimal"]["hexadecimal"], "0X1");
    Ok(())
}

#[test]
fn test_invalid_input() -> Result<()> {
    twos_comp()?
        .arg("12a")
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid input\n");
    Ok(())
}

#[test]
fn test_too_long_input() -> Result<()> {
    twos_comp()?
        .arg("1".repeat(34))
        .assert()
        .failure()
        .stdout("")
        .stderr("Input value out of range.\n");
    Ok(())
}

#[test]
fn test_thirty_three_characters_accepted() -> Result<()> {
    twos_comp()?
        .arg(format!("b{}1", "0".repeat(31)))
        .assert()
        .success()
        .stdout(predicate::str::contains("Decimal: 1\n"));
    Ok(())
}

#[test]
fn test_decimal_overflow() -> Result<()> {
    twos_comp()?
        .arg("2147483648")
        .assert()
        .failure()
        .stdout("")
        .stderr("Input value out of range.\n");
    Ok(())
}

#[test]
fn test_too_many_hex_digits() -> Result<()> {
    twos_comp()?
        .arg("0x123456789")
        .assert()
        .failure()
        .stderr("Input value out of range.\n");
    Ok(())
}

#[test]
fn test_short_binary() -> Result<()> {
    twos_comp()?
        .arg("b1")
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid input. The minimum length of a binary input should be 3.\n");
    Ok(())
}

#[test]
fn test_missing_input() -> Result<()> {
    twos_comp()?
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid input\n");
    Ok(())
}

#[test]
fn test_hyphenated_tokens_are_not_options() -> Result<()> {
    for token in ["-h", "--help", "-v", "--json", "-abc"] {
        twos_comp()?
            .arg(token)
            .assert()
            .failure()
            .stdout("")
            .stderr("Invalid input\n");
    }
    Ok(())
}

#[test]
fn test_non_breaking_space_is_invalid() -> Result<()> {
    twos_comp()?
        .arg("1\u{00A0}0")
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid input\n");
    Ok(())
}
