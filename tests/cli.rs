//! CLI integration tests for hashids
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn hashids() -> Command {
    Command::cargo_bin("hashids").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    hashids()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reversible ids"));
}

#[test]
fn test_version() {
    hashids()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hashids"));
}

#[test]
fn test_missing_subcommand_fails() {
    hashids().assert().failure();
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_default_profile() {
    hashids()
        .args(["encode", "1", "2", "3"])
        .assert()
        .success()
        .stdout("o2fXhV\n");
}

#[test]
fn test_encode_with_salt() {
    hashids()
        .args(["--salt", "this is my salt", "encode", "12345"])
        .assert()
        .success()
        .stdout("NkK9\n");
}

#[test]
fn test_global_flags_after_subcommand() {
    hashids()
        .args(["encode", "1", "2", "3", "--salt", "this is my salt", "-m", "8"])
        .assert()
        .success()
        .stdout("GlaHquq0\n");
}

#[test]
fn test_encode_full_u64_range() {
    hashids()
        .args(["-s", "this is my salt", "encode", "18446744073709551615"])
        .assert()
        .success()
        .stdout("zXVjmzBamYlqX\n");
}

#[test]
fn test_encode_from_stdin() {
    hashids()
        .args(["--salt", "this is my salt", "encode"])
        .write_stdin("1, 2147483648\n")
        .assert()
        .success()
        .stdout("vmHmoeerL\n");
}

#[test]
fn test_encode_comma_separated_argument() {
    hashids()
        .args(["encode", "1,2,3"])
        .assert()
        .success()
        .stdout("o2fXhV\n");
}

#[test]
fn test_encode_negative_number_fails() {
    hashids()
        .args(["encode", "1", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn test_encode_garbage_fails() {
    hashids()
        .args(["encode", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number 'twelve'"));
}

#[test]
fn test_encode_empty_stdin_fails() {
    hashids()
        .arg("encode")
        .write_stdin("  \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No numbers"));
}

#[test]
fn test_decode() {
    hashids()
        .args(["--salt", "this is my salt", "decode", "laHquq"])
        .assert()
        .success()
        .stdout("1 2 3\n");
}

#[test]
fn test_decode_json() {
    hashids()
        .args(["--salt", "this is my salt", "decode", "--json", "1Wc8cwcE"])
        .assert()
        .success()
        .stdout("[5,5,5,5]\n");
}

#[test]
fn test_decode_from_stdin() {
    hashids()
        .args(["decode"])
        .write_stdin("o2fXhV\n")
        .assert()
        .success()
        .stdout("1 2 3\n");
}

#[test]
fn test_decode_with_wrong_salt_fails() {
    hashids()
        .args(["--salt", "another salt", "decode", "laHquq"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid"));
}

#[test]
fn test_encode_decode_roundtrip() {
    let output = hashids()
        .args(["--salt", "round trip", "encode", "683", "94108", "123", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let hash = String::from_utf8(output.stdout).unwrap();

    hashids()
        .args(["--salt", "round trip", "decode", hash.trim()])
        .assert()
        .success()
        .stdout("683 94108 123 5\n");
}

// ============================================================================
// Hex
// ============================================================================

#[test]
fn test_encode_hex() {
    hashids()
        .args(["--salt", "this is my salt", "encode-hex", "507f1f77bcf86cd799439011"])
        .assert()
        .success()
        .stdout("x56QL5Dr4Efom6oN6vWO\n");
}

#[test]
fn test_decode_hex_is_lowercase() {
    hashids()
        .args(["--salt", "this is my salt", "decode-hex", "kRNrpKlJ"])
        .assert()
        .success()
        .stdout("deadbeef\n");
}

#[test]
fn test_encode_hex_rejects_non_hex() {
    hashids()
        .args(["encode-hex", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hex string"));
}

// ============================================================================
// Profiles
// ============================================================================

#[test]
fn test_padded_profile() {
    hashids()
        .args(["--profile", "padded", "encode", "1", "2", "3"])
        .assert()
        .success()
        .stdout("4B97bo2fXhVaDR0Z\n");
}

#[test]
fn test_lowercase_profile() {
    hashids()
        .args(["-p", "lowercase", "encode", "1", "2", "3"])
        .assert()
        .success()
        .stdout("ep9f0h8d\n");
}

#[test]
fn test_hex_profile() {
    hashids()
        .args(["--profile", "hex", "encode", "42", "7"])
        .assert()
        .success()
        .stdout("8d90b\n");
}

#[test]
fn test_flags_override_profile() {
    hashids()
        .args(["--profile", "padded", "--min-length", "0", "encode", "1", "2", "3"])
        .assert()
        .success()
        .stdout("o2fXhV\n");
}

#[test]
fn test_unknown_profile_suggests_closest() {
    hashids()
        .args(["--profile", "paded", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile 'paded' not found"))
        .stderr(predicate::str::contains("did you mean 'padded'?"));
}

#[test]
fn test_invalid_alphabet_fails() {
    hashids()
        .args(["--alphabet", "abc", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 16 unique characters"));
}

#[test]
fn test_config_file() {
    let path = std::env::temp_dir().join(format!("hashids-cli-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[settings]\ndefault_profile = \"mine\"\n\n[profiles.mine]\nsalt = \"pepper\"\n",
    )
    .unwrap();

    let output = hashids()
        .arg("--config")
        .arg(&path)
        .args(["encode", "7"])
        .output()
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "BV\n");
}

#[test]
fn test_missing_config_file_fails() {
    hashids()
        .args(["--config", "/nonexistent/hashids/profiles.toml", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot access path"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_list() {
    hashids()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("padded"))
        .stdout(predicate::str::contains("hex"));
}

#[test]
fn test_config_list_json() {
    let output = hashids()
        .args(["config", "list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["default"], "default");
    let profiles = value["profiles"].as_array().unwrap();
    assert!(profiles.iter().any(|p| p == "lowercase"));
}

#[test]
fn test_config_show() {
    hashids()
        .args(["config", "show", "hex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: hex"))
        .stdout(predicate::str::contains("Digits: 3456789abde"))
        .stdout(predicate::str::contains("Guards: 2"));
}

#[test]
fn test_config_show_unknown() {
    hashids()
        .args(["config", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile 'nope' not found"));
}
