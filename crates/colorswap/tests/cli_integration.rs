//! Integration tests for the `colorswap` binary.
//!
//! These tests run the binary via `assert_cmd` against temporary files and an
//! explicit `--config` path so the user's real settings never leak in.

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("colorswap")
}

/// A temp dir holding `input.css` with `contents`, plus a settings path.
fn fixture(contents: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("input.css");
    std::fs::write(&file, contents).unwrap();
    let settings = dir.path().join("settings.toml");
    (dir, file, settings)
}

fn cli_with(settings: &Path) -> assert_cmd::Command {
    let mut cmd = cli();
    cmd.arg("--config").arg(settings);
    cmd
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("colorswap"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── convert ──

#[test]
fn convert_prints_result() {
    let (_dir, _, settings) = fixture("");
    cli_with(&settings)
        .args(["convert", "hsl", "#ff0000"])
        .assert()
        .success()
        .stdout("hsl(0 100 50)\n");
}

#[test]
fn convert_notation_any_case() {
    let (_dir, _, settings) = fixture("");
    cli_with(&settings)
        .args(["convert", "hex6", "rebeccapurple"])
        .assert()
        .success()
        .stdout("#663399\n");
}

#[test]
fn convert_unknown_notation_rejected() {
    cli()
        .args(["convert", "cmyk", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown notation"));
}

#[test]
fn convert_not_a_color_fails() {
    let (_dir, _, settings) = fixture("");
    cli_with(&settings)
        .args(["convert", "hex", "xyzzy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("That does not seem to be a color"));
}

#[test]
fn convert_lab_input() {
    let (_dir, _, settings) = fixture("");
    cli_with(&settings)
        .args(["convert", "rgb", "lab(50 0 0)"])
        .assert()
        .success()
        .stdout("rgb(119 119 119)\n");
}

#[test]
fn convert_json_output() {
    let (_dir, _, settings) = fixture("");
    let output = cli_with(&settings)
        .args(["--json", "convert", "rgb", "#336699"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["output"], "rgb(51 102 153)");
    assert_eq!(json["notation"], "rgb");
}

#[test]
fn convert_honors_settings_file() {
    let (_dir, _, settings) = fixture("");
    std::fs::write(&settings, "use_comma_separators = true\n").unwrap();
    cli_with(&settings)
        .args(["convert", "rgb", "#336699"])
        .assert()
        .success()
        .stdout("rgb(51, 102, 153)\n");
}

#[test]
fn bad_setting_warns_and_falls_back() {
    let (_dir, _, settings) = fixture("");
    std::fs::write(&settings, "hex_uppercase = \"yes\"\n").unwrap();
    cli_with(&settings)
        .args(["convert", "hex", "red"])
        .assert()
        .success()
        .stdout("#ff0000\n")
        .stderr(predicate::str::contains("hex_uppercase"));
}

// ── at ──

#[test]
fn at_prints_edited_text() {
    let (_dir, file, settings) = fixture("a { color: #ABC123; }");
    cli_with(&settings)
        .arg("at")
        .arg(&file)
        .args(["--offset", "14", "--to", "rgb"])
        .assert()
        .success()
        .stdout("a { color: rgb(171 193 35); }");
    // untouched without --write
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "a { color: #ABC123; }");
}

#[test]
fn at_write_rewrites_file() {
    let (_dir, file, settings) = fixture("red blue");
    cli_with(&settings)
        .arg("at")
        .arg(&file)
        .args(["--offset", "0", "--offset", "5", "--to", "hex", "--write"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "#ff0000 #0000ff");
}

#[test]
fn at_failure_is_a_notice() {
    let (_dir, file, settings) = fixture("red xyzzy");
    cli_with(&settings)
        .arg("at")
        .arg(&file)
        .args(["--offset", "0", "--offset", "6", "--to", "hex"])
        .assert()
        .success()
        .stdout("#ff0000 xyzzy")
        .stderr(predicate::str::contains("offset 6"));
}

#[test]
fn at_requires_offset() {
    let (_dir, file, settings) = fixture("red");
    cli_with(&settings)
        .arg("at")
        .arg(&file)
        .args(["--to", "hex"])
        .assert()
        .failure();
}

// ── point ──

#[test]
fn point_without_name_fails_and_keeps_file() {
    let (_dir, file, settings) = fixture("#123457");
    cli_with(&settings)
        .arg("point")
        .arg(&file)
        .args(["--offset", "2", "--to", "name", "--write"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("This color does not have a name"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "#123457");
}

#[test]
fn point_json_reports_conversion() {
    let (_dir, file, settings) = fixture("x: #ff0000;");
    let output = cli_with(&settings)
        .arg("--json")
        .arg("point")
        .arg(&file)
        .args(["--offset", "5", "--to", "name"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["conversions"][0]["text"], "red");
    assert_eq!(json["conversions"][0]["original"], "#ff0000");
    assert_eq!(json["text"], "x: red;");
    assert_eq!(json["written"], false);
}

// ── all ──

#[test]
fn all_converts_every_color() {
    let (_dir, file, settings) = fixture("red and #fff and rgb(0,0,0)");
    cli_with(&settings)
        .arg("all")
        .arg(&file)
        .args(["--to", "hex"])
        .assert()
        .success()
        .stdout("#ff0000 and #ffffff and #000000");
}

#[test]
fn all_within_range() {
    let (_dir, file, settings) = fixture("red blue green");
    cli_with(&settings)
        .arg("all")
        .arg(&file)
        .args(["--to", "hex", "--start", "4", "--end", "8"])
        .assert()
        .success()
        .stdout("red #0000ff green");
}

#[test]
fn all_start_requires_end() {
    let (_dir, file, settings) = fixture("red");
    cli_with(&settings)
        .arg("all")
        .arg(&file)
        .args(["--to", "hex", "--start", "0"])
        .assert()
        .failure();
}

#[test]
fn missing_file_fails() {
    let (dir, _, settings) = fixture("");
    cli_with(&settings)
        .arg("all")
        .arg(dir.path().join("nope.css"))
        .args(["--to", "hex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.css"));
}

// ── copy ──

#[test]
fn copy_defaults_to_hex6_without_hash() {
    let (_dir, file, settings) = fixture("c: rgb(170 187 204)");
    cli_with(&settings)
        .arg("copy")
        .arg(&file)
        .args(["--offset", "6"])
        .assert()
        .success()
        .stdout("AABBCC\n");
}

#[test]
fn copy_keeps_hash_when_configured() {
    let (_dir, file, settings) = fixture("teal");
    std::fs::write(&settings, "emit_leading_hash = true\n").unwrap();
    cli_with(&settings)
        .arg("copy")
        .arg(&file)
        .args(["--offset", "1", "--to", "hex"])
        .assert()
        .success()
        .stdout("#008080\n");
}

// ── config ──

#[test]
fn config_json_produces_valid_json() {
    let (_dir, _, settings) = fixture("");
    let output = cli_with(&settings)
        .args(["--json", "config"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("config --json should produce valid JSON");
    assert!(json["settings"].is_object());
    assert_eq!(json["settings"]["round_output"], true);
    assert_eq!(json["settings_file_exists"], false);
}

#[test]
fn config_init_writes_defaults() {
    let (_dir, _, settings) = fixture("");
    cli_with(&settings)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(loaded)"))
        .stdout(predicate::str::contains("emit_generic_color_function:"));
    let contents = std::fs::read_to_string(&settings).unwrap();
    assert!(contents.contains("round_output = true"));

    // a second init refuses to overwrite
    cli_with(&settings)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ── --verbose flag ──

#[test]
fn verbose_flag_accepted() {
    let (_dir, _, settings) = fixture("");
    cli_with(&settings).args(["-v", "config"]).assert().success();
}

#[test]
fn verbose_long_flag_accepted() {
    let (_dir, _, settings) = fixture("");
    cli_with(&settings)
        .args(["--verbose", "convert", "hex", "red"])
        .assert()
        .success();
}
