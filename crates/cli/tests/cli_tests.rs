//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pagemark");
    // isolate from any real preference file
    cmd.env("XDG_CONFIG_HOME", "/nonexistent-config");
    cmd
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("# Getting Started"));
}

#[test]
fn test_cli_stdin_input() {
    cmd()
        .arg("-")
        .write_stdin("<h1>Piped</h1><p>From stdin</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Piped"));
}

#[test]
fn test_cli_omits_chrome_by_default() {
    cmd()
        .arg(get_fixture_path("article.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Copyright 2026").not())
        .stdout(predicate::str::contains("Sidebar links").not());
}

#[test]
fn test_cli_keep_chrome() {
    cmd()
        .args(["--keep-chrome", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copyright 2026"));
}

#[test]
fn test_cli_skip_selectors() {
    cmd()
        .args(["-s", ".ads, .promo", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscribe to our newsletter").not())
        .stdout(predicate::str::contains("Limited time offer").not());
}

#[test]
fn test_cli_invalid_selector_fails() {
    cmd()
        .args(["-s", "[invalid", &get_fixture_path("article.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid selector"));
}

#[test]
fn test_cli_inline_code_policy() {
    cmd()
        .args(["--inline-code", "baseline", "-"])
        .write_stdin("<p>Hello <code>world</code></p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello world"));

    cmd()
        .args(["--inline-code", "refined", "-"])
        .write_stdin("<p>Hello <code>world</code></p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello `world`"));
}

#[test]
fn test_cli_rejects_unknown_policy() {
    cmd()
        .args(["--inline-code", "fancy", "-"])
        .write_stdin("<p>x</p>")
        .assert()
        .failure();
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("output.md");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.html"))
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("# Getting Started"));
}

#[test]
fn test_cli_missing_file() {
    cmd().arg("/nonexistent/page.html").assert().failure();
}

#[test]
fn test_cli_verbose_steps_on_stderr() {
    cmd()
        .args(["-v", &get_fixture_path("article.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Pagemark"))
        .stderr(predicate::str::contains("Resolving exclusion selectors"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_cli_save_prefs_round_trip() {
    let config_home = TempDir::new().unwrap();

    let mut first = assert_cmd::cargo::cargo_bin_cmd!("pagemark");
    first
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["--keep-chrome", "-s", ".ads", "--save-prefs", "-"])
        .write_stdin("<p>x</p>")
        .assert()
        .success();

    let raw = std::fs::read_to_string(config_home.path().join("pagemark").join("prefs.json")).unwrap();
    let prefs: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(prefs["omit_defaults"], serde_json::Value::Bool(false));
    assert_eq!(prefs["extra_selectors"], ".ads");

    // a later run picks the stored settings up
    let mut second = assert_cmd::cargo::cargo_bin_cmd!("pagemark");
    second
        .env("XDG_CONFIG_HOME", config_home.path())
        .arg("-")
        .write_stdin("<footer><p>Footer text</p></footer>")
        .assert()
        .success()
        .stdout(predicate::str::contains("Footer text"));
}
