use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_dump_state_with_page_hint() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["--dump-state", "--pages", "48", "assets/q-2023-2.pdf"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"total_pages\": 48"))
        .stdout(predicates::str::contains("\"current_page\": 1"))
        .stdout(predicates::str::contains("\"view_mode\": \"single\""));
}

#[test]
fn test_dump_state_without_hint_reports_unparsed() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args(["--dump-state", "assets/unknown.pdf"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"total_pages\": 0"))
        .stdout(predicates::str::contains("\"is_loading\": false"));
}

#[test]
fn test_double_mode_start_from_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("configuration.json");
    std::fs::write(
        &config_path,
        r#"{"Setting": {"start_in_double_mode": true}}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.args([
        "--dump-state",
        "--pages",
        "12",
        "-c",
        config_path.to_str().unwrap(),
        "assets/book.pdf",
    ]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"view_mode\": \"double\""));
}

#[test]
fn test_missing_document_fails() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--dump-state");
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("no document given"));
}

#[test]
fn test_help_lists_options() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("paginated documents"))
        .stdout(predicates::str::contains("--pages"));
}
