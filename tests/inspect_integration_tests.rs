//! Integration tests for the `inspect` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn inspect_text_summary() {
    let fixture = TestFixture::new();
    fixture.create_models_csv();

    streamchart!()
        .current_dir(fixture.path())
        .args(["--color", "never", "inspect", "models.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("models"))
        .stdout(predicate::str::contains("Fields: Date, GPT-4, Claude, Llama"))
        .stdout(predicate::str::contains("Rows: 5"))
        .stdout(predicate::str::contains("Dates: 2024-01-01 .. 2024-04-01"));
}

#[test]
fn inspect_json_counts_coerced_cells() {
    let fixture = TestFixture::new();
    fixture.create_file("messy.csv", "Date,A\n2024-01-01,12abc\n2024-01-02,\n2024-01-03,7\n");

    let output = streamchart!()
        .current_dir(fixture.path())
        .args(["inspect", "messy.csv", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rows"], 3);
    assert_eq!(value["coerced_cells"], 1);
    assert_eq!(value["series"][0]["total"], 19);
}

#[test]
fn inspect_header_only() {
    let fixture = TestFixture::new();
    fixture.create_file("empty.csv", "Date\n");

    streamchart!()
        .current_dir(fixture.path())
        .args(["--color", "never", "inspect", "empty.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No series to plot."));
}

#[test]
fn inspect_missing_file_fails() {
    let fixture = TestFixture::new();

    streamchart!()
        .current_dir(fixture.path())
        .args(["inspect", "nope.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FileRead"));
}

#[test]
fn inspect_accepts_non_utf8_input() {
    let fixture = TestFixture::new();
    std::fs::write(
        fixture.path().join("latin1.csv"),
        b"Date,Temp\xe9rature\n2024-01-01,10\n",
    )
    .unwrap();

    streamchart!()
        .current_dir(fixture.path())
        .args(["--color", "never", "inspect", "latin1.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 1"))
        .stdout(predicate::str::contains("Temp\u{FFFD}rature"));
}
