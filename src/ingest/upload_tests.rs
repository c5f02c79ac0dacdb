use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;

const FIRST: &str = "Date,A\n2024-01-01,1\n";
const SECOND: &str = "Date,B,C\n2024-01-01,2,3\n";

#[test]
fn completed_read_installs_dataset() {
    let mut session = UploadSession::new();
    let ticket = session.begin();

    let dataset = session.complete(ticket, FIRST).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(session.dataset().unwrap().fields, vec!["Date", "A"]);
}

#[test]
fn newer_selection_discards_stale_read() {
    let mut session = UploadSession::new();
    let stale = session.begin();
    let fresh = session.begin();

    assert!(!session.is_current(stale));
    assert!(session.complete(fresh, SECOND).is_some());
    assert!(session.complete(stale, FIRST).is_none());
    assert_eq!(session.dataset().unwrap().fields, vec!["Date", "B", "C"]);
}

#[test]
fn stale_read_finishing_first_is_still_discarded() {
    let mut session = UploadSession::new();
    let stale = session.begin();
    let fresh = session.begin();

    assert!(session.complete(stale, FIRST).is_none());
    assert!(session.dataset().is_none());
    assert!(session.complete(fresh, SECOND).is_some());
}

#[test]
fn cancel_invalidates_ticket() {
    let mut session = UploadSession::new();
    let ticket = session.begin();
    session.cancel();
    assert!(session.complete(ticket, FIRST).is_none());
    assert!(session.dataset().is_none());
}

#[test]
fn new_upload_replaces_previous_dataset() {
    let mut session = UploadSession::new();
    let first = session.begin();
    session.complete(first, FIRST);
    let second = session.begin();
    session.complete(second, SECOND);
    assert_eq!(session.dataset().unwrap().fields, vec!["Date", "B", "C"]);
}

#[test]
fn ticket_cannot_complete_twice() {
    let mut session = UploadSession::new();
    let ticket = session.begin();
    assert!(session.complete(ticket, FIRST).is_some());
    assert!(session.complete(ticket, SECOND).is_none());
    assert_eq!(session.dataset().unwrap().fields, vec!["Date", "A"]);
}

#[test]
fn load_reads_file_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("models.csv");
    fs::write(&path, FIRST).unwrap();

    let mut session = UploadSession::new();
    let dataset = session.load(&UploadSource::File(path)).unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn load_missing_file_keeps_previous_dataset() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.csv");
    fs::write(&good, FIRST).unwrap();

    let mut session = UploadSession::new();
    session.load(&UploadSource::File(good)).unwrap();
    let err = session
        .load(&UploadSource::File(dir.path().join("missing.csv")))
        .unwrap_err();

    assert!(matches!(err, StreamChartError::FileRead { .. }));
    assert_eq!(session.dataset().unwrap().fields, vec!["Date", "A"]);
}

#[test]
fn source_from_dash_is_stdin() {
    assert_eq!(UploadSource::from_arg(Path::new("-")), UploadSource::Stdin);
    assert_eq!(
        UploadSource::from_arg(Path::new("data.csv")),
        UploadSource::File("data.csv".into())
    );
}

#[test]
fn display_name_uses_file_stem() {
    let source = UploadSource::File("reports/llm-scores.csv".into());
    assert_eq!(source.display_name(), "llm-scores");
    assert_eq!(UploadSource::Stdin.display_name(), "stdin");
}

#[test]
fn csv_extension_check_is_case_insensitive() {
    assert!(has_csv_extension(Path::new("a.CSV")));
    assert!(!has_csv_extension(Path::new("a.txt")));
}

#[test]
fn latin1_file_is_decoded_lossily() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, b"Date,Temp\xe9rature\n2024-01-01,10\n").unwrap();

    let mut session = UploadSession::new();
    let dataset = session.load(&UploadSource::File(path)).unwrap();

    assert_eq!(dataset.fields, vec!["Date", "Temp\u{FFFD}rature"]);
    assert_eq!(dataset.records[0].number("Temp\u{FFFD}rature"), 10);
}

#[test]
fn valid_utf8_is_left_untouched() {
    assert_eq!(decode_lossy("Date,Zürich\n".as_bytes().to_vec(), "x"), "Date,Zürich\n");
    assert_eq!(decode_lossy(vec![b'a', 0xff, b'b'], "x"), "a\u{FFFD}b");
}
