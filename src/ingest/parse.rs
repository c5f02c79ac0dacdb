//! Lenient CSV-to-record conversion.
//!
//! The first line names the fields. The first column is kept as a trimmed date
//! literal; every other column is read as a leading integer and falls back to 0
//! when the cell is absent or has no digits. Quotes are ordinary characters and
//! rows may be shorter or longer than the header.

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use tracing::{debug, warn};

use super::record::{Dataset, Record, Value};

/// Convert CSV text into a [`Dataset`]. Never fails: malformed cells become 0.
#[must_use]
pub fn parse(text: &str) -> Dataset {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.trim().as_bytes());
    let mut rows = reader.into_records();

    let Some(header) = next_row(&mut rows) else {
        return Dataset::default();
    };
    let header: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

    let mut dataset = Dataset {
        fields: unique_fields(&header),
        ..Dataset::default()
    };

    while let Some(row) = next_row(&mut rows) {
        if is_blank(&row) {
            continue;
        }
        let record = build_record(&header, &row, &mut dataset.coerced_cells);
        if !record.is_empty() {
            dataset.records.push(record);
        }
    }

    debug!(
        rows = dataset.records.len(),
        fields = dataset.fields.len(),
        coerced = dataset.coerced_cells,
        "parsed csv"
    );
    dataset
}

/// Parse the integer prefix of a cell: optional leading whitespace, an optional
/// sign, then decimal digits. Anything after the digits is ignored.
///
/// Returns `None` when there are no digits. Values beyond `i64` saturate.
#[must_use]
pub fn parse_leading_int(cell: &str) -> Option<i64> {
    let s = cell.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = rest.as_bytes()[..len].iter().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

fn next_row(rows: &mut StringRecordsIntoIter<&[u8]>) -> Option<StringRecord> {
    for row in rows.by_ref() {
        match row {
            Ok(row) => return Some(row),
            Err(e) => warn!("skipping unreadable csv row: {e}"),
        }
    }
    None
}

/// A line is blank when it has no separator and its only cell is whitespace.
fn is_blank(row: &StringRecord) -> bool {
    row.len() <= 1 && row.get(0).is_none_or(|cell| cell.trim().is_empty())
}

fn build_record(header: &[String], row: &StringRecord, coerced: &mut usize) -> Record {
    let mut record = Record::new();
    for (index, name) in header.iter().enumerate() {
        let cell = row.get(index);
        let value = if index == 0 {
            Value::Text(cell.map(str::trim).unwrap_or_default().to_string())
        } else if let Some(n) = cell.and_then(parse_leading_int) {
            Value::Int(n)
        } else {
            *coerced += 1;
            Value::Int(0)
        };
        record.insert(name.clone(), value);
    }
    record
}

fn unique_fields(header: &[String]) -> Vec<String> {
    let mut fields: Vec<String> = Vec::with_capacity(header.len());
    for name in header {
        if !fields.contains(name) {
            fields.push(name.clone());
        }
    }
    fields
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
