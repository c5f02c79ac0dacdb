use super::*;
use crate::ingest::parse;

fn report(csv: &str) -> String {
    let summary = DatasetSummary::from_dataset("models", &parse(csv));
    SummaryTextFormatter::new(ColorMode::Never)
        .format(&summary)
        .unwrap()
}

#[test]
fn lists_fields_and_rows() {
    let output = report("Date,GPT-4,Claude\n2024-01-01,10,5\n2024-02-01,2000,x\n");
    assert!(output.starts_with("models\n"));
    assert!(output.contains("  Fields: Date, GPT-4, Claude\n"));
    assert!(output.contains("  Date column: Date\n"));
    assert!(output.contains("  Rows: 2\n"));
    assert!(output.contains("  Dates: 2024-01-01 .. 2024-02-01\n"));
    assert!(output.contains("  Coerced cells: 1\n"));
}

#[test]
fn series_table_groups_thousands() {
    let output = report("Date,GPT-4\n2024-01-01,10\n2024-02-01,2000\n");
    let row = output.lines().find(|l| l.contains("GPT-4")).unwrap();
    assert!(row.contains("2,000"));
    assert!(row.contains("2,010"));
}

#[test]
fn header_only_has_no_series_table() {
    let output = report("Date,A\n");
    assert!(output.contains("  Rows: 0\n"));
    assert!(!output.contains("Dates:"));
    assert!(output.contains("No series to plot."));
}

#[test]
fn colors_are_optional() {
    let summary = DatasetSummary::from_dataset("m", &parse("Date,A\n2024-01-01,x\n"));
    let colored = SummaryTextFormatter { use_colors: true }
        .format(&summary)
        .unwrap();
    assert!(colored.contains("\x1b[33m"));
}
