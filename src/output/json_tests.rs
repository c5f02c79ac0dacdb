use super::*;
use crate::config::Config;
use crate::ingest::parse;

fn rendered(csv: &str) -> StreamChart {
    let mut chart = StreamChart::new(Config::default());
    chart.render(&parse(csv));
    chart
}

#[test]
fn chart_layout_is_serialized() {
    let chart = rendered("Date,GPT-4\n2024-01-01,10\n2024-02-01,20\n");
    let output = JsonFormatter.format(&chart).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["chart"]["status"], "chart");
    assert_eq!(parsed["chart"]["keys"][0], "GPT-4");
    assert_eq!(parsed["chart"]["rows"][1]["date"], "2024-02-01");
    assert_eq!(parsed["chart"]["layers"][0]["points"][1]["baseline"], -5.0);
    assert_eq!(parsed["legend"]["entries"][0]["color"], "#e41a1c");
    assert_eq!(parsed["mini_charts"][0]["bars"][1]["value"], 20);
}

#[test]
fn empty_outcome_is_serialized() {
    let chart = rendered("Date,A\n");
    let output = JsonFormatter.format(&chart).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["chart"]["status"], "empty");
    assert_eq!(parsed["chart"]["reason"]["kind"], "no_records");
    assert_eq!(parsed["mini_charts"].as_array().unwrap().len(), 0);
}

#[test]
fn summary_is_serialized() {
    let summary = DatasetSummary::from_dataset("data", &parse("Date,A\n2024-01-01,4\n"));
    let output = SummaryJsonFormatter.format(&summary).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["rows"], 1);
    assert_eq!(parsed["series"][0]["key"], "A");
    assert_eq!(parsed["series"][0]["total"], 4);
}
