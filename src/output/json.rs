use serde::Serialize;

use crate::chart::{Legend, MiniBarChart, StreamChart};
use crate::error::Result;
use crate::ingest::DatasetSummary;
use crate::layout::RenderOutcome;

use super::{ChartFormatter, SummaryFormatter};

/// Computed geometry of the chart, legend and mini charts.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    chart: Option<&'a RenderOutcome>,
    legend: Legend,
    mini_charts: &'a [MiniBarChart],
}

impl ChartFormatter for JsonFormatter {
    fn format(&self, chart: &StreamChart) -> Result<String> {
        let output = JsonOutput {
            chart: chart.outcome(),
            legend: chart.legend(),
            mini_charts: chart.mini_charts(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

pub struct SummaryJsonFormatter;

impl SummaryFormatter for SummaryJsonFormatter {
    fn format(&self, summary: &DatasetSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
