//! Per-column statistics of a parsed dataset.

use serde::Serialize;

use super::record::{Dataset, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesSummary {
    pub key: String,
    pub min: i64,
    pub max: i64,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub source: String,
    pub fields: Vec<String>,
    pub date_field: Option<String>,
    pub rows: usize,
    pub coerced_cells: usize,
    /// First and last date literal, in file order.
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub series: Vec<SeriesSummary>,
}

impl DatasetSummary {
    #[must_use]
    pub fn from_dataset(source: impl Into<String>, dataset: &Dataset) -> Self {
        let keys = dataset.series_keys().unwrap_or_default();
        let series = keys
            .into_iter()
            .map(|key| {
                let (min, max, total) = dataset.records.iter().map(|r| r.number(&key)).fold(
                    (i64::MAX, i64::MIN, 0_i64),
                    |(lo, hi, sum), v| (lo.min(v), hi.max(v), sum.saturating_add(v)),
                );
                SeriesSummary {
                    key,
                    min,
                    max,
                    total,
                }
            })
            .collect();

        let date = |record: Option<&Record>| record.and_then(Record::date).map(str::to_string);

        Self {
            source: source.into(),
            fields: dataset.fields.clone(),
            date_field: dataset.date_field().map(str::to_string),
            rows: dataset.len(),
            coerced_cells: dataset.coerced_cells,
            first_date: date(dataset.records.first()),
            last_date: date(dataset.records.last()),
            series,
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
