//! Tabular records produced by CSV ingestion.

use indexmap::IndexMap;
use serde::Serialize;

/// A single cell after coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Date literal from the first column, kept verbatim (trimmed).
    Text(String),
    /// Series value; unparseable or missing cells are 0.
    Int(i64),
}

impl Value {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

/// One CSV row: field name to value, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. Re-inserting an existing name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Integer value of a series field; absent or textual fields read as 0.
    #[must_use]
    pub fn number(&self, name: &str) -> i64 {
        self.get(name).and_then(Value::as_int).unwrap_or(0)
    }

    /// The first field, which holds the date.
    #[must_use]
    pub fn date_field(&self) -> Option<(&str, &Value)> {
        self.fields.first().map(|(k, v)| (k.as_str(), v))
    }

    /// The date literal, if the first field is textual.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date_field().and_then(|(_, v)| v.as_text())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Series keys: every field except the first, in column order.
    #[must_use]
    pub fn series_keys(&self) -> Vec<String> {
        self.field_names().skip(1).map(str::to_string).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered rows of one upload, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    /// Trimmed header names (duplicates collapsed, first position kept).
    pub fields: Vec<String>,
    pub records: Vec<Record>,
    /// Number of numeric cells that were missing or unparseable and became 0.
    pub coerced_cells: usize,
}

impl Dataset {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Series keys derived from the first record, `None` for an empty dataset.
    #[must_use]
    pub fn series_keys(&self) -> Option<Vec<String>> {
        self.records.first().map(Record::series_keys)
    }

    /// Name of the date column, if there is a header.
    #[must_use]
    pub fn date_field(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
