//! Position scales: continuous linear, calendar time, and categorical bands.

use chrono::NaiveDate;
use serde::Serialize;

use super::ticks::{linear_ticks, time_ticks};

/// Maps a numeric domain linearly onto a pixel range.
///
/// A degenerate domain (both ends equal) maps every value to the middle of
/// the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        t.mul_add(r1 - r0, r0)
    }

    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Maps calendar dates onto a pixel range, one day being the unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeScale {
    pub domain: (NaiveDate, NaiveDate),
    pub range: (f64, f64),
}

impl TimeScale {
    #[must_use]
    pub const fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale over the earliest and latest of `dates`, `None` if there are none.
    pub fn from_extent(
        dates: impl IntoIterator<Item = NaiveDate>,
        range: (f64, f64),
    ) -> Option<Self> {
        let mut dates = dates.into_iter();
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self::new((min, max), range))
    }

    #[allow(clippy::cast_precision_loss)]
    fn linear(&self) -> LinearScale {
        let (d0, d1) = self.domain;
        LinearScale::new((0.0, (d1 - d0).num_days() as f64), self.range)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(&self, date: NaiveDate) -> f64 {
        self.linear()
            .apply((date - self.domain.0).num_days() as f64)
    }

    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        time_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Maps discrete categories onto evenly spaced, padded bands.
///
/// Outer padding equals inner padding and bands are centred in the range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    #[must_use]
    pub const fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self {
            domain,
            range,
            padding,
        }
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        (r1 - r0) / (n - self.padding + 2.0 * self.padding).max(1.0)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for `category`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.iter().position(|c| c == category)?;
        let step = self.step();
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let start = (r1 - r0 - step * (n - self.padding)).mul_add(0.5, r0);
        Some(step.mul_add(index as f64, start))
    }

    /// Centre of the band for `category`, where axis ticks go.
    #[must_use]
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category).map(|x| x + self.bandwidth() / 2.0)
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
