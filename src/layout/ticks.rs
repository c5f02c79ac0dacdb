//! Tick generation for linear and calendar scales.
//!
//! Linear ticks are "nice" values (1, 2 or 5 times a power of ten). Calendar
//! ticks pick the interval among day, two days, week, month, quarter and year
//! whose length is closest to `span / count`, falling back to a nice number of
//! years for very long spans.

use chrono::{Datelike, NaiveDate, Weekday};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// (first index, last index, increment). A negative increment means the
/// tick value is `index / -increment`, which avoids accumulating float error
/// for fractional steps.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn tick_spec(start: f64, stop: f64, count: f64) -> (i64, i64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10_f64.powf(-power) / factor;
        i1 = (start * scale).round() as i64;
        i2 = (stop * scale).round() as i64;
        if (i1 as f64) / scale < start {
            i1 += 1;
        }
        if (i2 as f64) / scale > stop {
            i2 -= 1;
        }
        inc = -scale;
    } else {
        let scale = 10_f64.powf(power) * factor;
        i1 = (start / scale).round() as i64;
        i2 = (stop / scale).round() as i64;
        if (i1 as f64) * scale < start {
            i1 += 1;
        }
        if (i2 as f64) * scale > stop {
            i2 -= 1;
        }
        inc = scale;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` nice values covering `[start, stop]`, ascending.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if (start - stop).abs() < f64::EPSILON {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| {
            if inc < 0.0 {
                i as f64 / -inc
            } else {
                i as f64 * inc
            }
        })
        .collect()
}

/// Distance between consecutive ticks of [`linear_ticks`] for the same input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// Format a linear tick with as many decimals as its step needs and a comma
/// as thousands separator.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_linear_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = text
        .split_once('.')
        .map_or((text.as_str(), None), |(i, f)| (i, Some(f)));

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Calendar interval used for time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    /// Every `n`th day of the month, counting from the 1st.
    Days(u32),
    /// Every Sunday.
    Weeks,
    /// First of every `n`th month, counting from January.
    Months(u32),
    /// January 1st of years divisible by `n`.
    Years(i32),
}

impl TimeInterval {
    fn approx_days(self) -> f64 {
        match self {
            Self::Days(n) => f64::from(n),
            Self::Weeks => 7.0,
            Self::Months(n) => 30.0 * f64::from(n),
            Self::Years(n) => 365.0 * f64::from(n),
        }
    }

    fn contains(self, date: NaiveDate) -> bool {
        match self {
            Self::Days(n) => (date.day() - 1).is_multiple_of(n),
            Self::Weeks => date.weekday() == Weekday::Sun,
            Self::Months(n) => date.day() == 1 && date.month0().is_multiple_of(n),
            Self::Years(n) => date.ordinal() == 1 && date.year().rem_euclid(n) == 0,
        }
    }
}

const CANDIDATES: [TimeInterval; 6] = [
    TimeInterval::Days(1),
    TimeInterval::Days(2),
    TimeInterval::Weeks,
    TimeInterval::Months(1),
    TimeInterval::Months(3),
    TimeInterval::Years(1),
];

/// Pick the tick interval for a span of dates.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn time_interval(start: NaiveDate, stop: NaiveDate, count: usize) -> TimeInterval {
    let span = (stop - start).num_days().unsigned_abs() as f64;
    let target = span / count.max(1) as f64;

    let i = CANDIDATES.partition_point(|c| c.approx_days() <= target);
    if i == 0 {
        return CANDIDATES[0];
    }
    if i == CANDIDATES.len() {
        let epoch = NaiveDate::default();
        let years = |d: NaiveDate| (d - epoch).num_days() as f64 / 365.0;
        let step = tick_step(years(start), years(stop), count).floor().max(1.0);
        return TimeInterval::Years(step as i32);
    }

    let (below, above) = (CANDIDATES[i - 1], CANDIDATES[i]);
    if target / below.approx_days() < above.approx_days() / target {
        below
    } else {
        above
    }
}

/// Dates in `[start, stop]` that fall on the chosen interval boundary.
#[must_use]
pub fn time_ticks(start: NaiveDate, stop: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let interval = time_interval(lo, hi, count);
    lo.iter_days()
        .take_while(|d| *d <= hi)
        .filter(|d| interval.contains(*d))
        .collect()
}

#[cfg(test)]
#[path = "ticks_tests.rs"]
mod tests;
