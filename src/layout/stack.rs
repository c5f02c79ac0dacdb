//! Streamgraph stacking.
//!
//! Layers are stacked in key order on top of a per-row baseline `g`. The
//! baseline follows the "wiggle" minimisation of Byron & Wattenberg (2008):
//!
//! ```text
//! g[0] = 0
//! g[j] = g[j-1] - Σi (Δf[i][j] / 2 + Σ(k<i) Δf[k][j]) · f[i][j] / Σi f[i][j]
//! ```
//!
//! where `Δf[i][j] = f[i][j] - f[i][j-1]`. When a row sums to zero the
//! baseline carries over unchanged. Layer thickness always equals the raw
//! value, the offset only shifts the whole stack.

use serde::Serialize;

/// Lower and upper edge of one layer at one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StackPoint {
    pub baseline: f64,
    pub topline: f64,
}

impl StackPoint {
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.topline - self.baseline
    }
}

/// Per-row offsets that minimise the weighted slope of all layers.
///
/// `values[i][j]` is the value of layer `i` at row `j`; every layer must have
/// the same number of rows.
#[must_use]
pub fn wiggle_offsets(values: &[Vec<f64>]) -> Vec<f64> {
    let rows = values.first().map_or(0, Vec::len);
    let mut offsets = vec![0.0; rows];
    let mut y = 0.0;

    for j in 1..rows {
        let mut total = 0.0;
        let mut weighted = 0.0;
        let mut below = 0.0;
        for layer in values {
            let current = finite_or_zero(layer[j]);
            let delta = current - finite_or_zero(layer[j - 1]);
            weighted += (delta / 2.0 + below) * current;
            below += delta;
            total += current;
        }
        offsets[j - 1] = y;
        if total != 0.0 {
            y -= weighted / total;
        }
    }
    if let Some(last) = offsets.last_mut() {
        *last = y;
    }
    offsets
}

/// Stack `values` (layer-major) with the wiggle baseline.
#[must_use]
pub fn stack_wiggle(values: &[Vec<f64>]) -> Vec<Vec<StackPoint>> {
    let offsets = wiggle_offsets(values);
    let mut floor = offsets;
    values
        .iter()
        .map(|layer| {
            layer
                .iter()
                .zip(floor.iter_mut())
                .map(|(value, base)| {
                    let point = StackPoint {
                        baseline: *base,
                        topline: *base + value,
                    };
                    if point.topline.is_finite() {
                        *base = point.topline;
                    }
                    point
                })
                .collect()
        })
        .collect()
}

const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;
