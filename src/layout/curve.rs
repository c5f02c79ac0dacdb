//! SVG path data and the uniform cubic B-spline ("basis") curve.
//!
//! The curve approximates its control points: it starts and ends exactly on
//! the first and last point but passes near, not through, the ones between.

use std::fmt::Write;

/// Round to three decimals and drop trailing zeros.
#[must_use]
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

/// Accumulates SVG path commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathData {
    d: String,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.d, "M{},{}", format_coord(x), format_coord(y));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.d, "L{},{}", format_coord(x), format_coord(y));
    }

    pub fn cubic_to(&mut self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) {
        let _ = write!(
            self.d,
            "C{},{},{},{},{},{}",
            format_coord(c1.0),
            format_coord(c1.1),
            format_coord(c2.0),
            format_coord(c2.1),
            format_coord(end.0),
            format_coord(end.1)
        );
    }

    pub fn close(&mut self) {
        self.d.push('Z');
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.d
    }
}

/// Streams points through the basis spline into a [`PathData`].
///
/// A run opened with `continuing = true` joins the current subpath with a
/// line instead of starting a new one.
struct Basis<'a> {
    path: &'a mut PathData,
    continuing: bool,
    count: usize,
    p0: (f64, f64),
    p1: (f64, f64),
}

impl<'a> Basis<'a> {
    const fn start(path: &'a mut PathData, continuing: bool) -> Self {
        Self {
            path,
            continuing,
            count: 0,
            p0: (0.0, 0.0),
            p1: (0.0, 0.0),
        }
    }

    fn segment(&mut self, p: (f64, f64)) {
        let (p0, p1) = (self.p0, self.p1);
        self.path.cubic_to(
            ((2.0 * p0.0 + p1.0) / 3.0, (2.0 * p0.1 + p1.1) / 3.0),
            ((p0.0 + 2.0 * p1.0) / 3.0, (p0.1 + 2.0 * p1.1) / 3.0),
            ((p0.0 + 4.0 * p1.0 + p.0) / 6.0, (p0.1 + 4.0 * p1.1 + p.1) / 6.0),
        );
    }

    fn point(&mut self, p: (f64, f64)) {
        match self.count {
            0 => {
                if self.continuing {
                    self.path.line_to(p.0, p.1);
                } else {
                    self.path.move_to(p.0, p.1);
                }
            }
            1 => {}
            2 => {
                let (p0, p1) = (self.p0, self.p1);
                self.path
                    .line_to((5.0 * p0.0 + p1.0) / 6.0, (5.0 * p0.1 + p1.1) / 6.0);
                self.segment(p);
            }
            _ => self.segment(p),
        }
        self.count += 1;
        self.p0 = self.p1;
        self.p1 = p;
    }

    fn end(mut self) {
        if self.count >= 3 {
            let last = self.p1;
            self.segment(last);
        }
        if self.count >= 2 {
            self.path.line_to(self.p1.0, self.p1.1);
        }
    }
}

/// Closed area between two lines: `top` left to right, then `bottom` right to left.
///
/// `top` and `bottom` are given in the same (left to right) order.
#[must_use]
pub fn basis_area(top: &[(f64, f64)], bottom: &[(f64, f64)]) -> String {
    if top.is_empty() {
        return String::new();
    }
    let mut path = PathData::new();

    let mut upper = Basis::start(&mut path, false);
    for p in top {
        upper.point(*p);
    }
    upper.end();

    let mut lower = Basis::start(&mut path, true);
    for p in bottom.iter().rev() {
        lower.point(*p);
    }
    lower.end();

    path.close();
    path.into_string()
}

#[cfg(test)]
#[path = "curve_tests.rs"]
mod tests;
