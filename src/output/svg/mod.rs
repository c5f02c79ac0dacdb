//! SVG generation for the streamgraph and its tooltip charts.
//!
//! Charts are assembled from a few primitives (axes, bars, areas, groups)
//! rendered straight to markup. Sizes are explicit `width`/`height`
//! attributes with a matching `viewBox`, so the same output works inline in
//! the HTML page and as a standalone `.svg` file.

mod builder;
mod chart;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use chart::{MiniChartSvg, PlaceholderChart, StreamgraphChart, render_outcome};
pub use element::{Area, Axis, AxisOrientation, Bar, Group, Label, SvgElement};
pub use format::{format_number, html_escape};
pub use style::{ChartColor, TextAnchor};
