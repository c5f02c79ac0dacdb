//! The stateful streamgraph widget.
//!
//! [`StreamChart`] owns the last computed layout, the per-series mini charts
//! and the hover state. Every [`StreamChart::render`] rebuilds all of them
//! from the dataset and dismisses any tooltip left over from the previous
//! pass.

mod hover;
mod legend;
mod mini;

use tracing::debug;

use crate::config::Config;
use crate::ingest::Dataset;
use crate::layout::{RenderOutcome, compute_layout};

pub use hover::{HoverState, PointerPosition, Tooltip};
pub use legend::{Legend, LegendEntry};
pub use mini::{MiniBar, MiniBarChart};

#[derive(Debug, Clone)]
pub struct StreamChart {
    config: Config,
    outcome: Option<RenderOutcome>,
    mini_charts: Vec<MiniBarChart>,
    hover: HoverState,
}

impl StreamChart {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let hover = HoverState::new(0, &config.hover);
        Self {
            config,
            outcome: None,
            mini_charts: Vec::new(),
            hover,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Recompute everything from `dataset`.
    pub fn render(&mut self, dataset: &Dataset) -> &RenderOutcome {
        let outcome = compute_layout(dataset, &self.config);

        self.mini_charts = outcome.layout().map_or_else(Vec::new, |layout| {
            (0..layout.layers.len())
                .filter_map(|i| MiniBarChart::build(layout, i, &self.config.mini_chart))
                .collect()
        });
        self.hover.reset(self.mini_charts.len());
        debug!(series = self.mini_charts.len(), "chart rendered");

        self.outcome.insert(outcome)
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&RenderOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn legend(&self) -> Legend {
        self.outcome
            .as_ref()
            .and_then(RenderOutcome::layout)
            .map(Legend::from_layout)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn mini_charts(&self) -> &[MiniBarChart] {
        &self.mini_charts
    }

    #[must_use]
    pub const fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Pointer entered the area of series `index`: dim it and show its mini chart.
    pub fn pointer_enter(&mut self, index: usize, at: PointerPosition) {
        let content = self.mini_charts.get(index).cloned();
        self.hover.enter(index, at, content);
    }

    pub fn pointer_move(&mut self, at: PointerPosition) {
        self.hover.move_to(at);
    }

    pub fn pointer_leave(&mut self, index: usize) {
        self.hover.leave(index);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
