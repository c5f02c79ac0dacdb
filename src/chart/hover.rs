//! Pointer interaction between the streamgraph areas and the tooltip.

use serde::Serialize;

use super::mini::MiniBarChart;
use crate::config::HoverConfig;

/// Pointer location in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerPosition {
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// The floating box owned by one chart. Hidden tooltips keep their node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tooltip {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub content: Option<MiniBarChart>,
}

impl Tooltip {
    #[must_use]
    pub const fn opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverState {
    opacities: Vec<f64>,
    hovered: Option<usize>,
    tooltip: Tooltip,
    hover_opacity: f64,
    offset: f64,
}

impl HoverState {
    #[must_use]
    pub fn new(series: usize, config: &HoverConfig) -> Self {
        Self {
            opacities: vec![1.0; series],
            hovered: None,
            tooltip: Tooltip::default(),
            hover_opacity: config.opacity,
            offset: config.tooltip_offset,
        }
    }

    /// Back to the idle state: all areas opaque, tooltip hidden and emptied.
    pub fn reset(&mut self, series: usize) {
        self.opacities = vec![1.0; series];
        self.hovered = None;
        self.tooltip = Tooltip::default();
    }

    /// Pointer entered the area of series `index`.
    pub fn enter(&mut self, index: usize, at: PointerPosition, content: Option<MiniBarChart>) {
        let Some(opacity) = self.opacities.get_mut(index) else {
            return;
        };
        *opacity = self.hover_opacity;
        self.hovered = Some(index);
        self.tooltip.visible = true;
        self.tooltip.content = content;
        self.place(at);
    }

    /// Pointer moved while over an area; the tooltip follows.
    pub fn move_to(&mut self, at: PointerPosition) {
        if self.hovered.is_some() {
            self.place(at);
        }
    }

    /// Pointer left the area of series `index`.
    pub fn leave(&mut self, index: usize) {
        if let Some(opacity) = self.opacities.get_mut(index) {
            *opacity = 1.0;
        }
        if self.hovered == Some(index) {
            self.hovered = None;
        }
        self.tooltip.visible = false;
    }

    fn place(&mut self, at: PointerPosition) {
        self.tooltip.left = at.page_x + self.offset;
        self.tooltip.top = at.page_y + self.offset;
    }

    #[must_use]
    pub fn opacity(&self, index: usize) -> Option<f64> {
        self.opacities.get(index).copied()
    }

    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub const fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod tests;
