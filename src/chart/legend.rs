use serde::Serialize;

use crate::layout::ChartLayout;

/// A color swatch next to a series name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub key: String,
    pub color: String,
}

/// Legend entries in series order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    #[must_use]
    pub fn from_layout(layout: &ChartLayout) -> Self {
        Self {
            entries: layout
                .layers
                .iter()
                .map(|layer| LegendEntry {
                    key: layer.key.clone(),
                    color: layer.color.clone(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
