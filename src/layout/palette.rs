//! Series color assignment.

use tracing::warn;

use crate::config::{DEFAULT_PALETTE, PaletteConfig, PaletteOverflow};

/// More series than colors under [`PaletteOverflow::Reject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteExhausted {
    pub series: usize,
    pub palette: usize,
}

/// One color per series, by series position.
///
/// An empty palette falls back to the built-in one.
pub fn assign_colors(
    series: usize,
    palette: &PaletteConfig,
) -> Result<Vec<String>, PaletteExhausted> {
    let colors: Vec<&str> = if palette.colors.is_empty() {
        DEFAULT_PALETTE.to_vec()
    } else {
        palette.colors.iter().map(String::as_str).collect()
    };

    if series > colors.len() {
        match palette.overflow {
            PaletteOverflow::Reject => {
                return Err(PaletteExhausted {
                    series,
                    palette: colors.len(),
                });
            }
            PaletteOverflow::Cycle => {
                warn!(
                    series,
                    palette = colors.len(),
                    "more series than palette colors, reusing colors"
                );
            }
        }
    }

    Ok((0..series)
        .map(|i| colors[i % colors.len()].to_string())
        .collect())
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
