//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Paint value for fills and strokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#e41a1c")
    Hex(String),
    /// CSS variable reference with a fallback for standalone SVG files
    CssVar { name: String, fallback: String },
    /// Inherit the surrounding text color, as axes do
    CurrentColor,
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str, fallback: &str) -> Self {
        Self::CssVar {
            name: name.to_string(),
            fallback: fallback.to_string(),
        }
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar { name, fallback } => format!("var(--color-{name}, {fallback})"),
            Self::CurrentColor => "currentColor".to_string(),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
