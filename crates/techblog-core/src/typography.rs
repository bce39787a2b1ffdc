//! Typography tokens: vertical rhythm and modular type scale.
//!
//! A `Typography` is built once from configuration and shared read-only
//! with every component that needs spacing or font sizing.
//!
//! ## Tokens
//!
//! - `rhythm(n)`: `n` baseline heights expressed in `rem`
//! - `scale(n)`: font size `ratio^n` times the base font size, with a
//!   line height snapped to half baselines

use serde::{Deserialize, Serialize};

use crate::style::InlineStyle;

/// Typography settings as they appear in `site.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    /// Root font size in pixels
    pub base_font_size_px: f64,
    /// Line height as a multiple of the base font size
    pub base_line_height: f64,
    /// Ratio between consecutive steps of the modular scale
    pub scale_ratio: f64,
    /// Font stack for the small page header
    pub header_font_family: String,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            base_font_size_px: 16.0,
            base_line_height: 1.75,
            scale_ratio: 2.5,
            header_font_family: "Montserrat, sans-serif".to_string(),
        }
    }
}

/// Font size and line height for one step of the type scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleStyle {
    /// CSS `font-size` value, in `rem`
    pub font_size: String,
    /// Unitless CSS `line-height`
    pub line_height: String,
}

impl ScaleStyle {
    /// Spread this scale step into an inline style
    pub fn apply(&self, style: InlineStyle) -> InlineStyle {
        style
            .with("font-size", &self.font_size)
            .with("line-height", &self.line_height)
    }
}

/// Rhythm and scale calculator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Typography {
    config: TypographyConfig,
}

impl Typography {
    pub fn new(config: TypographyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TypographyConfig {
        &self.config
    }

    /// Font stack used by the small header variant
    pub fn header_font_family(&self) -> &str {
        &self.config.header_font_family
    }

    /// Vertical spacing of `lines` baselines, e.g. `rhythm(1.5) == "2.625rem"`
    pub fn rhythm(&self, lines: f64) -> String {
        format!("{}rem", round4(lines * self.config.base_line_height))
    }

    /// Font size/line height for step `step` of the modular scale
    pub fn scale(&self, step: f64) -> ScaleStyle {
        let base_px = self.config.base_font_size_px;
        let font_px = base_px * self.config.scale_ratio.powf(step);
        let line_px = base_px * self.config.base_line_height;

        // Snap to the nearest half baseline that fits the glyphs
        let lines = (2.0 * font_px / line_px).ceil() / 2.0;

        ScaleStyle {
            font_size: format!("{}rem", round4(font_px / base_px)),
            line_height: format!("{}", round4(lines * line_px / font_px)),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
