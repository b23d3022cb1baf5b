//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::color::Theme;
use crate::error::{Error, Result};
use crate::metrics::FontFamily;

/// Fixed size of the title block, in points.
pub const TITLE_SIZE_PT: f32 = 24.0;

/// Vertical rhythm between consecutive rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSpacing {
    /// 1.0x
    Compact,
    /// 1.15x
    #[default]
    Normal,
    /// 1.5x
    Spacious,
}

impl LineSpacing {
    /// The spacing multiplier applied to the line-height formula.
    pub fn multiplier(self) -> f32 {
        match self {
            LineSpacing::Compact => 1.0,
            LineSpacing::Normal => 1.15,
            LineSpacing::Spacious => 1.5,
        }
    }
}

/// Configuration for one render. Immutable once the pass starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Font family for all text
    pub font_family: FontFamily,

    /// Body font size in points; any positive value is accepted
    pub font_size_pt: f32,

    /// Vertical rhythm preset
    pub line_spacing: LineSpacing,

    /// Color theme
    pub theme: Theme,
}

impl RenderConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, size_pt: f32) -> Self {
        self.font_size_pt = size_pt;
        self
    }

    /// Set the line spacing preset.
    pub fn with_line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Check the configuration before a render.
    pub fn validate(&self) -> Result<()> {
        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "font size must be a positive number, got {}",
                self.font_size_pt
            )));
        }
        Ok(())
    }

    /// Row height for the given font size: `size * 0.5 * multiplier`.
    pub fn line_height(&self, size_pt: f32) -> f32 {
        size_pt * 0.5 * self.line_spacing.multiplier()
    }

    /// Row height at the body size.
    pub fn body_line_height(&self) -> f32 {
        self.line_height(self.font_size_pt)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Mono,
            font_size_pt: 9.0,
            line_spacing: LineSpacing::Normal,
            theme: Theme::Light,
        }
    }
}
