//! Output page types and page geometry.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::metrics::FontRef;

/// Page width in points (US Letter, 8.5 inches).
pub const PAGE_WIDTH: f32 = 612.0;

/// Page height in points (US Letter, 11 inches).
pub const PAGE_HEIGHT: f32 = 792.0;

/// Margin in points, identical on all four sides.
pub const MARGIN: f32 = 15.0;

/// Usable horizontal span between the left and right margins.
pub fn content_width() -> f32 {
    PAGE_WIDTH - 2.0 * MARGIN
}

/// A positioned, colored text run on a page.
///
/// `x` and `y` are top-down page coordinates: `y` is the distance from the
/// top edge to the top of the run's line box. The serializer converts to
/// PDF's bottom-up baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedRun {
    /// The text content
    pub text: String,

    /// Distance from the left page edge
    pub x: f32,

    /// Distance from the top page edge
    pub y: f32,

    /// Font size in points
    pub size: f32,

    /// Font face for this run
    pub font: FontRef,

    /// Resolved fill color
    pub color: Rgb,
}

/// A single output page: an ordered sequence of placed runs.
///
/// Pages are append-only while current and never mutated after the cursor
/// advances past them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Placed runs in emission order
    pub runs: Vec<PlacedRun>,

    /// Whether the themed background fill must be painted first
    pub fill_background: bool,
}

impl Page {
    /// Create a new empty Letter-sized page.
    pub fn new(number: u32, fill_background: bool) -> Self {
        Self {
            number,
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            runs: Vec::new(),
            fill_background,
        }
    }

    /// Add a run to the page.
    pub fn push_run(&mut self, run: PlacedRun) {
        self.runs.push(run);
    }

    /// Check if the page has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of all runs, in emission order.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FontFamily, FontWeight};

    #[test]
    fn test_page_new() {
        let page = Page::new(1, false);
        assert_eq!(page.number, 1);
        assert_eq!(page.width, PAGE_WIDTH);
        assert_eq!(page.height, PAGE_HEIGHT);
        assert!(page.is_empty());
        assert!(!page.fill_background);
    }

    #[test]
    fn test_plain_text() {
        let mut page = Page::new(1, false);
        for text in ["const", " ", "a"] {
            page.push_run(PlacedRun {
                text: text.to_string(),
                x: 0.0,
                y: 0.0,
                size: 9.0,
                font: FontRef::new(FontFamily::Mono, FontWeight::Regular),
                color: Rgb::new(0, 0, 0),
            });
        }
        assert_eq!(page.plain_text(), "const a");
    }

    #[test]
    fn test_content_width() {
        assert_eq!(content_width(), PAGE_WIDTH - 30.0);
    }
}
