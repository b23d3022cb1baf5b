//! Render-time cursor state.

use crate::model::{MARGIN, PAGE_HEIGHT, PAGE_WIDTH};

/// The only mutable state of a render pass, owned exclusively by it.
///
/// Coordinates are top-down: `y` grows toward the bottom margin and resets
/// to the top margin on a page advance. Pages only move forward and `y` only
/// increases within a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Index of the current page (0-based)
    pub page_index: usize,

    /// Horizontal position, measured from the left page edge
    pub x: f32,

    /// Vertical position, measured from the top page edge
    pub y: f32,
}

impl Cursor {
    /// Cursor at the top-left margin of the first page.
    pub fn new() -> Self {
        Self {
            page_index: 0,
            x: MARGIN,
            y: MARGIN,
        }
    }

    /// Move to the next visual row: down one line-height, back to the left
    /// margin.
    pub fn advance_row(&mut self, line_height: f32) {
        self.y += line_height;
        self.x = MARGIN;
    }

    /// Close the current page and start at the top margin of the next.
    pub fn advance_page(&mut self) {
        self.page_index += 1;
        self.x = MARGIN;
        self.y = MARGIN;
    }

    /// Record a placement of `width` at the current position and advance
    /// horizontally. Returns the position the run was placed at.
    pub fn place(&mut self, width: f32) -> (f32, f32) {
        let at = (self.x, self.y);
        self.x += width;
        at
    }

    /// Whether a block of the given height still fits above the bottom
    /// margin.
    pub fn fits_vertically(&self, needed: f32) -> bool {
        self.y + needed <= PAGE_HEIGHT - MARGIN
    }

    /// Whether a run of the given width still fits before the right margin.
    /// An exact fit counts as fitting; the boundary is strictly greater.
    pub fn fits_horizontally(&self, width: f32) -> bool {
        self.x + width <= PAGE_WIDTH - MARGIN
    }

    /// Whether nothing has been placed on the current visual row yet.
    pub fn at_row_start(&self) -> bool {
        self.x <= MARGIN
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
