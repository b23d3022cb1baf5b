//! The paginated layout engine.
//!
//! A single forward sweep flows the document onto fixed-size pages: the
//! title block, the table of contents, then one section per file in TOC
//! order. There is no reflow and no backtracking; the [`Cursor`] is the only
//! mutable state and is owned exclusively by the pass.

mod cursor;
mod options;
mod paginator;
mod wrap;

pub use cursor::Cursor;
pub use options::{LineSpacing, RenderConfig, TITLE_SIZE_PT};
pub use paginator::Paginator;
pub use wrap::wrap_words;
