//! Document and page models.
//!
//! The input side ([`Document`], [`ColoredFile`], [`Line`], [`Token`]) is
//! produced by upstream collaborators and is read-only for the whole render.
//! The output side ([`Page`], [`PlacedRun`]) is produced by the layout pass
//! and consumed by the PDF serializer.

mod document;
mod page;

pub use document::{ColoredFile, Document, Line, Token};
pub use page::{content_width, Page, PlacedRun, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
