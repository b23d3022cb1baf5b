//! # codepress
//!
//! Paginated PDF rendering for syntax-colored source listings.
//!
//! codepress takes a fully materialized document (a title, a table of
//! contents and a set of files broken into lines of colored tokens) and
//! flows it onto fixed-size pages: greedy token wrapping that never splits
//! a token, page breaks checked before every block, theme-aware color
//! correction, and a deterministic PDF byte stream at the end.
//!
//! ## Quick Start
//!
//! ```
//! use codepress::{render, ColoredFile, Document, Line, RenderConfig, Token};
//!
//! fn main() -> codepress::Result<()> {
//!     let doc = Document::new(
//!         "Code Documentation for demo",
//!         vec!["main.rs".to_string()],
//!         vec![ColoredFile::new(
//!             "main.rs",
//!             "rust",
//!             vec![Line::from_tokens(vec![
//!                 Token::new("fn", "#AA00FF"),
//!                 Token::new(" main", "#0000FF"),
//!             ])],
//!         )],
//!     );
//!
//!     let pdf = render(&doc, &RenderConfig::default())?;
//!     assert!(pdf.starts_with(b"%PDF-"));
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Single forward pass**: no reflow, no backtracking; the cursor is the
//!   only mutable state and is owned by one render call.
//! - **Injected metrics**: glyph widths come from a [`TextMetrics`]
//!   implementation; [`StandardFontMetrics`] covers the built-in base fonts.
//! - **Deterministic output**: identical inputs produce byte-identical PDFs.

pub mod color;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod pdf;

// Re-export commonly used types
pub use color::{Rgb, Theme};
pub use error::{Error, Result};
pub use layout::{Cursor, LineSpacing, Paginator, RenderConfig};
pub use metrics::{FontFamily, FontRef, FontWeight, StandardFontMetrics, TextMetrics};
pub use model::{ColoredFile, Document, Line, Page, PlacedRun, Token};

use std::path::Path;

/// Lay a document out into pages without serializing them.
///
/// Useful for inspecting run positions; [`render`] goes all the way to PDF
/// bytes.
pub fn paginate<M: TextMetrics + ?Sized>(
    doc: &Document,
    config: &RenderConfig,
    metrics: &M,
) -> Result<Vec<Page>> {
    config.validate()?;
    Ok(Paginator::new(config, metrics).paginate(doc))
}

/// Render a document to PDF bytes using the built-in base-font metrics.
pub fn render(doc: &Document, config: &RenderConfig) -> Result<Vec<u8>> {
    render_with_metrics(doc, config, &StandardFontMetrics::new())
}

/// Render a document to PDF bytes with a caller-supplied metrics service.
pub fn render_with_metrics<M: TextMetrics + ?Sized>(
    doc: &Document,
    config: &RenderConfig,
    metrics: &M,
) -> Result<Vec<u8>> {
    let pages = paginate(doc, config, metrics)?;
    pdf::serialize(&pages, config.theme)
}

/// Render a document straight to a file.
pub fn render_to_file<P: AsRef<Path>>(
    path: P,
    doc: &Document,
    config: &RenderConfig,
) -> Result<()> {
    let bytes = render(doc, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Builder for configuring and running a render.
///
/// # Example
///
/// ```no_run
/// use codepress::{Codepress, Document, FontFamily, LineSpacing, Theme};
///
/// # fn demo(doc: &Document) -> codepress::Result<()> {
/// let pdf = Codepress::new()
///     .with_font_family(FontFamily::Mono)
///     .with_font_size(9.0)
///     .with_line_spacing(LineSpacing::Normal)
///     .with_theme(Theme::Dark)
///     .render(doc)?;
/// # Ok(())
/// # }
/// ```
pub struct Codepress {
    config: RenderConfig,
}

impl Codepress {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.config = self.config.with_font_family(family);
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, size_pt: f32) -> Self {
        self.config = self.config.with_font_size(size_pt);
        self
    }

    /// Set the line spacing preset.
    pub fn with_line_spacing(mut self, spacing: LineSpacing) -> Self {
        self.config = self.config.with_line_spacing(spacing);
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config = self.config.with_theme(theme);
        self
    }

    /// The configuration assembled so far.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Lay the document out into pages.
    pub fn paginate(&self, doc: &Document) -> Result<Vec<Page>> {
        paginate(doc, &self.config, &StandardFontMetrics::new())
    }

    /// Render the document to PDF bytes.
    pub fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        render(doc, &self.config)
    }

    /// Render the document to a file.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P, doc: &Document) -> Result<()> {
        render_to_file(path, doc, &self.config)
    }
}

impl Default for Codepress {
    fn default() -> Self {
        Self::new()
    }
}
