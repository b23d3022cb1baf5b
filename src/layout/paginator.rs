//! The pagination pass: flows a document onto fixed-size pages.

use crate::color::Rgb;
use crate::layout::{wrap_words, Cursor, RenderConfig, TITLE_SIZE_PT};
use crate::metrics::{FontRef, FontWeight, TextMetrics};
use crate::model::{content_width, Document, Line, Page, PlacedRun, MARGIN};

/// Single-use pagination pass over one document.
///
/// Owns the [`Cursor`] for its whole lifetime; pages only advance forward
/// and a page is never touched again once the cursor has left it.
pub struct Paginator<'a, M: TextMetrics + ?Sized> {
    config: &'a RenderConfig,
    metrics: &'a M,
    pages: Vec<Page>,
    cursor: Cursor,
}

impl<'a, M: TextMetrics + ?Sized> Paginator<'a, M> {
    /// Create a paginator with the first page already open.
    pub fn new(config: &'a RenderConfig, metrics: &'a M) -> Self {
        let fill = config.theme.background().is_some();
        Self {
            config,
            metrics,
            pages: vec![Page::new(1, fill)],
            cursor: Cursor::new(),
        }
    }

    /// Flow the whole document and return the finished pages.
    ///
    /// Emission order: title block, table of contents, then one section per
    /// file in TOC-join order. Deterministic for identical inputs.
    pub fn paginate(mut self, doc: &Document) -> Vec<Page> {
        let body = FontRef::new(self.config.font_family, FontWeight::Regular);
        let bold = FontRef::new(self.config.font_family, FontWeight::Bold);
        let foreground = self.config.theme.foreground();
        let body_height = self.config.body_line_height();

        self.emit_wrapped_block(&doc.title, bold, TITLE_SIZE_PT, foreground);
        self.cursor.advance_row(body_height);

        for path in &doc.table_of_contents {
            self.emit_wrapped_block(path, body, self.config.font_size_pt, foreground);
        }

        for file in doc.files_in_toc_order() {
            log::debug!(
                "laying out {} ({}, {} lines)",
                file.path,
                file.language,
                file.lines.len()
            );
            self.cursor.advance_row(body_height);
            let separator = format!("File: {} ({})", file.path, file.language);
            self.emit_wrapped_block(&separator, bold, self.config.font_size_pt, foreground);
            for line in &file.lines {
                self.emit_line(line, body);
            }
        }

        self.pages
    }

    /// Unified page-break predicate: close the current page and open a new
    /// one if a block of `needed` height would cross the bottom margin.
    ///
    /// A block too tall for even a fresh page stays where it is and
    /// overflows; breaking again would only insert blank pages.
    fn ensure_room(&mut self, needed: f32) {
        if !self.cursor.fits_vertically(needed) && self.cursor.y > MARGIN {
            self.open_page();
        }
    }

    fn open_page(&mut self) {
        let number = self.pages.len() as u32 + 1;
        log::debug!("page {} full, opening page {}", self.pages.len(), number);
        self.cursor.advance_page();
        self.pages
            .push(Page::new(number, self.config.theme.background().is_some()));
    }

    fn current_page(&mut self) -> &mut Page {
        let index = self.cursor.page_index;
        &mut self.pages[index]
    }

    /// Emit a word-wrapped block of plain text (title, TOC entry or file
    /// separator). The page-break check reserves the full wrapped-row count
    /// up front so the block starts on a page that can hold it.
    fn emit_wrapped_block(&mut self, text: &str, font: FontRef, size: f32, color: Rgb) {
        let rows = wrap_words(text, content_width(), |s| {
            self.metrics.text_width(font, size, s)
        });
        if rows.is_empty() {
            return;
        }

        let row_height = self.config.line_height(size);
        self.ensure_room(rows.len() as f32 * row_height);

        for row in rows {
            let width = self.metrics.text_width(font, size, &row);
            let (x, y) = self.cursor.place(width);
            self.current_page().push_run(PlacedRun {
                text: row,
                x,
                y,
                size,
                font,
                color,
            });
            self.cursor.advance_row(row_height);
        }
    }

    /// Emit one logical source line with greedy token flow.
    ///
    /// Tokens are placed left to right and never split: a token that does
    /// not fit wraps to the next visual row unless the row is still empty,
    /// in which case it overflows in place. The vertical position advances
    /// by exactly one line-height after the line, blank lines included.
    fn emit_line(&mut self, line: &Line, font: FontRef) {
        let size = self.config.font_size_pt;
        let row_height = self.config.body_line_height();
        self.ensure_room(row_height);

        for token in &line.tokens {
            // Unmeasurable text: zero width, placed without a wrap check.
            if token.text.is_empty() {
                let color = self.config.theme.resolve(&token.color);
                let (x, y) = self.cursor.place(0.0);
                self.current_page().push_run(PlacedRun {
                    text: String::new(),
                    x,
                    y,
                    size,
                    font,
                    color,
                });
                continue;
            }

            let width = self.metrics.text_width(font, size, &token.text);
            if !self.cursor.fits_horizontally(width) && !self.cursor.at_row_start() {
                self.cursor.advance_row(row_height);
                self.ensure_room(row_height);
            }

            let color = self.config.theme.resolve(&token.color);
            let (x, y) = self.cursor.place(width);
            self.current_page().push_run(PlacedRun {
                text: token.text.clone(),
                x,
                y,
                size,
                font,
                color,
            });
        }

        self.cursor.advance_row(row_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Theme;
    use crate::layout::LineSpacing;
    use crate::model::{ColoredFile, Token, PAGE_HEIGHT};

    /// Fixed per-character width, independent of font and size.
    struct FixedMetrics(f32);

    impl TextMetrics for FixedMetrics {
        fn text_width(&self, _font: FontRef, _size: f32, text: &str) -> f32 {
            text.chars().count() as f32 * self.0
        }
    }

    fn config() -> RenderConfig {
        RenderConfig::new()
            .with_font_size(9.0)
            .with_line_spacing(LineSpacing::Normal)
    }

    fn doc_with_lines(lines: Vec<Line>) -> Document {
        Document::new(
            "t",
            vec!["f".to_string()],
            vec![ColoredFile::new("f", "rust", lines)],
        )
    }

    #[test]
    fn test_single_row_tokens_share_y() {
        let metrics = FixedMetrics(5.0);
        let doc = doc_with_lines(vec![Line::from_tokens(vec![
            Token::new("const", "#AA00FF"),
            Token::new(" ", "#000000"),
            Token::new("a", "#0000FF"),
        ])]);

        let config = config();
        let pages = Paginator::new(&config, &metrics).paginate(&doc);
        assert_eq!(pages.len(), 1);

        let runs = &pages[0].runs;
        // Last three runs are the code tokens.
        let tail = &runs[runs.len() - 3..];
        assert_eq!(tail[0].text, "const");
        assert!(tail[0].x < tail[1].x && tail[1].x < tail[2].x);
        assert_eq!(tail[0].y, tail[1].y);
        assert_eq!(tail[1].y, tail[2].y);
    }

    #[test]
    fn test_blank_line_advances_without_runs() {
        let metrics = FixedMetrics(5.0);
        let blank_doc = doc_with_lines(vec![Line::blank(), Line::from_tokens(vec![Token::new(
            "x", "#000000",
        )])]);
        let no_blank_doc = doc_with_lines(vec![Line::from_tokens(vec![Token::new(
            "x", "#000000",
        )])]);

        let config = config();
        let with_blank = Paginator::new(&config, &metrics).paginate(&blank_doc);
        let without_blank = Paginator::new(&config, &metrics).paginate(&no_blank_doc);

        let y_with = with_blank[0].runs.last().unwrap().y;
        let y_without = without_blank[0].runs.last().unwrap().y;
        assert!((y_with - y_without - config.body_line_height()).abs() < 1e-4);
        assert_eq!(with_blank[0].runs.len(), without_blank[0].runs.len());
    }

    #[test]
    fn test_wide_line_wraps_tokens_whole() {
        let metrics = FixedMetrics(5.0);
        // 200 chars * 5.0 = 1000 units, wider than the 582-unit content box.
        let tokens = vec![
            Token::new("a".repeat(100), "#000000"),
            Token::new("b".repeat(100), "#000000"),
        ];
        let doc = doc_with_lines(vec![Line::from_tokens(tokens)]);

        let config = config();
        let pages = Paginator::new(&config, &metrics).paginate(&doc);
        let runs = &pages[0].runs;
        let a_run = runs.iter().find(|r| r.text.starts_with('a')).unwrap();
        let b_run = runs.iter().find(|r| r.text.starts_with('b')).unwrap();
        // Both tokens intact, second one on a later row.
        assert_eq!(a_run.text.len(), 100);
        assert_eq!(b_run.text.len(), 100);
        assert!(b_run.y > a_run.y);
        assert_eq!(b_run.x, MARGIN);
    }

    #[test]
    fn test_page_break_opens_new_page() {
        let metrics = FixedMetrics(5.0);
        let lines: Vec<Line> = (0..400)
            .map(|i| Line::from_tokens(vec![Token::new(format!("line{i}"), "#000000")]))
            .collect();
        let doc = doc_with_lines(lines);

        let config = config();
        let pages = Paginator::new(&config, &metrics).paginate(&doc);
        assert!(pages.len() > 1);

        for page in &pages {
            for run in &page.runs {
                assert!(run.y >= MARGIN);
                assert!(run.y <= PAGE_HEIGHT - MARGIN);
            }
        }
    }

    #[test]
    fn test_dark_theme_marks_background_fill() {
        let metrics = FixedMetrics(5.0);
        let doc = doc_with_lines(vec![Line::blank()]);
        let config = config().with_theme(Theme::Dark);
        let pages = Paginator::new(&config, &metrics).paginate(&doc);
        assert!(pages.iter().all(|p| p.fill_background));

        let light = config.with_theme(Theme::Light);
        let pages = Paginator::new(&light, &metrics).paginate(&doc);
        assert!(pages.iter().all(|p| !p.fill_background));
    }

    #[test]
    fn test_empty_document_renders_title_and_toc_only() {
        let metrics = FixedMetrics(5.0);
        let doc = Document::new("title", vec!["ghost.rs".to_string()], vec![]);
        let config = config();
        let pages = Paginator::new(&config, &metrics).paginate(&doc);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].plain_text().contains("ghost.rs"));
        assert!(!pages[0].plain_text().contains("File:"));
    }

    #[test]
    fn test_empty_token_is_emitted_with_zero_width() {
        let metrics = FixedMetrics(5.0);
        let doc = doc_with_lines(vec![Line::from_tokens(vec![
            Token::new("x", "#000000"),
            Token::new("", "#000000"),
            Token::new("y", "#000000"),
        ])]);
        let config = config();
        let pages = Paginator::new(&config, &metrics).paginate(&doc);
        let runs = &pages[0].runs;
        let tail = &runs[runs.len() - 3..];
        assert_eq!(tail[1].text, "");
        // Zero width: the empty run and the following token share an x.
        assert_eq!(tail[1].x, tail[2].x);
    }
}
