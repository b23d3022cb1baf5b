//! Input document types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// The smallest colored text unit. A token is laid out atomically and is
/// never split across visual rows, regardless of its width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The text content
    pub text: String,

    /// Declared color as supplied upstream. May be any string; validation
    /// and theme correction happen during layout.
    pub color: String,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

/// One logical source line: an ordered sequence of tokens.
///
/// An empty line represents a blank source line and still advances the
/// vertical position by one line-height when rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    /// Tokens in the line, in display order
    pub tokens: Vec<Token>,
}

impl Line {
    /// Create an empty (blank) line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Create a line from tokens.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A source file broken into lines of colored tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoredFile {
    /// File path, also the join key against the table of contents
    pub path: String,

    /// Language tag assigned upstream (e.g., "rust", "typescript")
    pub language: String,

    /// Lines in source order
    pub lines: Vec<Line>,
}

impl ColoredFile {
    /// Create a new colored file.
    pub fn new(path: impl Into<String>, language: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            lines,
        }
    }

    /// Total number of tokens across all lines.
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(|l| l.tokens.len()).sum()
    }
}

/// A fully materialized document ready for rendering.
///
/// `table_of_contents` and `files` are produced independently by upstream
/// collaborators and are not guaranteed to share ordering; the renderer
/// emits file sections in TOC order via [`Document::files_in_toc_order`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document title, rendered at the top of page 1
    pub title: String,

    /// File paths in presentation order
    pub table_of_contents: Vec<String>,

    /// Colored files, in arbitrary arrival order
    pub files: Vec<ColoredFile>,
}

impl Document {
    /// Create a new document.
    pub fn new(
        title: impl Into<String>,
        table_of_contents: Vec<String>,
        files: Vec<ColoredFile>,
    ) -> Self {
        Self {
            title: title.into(),
            table_of_contents,
            files,
        }
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check if the document has any files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of source lines across all files.
    pub fn line_count(&self) -> usize {
        self.files.iter().map(|f| f.lines.len()).sum()
    }

    /// Files reordered to match the table of contents.
    ///
    /// The join key is exact path equality. Files whose path does not appear
    /// in the TOC sort last, stable in arrival order. Duplicate TOC entries
    /// resolve to the first occurrence.
    pub fn files_in_toc_order(&self) -> Vec<&ColoredFile> {
        let mut toc_index: HashMap<&str, usize> = HashMap::new();
        for (i, path) in self.table_of_contents.iter().enumerate() {
            toc_index.entry(path.as_str()).or_insert(i);
        }

        let mut ordered: Vec<&ColoredFile> = self.files.iter().collect();
        ordered.sort_by_key(|f| {
            toc_index
                .get(f.path.as_str())
                .copied()
                .unwrap_or(usize::MAX)
        });
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> ColoredFile {
        ColoredFile::new(path, "text", vec![])
    }

    #[test]
    fn test_toc_join_reorders_files() {
        let doc = Document::new(
            "demo",
            vec!["b.ts".to_string(), "a.ts".to_string()],
            vec![file("a.ts"), file("b.ts")],
        );

        let ordered = doc.files_in_toc_order();
        assert_eq!(ordered[0].path, "b.ts");
        assert_eq!(ordered[1].path, "a.ts");
    }

    #[test]
    fn test_toc_join_missing_paths_sort_last_stable() {
        let doc = Document::new(
            "demo",
            vec!["c.rs".to_string()],
            vec![file("x.rs"), file("c.rs"), file("y.rs")],
        );

        let ordered = doc.files_in_toc_order();
        let paths: Vec<&str> = ordered.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["c.rs", "x.rs", "y.rs"]);
    }

    #[test]
    fn test_toc_join_duplicate_entries_use_first_occurrence() {
        let doc = Document::new(
            "demo",
            vec![
                "a.rs".to_string(),
                "b.rs".to_string(),
                "a.rs".to_string(),
            ],
            vec![file("b.rs"), file("a.rs")],
        );

        // The duplicate at index 2 must not pull a.rs behind b.rs.
        let ordered = doc.files_in_toc_order();
        let paths: Vec<&str> = ordered.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn test_blank_line() {
        let line = Line::blank();
        assert!(line.is_blank());

        let line = Line::from_tokens(vec![Token::new("fn", "#AA00FF")]);
        assert!(!line.is_blank());
    }

    #[test]
    fn test_json_round_trip() {
        let doc = Document::new(
            "Code Documentation",
            vec!["main.rs".to_string()],
            vec![ColoredFile::new(
                "main.rs",
                "rust",
                vec![Line::from_tokens(vec![Token::new("fn", "#AA00FF")])],
            )],
        );

        let json = doc.to_json().unwrap();
        let parsed = Document::from_json(&json).unwrap();
        assert_eq!(parsed.title, "Code Documentation");
        assert_eq!(parsed.files[0].token_count(), 1);
    }

    #[test]
    fn test_counts() {
        let doc = Document::new(
            "demo",
            vec![],
            vec![ColoredFile::new(
                "a.rs",
                "rust",
                vec![Line::blank(), Line::from_tokens(vec![Token::new("x", "#000000")])],
            )],
        );
        assert_eq!(doc.line_count(), 2);
        assert!(!doc.is_empty());
    }
}
