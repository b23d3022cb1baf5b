//! Greedy word-wrapping for title, TOC and separator text.

/// Wrap `text` into rows no wider than `max_width`, measuring candidates
/// with `measure`.
///
/// Words are split on whitespace and filled greedily. A word wider than
/// `max_width` gets a row of its own and overflows rather than being broken.
/// Blank input produces no rows.
pub fn wrap_words<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10 units per character keeps the arithmetic readable.
    fn measure(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_short_text_single_row() {
        let rows = wrap_words("hello world", 200.0, measure);
        assert_eq!(rows, vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_width() {
        let rows = wrap_words("one two three four", 80.0, measure);
        assert_eq!(rows, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_exact_fit_stays() {
        // "ab cd" is exactly 50 units.
        let rows = wrap_words("ab cd", 50.0, measure);
        assert_eq!(rows, vec!["ab cd"]);
        let rows = wrap_words("ab cd", 49.0, measure);
        assert_eq!(rows, vec!["ab", "cd"]);
    }

    #[test]
    fn test_overlong_word_overflows_alone() {
        let rows = wrap_words("a verylongunbreakableword b", 60.0, measure);
        assert_eq!(rows, vec!["a", "verylongunbreakableword", "b"]);
    }

    #[test]
    fn test_blank_text_no_rows() {
        assert!(wrap_words("", 100.0, measure).is_empty());
        assert!(wrap_words("   ", 100.0, measure).is_empty());
    }

    #[test]
    fn test_collapses_whitespace() {
        let rows = wrap_words("a   b\t c", 200.0, measure);
        assert_eq!(rows, vec!["a b c"]);
    }
}
