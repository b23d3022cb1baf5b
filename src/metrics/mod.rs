//! Text measurement.
//!
//! The layout engine never inspects glyphs itself; it asks a [`TextMetrics`]
//! implementation for rendered widths. Implementations must be reentrant and
//! stateless per call so that independent renders can run concurrently.
//!
//! [`StandardFontMetrics`] is the built-in implementation, backed by the
//! glyph-width tables of the PDF base-14 fonts the serializer emits, so the
//! default pipeline needs no font files at all.

mod afm;

use serde::{Deserialize, Serialize};

/// Font family selector. Affects glyph metrics and the base font written to
/// the PDF, nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Courier
    #[default]
    Mono,
    /// Helvetica
    Sans,
    /// Times
    Serif,
}

/// Font weight selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A concrete font face: family plus weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontRef {
    pub family: FontFamily,
    pub weight: FontWeight,
}

impl FontRef {
    /// Create a font reference.
    pub const fn new(family: FontFamily, weight: FontWeight) -> Self {
        Self { family, weight }
    }

    /// The PostScript base font name written into the PDF.
    pub fn base_name(self) -> &'static str {
        match (self.family, self.weight) {
            (FontFamily::Mono, FontWeight::Regular) => "Courier",
            (FontFamily::Mono, FontWeight::Bold) => "Courier-Bold",
            (FontFamily::Sans, FontWeight::Regular) => "Helvetica",
            (FontFamily::Sans, FontWeight::Bold) => "Helvetica-Bold",
            (FontFamily::Serif, FontWeight::Regular) => "Times-Roman",
            (FontFamily::Serif, FontWeight::Bold) => "Times-Bold",
        }
    }

    /// All faces the serializer can register, in fixed order.
    pub fn all() -> [FontRef; 6] {
        [
            FontRef::new(FontFamily::Mono, FontWeight::Regular),
            FontRef::new(FontFamily::Mono, FontWeight::Bold),
            FontRef::new(FontFamily::Sans, FontWeight::Regular),
            FontRef::new(FontFamily::Sans, FontWeight::Bold),
            FontRef::new(FontFamily::Serif, FontWeight::Regular),
            FontRef::new(FontFamily::Serif, FontWeight::Bold),
        ]
    }
}

/// Width measurement service injected into the layout pass.
///
/// Treated as infallible: every string has a width, and an empty string has
/// width zero.
pub trait TextMetrics {
    /// Rendered width of `text` at `size` points in the given face.
    fn text_width(&self, font: FontRef, size: f32, text: &str) -> f32;
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn text_width(&self, font: FontRef, size: f32, text: &str) -> f32 {
        (**self).text_width(font, size, text)
    }
}

/// Metrics for the PDF base-14 faces, derived from their AFM width tables.
///
/// Widths are summed per character; characters outside the printable ASCII
/// range fall back to a per-font default width, which keeps layout sane for
/// the occasional non-ASCII identifier without carrying full WinAnsi tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl StandardFontMetrics {
    /// Create the standard metrics service.
    pub fn new() -> Self {
        Self
    }
}

impl TextMetrics for StandardFontMetrics {
    fn text_width(&self, font: FontRef, size: f32, text: &str) -> f32 {
        let em_units: u32 = text.chars().map(|c| u32::from(afm::glyph_width(font, c))).sum();
        em_units as f32 * size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_is_fixed_pitch() {
        let m = StandardFontMetrics::new();
        let font = FontRef::new(FontFamily::Mono, FontWeight::Regular);
        let w_i = m.text_width(font, 10.0, "iiii");
        let w_m = m.text_width(font, 10.0, "mmmm");
        assert_eq!(w_i, w_m);
        assert_eq!(w_i, 4.0 * 600.0 * 10.0 / 1000.0);
    }

    #[test]
    fn test_helvetica_is_proportional() {
        let m = StandardFontMetrics::new();
        let font = FontRef::new(FontFamily::Sans, FontWeight::Regular);
        assert!(m.text_width(font, 10.0, "i") < m.text_width(font, 10.0, "m"));
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        let m = StandardFontMetrics::new();
        for font in FontRef::all() {
            assert_eq!(m.text_width(font, 12.0, ""), 0.0);
        }
    }

    #[test]
    fn test_width_scales_with_size() {
        let m = StandardFontMetrics::new();
        let font = FontRef::new(FontFamily::Serif, FontWeight::Bold);
        let at_9 = m.text_width(font, 9.0, "width");
        let at_18 = m.text_width(font, 18.0, "width");
        assert!((at_18 - 2.0 * at_9).abs() < 1e-4);
    }

    #[test]
    fn test_base_names() {
        assert_eq!(
            FontRef::new(FontFamily::Sans, FontWeight::Bold).base_name(),
            "Helvetica-Bold"
        );
        assert_eq!(
            FontRef::new(FontFamily::Serif, FontWeight::Regular).base_name(),
            "Times-Roman"
        );
    }
}
