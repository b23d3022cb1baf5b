//! PDF serialization of finished pages.
//!
//! Pages arrive fully laid out; this module only translates them into PDF
//! objects: a catalog, a page tree, Type1 base-font resources for the faces
//! actually used, and one Flate-compressed content stream per page. The
//! output carries no timestamps or random identifiers, so identical pages
//! serialize to identical bytes.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::color::Theme;
use crate::error::{Error, Result};
use crate::metrics::FontRef;
use crate::model::Page;

/// Resource names for the six registrable faces, in [`FontRef::all`] order.
const FONT_NAMES: [&str; 6] = ["F0", "F1", "F2", "F3", "F4", "F5"];

/// Serialize pages to a complete PDF byte stream.
///
/// The theme supplies the background fill for pages that request one.
pub fn serialize(pages: &[Page], theme: Theme) -> Result<Vec<u8>> {
    let mut pdf = Pdf::new();
    let mut next_id = 1;
    let mut alloc = move || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let page_tree_id = alloc();

    // Fixed registration order keeps output deterministic.
    let used = used_fonts(pages);
    let font_ids: Vec<(FontRef, &str, Ref)> = FontRef::all()
        .into_iter()
        .zip(FONT_NAMES)
        .filter(|(font, _)| used.contains(font))
        .map(|(font, name)| (font, name, alloc()))
        .collect();

    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);

    for (font, _, id) in &font_ids {
        pdf.type1_font(*id)
            .base_font(Name(font.base_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (i, page) in pages.iter().enumerate() {
        {
            let mut obj = pdf.page(page_ids[i]);
            obj.media_box(Rect::new(0.0, 0.0, page.width, page.height))
                .parent(page_tree_id)
                .contents(content_ids[i]);
            let mut resources = obj.resources();
            let mut fonts = resources.fonts();
            for (_, name, id) in &font_ids {
                fonts.pair(Name(name.as_bytes()), *id);
            }
        }

        let raw = page_content(page, theme, &font_ids);
        let compressed = compress(&raw)?;
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    Ok(pdf.finish())
}

fn used_fonts(pages: &[Page]) -> Vec<FontRef> {
    let mut used = Vec::new();
    for page in pages {
        for run in &page.runs {
            if !used.contains(&run.font) {
                used.push(run.font);
            }
        }
    }
    used
}

fn page_content(page: &Page, theme: Theme, font_ids: &[(FontRef, &str, Ref)]) -> Vec<u8> {
    let mut content = Content::new();

    if page.fill_background {
        if let Some(bg) = theme.background() {
            let (r, g, b) = bg.to_unit();
            content.set_fill_rgb(r, g, b);
            content.rect(0.0, 0.0, page.width, page.height);
            content.fill_nonzero();
        }
    }

    for run in &page.runs {
        if run.text.is_empty() {
            continue;
        }
        let Some(name) = font_ids
            .iter()
            .find(|(font, _, _)| *font == run.font)
            .map(|(_, name, _)| *name)
        else {
            continue;
        };

        // Placed y is top-down to the top of the line box; the PDF baseline
        // sits one font size below it, measured bottom-up.
        let baseline = page.height - run.y - run.size;
        let (r, g, b) = run.color.to_unit();
        content
            .begin_text()
            .set_font(Name(name.as_bytes()), run.size)
            .set_fill_rgb(r, g, b)
            .next_line(run.x, baseline)
            .show(Str(&encode_latin1(&run.text)))
            .end_text();
    }

    content.finish()
}

/// Lossy latin-1 encoding for WinAnsi text operands; anything outside the
/// 8-bit range becomes `?`.
fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| Error::Serialize(e.to_string()))?;
    encoder.finish().map_err(|e| Error::Serialize(e.to_string()))
}
