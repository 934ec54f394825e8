#![allow(dead_code)]

use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

/// Decodes a WinAnsi string operand. Latin-1 maps directly; the typographic
/// quotes used in French labels are mapped back as well.
fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x85 => '\u{2026}',
            0x91 => '\u{2018}',
            0x92 => '\u{2019}',
            0x93 => '\u{201C}',
            0x94 => '\u{201D}',
            0x96 => '\u{2013}',
            0x97 => '\u{2014}',
            b => b as char,
        })
        .collect()
}

/// Text runs of one page, in drawing order.
pub fn page_text_runs(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_number) else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(decode_win_ansi(bytes)),
            _ => None,
        })
        .collect()
}

/// Extract all text content from a PDF document, one run per line
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page_number in 1..=doc.get_pages().len() as u32 {
        for run in page_text_runs(doc, page_number) {
            text.push_str(&run);
            text.push('\n');
        }
    }
    text
}

/// BaseFont names of every font dictionary in the file
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .flat_map(|dict| {
            // Font dictionaries live inline inside the shared /Font resource dictionary.
            let nested = dict
                .get(b"Font")
                .and_then(Object::as_dict)
                .map(|fonts| fonts.iter().filter_map(|(_, f)| f.as_dict().ok()).collect::<Vec<_>>())
                .unwrap_or_default();
            nested.into_iter().chain(std::iter::once(dict))
        })
        .filter(|dict| {
            dict.get(b"Type").and_then(Object::as_name).map(|n| n == b"Font").unwrap_or(false)
        })
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .collect();
    fonts.sort();
    fonts.dedup();
    fonts
}

/// MediaBox width and height of a page
pub fn get_page_dimensions(doc: &LopdfDocument, page_number: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_number)?;
    let media_box = doc.get_dictionary(page_id).ok()?.get(b"MediaBox").ok()?.as_array().ok()?;
    let value = |i: usize| media_box.get(i).and_then(|v| v.as_float().ok());
    Some((value(2)? - value(0)?, value(3)? - value(1)?))
}

/// Reads one entry of the document information dictionary
pub fn info_entry(doc: &LopdfDocument, key: &str) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    match info.get(key.as_bytes()).ok()? {
        Object::String(bytes, _) => Some(decode_win_ansi(bytes)),
        _ => None,
    }
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
