//! Document lifecycle shared by the generators.

use crate::error::DocumentError;
use crate::header::DocumentMeta;
use crate::text::Painter;
use educafric_render_core::FontFace;
use educafric_render_lopdf::{DocumentInfo, PdfDocument};
use educafric_types::Size;

pub const AUTHOR: &str = "Educafric";

/// Creates a document with its information dictionary and both standard
/// faces registered. Returns the bold and regular faces in that order.
pub(crate) fn create_document(
    title: &str,
    meta: &DocumentMeta,
) -> Result<(PdfDocument, FontFace, FontFace), DocumentError> {
    let info = DocumentInfo {
        title: title.to_string(),
        author: AUTHOR.to_string(),
        producer: format!("educafric-docs {}", env!("CARGO_PKG_VERSION")),
        creation_date: Some(meta.generated_on.format("D:%Y%m%d000000").to_string()),
    };
    let mut doc = PdfDocument::create(&info)?;
    let bold = doc.embed_font(FontFace::Bold)?;
    let normal = doc.embed_font(FontFace::Regular)?;
    Ok((doc, bold, normal))
}

/// Adds a page, lets `draw` fill it, then writes it out.
pub(crate) fn draw_page<T>(
    doc: &mut PdfDocument,
    size: Size,
    draw: impl FnOnce(&mut Painter<'_>) -> Result<T, DocumentError>,
) -> Result<T, DocumentError> {
    let mut canvas = doc.add_page(size);
    let result = {
        let mut painter = Painter::new(&mut canvas);
        draw(&mut painter)?
    };
    doc.finish_page(canvas)?;
    Ok(result)
}
