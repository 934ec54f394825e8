use crate::canvas::LopdfCanvas;
use crate::writer::StreamingPdfWriter;
use educafric_render_core::{FontFace, RenderError};
use educafric_types::Size;
use lopdf::{dictionary, Dictionary, Object, ObjectId, StringFormat};
use std::io::Cursor;

/// Entries of the PDF document information dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub producer: String,
    /// Already formatted as a PDF date string (`D:YYYYMMDDHHmmSS`).
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    fn to_dictionary(&self) -> Dictionary {
        let text = |s: &str| {
            Object::String(educafric_render_core::utils::to_win_ansi(s), StringFormat::Literal)
        };
        let mut dict = dictionary! {
            "Title" => text(&self.title),
            "Author" => text(&self.author),
            "Producer" => text(&self.producer),
        };
        if let Some(date) = &self.creation_date {
            dict.set("CreationDate", text(date));
        }
        dict
    }
}

/// An in-memory PDF under construction.
///
/// The lifecycle mirrors the generation steps: create the document, register
/// the font faces, then add pages one at a time and save.
pub struct PdfDocument {
    writer: Option<StreamingPdfWriter<Cursor<Vec<u8>>>>,
    fonts: Vec<FontFace>,
    page_ids: Vec<ObjectId>,
}

impl PdfDocument {
    pub fn create(info: &DocumentInfo) -> Result<Self, RenderError> {
        let mut writer = StreamingPdfWriter::new(Cursor::new(Vec::new()))?;
        writer.set_info(info.to_dictionary());
        Ok(Self {
            writer: Some(writer),
            fonts: Vec::new(),
            page_ids: Vec::new(),
        })
    }

    /// Registers one of the standard faces in the shared resource dictionary.
    pub fn embed_font(&mut self, face: FontFace) -> Result<FontFace, RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::DocumentFinished);
        }
        if !self.fonts.contains(&face) {
            log::debug!(
                "Registering font '{}' as /{}",
                face.postscript_name(),
                face.resource_name()
            );
            self.fonts.push(face);
        }
        Ok(face)
    }

    /// Starts a new page. Only fonts embedded so far can be used on it.
    pub fn add_page(&self, size: Size) -> LopdfCanvas {
        LopdfCanvas::new(size, self.fonts.clone())
    }

    /// Writes the page's content stream and page object.
    pub fn finish_page(&mut self, canvas: LopdfCanvas) -> Result<ObjectId, RenderError> {
        let writer = self.writer.as_mut().ok_or(RenderError::DocumentFinished)?;
        let size = educafric_render_core::Canvas::page_size(&canvas);
        let content_id = writer.write_content_stream(canvas.into_content())?;

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![
                Object::Real(0.0),
                Object::Real(0.0),
                size.width.into(),
                size.height.into(),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => writer.resources_id,
        };
        let page_id = writer.write_object(page_dict.into())?;
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Finalizes the document and returns its bytes.
    pub fn save(mut self) -> Result<Vec<u8>, RenderError> {
        let mut writer = self.writer.take().ok_or(RenderError::DocumentFinished)?;
        if self.page_ids.is_empty() {
            return Err(RenderError::DocumentNotStarted);
        }

        let mut font_dict = Dictionary::new();
        for face in &self.fonts {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(face.resource_name().as_bytes(), Object::Dictionary(single_font_dict));
        }
        writer.set_font_resources(font_dict);
        writer.set_page_ids(std::mem::take(&mut self.page_ids));

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}
