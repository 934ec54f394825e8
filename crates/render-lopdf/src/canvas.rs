use educafric_render_core::utils::to_win_ansi;
use educafric_render_core::{Canvas, FontFace, RenderError};
use educafric_types::{Color, Point, Rect, Size};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Tracks the graphics state already emitted so redundant operators are skipped.
#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    font: Option<(FontFace, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// A page being drawn: accumulates content-stream operations until the page
/// is handed back to [`PdfDocument::finish_page`](crate::PdfDocument::finish_page).
pub struct LopdfCanvas {
    size: Size,
    content: Content,
    state: LopdfPageRenderState,
    fonts: Vec<FontFace>,
}

impl LopdfCanvas {
    pub(crate) fn new(size: Size, fonts: Vec<FontFace>) -> Self {
        Self {
            size,
            content: Content { operations: vec![] },
            state: Default::default(),
            fonts,
        }
    }

    pub(crate) fn into_content(self) -> Content {
        self.content
    }

    /// Number of operators recorded so far.
    pub fn operation_count(&self) -> usize {
        self.content.operations.len()
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, font: FontFace, size: f32) {
        if self.state.font != Some((font, size)) {
            let name = Object::Name(font.resource_name().as_bytes().to_vec());
            self.push("Tf", vec![name, size.into()]);
            self.state.font = Some((font, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, line_width: f32) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != Some(line_width) {
            self.push("w", vec![line_width.into()]);
            self.state.line_width = Some(line_width);
        }
    }

    fn check_point(point: Point) -> Result<(), RenderError> {
        if point.is_finite() {
            Ok(())
        } else {
            Err(RenderError::InvalidCoordinate { x: point.x, y: point.y })
        }
    }

    fn check_rect(rect: &Rect) -> Result<(), RenderError> {
        if rect.is_finite() {
            Ok(())
        } else {
            Err(RenderError::InvalidCoordinate { x: rect.x, y: rect.y })
        }
    }

    fn check_line_width(line_width: f32) -> Result<(), RenderError> {
        if line_width.is_finite() && line_width >= 0.0 {
            Ok(())
        } else {
            Err(RenderError::Other(format!("Invalid line width: {}", line_width)))
        }
    }
}

impl Canvas for LopdfCanvas {
    fn page_size(&self) -> Size {
        self.size
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: FontFace,
        size: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        Self::check_point(origin)?;
        if !size.is_finite() || size <= 0.0 {
            return Err(RenderError::InvalidFontSize(size));
        }
        if !self.fonts.contains(&font) {
            return Err(RenderError::FontNotRegistered(font.postscript_name()));
        }
        if text.is_empty() {
            return Ok(());
        }

        self.push("BT", vec![]);
        self.set_font(font, size);
        self.set_fill_color(color);
        self.push("Td", vec![origin.x.into(), origin.y.into()]);
        self.push("Tj", vec![Object::String(to_win_ansi(text), StringFormat::Literal)]);
        self.push("ET", vec![]);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        Self::check_rect(&rect)?;
        self.set_fill_color(color);
        self.push("re", vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()]);
        self.push("f", vec![]);
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        rect: Rect,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        Self::check_rect(&rect)?;
        Self::check_line_width(line_width)?;
        self.set_stroke(color, line_width);
        self.push("re", vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()]);
        self.push("S", vec![]);
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        Self::check_point(from)?;
        Self::check_point(to)?;
        Self::check_line_width(line_width)?;
        self.set_stroke(color, line_width);
        self.push("m", vec![from.x.into(), from.y.into()]);
        self.push("l", vec![to.x.into(), to.y.into()]);
        self.push("S", vec![]);
        Ok(())
    }
}
