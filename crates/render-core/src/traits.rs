use crate::error::RenderError;
use crate::fonts::FontFace;
use educafric_types::{Color, Point, Rect, Size};

/// A single page surface, abstracting the PDF drawing primitives.
///
/// Coordinates are PDF user space: points, origin at the bottom-left corner.
/// Implementations reject non-finite coordinates with
/// [`RenderError::InvalidCoordinate`] instead of emitting a corrupt stream.
pub trait Canvas {
    fn page_size(&self) -> Size;

    /// Draws `text` with its baseline starting at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: FontFace,
        size: f32,
        color: Color,
    ) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) -> Result<(), RenderError>;

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError>;
}
