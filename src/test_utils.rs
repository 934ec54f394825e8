#![cfg(test)]

use educafric_render_core::{Canvas, FontFace, RenderError};
use educafric_types::{Color, Point, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub origin: Point,
    pub font: FontFace,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Fill(Rect, Color),
    Stroke(Rect, Color),
    Line(Point, Point),
}

/// A canvas that records every call instead of producing PDF operators.
pub struct RecordingCanvas {
    pub size: Size,
    pub texts: Vec<DrawnText>,
    pub shapes: Vec<Shape>,
    /// When set, every drawing call fails.
    pub fail: bool,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            texts: Vec::new(),
            shapes: Vec::new(),
            fail: false,
        }
    }

    pub fn failing(width: f32, height: f32) -> Self {
        Self { fail: true, ..Self::new(width, height) }
    }

    pub fn find_text(&self, content: &str) -> Option<&DrawnText> {
        self.texts.iter().find(|t| t.text.contains(content))
    }

    pub fn lowest_text_y(&self) -> Option<f32> {
        self.texts.iter().map(|t| t.origin.y).reduce(f32::min)
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Line(from, to) => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    fn check(&self) -> Result<(), RenderError> {
        if self.fail {
            Err(RenderError::Other("recording canvas set to fail".into()))
        } else {
            Ok(())
        }
    }
}

impl Canvas for RecordingCanvas {
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
        self.check()?;
        self.texts.push(DrawnText { text: text.to_string(), origin, font, size, color });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.check()?;
        self.shapes.push(Shape::Fill(rect, color));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, _: f32) -> Result<(), RenderError> {
        self.check()?;
        self.shapes.push(Shape::Stroke(rect, color));
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, _: Color, _: f32) -> Result<(), RenderError> {
        self.check()?;
        self.shapes.push(Shape::Line(from, to));
        Ok(())
    }
}
