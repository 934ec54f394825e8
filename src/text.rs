//! Coordinate-safe text and shape primitives.
//!
//! Names, grades and remarks come straight from user input. [`Painter`]
//! therefore accepts any text-like value and never fails a document because
//! of a single bad string: problems are logged and the run is skipped.

use educafric_render_core::{Canvas, FontFace, RenderError, TextAlign};
use educafric_types::{Color, Point, Rect, Size};
use std::borrow::Cow;

/// Upper bound on the number of characters drawn by a single call.
pub const MAX_TEXT_CHARS: usize = 500;

const ELLIPSIS: &str = "...";

/// Anything that can be printed: text, a number, or nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub enum TextValue {
    Text(String),
    Number(f64),
    Empty,
}

impl TextValue {
    fn into_text(self) -> String {
        match self {
            TextValue::Text(s) => s,
            TextValue::Number(n) => format_number(n),
            TextValue::Empty => String::new(),
        }
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        TextValue::Text(value.to_string())
    }
}

impl From<String> for TextValue {
    fn from(value: String) -> Self {
        TextValue::Text(value)
    }
}

impl From<&String> for TextValue {
    fn from(value: &String) -> Self {
        TextValue::Text(value.clone())
    }
}

macro_rules! number_text_value {
    ($($t:ty),*) => {
        $(impl From<$t> for TextValue {
            fn from(value: $t) -> Self {
                TextValue::Number(value as f64)
            }
        })*
    };
}

number_text_value!(f64, f32, i32, i64, u32, u64, usize);

impl<T: Into<TextValue>> From<Option<T>> for TextValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(TextValue::Empty)
    }
}

/// Prints whole numbers without decimals and others with at most two.
/// Non-finite values print as nothing.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    pub font: FontFace,
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    /// Width of the box the text is laid out in. Longer text is clipped with
    /// an ellipsis; center and right alignment are relative to this box.
    pub max_width: Option<f32>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            font: FontFace::Regular,
            size: 10.0,
            color: Color::BLACK,
            align: TextAlign::Left,
            max_width: None,
        }
    }
}

impl TextOptions {
    pub fn new(font: FontFace, size: f32) -> Self {
        Self { font, size, ..Default::default() }
    }

    pub fn regular(size: f32) -> Self {
        Self::new(FontFace::Regular, size)
    }

    pub fn bold(size: f32) -> Self {
        Self::new(FontFace::Bold, size)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn centered(self) -> Self {
        self.with_align(TextAlign::Center)
    }

    pub fn width_of(&self, text: &str) -> f32 {
        self.font.text_width(text, self.size)
    }
}

/// Drawing front-end over a page [`Canvas`].
pub struct Painter<'a> {
    canvas: &'a mut dyn Canvas,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut dyn Canvas) -> Self {
        Self { canvas }
    }

    pub fn page_size(&self) -> Size {
        self.canvas.page_size()
    }

    /// Draws a single line of text with its baseline at `y`.
    ///
    /// Without `max_width`, `x` is the left edge, center or right edge of the
    /// run depending on the alignment. Returns whether anything was drawn.
    pub fn draw_text(
        &mut self,
        value: impl Into<TextValue>,
        x: f32,
        y: f32,
        options: &TextOptions,
    ) -> bool {
        let text = sanitize(value.into().into_text());
        if text.is_empty() {
            return false;
        }
        if !x.is_finite() || !y.is_finite() {
            log::warn!(
                target: "educafric::text",
                "Skipping '{}' at non-finite position ({}, {})",
                text,
                x,
                y
            );
            return false;
        }
        if !options.size.is_finite() || options.size <= 0.0 {
            log::warn!(
                target: "educafric::text",
                "Skipping '{}' with invalid font size {}",
                text,
                options.size
            );
            return false;
        }

        let max_width = options.max_width.filter(|w| w.is_finite() && *w > 0.0);
        let text = match max_width {
            Some(width) => clip_to_width(&text, options.font, options.size, width),
            None => Cow::Borrowed(text.as_str()),
        };
        let width = options.width_of(&text);
        let x = match (options.align, max_width) {
            (TextAlign::Left, _) => x,
            (TextAlign::Center, Some(box_width)) => x + (box_width - width) / 2.0,
            (TextAlign::Center, None) => x - width / 2.0,
            (TextAlign::Right, Some(box_width)) => x + box_width - width,
            (TextAlign::Right, None) => x - width,
        };

        let origin = self.page_size().clamp_point(Point::new(x, y));
        match self.canvas.draw_text(&text, origin, options.font, options.size, options.color) {
            Ok(()) => true,
            Err(e) => {
                log::warn!(target: "educafric::text", "Failed to draw '{}': {}", text, e);
                false
            }
        }
    }

    /// Draws text inside a table cell: vertically centered, with a small
    /// horizontal padding and clipped to the cell width.
    pub fn draw_in_cell(
        &mut self,
        value: impl Into<TextValue>,
        cell: Rect,
        options: &TextOptions,
    ) -> bool {
        const PADDING: f32 = 3.0;
        let inner = (cell.width - 2.0 * PADDING).max(1.0);
        let baseline = cell.y + (cell.height - options.font.cap_height(options.size)) / 2.0;
        self.draw_text(value, cell.x + PADDING, baseline, &options.with_max_width(inner))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.canvas.fill_rect(rect, color)
    }

    pub fn stroke_rect(
        &mut self,
        rect: Rect,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        self.canvas.stroke_rect(rect, color, line_width)
    }

    pub fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        self.canvas.draw_line(from, to, color, line_width)
    }

    pub fn hline(
        &mut self,
        x1: f32,
        x2: f32,
        y: f32,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        self.line(Point::new(x1, y), Point::new(x2, y), color, line_width)
    }
}

/// Flattens control characters to spaces, trims and bounds the length.
fn sanitize(text: String) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .take(MAX_TEXT_CHARS)
        .collect();
    flat.trim().to_string()
}

fn clip_to_width(text: &str, font: FontFace, size: f32, max_width: f32) -> Cow<'_, str> {
    if font.text_width(text, size) <= max_width {
        return Cow::Borrowed(text);
    }
    let budget = max_width - font.text_width(ELLIPSIS, size);
    let mut width = 0.0;
    let mut clipped = String::new();
    for c in text.chars() {
        let advance = font.char_width(c) as f32 * size / 1000.0;
        if width + advance > budget {
            break;
        }
        width += advance;
        clipped.push(c);
    }
    let mut clipped = clipped.trim_end().to_string();
    clipped.push_str(ELLIPSIS);
    Cow::Owned(clipped)
}
