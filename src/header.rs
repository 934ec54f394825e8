//! The three-column institutional header printed on every official document.
//!
//! Left: country, motto, ministry and delegations. Center: logo placeholder,
//! school name and contacts. Right: generation metadata. Every line sits in
//! a fixed slot, so missing data leaves a blank slot instead of moving the
//! rest of the page.

use crate::i18n::Language;
use crate::model::HeaderData;
use crate::text::{Painter, TextOptions};
use chrono::NaiveDate;
use educafric_render_core::{FontFace, RenderError, TextAlign};
use educafric_types::{Color, Rect};
use itertools::Itertools;

pub const DEFAULT_SITE_URL: &str = "www.educafric.com";

const MARGIN: f32 = 30.0;
const LINE_HEIGHT: f32 = 10.0;
const LOGO_SIZE: f32 = 40.0;
const LEFT_SLOTS: usize = 6;
/// Space kept between the separator line and the first content line.
const CONTENT_GAP: f32 = 15.0;
const FALLBACK_OFFSET: f32 = 100.0;

const SEPARATOR_COLOR: Color = Color::gray(90);

/// Metadata shown in the right-hand header column.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMeta {
    pub generated_on: NaiveDate,
    pub version: String,
    pub site_url: String,
    pub language: Language,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            generated_on: chrono::Local::now().date_naive(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            language: Language::Fr,
        }
    }
}

impl DocumentMeta {
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_date(mut self, generated_on: NaiveDate) -> Self {
        self.generated_on = generated_on;
        self
    }

    pub fn formatted_date(&self) -> String {
        self.generated_on.format("%d/%m/%Y").to_string()
    }
}

/// Draws the header and returns the baseline below which content may start.
///
/// Missing header data falls back to the defaults of [`HeaderData`]. If the
/// header cannot be laid out, the error is logged and `page_height - 100` is
/// returned so the caller can carry on.
pub fn render_header(
    painter: &mut Painter<'_>,
    bold: FontFace,
    normal: FontFace,
    page_width: f32,
    page_height: f32,
    header: Option<&HeaderData>,
    meta: &DocumentMeta,
) -> f32 {
    let header = header.map(HeaderData::with_defaults).unwrap_or_default();
    match draw_columns(painter, bold, normal, page_width, page_height, &header, meta) {
        Ok(next_y) => next_y,
        Err(e) => {
            let height =
                if page_height.is_finite() { page_height } else { painter.page_size().height };
            log::error!(
                target: "educafric::header",
                "Header rendering failed, continuing below the default offset: {}",
                e
            );
            height - FALLBACK_OFFSET
        }
    }
}

fn draw_columns(
    painter: &mut Painter<'_>,
    bold: FontFace,
    normal: FontFace,
    page_width: f32,
    page_height: f32,
    header: &HeaderData,
    meta: &DocumentMeta,
) -> Result<f32, RenderError> {
    if !page_width.is_finite()
        || !page_height.is_finite()
        || page_width <= 2.0 * MARGIN
        || page_height <= 0.0
    {
        return Err(RenderError::InvalidCoordinate { x: page_width, y: page_height });
    }

    let labels = meta.language.labels();
    let column_width = (page_width - 2.0 * MARGIN) / 3.0;
    let top = page_height - MARGIN;
    let slot = |index: usize| top - LINE_HEIGHT * (index as f32 + 1.0);

    // Left column
    let left_x = MARGIN;
    let left = TextOptions::new(normal, 7.0).centered().with_max_width(column_width);
    let left_bold = TextOptions::new(bold, 7.5).centered().with_max_width(column_width);
    let left_lines = [
        (labels.country.to_string(), &left_bold),
        (labels.motto.to_string(), &left),
        ("*****".to_string(), &left),
        (meta.language.ministry(header.education_level).to_string(), &left_bold),
        (format!("{} {}", labels.regional_delegation, header.region), &left),
        (format!("{} {}", labels.departmental_delegation, header.department), &left),
    ];
    for (index, (text, options)) in left_lines.iter().enumerate() {
        painter.draw_text(text.as_str(), left_x, slot(index), options);
    }

    // Center column
    let center_x = MARGIN + column_width;
    let logo_x = center_x + (column_width - LOGO_SIZE) / 2.0;
    let logo = Rect::from_top(logo_x, top, LOGO_SIZE, LOGO_SIZE);
    painter.stroke_rect(logo, SEPARATOR_COLOR, 0.75)?;
    if header.logo_url.is_some() {
        log::debug!(
            target: "educafric::header",
            "Logo references are not fetched, drawing the placeholder"
        );
    }
    painter.draw_in_cell(labels.logo, logo, &TextOptions::new(normal, 6.0).centered());

    let name_y = logo.y - LINE_HEIGHT - 2.0;
    let center = TextOptions::new(normal, 7.0).centered().with_max_width(column_width);
    let name = TextOptions::new(bold, 9.0).centered().with_max_width(column_width);
    painter.draw_text(&header.school_name, center_x, name_y, &name);

    let phone_line = [
        (!header.phone.is_empty()).then(|| format!("{}: {}", labels.phone, header.phone)),
        (!header.postal_box.is_empty())
            .then(|| format!("{} {}", labels.postal_box, header.postal_box)),
    ]
    .into_iter()
    .flatten()
    .join(" | ");
    painter.draw_text(phone_line, center_x, name_y - LINE_HEIGHT, &center);
    painter.draw_text(&header.email, center_x, name_y - 2.0 * LINE_HEIGHT, &center);
    let center_bottom = name_y - 2.0 * LINE_HEIGHT;

    // Right column
    let right_x = MARGIN + 2.0 * column_width;
    let right = TextOptions::new(normal, 7.0)
        .with_align(TextAlign::Right)
        .with_max_width(column_width);
    let generated = format!("{} {}", labels.generated_on, meta.formatted_date());
    painter.draw_text(generated, right_x, slot(0), &right);
    painter.draw_text(format!("{} {}", labels.version, meta.version), right_x, slot(1), &right);
    painter.draw_text(&meta.site_url, right_x, slot(2), &right);

    let lowest = slot(LEFT_SLOTS - 1).min(center_bottom);
    let separator_y = lowest - 6.0;
    painter.hline(MARGIN, page_width - MARGIN, separator_y, SEPARATOR_COLOR, 1.0)?;

    log::debug!(
        target: "educafric::header",
        "Header drawn for '{}', content starts at {:.1}",
        header.school_name,
        separator_y - CONTENT_GAP
    );
    Ok(separator_y - CONTENT_GAP)
}
