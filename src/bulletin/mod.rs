//! Single-page report card ("bulletin") generation.

pub mod demo;

use crate::config::{BulletinConfig, GradingScale, ValidationPolicy};
use crate::document::{create_document, draw_page};
use crate::error::DocumentError;
use crate::header::{render_header, DocumentMeta};
use crate::i18n::{Labels, Language};
use crate::model::{weighted_mean, BulletinData, StudentIdentity, SubjectGrade};
use crate::text::{format_number, Painter, TextOptions};
use crate::validation::{validate, ValidationContext};
use chrono::Datelike;
use educafric_render_core::{FontFace, RenderError, TextAlign};
use educafric_types::{Color, Orientation, PageFormat, Rect, Size};
use itertools::Itertools;
use rand::Rng;
use serde_json::Value;
use std::borrow::Cow;

const MARGIN: f32 = 40.0;
const ROW_HEIGHT: f32 = 14.0;
const HEADER_ROW_HEIGHT: f32 = 16.0;
/// Height kept free above the bottom margin for the summary, the signature
/// blocks and the verification footer.
const RESERVED_BOTTOM: f32 = 200.0;
const TERM_COLUMNS: usize = 3;
const SIGNATURE_WIDTH: f32 = 200.0;
const SIGNATURE_HEIGHT: f32 = 55.0;

const BORDER: Color = Color::gray(160);
const HEADER_FILL: Color = Color::rgb(226, 232, 240);
const TOTALS_FILL: Color = Color::gray(242);
const TITLE_COLOR: Color = Color::rgb(30, 58, 138);

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws a verification code of the form `EDU-<year>-<8 alphanumerics>`.
pub fn verification_code(year: i32) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..8)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    format!("EDU-{}-{}", year, suffix)
}

/// Builds bulletins from loosely-typed data bags.
///
/// ```no_run
/// use educafric_docs::{BulletinConfig, BulletinGenerator, ValidationPolicy};
///
/// let generator = BulletinGenerator::new().with_config(BulletinConfig {
///     on_validation_error: ValidationPolicy::Reject,
///     ..Default::default()
/// });
/// let pdf = generator.generate(None).unwrap();
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BulletinGenerator {
    config: BulletinConfig,
    meta: Option<DocumentMeta>,
}

impl BulletinGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: BulletinConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Header metadata. Defaults to today's date and the crate version.
    pub fn with_meta(mut self, meta: DocumentMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_verification_code(mut self, code: impl Into<String>) -> Self {
        self.config.verification_code = Some(code.into());
        self
    }

    pub fn config(&self) -> &BulletinConfig {
        &self.config
    }

    /// Validates `data` and renders it. Absent data renders the demonstration
    /// bulletin; invalid data is handled according to
    /// [`BulletinConfig::on_validation_error`].
    pub fn generate(&self, data: Option<&Value>) -> Result<Vec<u8>, DocumentError> {
        let bulletin = match data {
            None => {
                log::info!(
                    target: "educafric::bulletin",
                    "No bulletin data supplied, rendering demonstration data"
                );
                demo::demo_bulletin()
            }
            Some(value) => {
                let context = ValidationContext::new("bulletin")
                    .with_max_score(self.config.grading.max_score);
                match validate::<BulletinData>(value, context) {
                    Ok(bulletin) => bulletin,
                    Err(e) if self.config.on_validation_error == ValidationPolicy::Defaults => {
                        log::warn!(
                            target: "educafric::bulletin",
                            "{}; rendering demonstration data instead",
                            e
                        );
                        demo::demo_bulletin()
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };
        self.generate_from(&bulletin)
    }

    /// Renders already validated data.
    pub fn generate_from(&self, data: &BulletinData) -> Result<Vec<u8>, DocumentError> {
        let meta = self.meta.clone().unwrap_or_default().with_language(self.config.language);
        let labels = self.config.language.labels();
        let code = self
            .config
            .verification_code
            .clone()
            .unwrap_or_else(|| verification_code(meta.generated_on.year()));

        let (subjects, average): (Cow<'_, [SubjectGrade]>, _) = if self.config.use_supplied_grades {
            (Cow::Borrowed(&data.subjects), data.overall_average())
        } else {
            log::debug!(
                target: "educafric::bulletin",
                "Supplied grades disabled, printing the demonstration table"
            );
            let subjects = demo::demo_subjects();
            let average = weighted_mean(&subjects);
            (Cow::Owned(subjects), average)
        };

        let title = format!("{} - {}", labels.bulletin_title, data.student.full_name());
        let (mut doc, bold, normal) = create_document(&title, &meta)?;
        let size = PageFormat::A4.size(Orientation::Portrait);
        let page = BulletinPage {
            bold,
            normal,
            size,
            labels,
            language: self.config.language,
            grading: &self.config.grading,
        };

        draw_page(&mut doc, size, |painter| {
            let school = data.school.as_ref();
            let y = render_header(painter, bold, normal, size.width, size.height, school, &meta);
            let y = page.title(painter, y, data);
            let y = page.identity(painter, y, &data.student)?;
            let y = page.subject_table(painter, y, &subjects)?;
            page.summary(painter, y, data, average);
            page.signatures(painter)?;
            page.footer(painter, &code, &meta.site_url)?;
            Ok(())
        })?;

        let bytes = doc.save()?;
        log::info!(
            target: "educafric::bulletin",
            "Generated bulletin for '{}' ({} subjects, {} bytes)",
            data.student.full_name(),
            subjects.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Renders a bulletin with the default configuration.
pub fn generate_bulletin(data: Option<&Value>) -> Result<Vec<u8>, DocumentError> {
    BulletinGenerator::new().generate(data)
}

struct Column {
    caption: String,
    width: f32,
    align: TextAlign,
}

struct BulletinPage<'a> {
    bold: FontFace,
    normal: FontFace,
    size: Size,
    labels: &'static Labels,
    language: Language,
    grading: &'a GradingScale,
}

impl BulletinPage<'_> {
    fn content_width(&self) -> f32 {
        self.size.width - 2.0 * MARGIN
    }

    fn score(&self, value: Option<f64>) -> String {
        value.map(|v| self.language.format_score(v)).unwrap_or_else(|| "-".to_string())
    }

    fn out_of(&self, value: Option<f64>) -> String {
        format!("{}/{}", self.score(value), format_number(self.grading.max_score))
    }

    fn title(&self, painter: &mut Painter<'_>, y: f32, data: &BulletinData) -> f32 {
        let center = self.size.width / 2.0;
        let y = y - 4.0;
        painter.draw_text(
            self.labels.bulletin_title,
            center,
            y,
            &TextOptions::new(self.bold, 14.0).centered().with_color(TITLE_COLOR),
        );
        let year = (!data.academic_year.trim().is_empty())
            .then(|| format!("{} {}", self.labels.academic_year, data.academic_year.trim()));
        let subtitle = [Some(data.term.trim().to_string()).filter(|t| !t.is_empty()), year]
            .into_iter()
            .flatten()
            .join(" - ");
        let subtitle_options = TextOptions::new(self.normal, 10.0).centered();
        painter.draw_text(subtitle, center, y - 16.0, &subtitle_options);
        y - 34.0
    }

    fn identity(
        &self,
        painter: &mut Painter<'_>,
        top: f32,
        student: &StudentIdentity,
    ) -> Result<f32, RenderError> {
        const LINE: f32 = 14.0;
        let block = Rect::from_top(MARGIN, top, self.content_width(), 3.0 * LINE + 6.0);
        painter.stroke_rect(block, BORDER, 0.75)?;

        let column_width = self.content_width() / 2.0;
        let columns = [
            [
                (self.labels.student_name, student.full_name()),
                (self.labels.class, student.class_name.clone()),
                (self.labels.matricule, student.student_number.clone()),
            ],
            [
                (self.labels.birth_date, student.birth_date.clone()),
                (self.labels.birth_place, student.birth_place.clone()),
                (self.labels.gender, student.gender.clone()),
            ],
        ];
        for (col, fields) in columns.iter().enumerate() {
            let x = MARGIN + 8.0 + col as f32 * column_width;
            for (row, (label, value)) in fields.iter().enumerate() {
                let baseline = top - 12.0 - row as f32 * LINE;
                let label = format!("{}:", label);
                let label_options = TextOptions::new(self.bold, 9.0);
                painter.draw_text(label.as_str(), x, baseline, &label_options);
                let offset = label_options.width_of(&label) + 4.0;
                let value_width = (column_width - offset - 16.0).max(10.0);
                let value_options = TextOptions::new(self.normal, 9.0).with_max_width(value_width);
                painter.draw_text(value, x + offset, baseline, &value_options);
            }
        }
        Ok(block.y - 12.0)
    }

    fn columns(&self) -> Vec<Column> {
        let width = self.content_width();
        let column = |caption: String, share: f32, align: TextAlign| Column {
            caption,
            width: width * share,
            align,
        };
        let mut columns = vec![column(self.labels.subject.to_string(), 0.22, TextAlign::Left)];
        for term in 1..=TERM_COLUMNS {
            let caption = format!("{}{}", self.labels.term_short, term);
            columns.push(column(caption, 0.06, TextAlign::Center));
        }
        columns.extend([
            column(self.labels.average_short.to_string(), 0.07, TextAlign::Center),
            column(self.labels.coefficient_short.to_string(), 0.06, TextAlign::Center),
            column(self.labels.weighted_short.to_string(), 0.08, TextAlign::Center),
            column(self.labels.remark.to_string(), 0.18, TextAlign::Left),
            column(self.labels.teacher.to_string(), 0.21, TextAlign::Left),
        ]);
        columns
    }

    fn row(
        &self,
        painter: &mut Painter<'_>,
        columns: &[Column],
        top: f32,
        height: f32,
        cells: &[(String, Color)],
        font: FontFace,
        fill: Option<Color>,
    ) -> Result<f32, RenderError> {
        let mut x = MARGIN;
        if let Some(fill) = fill {
            painter.fill_rect(Rect::from_top(MARGIN, top, self.content_width(), height), fill)?;
        }
        for (column, (text, color)) in columns.iter().zip(cells) {
            let cell = Rect::from_top(x, top, column.width, height);
            painter.stroke_rect(cell, BORDER, 0.5)?;
            let options = TextOptions::new(font, 8.0).with_align(column.align).with_color(*color);
            painter.draw_in_cell(text.as_str(), cell, &options);
            x += column.width;
        }
        Ok(top - height)
    }

    fn subject_cells(&self, subject: &SubjectGrade) -> Vec<(String, Color)> {
        let plain = |text: String| (text, Color::BLACK);
        let mut cells = vec![plain(subject.subject_name.clone())];
        for term in 0..TERM_COLUMNS {
            cells.push(plain(self.score(subject.scores.get(term).copied().flatten())));
        }
        let average = subject.average();
        let average_color = average
            .map(|avg| self.grading.color_for(avg, self.grading.max_score))
            .unwrap_or(Color::BLACK);
        cells.push((self.score(average), average_color));
        cells.push(plain(format_number(subject.coefficient)));
        cells.push(plain(self.score(subject.weighted_total())));
        cells.push(plain(subject.remark.clone()));
        cells.push(plain(subject.teacher_name.clone()));
        cells
    }

    fn subject_table(
        &self,
        painter: &mut Painter<'_>,
        top: f32,
        subjects: &[SubjectGrade],
    ) -> Result<f32, RenderError> {
        let columns = self.columns();
        let captions: Vec<(String, Color)> =
            columns.iter().map(|c| (c.caption.clone(), Color::BLACK)).collect();
        let header_fill = Some(HEADER_FILL);
        let mut y =
            self.row(painter, &columns, top, HEADER_ROW_HEIGHT, &captions, self.bold, header_fill)?;

        if subjects.is_empty() {
            let cell = Rect::from_top(MARGIN, y, self.content_width(), ROW_HEIGHT);
            painter.stroke_rect(cell, BORDER, 0.5)?;
            let options = TextOptions::new(self.normal, 8.0).centered();
            painter.draw_in_cell(self.labels.no_grades, cell, &options);
            return Ok(y - ROW_HEIGHT - 16.0);
        }

        let limit = MARGIN + RESERVED_BOTTOM;
        let capacity = ((y - ROW_HEIGHT - limit) / ROW_HEIGHT).floor().max(0.0) as usize;
        if subjects.len() > capacity {
            log::warn!(
                target: "educafric::bulletin",
                "{} of {} subject rows do not fit on the page and were left out",
                subjects.len() - capacity,
                subjects.len()
            );
        }
        let printed = &subjects[..subjects.len().min(capacity)];
        for subject in printed {
            let cells = self.subject_cells(subject);
            y = self.row(painter, &columns, y, ROW_HEIGHT, &cells, self.normal, None)?;
        }

        let total_coefficient: f64 = printed.iter().map(|s| s.coefficient).sum();
        let total_weighted: f64 = printed.iter().filter_map(SubjectGrade::weighted_total).sum();
        let mut totals: Vec<(String, Color)> = vec![(String::new(), Color::BLACK); columns.len()];
        totals[0].0 = self.labels.totals.to_string();
        totals[TERM_COLUMNS + 2].0 = format_number(total_coefficient);
        totals[TERM_COLUMNS + 3].0 = self.language.format_score(total_weighted);
        y = self.row(painter, &columns, y, ROW_HEIGHT, &totals, self.bold, Some(TOTALS_FILL))?;
        Ok(y - 16.0)
    }

    fn summary(
        &self,
        painter: &mut Painter<'_>,
        y: f32,
        data: &BulletinData,
        average: Option<f64>,
    ) {
        let summary = &data.summary;
        let average_color = average
            .map(|avg| self.grading.color_for(avg, self.grading.max_score))
            .unwrap_or(Color::BLACK);
        let right_x = MARGIN + self.content_width() / 2.0;

        painter.draw_text(
            format!("{}: {}", self.labels.general_average, self.out_of(average)),
            MARGIN,
            y,
            &TextOptions::new(self.bold, 11.0).with_color(average_color),
        );
        let rank = match (summary.rank, summary.class_size) {
            (Some(rank), Some(size)) => format!("{}/{}", rank, size),
            (Some(rank), None) => rank.to_string(),
            (None, _) => "-".to_string(),
        };
        painter.draw_text(
            format!("{}: {}", self.labels.rank, rank),
            right_x,
            y,
            &TextOptions::new(self.bold, 11.0),
        );

        let line = TextOptions::new(self.normal, 9.0);
        painter.draw_text(
            format!("{}: {}", self.labels.conduct, self.out_of(summary.conduct)),
            MARGIN,
            y - 16.0,
            &line,
        );
        painter.draw_text(
            format!(
                "{}: {}    {}: {}",
                self.labels.absences, summary.absences, self.labels.lateness, summary.lateness
            ),
            right_x,
            y - 16.0,
            &line,
        );
        painter.draw_text(
            format!("{}: {}", self.labels.observations, summary.observations.trim()),
            MARGIN,
            y - 32.0,
            &line.with_max_width(self.content_width()),
        );
    }

    fn signatures(&self, painter: &mut Painter<'_>) -> Result<(), RenderError> {
        let bottom = MARGIN + 45.0;
        let boxes = [
            (MARGIN, self.labels.class_teacher_signature),
            (self.size.width - MARGIN - SIGNATURE_WIDTH, self.labels.principal_signature),
        ];
        for (x, caption) in boxes {
            let area = Rect::new(x, bottom, SIGNATURE_WIDTH, SIGNATURE_HEIGHT);
            painter.stroke_rect(area, BORDER, 0.75)?;
            painter.draw_text(
                caption,
                x,
                area.top() + 6.0,
                &TextOptions::new(self.bold, 9.0).centered().with_max_width(SIGNATURE_WIDTH),
            );
        }
        Ok(())
    }

    fn footer(
        &self,
        painter: &mut Painter<'_>,
        code: &str,
        site_url: &str,
    ) -> Result<(), RenderError> {
        painter.hline(MARGIN, self.size.width - MARGIN, MARGIN + 22.0, BORDER, 0.5)?;
        painter.draw_text(
            format!("{}: {}", self.labels.verification_code, code),
            MARGIN,
            MARGIN + 8.0,
            &TextOptions::new(self.bold, 8.0),
        );
        painter.draw_text(
            format!("{} {}", self.labels.verify_at, site_url),
            self.size.width - MARGIN,
            MARGIN + 8.0,
            &TextOptions::new(self.normal, 7.0).with_align(TextAlign::Right),
        );
        Ok(())
    }
}
