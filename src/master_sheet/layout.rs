use super::{ClassStatistics, MasterSheetOptions, Palette};
use crate::config::{GradingScale, OverflowPolicy};
use crate::error::DocumentError;
use crate::header::{render_header, DocumentMeta};
use crate::i18n::Labels;
use crate::model::{MasterSheetData, StudentMasterData};
use crate::text::{format_number, Painter, TextOptions};
use educafric_render_core::{FontFace, RenderError, TextAlign};
use educafric_types::{Color, Rect, Size};
use itertools::Itertools;

const MARGIN: f32 = 30.0;
const HEADER_ROW_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 14.0;
const FOOTER_SPACE: f32 = 10.0;
const STATISTICS_HEIGHT: f32 = 56.0;

const NUMBER_WIDTH: f32 = 22.0;
const MATRICULE_WIDTH: f32 = 60.0;
const NAME_WIDTH: f32 = 120.0;
const NAME_MIN_WIDTH: f32 = 70.0;
const AVERAGE_WIDTH: f32 = 40.0;
const RANK_WIDTH: f32 = 32.0;
const ABSENCES_WIDTH: f32 = 28.0;
const SUBJECT_MIN_WIDTH: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum ColumnKind {
    Number,
    Matricule,
    Name,
    Subject(usize),
    Average,
    Rank,
    Absences,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SheetColumn {
    pub kind: ColumnKind,
    pub width: f32,
}

/// Splits the content width between the fixed columns and the subjects.
///
/// The name column gives up space first (down to its minimum), then every
/// subject gets an equal share of at least [`SUBJECT_MIN_WIDTH`].
pub(super) fn build_columns(
    subject_count: usize,
    content_width: f32,
    options: &MasterSheetOptions,
) -> Vec<SheetColumn> {
    let mut fixed = NUMBER_WIDTH + MATRICULE_WIDTH + AVERAGE_WIDTH;
    if options.show_rankings {
        fixed += RANK_WIDTH;
    }
    if options.include_absences {
        fixed += ABSENCES_WIDTH;
    }

    let mut name_width = NAME_WIDTH;
    let subject_width = if subject_count == 0 {
        name_width = (content_width - fixed).max(NAME_WIDTH);
        0.0
    } else {
        let available = content_width - fixed - name_width;
        let deficit = SUBJECT_MIN_WIDTH * subject_count as f32 - available;
        if deficit > 0.0 {
            name_width = (name_width - deficit).max(NAME_MIN_WIDTH);
        }
        ((content_width - fixed - name_width) / subject_count as f32).max(SUBJECT_MIN_WIDTH)
    };

    let column = |kind, width| SheetColumn { kind, width };
    let mut columns = vec![
        column(ColumnKind::Number, NUMBER_WIDTH),
        column(ColumnKind::Matricule, MATRICULE_WIDTH),
        column(ColumnKind::Name, name_width),
    ];
    columns.extend((0..subject_count).map(|i| column(ColumnKind::Subject(i), subject_width)));
    columns.push(column(ColumnKind::Average, AVERAGE_WIDTH));
    if options.show_rankings {
        columns.push(column(ColumnKind::Rank, RANK_WIDTH));
    }
    if options.include_absences {
        columns.push(column(ColumnKind::Absences, ABSENCES_WIDTH));
    }

    let table_width: f32 = columns.iter().map(|c| c.width).sum();
    if table_width > content_width + 0.5 {
        log::warn!(
            target: "educafric::master_sheet",
            "{} subjects need {:.0}pt but the page has {:.0}pt; the table runs past the margin",
            subject_count,
            table_width,
            content_width
        );
    }
    columns
}

pub(super) struct SheetLayout<'a> {
    data: &'a MasterSheetData,
    options: &'a MasterSheetOptions,
    grading: &'a GradingScale,
    meta: &'a DocumentMeta,
    labels: &'static Labels,
    palette: Palette,
    size: Size,
    bold: FontFace,
    normal: FontFace,
    columns: Vec<SheetColumn>,
    statistics: Option<ClassStatistics>,
}

impl<'a> SheetLayout<'a> {
    pub fn new(
        data: &'a MasterSheetData,
        options: &'a MasterSheetOptions,
        grading: &'a GradingScale,
        meta: &'a DocumentMeta,
        size: Size,
        bold: FontFace,
        normal: FontFace,
    ) -> Self {
        let columns = build_columns(data.subjects.len(), size.width - 2.0 * MARGIN, options);
        Self {
            data,
            options,
            grading,
            meta,
            labels: options.language.labels(),
            palette: options.color_scheme.palette(),
            size,
            bold,
            normal,
            columns,
            statistics: ClassStatistics::compute(&data.students, grading.pass_mark),
        }
    }

    fn table_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    fn score(&self, value: Option<f64>) -> String {
        value
            .map(|v| self.options.language.format_score(v))
            .unwrap_or_else(|| "-".to_string())
    }

    /// Rows that fit between `top` and the bottom reserve.
    fn capacity(&self, top: f32) -> usize {
        let mut bottom = MARGIN + FOOTER_SPACE;
        if self.options.include_statistics {
            bottom += STATISTICS_HEIGHT;
        }
        ((top - bottom) / ROW_HEIGHT).floor().max(0.0) as usize
    }

    /// Draws one page starting at student `first_row` and returns how many
    /// students were placed on it.
    pub fn draw_page(
        &self,
        painter: &mut Painter<'_>,
        page_number: usize,
        first_row: usize,
    ) -> Result<usize, DocumentError> {
        let mut y = if page_number == 1 {
            let y = render_header(
                painter,
                self.bold,
                self.normal,
                self.size.width,
                self.size.height,
                Some(&self.data.school_info),
                self.meta,
            );
            let y = self.title(painter, y, false);
            self.info_block(painter, y)
        } else {
            self.title(painter, self.size.height - MARGIN, true)
        };
        y = self.column_header(painter, y)?;

        let students = self.data.students.get(first_row..).unwrap_or_default();
        let batch = students.len().min(self.capacity(y));
        for (offset, student) in students[..batch].iter().enumerate() {
            y = self.student_row(painter, y, first_row + offset, student)?;
        }

        let last_page =
            batch == students.len() || self.options.overflow != OverflowPolicy::Paginate;
        if last_page && self.options.include_statistics {
            self.statistics_block(painter, y - 14.0)?;
        }
        self.footer(painter, page_number);
        Ok(batch)
    }

    fn title(&self, painter: &mut Painter<'_>, y: f32, continued: bool) -> f32 {
        let title = if continued {
            format!("{} ({})", self.labels.master_sheet_title, self.labels.continued)
        } else {
            self.labels.master_sheet_title.to_string()
        };
        let options = TextOptions::new(self.bold, 13.0).centered().with_color(self.palette.primary);
        painter.draw_text(title, self.size.width / 2.0, y - 4.0, &options);
        y - 22.0
    }

    fn info_block(&self, painter: &mut Painter<'_>, y: f32) -> f32 {
        let data = self.data;
        let labels = self.labels;
        let half = (self.size.width - 2.0 * MARGIN) / 2.0;
        let line = TextOptions::new(self.normal, 9.0).with_max_width(half - 10.0);

        let period = [data.academic_year.trim(), data.term.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .join(" - ");
        let class = format!("{}: {}", labels.class, data.class_name);
        painter.draw_text(class, MARGIN, y, &line.with_color(self.palette.primary));
        painter.draw_text(format!("{}: {}", labels.academic_year, period), MARGIN, y - 12.0, &line);

        let right_x = MARGIN + half;
        let class_size = format!("{}: {}", labels.class_size, data.students.len());
        painter.draw_text(class_size, right_x, y, &line);
        if let Some(teacher) = &data.teacher {
            let name = match &teacher.subject {
                Some(subject) => format!("{} ({})", teacher.name, subject),
                None => teacher.name.clone(),
            };
            painter.draw_text(format!("{}: {}", labels.teacher, name), right_x, y - 12.0, &line);
        }
        y - 26.0
    }

    fn caption(&self, kind: ColumnKind) -> String {
        let labels = self.labels;
        match kind {
            ColumnKind::Number => labels.number_short.to_string(),
            ColumnKind::Matricule => labels.matricule.to_string(),
            ColumnKind::Name => labels.name.to_string(),
            ColumnKind::Subject(i) => self.data.subjects[i].name.clone(),
            ColumnKind::Average => labels.average_short.to_string(),
            ColumnKind::Rank => labels.rank.to_string(),
            ColumnKind::Absences => labels.absences_short.to_string(),
        }
    }

    fn column_header(&self, painter: &mut Painter<'_>, top: f32) -> Result<f32, RenderError> {
        let row = Rect::from_top(MARGIN, top, self.table_width(), HEADER_ROW_HEIGHT);
        painter.fill_rect(row, self.palette.header_fill)?;

        let caption =
            TextOptions::new(self.bold, 7.0).centered().with_color(self.palette.header_text);
        let mut x = MARGIN;
        for column in &self.columns {
            let cell = Rect::from_top(x, top, column.width, HEADER_ROW_HEIGHT);
            painter.stroke_rect(cell, self.palette.border, 0.5)?;
            match column.kind {
                ColumnKind::Subject(i) => {
                    let inner = column.width - 4.0;
                    let name = caption.with_max_width(inner);
                    painter.draw_text(self.caption(column.kind), x + 2.0, top - 10.0, &name);
                    let coefficient = format!(
                        "{} {}",
                        self.labels.coefficient_short,
                        format_number(self.data.subjects[i].coefficient)
                    );
                    let small = TextOptions::new(self.normal, 6.0)
                        .centered()
                        .with_color(self.palette.header_text)
                        .with_max_width(inner);
                    painter.draw_text(coefficient, x + 2.0, top - 19.0, &small);
                }
                kind => {
                    painter.draw_in_cell(self.caption(kind), cell, &caption);
                }
            }
            x += column.width;
        }
        Ok(row.y)
    }

    fn student_row(
        &self,
        painter: &mut Painter<'_>,
        top: f32,
        index: usize,
        student: &StudentMasterData,
    ) -> Result<f32, RenderError> {
        let row = Rect::from_top(MARGIN, top, self.table_width(), ROW_HEIGHT);
        if index % 2 == 1 {
            painter.fill_rect(row, self.palette.alternate_row)?;
        }

        let mut x = MARGIN;
        for column in &self.columns {
            let cell = Rect::from_top(x, top, column.width, ROW_HEIGHT);
            painter.stroke_rect(cell, self.palette.border, 0.5)?;
            let plain = TextOptions::new(self.normal, 7.0).centered();
            let (text, options) = match column.kind {
                ColumnKind::Number => ((index + 1).to_string(), plain),
                ColumnKind::Matricule => (student.matricule.clone(), plain),
                ColumnKind::Name => (student.display_name(), plain.with_align(TextAlign::Left)),
                ColumnKind::Subject(i) => {
                    let subject = &self.data.subjects[i];
                    let score = student.grade(&subject.id);
                    let color = score
                        .map(|s| self.grading.color_for(s, subject.max_score))
                        .unwrap_or(Color::BLACK);
                    (self.score(score), plain.with_color(color))
                }
                ColumnKind::Average => {
                    let color = self.grading.color_for(student.average, self.grading.max_score);
                    (
                        self.score(Some(student.average)),
                        TextOptions::new(self.bold, 7.0).centered().with_color(color),
                    )
                }
                ColumnKind::Rank => {
                    let rank =
                        if student.rank > 0 { student.rank.to_string() } else { "-".to_string() };
                    (rank, plain)
                }
                ColumnKind::Absences => (
                    student.absences.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
                    plain,
                ),
            };
            painter.draw_in_cell(text, cell, &options);
            x += column.width;
        }
        Ok(row.y)
    }

    fn statistics_block(&self, painter: &mut Painter<'_>, y: f32) -> Result<(), RenderError> {
        let labels = self.labels;
        let language = self.options.language;
        painter.draw_text(
            labels.statistics,
            MARGIN,
            y,
            &TextOptions::new(self.bold, 9.0).with_color(self.palette.primary),
        );

        let dash = || "-".to_string();
        let stats = self.statistics;
        let score = |value: fn(&ClassStatistics) -> f64| {
            stats.as_ref().map(value).map(|v| language.format_score(v)).unwrap_or_else(dash)
        };
        let success_rate =
            stats.map(|s| language.format_percent(s.success_rate)).unwrap_or_else(dash);
        let items = [
            (labels.class_average, score(|s| s.class_average)),
            (labels.highest_average, score(|s| s.highest_average)),
            (labels.lowest_average, score(|s| s.lowest_average)),
            (labels.success_rate, success_rate),
        ];
        let slot = (self.size.width - 2.0 * MARGIN) / items.len() as f32;
        let line = TextOptions::new(self.normal, 8.0).with_max_width(slot - 6.0);
        for (i, (label, value)) in items.iter().enumerate() {
            let x = MARGIN + i as f32 * slot;
            painter.draw_text(format!("{}: {}", label, value), x, y - 13.0, &line);
        }

        let legend_y = y - 28.0;
        let legend = TextOptions::new(self.bold, 8.0);
        painter.draw_text(format!("{}:", labels.legend), MARGIN, legend_y, &legend);
        let mut x = MARGIN + legend.width_of(&format!("{}:", labels.legend)) + 8.0;
        let small = TextOptions::new(self.normal, 7.0);
        for band in self.grading.bands_descending() {
            painter.fill_rect(Rect::new(x, legend_y - 1.0, 8.0, 8.0), band.color)?;
            let text = format!(">= {:.0}% {}", band.min_ratio * 100.0, band.label);
            painter.draw_text(text.as_str(), x + 11.0, legend_y, &small);
            x += 11.0 + small.width_of(&text) + 14.0;
        }
        Ok(())
    }

    fn footer(&self, painter: &mut Painter<'_>, page_number: usize) {
        let y = MARGIN - 14.0;
        let mut generated = format!("{} {}", self.labels.generated_on, self.meta.formatted_date());
        if let Some(author) = &self.data.generated_by {
            generated.push_str(&format!(" {} {}", self.labels.generated_by, author));
        }
        let small = TextOptions::new(self.normal, 7.0).with_color(Color::gray(90));
        painter.draw_text(generated, MARGIN, y, &small);
        painter.draw_text(
            format!("{} {}", self.labels.page, page_number),
            self.size.width - MARGIN,
            y,
            &small.with_align(TextAlign::Right),
        );
    }
}
