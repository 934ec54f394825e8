//! Class master sheet: every student of a class against every subject.

mod demo;
mod layout;
pub mod palette;
pub mod stats;

pub use palette::{ColorScheme, Palette};
pub use stats::ClassStatistics;

use crate::config::{GradingScale, OverflowPolicy};
use crate::document::{create_document, draw_page};
use crate::error::DocumentError;
use crate::header::DocumentMeta;
use crate::i18n::Language;
use crate::model::MasterSheetData;
use crate::validation::{validate, ValidationContext};
use educafric_types::{Orientation, PageFormat};
use layout::SheetLayout;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendering options, accepted from JSON with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterSheetOptions {
    pub language: Language,
    pub format: PageFormat,
    pub orientation: Orientation,
    pub include_statistics: bool,
    pub include_absences: bool,
    pub show_rankings: bool,
    pub color_scheme: ColorScheme,
    pub overflow: OverflowPolicy,
    /// Grade bands and pass mark; the 20-point scale when absent.
    pub grading: Option<GradingScale>,
}

impl Default for MasterSheetOptions {
    fn default() -> Self {
        Self {
            language: Language::Fr,
            format: PageFormat::A4,
            orientation: Orientation::Landscape,
            include_statistics: true,
            include_absences: true,
            show_rankings: true,
            color_scheme: ColorScheme::Standard,
            overflow: OverflowPolicy::Truncate,
            grading: None,
        }
    }
}

impl MasterSheetOptions {
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn grading(&self) -> GradingScale {
        self.grading.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MasterSheetGenerator {
    options: MasterSheetOptions,
    meta: Option<DocumentMeta>,
}

impl MasterSheetGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: MasterSheetOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_meta(mut self, meta: DocumentMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn options(&self) -> &MasterSheetOptions {
        &self.options
    }

    /// A complete demonstration class: 12 students, 7 subjects, dense ranks.
    pub fn generate_demo_data() -> MasterSheetData {
        demo::demo_data()
    }

    /// Validates a JSON data bag, then renders it. Invalid data is an error.
    pub fn generate_value(&self, data: &Value) -> Result<Vec<u8>, DocumentError> {
        let data: MasterSheetData = validate(data, ValidationContext::new("master sheet"))?;
        self.generate(&data)
    }

    pub fn generate(&self, data: &MasterSheetData) -> Result<Vec<u8>, DocumentError> {
        let options = &self.options;
        let meta = self.meta.clone().unwrap_or_default().with_language(options.language);
        let grading = options.grading();
        let labels = options.language.labels();
        let size = options.format.size(options.orientation);

        let title = format!("{} - {}", labels.master_sheet_title, data.class_name);
        let (mut doc, bold, normal) = create_document(&title, &meta)?;
        let layout = SheetLayout::new(data, options, &grading, &meta, size, bold, normal);

        let total = data.students.len();
        let mut rendered = 0;
        let mut page_number = 1;
        loop {
            let batch = draw_page(&mut doc, size, |painter| {
                layout.draw_page(painter, page_number, rendered)
            })?;
            rendered += batch;
            if rendered >= total {
                break;
            }
            match options.overflow {
                OverflowPolicy::Truncate => {
                    log::warn!(
                        target: "educafric::master_sheet",
                        "Only {} of {} students fit on the page; the rest were left out",
                        rendered,
                        total
                    );
                    break;
                }
                OverflowPolicy::Error => return Err(DocumentError::Overflow { rendered, total }),
                OverflowPolicy::Paginate if batch == 0 => {
                    return Err(DocumentError::Config(format!(
                        "{:?} {:?} pages leave no room for student rows",
                        options.format, options.orientation
                    )));
                }
                OverflowPolicy::Paginate => page_number += 1,
            }
        }

        let bytes = doc.save()?;
        log::info!(
            target: "educafric::master_sheet",
            "Generated master sheet for '{}' ({} students, {} page(s), {} bytes)",
            data.class_name,
            rendered,
            page_number,
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Renders a master sheet with the given options.
pub fn generate_master_sheet(
    data: &MasterSheetData,
    options: &MasterSheetOptions,
) -> Result<Vec<u8>, DocumentError> {
    MasterSheetGenerator::new().with_options(options.clone()).generate(data)
}
