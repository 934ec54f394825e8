//! Official school documents as PDF: single-student report cards
//! ("bulletins") and class master sheets.
//!
//! Both generators take data assembled upstream, run it through the
//! validators, and return the bytes of a complete PDF document.
//!
//! ```no_run
//! use educafric_docs::{generate_master_sheet, MasterSheetGenerator, MasterSheetOptions};
//!
//! let data = MasterSheetGenerator::generate_demo_data();
//! let pdf = generate_master_sheet(&data, &MasterSheetOptions::default()).unwrap();
//! std::fs::write("master-sheet.pdf", pdf).unwrap();
//! ```

pub mod bulletin;
pub mod config;
pub mod demo;
mod document;
pub mod error;
pub mod header;
pub mod i18n;
pub mod master_sheet;
pub mod model;
pub mod text;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use bulletin::{generate_bulletin, BulletinGenerator};
pub use config::{BulletinConfig, GradeBand, GradingScale, OverflowPolicy, ValidationPolicy};
pub use error::DocumentError;
pub use header::{render_header, DocumentMeta};
pub use i18n::Language;
pub use master_sheet::{
    generate_master_sheet, ClassStatistics, ColorScheme, MasterSheetGenerator, MasterSheetOptions,
};
pub use model::{BulletinData, HeaderData, MasterSheetData};
pub use text::{Painter, TextOptions, TextValue};
pub use validation::{validate, Validate, ValidationContext, ValidationError};

pub use educafric_render_core::{FontFace, TextAlign};
pub use educafric_types::{Color, Orientation, PageFormat};
