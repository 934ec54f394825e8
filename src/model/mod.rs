//! Input data for document generation.
//!
//! Every value here is built fresh for a single generation request and is
//! only read by the renderers.

pub(crate) mod lenient;
pub mod grades;
pub mod master_sheet;
pub mod school;
pub mod student;

pub use grades::{weighted_mean, BulletinData, BulletinSummary, SubjectGrade};
pub use master_sheet::{
    assign_dense_ranks, weighted_average, MasterSheetData, StudentMasterData, SubjectInfo,
    TeacherInfo,
};
pub use school::{EducationLevel, HeaderData};
pub use student::StudentIdentity;
