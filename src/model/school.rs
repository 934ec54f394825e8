use super::lenient;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCHOOL_NAME: &str = "ÉTABLISSEMENT SCOLAIRE";
pub const DEFAULT_REGION: &str = "CENTRE";
pub const DEFAULT_DEPARTMENT: &str = "MFOUNDI";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum EducationLevel {
    Base,
    #[default]
    Secondary,
}

impl From<Option<String>> for EducationLevel {
    fn from(value: Option<String>) -> Self {
        value.map(EducationLevel::from).unwrap_or_default()
    }
}

impl From<String> for EducationLevel {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "base" | "basic" | "primary" | "primaire" | "maternelle" | "nursery" => {
                EducationLevel::Base
            }
            _ => EducationLevel::Secondary,
        }
    }
}

/// Identity of the issuing school, shown in the institutional header.
///
/// Every field has a safe default: a missing or blank value never prevents
/// the header from rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderData {
    #[serde(deserialize_with = "lenient::text")]
    pub school_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub region: String,
    #[serde(deserialize_with = "lenient::text")]
    pub department: String,
    pub education_level: EducationLevel,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(alias = "boitePostale", deserialize_with = "lenient::text")]
    pub postal_box: String,
}

impl Default for HeaderData {
    fn default() -> Self {
        Self {
            school_name: DEFAULT_SCHOOL_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
            education_level: EducationLevel::Secondary,
            logo_url: None,
            phone: String::new(),
            email: String::new(),
            postal_box: String::new(),
        }
    }
}

impl HeaderData {
    /// Returns a copy where blank identity fields fall back to the defaults.
    /// Contact fields stay blank: they are simply not printed.
    pub fn with_defaults(&self) -> HeaderData {
        let defaults = HeaderData::default();
        let pick = |value: &str, fallback: String| {
            let trimmed = value.trim();
            if trimmed.is_empty() { fallback } else { trimmed.to_string() }
        };
        HeaderData {
            school_name: pick(&self.school_name, defaults.school_name),
            region: pick(&self.region, defaults.region),
            department: pick(&self.department, defaults.department),
            education_level: self.education_level,
            logo_url: self.logo_url.clone(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            postal_box: self.postal_box.trim().to_string(),
        }
    }
}
