//! Generation policies and grading tables.

use crate::i18n::Language;
use educafric_types::Color;
use serde::{Deserialize, Serialize};

/// What to do when the bulletin data bag fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Log a warning and render the built-in demonstration data instead.
    #[default]
    Defaults,
    /// Return the validation error to the caller.
    Reject,
}

/// What to do when master-sheet rows no longer fit on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Stop adding rows and log how many students were left out.
    #[default]
    Truncate,
    /// Continue on a new page with the column headers repeated.
    Paginate,
    /// Fail with [`DocumentError::Overflow`](crate::DocumentError::Overflow).
    Error,
}

/// A color band of the grade thermometer. A score belongs to the band with
/// the highest `min_ratio` that `score / max_score` reaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBand {
    pub min_ratio: f64,
    pub color: Color,
    pub label: String,
}

impl GradeBand {
    pub fn new(min_ratio: f64, color: Color, label: &str) -> Self {
        Self { min_ratio, color, label: label.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradingScale {
    pub max_score: f64,
    /// Minimum average counted as a pass, on the same scale as `max_score`.
    pub pass_mark: f64,
    pub bands: Vec<GradeBand>,
}

pub const EXCELLENT_COLOR: Color = Color::rgb(22, 163, 74);
pub const GOOD_COLOR: Color = Color::rgb(37, 99, 235);
pub const AVERAGE_COLOR: Color = Color::rgb(234, 88, 12);
pub const INSUFFICIENT_COLOR: Color = Color::rgb(220, 38, 38);

impl Default for GradingScale {
    fn default() -> Self {
        Self {
            max_score: 20.0,
            pass_mark: 10.0,
            bands: vec![
                GradeBand::new(0.75, EXCELLENT_COLOR, "excellent"),
                GradeBand::new(0.60, GOOD_COLOR, "good"),
                GradeBand::new(0.50, AVERAGE_COLOR, "average"),
                GradeBand::new(0.0, INSUFFICIENT_COLOR, "insufficient"),
            ],
        }
    }
}

impl GradingScale {
    /// The 100-point scale, pass mark 50, with the default bands.
    pub fn hundred_point() -> Self {
        Self { max_score: 100.0, pass_mark: 50.0, ..Default::default() }
    }

    /// Band of `score` out of `max_score`. Boundary values belong to the
    /// higher band. Scores below every threshold fall into the lowest band.
    pub fn band_for(&self, score: f64, max_score: f64) -> Option<&GradeBand> {
        let ratio = if max_score > 0.0 { score / max_score } else { 0.0 };
        self.bands
            .iter()
            .filter(|band| ratio >= band.min_ratio)
            .max_by(|a, b| a.min_ratio.total_cmp(&b.min_ratio))
            .or_else(|| self.bands.iter().min_by(|a, b| a.min_ratio.total_cmp(&b.min_ratio)))
    }

    pub fn color_for(&self, score: f64, max_score: f64) -> Color {
        self.band_for(score, max_score).map(|band| band.color).unwrap_or(Color::BLACK)
    }

    /// Bands ordered from the highest threshold down, for legends.
    pub fn bands_descending(&self) -> Vec<&GradeBand> {
        let mut bands: Vec<&GradeBand> = self.bands.iter().collect();
        bands.sort_by(|a, b| b.min_ratio.total_cmp(&a.min_ratio));
        bands
    }
}

/// Settings of the bulletin generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletinConfig {
    /// Render the caller's subject list. When false the demonstration table
    /// is printed instead.
    pub use_supplied_grades: bool,
    pub on_validation_error: ValidationPolicy,
    pub language: Language,
    pub grading: GradingScale,
    /// Fixed verification code; a random one is drawn when absent.
    pub verification_code: Option<String>,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            use_supplied_grades: true,
            on_validation_error: ValidationPolicy::Defaults,
            language: Language::Fr,
            grading: GradingScale::default(),
            verification_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boundaries_belong_to_the_higher_band() {
        let scale = GradingScale::default();
        assert_eq!(scale.band_for(15.0, 20.0).unwrap().label, "excellent");
        assert_eq!(scale.band_for(12.0, 20.0).unwrap().label, "good");
        assert_eq!(scale.band_for(10.0, 20.0).unwrap().label, "average");
        assert_eq!(scale.band_for(9.99, 20.0).unwrap().label, "insufficient");
        assert_eq!(scale.color_for(14.99, 20.0), GOOD_COLOR);
    }

    #[test]
    fn hundred_point_scale_uses_ratios() {
        let scale = GradingScale::hundred_point();
        assert_eq!(scale.band_for(75.0, scale.max_score).unwrap().label, "excellent");
        assert_eq!(scale.band_for(49.0, scale.max_score).unwrap().label, "insufficient");
    }

    #[test]
    fn custom_bands_from_json_in_any_order() {
        let scale: GradingScale = serde_json::from_value(json!({
            "maxScore": 100,
            "bands": [
                { "minRatio": 0.0, "color": "#ff0000", "label": "F" },
                { "minRatio": 0.7, "color": "#00ff00", "label": "A" },
                { "minRatio": 0.4, "color": "#0000ff", "label": "C" }
            ]
        }))
        .unwrap();
        assert_eq!(scale.pass_mark, 10.0);
        assert_eq!(scale.band_for(70.0, 100.0).unwrap().label, "A");
        assert_eq!(scale.band_for(55.0, 100.0).unwrap().label, "C");
        let labels: Vec<&str> = scale.bands_descending().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C", "F"]);
    }

    #[test]
    fn negative_scores_fall_into_lowest_band() {
        let scale = GradingScale::default();
        assert_eq!(scale.band_for(-1.0, 20.0).unwrap().label, "insufficient");
    }

    #[test]
    fn bulletin_config_defaults_to_supplied_grades() {
        let config: BulletinConfig =
            serde_json::from_value(json!({ "onValidationError": "reject" })).unwrap();
        assert!(config.use_supplied_grades);
        assert_eq!(config.on_validation_error, ValidationPolicy::Reject);
    }
}
