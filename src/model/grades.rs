use super::lenient;
use super::school::HeaderData;
use super::student::StudentIdentity;
use serde::{Deserialize, Serialize};

fn default_coefficient() -> f64 {
    1.0
}

/// One line of the bulletin grade table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectGrade {
    #[serde(alias = "subject", alias = "name", default, deserialize_with = "lenient::text")]
    pub subject_name: String,
    /// Per-term scores; `None` marks an ungraded term.
    #[serde(alias = "score", default, deserialize_with = "lenient::scores")]
    pub scores: Vec<Option<f64>>,
    #[serde(default = "default_coefficient", deserialize_with = "lenient::number")]
    pub coefficient: f64,
    #[serde(alias = "total", default, deserialize_with = "lenient::optional_number")]
    pub weighted_total: Option<f64>,
    #[serde(alias = "appreciation", alias = "comment", default, deserialize_with = "lenient::text")]
    pub remark: String,
    #[serde(alias = "teacher", default, deserialize_with = "lenient::text")]
    pub teacher_name: String,
}

impl SubjectGrade {
    pub fn new(subject_name: &str, scores: &[Option<f64>], coefficient: f64) -> Self {
        Self {
            subject_name: subject_name.to_string(),
            scores: scores.to_vec(),
            coefficient,
            weighted_total: None,
            remark: String::new(),
            teacher_name: String::new(),
        }
    }

    pub fn with_remark(mut self, remark: &str, teacher_name: &str) -> Self {
        self.remark = remark.to_string();
        self.teacher_name = teacher_name.to_string();
        self
    }

    /// Mean of the graded terms, `None` when nothing is graded yet.
    pub fn average(&self) -> Option<f64> {
        let graded: Vec<f64> = self.scores.iter().flatten().copied().collect();
        if graded.is_empty() {
            None
        } else {
            Some(graded.iter().sum::<f64>() / graded.len() as f64)
        }
    }

    /// The supplied weighted total, otherwise average × coefficient.
    pub fn weighted_total(&self) -> Option<f64> {
        self.weighted_total.or_else(|| self.average().map(|avg| avg * self.coefficient))
    }
}

/// End-of-term figures computed upstream and printed as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulletinSummary {
    #[serde(alias = "average", deserialize_with = "lenient::optional_number")]
    pub overall_average: Option<f64>,
    pub rank: Option<i64>,
    #[serde(alias = "totalStudents")]
    pub class_size: Option<i64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub conduct: Option<f64>,
    #[serde(deserialize_with = "lenient::count")]
    pub absences: i64,
    #[serde(deserialize_with = "lenient::count")]
    pub lateness: i64,
    #[serde(alias = "observation", alias = "comments", deserialize_with = "lenient::text")]
    pub observations: String,
}

/// Coefficient-weighted mean of the graded rows, `None` when nothing is graded.
pub fn weighted_mean(subjects: &[SubjectGrade]) -> Option<f64> {
    let (points, weights) = subjects
        .iter()
        .filter_map(|s| s.average().map(|avg| (avg * s.coefficient, s.coefficient)))
        .fold((0.0, 0.0), |(p, w), (sp, sw)| (p + sp, w + sw));
    (weights > 0.0).then(|| points / weights)
}

/// The bulletin input bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinData {
    pub student: StudentIdentity,
    #[serde(default)]
    pub school: Option<HeaderData>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub term: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub academic_year: String,
    #[serde(alias = "grades", default, deserialize_with = "lenient::or_default")]
    pub subjects: Vec<SubjectGrade>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub summary: BulletinSummary,
}

impl BulletinData {
    /// Coefficient-weighted mean over graded subjects.
    pub fn computed_average(&self) -> Option<f64> {
        weighted_mean(&self.subjects)
    }

    /// Average printed on the bulletin: the upstream figure when supplied.
    pub fn overall_average(&self) -> Option<f64> {
        self.summary.overall_average.or_else(|| self.computed_average())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn average_ignores_ungraded_terms() {
        let s = SubjectGrade::new("Maths", &[Some(12.0), None, Some(16.0)], 4.0);
        assert_eq!(s.average(), Some(14.0));
        assert_eq!(s.weighted_total(), Some(56.0));
        assert_eq!(SubjectGrade::new("EPS", &[None], 1.0).average(), None);
    }

    #[test]
    fn supplied_total_wins() {
        let mut s = SubjectGrade::new("Maths", &[Some(10.0)], 2.0);
        s.weighted_total = Some(21.0);
        assert_eq!(s.weighted_total(), Some(21.0));
    }

    #[test]
    fn computed_average_is_coefficient_weighted() {
        let data = BulletinData {
            student: StudentIdentity::default(),
            school: None,
            term: String::new(),
            academic_year: String::new(),
            subjects: vec![
                SubjectGrade::new("A", &[Some(10.0)], 1.0),
                SubjectGrade::new("B", &[Some(16.0)], 2.0),
                SubjectGrade::new("C", &[None], 5.0),
            ],
            summary: BulletinSummary::default(),
        };
        assert_eq!(data.computed_average(), Some(14.0));
    }

    #[test]
    fn deserializes_loose_subject_rows() {
        let s: SubjectGrade = serde_json::from_value(json!({
            "subject": "Français", "score": "13,5", "coefficient": "3", "teacher": "M. Abena"
        }))
        .unwrap();
        assert_eq!(s.subject_name, "Français");
        assert_eq!(s.scores, vec![Some(13.5)]);
        assert_eq!(s.coefficient, 3.0);
        assert_eq!(s.teacher_name, "M. Abena");
    }
}
