//! Schema-based sanitization of incoming data bags.
//!
//! A schema is a typed model implementing [`Validate`]. [`validate`] first
//! deserializes the loose JSON (coercing lenient fields), then runs the
//! semantic rules and reports every violation at once.

use crate::model::{BulletinData, BulletinSummary, MasterSheetData, StudentIdentity, SubjectGrade};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {context} data: {}", .issues.iter().join("; "))]
pub struct ValidationError {
    pub context: String,
    pub issues: Vec<ValidationIssue>,
}

/// Collects issues while walking a value, tracking the current field path.
pub struct ValidationContext {
    name: String,
    max_score: f64,
    path: Vec<String>,
    issues: Vec<ValidationIssue>,
}

impl ValidationContext {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            max_score: 20.0,
            path: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Upper bound for scores that carry no maximum of their own.
    pub fn with_max_score(mut self, max_score: f64) -> Self {
        self.max_score = max_score;
        self
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    /// Runs `f` with `segment` appended to the current path.
    pub fn at(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self)) {
        self.path.push(segment.into());
        f(self);
        self.path.pop();
    }

    pub fn error(&mut self, field: &str, message: impl Into<String>) {
        let mut path = self.current_path();
        if !field.is_empty() {
            if !path.is_empty() && !field.starts_with('[') {
                path.push('.');
            }
            path.push_str(field);
        }
        self.issues.push(ValidationIssue { path, message: message.into() });
    }

    fn current_path(&self) -> String {
        let mut path = String::new();
        for segment in &self.path {
            if !path.is_empty() && !segment.starts_with('[') {
                path.push('.');
            }
            path.push_str(segment);
        }
        path
    }

    pub fn check_score(&mut self, field: &str, score: Option<f64>, max_score: f64) {
        if let Some(score) = score {
            if !score.is_finite() || score < 0.0 || score > max_score {
                self.error(field, format!("score {} is outside [0, {}]", score, max_score));
            }
        }
    }

    pub fn check_coefficient(&mut self, coefficient: f64) {
        if !coefficient.is_finite() || coefficient <= 0.0 {
            let message = format!("coefficient must be greater than 0, got {}", coefficient);
            self.error("coefficient", message);
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { context: self.name, issues: self.issues })
        }
    }
}

pub trait Validate {
    fn validate(&self, ctx: &mut ValidationContext);
}

/// Deserializes `data` into the schema type `T` and checks its rules.
pub fn validate<T>(data: &Value, mut context: ValidationContext) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate,
{
    let parsed: T = match serde_path_to_error::deserialize(data) {
        Ok(parsed) => parsed,
        Err(e) => {
            // The root path prints as "."
            let path = e.path().to_string();
            let path = if path == "." { String::new() } else { path };
            context.issues.push(ValidationIssue { path, message: e.inner().to_string() });
            return Err(ValidationError { context: context.name, issues: context.issues });
        }
    };
    parsed.validate(&mut context);
    log::debug!(
        target: "educafric::validation",
        "Validated '{}' data with {} issue(s)",
        context.name,
        context.issues.len()
    );
    context.finish().map(|_| parsed)
}

impl Validate for StudentIdentity {
    fn validate(&self, ctx: &mut ValidationContext) {
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            ctx.error("lastName", "student name is required");
        }
    }
}

impl Validate for SubjectGrade {
    fn validate(&self, ctx: &mut ValidationContext) {
        if self.subject_name.trim().is_empty() {
            ctx.error("subjectName", "subject name is required");
        }
        ctx.check_coefficient(self.coefficient);
        let max_score = ctx.max_score();
        for (term, score) in self.scores.iter().enumerate() {
            ctx.check_score(&format!("scores[{}]", term), *score, max_score);
        }
    }
}

impl Validate for BulletinSummary {
    fn validate(&self, ctx: &mut ValidationContext) {
        let max_score = ctx.max_score();
        ctx.check_score("overallAverage", self.overall_average, max_score);
        ctx.check_score("conduct", self.conduct, max_score);
        if let Some(class_size) = self.class_size {
            if class_size < 1 {
                ctx.error("classSize", "class size must be at least 1");
            }
        }
        if let Some(rank) = self.rank {
            let upper = self.class_size.unwrap_or(i64::MAX);
            if rank < 1 || rank > upper {
                ctx.error("rank", format!("rank {} is outside 1..={}", rank, upper));
            }
        }
        if self.absences < 0 {
            ctx.error("absences", "absences cannot be negative");
        }
        if self.lateness < 0 {
            ctx.error("lateness", "lateness cannot be negative");
        }
    }
}

impl Validate for BulletinData {
    fn validate(&self, ctx: &mut ValidationContext) {
        ctx.at("student", |ctx| self.student.validate(ctx));
        for (index, subject) in self.subjects.iter().enumerate() {
            ctx.at(format!("subjects[{}]", index), |ctx| subject.validate(ctx));
        }
        ctx.at("summary", |ctx| self.summary.validate(ctx));
    }
}

impl Validate for MasterSheetData {
    fn validate(&self, ctx: &mut ValidationContext) {
        let mut seen = HashSet::new();
        for (index, subject) in self.subjects.iter().enumerate() {
            ctx.at(format!("subjects[{}]", index), |ctx| {
                if subject.id.trim().is_empty() {
                    ctx.error("id", "subject id is required");
                } else if !seen.insert(subject.id.as_str()) {
                    ctx.error("id", format!("duplicate subject id '{}'", subject.id));
                }
                ctx.check_coefficient(subject.coefficient);
                if !subject.max_score.is_finite() || subject.max_score <= 0.0 {
                    ctx.error("maxScore", "maximum score must be greater than 0");
                }
            });
        }

        for (index, student) in self.students.iter().enumerate() {
            ctx.at(format!("students[{}]", index), |ctx| {
                for (subject_id, score) in &student.grades {
                    let field = format!("grades.{}", subject_id);
                    match self.subjects.iter().find(|s| &s.id == subject_id) {
                        Some(subject) => ctx.check_score(&field, *score, subject.max_score),
                        None => ctx.error(&field, format!("unknown subject '{}'", subject_id)),
                    }
                }
                if !student.average.is_finite() || student.average < 0.0 {
                    ctx.error("average", "average must be a non-negative number");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bulletin(subjects: Value) -> Value {
        json!({
            "student": { "firstName": "Aline", "lastName": "Ngo", "className": "5ème B" },
            "subjects": subjects
        })
    }

    #[test]
    fn accepts_well_formed_bulletin() {
        let data: BulletinData = validate(
            &bulletin(json!([{ "subject": "Maths", "scores": [12, 14], "coefficient": 4 }])),
            ValidationContext::new("bulletin"),
        )
        .unwrap();
        assert_eq!(data.subjects.len(), 1);
    }

    #[test]
    fn rejects_negative_coefficient() {
        let err = validate::<BulletinData>(
            &bulletin(json!([{ "subject": "Maths", "scores": [12], "coefficient": -2 }])),
            ValidationContext::new("bulletin"),
        )
        .unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].path, "subjects[0].coefficient");
    }

    #[test]
    fn rejects_scores_outside_scale_and_reports_all() {
        let err = validate::<BulletinData>(
            &bulletin(json!([
                { "subject": "Maths", "scores": [21] },
                { "subject": "SVT", "scores": [12, -0.5] }
            ])),
            ValidationContext::new("bulletin"),
        )
        .unwrap_err();
        let paths: Vec<&str> = err.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["subjects[0].scores[0]", "subjects[1].scores[1]"]);
        assert!(err.to_string().starts_with("Invalid bulletin data:"));
    }

    #[test]
    fn max_score_comes_from_context() {
        let value = bulletin(json!([{ "subject": "English", "scores": [85] }]));
        assert!(validate::<BulletinData>(&value, ValidationContext::new("bulletin")).is_err());
        let context = ValidationContext::new("bulletin").with_max_score(100.0);
        assert!(validate::<BulletinData>(&value, context).is_ok());
    }

    #[test]
    fn structural_errors_become_single_issue() {
        let value = json!({ "subjects": [] });
        let err = validate::<BulletinData>(&value, ValidationContext::new("bulletin")).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].path, "");
        assert!(err.issues[0].message.contains("student"));
    }

    #[test]
    fn structural_errors_carry_the_failing_path() {
        let value = json!({
            "student": { "lastName": "Ngo" },
            "subjects": [
                { "subject": "Maths", "scores": [12] },
                { "subject": "SVT", "scores": ["abc"] }
            ],
        });
        let err = validate::<BulletinData>(&value, ValidationContext::new("bulletin")).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].path, "subjects[1].scores");
        assert!(err.issues[0].message.contains("'abc' is not a number"));

        let value = json!({ "student": { "lastName": "Ngo" }, "summary": { "absences": "many" } });
        let err = validate::<BulletinData>(&value, ValidationContext::new("bulletin")).unwrap_err();
        assert_eq!(err.issues[0].path, "summary.absences");
    }

    #[test]
    fn null_optional_fields_are_tolerated() {
        let value = json!({
            "student": { "firstName": "Aline", "lastName": "Ngo" },
            "school": { "schoolName": "Lycée de Bafia", "educationLevel": null },
            "subjects": [{ "subject": "Maths", "scores": [12, null], "coefficient": 2 }],
            "summary": { "absences": null, "lateness": null, "rank": null }
        });
        let data: BulletinData = validate(&value, ValidationContext::new("bulletin")).unwrap();
        assert_eq!(data.student.full_name(), "NGO Aline");
        assert_eq!(data.summary.absences, 0);

        let value = json!({
            "schoolInfo": null,
            "subjects": [{ "id": "m", "name": "Maths", "coefficient": 4 }],
            "students": [{
                "id": "1",
                "grades": { "m": 12 },
                "average": 12,
                "rank": null,
                "absences": null
            }]
        });
        let data: MasterSheetData =
            validate(&value, ValidationContext::new("master sheet")).unwrap();
        assert_eq!(data.students[0].rank, 0);
        assert_eq!(data.students[0].absences, None);
    }

    #[test]
    fn rank_must_fit_class_size() {
        let value = json!({
            "student": { "lastName": "Ngo" },
            "summary": { "rank": 43, "classSize": 42, "absences": -1 }
        });
        let err = validate::<BulletinData>(&value, ValidationContext::new("bulletin")).unwrap_err();
        let paths: Vec<&str> = err.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["summary.rank", "summary.absences"]);
    }

    #[test]
    fn master_sheet_rules() {
        let value = json!({
            "subjects": [
                { "id": "m", "name": "Maths", "coefficient": 4 },
                { "id": "m", "name": "Maths bis", "coefficient": 0 }
            ],
            "students": [{ "id": "1", "grades": { "m": 25, "x": 3 }, "average": 12, "rank": 1 }]
        });
        let context = ValidationContext::new("master sheet");
        let err = validate::<MasterSheetData>(&value, context).unwrap_err();
        let paths: Vec<&str> = err.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "subjects[1].id",
                "subjects[1].coefficient",
                "students[0].grades.m",
                "students[0].grades.x"
            ]
        );
    }
}
