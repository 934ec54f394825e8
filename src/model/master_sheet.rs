use super::lenient;
use super::school::HeaderData;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_coefficient() -> f64 {
    1.0
}

fn default_max_score() -> f64 {
    20.0
}

/// A column of the master sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default = "default_coefficient", deserialize_with = "lenient::number")]
    pub coefficient: f64,
    #[serde(default = "default_max_score", deserialize_with = "lenient::number")]
    pub max_score: f64,
}

impl SubjectInfo {
    pub fn new(id: &str, name: &str, coefficient: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            coefficient,
            max_score: default_max_score(),
        }
    }
}

/// A row of the master sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentMasterData {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(alias = "studentNumber", deserialize_with = "lenient::text")]
    pub matricule: String,
    #[serde(deserialize_with = "lenient::text")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub last_name: String,
    /// Subject id to score; `None` marks an ungraded subject.
    #[serde(deserialize_with = "lenient::score_map")]
    pub grades: BTreeMap<String, Option<f64>>,
    #[serde(deserialize_with = "lenient::number")]
    pub average: f64,
    #[serde(deserialize_with = "lenient::count")]
    pub rank: u32,
    pub absences: Option<u32>,
}

impl StudentMasterData {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name.trim().to_uppercase(), self.first_name.trim())
            .trim()
            .to_string()
    }

    pub fn grade(&self, subject_id: &str) -> Option<f64> {
        self.grades.get(subject_id).copied().flatten()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherInfo {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub subject: Option<String>,
}

/// The master sheet input bag: one class, all of its students and subjects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterSheetData {
    #[serde(deserialize_with = "lenient::text")]
    pub class_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub class_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub academic_year: String,
    #[serde(deserialize_with = "lenient::text")]
    pub term: String,
    #[serde(alias = "school", deserialize_with = "lenient::or_default")]
    pub school_info: HeaderData,
    #[serde(deserialize_with = "lenient::or_default")]
    pub subjects: Vec<SubjectInfo>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub students: Vec<StudentMasterData>,
    pub teacher: Option<TeacherInfo>,
    #[serde(deserialize_with = "lenient::optional_text")]
    pub generated_by: Option<String>,
}

/// Coefficient-weighted average of a student's graded subjects, or `0.0`
/// when nothing is graded. Scores are normalized to a 20-point scale.
pub fn weighted_average(grades: &BTreeMap<String, Option<f64>>, subjects: &[SubjectInfo]) -> f64 {
    let (points, weights) = subjects
        .iter()
        .filter_map(|subject| {
            let score = grades.get(&subject.id).copied().flatten()?;
            let on_twenty =
                if subject.max_score > 0.0 { score * 20.0 / subject.max_score } else { score };
            Some((on_twenty * subject.coefficient, subject.coefficient))
        })
        .fold((0.0, 0.0), |(p, w), (sp, sw)| (p + sp, w + sw));
    if weights > 0.0 { points / weights } else { 0.0 }
}

/// Assigns dense ranks by descending average: equal averages share a rank and
/// the next distinct average takes the following rank, so ranks run 1..=N
/// without gaps.
pub fn assign_dense_ranks(students: &mut [StudentMasterData]) {
    let order: Vec<usize> = (0..students.len())
        .sorted_by(|&a, &b| students[b].average.total_cmp(&students[a].average))
        .collect();

    let mut rank = 0;
    let mut previous: Option<f64> = None;
    for index in order {
        let average = students[index].average;
        if previous != Some(average) {
            rank += 1;
            previous = Some(average);
        }
        students[index].rank = rank;
    }
}
