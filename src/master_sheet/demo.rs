use crate::model::{
    assign_dense_ranks, weighted_average, HeaderData, MasterSheetData, StudentMasterData,
    SubjectInfo, TeacherInfo,
};
use std::collections::BTreeMap;

const DEMO_NAMES: [(&str, &str); 12] = [
    ("Paul", "Mbarga"),
    ("Aline", "Ngo Bassa"),
    ("Samuel", "Eto'o"),
    ("Grace", "Fotso"),
    ("Ibrahim", "Moussa"),
    ("Chantal", "Abena"),
    ("Kevin", "Tchoupo"),
    ("Nadège", "Manga"),
    ("Junior", "Kamga"),
    ("Estelle", "Nana"),
    ("Boris", "Ekane"),
    ("Linda", "Ayissi"),
];

pub(super) fn demo_data() -> MasterSheetData {
    let subjects = vec![
        SubjectInfo::new("math", "Mathématiques", 4.0),
        SubjectInfo::new("fr", "Français", 4.0),
        SubjectInfo::new("en", "Anglais", 3.0),
        SubjectInfo::new("hg", "Histoire-Géo", 2.0),
        SubjectInfo::new("svt", "SVT", 2.0),
        SubjectInfo::new("pc", "Physique-Chimie", 3.0),
        SubjectInfo::new("eps", "EPS", 1.0),
    ];

    let mut students: Vec<StudentMasterData> = DEMO_NAMES
        .iter()
        .enumerate()
        .map(|(i, (first_name, last_name))| {
            let grades: BTreeMap<String, Option<f64>> = subjects
                .iter()
                .enumerate()
                .map(|(j, subject)| {
                    // Deterministic spread between 6 and 18.5; one missing grade.
                    let score = ((i * 7 + j * 5) % 13) as f64 + 6.0 + (j % 2) as f64 * 0.5;
                    let score = (i != 4 || j != 6).then_some(score);
                    (subject.id.clone(), score)
                })
                .collect();
            StudentMasterData {
                id: format!("stu-{:03}", i + 1),
                matricule: format!("EDU-2024-{:03}", i + 1),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                average: weighted_average(&grades, &subjects),
                grades,
                rank: 0,
                absences: Some(((i * 3) % 5) as u32),
            }
        })
        .collect();
    assign_dense_ranks(&mut students);

    MasterSheetData {
        class_id: "class-3a".into(),
        class_name: "3ème A".into(),
        academic_year: "2024-2025".into(),
        term: "Premier trimestre".into(),
        school_info: HeaderData {
            school_name: "COLLÈGE BILINGUE EDUCAFRIC".into(),
            phone: "+237 699 00 00 00".into(),
            email: "info@educafric.com".into(),
            postal_box: "8000 Yaoundé".into(),
            ..HeaderData::default()
        },
        subjects,
        students,
        teacher: Some(TeacherInfo {
            name: "Mme Mballa".into(),
            subject: Some("Mathématiques".into()),
        }),
        generated_by: Some("Educafric".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, ValidationContext};

    #[test]
    fn demo_data_is_valid_and_ranked() {
        let data = demo_data();
        let value = serde_json::to_value(&data).unwrap();
        let parsed: MasterSheetData =
            validate(&value, ValidationContext::new("master sheet")).unwrap();
        assert_eq!(parsed.students.len(), 12);
        let mut ranks: Vec<u32> = data.students.iter().map(|s| s.rank).collect();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.first(), Some(&1));
        assert_eq!(*ranks.last().unwrap() as usize, ranks.len());
        assert_eq!(data.students[4].grade("eps"), None);
    }
}
