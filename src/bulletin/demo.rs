//! Built-in demonstration bulletin.
//!
//! Printed when the caller sends no data, when invalid data is replaced
//! under [`ValidationPolicy::Defaults`](crate::config::ValidationPolicy), and
//! as the subject table when `use_supplied_grades` is turned off.

use crate::model::{BulletinData, BulletinSummary, HeaderData, StudentIdentity, SubjectGrade};

pub fn demo_student() -> StudentIdentity {
    StudentIdentity {
        first_name: "Marie".into(),
        last_name: "Fouda".into(),
        class_name: "6ème A".into(),
        student_number: "EDU-2024-001".into(),
        birth_date: "12/05/2012".into(),
        birth_place: "Yaoundé".into(),
        gender: "F".into(),
    }
}

pub fn demo_subjects() -> Vec<SubjectGrade> {
    vec![
        SubjectGrade::new("Mathématiques", &[Some(15.0), Some(16.5), Some(14.0)], 4.0)
            .with_remark("Très bien", "M. Nkodo"),
        SubjectGrade::new("Français", &[Some(13.0), Some(14.5), Some(12.0)], 4.0)
            .with_remark("Bien", "Mme Essomba"),
        SubjectGrade::new("Anglais", &[Some(11.0), Some(10.5), Some(12.0)], 3.0)
            .with_remark("Assez bien", "Mr. Tabi"),
        SubjectGrade::new("Histoire-Géographie", &[Some(14.0), Some(13.0), Some(15.5)], 2.0)
            .with_remark("Bien", "M. Owona"),
        SubjectGrade::new(
            "Sciences de la Vie et de la Terre",
            &[Some(16.0), Some(15.0), Some(17.0)],
            2.0,
        )
        .with_remark("Très bien", "Mme Ngono"),
        SubjectGrade::new("Physique-Chimie", &[Some(12.0), Some(13.5), Some(11.0)], 3.0)
            .with_remark("Assez bien", "M. Biya"),
        SubjectGrade::new("Éducation Physique et Sportive", &[Some(17.0), Some(18.0), None], 1.0)
            .with_remark("Excellent", "M. Atangana"),
        SubjectGrade::new("Informatique", &[Some(15.5), Some(16.0), Some(16.5)], 2.0)
            .with_remark("Très bien", "Mme Mballa"),
    ]
}

pub fn demo_bulletin() -> BulletinData {
    let mut data = BulletinData {
        student: demo_student(),
        school: Some(HeaderData {
            school_name: "LYCÉE BILINGUE DE YAOUNDÉ".into(),
            phone: "+237 222 00 00 00".into(),
            email: "contact@lycee-yaounde.cm".into(),
            postal_box: "1500 Yaoundé".into(),
            ..HeaderData::default()
        }),
        term: "Premier trimestre".into(),
        academic_year: "2024-2025".into(),
        subjects: demo_subjects(),
        summary: BulletinSummary {
            overall_average: None,
            rank: Some(5),
            class_size: Some(42),
            conduct: Some(16.0),
            absences: 2,
            lateness: 1,
            observations: "Élève sérieuse et appliquée. Doit consolider l'anglais.".into(),
        },
    };
    data.summary.overall_average = data.computed_average();
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, ValidationContext};

    #[test]
    fn demo_bulletin_passes_validation() {
        let value = serde_json::to_value(demo_bulletin()).unwrap();
        let parsed: BulletinData = validate(&value, ValidationContext::new("bulletin")).unwrap();
        assert_eq!(parsed.subjects.len(), 8);
        assert!(parsed.summary.overall_average.unwrap() > 10.0);
    }
}
