#![allow(dead_code)]

use serde_json::{json, Value};

/// A complete bulletin data bag as sent by the school back office
pub fn bulletin_data() -> Value {
    json!({
        "student": {
            "firstName": "Aline",
            "lastName": "Ngo",
            "className": "4ème B",
            "matricule": "LBY-2023-0457",
            "birthDate": "03/09/2010",
            "birthPlace": "Douala",
            "gender": "F"
        },
        "school": {
            "schoolName": "Lycée de Bonabéri",
            "region": "LITTORAL",
            "department": "WOURI",
            "educationLevel": "secondary",
            "phone": "+237 233 00 00 00",
            "postalBox": "4521 Douala"
        },
        "term": "Deuxième trimestre",
        "academicYear": "2024-2025",
        "subjects": [
            { "subjectName": "Chimie organique", "scores": [14, 15.5, null], "coefficient": 3,
              "remark": "Bien", "teacherName": "M. Ekotto" },
            { "subjectName": "Littérature", "scores": ["12,5", 13], "coefficient": 2,
              "remark": "Assez bien", "teacherName": "Mme Kouam" },
            { "subjectName": "Dessin", "scores": [null], "coefficient": 1 }
        ],
        "summary": {
            "overallAverage": 13.75,
            "rank": 7,
            "classSize": 38,
            "conduct": 17,
            "absences": 3,
            "lateness": 0,
            "observations": "Travail régulier."
        }
    })
}

/// Replaces one field of the first subject
pub fn bulletin_with_first_subject(field: &str, value: Value) -> Value {
    let mut data = bulletin_data();
    data["subjects"][0][field] = value;
    data
}

/// A class of `students` students over three subjects, ranked by average
pub fn master_sheet_data(students: usize) -> Value {
    let rows: Vec<Value> = (0..students)
        .map(|i| {
            let base = 6.0 + (i % 14) as f64;
            json!({
                "id": format!("s{}", i),
                "matricule": format!("M{:04}", i),
                "firstName": format!("Élève{}", i),
                "lastName": "TEST",
                "grades": { "math": base, "fr": base - 1.0, "en": null },
                "average": base - 0.5,
                "rank": i + 1,
                "absences": i % 3
            })
        })
        .collect();
    json!({
        "classId": "c-1",
        "className": "Terminale C",
        "academicYear": "2024-2025",
        "term": "Troisième trimestre",
        "schoolInfo": { "schoolName": "Lycée Technique de Garoua", "educationLevel": "secondary" },
        "subjects": [
            { "id": "math", "name": "Mathématiques", "coefficient": 5 },
            { "id": "fr", "name": "Français", "coefficient": 3 },
            { "id": "en", "name": "Anglais", "coefficient": 2 }
        ],
        "students": rows,
        "teacher": { "name": "M. Hamadou", "subject": "Mathématiques" },
        "generatedBy": "Secrétariat"
    })
}
