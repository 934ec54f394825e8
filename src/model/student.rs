use super::lenient;
use serde::{Deserialize, Serialize};

/// The student a bulletin is issued for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentIdentity {
    #[serde(deserialize_with = "lenient::text")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub last_name: String,
    #[serde(alias = "class", deserialize_with = "lenient::text")]
    pub class_name: String,
    #[serde(alias = "matricule", deserialize_with = "lenient::text")]
    pub student_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub birth_date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub birth_place: String,
    #[serde(deserialize_with = "lenient::text")]
    pub gender: String,
}

impl StudentIdentity {
    /// Family name in capitals followed by the given names, as printed on
    /// official documents.
    pub fn full_name(&self) -> String {
        let last = self.last_name.trim().to_uppercase();
        let first = self.first_name.trim();
        match (last.is_empty(), first.is_empty()) {
            (true, _) => first.to_string(),
            (false, true) => last,
            (false, false) => format!("{} {}", last, first),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matricule_is_an_alias() {
        let value = json!({ "matricule": 20250117, "lastName": "Mbarga" });
        let s: StudentIdentity = serde_json::from_value(value).unwrap();
        assert_eq!(s.student_number, "20250117");
        assert_eq!(s.full_name(), "MBARGA");
    }

    #[test]
    fn full_name_orders_family_name_first() {
        let s = StudentIdentity {
            first_name: "Aline".into(),
            last_name: "Ngo".into(),
            ..Default::default()
        };
        assert_eq!(s.full_name(), "NGO Aline");
    }
}
