//! Printed captions in the two official languages.

use crate::model::EducationLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

pub struct Labels {
    pub country: &'static str,
    pub motto: &'static str,
    pub ministry_base: &'static str,
    pub ministry_secondary: &'static str,
    pub regional_delegation: &'static str,
    pub departmental_delegation: &'static str,
    pub generated_on: &'static str,
    pub version: &'static str,
    pub phone: &'static str,
    pub postal_box: &'static str,
    pub logo: &'static str,

    pub bulletin_title: &'static str,
    pub academic_year: &'static str,
    pub student_name: &'static str,
    pub class: &'static str,
    pub matricule: &'static str,
    pub birth_date: &'static str,
    pub birth_place: &'static str,
    pub gender: &'static str,
    pub subject: &'static str,
    pub term_short: &'static str,
    pub average_short: &'static str,
    pub coefficient_short: &'static str,
    pub weighted_short: &'static str,
    pub remark: &'static str,
    pub teacher: &'static str,
    pub totals: &'static str,
    pub no_grades: &'static str,
    pub general_average: &'static str,
    pub rank: &'static str,
    pub conduct: &'static str,
    pub absences: &'static str,
    pub lateness: &'static str,
    pub observations: &'static str,
    pub class_teacher_signature: &'static str,
    pub principal_signature: &'static str,
    pub verification_code: &'static str,
    pub verify_at: &'static str,

    pub master_sheet_title: &'static str,
    pub class_size: &'static str,
    pub number_short: &'static str,
    pub name: &'static str,
    pub absences_short: &'static str,
    pub statistics: &'static str,
    pub class_average: &'static str,
    pub highest_average: &'static str,
    pub lowest_average: &'static str,
    pub success_rate: &'static str,
    pub legend: &'static str,
    pub generated_by: &'static str,
    pub page: &'static str,
    pub continued: &'static str,
}

pub static FR: Labels = Labels {
    country: "RÉPUBLIQUE DU CAMEROUN",
    motto: "Paix - Travail - Patrie",
    ministry_base: "MINISTÈRE DE L'ÉDUCATION DE BASE",
    ministry_secondary: "MINISTÈRE DES ENSEIGNEMENTS SECONDAIRES",
    regional_delegation: "DÉLÉGATION RÉGIONALE DU",
    departmental_delegation: "DÉLÉGATION DÉPARTEMENTALE DU",
    generated_on: "Document généré le",
    version: "Version",
    phone: "Tél",
    postal_box: "BP",
    logo: "LOGO",

    bulletin_title: "BULLETIN DE NOTES",
    academic_year: "Année scolaire",
    student_name: "Nom et prénom",
    class: "Classe",
    matricule: "Matricule",
    birth_date: "Né(e) le",
    birth_place: "À",
    gender: "Sexe",
    subject: "Matière",
    term_short: "T",
    average_short: "Moy",
    coefficient_short: "Coef",
    weighted_short: "M x C",
    remark: "Appréciation",
    teacher: "Enseignant",
    totals: "TOTAUX",
    no_grades: "Aucune note disponible",
    general_average: "Moyenne générale",
    rank: "Rang",
    conduct: "Conduite",
    absences: "Absences",
    lateness: "Retards",
    observations: "Observations",
    class_teacher_signature: "Le Professeur Principal",
    principal_signature: "Le Chef d'Établissement",
    verification_code: "Code de vérification",
    verify_at: "Vérifiez l'authenticité sur",

    master_sheet_title: "FICHE DE SYNTHÈSE DES NOTES",
    class_size: "Effectif",
    number_short: "N°",
    name: "Nom et prénom",
    absences_short: "Abs",
    statistics: "Statistiques de la classe",
    class_average: "Moyenne de la classe",
    highest_average: "Plus forte moyenne",
    lowest_average: "Plus faible moyenne",
    success_rate: "Taux de réussite",
    legend: "Légende",
    generated_by: "par",
    page: "Page",
    continued: "suite",
};

pub static EN: Labels = Labels {
    country: "REPUBLIC OF CAMEROON",
    motto: "Peace - Work - Fatherland",
    ministry_base: "MINISTRY OF BASIC EDUCATION",
    ministry_secondary: "MINISTRY OF SECONDARY EDUCATION",
    regional_delegation: "REGIONAL DELEGATION OF",
    departmental_delegation: "DIVISIONAL DELEGATION OF",
    generated_on: "Generated on",
    version: "Version",
    phone: "Tel",
    postal_box: "P.O. Box",
    logo: "LOGO",

    bulletin_title: "REPORT CARD",
    academic_year: "Academic year",
    student_name: "Full name",
    class: "Class",
    matricule: "Student ID",
    birth_date: "Date of birth",
    birth_place: "Place of birth",
    gender: "Gender",
    subject: "Subject",
    term_short: "T",
    average_short: "Avg",
    coefficient_short: "Coef",
    weighted_short: "Avg x C",
    remark: "Remark",
    teacher: "Teacher",
    totals: "TOTALS",
    no_grades: "No grades available",
    general_average: "Overall average",
    rank: "Rank",
    conduct: "Conduct",
    absences: "Absences",
    lateness: "Late arrivals",
    observations: "Observations",
    class_teacher_signature: "Class Teacher",
    principal_signature: "The Principal",
    verification_code: "Verification code",
    verify_at: "Verify authenticity at",

    master_sheet_title: "MASTER GRADE SHEET",
    class_size: "Enrolment",
    number_short: "No",
    name: "Full name",
    absences_short: "Abs",
    statistics: "Class statistics",
    class_average: "Class average",
    highest_average: "Highest average",
    lowest_average: "Lowest average",
    success_rate: "Pass rate",
    legend: "Legend",
    generated_by: "by",
    page: "Page",
    continued: "continued",
};

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }

    /// Ministry responsible for the given level of education.
    pub fn ministry(self, level: EducationLevel) -> &'static str {
        let labels = self.labels();
        match level {
            EducationLevel::Base => labels.ministry_base,
            EducationLevel::Secondary => labels.ministry_secondary,
        }
    }

    /// Formats a score the way it is printed in tables: two decimals, with a
    /// decimal comma in French.
    pub fn format_score(self, value: f64) -> String {
        let text = format!("{:.2}", value);
        match self {
            Language::Fr => text.replace('.', ","),
            Language::En => text,
        }
    }

    pub fn format_percent(self, value: f64) -> String {
        let text = format!("{:.1}%", value);
        match self {
            Language::Fr => text.replace('.', ","),
            Language::En => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ministry_follows_education_level() {
        assert_eq!(Language::Fr.ministry(EducationLevel::Base), "MINISTÈRE DE L'ÉDUCATION DE BASE");
        assert_eq!(
            Language::En.ministry(EducationLevel::Secondary),
            "MINISTRY OF SECONDARY EDUCATION"
        );
    }

    #[test]
    fn scores_use_locale_separator() {
        assert_eq!(Language::Fr.format_score(12.5), "12,50");
        assert_eq!(Language::En.format_score(9.0), "9.00");
        assert_eq!(Language::Fr.format_percent(66.7), "66,7%");
    }
}
