mod common;

use common::fixtures::*;
use common::pdf_assertions::page_text_runs;
use common::{GeneratedPdf, TestResult};
use educafric_docs::master_sheet::ClassStatistics;
use educafric_docs::{
    generate_master_sheet, ColorScheme, DocumentError, Language, MasterSheetData,
    MasterSheetGenerator, MasterSheetOptions, Orientation, OverflowPolicy,
};

#[test]
fn test_demo_data_renders_for_every_scheme_and_orientation() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let data = MasterSheetGenerator::generate_demo_data();
    for scheme in ColorScheme::ALL {
        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            let options = MasterSheetOptions::default()
                .with_color_scheme(scheme)
                .with_orientation(orientation);
            let bytes = generate_master_sheet(&data, &options)?;
            assert!(!bytes.is_empty(), "{:?}/{:?} produced no bytes", scheme, orientation);

            let pdf = GeneratedPdf::from_bytes(bytes)?;
            assert_pdf_page_count!(pdf, 1);
            match orientation {
                Orientation::Landscape => {
                    assert_pdf_page_size!(pdf, 1, 841.89, 595.28);
                }
                Orientation::Portrait => {
                    assert_pdf_page_size!(pdf, 1, 595.28, 841.89);
                }
            }
            assert_pdf_contains_text!(pdf, "FICHE DE SYNTHÈSE DES NOTES");
            assert_pdf_contains_text!(pdf, "MBARGA Paul");
            assert_pdf_contains_text!(pdf, "AYISSI Linda");
        }
    }
    Ok(())
}

#[test]
fn test_statistics_block_matches_class_statistics() -> TestResult {
    let data = MasterSheetGenerator::generate_demo_data();
    let stats = ClassStatistics::compute(&data.students, 10.0).expect("demo class is not empty");
    let pdf = GeneratedPdf::from_bytes(generate_master_sheet(&data, &Default::default())?)?;

    assert_pdf_contains_text!(pdf, "Statistiques de la classe");
    let average = Language::Fr.format_score(stats.class_average);
    let expected_average = format!("Moyenne de la classe: {}", average);
    assert_pdf_contains_text!(pdf, expected_average.as_str());
    let rate = Language::Fr.format_percent(stats.success_rate);
    let expected_rate = format!("Taux de réussite: {}", rate);
    assert_pdf_contains_text!(pdf, expected_rate.as_str());
    assert_pdf_contains_text!(pdf, "Légende:");
    Ok(())
}

#[test]
fn test_optional_sections_can_be_disabled() -> TestResult {
    let data = MasterSheetGenerator::generate_demo_data();
    let options = MasterSheetOptions {
        include_statistics: false,
        include_absences: false,
        show_rankings: false,
        ..Default::default()
    };
    let pdf = GeneratedPdf::from_bytes(generate_master_sheet(&data, &options)?)?;
    assert_pdf_not_contains_text!(pdf, "Statistiques de la classe");
    assert_pdf_not_contains_text!(pdf, "Rang");
    assert_pdf_not_contains_text!(pdf, "Abs");
    Ok(())
}

#[test]
fn test_json_bag_with_english_options() -> TestResult {
    let options: MasterSheetOptions = serde_json::from_value(serde_json::json!({
        "language": "en",
        "format": "Letter",
        "orientation": "portrait",
        "colorScheme": "blue"
    }))?;
    let bytes =
        MasterSheetGenerator::new().with_options(options).generate_value(&master_sheet_data(5))?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_pdf_page_size!(pdf, 1, 612.0, 792.0);
    assert_pdf_contains_text!(pdf, "MASTER GRADE SHEET");
    assert_pdf_contains_text!(pdf, "Terminale C");
    assert_pdf_contains_text!(pdf, "M. Hamadou (Mathématiques)");
    assert_pdf_contains_text!(pdf, "by Secrétariat");
    assert_pdf_contains_text!(pdf, "Coef 5");
    Ok(())
}

#[test]
fn test_invalid_master_sheet_bag_is_rejected() {
    let mut data = master_sheet_data(3);
    data["students"][0]["grades"]["math"] = serde_json::json!(27);
    data["students"][1]["grades"]["physics"] = serde_json::json!(12);
    match MasterSheetGenerator::new().generate_value(&data) {
        Err(DocumentError::Validation(e)) => {
            let paths: Vec<&str> = e.issues.iter().map(|i| i.path.as_str()).collect();
            assert_eq!(paths, vec!["students[0].grades.math", "students[1].grades.physics"]);
        }
        other => panic!("expected a validation error, got {:?}", other.map(|b| b.len())),
    }
}

fn crowded_class() -> Result<MasterSheetData, serde_json::Error> {
    serde_json::from_value(master_sheet_data(60))
}

#[test]
fn test_truncate_policy_drops_overflowing_rows() -> TestResult {
    let data = crowded_class()?;
    let pdf = GeneratedPdf::from_bytes(generate_master_sheet(&data, &Default::default())?)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "M0000");
    assert_pdf_not_contains_text!(pdf, "M0059");
    Ok(())
}

#[test]
fn test_error_policy_reports_overflow() -> TestResult {
    let data = crowded_class()?;
    let options = MasterSheetOptions::default().with_overflow(OverflowPolicy::Error);
    match generate_master_sheet(&data, &options) {
        Err(DocumentError::Overflow { rendered, total }) => {
            assert_eq!(total, 60);
            assert!(rendered > 0 && rendered < total);
        }
        other => panic!("expected an overflow error, got {:?}", other.map(|b| b.len())),
    }
    Ok(())
}

#[test]
fn test_paginate_policy_continues_on_new_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let data = crowded_class()?;
    let options = MasterSheetOptions::default().with_overflow(OverflowPolicy::Paginate);
    let pdf = GeneratedPdf::from_bytes(generate_master_sheet(&data, &options)?)?;
    assert!(pdf.page_count() >= 2, "expected several pages, got {}", pdf.page_count());
    for matricule in ["M0000", "M0030", "M0059"] {
        assert_pdf_contains_text!(pdf, matricule);
    }

    let second_page = page_text_runs(&pdf.doc, 2);
    assert!(second_page.iter().any(|t| t == "FICHE DE SYNTHÈSE DES NOTES (suite)"));
    assert!(second_page.iter().any(|t| t == "Matricule"), "column headers are repeated");

    let last_page = page_text_runs(&pdf.doc, pdf.page_count() as u32);
    assert!(last_page.iter().any(|t| t == "Statistiques de la classe"));
    let first_page = page_text_runs(&pdf.doc, 1);
    assert!(!first_page.iter().any(|t| t == "Statistiques de la classe"));
    Ok(())
}

#[test]
fn test_empty_class_still_renders() -> TestResult {
    let data = MasterSheetData { class_name: "CM2".into(), ..Default::default() };
    let pdf = GeneratedPdf::from_bytes(generate_master_sheet(&data, &Default::default())?)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Moyenne de la classe: -");
    Ok(())
}

#[test]
fn test_null_rank_and_absences_are_tolerated() -> TestResult {
    let mut data = master_sheet_data(3);
    data["students"][0]["rank"] = serde_json::json!(null);
    data["students"][0]["absences"] = serde_json::json!(null);
    data["schoolInfo"]["educationLevel"] = serde_json::json!(null);
    let pdf = GeneratedPdf::from_bytes(MasterSheetGenerator::new().generate_value(&data)?)?;
    assert_pdf_contains_text!(pdf, "M0000");
    assert_pdf_contains_text!(pdf, "Lycée Technique de Garoua");
    Ok(())
}
