//! Export tests — convert a rendered sheet to PDF and sanity-check the bytes.

use sheetlib::generator::{generate_exercise_with, RngPicker};
use sheetlib::{exercise_to_json, exercise_to_pdf, GeneratorConfig};

#[test]
fn exported_pdf_has_pdf_header() {
    let exercise =
        generate_exercise_with(&GeneratorConfig::default(), &mut RngPicker::seeded(5)).unwrap();

    let pdf = exercise_to_pdf(&exercise, None).expect("PDF export failed");

    assert!(pdf.len() > 500, "PDF should not be trivially small");
    assert!(pdf.starts_with(b"%PDF-"), "output should be a PDF document");
}

#[test]
fn exercise_serializes_to_json() {
    let exercise =
        generate_exercise_with(&GeneratorConfig::default(), &mut RngPicker::seeded(5)).unwrap();

    let json = exercise_to_json(&exercise).unwrap();
    assert!(json.contains("\"treble\""));
    assert!(json.contains("\"bass\""));

    let back: sheetlib::Exercise = serde_json::from_str(&json).unwrap();
    assert_eq!(back, exercise);
}
