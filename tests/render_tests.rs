//! Rendering tests — generate exercises and render to SVG.

use sheetlib::config::DEFAULT_TITLE;
use sheetlib::generator::{generate_exercise_with, RngPicker};
use sheetlib::model::{DurationKind, Exercise, Measure, Note, Pitch};
use sheetlib::{render_exercise_to_svg, GeneratorConfig};

fn seeded_exercise(seed: u64) -> Exercise {
    generate_exercise_with(&GeneratorConfig::default(), &mut RngPicker::seeded(seed)).unwrap()
}

#[test]
fn render_produces_structured_svg() {
    let exercise = seeded_exercise(7);
    let svg = render_exercise_to_svg(&exercise, None);

    // Basic SVG structure checks
    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert!(svg.contains("viewBox="), "SVG should have viewBox");
    assert!(svg.contains(DEFAULT_TITLE), "SVG should contain title");

    // Staff lines
    assert!(svg.contains("<line"), "SVG should contain staff lines");

    // One notehead ellipse per generated note
    let note_count: usize = exercise
        .treble
        .iter()
        .chain(exercise.bass.iter())
        .map(|m| m.notes.len())
        .sum();
    let ellipse_count = svg.matches("<ellipse").count();
    assert_eq!(
        ellipse_count, note_count,
        "expected one notehead per note"
    );

    // Clef outlines and brace are path elements
    assert!(svg.contains("<path"), "SVG should contain clef paths");
}

#[test]
fn same_seed_renders_identical_svg() {
    let a = render_exercise_to_svg(&seeded_exercise(11), None);
    let b = render_exercise_to_svg(&seeded_exercise(11), None);
    assert_eq!(a, b);
}

#[test]
fn page_width_override_is_honored() {
    let exercise = seeded_exercise(3);
    let svg = render_exercise_to_svg(&exercise, Some(400.0));
    assert!(svg.contains(r#"width="400""#), "custom width should apply");
}

#[test]
fn whole_notes_render_hollow_and_quarters_filled() {
    let measure = |duration| Measure {
        notes: vec![Note::new(Pitch::new("c", 4), duration)],
    };
    let exercise = Exercise {
        title: None,
        subtitle: None,
        treble: vec![measure(DurationKind::Whole)],
        bass: vec![measure(DurationKind::Quarter)],
    };

    let svg = render_exercise_to_svg(&exercise, None);
    let hollow = svg
        .lines()
        .any(|l| l.contains("<ellipse") && l.contains(r#"fill="none""#));
    let filled = svg
        .lines()
        .any(|l| l.contains("<ellipse") && l.contains(r##"fill="#1a1a1a""##));
    assert!(hollow, "whole note should be hollow");
    assert!(filled, "quarter note should be filled");
}

#[test]
fn middle_c_below_treble_staff_gets_a_ledger_line() {
    let c4 = Measure {
        notes: vec![Note::new(Pitch::new("c", 4), DurationKind::Whole)],
    };
    let empty = Exercise {
        title: None,
        subtitle: None,
        treble: vec![c4.clone()],
        bass: vec![Measure::new()],
    };
    let without_ledger = Exercise {
        treble: vec![Measure {
            notes: vec![Note::new(Pitch::new("b", 4), DurationKind::Whole)],
        }],
        ..empty.clone()
    };

    let with = render_exercise_to_svg(&empty, None);
    let without = render_exercise_to_svg(&without_ledger, None);
    assert!(
        with.matches("<line").count() > without.matches("<line").count(),
        "middle C should add a ledger line"
    );
}

#[test]
fn empty_exercise_renders_placeholder() {
    let exercise = Exercise {
        title: None,
        subtitle: None,
        treble: Vec::new(),
        bass: Vec::new(),
    };
    let svg = render_exercise_to_svg(&exercise, None);
    assert!(svg.contains("Empty exercise"));
}
