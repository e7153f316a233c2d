//! Generator tests — beat-budget invariants and scripted-selection scenarios.

use pretty_assertions::assert_eq;

use sheetlib::config::GeneratorConfig;
use sheetlib::generator::{
    generate_exercise_with, generate_measure, Picker, RngPicker,
};
use sheetlib::model::{DurationKind, DurationOption, Pitch};
use sheetlib::SheetError;

/// Picker that replays a scripted sequence of indices, then repeats the
/// last one. The generator alternates duration picks and pitch picks, so
/// scripts list them interleaved.
struct SeqPicker {
    script: Vec<usize>,
    pos: usize,
}

impl SeqPicker {
    fn new(script: &[usize]) -> Self {
        Self {
            script: script.to_vec(),
            pos: 0,
        }
    }
}

impl Picker for SeqPicker {
    fn pick(&mut self, n: usize) -> usize {
        let idx = self
            .script
            .get(self.pos)
            .or_else(|| self.script.last())
            .copied()
            .unwrap_or(0);
        self.pos += 1;
        idx.min(n - 1)
    }
}

fn full_options() -> Vec<DurationOption> {
    vec![
        DurationOption::new(DurationKind::Whole),
        DurationOption::new(DurationKind::Half),
        DurationOption::new(DurationKind::Quarter),
    ]
}

// ─── Scripted scenarios ─────────────────────────────────────────────

#[test]
fn first_valid_option_fills_measure_with_one_whole_note() {
    let pool = vec![Pitch::new("c", 4)];
    let mut picker = SeqPicker::new(&[0]);

    let measure = generate_measure(&pool, &full_options(), 4, &mut picker).unwrap();

    assert_eq!(measure.notes.len(), 1);
    assert_eq!(measure.notes[0].duration, DurationKind::Whole);
    assert_eq!(measure.total_beats(), 4);
}

#[test]
fn quarter_only_vocabulary_yields_four_quarters() {
    let pool = vec![Pitch::new("c", 4)];
    let options = vec![DurationOption::new(DurationKind::Quarter)];
    let mut picker = SeqPicker::new(&[0]);

    let measure = generate_measure(&pool, &options, 4, &mut picker).unwrap();

    assert_eq!(measure.notes.len(), 4);
    assert_eq!(measure.total_beats(), 4);
    for note in &measure.notes {
        assert_eq!(note.duration, DurationKind::Quarter);
        assert_eq!(note.pitch.symbol(), "c/4");
    }
}

#[test]
fn forced_half_half_sequence_fills_measure_with_two_notes() {
    let pool = vec![Pitch::new("c", 4)];
    let options = vec![
        DurationOption::new(DurationKind::Whole),
        DurationOption::new(DurationKind::Half),
    ];
    // duration pick, pitch pick, duration pick, pitch pick.
    // Second duration pick sees only [half] (whole no longer fits).
    let mut picker = SeqPicker::new(&[1, 0, 0, 0]);

    let measure = generate_measure(&pool, &options, 4, &mut picker).unwrap();

    assert_eq!(measure.notes.len(), 2);
    assert_eq!(measure.notes[0].duration, DurationKind::Half);
    assert_eq!(measure.notes[1].duration, DurationKind::Half);
    assert_eq!(measure.total_beats(), 4);
}

#[test]
fn untileable_vocabulary_ends_measure_short_without_error() {
    let pool = vec![Pitch::new("c", 4)];
    // A 3-beat option fits once, leaving a 1-beat residual nothing fills.
    let options = vec![DurationOption {
        kind: DurationKind::Half,
        beats: 3,
    }];
    let mut picker = SeqPicker::new(&[0]);

    let measure = generate_measure(&pool, &options, 4, &mut picker).unwrap();

    assert_eq!(measure.notes.len(), 1);
    assert_eq!(measure.total_beats(), 3);
}

#[test]
fn overridden_beat_cost_is_carried_on_the_note() {
    let pool = vec![Pitch::new("c", 4)];
    // A half-note shape charged 3 beats: the note must report the charged
    // cost, not the symbolic kind's default of 2.
    let options = vec![DurationOption {
        kind: DurationKind::Half,
        beats: 3,
    }];
    let mut picker = SeqPicker::new(&[0]);

    let measure = generate_measure(&pool, &options, 4, &mut picker).unwrap();

    assert_eq!(measure.notes[0].duration, DurationKind::Half);
    assert_eq!(measure.notes[0].beats, 3);
    assert_eq!(measure.total_beats(), 3);
}

// ─── Failure semantics ──────────────────────────────────────────────

#[test]
fn empty_pitch_pool_fails_fast() {
    let mut picker = SeqPicker::new(&[0]);
    let err = generate_measure(&[], &full_options(), 4, &mut picker).unwrap_err();
    assert!(matches!(err, SheetError::EmptyPitchPool));
}

#[test]
fn vocabulary_with_nothing_fitting_fails_fast() {
    let pool = vec![Pitch::new("c", 4)];
    let options = vec![DurationOption {
        kind: DurationKind::Whole,
        beats: 6,
    }];
    let mut picker = SeqPicker::new(&[0]);
    let err = generate_measure(&pool, &options, 4, &mut picker).unwrap_err();
    assert!(matches!(err, SheetError::NoFittingDuration { budget: 4 }));
}

#[test]
fn misconfigured_exercise_is_rejected_by_validation() {
    let config = GeneratorConfig {
        bass_pool: Vec::new(),
        ..GeneratorConfig::default()
    };
    let err = generate_exercise_with(&config, &mut RngPicker::seeded(1)).unwrap_err();
    assert!(matches!(err, SheetError::EmptyPitchPool));
}

// ─── Invariant properties over many random exercises ────────────────

#[test]
fn generated_exercises_hold_all_invariants() {
    let config = GeneratorConfig::default();
    let treble_symbols: Vec<String> =
        config.treble_pool.iter().map(|p| p.symbol()).collect();
    let bass_symbols: Vec<String> = config.bass_pool.iter().map(|p| p.symbol()).collect();

    for seed in 0..100u64 {
        let mut picker = RngPicker::seeded(seed);
        let exercise = generate_exercise_with(&config, &mut picker).unwrap();

        assert_eq!(exercise.treble.len(), 4, "seed {seed}");
        assert_eq!(exercise.bass.len(), 4, "seed {seed}");

        for (measures, symbols) in [
            (&exercise.treble, &treble_symbols),
            (&exercise.bass, &bass_symbols),
        ] {
            for measure in measures.iter() {
                // The 1-beat quarter always fits a non-zero residual, so
                // every measure lands on the budget exactly.
                assert_eq!(measure.total_beats(), 4, "seed {seed}");

                // No note ever overflowed the budget at placement time.
                let mut placed = 0u32;
                for note in &measure.notes {
                    assert!(
                        placed + note.beats <= 4,
                        "seed {seed}: note placed past the budget"
                    );
                    placed += note.beats;

                    assert!(
                        symbols.contains(&note.pitch.symbol()),
                        "seed {seed}: pitch {} outside its pool",
                        note.pitch.symbol()
                    );
                }
            }
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_exercise() {
    let config = GeneratorConfig::default();
    let a = generate_exercise_with(&config, &mut RngPicker::seeded(42)).unwrap();
    let b = generate_exercise_with(&config, &mut RngPicker::seeded(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn pool_sizes_match_the_fixed_sets() {
    let config = GeneratorConfig::default();
    assert_eq!(config.treble_pool.len(), 12);
    assert_eq!(config.bass_pool.len(), 13);
    assert_eq!(config.treble_pool[0].symbol(), "c/4");
    assert_eq!(config.treble_pool[11].symbol(), "g/5");
    assert_eq!(config.bass_pool[0].symbol(), "e/2");
    assert_eq!(config.bass_pool[12].symbol(), "c/4");
}
