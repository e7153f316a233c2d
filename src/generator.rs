//! Measure and exercise generation: greedy random fill of a fixed beat
//! budget from a constrained duration vocabulary.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GeneratorConfig;
use crate::error::SheetError;
use crate::model::{DurationOption, Exercise, Measure, Note, Pitch};

/// Uniform "pick one of N" capability.
///
/// Production code uses [`RngPicker`]; tests substitute deterministic stubs
/// to script the generator's choices.
pub trait Picker {
    /// Return an index in `0..n`. Callers guarantee `n >= 1`.
    fn pick(&mut self, n: usize) -> usize;
}

/// Picker backed by a PCG generator.
pub struct RngPicker {
    rng: Pcg32,
}

impl RngPicker {
    /// Entropy-seeded picker — the unseeded production path.
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_entropy(),
        }
    }

    /// Seeded picker for reproducible sheets.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Picker for RngPicker {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

/// Fill one measure by greedy random selection.
///
/// Loops while the running beat counter is below `beats_per_measure`:
/// filters the options down to those whose cost still fits the residual
/// budget, stops early if none remain (the measure then legitimately ends
/// short), otherwise picks a duration and a pitch independently and appends
/// the note. The returned measure never exceeds the budget.
pub fn generate_measure(
    pitch_pool: &[Pitch],
    duration_options: &[DurationOption],
    beats_per_measure: u32,
    picker: &mut dyn Picker,
) -> Result<Measure, SheetError> {
    if pitch_pool.is_empty() {
        return Err(SheetError::EmptyPitchPool);
    }
    if !duration_options
        .iter()
        .any(|opt| opt.beats >= 1 && opt.beats <= beats_per_measure)
    {
        return Err(SheetError::NoFittingDuration {
            budget: beats_per_measure,
        });
    }

    let mut measure = Measure::new();
    let mut filled = 0u32;

    while filled < beats_per_measure {
        let residual = beats_per_measure - filled;
        let valid: Vec<&DurationOption> = duration_options
            .iter()
            .filter(|opt| opt.beats >= 1 && opt.beats <= residual)
            .collect();

        if valid.is_empty() {
            // No remaining option tiles the residual; accept the shortfall.
            break;
        }

        let option = valid[picker.pick(valid.len())];
        let pitch = pitch_pool[picker.pick(pitch_pool.len())].clone();

        measure.notes.push(Note {
            pitch,
            duration: option.kind,
            beats: option.beats,
        });
        filled += option.beats;
    }

    debug_assert!(filled <= beats_per_measure);
    Ok(measure)
}

/// Generate a full exercise from an explicit config and picker.
///
/// Treble and bass measures are generated independently; measure *i* of one
/// staff has no rhythmic relation to measure *i* of the other.
pub fn generate_exercise_with(
    config: &GeneratorConfig,
    picker: &mut dyn Picker,
) -> Result<Exercise, SheetError> {
    config.validate()?;

    let mut treble = Vec::with_capacity(config.measures_per_staff);
    let mut bass = Vec::with_capacity(config.measures_per_staff);

    for _ in 0..config.measures_per_staff {
        treble.push(generate_measure(
            &config.treble_pool,
            &config.duration_options,
            config.beats_per_measure,
            picker,
        )?);
        bass.push(generate_measure(
            &config.bass_pool,
            &config.duration_options,
            config.beats_per_measure,
            picker,
        )?);
    }

    debug!(
        "generated exercise: {} treble + {} bass measures",
        treble.len(),
        bass.len()
    );

    Ok(Exercise {
        title: Some(config.title.clone()),
        subtitle: Some(config.subtitle.clone()),
        treble,
        bass,
    })
}

/// Generate an exercise with the default pools and an entropy-seeded picker.
/// This is the one operation the surrounding application calls.
pub fn generate_exercise() -> Result<Exercise, SheetError> {
    generate_exercise_with(&GeneratorConfig::default(), &mut RngPicker::from_entropy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DurationKind;

    /// Always picks index 0.
    struct FirstPicker;

    impl Picker for FirstPicker {
        fn pick(&mut self, _n: usize) -> usize {
            0
        }
    }

    #[test]
    fn first_picker_fills_with_one_whole_note() {
        let pool = vec![Pitch::new("c", 4)];
        let options = vec![
            DurationOption::new(DurationKind::Whole),
            DurationOption::new(DurationKind::Half),
            DurationOption::new(DurationKind::Quarter),
        ];

        let measure = generate_measure(&pool, &options, 4, &mut FirstPicker).unwrap();

        assert_eq!(measure.notes.len(), 1);
        assert_eq!(measure.notes[0].duration, DurationKind::Whole);
        assert_eq!(measure.total_beats(), 4);
    }

    #[test]
    fn empty_pool_is_rejected() {
        let options = vec![DurationOption::new(DurationKind::Quarter)];
        let err = generate_measure(&[], &options, 4, &mut FirstPicker).unwrap_err();
        assert!(matches!(err, SheetError::EmptyPitchPool));
    }

    #[test]
    fn oversized_vocabulary_is_rejected() {
        let pool = vec![Pitch::new("c", 4)];
        let options = vec![DurationOption {
            kind: DurationKind::Whole,
            beats: 8,
        }];
        let err = generate_measure(&pool, &options, 4, &mut FirstPicker).unwrap_err();
        assert!(matches!(err, SheetError::NoFittingDuration { budget: 4 }));
    }
}
