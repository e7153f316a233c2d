//! Generator configuration — the pitch pools, duration vocabulary, and
//! measure counts that used to be hardcoded application constants.
//!
//! Owning them as an explicit value (instead of hidden globals) lets tests
//! inject reduced pools and odd duration vocabularies.

use serde::{Deserialize, Serialize};

use crate::error::SheetError;
use crate::model::{DurationKind, DurationOption, Pitch};

/// Default sheet title, as printed on the exported PDF.
pub const DEFAULT_TITLE: &str = "Práctica de Piano: Clave de Sol y Fa";
/// Default subtitle line.
pub const DEFAULT_SUBTITLE: &str = "4 Compases Mixtos · Nivel Principiante";

/// Treble pitch pool symbols, c/4 through g/5.
const TREBLE_SYMBOLS: [&str; 12] = [
    "c/4", "d/4", "e/4", "f/4", "g/4", "a/4", "b/4", "c/5", "d/5", "e/5", "f/5", "g/5",
];

/// Bass pitch pool symbols, e/2 through c/4.
const BASS_SYMBOLS: [&str; 13] = [
    "e/2", "f/2", "g/2", "a/2", "b/2", "c/3", "d/3", "e/3", "f/3", "g/3", "a/3", "b/3", "c/4",
];

/// Everything the generator needs to produce one exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Eligible pitches for the treble staff.
    pub treble_pool: Vec<Pitch>,
    /// Eligible pitches for the bass staff.
    pub bass_pool: Vec<Pitch>,
    /// Duration vocabulary, identical for every measure.
    pub duration_options: Vec<DurationOption>,
    /// Measures generated per staff.
    pub measures_per_staff: usize,
    /// Beat budget of one measure.
    pub beats_per_measure: u32,
    /// Sheet title.
    pub title: String,
    /// Sheet subtitle.
    pub subtitle: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let parse_pool = |symbols: &[&str]| {
            symbols
                .iter()
                .filter_map(|s| Pitch::parse(s))
                .collect::<Vec<_>>()
        };

        Self {
            treble_pool: parse_pool(&TREBLE_SYMBOLS),
            bass_pool: parse_pool(&BASS_SYMBOLS),
            duration_options: vec![
                DurationOption::new(DurationKind::Whole),
                DurationOption::new(DurationKind::Half),
                DurationOption::new(DurationKind::Quarter),
            ],
            measures_per_staff: 4,
            beats_per_measure: 4,
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Check the preconditions the generator relies on: non-empty pools and
    /// at least one duration option that fits an empty measure.
    pub fn validate(&self) -> Result<(), SheetError> {
        if self.treble_pool.is_empty() || self.bass_pool.is_empty() {
            return Err(SheetError::EmptyPitchPool);
        }
        if !self
            .duration_options
            .iter()
            .any(|opt| opt.beats >= 1 && opt.beats <= self.beats_per_measure)
        {
            return Err(SheetError::NoFittingDuration {
                budget: self.beats_per_measure,
            });
        }
        Ok(())
    }
}
