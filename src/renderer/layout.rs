//! Layout computation — sizes the single system, positions its measures,
//! and maps beat onsets to x positions within a measure.

use crate::model::{Exercise, Measure};

use super::constants::*;

pub(super) struct SheetLayout {
    pub(super) height: f64,
    pub(super) x_end: f64,
    pub(super) treble_y: f64,
    pub(super) bass_y: f64,
    pub(super) measures: Vec<MeasureLayout>,
}

pub(super) struct MeasureLayout {
    pub(super) x: f64,
    pub(super) width: f64,
}

/// Compute the sheet layout: one system, two staves, equal-width measures
/// running from the end of the clef/time prefix to the right margin.
pub(super) fn compute_layout(exercise: &Exercise, page_width: f64) -> SheetLayout {
    let prefix = CLEF_SPACE + TIME_SIG_SPACE;
    let x_start = PAGE_MARGIN_LEFT + prefix;
    let x_end = page_width - PAGE_MARGIN_RIGHT;

    let count = exercise.measure_count().max(1);
    let measure_width = (x_end - x_start) / count as f64;

    let measures = (0..exercise.measure_count())
        .map(|i| MeasureLayout {
            x: x_start + i as f64 * measure_width,
            width: measure_width,
        })
        .collect();

    let treble_y = FIRST_STAFF_TOP;
    let bass_y = treble_y + STAFF_HEIGHT + GRAND_STAFF_GAP;
    let height = bass_y + STAFF_HEIGHT + PAGE_MARGIN_BOTTOM;

    SheetLayout {
        height,
        x_end,
        treble_y,
        bass_y,
        measures,
    }
}

/// X position of each note in a measure, spread proportionally to its beat
/// onset across the measure's usable width.
pub(super) fn note_x_positions(measure: &Measure, mx: f64, mw: f64) -> Vec<f64> {
    let usable = (mw - NOTE_INSET_LEFT - NOTE_INSET_RIGHT).max(0.0);
    let span = measure.total_beats().max(1) as f64;

    let mut positions = Vec::with_capacity(measure.notes.len());
    let mut onset = 0u32;
    for note in &measure.notes {
        let x = mx + NOTE_INSET_LEFT + (onset as f64 / span) * usable;
        positions.push(x);
        onset += note.beats;
    }
    positions
}
