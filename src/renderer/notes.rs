//! Note, stem, and ledger line rendering.

use crate::model::{Clef, Measure, Pitch};

use super::constants::*;
use super::layout::note_x_positions;
use super::svg_builder::SvgBuilder;

/// Render the notes of one measure onto one staff.
pub(super) fn render_measure_notes(
    svg: &mut SvgBuilder,
    measure: &Measure,
    clef: Clef,
    staff_y: f64,
    mx: f64,
    mw: f64,
) {
    if measure.notes.is_empty() {
        return;
    }

    let positions = note_x_positions(measure, mx, mw);

    for (note, &nx) in measure.notes.iter().zip(positions.iter()) {
        let note_y = staff_y + pitch_to_staff_y(&note.pitch, clef);

        render_ledger_lines(svg, nx, note_y, staff_y);
        svg.notehead(nx, note_y, note.duration.is_filled());

        if note.duration.has_stem() {
            // Notes on or below the middle line get upward stems.
            let stem_up = note_y >= staff_y + 2.0 * STAFF_LINE_SPACING;
            let (sx, sy1, sy2) = if stem_up {
                (nx + NOTEHEAD_RX - 1.0, note_y, note_y - STEM_LENGTH)
            } else {
                (nx - NOTEHEAD_RX + 1.0, note_y, note_y + STEM_LENGTH)
            };
            svg.line(sx, sy1, sx, sy2, NOTE_COLOR, STEM_WIDTH);
        }
    }
}

/// Vertical offset of a pitch from the top staff line.
///
/// Reference anchors: G4 sits on the second line of the treble staff,
/// F3 on the fourth line of the bass staff.
pub(super) fn pitch_to_staff_y(pitch: &Pitch, clef: Clef) -> f64 {
    let (ref_position, ref_y) = match clef {
        Clef::Treble => (4 * 7 + 4, 3.0 * STAFF_LINE_SPACING), // G4, line 2 from bottom
        Clef::Bass => (3 * 7 + 3, 1.0 * STAFF_LINE_SPACING),   // F3, line 4 from bottom
    };

    let staff_steps = pitch.diatonic_position() - ref_position;
    ref_y - staff_steps as f64 * (STAFF_LINE_SPACING / 2.0)
}

fn render_ledger_lines(svg: &mut SvgBuilder, x: f64, note_y: f64, staff_y: f64) {
    let top = staff_y;
    let bottom = staff_y + STAFF_HEIGHT;

    if note_y < top {
        let mut y = top - STAFF_LINE_SPACING;
        while y >= note_y - 1.0 {
            svg.line(
                x - NOTEHEAD_RX - LEDGER_LINE_EXTEND,
                y,
                x + NOTEHEAD_RX + LEDGER_LINE_EXTEND,
                y,
                STAFF_COLOR,
                LEDGER_LINE_WIDTH,
            );
            y -= STAFF_LINE_SPACING;
        }
    }

    if note_y > bottom {
        let mut y = bottom + STAFF_LINE_SPACING;
        while y <= note_y + 1.0 {
            svg.line(
                x - NOTEHEAD_RX - LEDGER_LINE_EXTEND,
                y,
                x + NOTEHEAD_RX + LEDGER_LINE_EXTEND,
                y,
                STAFF_COLOR,
                LEDGER_LINE_WIDTH,
            );
            y += STAFF_LINE_SPACING;
        }
    }
}
