//! Sheet renderer — converts a generated Exercise into SVG output.
//!
//! The renderer computes its own layout from the musical content and
//! produces a self-contained SVG string: two joined staves (treble above,
//! bass below), clef and time signature on the first measure only, a brace
//! and connector at system start, and a barline spanning both staves at
//! every measure boundary.

mod constants;
mod layout;
mod notes;
mod staff;
mod svg_builder;

use crate::model::{Clef, Exercise};
use constants::*;
use layout::compute_layout;
use notes::render_measure_notes;
use staff::*;
use svg_builder::{empty_svg, SvgBuilder};

/// Render an Exercise into a complete SVG string.
///
/// `page_width` sets the SVG width in user units. Pass `None` to use the
/// default (850). The renderer takes a read-only view of the exercise and
/// retains nothing.
pub fn render_exercise_to_svg(exercise: &Exercise, page_width: Option<f64>) -> String {
    let page_width = match page_width {
        Some(w) if w > 0.0 => w,
        _ => DEFAULT_PAGE_WIDTH,
    };

    if exercise.measure_count() == 0 {
        return empty_svg("Empty exercise");
    }

    let layout = compute_layout(exercise, page_width);

    let mut svg = SvgBuilder::new(page_width, layout.height);

    // Background
    svg.rect(0.0, 0.0, page_width, layout.height, "white");

    render_header(&mut svg, exercise, page_width);

    // Staff lines run from the left margin (under the clef) to the system end.
    render_staff_lines(&mut svg, PAGE_MARGIN_LEFT, layout.x_end, layout.treble_y);
    render_staff_lines(&mut svg, PAGE_MARGIN_LEFT, layout.x_end, layout.bass_y);

    // Clef and time signature appear on the first measure only.
    render_clef(&mut svg, PAGE_MARGIN_LEFT + 5.0, layout.treble_y, Clef::Treble);
    render_clef(&mut svg, PAGE_MARGIN_LEFT + 5.0, layout.bass_y, Clef::Bass);
    render_time_signature(&mut svg, PAGE_MARGIN_LEFT + CLEF_SPACE, layout.treble_y, 4);
    render_time_signature(&mut svg, PAGE_MARGIN_LEFT + CLEF_SPACE, layout.bass_y, 4);

    // Brace and left connector joining the two staves.
    render_brace(
        &mut svg,
        PAGE_MARGIN_LEFT - 2.0,
        layout.treble_y,
        layout.bass_y + STAFF_HEIGHT,
    );
    render_system_barline(&mut svg, PAGE_MARGIN_LEFT, layout.treble_y, layout.bass_y);

    // Measures: notes on both staves, then the boundary barline.
    for (i, ml) in layout.measures.iter().enumerate() {
        render_measure_notes(
            &mut svg,
            &exercise.treble[i],
            Clef::Treble,
            layout.treble_y,
            ml.x,
            ml.width,
        );
        if let Some(bass) = exercise.bass.get(i) {
            render_measure_notes(&mut svg, bass, Clef::Bass, layout.bass_y, ml.x, ml.width);
        }

        render_system_barline(&mut svg, ml.x + ml.width, layout.treble_y, layout.bass_y);
    }

    svg.build()
}
