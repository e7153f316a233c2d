//! Staff, clef, time signature, brace, connector, and header rendering.

use crate::model::{Clef, Exercise};

use super::constants::*;
use super::svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Header rendering
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_header(svg: &mut SvgBuilder, exercise: &Exercise, page_width: f64) {
    let center_x = page_width / 2.0;

    if let Some(ref title) = exercise.title {
        svg.text(
            center_x,
            PAGE_MARGIN_TOP + 22.0,
            title,
            22.0,
            "bold",
            HEADER_COLOR,
            "middle",
        );
    }

    if let Some(ref subtitle) = exercise.subtitle {
        svg.text(
            center_x,
            PAGE_MARGIN_TOP + 44.0,
            subtitle,
            14.0,
            "normal",
            HEADER_COLOR,
            "middle",
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Staff and brace rendering
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_staff_lines(svg: &mut SvgBuilder, x1: f64, x2: f64, staff_y: f64) {
    for i in 0..5 {
        let y = staff_y + i as f64 * STAFF_LINE_SPACING;
        svg.line(x1, y, x2, y, STAFF_COLOR, STAFF_LINE_WIDTH);
    }
}

pub(super) fn render_brace(svg: &mut SvgBuilder, x: f64, top_y: f64, bottom_y: f64) {
    let mid_y = (top_y + bottom_y) / 2.0;
    let h = bottom_y - top_y;
    let w = BRACE_WIDTH;

    let path = format!(
        "M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1} \
         C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
        x,
        top_y,
        x,
        top_y + h * 0.28,
        x - w,
        mid_y - h * 0.08,
        x - w,
        mid_y,
        x - w,
        mid_y + h * 0.08,
        x,
        bottom_y - h * 0.28,
        x,
        bottom_y,
    );
    svg.path(&path, "none", NOTE_COLOR, 2.5);
}

// ═══════════════════════════════════════════════════════════════════════
// Clef rendering
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_clef(svg: &mut SvgBuilder, x: f64, staff_y: f64, clef: Clef) {
    match clef {
        Clef::Treble => {
            // Spiral centered on the G4 line
            svg.treble_clef(x + 10.0, staff_y + 30.0);
        }
        Clef::Bass => {
            // Curl anchored on the F3 line
            svg.bass_clef(x + 10.0, staff_y + 10.0);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Time signature rendering
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_time_signature(svg: &mut SvgBuilder, x: f64, staff_y: f64, beats: u32) {
    let cx = x + TIME_SIG_SPACE / 2.0;
    let top_baseline = staff_y + 2.0 * STAFF_LINE_SPACING - 1.0;
    let bottom_baseline = staff_y + 4.0 * STAFF_LINE_SPACING - 1.0;

    svg.text(
        cx,
        top_baseline,
        &beats.to_string(),
        21.0,
        "bold",
        NOTE_COLOR,
        "middle",
    );
    svg.text(cx, bottom_baseline, "4", 21.0, "bold", NOTE_COLOR, "middle");
}

// ═══════════════════════════════════════════════════════════════════════
// Connectors and barlines
// ═══════════════════════════════════════════════════════════════════════

/// Vertical line joining the treble and bass staves at a measure boundary.
pub(super) fn render_system_barline(svg: &mut SvgBuilder, x: f64, treble_y: f64, bass_y: f64) {
    svg.line(
        x,
        treble_y,
        x,
        bass_y + STAFF_HEIGHT,
        BARLINE_COLOR,
        BARLINE_WIDTH,
    );
}
