//! Data model for a generated practice exercise.
//!
//! These structures capture the musical information needed for rendering
//! sheet music and for JSON export.

use serde::{Deserialize, Serialize};

/// The staff variant a pitch pool belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    /// G clef — higher pitch range, top staff.
    Treble,
    /// F clef — lower pitch range, bottom staff.
    Bass,
}

/// Pitch of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    /// Note name: A, B, C, D, E, F, G
    pub step: String,
    /// Octave number (middle C = C4)
    pub octave: i32,
}

impl Pitch {
    pub fn new(step: &str, octave: i32) -> Self {
        Self {
            step: step.to_uppercase(),
            octave,
        }
    }

    /// Parse a `"c/4"`-style pitch symbol (letter name, slash, octave).
    /// Returns `None` for anything that is not a plain natural pitch.
    pub fn parse(symbol: &str) -> Option<Self> {
        let (step, octave) = symbol.split_once('/')?;
        let step = step.trim();
        if step.len() != 1 || !matches!(step.chars().next()?, 'a'..='g' | 'A'..='G') {
            return None;
        }
        let octave: i32 = octave.trim().parse().ok()?;
        Some(Self::new(step, octave))
    }

    /// Render as the `"c/4"` symbol form used by the pitch pools.
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.step.to_lowercase(), self.octave)
    }

    /// Absolute diatonic position (octave * 7 + step index) for staff layout.
    pub fn diatonic_position(&self) -> i32 {
        let step_index = match self.step.as_str() {
            "C" => 0,
            "D" => 1,
            "E" => 2,
            "F" => 3,
            "G" => 4,
            "A" => 5,
            "B" => 6,
            _ => 0,
        };
        self.octave * 7 + step_index
    }
}

/// Symbolic duration class of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationKind {
    /// Redonda — 4 beats.
    Whole,
    /// Blanca — 2 beats.
    Half,
    /// Negra — 1 beat.
    Quarter,
}

impl DurationKind {
    /// Beat cost in a 4/4 measure.
    pub fn beats(self) -> u32 {
        match self {
            DurationKind::Whole => 4,
            DurationKind::Half => 2,
            DurationKind::Quarter => 1,
        }
    }

    /// Whether the notehead is drawn filled (whole and half are hollow).
    pub fn is_filled(self) -> bool {
        matches!(self, DurationKind::Quarter)
    }

    /// Whether the note carries a stem.
    pub fn has_stem(self) -> bool {
        !matches!(self, DurationKind::Whole)
    }
}

/// One selectable duration: a symbolic kind plus its beat cost.
///
/// The cost is carried explicitly rather than derived from the kind so a
/// caller can set up vocabularies that cannot tile the measure evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationOption {
    pub kind: DurationKind,
    pub beats: u32,
}

impl DurationOption {
    pub fn new(kind: DurationKind) -> Self {
        Self {
            kind,
            beats: kind.beats(),
        }
    }
}

/// A single generated note. Immutable once created; no chords, no rests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: Pitch,
    pub duration: DurationKind,
    /// Beat cost charged against the measure budget. Equals
    /// `duration.beats()` under the standard vocabulary, but follows the
    /// selected [`DurationOption`] when a caller overrides the cost.
    pub beats: u32,
}

impl Note {
    pub fn new(pitch: Pitch, duration: DurationKind) -> Self {
        Self {
            pitch,
            beats: duration.beats(),
            duration,
        }
    }
}

/// A single measure (bar) of generated music.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub notes: Vec<Note>,
}

impl Measure {
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Sum of beat costs over all notes in the measure.
    pub fn total_beats(&self) -> u32 {
        self.notes.iter().map(|n| n.beats).sum()
    }
}

/// One complete generated grand-staff sheet: parallel treble and bass lines.
///
/// Created fresh on every generation request and superseded in full by the
/// next one; nothing mutates an exercise after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Sheet title, rendered in the header and carried into the PDF.
    pub title: Option<String>,
    /// Subtitle line under the title.
    pub subtitle: Option<String>,
    /// Treble (top staff) measures.
    pub treble: Vec<Measure>,
    /// Bass (bottom staff) measures.
    pub bass: Vec<Measure>,
}

impl Exercise {
    /// Number of measures per staff line (both lines are parallel).
    pub fn measure_count(&self) -> usize {
        self.treble.len()
    }

    /// The measures belonging to one staff.
    pub fn staff(&self, clef: Clef) -> &[Measure] {
        match clef {
            Clef::Treble => &self.treble,
            Clef::Bass => &self.bass,
        }
    }
}
