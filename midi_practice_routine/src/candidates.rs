// Candidate pitch expansion for a part's note-range mode.
//
// Bounds come straight from baked settings, which are never validated, so
// every mode intersects its range with the MIDI window 0..=127 before
// expanding. Huge or inverted bounds therefore yield at most a few hundred
// pitches, never an overflow. `scale_candidates` then drops anything not in
// the part's scale, which is the pool prompt generation draws from.

use std::ops::RangeInclusive;

use midi_practice_theory::{MAX_MIDI_NOTE, NoteScale};

use crate::settings::{NoteRangeType, PracticeSettings};

/// Open-string pitches of a standard-tuned six-string guitar, low E first.
pub const STANDARD_TUNING_OPEN_FRET_NOTES: [i32; 6] = [40, 45, 50, 55, 59, 64];

/// Every pitch the part's note-range mode describes, in generation order.
///
/// Fret mode lists each string in turn, so pitches reachable on several
/// strings appear once per string.
pub fn candidate_pitches(settings: &PracticeSettings) -> Vec<i32> {
    match settings.note_range_type {
        NoteRangeType::Notes => {
            let range = settings.note_range;
            midi_window(range.start, range.end).collect()
        }
        NoteRangeType::Frets => {
            let range = settings.fret_range;
            STANDARD_TUNING_OPEN_FRET_NOTES
                .iter()
                .flat_map(|&open| {
                    midi_window(
                        open.saturating_add(range.start),
                        open.saturating_add(range.end),
                    )
                })
                .collect()
        }
        NoteRangeType::Octaves => {
            let range = settings.octave_range;
            midi_window(range.start.saturating_mul(12), range.end.saturating_mul(12)).collect()
        }
    }
}

/// `low..=high` cut down to valid MIDI pitches.
fn midi_window(low: i32, high: i32) -> RangeInclusive<i32> {
    low.max(0)..=high.min(MAX_MIDI_NOTE)
}

/// Candidate pitches that are valid MIDI notes in `scale`.
pub fn scale_candidates(settings: &PracticeSettings, scale: &NoteScale) -> Vec<u8> {
    candidate_pitches(settings)
        .into_iter()
        .filter(|&n| scale.contains(n))
        .map(|n| n as u8)
        .collect()
}
