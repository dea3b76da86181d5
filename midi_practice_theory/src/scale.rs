// Scale families and pitch-class scale membership.
//
// A scale is an ordered list of semitone steps walked from a fundamental,
// reduced mod 12 at every step. `NoteScale::contains` is octave-invariant:
// any MIDI pitch whose pitch class is in the scale matches, and pitches
// outside 0..=127 never match.
//
// Major and natural minor declare a triad quality per scale degree; the
// registry (`registry.rs`) resolves those against the `ChordTable` when it
// builds each scale. The pentatonic and chromatic families declare no
// qualities and therefore carry no chords.

use serde::{Deserialize, Serialize};

use crate::chord::{Chord, ChordQuality, ChordTable};
use crate::notes::{BaseNote, MAX_MIDI_NOTE};

/// Built-in scale interval patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    /// W W H W W W (H)
    Major,
    /// Natural minor: W H W W H W (W)
    Minor,
    MajorPentatonic,
    MinorPentatonic,
    /// All twelve half steps.
    Chromatic,
}

impl ScaleFamily {
    pub const ALL: [ScaleFamily; 5] = [
        ScaleFamily::Major,
        ScaleFamily::Minor,
        ScaleFamily::MajorPentatonic,
        ScaleFamily::MinorPentatonic,
        ScaleFamily::Chromatic,
    ];

    /// Semitone steps between consecutive degrees, starting at the
    /// fundamental. The step back to the octave is implied.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleFamily::Major => &[2, 2, 1, 2, 2, 2],
            ScaleFamily::Minor => &[2, 1, 2, 2, 1, 2],
            ScaleFamily::MajorPentatonic => &[2, 2, 3, 2],
            ScaleFamily::MinorPentatonic => &[3, 2, 2, 3],
            ScaleFamily::Chromatic => &[1; 11],
        }
    }

    /// Triad quality on each scale degree, or empty when the family has no
    /// diatonic harmony.
    pub fn degree_qualities(self) -> &'static [ChordQuality] {
        use ChordQuality::{Diminished, Major, Minor};
        match self {
            // I ii iii IV V vi vii°
            ScaleFamily::Major => &[Major, Minor, Minor, Major, Major, Minor, Diminished],
            // i ii° III iv v VI VII
            ScaleFamily::Minor => &[Minor, Diminished, Major, Minor, Minor, Major, Major],
            ScaleFamily::MajorPentatonic
            | ScaleFamily::MinorPentatonic
            | ScaleFamily::Chromatic => &[],
        }
    }

    /// Name used in persisted routine settings (`scale.setName`).
    pub fn name(self) -> &'static str {
        match self {
            ScaleFamily::Major => "major",
            ScaleFamily::Minor => "minor",
            ScaleFamily::MajorPentatonic => "major_pentatonic",
            ScaleFamily::MinorPentatonic => "minor_pentatonic",
            ScaleFamily::Chromatic => "chromatic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// A concrete scale: the pitch classes of a family rooted on a base note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteScale {
    fundamental: BaseNote,
    /// Pitch classes, fundamental first.
    notes: Vec<u8>,
    /// One chord per scale degree, when the family declares qualities.
    chords: Vec<Chord>,
}

impl NoteScale {
    /// Build a scale by walking `intervals` up from `fundamental`. The result
    /// has no chords.
    pub fn new(fundamental: BaseNote, intervals: &[u8]) -> Self {
        let mut notes = Vec::with_capacity(intervals.len() + 1);
        let mut current = fundamental.pitch_class();
        notes.push(current);
        for &interval in intervals {
            current = (current + interval) % 12;
            notes.push(current);
        }

        NoteScale {
            fundamental,
            notes,
            chords: Vec::new(),
        }
    }

    /// Build a scale and attach the chord of the given quality on each
    /// degree. Degrees beyond the end of `qualities` get no chord.
    pub fn with_chords(
        fundamental: BaseNote,
        intervals: &[u8],
        qualities: &[ChordQuality],
        table: &ChordTable,
    ) -> Self {
        let mut scale = Self::new(fundamental, intervals);
        scale.chords = scale
            .notes
            .iter()
            .zip(qualities)
            .map(|(&pc, &quality)| table.get(quality, pc).clone())
            .collect();
        scale
    }

    pub fn fundamental(&self) -> BaseNote {
        self.fundamental
    }

    pub fn notes(&self) -> &[u8] {
        &self.notes
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Whether a MIDI pitch belongs to the scale in any octave.
    pub fn contains(&self, note: i32) -> bool {
        if !(0..=MAX_MIDI_NOTE).contains(&note) {
            return false;
        }
        let pc = (note % 12) as u8;
        self.notes.contains(&pc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAJOR: [u8; 6] = [2, 2, 1, 2, 2, 2];

    #[test]
    fn created_with_specified_pattern() {
        let scale = NoteScale::new(BaseNote::C, &MAJOR);
        assert_eq!(scale.notes(), &[0, 2, 4, 5, 7, 9, 11]);
        assert!(scale.chords().is_empty());
    }

    #[test]
    fn walking_past_the_octave_wraps() {
        let scale = NoteScale::new(BaseNote::B, &MAJOR);
        assert_eq!(scale.notes(), &[11, 1, 3, 4, 6, 8, 10]);
    }

    #[test]
    fn contains_is_octave_invariant() {
        let scale = NoteScale::new(BaseNote::C, &MAJOR);
        assert!(scale.contains(12));
        assert!(!scale.contains(25));
        for &pc in scale.notes() {
            let mut note = pc as i32;
            while note <= MAX_MIDI_NOTE {
                assert!(scale.contains(note), "{note} should be in C major");
                note += 12;
            }
        }
    }

    #[test]
    fn contains_rejects_out_of_range() {
        let scale = NoteScale::new(BaseNote::C, &MAJOR);
        assert!(!scale.contains(-2));
        assert!(!scale.contains(-12));
        assert!(!scale.contains(128));
        assert!(!scale.contains(132));
    }

    #[test]
    fn family_patterns() {
        let minor = NoteScale::new(BaseNote::A, ScaleFamily::Minor.intervals());
        assert_eq!(minor.notes(), &[9, 11, 0, 2, 4, 5, 7]);

        let penta = NoteScale::new(BaseNote::C, ScaleFamily::MajorPentatonic.intervals());
        assert_eq!(penta.notes(), &[0, 2, 4, 7, 9]);

        let minor_penta = NoteScale::new(BaseNote::A, ScaleFamily::MinorPentatonic.intervals());
        assert_eq!(minor_penta.notes(), &[9, 0, 2, 4, 7]);

        let chromatic = NoteScale::new(BaseNote::C, ScaleFamily::Chromatic.intervals());
        assert_eq!(chromatic.notes().len(), 12);
        assert!((0..=MAX_MIDI_NOTE).all(|n| chromatic.contains(n)));
    }

    #[test]
    fn degree_chords_follow_declared_qualities() {
        let table = ChordTable::new();
        let family = ScaleFamily::Major;
        let scale = NoteScale::with_chords(
            BaseNote::C,
            family.intervals(),
            family.degree_qualities(),
            &table,
        );
        let names: Vec<(u8, ChordQuality)> = scale
            .chords()
            .iter()
            .map(|c| (c.fundamental(), c.quality()))
            .collect();
        assert_eq!(
            names,
            vec![
                (0, ChordQuality::Major),
                (2, ChordQuality::Minor),
                (4, ChordQuality::Minor),
                (5, ChordQuality::Major),
                (7, ChordQuality::Major),
                (9, ChordQuality::Minor),
                (11, ChordQuality::Diminished),
            ]
        );
    }

    #[test]
    fn family_names_roundtrip() {
        for family in ScaleFamily::ALL {
            assert_eq!(ScaleFamily::from_name(family.name()), Some(family));
        }
        assert_eq!(ScaleFamily::from_name("dorian"), None);
    }
}
