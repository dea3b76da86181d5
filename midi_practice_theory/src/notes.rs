// Pitch classes, note names, and MIDI note formatting.
//
// Pitch classes 0-11 map to canonical sharp names ("C#"), with flat aliases
// ("Db") accepted when parsing. Routine settings refer to base notes by name,
// so `BaseNote::from_name` is the single place enharmonic spellings resolve.

use serde::{Deserialize, Serialize};

/// Highest valid MIDI pitch.
pub const MAX_MIDI_NOTE: i32 = 127;

/// Canonical names indexed by pitch class.
pub const LETTER_NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// The twelve pitch classes. Enharmonic spellings share a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BaseNote {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl BaseNote {
    pub const ALL: [BaseNote; 12] = [
        BaseNote::C,
        BaseNote::CSharp,
        BaseNote::D,
        BaseNote::DSharp,
        BaseNote::E,
        BaseNote::F,
        BaseNote::FSharp,
        BaseNote::G,
        BaseNote::GSharp,
        BaseNote::A,
        BaseNote::ASharp,
        BaseNote::B,
    ];

    /// Pitch class, 0 = C.
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    /// The base note for a pitch class; values above 11 wrap.
    pub fn from_pitch_class(pc: u8) -> Self {
        Self::ALL[(pc % 12) as usize]
    }

    /// Canonical (sharp) name.
    pub fn name(self) -> &'static str {
        LETTER_NOTES[self as usize]
    }

    /// Parse a note name. Accepts sharps and flats in either `#`/`b` or
    /// `sharp`/`flat` spelling (e.g. "C#", "Db", "DFlat"), case-insensitive
    /// on the letter.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let mut chars = name.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let natural: i8 = match letter {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let accidental: i8 = match chars.as_str().to_ascii_lowercase().as_str() {
            "" => 0,
            "#" | "sharp" | "♯" => 1,
            "b" | "flat" | "♭" => -1,
            _ => return None,
        };

        Some(Self::from_pitch_class((natural + accidental).rem_euclid(12) as u8))
    }
}

/// Format a MIDI note with its octave. MIDI 0 is C-1, so 60 is "C4".
pub fn format_midi_note(midi_note: u8) -> String {
    let octave = i32::from(midi_note / 12) - 1;
    format!("{}{}", format_midi_letter(midi_note), octave)
}

/// Format a MIDI note as its pitch-class name only.
pub fn format_midi_letter(midi_note: u8) -> &'static str {
    LETTER_NOTES[(midi_note % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enharmonic_names_share_pitch_class() {
        assert_eq!(BaseNote::from_name("C#"), Some(BaseNote::CSharp));
        assert_eq!(BaseNote::from_name("Db"), Some(BaseNote::CSharp));
        assert_eq!(BaseNote::from_name("DFlat"), Some(BaseNote::CSharp));
        assert_eq!(BaseNote::from_name("Gb"), Some(BaseNote::FSharp));
        assert_eq!(BaseNote::from_name("Bb"), Some(BaseNote::ASharp));
    }

    #[test]
    fn accidentals_wrap_around_the_octave() {
        assert_eq!(BaseNote::from_name("Cb"), Some(BaseNote::B));
        assert_eq!(BaseNote::from_name("B#"), Some(BaseNote::C));
        assert_eq!(BaseNote::from_name("e#"), Some(BaseNote::F));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(BaseNote::from_name(""), None);
        assert_eq!(BaseNote::from_name("H"), None);
        assert_eq!(BaseNote::from_name("C##"), None);
    }

    #[test]
    fn canonical_name_roundtrips() {
        for note in BaseNote::ALL {
            assert_eq!(BaseNote::from_name(note.name()), Some(note));
            assert_eq!(BaseNote::from_pitch_class(note.pitch_class()), note);
        }
    }

    #[test]
    fn formats_midi_notes() {
        assert_eq!(format_midi_note(60), "C4");
        assert_eq!(format_midi_note(0), "C-1");
        assert_eq!(format_midi_note(61), "C#4");
        assert_eq!(format_midi_note(127), "G9");
        assert_eq!(format_midi_letter(69), "A");
    }
}
