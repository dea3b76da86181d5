// Triad qualities, chord voicings, and the precomputed chord table.
//
// Chords use absolute semitone offsets from the fundamental: major {0,4,7},
// minor {0,3,7}, diminished {0,3,6}. A `Chord`'s `notes` are the fundamental
// pitch class plus each offset, *not* reduced mod 12 (G major is [7, 11, 14]),
// so a chord is anchored to one fundamental rather than a pitch-class set.
// `Chord::contains` is therefore exact equality with no octave reduction,
// unlike `NoteScale::contains`.
//
// `Chord::voicing` turns the chord into absolute MIDI pitches above a chosen
// root; the prompt generator rejects a root when any voiced note would pass
// MIDI 127 instead of clamping or dropping notes.

use serde::{Deserialize, Serialize};

use crate::notes::MAX_MIDI_NOTE;

/// Triad qualities used by scale-degree harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 3] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
    ];

    /// Semitone offsets from the fundamental.
    pub fn offsets(self) -> [u8; 3] {
        match self {
            ChordQuality::Major => [0, 4, 7],
            ChordQuality::Minor => [0, 3, 7],
            ChordQuality::Diminished => [0, 3, 6],
        }
    }

    /// Suffix appended to the root name in chord labels ("C", "Dm", "Bdim").
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
        }
    }
}

/// A chord of one quality anchored on one fundamental pitch class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    quality: ChordQuality,
    fundamental: u8,
    notes: Vec<u8>,
}

impl Chord {
    pub fn new(quality: ChordQuality, fundamental: u8) -> Self {
        let fundamental = fundamental % 12;
        Chord {
            quality,
            fundamental,
            notes: quality.offsets().iter().map(|&o| fundamental + o).collect(),
        }
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Pitch class of the root.
    pub fn fundamental(&self) -> u8 {
        self.fundamental
    }

    /// Fundamental plus each offset, unreduced.
    pub fn notes(&self) -> &[u8] {
        &self.notes
    }

    /// Exact membership: no octave reduction, no range check.
    pub fn contains(&self, note: i32) -> bool {
        self.notes.iter().any(|&n| i32::from(n) == note)
    }

    /// Absolute pitches of this chord built on `root`.
    ///
    /// Each chord note is taken relative to the first note; a note numerically
    /// below the first is lifted an octave first, so the voicing always sits
    /// at or above `root`.
    pub fn voicing(&self, root: i32) -> Vec<i32> {
        let base = match self.notes.first() {
            Some(&base) => i32::from(base),
            None => return Vec::new(),
        };
        self.notes
            .iter()
            .map(|&n| {
                let mut n = i32::from(n);
                if n < base {
                    n += 12;
                }
                root + (n - base)
            })
            .collect()
    }

    /// Whether every note of the voicing on `root` is a valid MIDI pitch.
    pub fn is_playable_from(&self, root: i32) -> bool {
        root >= 0 && self.voicing(root).iter().all(|&n| n <= MAX_MIDI_NOTE)
    }
}

/// Every chord quality on every pitch class, built once.
#[derive(Debug, Clone)]
pub struct ChordTable {
    /// Indexed by `ChordQuality::ALL` position, then pitch class.
    chords: Vec<Vec<Chord>>,
}

impl ChordTable {
    pub fn new() -> Self {
        let chords = ChordQuality::ALL
            .iter()
            .map(|&quality| (0..12).map(|pc| Chord::new(quality, pc)).collect())
            .collect();
        ChordTable { chords }
    }

    /// The chord of `quality` rooted on pitch class `pc` (wrapped mod 12).
    pub fn get(&self, quality: ChordQuality, pc: u8) -> &Chord {
        let row = match quality {
            ChordQuality::Major => 0,
            ChordQuality::Minor => 1,
            ChordQuality::Diminished => 2,
        };
        &self.chords[row][(pc % 12) as usize]
    }
}

impl Default for ChordTable {
    fn default() -> Self {
        Self::new()
    }
}
