// Immutable scale and chord registry.
//
// Builds every `ScaleFamily` on every `BaseNote` (with scale-degree chords
// resolved against one shared `ChordTable`) in a single constructor call.
// Consumers hold a `&TheoryRegistry`; nothing here is global or lazily
// mutated, so building a routine never depends on initialization order.
//
// Routine settings name scales by strings (`setName`, `baseNote`), and
// `lookup` is the bridge from those persisted names to a `NoteScale`.

use crate::chord::ChordTable;
use crate::notes::BaseNote;
use crate::scale::{NoteScale, ScaleFamily};

/// All built-in scales, keyed by family and base note.
#[derive(Debug, Clone)]
pub struct TheoryRegistry {
    chords: ChordTable,
    /// Indexed by `ScaleFamily::ALL` position, then pitch class.
    scales: Vec<Vec<NoteScale>>,
}

impl TheoryRegistry {
    pub fn new() -> Self {
        let chords = ChordTable::new();
        let scales = ScaleFamily::ALL
            .iter()
            .map(|&family| {
                BaseNote::ALL
                    .iter()
                    .map(|&base| {
                        NoteScale::with_chords(
                            base,
                            family.intervals(),
                            family.degree_qualities(),
                            &chords,
                        )
                    })
                    .collect()
            })
            .collect();

        TheoryRegistry { chords, scales }
    }

    pub fn chords(&self) -> &ChordTable {
        &self.chords
    }

    pub fn scale(&self, family: ScaleFamily, base: BaseNote) -> &NoteScale {
        let row = match family {
            ScaleFamily::Major => 0,
            ScaleFamily::Minor => 1,
            ScaleFamily::MajorPentatonic => 2,
            ScaleFamily::MinorPentatonic => 3,
            ScaleFamily::Chromatic => 4,
        };
        &self.scales[row][base.pitch_class() as usize]
    }

    /// Resolve persisted scale names, e.g. `("minor", "Eb")`.
    pub fn lookup(&self, set_name: &str, base_note: &str) -> Option<&NoteScale> {
        let family = ScaleFamily::from_name(set_name)?;
        let base = BaseNote::from_name(base_note)?;
        Some(self.scale(family, base))
    }
}

impl Default for TheoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
