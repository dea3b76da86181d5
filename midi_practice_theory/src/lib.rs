// Music theory tables for the practice engine.
//
// Pure lookup and membership functions with no randomness. The prompt
// generator in `midi_practice_routine` uses these to filter candidate pitches
// (`NoteScale::contains`) and to pick chords rooted on scale degrees
// (`NoteScale::chords`).
//
// Architecture:
// - `notes.rs`: `BaseNote` pitch classes, enharmonic names, MIDI note formatting
// - `scale.rs`: `ScaleFamily` interval patterns and the `NoteScale` pitch-class set
// - `chord.rs`: `ChordQuality` offsets, `Chord` voicings, the `ChordTable`
// - `registry.rs`: `TheoryRegistry`, the immutable scale/chord registry built
//   once and passed by reference to consumers
//
// Pitches are MIDI note numbers (0..=127, 60 = C4). Membership tests take
// `i32` so out-of-range candidates can be rejected rather than wrapped.

pub mod chord;
pub mod notes;
pub mod registry;
pub mod scale;

pub use chord::{Chord, ChordQuality, ChordTable};
pub use notes::{BaseNote, MAX_MIDI_NOTE, format_midi_letter, format_midi_note};
pub use registry::TheoryRegistry;
pub use scale::{NoteScale, ScaleFamily};
