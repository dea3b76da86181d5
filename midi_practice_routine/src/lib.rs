// Practice routine generation.
//
// Turns a persisted, hierarchical routine definition plus the player's
// default settings into a concrete `Routine`: per part, a list of repetitions,
// each an ordered list of single-note or chord prompts.
//
// Architecture:
// - `settings.rs`: Sparse per-part overrides, the dense `PracticeSettings`
//   record, baked settings, and the persisted `RoutineSettings` document
// - `range.rs`: `NumberRange` start/end pairs used for note, fret, and octave bounds
// - `bake.rs`: Resolving a part's overrides against its parent record
// - `candidates.rs`: Expanding a note-range mode into candidate MIDI pitches
// - `prompt.rs`: Chord-quota + note-fill prompt generation and the shuffle
// - `routine.rs`: Multi-part orchestration with repeat/clone semantics
// - `error.rs`: `RoutineError`
//
// Every random choice for a part draws from that part's single
// `NumberGenerator`, threaded explicitly through prompt generation. With a
// seed in the settings, the whole routine is reproducible.

pub mod bake;
pub mod candidates;
pub mod error;
pub mod prompt;
pub mod range;
pub mod routine;
pub mod settings;

pub use bake::bake;
pub use error::RoutineError;
pub use prompt::{Prompt, PromptDisplay, generate_prompts};
pub use range::NumberRange;
pub use routine::{Routine, RoutinePart, RoutinePartRepetition, bake_parts, build_routine};
pub use settings::{
    BakedRoutinePartSettings, NoteRangeType, ParentType, PracticeOverrides, PracticeSettings,
    PracticeType, RoutinePartSettings, RoutineSettings, ScaleRef,
};
