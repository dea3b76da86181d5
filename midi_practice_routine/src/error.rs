// Error type for routine loading and generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutineError {
    /// The part's scale names a family the registry doesn't have.
    #[error("unknown scale family: {set_name:?}")]
    UnknownScaleFamily { set_name: String },

    /// The part's scale base note couldn't be parsed.
    #[error("unknown base note: {base_note:?}")]
    UnknownBaseNote { base_note: String },

    /// A note-fill slot needed a pitch but the note range and scale leave no
    /// playable candidates.
    #[error("part {part:?} has no playable notes in range for {prompt_count} prompts")]
    EmptyCandidatePool { part: String, prompt_count: u32 },

    /// Malformed routine or settings JSON.
    #[error("invalid routine JSON: {0}")]
    Json(#[from] serde_json::Error),
}
