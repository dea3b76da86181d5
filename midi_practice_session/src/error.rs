use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Raw bytes that don't form a MIDI message.
    #[error("invalid MIDI message: {0}")]
    Midi(#[from] midly::Error),

    #[error("routine has no prompts to practice")]
    EmptyRoutine,
}
