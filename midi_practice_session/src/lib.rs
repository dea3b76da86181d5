// Practice sessions: scoring live MIDI input against a generated routine.
//
// A session walks a built `Routine` prompt by prompt. Note-on events from the
// player are matched against the current prompt; once every note of the
// prompt has been played recently enough and hard enough, the prompt counts
// as a success and the session advances, wrapping back to the start after the
// last prompt.
//
// Architecture:
// - `midi_input.rs`: `MidiEvent`, decoded from raw channel messages via `midly`
// - `session.rs`: `PracticeSession`, success detection and play-rate stats
// - `error.rs`: `SessionError`
//
// Device enumeration and MIDI transport are left to the host; events arrive
// here already timestamped in milliseconds.

pub mod error;
pub mod midi_input;
pub mod session;

pub use error::SessionError;
pub use midi_input::{MidiEvent, MidiInstruction};
pub use session::{PracticeSession, PromptEntry, PromptSuccess, play_rate_label};
