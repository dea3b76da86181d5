// Fixtures for routine integration tests.
//
// Builds routines through the same public entry points the `routine` binary
// uses (`RoutineSettings::from_json`, `build_routine`) and drives practice
// sessions with raw MIDI bytes, so the tests cover parsing, baking,
// generation, and scoring end to end.
//
// See also: `tests/end_to_end.rs` for the scenarios.

use midi_practice_routine::{
    PracticeOverrides, PracticeSettings, Prompt, Routine, RoutinePartSettings, RoutineSettings,
    build_routine,
};
use midi_practice_session::{MidiEvent, PracticeSession, PromptSuccess};
use midi_practice_theory::TheoryRegistry;

/// The demo routine shipped in `demos/`.
pub const WARMUP_ROUTINE_JSON: &str = include_str!("../../demos/warmup_routine.json");

/// Velocity used for every note the helpers play.
pub const PLAY_VELOCITY: u8 = 100;

/// Built-in defaults with a fixed seed.
pub fn seeded_defaults(seed: f64) -> PracticeSettings {
    PracticeSettings {
        seed: Some(seed),
        ..PracticeSettings::default()
    }
}

pub fn warmup_routine() -> RoutineSettings {
    RoutineSettings::from_json(WARMUP_ROUTINE_JSON).unwrap()
}

/// A routine with one part that plays once.
pub fn single_part_routine(overrides: PracticeOverrides) -> RoutineSettings {
    RoutineSettings {
        parts: vec![RoutinePartSettings {
            repeat_count: 0,
            overrides,
            ..RoutinePartSettings::default()
        }],
        ..RoutineSettings::new("single", "single part")
    }
}

pub fn build(settings: &RoutineSettings, defaults: &PracticeSettings) -> Routine {
    build_routine(settings, defaults, &TheoryRegistry::new()).unwrap()
}

/// Strike every note of `prompt` at `time_ms` as raw channel-0 note-ons.
/// Returns the success reported by the last note that completed it.
pub fn play_prompt(
    session: &mut PracticeSession,
    prompt: &Prompt,
    time_ms: u64,
) -> Option<PromptSuccess> {
    let mut result = None;
    for &note in &prompt.notes {
        let event = MidiEvent::from_bytes(&[0x90, note, PLAY_VELOCITY], time_ms).unwrap();
        if let Some(success) = session.handle_event(&event) {
            result = Some(success);
        }
    }
    result
}
