// Practice session state machine.
//
// The routine is flattened into a queue of `PromptEntry`s (part order, then
// repetition order, then prompt order). Each entry remembers the minimum
// velocity and target BPM of the part it came from, since those can differ
// per part.
//
// Success detection: every note-on is recorded as an attempt. The current
// prompt succeeds when each of its notes has an attempt at that pitch, at or
// above the entry's minimum velocity, within the last `SUCCESS_WINDOW_MS`.
// A chord therefore has to be struck together, not arpeggiated slowly.
// After the last entry succeeds the queue wraps to the first and every
// entry's success flag is cleared.
//
// Rate stats look back over `RATE_WINDOW_MS` of successes. Until a full
// window has elapsed since the first success, the count is extrapolated to a
// per-minute figure.

use midi_practice_routine::{Prompt, Routine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::midi_input::{MidiEvent, MidiInstruction};

/// How recently a note must have been struck to count toward a prompt.
pub const SUCCESS_WINDOW_MS: u64 = 50;

/// Lookback for notes-per-minute.
pub const RATE_WINDOW_MS: u64 = 60_000;

/// Play-rate thresholds (notes per minute over target BPM) and the note value
/// each corresponds to, fastest first.
const RATE_LABELS: [(f64, &str); 10] = [
    (48.0, "1/256"),
    (24.0, "1/128"),
    (12.0, "1/64"),
    (6.0, "1/32"),
    (3.0, "1/16"),
    (1.5, "1/8"),
    (0.75, "1/4"),
    (0.375, "1/2"),
    (0.1875, "1"),
    (0.09375, "2"),
];

/// A queued prompt and its per-part scoring parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptEntry {
    pub prompt: Prompt,
    /// Index of the routine part this prompt came from.
    pub part: usize,
    pub min_success_velocity: u8,
    pub target_bpm: u32,
    pub success: bool,
    pub success_time_ms: Option<u64>,
}

/// Reported when the current prompt is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSuccess {
    pub prompt: Prompt,
    pub part: usize,
    pub time_ms: u64,
    /// This success finished the queue and the session started over.
    pub wrapped: bool,
}

#[derive(Debug, Clone, Copy)]
struct Attempt {
    time_ms: u64,
    pitch: u8,
    velocity: u8,
}

#[derive(Debug, Clone)]
pub struct PracticeSession {
    queue: Vec<PromptEntry>,
    current: usize,
    attempts: Vec<Attempt>,
    successes: Vec<PromptSuccess>,
    success_count: u32,
}

impl PracticeSession {
    pub fn new(routine: &Routine) -> Result<Self, SessionError> {
        let queue: Vec<PromptEntry> = routine
            .parts
            .iter()
            .enumerate()
            .flat_map(|(part_index, part)| {
                let settings = &part.settings.settings;
                part.prompts().map(move |prompt| PromptEntry {
                    prompt: prompt.clone(),
                    part: part_index,
                    min_success_velocity: settings.min_success_velocity,
                    target_bpm: settings.target_bpm,
                    success: false,
                    success_time_ms: None,
                })
            })
            .collect();

        if queue.is_empty() {
            return Err(SessionError::EmptyRoutine);
        }

        info!(prompts = queue.len(), parts = routine.parts.len(), "practice session started");
        Ok(PracticeSession {
            queue,
            current: 0,
            attempts: Vec::new(),
            successes: Vec::new(),
            success_count: 0,
        })
    }

    pub fn entries(&self) -> &[PromptEntry] {
        &self.queue
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &PromptEntry {
        &self.queue[self.current]
    }

    pub fn success_count(&self) -> u32 {
        self.success_count
    }

    /// Every success so far, oldest first.
    pub fn successes(&self) -> &[PromptSuccess] {
        &self.successes
    }

    /// Feed one MIDI event. Returns the completed prompt when this event
    /// finished it.
    pub fn handle_event(&mut self, event: &MidiEvent) -> Option<PromptSuccess> {
        if event.instruction != MidiInstruction::NoteOn {
            return None;
        }

        let now = event.time_ms;
        self.attempts.retain(|a| a.time_ms + SUCCESS_WINDOW_MS > now);
        self.attempts.push(Attempt {
            time_ms: now,
            pitch: event.pitch,
            velocity: event.velocity,
        });

        let entry = &self.queue[self.current];
        let complete = entry.prompt.notes.iter().all(|&note| {
            self.attempts.iter().any(|a| {
                a.time_ms + SUCCESS_WINDOW_MS > now
                    && a.pitch == note
                    && a.velocity >= entry.min_success_velocity
            })
        });
        if !complete {
            return None;
        }

        self.success_count += 1;
        let entry = &mut self.queue[self.current];
        entry.success = true;
        entry.success_time_ms = Some(now);
        debug!(index = self.current, label = %entry.prompt.label(), now, "prompt played");

        let mut success = PromptSuccess {
            prompt: entry.prompt.clone(),
            part: entry.part,
            time_ms: now,
            wrapped: false,
        };

        self.current += 1;
        if self.current >= self.queue.len() {
            self.current = 0;
            for entry in &mut self.queue {
                entry.success = false;
                entry.success_time_ms = None;
            }
            success.wrapped = true;
            info!(successes = self.success_count, "routine complete, starting over");
        }

        self.successes.push(success.clone());
        Some(success)
    }

    /// Successful prompts per minute as of `now_ms`.
    pub fn notes_per_minute(&self, now_ms: u64) -> f64 {
        let first = self.successes.first().map_or(now_ms, |s| s.time_ms);
        if now_ms <= first {
            return 0.0;
        }
        let elapsed = now_ms - first;

        let in_window = self
            .successes
            .iter()
            .filter(|s| s.time_ms + RATE_WINDOW_MS > now_ms)
            .count() as f64;

        if elapsed < RATE_WINDOW_MS {
            in_window * RATE_WINDOW_MS as f64 / elapsed as f64
        } else {
            in_window
        }
    }

    /// Notes per minute relative to the current prompt's target BPM.
    pub fn play_rate(&self, now_ms: u64) -> f64 {
        let bpm = self.current().target_bpm;
        if bpm == 0 {
            return 0.0;
        }
        self.notes_per_minute(now_ms) / bpm as f64
    }

    /// The note value the player is effectively playing, e.g. `"1/8"`.
    pub fn play_rate_display(&self, now_ms: u64) -> Option<&'static str> {
        play_rate_label(self.play_rate(now_ms))
    }

    /// End the session, returning the number of successful prompts.
    pub fn stop(&mut self) -> u32 {
        self.attempts.clear();
        info!(successes = self.success_count, "practice session stopped");
        self.success_count
    }
}

/// Note value for a play rate, or `None` below the slowest threshold.
pub fn play_rate_label(rate: f64) -> Option<&'static str> {
    RATE_LABELS
        .iter()
        .find(|(threshold, _)| rate >= *threshold)
        .map(|&(_, label)| label)
}
