// Prompt generation for one repetition of a routine part.
//
// Three phases, all drawing from the part's single `NumberGenerator`:
//
// 1. Chord quota: when the scale has degree chords, try to fill
//    `min(chord_ratio, prompt_count)` slots. Each slot draws a chord, gathers
//    candidate pitches with the chord's root pitch class, keeps only roots
//    whose whole voicing stays within MIDI range, and draws one. A slot with
//    no playable root is skipped without retrying another chord.
// 2. Note fill: every remaining slot (including skipped chord slots) draws a
//    single pitch from the candidate pool. An empty pool here is a
//    `RoutineError::EmptyCandidatePool`.
// 3. Shuffle: two passes, each swapping every position with an index drawn
//    from the whole list (with replacement).
//
// After the shuffle, `Prompt::index` is rewritten to each prompt's position.
// The draw order is part of the reproducibility contract: chord, root, color
// for chord slots; pitch, color for note slots; then the shuffle.

use std::fmt;

use midi_practice_prng::NumberGenerator;
use midi_practice_theory::{Chord, NoteScale, format_midi_letter, format_midi_note};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RoutineError;
use crate::settings::BakedRoutinePartSettings;

/// Palette prompts are colored from. Purely for telling prompts apart.
pub const COLOR_OPTIONS: [&str; 18] = [
    "emerald", "green", "lime", "red", "orange", "amber", "yellow", "teal", "cyan", "sky", "blue",
    "indigo", "violet", "purple", "fuchsia", "pink", "rose", "slate",
];

/// Number of full shuffle passes over a repetition's prompts.
pub const SHUFFLE_PASSES: usize = 2;

/// Label for one note or chord of a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDisplay {
    /// Note name, with octave when the part requires it.
    pub note: String,
    /// Chord quality suffix; empty for single notes and major chords.
    pub chord_type: String,
}

impl fmt::Display for PromptDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.chord_type)
    }
}

/// One thing for the player to play: a single note or a chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Position within its repetition.
    pub index: usize,
    /// Absolute MIDI pitches, root first for chords.
    pub notes: Vec<u8>,
    pub color: String,
    pub displays: Vec<PromptDisplay>,
}

impl Prompt {
    pub fn is_chord(&self) -> bool {
        self.notes.len() > 1
    }

    /// All display labels joined with spaces.
    pub fn label(&self) -> String {
        self.displays
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Generate `prompt_count` shuffled prompts for one repetition.
///
/// `candidates` must already be filtered to pitches in `scale` (see
/// `candidates::scale_candidates`).
pub fn generate_prompts(
    baked: &BakedRoutinePartSettings,
    scale: &NoteScale,
    generator: &mut NumberGenerator,
    candidates: &[u8],
) -> Result<Vec<Prompt>, RoutineError> {
    let settings = &baked.settings;
    let prompt_count = settings.prompt_count as usize;
    let mut prompts = Vec::with_capacity(prompt_count);

    let chords = scale.chords();
    if !chords.is_empty() {
        let quota = (settings.chord_ratio as usize).min(prompt_count);
        for slot in 0..quota {
            match chord_prompt(chords, generator, candidates, settings.require_octave) {
                Some(prompt) => prompts.push(prompt),
                None => warn!(
                    part = %settings.name,
                    slot,
                    "no playable chord root in range, slot left for note fill"
                ),
            }
        }
    }

    for _ in prompts.len()..prompt_count {
        let pick = generator
            .pick_index(candidates.len())
            .ok_or_else(|| RoutineError::EmptyCandidatePool {
                part: settings.name.clone(),
                prompt_count: settings.prompt_count,
            })?;
        let note = candidates[pick];
        let color = pick_color(generator);

        prompts.push(Prompt {
            index: prompts.len(),
            notes: vec![note],
            color,
            displays: vec![PromptDisplay {
                note: note_label(note, settings.require_octave),
                chord_type: String::new(),
            }],
        });
    }

    shuffle(&mut prompts, generator, SHUFFLE_PASSES);
    for (position, prompt) in prompts.iter_mut().enumerate() {
        prompt.index = position;
    }

    Ok(prompts)
}

/// Try to build one chord prompt. `None` when the drawn chord has no
/// playable root among the candidates.
fn chord_prompt(
    chords: &[Chord],
    generator: &mut NumberGenerator,
    candidates: &[u8],
    require_octave: bool,
) -> Option<Prompt> {
    let chord = &chords[generator.pick_index(chords.len())?];

    let roots: Vec<u8> = candidates
        .iter()
        .copied()
        .filter(|&n| n == chord.fundamental() || n % 12 == chord.fundamental())
        .filter(|&n| chord.is_playable_from(i32::from(n)))
        .collect();

    let root = roots[generator.pick_index(roots.len())?];
    let notes = chord
        .voicing(i32::from(root))
        .into_iter()
        .map(|n| n as u8)
        .collect();
    let color = pick_color(generator);

    Some(Prompt {
        index: 0,
        notes,
        color,
        displays: vec![PromptDisplay {
            note: note_label(root, require_octave),
            chord_type: chord.quality().suffix().to_string(),
        }],
    })
}

fn pick_color(generator: &mut NumberGenerator) -> String {
    let pick = generator.pick_index(COLOR_OPTIONS.len()).unwrap_or_default();
    COLOR_OPTIONS[pick].to_string()
}

fn note_label(note: u8, require_octave: bool) -> String {
    if require_octave {
        format_midi_note(note)
    } else {
        format_midi_letter(note).to_string()
    }
}

/// Shuffle in place: `passes` times, swap every position with an index drawn
/// uniformly from the whole slice.
///
/// Not an unbiased Fisher-Yates; the exact draw sequence is what keeps seeded
/// routines reproducible.
pub fn shuffle<T>(items: &mut [T], generator: &mut NumberGenerator, passes: usize) {
    for _ in 0..passes {
        for i in 0..items.len() {
            if let Some(j) = generator.pick_index(items.len()) {
                items.swap(i, j);
            }
        }
    }
}
