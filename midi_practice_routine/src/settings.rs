// Routine settings: what the player edits and what generation consumes.
//
// Three shapes of the same practice-tunable fields:
// - `PracticeOverrides`: sparse, every field optional. One per routine part;
//   an absent field means "inherit from the parent record".
// - `PracticeSettings`: dense, every field present. The player's defaults
//   (the external "user settings" record) and the inner part of a baked record.
// - `BakedRoutinePartSettings`: a part's own structural tags (repeat count,
//   clone flag, parent selector) plus fully resolved `PracticeSettings`.
//   This is the only form the prompt generator reads.
//
// `RoutineSettings` is the persisted document (`id`, `appVersion`,
// `schemaVersion`, `name`, `parts`). Wire names are camelCase to match the
// stored JSON; enum tags are snake_case strings. Resolution between the
// shapes lives in `bake.rs`.

use serde::{Deserialize, Serialize};

use crate::range::NumberRange;

/// Schema version written into newly created routines.
pub const ROUTINE_SCHEMA_VERSION: &str = "0.0.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeType {
    #[default]
    Generated,
    Composed,
}

/// How a part's candidate pitches are described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteRangeType {
    /// Raw MIDI pitches from `note_range`.
    #[default]
    Notes,
    /// Fret span applied to every string of a standard-tuned guitar.
    Frets,
    /// Whole octaves from `octave_range`.
    Octaves,
}

/// Which record a part inherits unset fields from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentType {
    /// The player's default settings.
    #[default]
    Settings,
    /// The baked record of the immediately preceding part.
    Previous,
    /// The baked record of the first part.
    First,
}

/// Persisted scale reference, resolved through `TheoryRegistry::lookup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRef {
    pub set_name: String,
    pub base_note: String,
}

impl ScaleRef {
    pub fn new(set_name: impl Into<String>, base_note: impl Into<String>) -> Self {
        ScaleRef {
            set_name: set_name.into(),
            base_note: base_note.into(),
        }
    }
}

impl Default for ScaleRef {
    fn default() -> Self {
        ScaleRef::new("major", "C")
    }
}

/// Fully specified practice settings.
///
/// Missing fields in JSON fall back to `Default`, so a defaults file only
/// needs the values the player changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticeSettings {
    pub name: String,
    pub practice_type: PracticeType,
    #[serde(rename = "targetBPM")]
    pub target_bpm: u32,
    pub scale: ScaleRef,
    /// Number of prompt slots to try filling with chords.
    pub chord_ratio: u32,
    /// Label single notes (and chord roots) with their octave.
    pub require_octave: bool,
    /// Minimum note-on velocity that counts as playing a prompt note.
    pub min_success_velocity: u8,
    pub note_range_type: NoteRangeType,
    pub fret_range: NumberRange,
    pub octave_range: NumberRange,
    pub note_range: NumberRange,
    pub prompt_count: u32,
    /// Generator seed; `None` draws a fresh seed for every build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<f64>,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        PracticeSettings {
            name: String::new(),
            practice_type: PracticeType::Generated,
            target_bpm: 60,
            scale: ScaleRef::default(),
            chord_ratio: 0,
            require_octave: false,
            min_success_velocity: 1,
            note_range_type: NoteRangeType::Notes,
            fret_range: NumberRange::new(0, 12),
            octave_range: NumberRange::new(3, 5),
            note_range: NumberRange::new(48, 72),
            prompt_count: 16,
            seed: None,
        }
    }
}

impl PracticeSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Sparse counterpart of `PracticeSettings`: `None` inherits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticeOverrides {
    pub name: Option<String>,
    pub practice_type: Option<PracticeType>,
    #[serde(rename = "targetBPM")]
    pub target_bpm: Option<u32>,
    pub scale: Option<ScaleRef>,
    pub chord_ratio: Option<u32>,
    pub require_octave: Option<bool>,
    pub min_success_velocity: Option<u8>,
    pub note_range_type: Option<NoteRangeType>,
    pub fret_range: Option<NumberRange>,
    pub octave_range: Option<NumberRange>,
    pub note_range: Option<NumberRange>,
    pub prompt_count: Option<u32>,
    pub seed: Option<f64>,
}

/// One step of a routine as the player authored it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutinePartSettings {
    /// Extra passes after the first; a part yields `repeat_count + 1` repetitions.
    pub repeat_count: u32,
    /// Replay the first repetition's prompts instead of regenerating.
    pub clone_repeat: bool,
    pub parent_settings: ParentType,
    #[serde(flatten)]
    pub overrides: PracticeOverrides,
}

impl Default for RoutinePartSettings {
    fn default() -> Self {
        RoutinePartSettings {
            repeat_count: 1,
            clone_repeat: false,
            parent_settings: ParentType::Settings,
            overrides: PracticeOverrides::default(),
        }
    }
}

/// A part's structural tags plus its fully resolved settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakedRoutinePartSettings {
    pub repeat_count: u32,
    pub clone_repeat: bool,
    pub parent_settings: ParentType,
    #[serde(flatten)]
    pub settings: PracticeSettings,
}

/// The persisted routine document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineSettings {
    pub id: String,
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub schema_version: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub parts: Vec<RoutinePartSettings>,
}

impl RoutineSettings {
    /// A new routine with a single default part.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        RoutineSettings {
            id: id.into(),
            app_version: String::new(),
            schema_version: ROUTINE_SCHEMA_VERSION.to_string(),
            name: name.into(),
            parts: vec![RoutinePartSettings::default()],
        }
    }

    /// Append a default part and return it for editing.
    pub fn add_part(&mut self) -> &mut RoutinePartSettings {
        self.parts.push(RoutinePartSettings::default());
        let last = self.parts.len() - 1;
        &mut self.parts[last]
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
