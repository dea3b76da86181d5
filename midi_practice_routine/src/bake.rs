// Baking: resolving a part's sparse overrides against a parent record.
//
// Every practice-tunable field takes the part's value when present and the
// parent's value otherwise. The structural tags (`repeat_count`,
// `clone_repeat`, `parent_settings`) always come from the part itself and are
// never inherited. Baking is a pure structural copy: it doesn't validate
// ranges or cross-field consistency.
//
// Choosing *which* parent record to bake against is the caller's job; see
// `routine::bake_parts`.

use crate::settings::{BakedRoutinePartSettings, PracticeSettings, RoutinePartSettings};

/// Resolve `part` against `parent`, producing a fully specified record.
pub fn bake(part: &RoutinePartSettings, parent: &PracticeSettings) -> BakedRoutinePartSettings {
    let o = &part.overrides;
    let p = parent;

    let settings = PracticeSettings {
        name: o.name.clone().unwrap_or_else(|| p.name.clone()),
        practice_type: o.practice_type.unwrap_or(p.practice_type),
        target_bpm: o.target_bpm.unwrap_or(p.target_bpm),
        scale: o.scale.clone().unwrap_or_else(|| p.scale.clone()),
        chord_ratio: o.chord_ratio.unwrap_or(p.chord_ratio),
        require_octave: o.require_octave.unwrap_or(p.require_octave),
        min_success_velocity: o.min_success_velocity.unwrap_or(p.min_success_velocity),
        note_range_type: o.note_range_type.unwrap_or(p.note_range_type),
        fret_range: o.fret_range.unwrap_or(p.fret_range),
        octave_range: o.octave_range.unwrap_or(p.octave_range),
        note_range: o.note_range.unwrap_or(p.note_range),
        prompt_count: o.prompt_count.unwrap_or(p.prompt_count),
        seed: o.seed.or(p.seed),
    };

    BakedRoutinePartSettings {
        repeat_count: part.repeat_count,
        clone_repeat: part.clone_repeat,
        parent_settings: part.parent_settings,
        settings,
    }
}
