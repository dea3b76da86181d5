// Routine building: baking every part and generating its repetitions.
//
// Parts bake in order. The first part always bakes against the player's
// defaults, whatever its own parent tag says. Each later part bakes against
// the defaults, the first part's baked record, or the previous part's baked
// record, per its `ParentType`.
//
// Each part gets one `NumberGenerator` (seeded from the baked `seed`, or from
// entropy when there is none) that every prompt draw for that part uses:
// - `clone_repeat`: prompts are generated once and every repetition holds its
//   own copy, so editing one repetition never touches another.
// - otherwise: each repetition is generated separately, continuing the same
//   generator stream, so repetitions differ even with a fixed seed.
//
// The built `Routine` keeps each part's generator and baked settings so a
// caller can trace or replay exactly what was generated.

use midi_practice_prng::{DEFAULT_BIT_LENGTH, NumberGenerator};
use midi_practice_theory::{BaseNote, NoteScale, ScaleFamily, TheoryRegistry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bake::bake;
use crate::candidates::scale_candidates;
use crate::error::RoutineError;
use crate::prompt::{Prompt, generate_prompts};
use crate::settings::{
    BakedRoutinePartSettings, ParentType, PracticeSettings, RoutineSettings, ScaleRef,
};

/// One pass through a part's prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutinePartRepetition {
    pub prompts: Vec<Prompt>,
}

/// A generated routine part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutinePart {
    pub name: String,
    /// The generator every draw for this part came from, in its post-build
    /// state. `reset()` it to replay from the part's seed.
    pub generator: NumberGenerator,
    pub repetitions: Vec<RoutinePartRepetition>,
    pub settings: BakedRoutinePartSettings,
}

impl RoutinePart {
    /// Every prompt of every repetition, in play order.
    pub fn prompts(&self) -> impl Iterator<Item = &Prompt> {
        self.repetitions.iter().flat_map(|r| r.prompts.iter())
    }
}

/// A fully generated practice routine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Routine {
    pub parts: Vec<RoutinePart>,
}

impl Routine {
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Total prompts across all parts and repetitions.
    pub fn prompt_count(&self) -> usize {
        self.parts.iter().map(|p| p.prompts().count()).sum()
    }
}

/// Bake every part of a routine, resolving parent selectors in order.
pub fn bake_parts(
    routine: &RoutineSettings,
    user_defaults: &PracticeSettings,
) -> Vec<BakedRoutinePartSettings> {
    let Some((first, rest)) = routine.parts.split_first() else {
        return Vec::new();
    };

    let mut baked = Vec::with_capacity(routine.parts.len());
    baked.push(bake(first, user_defaults));

    for part in rest {
        let parent = match part.parent_settings {
            ParentType::Settings => user_defaults,
            ParentType::First => &baked[0].settings,
            ParentType::Previous => &baked[baked.len() - 1].settings,
        };
        let next = bake(part, parent);
        baked.push(next);
    }

    baked
}

/// Build a routine. An empty `parts` list yields an empty routine.
pub fn build_routine(
    routine: &RoutineSettings,
    user_defaults: &PracticeSettings,
    registry: &TheoryRegistry,
) -> Result<Routine, RoutineError> {
    let parts = bake_parts(routine, user_defaults)
        .into_iter()
        .map(|baked| build_part(baked, registry))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(routine = %routine.name, parts = parts.len(), "built routine");
    Ok(Routine { parts })
}

fn build_part(
    baked: BakedRoutinePartSettings,
    registry: &TheoryRegistry,
) -> Result<RoutinePart, RoutineError> {
    let scale = resolve_scale(&baked.settings.scale, registry)?;
    let candidates = scale_candidates(&baked.settings, scale);
    let mut generator = match baked.settings.seed {
        Some(seed) => NumberGenerator::new(seed, DEFAULT_BIT_LENGTH),
        None => NumberGenerator::from_entropy(DEFAULT_BIT_LENGTH),
    };
    let total_reps = baked.repeat_count as usize + 1;

    debug!(
        part = %baked.settings.name,
        seed = generator.seed(),
        candidates = candidates.len(),
        total_reps,
        clone_repeat = baked.clone_repeat,
        "generating part"
    );

    let repetitions = if baked.clone_repeat {
        let prompts = generate_prompts(&baked, scale, &mut generator, &candidates)?;
        vec![RoutinePartRepetition { prompts }; total_reps]
    } else {
        (0..total_reps)
            .map(|_| {
                generate_prompts(&baked, scale, &mut generator, &candidates)
                    .map(|prompts| RoutinePartRepetition { prompts })
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(RoutinePart {
        name: baked.settings.name.clone(),
        generator,
        repetitions,
        settings: baked,
    })
}

fn resolve_scale<'a>(
    scale: &ScaleRef,
    registry: &'a TheoryRegistry,
) -> Result<&'a NoteScale, RoutineError> {
    let family =
        ScaleFamily::from_name(&scale.set_name).ok_or_else(|| RoutineError::UnknownScaleFamily {
            set_name: scale.set_name.clone(),
        })?;
    let base = BaseNote::from_name(&scale.base_note).ok_or_else(|| RoutineError::UnknownBaseNote {
        base_note: scale.base_note.clone(),
    })?;
    Ok(registry.scale(family, base))
}
