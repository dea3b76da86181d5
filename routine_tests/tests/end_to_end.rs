// End-to-end tests: routine JSON in, prompts out, prompts played back.
//
// These go through the public crate APIs only. Generation scenarios use fixed
// seeds so every assertion is reproducible; the session tests replay a built
// routine as raw MIDI bytes and check that scoring walks the whole queue.

use midi_practice_prng::NumberGenerator;
use midi_practice_routine::{
    NumberRange, ParentType, PracticeOverrides, Routine, RoutinePartSettings, RoutineSettings,
    ScaleRef, bake_parts,
};
use midi_practice_session::PracticeSession;
use midi_practice_theory::{BaseNote, NoteScale, ScaleFamily};
use pretty_assertions::assert_eq;
use routine_tests::{build, play_prompt, seeded_defaults, single_part_routine, warmup_routine};

#[test]
fn generator_golden_value_and_reset() {
    let mut generator = NumberGenerator::new(100.0, 32);
    let first = generator.next();
    assert_eq!(first, 0.1484375);
    assert_ne!(generator.next(), first);

    generator.reset();
    assert_eq!(generator.next(), first);
}

#[test]
fn major_scale_membership() {
    let scale = NoteScale::new(BaseNote::C, &[2, 2, 1, 2, 2, 2]);
    assert_eq!(scale.notes(), &[0, 2, 4, 5, 7, 9, 11]);
    assert!(scale.contains(12));
    assert!(!scale.contains(25));
    assert!(!scale.contains(-2));
    assert!(!scale.contains(132));
    assert_eq!(ScaleFamily::Major.intervals(), &[2, 2, 1, 2, 2, 2]);
}

#[test]
fn chromatic_single_part_is_reproducible() {
    let settings = single_part_routine(PracticeOverrides {
        prompt_count: Some(4),
        chord_ratio: Some(0),
        scale: Some(ScaleRef::new("chromatic", "C")),
        note_range: Some(NumberRange::new(60, 72)),
        ..PracticeOverrides::default()
    });
    let defaults = seeded_defaults(42.0);

    let routine = build(&settings, &defaults);
    assert_eq!(routine.parts.len(), 1);
    assert_eq!(routine.parts[0].repetitions.len(), 1);

    let prompts = &routine.parts[0].repetitions[0].prompts;
    assert_eq!(prompts.len(), 4);
    for (i, prompt) in prompts.iter().enumerate() {
        assert_eq!(prompt.index, i);
        assert_eq!(prompt.notes.len(), 1);
        assert!((60..=72).contains(&prompt.notes[0]));
    }

    assert_eq!(build(&settings, &defaults), routine);
}

#[test]
fn chromatic_single_part_golden_notes() {
    let settings = single_part_routine(PracticeOverrides {
        prompt_count: Some(4),
        chord_ratio: Some(0),
        scale: Some(ScaleRef::new("chromatic", "C")),
        note_range: Some(NumberRange::new(60, 72)),
        ..PracticeOverrides::default()
    });
    let routine = build(&settings, &seeded_defaults(100.0));

    let notes: Vec<Vec<u8>> = routine.parts[0]
        .prompts()
        .map(|p| p.notes.clone())
        .collect();
    assert_eq!(notes, vec![vec![70], vec![65], vec![64], vec![62]]);
}

#[test]
fn first_parent_inherits_scale_but_not_overrides() {
    let settings = RoutineSettings {
        parts: vec![
            RoutinePartSettings {
                overrides: PracticeOverrides {
                    scale: Some(ScaleRef::new("minor", "A")),
                    prompt_count: Some(8),
                    ..PracticeOverrides::default()
                },
                ..RoutinePartSettings::default()
            },
            RoutinePartSettings {
                parent_settings: ParentType::First,
                overrides: PracticeOverrides {
                    prompt_count: Some(3),
                    ..PracticeOverrides::default()
                },
                ..RoutinePartSettings::default()
            },
            RoutinePartSettings {
                parent_settings: ParentType::Settings,
                ..RoutinePartSettings::default()
            },
        ],
        ..RoutineSettings::new("d", "inheritance")
    };
    let defaults = seeded_defaults(7.0);

    let baked = bake_parts(&settings, &defaults);
    assert_eq!(baked[1].settings.scale, baked[0].settings.scale);
    assert_eq!(baked[1].settings.scale, ScaleRef::new("minor", "A"));
    assert_eq!(baked[0].settings.prompt_count, 8);
    assert_eq!(baked[1].settings.prompt_count, 3);
    assert_eq!(baked[2].settings.scale, defaults.scale);

    let routine = build(&settings, &defaults);
    let sizes: Vec<usize> = routine
        .parts
        .iter()
        .map(|p| p.repetitions[0].prompts.len())
        .collect();
    assert_eq!(sizes, vec![8, 3, defaults.prompt_count as usize]);
}

#[test]
fn cloned_repetitions_are_deep_copies() {
    let mut settings = single_part_routine(PracticeOverrides::default());
    settings.parts[0].repeat_count = 2;
    settings.parts[0].clone_repeat = true;

    let mut routine = build(&settings, &seeded_defaults(3.0));
    let reps = &mut routine.parts[0].repetitions;
    assert_eq!(reps.len(), 3);
    assert_eq!(reps[0], reps[1]);
    assert_eq!(reps[0], reps[2]);

    reps[0].prompts[0].color = "changed".into();
    reps[0].prompts[1].notes.push(0);
    assert_ne!(reps[0], reps[1]);
    assert_eq!(reps[1], reps[2]);
}

#[test]
fn warmup_demo_builds() {
    let settings = warmup_routine();
    let routine = build(&settings, &seeded_defaults(100.0));

    assert_eq!(routine.parts.len(), 3);
    let names: Vec<&str> = routine.parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["G major, single notes", "G major, chords", "E minor, first five frets"]
    );

    // Cloned part: two identical repetitions of eight.
    let scales = &routine.parts[0];
    assert_eq!(scales.repetitions.len(), 2);
    assert_eq!(scales.repetitions[0], scales.repetitions[1]);
    assert!(scales.prompts().all(|p| !p.is_chord() && (55..=79).contains(&p.notes[0])));

    // Chord part inherits the scale, range and count from the previous part.
    let chords = &routine.parts[1];
    assert_eq!(chords.settings.settings.scale, ScaleRef::new("major", "G"));
    assert_eq!(chords.settings.settings.prompt_count, 8);
    assert_eq!(chords.settings.settings.min_success_velocity, 20);
    assert_eq!(chords.repetitions.len(), 1);
    let chord_prompts = chords.prompts().filter(|p| p.is_chord()).count();
    assert_eq!(chord_prompts, 3);

    // Fret part goes back to the first part, not the chord part.
    let frets = &routine.parts[2];
    assert_eq!(frets.settings.settings.chord_ratio, 0);
    assert!(!frets.settings.settings.require_octave);
    assert_eq!(frets.settings.settings.target_bpm, 72);
    assert_eq!(frets.prompts().count(), 12);
    let e_minor = NoteScale::new(BaseNote::E, ScaleFamily::Minor.intervals());
    assert!(frets.prompts().all(|p| {
        (40..=69).contains(&p.notes[0]) && e_minor.contains(i32::from(p.notes[0]))
    }));
}

#[test]
fn built_routine_survives_json() {
    let routine = build(&warmup_routine(), &seeded_defaults(11.0));
    let json = serde_json::to_string(&routine).unwrap();
    let back: Routine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, routine);
}

#[test]
fn same_seed_same_routine_json() {
    let a = build(&warmup_routine(), &seeded_defaults(5.0));
    let b = build(&warmup_routine(), &seeded_defaults(5.0));
    assert_eq!(
        serde_json::to_string_pretty(&a).unwrap(),
        serde_json::to_string_pretty(&b).unwrap()
    );

    let c = build(&warmup_routine(), &seeded_defaults(6.0));
    assert_ne!(a, c);
}

#[test]
fn playing_every_prompt_completes_the_routine() {
    let routine = build(&warmup_routine(), &seeded_defaults(100.0));
    let total = routine.prompt_count();
    let mut session = PracticeSession::new(&routine).unwrap();
    assert_eq!(session.entries().len(), total);

    let prompts: Vec<_> = session.entries().iter().map(|e| e.prompt.clone()).collect();
    let mut last = None;
    for (i, prompt) in prompts.iter().enumerate() {
        let time = 1_000 + i as u64 * 500;
        let success = play_prompt(&mut session, prompt, time);
        assert!(success.is_some(), "prompt {i} ({}) not accepted", prompt.label());
        last = success;
    }

    let last = last.unwrap();
    assert!(last.wrapped);
    assert_eq!(last.part, 2);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.stop(), total as u32);
}

#[test]
fn wrong_notes_do_not_advance() {
    let routine = build(&warmup_routine(), &seeded_defaults(100.0));
    let mut session = PracticeSession::new(&routine).unwrap();

    // The first part is G major single notes; G# is never asked for.
    let mut wrong = session.current().prompt.clone();
    wrong.notes = vec![68];
    assert_eq!(play_prompt(&mut session, &wrong, 1_000), None);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.success_count(), 0);
}
