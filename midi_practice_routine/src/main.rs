// Practice routine generator: CLI entry point.
//
// Loads a persisted routine document (and optionally the player's default
// settings), builds every part, and prints the prompts. With `--json` the
// built routine is written to stdout as JSON instead.
//
// Usage:
//   cargo run -p midi_practice_routine -- <routine.json> [--defaults FILE]
//     [--seed N] [--json]
//
// `--seed` goes into the player's defaults, so it applies to every part that
// doesn't set its own seed. Set `RUST_LOG=debug` to see generation details.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use midi_practice_routine::{PracticeSettings, Routine, RoutineSettings, build_routine};
use midi_practice_theory::TheoryRegistry;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "routine", about = "Generate a MIDI practice routine", version)]
struct Args {
    /// Routine JSON file.
    routine: PathBuf,

    /// Player default settings JSON; built-in defaults when omitted.
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Generator seed for parts that don't set one.
    #[arg(long)]
    seed: Option<f64>,

    /// Print the built routine as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let settings = RoutineSettings::from_json(&read(&args.routine)?)
        .with_context(|| format!("parsing routine {}", args.routine.display()))?;

    let mut defaults = match &args.defaults {
        Some(path) => PracticeSettings::from_json(&read(path)?)
            .with_context(|| format!("parsing defaults {}", path.display()))?,
        None => PracticeSettings::default(),
    };
    if let Some(seed) = args.seed {
        defaults.seed = Some(seed);
    }

    let registry = TheoryRegistry::new();
    let routine = build_routine(&settings, &defaults, &registry)
        .with_context(|| format!("building routine {:?}", settings.name))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&routine)?);
    } else {
        print_routine(&settings, &routine);
    }
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn print_routine(settings: &RoutineSettings, routine: &Routine) {
    println!("=== {} ===", settings.name);
    println!("Parts: {}", routine.parts.len());
    println!("Prompts: {}", routine.prompt_count());

    for (i, part) in routine.parts.iter().enumerate() {
        let s = &part.settings.settings;
        println!();
        println!(
            "[{}] {} ({} {}, {} BPM, seed {})",
            i + 1,
            if part.name.is_empty() { "(unnamed)" } else { &part.name },
            s.scale.base_note,
            s.scale.set_name,
            s.target_bpm,
            part.generator.seed()
        );
        for (r, repetition) in part.repetitions.iter().enumerate() {
            let labels: Vec<String> = repetition.prompts.iter().map(|p| p.label()).collect();
            println!("  {:>2}: {}", r + 1, labels.join(" "));
        }
    }
}
