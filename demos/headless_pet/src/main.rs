//! Headless pet
//!
//! Drives a pet session from the command line with a simulated clock:
//! - Session settings loaded from an optional RON file
//! - Saves kept in memory or in a directory of JSON files
//! - A script of care actions, minigame results, waits and setting toggles
//!
//! ```text
//! headless_pet --save-dir ./saves --script "FEED,wait:60,PLAY,pudding:perfect:120,wait:300"
//! RUST_LOG=pompom_core=debug headless_pet --script "wait:3600"
//! ```

use clap::Parser;
use pompom_core::{ActionKind, Difficulty, MinigameId, MinigameResult, SettingsChange};
use pompom_session::{
    wall_clock_ms, BlobStore, FileStore, MemoryStore, Session, SessionConfig, StepReport,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "headless_pet")]
#[command(about = "Run a virtual pet without a screen")]
struct Args {
    /// Session config (RON); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for save files; saves stay in memory when omitted
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Comma-separated steps: FEED, PLAY, REST, MEDICATE, PET,
    /// <game>:<result>:<score>, wait:<seconds>, speed, pause, sound,
    /// difficulty:<easy|normal|hard>
    #[arg(long, default_value = "FEED,wait:60,PLAY,wait:240,PET")]
    script: String,

    /// Simulated frame length in milliseconds
    #[arg(long, default_value_t = 250)]
    frame_ms: u64,

    /// Start over with a fresh pet
    #[arg(long)]
    reset: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Act(ActionKind),
    Wait(u64),
    Setting(SettingsChange),
}

fn parse_step(raw: &str) -> Result<Step, String> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    let step = match parts.as_slice() {
        ["wait", secs] => Step::Wait(
            secs.parse()
                .map_err(|_| format!("Invalid wait duration: {secs}"))?,
        ),
        ["speed"] => Step::Setting(SettingsChange::ToggleSpeed),
        ["pause"] => Step::Setting(SettingsChange::TogglePause),
        ["sound"] => Step::Setting(SettingsChange::ToggleSound),
        ["difficulty", level] => Step::Setting(SettingsChange::SetDifficulty(
            Difficulty::parse(level).ok_or_else(|| format!("Unknown difficulty: {level}"))?,
        )),
        [game, result, score] => {
            let game =
                MinigameId::parse(game).ok_or_else(|| format!("Unknown minigame: {game}"))?;
            Step::Act(ActionKind::PlayMinigame {
                game,
                result: MinigameResult::parse_or_loss(Some(*result)),
                score: score
                    .parse()
                    .map_err(|_| format!("Invalid score: {score}"))?,
            })
        }
        [name] => Step::Act(ActionKind::from_parts(name, None)),
        _ => return Err(format!("Unrecognized step: {raw}")),
    };
    Ok(step)
}

fn report(report: &StepReport) {
    for (from, to) in &report.evolutions {
        println!("  ✨ {from} evolved into {to}");
    }
    for id in &report.gifts {
        println!("  🎁 gift unlocked: {id}");
    }
    for id in &report.achievements {
        println!("  🏆 achievement unlocked: {id}");
    }
    if report.died {
        println!("  💀 your pet has died");
    }
}

fn run<S: BlobStore>(
    session: &mut Session<S>,
    steps: &[Step],
    frame_ms: u64,
) -> pompom_session::Result<()> {
    // Simulated wall clock, anchored at the real start time
    let mut now = wall_clock_ms();

    for step in steps {
        match step {
            Step::Act(kind) => {
                println!("> {}", kind.type_name());
                let outcome = session.dispatch(kind.clone(), now)?;
                report(&outcome);
            }
            Step::Wait(secs) => {
                println!("> wait {secs}s");
                let mut remaining = secs.saturating_mul(1000);
                while remaining > 0 {
                    let frame = remaining.min(frame_ms.max(1));
                    remaining -= frame;
                    now += frame as i64;
                    let outcome = session.advance(frame, now)?;
                    report(&outcome);
                }
            }
            Step::Setting(change) => {
                println!("> {change:?}");
                session.change_settings(*change);
            }
        }
    }

    session.save(now)?;
    Ok(())
}

fn summarize<S: BlobStore>(session: &Session<S>) {
    let state = session.state();
    let stats = &state.stats;
    println!();
    println!(
        "{} ({}), tick {}",
        state.species,
        if state.alive { "alive" } else { "dead" },
        state.total_ticks
    );
    println!(
        "hunger {:.1}  happiness {:.1}  energy {:.1}  health {:.1}  affection {:.1}",
        stats.hunger, stats.happiness, stats.energy, stats.health, stats.affection
    );
    println!(
        "care actions: {} (feed {}, play {}, rest {}, medicate {}, pet {})",
        state.counters.total_actions,
        state.counters.feed,
        state.counters.play,
        state.counters.rest,
        state.counters.medicate,
        state.counters.pet
    );
    for gift in session.gifts() {
        println!("{} {} - {}", gift.icon, gift.name, gift.description);
    }
    for achievement in session.achievements() {
        println!("{} {} - {}", achievement.icon, achievement.name, achievement.description);
    }
    if let Some(created) = session.created_at() {
        println!("born {}", created.format("%Y-%m-%d %H:%M:%S UTC"));
    }
}

fn drive<S: BlobStore>(
    config: SessionConfig,
    store: S,
    args: &Args,
    steps: &[Step],
) -> pompom_session::Result<()> {
    let mut session = Session::open(config, store, wall_clock_ms())?;
    if let Some(status) = session.load_status() {
        tracing::info!(?status, "Loaded existing pet");
    }
    if args.reset {
        session.reset(wall_clock_ms())?;
    }

    run(&mut session, steps, args.frame_ms)?;
    summarize(&session);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SessionConfig::load_file(path)?,
        None => SessionConfig::default(),
    };
    let steps = args
        .script
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(parse_step)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(steps = steps.len(), storage_key = %config.storage_key, "Starting headless pet");

    match &args.save_dir {
        Some(dir) => drive(config, FileStore::new(dir), &args, &steps)?,
        None => drive(config, MemoryStore::new(), &args, &steps)?,
    }
    Ok(())
}
