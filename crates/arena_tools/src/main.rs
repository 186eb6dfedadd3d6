//! Arena command-line runner.
//!
//! # Usage
//!
//! ```bash
//! # List the fighters in a roster
//! cargo run -p arena_tools -- list
//!
//! # Run one battle with a fixed seed
//! cargo run -p arena_tools -- --seed 42 battle ember clerk
//!
//! # Run a tournament over the whole roster and save the report
//! cargo run -p arena_tools -- tournament --all --output results/bracket.json
//!
//! # Check a roster file for bad entries
//! cargo run -p arena_tools -- validate --roster data/roster.ron
//! ```
//!
//! Reports are JSON on stdout (or `--output`); logs go to stderr.

use std::path::{Path, PathBuf};

use arena_core::battle::run_battle;
use arena_core::catalog::Roster;
use arena_core::rng::SeededSource;
use arena_core::tournament::run_tournament;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arena_tools::config::ArenaConfig;
use arena_tools::report::RunReport;
use arena_tools::roster_loader::{default_roster_path, load_roster_or_default};
use arena_tools::validate::validate_roster_file;

#[derive(Parser)]
#[command(name = "arena-tools")]
#[command(about = "Run fighter battles and tournaments from a RON roster")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Roster file (defaults to $ARENA_ROSTER or data/roster.ron)
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Run configuration file (RON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the random source, overriding the config file
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Turn cap per battle, overriding the config file
    #[arg(long, global = true)]
    max_turns: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single battle
    Battle {
        /// First fighter id
        first: String,

        /// Second fighter id
        second: String,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a single-elimination tournament
    Tournament {
        /// Entrant ids in bracket order
        ids: Vec<String>,

        /// Enter every roster fighter, in roster order
        #[arg(long, conflicts_with = "ids")]
        all: bool,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a roster file for bad entries
    Validate,

    /// List roster fighters
    List,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr (stdout is for reports)
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = load_config(cli.config.as_deref()).with_overrides(cli.max_turns, cli.seed);

    match cli.command {
        Commands::Battle {
            first,
            second,
            output,
        } => {
            let roster = load_roster(cli.roster.as_deref());
            cmd_battle(&roster, &first, &second, config, output.as_deref());
        }
        Commands::Tournament { ids, all, output } => {
            let roster = load_roster(cli.roster.as_deref());
            let ids = if all {
                roster.ids().map(str::to_string).collect()
            } else {
                ids
            };
            cmd_tournament(&roster, &ids, config, output.as_deref());
        }
        Commands::Validate => cmd_validate(cli.roster),
        Commands::List => cmd_list(&load_roster(cli.roster.as_deref())),
    }
}

fn load_config(path: Option<&Path>) -> ArenaConfig {
    let Some(path) = path else {
        return ArenaConfig::default();
    };

    match ArenaConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}

fn load_roster(path: Option<&Path>) -> Roster {
    match load_roster_or_default(path) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to load roster: {e}");
            std::process::exit(1);
        }
    }
}

fn seeded(config: ArenaConfig) -> (u64, SeededSource) {
    let seed = config.seed.unwrap_or_else(SeededSource::random_seed);
    tracing::info!("Using seed {seed}");
    (seed, SeededSource::from_seed(seed))
}

fn cmd_battle(
    roster: &Roster,
    first: &str,
    second: &str,
    config: ArenaConfig,
    output: Option<&Path>,
) {
    let (seed, mut rng) = seeded(config);

    let result = match run_battle(roster, first, second, config.battle, &mut rng) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Battle failed: {e}");
            std::process::exit(1);
        }
    };

    for line in &result.log {
        tracing::debug!("{line}");
    }
    tracing::info!("{} after {} turns", result.winner_name, result.turns);

    if let Err(e) = RunReport::new(seed, config.battle, result).write(output) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn cmd_tournament(roster: &Roster, ids: &[String], config: ArenaConfig, output: Option<&Path>) {
    let (seed, mut rng) = seeded(config);

    let result = match run_tournament(roster, ids, config.battle, &mut rng) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Tournament failed: {e}");
            std::process::exit(1);
        }
    };

    if let Some(champion) = &result.champion {
        tracing::info!(
            "Champion: {} after {} rounds ({} battles)",
            champion.name,
            result.rounds.len(),
            result.battle_count()
        );
    }

    if let Err(e) = RunReport::new(seed, config.battle, result).write(output) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn cmd_validate(path: Option<PathBuf>) {
    let Some(path) = path.or_else(default_roster_path) else {
        tracing::error!("No roster file found (pass --roster or set ARENA_ROSTER)");
        std::process::exit(1);
    };

    tracing::info!("Validating roster: {}", path.display());
    match validate_roster_file(&path) {
        Ok(issues) if issues.is_empty() => tracing::info!("Validation passed"),
        Ok(issues) => {
            for issue in &issues {
                eprintln!("  {issue}");
            }
            tracing::error!("Validation failed: {} issue(s)", issues.len());
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Validation failed: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_list(roster: &Roster) {
    for fighter in roster.iter() {
        let stats = &fighter.stats;
        println!(
            "{:<12} {:<20} {:<10} hp {:>4}  atk {:>4}  def {:>4}  spd {:>4}  spc {:>4}  cost {:>4}",
            fighter.id,
            fighter.name,
            fighter.rarity.as_str(),
            stats.hp,
            stats.attack,
            stats.defense,
            stats.speed,
            stats.special,
            stats.cost
        );
    }
}
