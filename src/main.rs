//! Country Guess - CLI
//!
//! Guess the country with TUI and line modes, plus scoreboard and catalog views.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use country_guess::{
    audio::TerminalBell,
    commands::{list_countries, run_simple, scoreboard},
    config::Settings,
    core::Catalog,
    game::Game,
    logging,
    output::{print_about, print_countries, print_scoreboard},
    regions::{embedded_catalog, loader::load_from_file},
    scores::{FileStore, Ledger},
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "country_guess",
    about = "Guess the country: every miss tells you how far away it is alphabetically",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for target selection (reproducible rounds)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Region table to use instead of the built-in one (CODE<TAB>Name per line)
    #[arg(short = 'r', long, global = true)]
    regions: Option<PathBuf>,

    /// Directory for the scoreboard and log file
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Turn off the terminal bell
    #[arg(short = 'm', long, global = true)]
    mute: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the scoreboard
    Scores {
        /// Only show the most recent N rounds
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List the guessable countries in alphabetical order
    Countries {
        /// Only names starting with this text (case-insensitive)
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// About this game
    About,
}

/// Merge command-line flags over file and environment settings
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to load settings")?;

    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.regions.is_some() {
        settings.regions.clone_from(&cli.regions);
    }
    if cli.data_dir.is_some() {
        settings.data_dir.clone_from(&cli.data_dir);
    }
    if cli.mute {
        settings.sound = false;
    }
    Ok(settings)
}

/// Load the catalog: custom region file if configured, otherwise built-in
fn load_catalog(regions: Option<&Path>) -> Result<Catalog> {
    match regions {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(embedded_catalog()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    let data_dir = settings.resolved_data_dir();

    if let Err(e) = logging::init(&data_dir, cli.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }
    info!(data_dir = %data_dir.display(), "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&settings, &data_dir),
        Commands::Simple => run_simple_command(&settings, &data_dir),
        Commands::Scores { limit } => {
            run_scores_command(&data_dir, limit);
            Ok(())
        }
        Commands::Countries { prefix } => {
            run_countries_command(&settings, prefix.as_deref())
        }
        Commands::About => {
            print_about();
            Ok(())
        }
    }
}

fn run_play_command(settings: &Settings, data_dir: &Path) -> Result<()> {
    use country_guess::interactive::{App, run_tui};

    let catalog = load_catalog(settings.regions.as_deref())?;
    let ledger = Ledger::load(FileStore::new(data_dir));
    let game = Game::new(&catalog, ledger, TerminalBell::new(settings.sound), settings.seed)?;

    run_tui(App::new(game, settings.time_window_secs))
}

fn run_simple_command(settings: &Settings, data_dir: &Path) -> Result<()> {
    let catalog = load_catalog(settings.regions.as_deref())?;
    let ledger = Ledger::load(FileStore::new(data_dir));
    let mut game = Game::new(&catalog, ledger, TerminalBell::new(settings.sound), settings.seed)?;

    run_simple(&mut game)
}

fn run_scores_command(data_dir: &Path, limit: Option<usize>) {
    let ledger = Ledger::load(FileStore::new(data_dir));
    print_scoreboard(&scoreboard(&ledger, limit));
}

fn run_countries_command(settings: &Settings, prefix: Option<&str>) -> Result<()> {
    let catalog = load_catalog(settings.regions.as_deref())?;
    print_countries(&list_countries(&catalog, prefix));
    Ok(())
}
