//! Guess the Movie - CLI
//!
//! Poster guessing game with TUI and line modes, plus a simulator that plays
//! the whole catalog with an automated guesser.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guess_the_movie::{
    commands::{run_simple, run_simulation},
    engine::RoundConfig,
    guesser::GuesserType,
    movies::{Catalog, loader::load_from_file},
    output::print_simulation_statistics,
    scores::sink_for,
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "guess_the_movie",
    about = "Guess the movie behind a blurred poster, one character at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog: 'all' (default, embedded movies) or path to a tab-separated file
    #[arg(short, long, global = true, default_value = "all")]
    catalog: String,

    /// Wrong guesses allowed per round (1 to 99)
    #[arg(long, global = true, default_value_t = RoundConfig::DEFAULT_MAX_CHANCES)]
    max_chances: u32,

    /// Poster blur at the start of a round
    #[arg(long, global = true, default_value_t = RoundConfig::DEFAULT_MAX_BLUR)]
    max_blur: f32,

    /// Blur removed by each wrong guess
    #[arg(long, global = true, default_value_t = RoundConfig::DEFAULT_BLUR_STEP)]
    blur_step: f32,

    /// Player name; scores are kept in the score file when set
    #[arg(short, long, global = true)]
    player: Option<String>,

    /// Score file used for named players
    #[arg(long, global = true, default_value = "scores.json")]
    scores: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play every catalog title with an automated guesser
    Simulate {
        /// Guesser: candidate (default) or random
        #[arg(short, long, default_value = "candidate")]
        guesser: String,

        /// Limit number of titles to play
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the movie catalog based on the -c flag
fn load_catalog(catalog_mode: &str) -> Result<Catalog> {
    match catalog_mode {
        "all" => Ok(Catalog::embedded()),
        path => load_from_file(path).with_context(|| format!("failed to load catalog {path}")),
    }
}

/// Set up tracing; the TUI owns the terminal, so it logs to a file instead
fn init_logging(tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = if tui {
        let file = File::create("guess_the_movie.log").context("failed to create log file")?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!(e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(matches!(command, Commands::Play))?;

    let config = RoundConfig::new(cli.max_chances, cli.max_blur, cli.blur_step)?;
    let catalog = Arc::new(load_catalog(&cli.catalog)?);
    tracing::info!(movies = catalog.len(), "catalog loaded");

    match command {
        Commands::Play => run_play_command(&catalog, config, cli.player.as_deref(), &cli.scores),
        Commands::Simple => {
            let mut sink = sink_for(cli.player.as_deref(), &cli.scores);
            run_simple(&catalog, config, sink.as_mut())
        }
        Commands::Simulate { guesser, limit } => {
            run_simulate_command(&guesser, &catalog, config, limit);
            Ok(())
        }
    }
}

fn run_simulate_command(guesser_name: &str, catalog: &Catalog, config: RoundConfig, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Guess the Movie Simulation ");
    println!("{}", "═".repeat(70));
    println!("\nPlaying {} titles", limit.map_or(catalog.len(), |n| n.min(catalog.len())));
    println!("Guesser: {guesser_name}\n");

    let guesser = GuesserType::from_name(guesser_name, catalog);
    let stats = run_simulation(&guesser, catalog, config, limit);
    print_simulation_statistics(&stats, guesser_name);
}

fn run_play_command(
    catalog: &Arc<Catalog>,
    config: RoundConfig,
    player: Option<&str>,
    scores: &std::path::Path,
) -> Result<()> {
    use guess_the_movie::interactive::{App, run_tui};

    let app = App::new(catalog, config, sink_for(player, scores))?;
    run_tui(app)
}
