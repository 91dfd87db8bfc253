//! Main entry point for the QB Ranker
//!
//! Parses the command line, loads configuration, sets up logging and runs the
//! requested command against the configured rating store.

use anyhow::Result;
use clap::{Parser, Subcommand};
use qb_ranker::config::AppConfig;
use qb_ranker::console::Console;
use qb_ranker::ranking::{render_table, standings, write_csv};
use qb_ranker::rating::{default_ratings, load_ratings, EloRatingCalculator, JsonFileRatingStore};
use qb_ranker::session::RankingSession;
use qb_ranker::{RatingCalculator, RatingStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// QB Ranker - rank quarterbacks one matchup at a time
#[derive(Parser)]
#[command(
    name = "qb-ranker",
    version,
    about = "Rank a roster of quarterbacks by picking the better one of each pair",
    long_about = "QB Ranker shows every pair of players exactly once, in random order, and \
                 updates Elo ratings after each choice. Ratings are saved after every change \
                 and the standings can be exported as CSV."
)]
struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Ratings file override
    #[arg(long, global = true, value_name = "FILE", help = "Override the ratings JSON file")]
    data_file: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug logging")]
    debug: bool,

    /// Shuffle seed override
    #[arg(long, global = true, value_name = "SEED", help = "Seed the pair shuffle")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank interactively (the default)
    Rank,
    /// Print the current standings
    Standings,
    /// Write the standings as CSV
    Export {
        /// Output path, defaults to the configured export file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Reset every rating to the default
    Reset,
}

/// Initialize structured logging with the configured level.
///
/// Logs go to stderr so they never interleave with the prompt on stdout.
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &cli.log_level {
        config.service.log_level = log_level.clone();
    }

    if cli.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(data_file) = &cli.data_file {
        config.storage.data_file = data_file.clone();
    }

    if let Some(seed) = cli.seed {
        config.roster.shuffle_seed = Some(seed);
    }

    qb_ranker::config::validate_config(&config)?;
    Ok(config)
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    let roster = config.roster()?;
    let calculator = Arc::new(EloRatingCalculator::new(config.rating.clone())?);
    info!("Rating calculator: elo {}", calculator.config());
    let store = Arc::new(JsonFileRatingStore::new(&config.storage.data_file));
    let rng = match config.roster.shuffle_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let session = RankingSession::new(roster, calculator, store, rng);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        session,
        stdin.lock(),
        stdout.lock(),
        config.storage.export_file.clone(),
    );

    console.run()?;
    info!("Ranking session {} finished", console.session().id());
    Ok(())
}

fn print_standings(config: &AppConfig) -> Result<()> {
    let roster = config.roster()?;
    let store = JsonFileRatingStore::new(&config.storage.data_file);
    let ratings = load_ratings(&store, &roster, config.rating.default_rating);

    print!("{}", render_table(&standings(&ratings)));
    Ok(())
}

fn export_standings(config: &AppConfig, output: Option<PathBuf>) -> Result<()> {
    let roster = config.roster()?;
    let store = JsonFileRatingStore::new(&config.storage.data_file);
    let ratings = load_ratings(&store, &roster, config.rating.default_rating);
    let path = output.unwrap_or_else(|| config.storage.export_file.clone());

    write_csv(&standings(&ratings), &path)?;
    println!("Rankings written to {}", path.display());
    Ok(())
}

fn reset_ratings(config: &AppConfig) -> Result<()> {
    let roster = config.roster()?;
    let store = JsonFileRatingStore::new(&config.storage.data_file);

    store.save(&default_ratings(&roster, config.rating.default_rating))?;
    println!(
        "All rankings have been reset to {}!",
        config.rating.default_rating
    );
    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} v{} using {}",
        config.service.name,
        qb_ranker::VERSION,
        config.storage.data_file.display()
    );

    let result = match cli.command.unwrap_or(Commands::Rank) {
        Commands::Rank => run_interactive(&config),
        Commands::Standings => print_standings(&config),
        Commands::Export { output } => export_standings(&config, output),
        Commands::Reset => reset_ratings(&config),
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}
