//! Codebreaker - CLI
//!
//! Play Mastermind-style code breaking in the terminal, or score and analyze
//! guesses directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{analyze_guess, run_play, score_guess},
    game::{DEFAULT_LENGTH, DEFAULT_POOL, GameConfig},
    output::{print_analysis_result, print_score_result},
};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Mastermind-style code breaking with multiset-aware scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Characters the secret is drawn from
    #[arg(short, long, global = true, default_value = DEFAULT_POOL)]
    pool: String,

    /// Number of characters in the secret
    #[arg(short, long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Seed for reproducible secrets
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-by-line interactive game (default)
    Play,

    /// Full-screen terminal game
    Tui,

    /// Score a guess against a known secret
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Measure how a guess splits every possible secret
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = GameConfig::new(&cli.pool, cli.length).context("invalid game configuration")?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, rng),
        Commands::Tui => run_tui_command(config, rng),
        Commands::Score { secret, guess } => run_score_command(config, &secret, &guess),
        Commands::Analyze { guess } => run_analyze_command(&config, &guess),
    }
}

fn run_play_command(config: &GameConfig, mut rng: StdRng) -> Result<()> {
    let stats = run_play(config, &mut rng, io::stdin().lock(), io::stdout())?;

    if let Some(average) = stats.average_guesses() {
        println!(
            "Solved {} of {} games, {} guesses on average.",
            stats.games_solved,
            stats.games_started,
            format!("{average:.2}").bright_yellow()
        );
    }
    Ok(())
}

fn run_tui_command(config: GameConfig, rng: StdRng) -> Result<()> {
    use codebreaker::interactive::{App, run_tui};

    let app = App::new(config, rng);
    run_tui(app)
}

fn run_score_command(config: GameConfig, secret: &str, guess: &str) -> Result<()> {
    let length = config.length();
    let guess = score_guess(config, secret, guess)?;
    print_score_result(&guess, length);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, guess: &str) -> Result<()> {
    let total = codebreaker::analysis::space_size(config).unwrap_or(0);
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} secrets")
            .context("invalid progress template")?
            .progress_chars("█▓░"),
    );

    let result = analyze_guess(config, guess, |scored| bar.inc(scored));
    bar.finish_and_clear();

    print_analysis_result(&result?);
    Ok(())
}
