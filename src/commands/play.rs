//! Line-oriented interactive play mode
//!
//! Reads guesses and commands line by line and writes the scored history
//! back. Generic over the reader and writer so it can be driven from tests.
//!
//! A line is submitted exactly as typed; surrounding whitespace is only
//! ignored when matching command words.

use crate::analysis::{SecretSpace, consistent_secrets, suggest};
use crate::core::{IndexSource, Secret};
use crate::game::{Game, GameConfig};
use crate::output::guess_line;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Totals for one play session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayStats {
    pub games_started: usize,
    pub games_solved: usize,
    /// Guesses needed for each solved game, in order
    pub solve_lengths: Vec<usize>,
}

impl PlayStats {
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.solve_lengths.is_empty() {
            return None;
        }
        Some(self.solve_lengths.iter().sum::<usize>() as f64 / self.solve_lengths.len() as f64)
    }
}

/// Words understood in place of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    History,
    Reset,
    New,
    Hint,
    Help,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "history" | "h" => Some(Self::History),
            "reset" | "r" => Some(Self::Reset),
            "new" | "n" => Some(Self::New),
            "hint" | "?" => Some(Self::Hint),
            "help" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Run the line-oriented game loop until `quit` or end of input
///
/// A line that is a valid guess is always treated as a guess, even if it
/// also spells a command word.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, W, S>(
    config: &GameConfig,
    rng: &mut S,
    input: R,
    mut output: W,
) -> io::Result<PlayStats>
where
    R: BufRead,
    W: Write,
    S: IndexSource + ?Sized,
{
    let space = SecretSpace::new(config.clone());
    let mut stats = PlayStats::default();
    let mut game = start_game(config, rng, &mut stats);

    print_intro(&mut output, config)?;

    let mut lines = input.lines();
    loop {
        write!(output, "Guess {}: ", game.guess_count() + 1)?;
        output.flush()?;

        let Some(text) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };
        let line = text.as_str();
        if line.is_empty() {
            continue;
        }

        let command = if config.validate(line).is_ok() {
            None
        } else {
            Command::parse(line.trim())
        };

        match command {
            Some(Command::Quit) => break,
            Some(Command::Help) => print_help(&mut output)?,
            Some(Command::History) => print_history(&mut output, &game)?,
            Some(Command::Reset) => {
                game.reset();
                writeln!(output, "🔄 History cleared. Same secret, fresh start.\n")?;
            }
            Some(Command::New) => {
                writeln!(
                    output,
                    "The secret was {}.\n🔄 New game started!\n",
                    game.secret().to_string().bright_yellow()
                )?;
                game = start_game(config, rng, &mut stats);
            }
            Some(Command::Hint) => print_hint(&mut output, &game, space.secrets())?,
            None => match game.submit_guess(line) {
                Ok(guess) => {
                    writeln!(
                        output,
                        "{}",
                        guess_line(game.guess_count(), &guess, game.length())
                    )?;

                    if game.is_solved() {
                        let turns = game.guess_count();
                        stats.games_solved += 1;
                        stats.solve_lengths.push(turns);
                        info!(turns, "game solved");

                        writeln!(
                            output,
                            "\n{} Solved in {} {}!\n",
                            "🎉".bold(),
                            turns.to_string().bright_cyan().bold(),
                            if turns == 1 { "guess" } else { "guesses" }
                        )?;
                        game = start_game(config, rng, &mut stats);
                        writeln!(output, "🔄 New game started!\n")?;
                    }
                }
                Err(err) => writeln!(output, "❌ {err}")?,
            },
        }
    }

    writeln!(
        output,
        "👋 Thanks for playing! The secret was {}.",
        game.secret()
    )?;
    Ok(stats)
}

fn start_game<S: IndexSource + ?Sized>(
    config: &GameConfig,
    rng: &mut S,
    stats: &mut PlayStats,
) -> Game {
    stats.games_started += 1;
    debug!(game = stats.games_started, "starting game");
    Game::new(config.clone(), rng)
}

fn print_intro<W: Write>(output: &mut W, config: &GameConfig) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Codebreaker - Interactive Mode               ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "I'm thinking of a {}-character code drawn from {}.",
        config.length(),
        config.pool().as_str().bright_yellow()
    )?;
    writeln!(output, "Characters may repeat.\n")?;
    print_help(output)
}

fn print_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "  ● correct character in the correct position")?;
    writeln!(output, "  ○ correct character in the wrong position\n")?;
    writeln!(
        output,
        "Commands: 'history', 'reset' (same secret), 'new' (new secret), 'hint', 'quit'\n"
    )
}

fn print_history<W: Write>(output: &mut W, game: &Game) -> io::Result<()> {
    if game.history().is_empty() {
        return writeln!(output, "No guesses yet.\n");
    }

    for (i, guess) in game.history().iter().enumerate() {
        writeln!(output, "{}", guess_line(i + 1, guess, game.length()))?;
    }
    writeln!(output)
}

fn print_hint<W: Write>(
    output: &mut W,
    game: &Game,
    secrets: Option<&[Secret]>,
) -> io::Result<()> {
    let Some(secrets) = secrets else {
        return writeln!(output, "Hints are unavailable: too many possible secrets.\n");
    };

    let candidates = consistent_secrets(game.history(), secrets);
    match suggest(secrets, &candidates) {
        Some((guess, metrics)) => writeln!(
            output,
            "💡 Try {} ({} secrets possible, {:.2} bits, worst case {})\n",
            guess.to_string().bright_yellow().bold(),
            candidates.len(),
            metrics.entropy,
            metrics.max_partition
        ),
        None => writeln!(output, "No secret matches the history.\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::io::Cursor;

    fn play(config: &GameConfig, seed: u64, script: &str) -> (PlayStats, String) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut output = Vec::new();
        let stats = run_play(config, &mut rng, Cursor::new(script), &mut output).unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    fn first_secret(config: &GameConfig, seed: u64) -> String {
        Secret::generate(config.pool(), config.length(), &mut StdRng::seed_from_u64(seed))
            .to_string()
    }

    #[test]
    fn command_parsing() {
        assert_eq!(Command::parse("QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse("?"), Some(Command::Hint));
        assert_eq!(Command::parse("reset"), Some(Command::Reset));
        assert_eq!(Command::parse("ABCD"), None);
    }

    #[test]
    fn play_solves_and_starts_new_game() {
        let config = GameConfig::default();
        let secret = first_secret(&config, 21);

        let (stats, output) = play(&config, 21, &format!("{secret}\nquit\n"));

        assert_eq!(stats.games_started, 2);
        assert_eq!(stats.games_solved, 1);
        assert_eq!(stats.solve_lengths, vec![1]);
        assert_eq!(stats.average_guesses(), Some(1.0));
        assert!(output.contains(&format!("{{text: \"{secret}\", correct: 4, close: 0}}")));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn play_reports_invalid_guesses() {
        let config = GameConfig::default();
        let (stats, output) = play(&config, 1, "AB\nABCZ\nquit\n");

        assert_eq!(stats.games_solved, 0);
        assert!(output.contains("Invalid guess length. required=4; provided=2"));
        assert!(output.contains("Guess includes invalid characters: required=ABCDEF; provided=ABCZ."));
    }

    #[test]
    fn play_ends_at_end_of_input() {
        let config = GameConfig::default();
        let guess = if first_secret(&config, 2) == "AAAA" { "BBBB" } else { "AAAA" };
        let (stats, output) = play(&config, 2, &format!("{guess}\n"));

        assert_eq!(stats.games_started, 1);
        assert_eq!(stats.games_solved, 0);
        assert!(output.contains(&format!("{{text: \"{guess}\"")));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn play_reset_keeps_secret() {
        let config = GameConfig::default();
        let secret = first_secret(&config, 8);

        let guess = if secret == "ABCD" { "FFFF" } else { "ABCD" };
        let (stats, output) = play(&config, 8, &format!("{guess}\nreset\nhistory\nquit\n"));

        assert_eq!(stats.games_started, 1);
        assert!(output.contains("History cleared"));
        assert!(output.contains("No guesses yet."));
        assert!(output.contains(&format!("The secret was {secret}.")));
    }

    #[test]
    fn play_hint_suggests_a_code() {
        let config = GameConfig::new("ABC", 3).unwrap();
        let (_, output) = play(&config, 4, "hint\nquit\n");

        assert!(output.contains("Try"));
        assert!(output.contains("27 secrets possible"));
    }

    #[test]
    fn valid_guess_wins_over_command_word() {
        // "hint" is a legal code here, so it must be scored, not treated as a command
        let config = GameConfig::new("hint", 4).unwrap();
        let (_, output) = play(&config, 3, "hint\nquit\n");

        assert!(output.contains("{text: \"hint\""));
        assert!(!output.contains("Try"));
    }

    #[test]
    fn padded_guess_is_rejected_not_trimmed() {
        let config = GameConfig::default();
        let (stats, output) = play(&config, 6, " ABCD \n quit \n");

        assert_eq!(stats.games_solved, 0);
        assert!(output.contains("Invalid guess length. required=4; provided=6"));
        assert!(!output.contains("{text: \"ABCD\""));
        assert!(output.contains("Thanks for playing"));
    }
}
