//! Game state: the secret plus the ordered history of scored guesses

use super::GameConfig;
use crate::core::{Guess, GuessError, IndexSource, Score, Secret};
use tracing::{debug, info};

/// One game of Codebreaker
///
/// The game owns its secret and an append-only history of accepted guesses.
/// It never declares a win or loss itself; callers inspect the returned
/// [`Guess`] (or [`Game::is_solved`]) and decide.
///
/// # Examples
/// ```
/// use codebreaker::game::{Game, GameConfig};
///
/// let config = GameConfig::new("ABCDEF", 4).unwrap();
/// let mut game = Game::with_secret(config, "ABBA").unwrap();
///
/// let guess = game.submit_guess("BBAA").unwrap();
/// assert_eq!(guess.to_string(), r#"{text: "BBAA", correct: 2, close: 2}"#);
/// assert_eq!(game.guess_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    secret: Secret,
    guesses: Vec<Guess>,
}

impl Game {
    /// Start a game with a secret drawn from `rng`
    pub fn new<R: IndexSource + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let secret = Secret::generate(config.pool(), config.length(), rng);
        debug!(
            pool = config.pool().as_str(),
            length = config.length(),
            "generated secret"
        );

        Self {
            config,
            secret,
            guesses: Vec::new(),
        }
    }

    /// Start a game with an explicit secret
    ///
    /// The secret text is validated exactly like a guess.
    ///
    /// # Errors
    /// Returns a `GuessError` if `secret` has the wrong length or uses
    /// characters outside the pool.
    pub fn with_secret(config: GameConfig, secret: &str) -> Result<Self, GuessError> {
        let chars = config.validate(secret)?;

        Ok(Self {
            config,
            secret: Secret::from_chars(chars),
            guesses: Vec::new(),
        })
    }

    /// Validate, score, and record a guess
    ///
    /// # Errors
    /// - `GuessError::InvalidLength` if the guess length differs from the code length
    /// - `GuessError::InvalidCharacter` if the guess uses characters outside the pool
    ///
    /// A rejected guess leaves the history untouched.
    pub fn submit_guess(&mut self, text: &str) -> Result<Guess, GuessError> {
        let chars = self.config.validate(text).inspect_err(|err| {
            debug!(%err, "rejected guess");
        })?;

        let score = Score::calculate(self.secret.chars(), &chars);
        let guess = Guess::new(text, score);
        self.guesses.push(guess.clone());

        debug!(
            turn = self.guesses.len(),
            correct = score.correct(),
            close = score.close(),
            "scored guess"
        );

        Ok(guess)
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.guesses
    }

    /// Clear the history, keeping the same secret
    pub fn reset(&mut self) {
        info!(discarded = self.guesses.len(), "game reset");
        self.guesses.clear();
    }

    #[inline]
    #[must_use]
    pub fn pool(&self) -> &str {
        self.config.pool().as_str()
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.config.length()
    }

    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    /// Check if the most recent guess matched every position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_guess()
            .is_some_and(|guess| guess.score().is_solved(self.length()))
    }
}
