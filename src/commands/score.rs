//! One-shot scoring command
//!
//! Scores a single guess against an explicit secret.

use crate::core::{Guess, GuessError};
use crate::game::{Game, GameConfig};

/// Score `guess` against `secret` under `config`
///
/// # Errors
///
/// Returns an error if either the secret or the guess fails validation.
/// The secret is checked first.
pub fn score_guess(config: GameConfig, secret: &str, guess: &str) -> Result<Guess, GuessError> {
    let mut game = Game::with_secret(config, secret)?;
    game.submit_guess(guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;

    #[test]
    fn score_guess_against_secret() {
        let guess = score_guess(GameConfig::default(), "ABCD", "DCBA").unwrap();
        assert_eq!(guess.score(), Score::new(0, 4));
    }

    #[test]
    fn score_rejects_invalid_secret_first() {
        let result = score_guess(GameConfig::default(), "ABC", "XYZW");
        assert_eq!(
            result,
            Err(GuessError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn score_rejects_invalid_guess() {
        let result = score_guess(GameConfig::default(), "ABCD", "ABCG");
        assert!(matches!(result, Err(GuessError::InvalidCharacter { .. })));
    }
}
