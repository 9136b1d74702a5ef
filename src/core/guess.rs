//! Scored guess representation

use super::Score;
use std::fmt;

/// A validated guess together with its score
///
/// Guesses are plain values: once produced they never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    text: String,
    score: Score,
}

impl Guess {
    #[must_use]
    pub fn new(text: impl Into<String>, score: Score) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// The text as submitted
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn correct(&self) -> usize {
        self.score.correct()
    }

    #[inline]
    #[must_use]
    pub const fn close(&self) -> usize {
        self.score.close()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{text: \"{}\", correct: {}, close: {}}}",
            self.text,
            self.correct(),
            self.close()
        )
    }
}
