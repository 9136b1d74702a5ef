//! Error types for game construction and guess validation

use thiserror::Error;

/// A guess (or explicit secret) that failed validation
///
/// Both variants are caller-correctable input errors. A rejected guess is
/// never recorded in the game history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The text does not have the configured code length (counted in chars).
    #[error("Invalid guess length. required={expected}; provided={actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The text contains at least one character outside the pool.
    #[error("Guess includes invalid characters: required={pool}; provided={text}.")]
    InvalidCharacter { pool: String, text: String },
}

/// Construction preconditions that were not met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("character pool must not be empty")]
    EmptyPool,

    #[error("code length must be at least 1")]
    ZeroLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_message_interpolates_both_lengths() {
        let err = GuessError::InvalidLength {
            expected: 4,
            actual: 6,
        };
        assert_eq!(
            err.to_string(),
            "Invalid guess length. required=4; provided=6"
        );
    }

    #[test]
    fn character_message_interpolates_pool_and_text() {
        let err = GuessError::InvalidCharacter {
            pool: "ABCDEF".to_string(),
            text: "ABXZ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Guess includes invalid characters: required=ABCDEF; provided=ABXZ."
        );
    }
}
