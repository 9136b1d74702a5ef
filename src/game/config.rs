//! Game configuration and guess validation

use crate::core::{ConfigError, GuessError, Pool};

/// Default pool: six letters, one per classic peg colour
pub const DEFAULT_POOL: &str = "ABCDEF";

/// Default code length
pub const DEFAULT_LENGTH: usize = 4;

/// Validated pool and code length for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pool: Pool,
    length: usize,
}

impl GameConfig {
    /// Build a configuration, checking the construction preconditions
    ///
    /// # Errors
    /// - `ConfigError::EmptyPool` if `pool` has no characters
    /// - `ConfigError::ZeroLength` if `length` is zero
    pub fn new(pool: &str, length: usize) -> Result<Self, ConfigError> {
        let pool = Pool::new(pool)?;
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        Ok(Self { pool, length })
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Check `text` against the code length, then against the pool
    ///
    /// Length is checked first, so text that is both too long and full of
    /// foreign characters reports the length error.
    ///
    /// # Errors
    /// - `GuessError::InvalidLength` if `text` is not `length` chars long
    /// - `GuessError::InvalidCharacter` if `text` uses a character outside the pool
    pub fn validate(&self, text: &str) -> Result<Vec<char>, GuessError> {
        let chars: Vec<char> = text.chars().collect();

        if chars.len() != self.length {
            return Err(GuessError::InvalidLength {
                expected: self.length,
                actual: chars.len(),
            });
        }

        if !chars.iter().all(|&ch| self.pool.contains(ch)) {
            return Err(GuessError::InvalidCharacter {
                pool: self.pool.as_str().to_string(),
                text: text.to_string(),
            });
        }

        Ok(chars)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pool: Pool::new(DEFAULT_POOL).expect("default pool is non-empty"),
            length: DEFAULT_LENGTH,
        }
    }
}
