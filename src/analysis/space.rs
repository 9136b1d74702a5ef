//! Enumeration of every possible secret for a configuration

use crate::core::{GuessError, Secret};
use crate::game::GameConfig;
use std::cell::OnceCell;
use thiserror::Error;

/// Largest secret space the analysis tools will enumerate
pub const MAX_SECRET_SPACE: usize = 1_000_000;

/// Errors from the analysis tools
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(
        "secret space of {distinct}^{length} codes exceeds the analysis limit of {max}",
        max = MAX_SECRET_SPACE
    )]
    SpaceTooLarge { distinct: usize, length: usize },

    #[error(transparent)]
    Guess(#[from] GuessError),
}

/// Number of distinct secrets, or `None` above [`MAX_SECRET_SPACE`]
#[must_use]
pub fn space_size(config: &GameConfig) -> Option<usize> {
    let exponent = u32::try_from(config.length()).ok()?;
    config
        .pool()
        .distinct()
        .len()
        .checked_pow(exponent)
        .filter(|&size| size <= MAX_SECRET_SPACE)
}

/// Every secret the configuration can produce
///
/// Secrets are built over the pool's distinct characters and listed in
/// lexicographic order of the pool (`AAAA`, `AAAB`, ... for pool `AB...`).
///
/// # Errors
/// Returns `AnalysisError::SpaceTooLarge` if there are more than
/// [`MAX_SECRET_SPACE`] secrets.
///
/// # Examples
/// ```
/// use codebreaker::analysis::secret_space;
/// use codebreaker::game::GameConfig;
///
/// let config = GameConfig::new("AB", 2).unwrap();
/// let secrets: Vec<String> = secret_space(&config)
///     .unwrap()
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// assert_eq!(secrets, ["AA", "AB", "BA", "BB"]);
/// ```
pub fn secret_space(config: &GameConfig) -> Result<Vec<Secret>, AnalysisError> {
    let alphabet = config.pool().distinct();
    let length = config.length();
    let size = space_size(config).ok_or(AnalysisError::SpaceTooLarge {
        distinct: alphabet.len(),
        length,
    })?;

    let mut digits = vec![0usize; length];
    let mut secrets = Vec::with_capacity(size);

    for _ in 0..size {
        secrets.push(Secret::from_chars(
            digits.iter().map(|&digit| alphabet[digit]).collect(),
        ));

        // Odometer increment, rightmost position fastest
        for digit in digits.iter_mut().rev() {
            *digit += 1;
            if *digit < alphabet.len() {
                break;
            }
            *digit = 0;
        }
    }

    Ok(secrets)
}

/// The secret space of one configuration, enumerated on first use
#[derive(Debug)]
pub struct SecretSpace {
    config: GameConfig,
    secrets: OnceCell<Option<Vec<Secret>>>,
}

impl SecretSpace {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            secrets: OnceCell::new(),
        }
    }

    /// Number of secrets, computed without enumerating them
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        space_size(&self.config)
    }

    /// Every secret, or `None` above [`MAX_SECRET_SPACE`]
    pub fn secrets(&self) -> Option<&[Secret]> {
        self.secrets
            .get_or_init(|| secret_space(&self.config).ok())
            .as_deref()
    }

    #[must_use]
    pub fn is_enumerated(&self) -> bool {
        self.secrets.get().is_some()
    }
}
