//! Secret code generation
//!
//! A secret is a fixed-length sequence of pool characters sampled uniformly
//! with replacement. It never changes after construction.

use super::Pool;
use rand::Rng;
use std::fmt;

/// A source of uniform random indices in `[0, bound)`
///
/// Every `rand::Rng` is an index source, so callers can pass a seeded
/// `StdRng`, the thread RNG, or a scripted implementation in tests.
pub trait IndexSource {
    /// Return an index in `[0, bound)`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// The hidden code a player is trying to deduce
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Secret {
    chars: Vec<char>,
}

impl Secret {
    /// Draw `length` characters from `pool` using `rng`
    ///
    /// Characters are indexed in the pool's verbatim order, so a character
    /// listed twice in the pool is twice as likely to be drawn.
    ///
    /// # Panics
    /// Panics if `length` is zero. `GameConfig` rejects that case before a
    /// secret is ever generated.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Pool, Secret};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let pool = Pool::new("ABCDEF").unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let secret = Secret::generate(&pool, 4, &mut rng);
    ///
    /// assert_eq!(secret.len(), 4);
    /// assert!(pool.admits(&secret.to_string()));
    /// ```
    pub fn generate<R: IndexSource + ?Sized>(pool: &Pool, length: usize, rng: &mut R) -> Self {
        assert!(length > 0, "secret length must be at least 1");

        let choices = pool.chars();
        let chars = (0..length)
            .map(|_| choices[rng.next_index(choices.len())])
            .collect();

        Self { chars }
    }

    /// Wrap characters that were already validated against a pool
    pub(crate) fn from_chars(chars: Vec<char>) -> Self {
        debug_assert!(!chars.is_empty(), "secret must not be empty");
        Self { chars }
    }

    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a generated secret
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}
