//! Character pool for secrets and guesses
//!
//! The pool text is kept verbatim: secrets are sampled by index into it and
//! error messages echo it back. Membership checks go through a set of its
//! distinct characters.

use super::ConfigError;
use rustc_hash::FxHashSet;
use std::fmt;

/// The characters a secret is drawn from and a guess may use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    text: String,
    chars: Vec<char>,
    members: FxHashSet<char>,
}

impl Pool {
    /// Create a pool from its verbatim text
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyPool` if `text` has no characters.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Pool;
    ///
    /// let pool = Pool::new("ABCDEF").unwrap();
    /// assert!(pool.contains('C'));
    /// assert!(!pool.contains('Z'));
    /// assert!(Pool::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, ConfigError> {
        let text: String = text.into();
        let chars: Vec<char> = text.chars().collect();

        if chars.is_empty() {
            return Err(ConfigError::EmptyPool);
        }

        let members = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            members,
        })
    }

    /// The pool exactly as it was supplied
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The pool's characters in verbatim order, duplicates included
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Distinct characters in order of first appearance
    #[must_use]
    pub fn distinct(&self) -> Vec<char> {
        let mut seen = FxHashSet::default();
        self.chars
            .iter()
            .copied()
            .filter(|&ch| seen.insert(ch))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.members.contains(&ch)
    }

    /// Check that every character of `text` belongs to the pool
    #[must_use]
    pub fn admits(&self, text: &str) -> bool {
        text.chars().all(|ch| self.contains(ch))
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_keeps_text_verbatim() {
        let pool = Pool::new("FEDCBA").unwrap();
        assert_eq!(pool.as_str(), "FEDCBA");
        assert_eq!(pool.to_string(), "FEDCBA");
        assert_eq!(pool.chars(), &['F', 'E', 'D', 'C', 'B', 'A']);
    }

    #[test]
    fn pool_rejects_empty_text() {
        assert_eq!(Pool::new(""), Err(ConfigError::EmptyPool));
    }

    #[test]
    fn pool_membership_ignores_order_and_duplicates() {
        let pool = Pool::new("ABBA").unwrap();
        assert!(pool.contains('A'));
        assert!(pool.contains('B'));
        assert!(!pool.contains('C'));
        assert_eq!(pool.distinct(), vec!['A', 'B']);
        assert_eq!(pool.chars().len(), 4);
    }

    #[test]
    fn pool_admits_only_member_text() {
        let pool = Pool::new("ABCDEF").unwrap();
        assert!(pool.admits("FACE"));
        assert!(pool.admits(""));
        assert!(!pool.admits("FACT"));
        assert!(!pool.admits("face")); // Case sensitive
    }

    #[test]
    fn pool_handles_non_ascii() {
        let pool = Pool::new("🔴🟢🔵").unwrap();
        assert_eq!(pool.chars().len(), 3);
        assert!(pool.admits("🔵🔴"));
        assert!(!pool.admits("🟡"));
    }
}
