//! Guess scoring
//!
//! A score counts the guess characters that are **correct** (right letter,
//! right position) and **close** (right letter, wrong position). Duplicate
//! letters are matched as a multiset: each secret character and each guess
//! character is credited at most once.

use rustc_hash::FxHashMap;

/// Correct/close tally for one guess against one secret
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    correct: usize,
    close: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(correct: usize, close: usize) -> Self {
        Self { correct, close }
    }

    /// Number of characters in the right position
    #[inline]
    #[must_use]
    pub const fn correct(self) -> usize {
        self.correct
    }

    /// Number of characters present elsewhere in the secret
    #[inline]
    #[must_use]
    pub const fn close(self) -> usize {
        self.close
    }

    /// Check if every position of a code of `length` is correct
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.correct == length
    }

    /// Score `guess` against `secret`
    ///
    /// Both slices must have the same length; callers validate guesses
    /// before scoring them.
    ///
    /// # Algorithm
    /// 1. Index the positions of every letter in the guess
    /// 2. First pass: each secret position whose letter sits at the same
    ///    guess position is correct; that guess position and secret slot
    ///    are consumed
    /// 3. Second pass: each unconsumed secret letter that still has any
    ///    guess position left is close; one such position is consumed
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Score;
    ///
    /// let secret: Vec<char> = "AAB".chars().collect();
    /// let guess: Vec<char> = "ABA".chars().collect();
    ///
    /// let score = Score::calculate(&secret, &guess);
    /// assert_eq!(score.correct(), 1);
    /// assert_eq!(score.close(), 2);
    /// ```
    #[must_use]
    pub fn calculate(secret: &[char], guess: &[char]) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "guess must match secret length");

        let mut available = LetterPositions::index(guess);
        let mut consumed = vec![false; secret.len()];
        let mut correct = 0;

        for (i, &letter) in secret.iter().enumerate() {
            if available.take_exact(letter, i) {
                correct += 1;
                consumed[i] = true;
            }
        }

        let mut close = 0;
        for (&letter, &used) in secret.iter().zip(&consumed) {
            if !used && available.take_any(letter) {
                close += 1;
            }
        }

        Self { correct, close }
    }
}

/// Guess positions per letter that have not been credited yet
///
/// Each letter owns its own position list; lookups never insert entries.
#[derive(Debug, Default)]
struct LetterPositions(FxHashMap<char, Vec<usize>>);

impl LetterPositions {
    fn index(guess: &[char]) -> Self {
        let mut positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in guess.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }
        Self(positions)
    }

    /// Consume `position` for `letter` if the guess has that letter there
    fn take_exact(&mut self, letter: char, position: usize) -> bool {
        let Some(positions) = self.0.get_mut(&letter) else {
            return false;
        };

        match positions.iter().position(|&p| p == position) {
            Some(slot) => {
                positions.swap_remove(slot);
                true
            }
            None => false,
        }
    }

    /// Consume any remaining position for `letter`
    fn take_any(&mut self, letter: char) -> bool {
        self.0
            .get_mut(&letter)
            .and_then(Vec::pop)
            .is_some()
    }

    #[cfg(test)]
    fn remaining(&self, letter: char) -> usize {
        self.0.get(&letter).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(secret: &str, guess: &str) -> Score {
        let secret: Vec<char> = secret.chars().collect();
        let guess: Vec<char> = guess.chars().collect();
        Score::calculate(&secret, &guess)
    }

    #[test]
    fn score_exact_match() {
        assert_eq!(score("ABCD", "ABCD"), Score::new(4, 0));
        assert!(score("ABCD", "ABCD").is_solved(4));
    }

    #[test]
    fn score_disjoint_alphabets() {
        assert_eq!(score("ABCD", "EFGH"), Score::new(0, 0));
    }

    #[test]
    fn score_duplicate_letters_credit_once() {
        // Position 0 is correct; the guess's B and trailing A are both close
        assert_eq!(score("AAB", "ABA"), Score::new(1, 2));
    }

    #[test]
    fn score_no_double_counting() {
        // Both secret A's are matched positionally; nothing left for close
        assert_eq!(score("AAAA", "AABB"), Score::new(2, 0));
    }

    #[test]
    fn score_all_close() {
        assert_eq!(score("ABCD", "DCBA"), Score::new(0, 4));
    }

    #[test]
    fn score_guess_repeats_more_than_secret() {
        // Secret has one A; only one guess A can be credited
        assert_eq!(score("ABCD", "AAAA"), Score::new(1, 0));
        assert_eq!(score("BCDA", "AAAA"), Score::new(1, 0));
        assert_eq!(score("BACD", "CAAA"), Score::new(1, 1));
    }

    #[test]
    fn score_secret_repeats_more_than_guess() {
        assert_eq!(score("AAAA", "BACD"), Score::new(1, 0));
        assert_eq!(score("AABB", "BBAA"), Score::new(0, 4));
        assert_eq!(score("AABB", "ABAB"), Score::new(2, 2));
    }

    #[test]
    fn score_correct_takes_priority_over_close() {
        // The guess's second A is correct, so the first cannot also be close
        assert_eq!(score("BAC", "AAD"), Score::new(1, 0));
    }

    #[test]
    fn score_single_character() {
        assert_eq!(score("A", "A"), Score::new(1, 0));
        assert_eq!(score("A", "B"), Score::new(0, 0));
    }

    #[test]
    fn letter_positions_lookup_does_not_register_letters() {
        let guess: Vec<char> = "AAB".chars().collect();
        let mut positions = LetterPositions::index(&guess);

        assert!(!positions.take_exact('Z', 0));
        assert!(!positions.take_any('Z'));
        assert!(!positions.0.contains_key(&'Z'));

        assert_eq!(positions.remaining('A'), 2);
        assert!(positions.take_exact('A', 1));
        assert!(!positions.take_exact('A', 1));
        assert!(positions.take_any('A'));
        assert!(!positions.take_any('A'));
        assert_eq!(positions.remaining('B'), 1);
    }

    fn code(len: usize) -> impl Strategy<Value = Vec<char>> {
        prop::collection::vec(prop::sample::select(vec!['A', 'B', 'C', 'D']), len)
    }

    fn secret_and_guess() -> impl Strategy<Value = (Vec<char>, Vec<char>)> {
        (1usize..8).prop_flat_map(|len| (code(len), code(len)))
    }

    proptest! {
        #[test]
        fn prop_counts_never_exceed_length((secret, guess) in secret_and_guess()) {
            let score = Score::calculate(&secret, &guess);
            prop_assert!(score.correct() + score.close() <= secret.len());
        }

        #[test]
        fn prop_guessing_the_secret_is_perfect(secret in (1usize..8).prop_flat_map(code)) {
            let score = Score::calculate(&secret, &secret);
            prop_assert_eq!(score, Score::new(secret.len(), 0));
        }

        #[test]
        fn prop_shared_permutation_preserves_score(
            (secret, guess, order) in secret_and_guess().prop_flat_map(|(secret, guess)| {
                let order = Just((0..secret.len()).collect::<Vec<_>>()).prop_shuffle();
                (Just(secret), Just(guess), order)
            })
        ) {
            let permuted_secret: Vec<char> = order.iter().map(|&i| secret[i]).collect();
            let permuted_guess: Vec<char> = order.iter().map(|&i| guess[i]).collect();

            prop_assert_eq!(
                Score::calculate(&secret, &guess),
                Score::calculate(&permuted_secret, &permuted_guess)
            );
        }

        #[test]
        fn prop_total_matches_letter_multiset_overlap((secret, guess) in secret_and_guess()) {
            let score = Score::calculate(&secret, &guess);
            let overlap: usize = ['A', 'B', 'C', 'D']
                .iter()
                .map(|letter| {
                    let in_secret = secret.iter().filter(|&c| c == letter).count();
                    let in_guess = guess.iter().filter(|&c| c == letter).count();
                    in_secret.min(in_guess)
                })
                .sum();
            prop_assert_eq!(score.correct() + score.close(), overlap);
        }
    }
}
