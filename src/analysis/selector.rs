//! Entropy-based guess suggestion

use super::metrics::{GuessMetrics, calculate_metrics};
use crate::core::Secret;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// Above this many secrets, suggestions only consider remaining candidates
pub const FULL_POOL_LIMIT: usize = 4096;

/// Upper bound on guess/secret scorings for one suggestion
pub const HINT_SCORING_BUDGET: usize = 1 << 24;

/// Select the guess with the highest entropy against `candidates`
///
/// Ties prefer a guess that could itself be the secret, then the smaller
/// worst case, then the earlier guess in `guess_pool`.
///
/// Returns `None` if the guess pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Secret],
    candidates: &[&Secret],
) -> Option<(&'a Secret, GuessMetrics)> {
    let possible: FxHashSet<&Secret> = candidates.iter().copied().collect();

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| {
            let metrics = calculate_metrics(guess.chars(), candidates);
            (index, guess, metrics, possible.contains(guess))
        })
        .max_by(|a, b| {
            a.2.entropy
                .total_cmp(&b.2.entropy)
                .then(a.3.cmp(&b.3))
                .then(Reverse(a.2.max_partition).cmp(&Reverse(b.2.max_partition)))
                .then(Reverse(a.0).cmp(&Reverse(b.0)))
        })
        .map(|(_, guess, metrics, _)| (guess, metrics))
}

/// Suggest the next guess given the full secret space and what remains
///
/// With one candidate left, that candidate is the answer. Otherwise every
/// secret is considered as a guess, unless the space exceeds
/// [`FULL_POOL_LIMIT`]. Then only the leading candidates are, as many as
/// [`HINT_SCORING_BUDGET`] allows against the full candidate list.
#[must_use]
pub fn suggest<'a>(
    secrets: &'a [Secret],
    candidates: &[&'a Secret],
) -> Option<(&'a Secret, GuessMetrics)> {
    match candidates {
        [] => None,
        [only] => Some((*only, calculate_metrics(only.chars(), candidates))),
        _ if secrets.len() <= FULL_POOL_LIMIT => {
            let pool: Vec<&Secret> = secrets.iter().collect();
            select_best_guess(&pool, candidates)
        }
        _ => select_best_guess(&candidates[..guess_pool_size(candidates.len())], candidates),
    }
}

/// Number of candidates tried as guesses when the space is too large to use whole
fn guess_pool_size(candidates: usize) -> usize {
    (HINT_SCORING_BUDGET / candidates.max(1)).clamp(1, candidates.max(1))
}
