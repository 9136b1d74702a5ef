//! Score partitions and Shannon entropy
//!
//! Given a guess and the secrets still possible, group the secrets by the
//! score the guess would receive. The spread of that grouping measures how
//! much the guess is expected to reveal.

use crate::core::{Guess, Score, Secret};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Number of secrets producing each score
pub type ScorePartition = FxHashMap<Score, usize>;

const PROGRESS_CHUNK: usize = 4096;

/// Summary of how informative a guess is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of secrets left after the guess
    pub expected_remaining: f64,
    /// Largest group of secrets sharing one score (worst case)
    pub max_partition: usize,
    /// Number of distinct scores the guess can receive
    pub outcomes: usize,
    /// Probability that the guess is the secret
    pub solving_chance: f64,
}

impl GuessMetrics {
    const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
        outcomes: 0,
        solving_chance: 0.0,
    };
}

/// Partition `candidates` by score, in parallel
///
/// `on_progress` is called with the number of secrets scored after each
/// chunk, from whichever worker finished it.
pub fn partition<F>(guess: &[char], candidates: &[&Secret], on_progress: F) -> ScorePartition
where
    F: Fn(u64) + Sync,
{
    candidates
        .par_chunks(PROGRESS_CHUNK)
        .map(|chunk| {
            let counts = group_by_score(guess, chunk);
            on_progress(chunk.len() as u64);
            counts
        })
        .reduce(ScorePartition::default, |mut merged, counts| {
            for (score, count) in counts {
                *merged.entry(score).or_insert(0) += count;
            }
            merged
        })
}

/// Group candidates by the score they give the guess
fn group_by_score(guess: &[char], candidates: &[&Secret]) -> ScorePartition {
    let mut counts = ScorePartition::default();

    for candidate in candidates {
        let score = Score::calculate(candidate.chars(), guess);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a score distribution
///
/// H = -Σ p * log₂(p)
///
/// Returns 0.0 for an empty or single-outcome distribution.
#[must_use]
pub fn shannon_entropy<S>(counts: &HashMap<Score, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Derive metrics from an existing partition for a code of `length`
#[must_use]
pub fn metrics_from_partition(partition: &ScorePartition, length: usize) -> GuessMetrics {
    let total: usize = partition.values().sum();
    if total == 0 {
        return GuessMetrics::EMPTY;
    }
    let total_f = total as f64;

    let expected_remaining = partition
        .values()
        .map(|&count| count as f64 * count as f64 / total_f)
        .sum();

    let solved = partition
        .iter()
        .filter(|(score, _)| score.is_solved(length))
        .map(|(_, &count)| count)
        .sum::<usize>();

    GuessMetrics {
        entropy: shannon_entropy(partition),
        expected_remaining,
        max_partition: partition.values().copied().max().unwrap_or(0),
        outcomes: partition.len(),
        solving_chance: solved as f64 / total_f,
    }
}

/// Calculate metrics for a guess against the remaining candidates
#[must_use]
pub fn calculate_metrics(guess: &[char], candidates: &[&Secret]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics::EMPTY;
    }
    metrics_from_partition(&group_by_score(guess, candidates), guess.len())
}

/// Secrets that would have produced every score in `history`
#[must_use]
pub fn consistent_secrets<'a>(history: &[Guess], secrets: &'a [Secret]) -> Vec<&'a Secret> {
    let guesses: Vec<(Vec<char>, Score)> = history
        .iter()
        .map(|guess| (guess.text().chars().collect(), guess.score()))
        .collect();

    secrets
        .par_iter()
        .filter(|secret| {
            guesses
                .iter()
                .all(|(text, score)| Score::calculate(secret.chars(), text) == *score)
        })
        .collect()
}
