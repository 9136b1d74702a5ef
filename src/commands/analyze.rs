//! Guess analysis command
//!
//! Measures how a guess splits the full secret space by score.

use crate::analysis::{
    AnalysisError, GuessMetrics, metrics_from_partition, partition, secret_space,
};
use crate::core::{Score, Secret};
use crate::game::GameConfig;
use std::cmp::Reverse;
use tracing::debug;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub metrics: GuessMetrics,
    pub total_secrets: usize,
    /// Secrets per score, best score first
    pub distribution: Vec<(Score, usize)>,
}

impl AnalysisResult {
    /// Entropy if every secret received a different score
    #[must_use]
    pub fn max_entropy(&self) -> f64 {
        (self.total_secrets as f64).log2()
    }
}

/// Analyze `guess` against every secret the configuration can produce
///
/// `on_progress` receives the number of secrets scored so far in chunks,
/// suitable for driving a progress bar.
///
/// # Errors
///
/// Returns an error if:
/// - The guess fails validation against the configuration
/// - The secret space is too large to enumerate
pub fn analyze_guess<F>(
    config: &GameConfig,
    guess: &str,
    on_progress: F,
) -> Result<AnalysisResult, AnalysisError>
where
    F: Fn(u64) + Sync,
{
    let chars = config.validate(guess)?;
    let secrets = secret_space(config)?;
    let refs: Vec<&Secret> = secrets.iter().collect();

    debug!(guess, secrets = refs.len(), "partitioning secret space");
    let counts = partition(&chars, &refs, on_progress);
    let metrics = metrics_from_partition(&counts, config.length());

    let mut distribution: Vec<(Score, usize)> = counts.into_iter().collect();
    distribution.sort_by_key(|&(score, _)| Reverse(score));

    Ok(AnalysisResult {
        guess: guess.to_string(),
        metrics,
        total_secrets: refs.len(),
        distribution,
    })
}
