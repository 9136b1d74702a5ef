//! Information-theoretic analysis of guesses
//!
//! Enumerates the secret space for a configuration and measures how a guess
//! splits it by score: Shannon entropy, expected and worst-case remaining
//! secrets, and entropy-maximising suggestions.

mod metrics;
mod selector;
mod space;

pub use metrics::{
    GuessMetrics, ScorePartition, calculate_metrics, consistent_secrets, metrics_from_partition,
    partition, shannon_entropy,
};
pub use selector::{FULL_POOL_LIMIT, HINT_SCORING_BUDGET, select_best_guess, suggest};
pub use space::{AnalysisError, MAX_SECRET_SPACE, SecretSpace, secret_space, space_size};
