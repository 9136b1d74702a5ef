//! Game orchestration
//!
//! Validates guesses against the configured pool and length, scores them
//! against the secret, and keeps the ordered history.

mod config;
mod state;

pub use config::{DEFAULT_LENGTH, DEFAULT_POOL, GameConfig};
pub use state::Game;
