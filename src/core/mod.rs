//! Core domain types for Codebreaker
//!
//! The pool, the secret, and the scoring algorithm. Everything here is pure
//! apart from the randomness a secret consumes when it is generated.

mod error;
mod guess;
mod pool;
mod score;
mod secret;

pub use error::{ConfigError, GuessError};
pub use guess::Guess;
pub use pool::Pool;
pub use score::Score;
pub use secret::{IndexSource, Secret};
