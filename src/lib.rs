//! Codebreaker
//!
//! A Mastermind-style code-breaking game. A secret is drawn from a character
//! pool; each guess is scored by how many characters are **correct** (right
//! position) and **close** (present elsewhere), with duplicate letters
//! credited exactly once.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::game::{Game, GameConfig};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let config = GameConfig::new("ABCDEF", 4).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(config, &mut rng);
//!
//! let guess = game.submit_guess("AABB").unwrap();
//! println!("{guess}"); // {text: "AABB", correct: _, close: _}
//! assert!(guess.correct() + guess.close() <= 4);
//! ```

// Core domain types
pub mod core;

// Game state and validation
pub mod game;

// Secret-space analysis
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
