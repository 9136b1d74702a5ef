//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{colored_pegs, guess_line, print_analysis_result, print_score_result};
