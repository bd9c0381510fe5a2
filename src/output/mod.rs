//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_guess_feedback, print_round, print_round_end, print_simulation_statistics};
