//! Guess the Movie
//!
//! A movie-poster guessing game: the player types titles, matching characters
//! are revealed in place, and every miss sharpens the poster and unlocks a hint.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use guess_the_movie::engine::{Round, RoundConfig};
//!
//! let round = Round::start("The Matrix", RoundConfig::default()).unwrap();
//! let (_outcome, round) = round.evaluate("the martix");
//! println!("{} ({} chances left)", round.hint_line(), round.remaining_chances());
//! ```

// Core domain types
pub mod core;

// Round state machine, hints, scoring and reveal timing
pub mod engine;

// Movie catalog and metadata
pub mod movies;

// Score persistence
pub mod scores;

// Automated players
pub mod guesser;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
