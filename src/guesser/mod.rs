//! Automated players
//!
//! Guessers stand in for a human when simulating rounds across the catalog.

pub mod strategy;

pub use strategy::{
    CandidateGuesser, GuessHistory, Guesser, GuesserType, RandomGuesser, is_consistent,
    remaining_candidates,
};
