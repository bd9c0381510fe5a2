//! Round engine
//!
//! Owns one guessing round: the title mask, guess scoring, chance and blur
//! bookkeeping, the hint unlock schedule and the score a round is worth.
//! Synchronous and free of I/O; callers hold the current `Round` and replace it
//! with the value returned by each evaluation.

mod config;
mod hints;
pub mod reveal;
mod round;
mod score;

pub use config::{RoundConfig, RoundError};
pub use hints::{HintField, HintSet, hint_schedule_for};
pub use reveal::{RevealAction, RevealStep, RevealTimeline, TitleVerdict, reveal_schedule};
pub use round::{GuessOutcome, Round, RoundStatus};
pub use score::ScoreState;
