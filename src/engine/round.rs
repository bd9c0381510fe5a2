//! Round state machine
//!
//! ```text
//! InProgress --exact match--------------> Won   (terminal)
//! InProgress --miss, last chance spent--> Lost  (terminal)
//! InProgress --miss, chances left-------> InProgress
//! ```
//!
//! A `Round` is a value: evaluating a guess returns the next round and leaves the
//! previous one untouched, so front ends can diff the two to decide what to animate.

use super::config::{RoundConfig, RoundError};
use super::hints::{HintSet, hint_schedule_for};
use crate::core::{GuessResult, Title, hint_line};
use tracing::debug;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What happened to a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The round was already over; nothing changed
    Ignored,
    /// The guess was scored against the title
    Evaluated(GuessResult),
}

impl GuessOutcome {
    /// The feedback, if the guess was scored
    #[must_use]
    pub const fn result(&self) -> Option<&GuessResult> {
        match self {
            Self::Ignored => None,
            Self::Evaluated(result) => Some(result),
        }
    }
}

/// One five-chance attempt at a single movie
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    title: Title,
    config: RoundConfig,
    remaining_chances: u32,
    blur_level: f32,
    revealed: Vec<bool>,
    status: RoundStatus,
    guesses_made: u32,
}

impl Round {
    /// Start a fresh round for `title`
    ///
    /// # Errors
    /// Returns `RoundError::InvalidRoundConfig` if the title is empty.
    ///
    /// # Examples
    /// ```
    /// use guess_the_movie::engine::{Round, RoundConfig, RoundStatus};
    ///
    /// let round = Round::start("Up", RoundConfig::default()).unwrap();
    /// assert_eq!(round.remaining_chances(), 5);
    /// assert_eq!(round.status(), RoundStatus::InProgress);
    /// assert_eq!(round.hint_line(), "_ _");
    ///
    /// assert!(Round::start("", RoundConfig::default()).is_err());
    /// ```
    pub fn start(title: impl AsRef<str>, config: RoundConfig) -> Result<Self, RoundError> {
        let title = Title::new(title)
            .map_err(|e| RoundError::InvalidRoundConfig(e.to_string()))?;
        Ok(Self::with_title(title, config))
    }

    /// Start a fresh round for an already validated title
    #[must_use]
    pub fn with_title(title: Title, config: RoundConfig) -> Self {
        debug!(title = %title, chances = config.max_chances(), "round started");

        Self {
            revealed: vec![false; title.len()],
            remaining_chances: config.max_chances(),
            blur_level: config.max_blur(),
            status: RoundStatus::InProgress,
            guesses_made: 0,
            title,
            config,
        }
    }

    /// Score `guess` and return the resulting round
    ///
    /// Guesses on a finished round are ignored and the round comes back unchanged.
    ///
    /// # Examples
    /// ```
    /// use guess_the_movie::engine::{Round, RoundConfig, RoundStatus};
    ///
    /// let round = Round::start("Up", RoundConfig::default()).unwrap();
    ///
    /// let (_, missed) = round.evaluate("Up2");
    /// assert_eq!(missed.remaining_chances(), 4);
    /// assert_eq!(missed.blur_level(), 46.0);
    ///
    /// let (_, won) = missed.evaluate("up");
    /// assert_eq!(won.status(), RoundStatus::Won);
    /// assert_eq!(won.score_delta(), 4);
    /// ```
    #[must_use]
    pub fn evaluate(&self, guess: &str) -> (GuessOutcome, Self) {
        if self.status.is_finished() || self.remaining_chances == 0 {
            debug!(status = ?self.status, "guess ignored on finished round");
            return (GuessOutcome::Ignored, self.clone());
        }

        let result = GuessResult::calculate(guess, &self.title);
        let mut next = self.clone();
        next.guesses_made += 1;

        for (slot, &matched) in next.revealed.iter_mut().zip(result.per_character_match()) {
            *slot |= matched;
        }

        if result.is_exact_match() {
            next.status = RoundStatus::Won;
            next.blur_level = self.config.reveal_floor();
            debug!(
                title = %self.title,
                remaining = next.remaining_chances,
                "round won"
            );
        } else {
            next.remaining_chances -= 1;
            if next.remaining_chances == 0 {
                next.status = RoundStatus::Lost;
                next.blur_level = self.config.reveal_floor();
                debug!(title = %self.title, "round lost");
            } else {
                next.blur_level =
                    (self.blur_level - self.config.blur_step()).max(self.config.reveal_floor());
                debug!(
                    matched = result.matched_count(),
                    remaining = next.remaining_chances,
                    blur = next.blur_level,
                    "guess missed"
                );
            }
        }

        (GuessOutcome::Evaluated(result), next)
    }

    /// Points earned by this round
    ///
    /// A win is worth the chances still left, so faster wins score more.
    /// Losses and unfinished rounds are worth nothing.
    #[must_use]
    pub const fn score_delta(&self) -> u32 {
        match self.status {
            RoundStatus::Won => self.remaining_chances,
            RoundStatus::InProgress | RoundStatus::Lost => 0,
        }
    }

    /// Hint fields that should be visible now
    ///
    /// Follows the unlock schedule while in progress; everything once finished.
    #[must_use]
    pub fn visible_hints(&self) -> HintSet {
        if self.status.is_finished() {
            HintSet::ALL
        } else {
            hint_schedule_for(self.remaining_chances)
        }
    }

    /// The full title, once the round is over
    #[must_use]
    pub fn disclosed_title(&self) -> Option<&str> {
        self.status.is_finished().then(|| self.title.text())
    }

    /// Hint line with the revealed characters, or the whole title once finished
    #[must_use]
    pub fn hint_line(&self) -> String {
        hint_line(&self.title, &self.revealed, self.status.is_finished())
    }

    /// One entry per chance: `true` while that star is still lit
    ///
    /// Stars go out from the last one backwards, matching how chances are spent.
    #[must_use]
    pub fn stars(&self) -> Vec<bool> {
        (0..self.config.max_chances())
            .map(|i| i < self.remaining_chances)
            .collect()
    }

    #[inline]
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn remaining_chances(&self) -> u32 {
        self.remaining_chances
    }

    #[inline]
    #[must_use]
    pub const fn blur_level(&self) -> f32 {
        self.blur_level
    }

    /// Per-character reveal flags accumulated over every guess so far
    #[inline]
    #[must_use]
    pub fn revealed_hint_mask(&self) -> &[bool] {
        &self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    /// Number of guesses scored so far
    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> u32 {
        self.guesses_made
    }
}
