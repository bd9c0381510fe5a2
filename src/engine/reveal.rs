//! Declarative reveal schedule
//!
//! The engine decides what changes after a guess; front ends decide how to show it.
//! A schedule is an ordered list of `(delay, action)` steps measured from the moment
//! the guess was submitted. `RevealTimeline` plays a schedule back against a clock.

use super::hints::HintField;
use super::round::{Round, RoundStatus};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a star or the poster spins
pub const SPIN: Duration = Duration::from_millis(1000);
/// Point during a spin where the image is swapped
pub const SPIN_SWAP: Duration = Duration::from_millis(750);
/// Hint fade-in length
pub const HINT_FADE: Duration = Duration::from_millis(1200);
/// Delay before the score star flips after a win
pub const SCORE_STAR_DELAY: Duration = Duration::from_millis(1000);
/// Delay before the new total is shown after a win
pub const SCORE_DELAY: Duration = Duration::from_millis(2000);

/// How the disclosed title should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleVerdict {
    Correct,
    Wrong,
}

/// One visual change
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealAction {
    /// Start spinning the chance star at `index` for `SPIN`
    SpinStar { index: usize },
    /// Set the chance star at `index` on or off
    SetStar { index: usize, lit: bool },
    /// Fade a hint field in over `HINT_FADE`
    FadeInHint(HintField),
    /// Show a hint field immediately
    ShowHint(HintField),
    /// Set the poster blur
    SetBlur(f32),
    /// Spin the poster for `SPIN`
    SpinPoster,
    /// Replace the hint line with the full title
    ShowTitle(TitleVerdict),
    /// Start spinning the player's score star
    SpinScoreStar,
    /// Light the player's score star
    LightScoreStar,
    /// Show the new score total
    ShowScore(u32),
}

/// An action and when to run it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStep {
    pub delay: Duration,
    pub action: RevealAction,
}

impl RevealStep {
    const fn at(delay: Duration, action: RevealAction) -> Self {
        Self { delay, action }
    }

    const fn now(action: RevealAction) -> Self {
        Self::at(Duration::ZERO, action)
    }
}

/// Build the schedule for the transition from `before` to `after`
///
/// `score_total` is the total after the round's points were recorded; it is only
/// shown on a win. A guess that changed nothing yields an empty schedule.
#[must_use]
pub fn reveal_schedule(before: &Round, after: &Round, score_total: u32) -> Vec<RevealStep> {
    if before.guesses_made() == after.guesses_made() {
        return Vec::new();
    }

    let unlocked = after.visible_hints().newly_unlocked(before.visible_hints());
    let mut steps = Vec::new();

    match after.status() {
        RoundStatus::Won => {
            steps.push(RevealStep::now(RevealAction::SpinPoster));
            steps.push(RevealStep::now(RevealAction::ShowTitle(TitleVerdict::Correct)));
            steps.extend(
                unlocked
                    .into_iter()
                    .map(|field| RevealStep::now(RevealAction::ShowHint(field))),
            );
            steps.push(RevealStep::at(
                SPIN_SWAP,
                RevealAction::SetBlur(after.blur_level()),
            ));
            steps.push(RevealStep::at(SCORE_STAR_DELAY, RevealAction::SpinScoreStar));
            steps.push(RevealStep::at(
                SCORE_STAR_DELAY + SPIN_SWAP,
                RevealAction::LightScoreStar,
            ));
            steps.push(RevealStep::at(SCORE_DELAY, RevealAction::ShowScore(score_total)));
        }
        RoundStatus::Lost | RoundStatus::InProgress => {
            let index = after.remaining_chances() as usize;
            steps.push(RevealStep::now(RevealAction::SpinStar { index }));
            steps.push(RevealStep::now(RevealAction::SetBlur(after.blur_level())));
            if after.status() == RoundStatus::Lost {
                steps.push(RevealStep::now(RevealAction::ShowTitle(TitleVerdict::Wrong)));
            }
            steps.extend(
                unlocked
                    .into_iter()
                    .map(|field| RevealStep::now(RevealAction::FadeInHint(field))),
            );
            steps.push(RevealStep::at(
                SPIN_SWAP,
                RevealAction::SetStar { index, lit: false },
            ));
        }
    }

    steps.sort_by_key(|step| step.delay);
    steps
}

/// Plays a schedule back against a clock
#[derive(Debug, Clone)]
pub struct RevealTimeline {
    started: Instant,
    pending: VecDeque<RevealStep>,
}

impl RevealTimeline {
    /// Start playing `steps` from `started`
    #[must_use]
    pub fn new(steps: Vec<RevealStep>, started: Instant) -> Self {
        Self {
            started,
            pending: steps.into(),
        }
    }

    /// Pop every action whose delay has elapsed at `now`
    pub fn due(&mut self, now: Instant) -> Vec<RevealAction> {
        let elapsed = now.saturating_duration_since(self.started);
        let mut actions = Vec::new();

        while let Some(step) = self.pending.front() {
            if step.delay > elapsed {
                break;
            }
            if let Some(step) = self.pending.pop_front() {
                actions.push(step.action);
            }
        }

        actions
    }

    /// Run every remaining action at once
    pub fn finish(&mut self) -> Vec<RevealAction> {
        self.pending.drain(..).map(|step| step.action).collect()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoundConfig;

    fn round(title: &str) -> Round {
        Round::start(title, RoundConfig::default()).unwrap()
    }

    fn actions(steps: &[RevealStep]) -> Vec<RevealAction> {
        steps.iter().map(|step| step.action).collect()
    }

    #[test]
    fn first_miss_spins_last_star_and_fades_year() {
        let before = round("Up");
        let (_, after) = before.evaluate("Up2");
        let steps = reveal_schedule(&before, &after, 0);

        assert_eq!(
            actions(&steps),
            vec![
                RevealAction::SpinStar { index: 4 },
                RevealAction::SetBlur(46.0),
                RevealAction::FadeInHint(HintField::Year),
                RevealAction::SetStar {
                    index: 4,
                    lit: false
                },
            ]
        );
        assert_eq!(steps.last().unwrap().delay, SPIN_SWAP);
    }

    #[test]
    fn loss_discloses_title_and_remaining_hints() {
        let mut before = round("Up");
        for _ in 0..4 {
            before = before.evaluate("no").1;
        }
        let (_, after) = before.evaluate("no");
        let steps = reveal_schedule(&before, &after, 0);
        let acts = actions(&steps);

        assert!(acts.contains(&RevealAction::SpinStar { index: 0 }));
        assert!(acts.contains(&RevealAction::SetBlur(1.0)));
        assert!(acts.contains(&RevealAction::ShowTitle(TitleVerdict::Wrong)));
        // All four were already visible with one chance left
        assert!(!acts.iter().any(|a| matches!(a, RevealAction::FadeInHint(_))));
    }

    #[test]
    fn win_schedule_timings() {
        let before = round("Up");
        let (_, after) = before.evaluate("up");
        let steps = reveal_schedule(&before, &after, 12);

        let delay_of = |wanted: RevealAction| {
            steps
                .iter()
                .find(|step| step.action == wanted)
                .map(|step| step.delay)
        };

        assert_eq!(delay_of(RevealAction::SpinPoster), Some(Duration::ZERO));
        assert_eq!(delay_of(RevealAction::SetBlur(1.0)), Some(SPIN_SWAP));
        assert_eq!(delay_of(RevealAction::SpinScoreStar), Some(SCORE_STAR_DELAY));
        assert_eq!(delay_of(RevealAction::ShowScore(12)), Some(SCORE_DELAY));
        assert_eq!(
            steps
                .iter()
                .filter(|s| matches!(s.action, RevealAction::ShowHint(_)))
                .count(),
            4
        );
    }

    #[test]
    fn schedule_is_sorted() {
        let before = round("Up");
        let (_, after) = before.evaluate("up");
        let steps = reveal_schedule(&before, &after, 5);
        assert!(steps.windows(2).all(|w| w[0].delay <= w[1].delay));
    }

    #[test]
    fn ignored_guess_has_empty_schedule() {
        let (_, won) = round("Up").evaluate("up");
        let (_, again) = won.evaluate("zz");
        assert!(reveal_schedule(&won, &again, 5).is_empty());
    }

    #[test]
    fn timeline_releases_steps_in_time() {
        let before = round("Up");
        let (_, after) = before.evaluate("up");
        let start = Instant::now();
        let mut timeline = RevealTimeline::new(reveal_schedule(&before, &after, 5), start);

        let first = timeline.due(start);
        assert!(first.contains(&RevealAction::SpinPoster));
        assert!(!first.contains(&RevealAction::ShowScore(5)));

        let later = timeline.due(start + Duration::from_millis(800));
        assert_eq!(later, vec![RevealAction::SetBlur(1.0)]);

        let rest = timeline.finish();
        assert!(rest.contains(&RevealAction::ShowScore(5)));
        assert!(timeline.is_done());
    }
}
