//! Simulation command
//!
//! Plays one round per catalog title with an automated guesser and gathers
//! statistics about how the round engine scores it.

use crate::core::Title;
use crate::engine::{Round, RoundConfig, RoundStatus, ScoreState};
use crate::guesser::Guesser;
use crate::movies::Catalog;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result from playing a single title
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub title: String,
    pub guesses: Vec<String>,
    pub status: RoundStatus,
    pub score: u32,
}

impl RoundReport {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == RoundStatus::Won
    }
}

/// Statistics from simulating many rounds
#[derive(Debug)]
pub struct SimulationStatistics {
    pub total_rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub score: ScoreState,
    pub average_score: f64,
    /// Winning guess number -> rounds won on that guess
    pub win_distribution: BTreeMap<usize, usize>,
    pub lost_titles: Vec<String>,
    pub duration: Duration,
}

/// Play `title` to the end with `guesser`
///
/// When the guesser runs out of ideas it submits an empty guess, which always
/// misses, so every round still finishes through the engine.
pub fn play_round<G: Guesser + ?Sized>(guesser: &G, title: &Title, config: RoundConfig) -> RoundReport {
    let mut round = Round::with_title(title.clone(), config);
    let mut history = Vec::new();

    while !round.status().is_finished() {
        let guess = guesser.next_guess(&round, &history).unwrap_or_default();
        let (outcome, next) = round.evaluate(&guess);
        if let Some(result) = outcome.result() {
            history.push((guess, result.clone()));
        }
        round = next;
    }

    debug!(title = %title, status = ?round.status(), "simulated round finished");

    RoundReport {
        title: title.text().to_string(),
        guesses: history.into_iter().map(|(guess, _)| guess).collect(),
        status: round.status(),
        score: round.score_delta(),
    }
}

/// Play every catalog title (or the first `limit`) in parallel
pub fn run_simulation<G: Guesser + Sync>(
    guesser: &G,
    catalog: &Catalog,
    config: RoundConfig,
    limit: Option<usize>,
) -> SimulationStatistics {
    let titles: Vec<&Title> = catalog
        .titles()
        .take(limit.unwrap_or(catalog.len()))
        .collect();

    let pb = ProgressBar::new(titles.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let reports: Vec<RoundReport> = titles
        .par_iter()
        .map(|title| {
            let report = play_round(guesser, title, config);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&reports, start.elapsed())
}

fn summarize(reports: &[RoundReport], duration: Duration) -> SimulationStatistics {
    let mut score = ScoreState::default();
    let mut win_distribution = BTreeMap::new();
    let mut lost_titles = Vec::new();

    for report in reports {
        score.total = score.total.saturating_add(report.score);
        if report.won() {
            *win_distribution.entry(report.guesses.len()).or_insert(0) += 1;
        } else {
            lost_titles.push(report.title.clone());
        }
    }

    let won = reports.iter().filter(|r| r.won()).count();
    let average_score = if reports.is_empty() {
        0.0
    } else {
        f64::from(score.total) / reports.len() as f64
    };

    SimulationStatistics {
        total_rounds: reports.len(),
        won,
        lost: reports.len() - won,
        score,
        average_score,
        win_distribution,
        lost_titles,
        duration,
    }
}
