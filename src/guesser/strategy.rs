//! Automated guessers
//!
//! Defines the Guesser trait and concrete implementations used to play rounds
//! without a human.

use crate::core::{GuessResult, Title, same_letter};
use crate::engine::Round;
use crate::movies::Catalog;
use rand::prelude::IndexedRandom;

/// A guess already made and the feedback it earned
pub type GuessHistory = [(String, GuessResult)];

/// Chooses the next guess for a round
pub trait Guesser {
    /// Pick the next guess, or `None` if there is nothing sensible left to try
    ///
    /// Implementations may only use what a player can see: the length of the
    /// hint mask and the feedback in `history`.
    fn next_guess(&self, round: &Round, history: &GuessHistory) -> Option<String>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection while keeping static dispatch.
pub enum GuesserType<'a> {
    /// Narrow the catalog using the feedback so far (default)
    Candidate(CandidateGuesser<'a>),
    /// Uniform random titles
    Random(RandomGuesser<'a>),
}

impl Guesser for GuesserType<'_> {
    fn next_guess(&self, round: &Round, history: &GuessHistory) -> Option<String> {
        match self {
            Self::Candidate(g) => g.next_guess(round, history),
            Self::Random(g) => g.next_guess(round, history),
        }
    }
}

impl<'a> GuesserType<'a> {
    /// Create a guesser from its name
    ///
    /// Supported names: "candidate", "random". Defaults to candidate.
    #[must_use]
    pub fn from_name(name: &str, catalog: &'a Catalog) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser::new(catalog)),
            _ => Self::Candidate(CandidateGuesser::new(catalog)),
        }
    }
}

/// Check if `candidate` could be the secret given every piece of feedback
///
/// `secret_len` is the length of the hint mask the player sees.
#[must_use]
pub fn is_consistent(candidate: &Title, secret_len: usize, history: &GuessHistory) -> bool {
    if candidate.len() != secret_len {
        return false;
    }

    history.iter().all(|(guess, result)| {
        let guess: Vec<char> = guess.chars().collect();

        if result.is_exact_match() {
            return guess.len() == candidate.len()
                && guess
                    .iter()
                    .zip(candidate.chars())
                    .all(|(&g, &c)| same_letter(g, c));
        }

        result
            .per_character_match()
            .iter()
            .zip(candidate.chars())
            .zip(&guess)
            .all(|((&matched, &c), &g)| matched == same_letter(g, c))
    })
}

fn already_guessed(title: &Title, history: &GuessHistory) -> bool {
    history
        .iter()
        .any(|(guess, _)| guess.trim().to_lowercase() == title.text().to_lowercase())
}

/// Titles from `catalog` still consistent with the feedback
#[must_use]
pub fn remaining_candidates<'a>(
    catalog: &'a Catalog,
    round: &Round,
    history: &GuessHistory,
) -> Vec<&'a Title> {
    let secret_len = round.revealed_hint_mask().len();
    catalog
        .titles()
        .filter(|title| is_consistent(title, secret_len, history))
        .filter(|title| !already_guessed(title, history))
        .collect()
}

/// Guesses the first catalog title consistent with all feedback so far
pub struct CandidateGuesser<'a> {
    catalog: &'a Catalog,
}

impl<'a> CandidateGuesser<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl Guesser for CandidateGuesser<'_> {
    fn next_guess(&self, round: &Round, history: &GuessHistory) -> Option<String> {
        remaining_candidates(self.catalog, round, history)
            .first()
            .map(|title| title.text().to_string())
    }
}

/// Guesses a random catalog title it has not tried yet
///
/// Baseline for comparing against `CandidateGuesser`.
pub struct RandomGuesser<'a> {
    catalog: &'a Catalog,
}

impl<'a> RandomGuesser<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl Guesser for RandomGuesser<'_> {
    fn next_guess(&self, _round: &Round, history: &GuessHistory) -> Option<String> {
        let untried: Vec<&Title> = self
            .catalog
            .titles()
            .filter(|title| !already_guessed(title, history))
            .collect();

        untried
            .choose(&mut rand::rng())
            .map(|title| title.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoundConfig;
    use crate::movies::loader::parse_catalog;

    fn catalog() -> Catalog {
        parse_catalog(
            "Drive\t2011\ta\tb\tc\td\n\
             Dunes\t2000\ta\tb\tc\td\n\
             Dune\t2021\ta\tb\tc\td\n\
             Heat\t1995\ta\tb\tc\td\n\
             Coco\t2017\ta\tb\tc\td\n",
        )
    }

    fn history_for(round: &Round, guesses: &[&str]) -> Vec<(String, GuessResult)> {
        guesses
            .iter()
            .map(|g| (g.to_string(), GuessResult::calculate(g, round.title())))
            .collect()
    }

    #[test]
    fn candidates_limited_by_length() {
        let catalog = catalog();
        let round = Round::start("Heat", RoundConfig::default()).unwrap();
        let titles: Vec<&str> = remaining_candidates(&catalog, &round, &[])
            .iter()
            .map(|t| t.text())
            .collect();
        assert_eq!(titles, vec!["Dune", "Heat", "Coco"]);
    }

    #[test]
    fn candidates_narrow_with_feedback() {
        let catalog = catalog();
        let round = Round::start("Heat", RoundConfig::default()).unwrap();
        // "Dune" vs "Heat": no position matches, so D-u-n-e is ruled out everywhere
        let history = history_for(&round, &["Dune"]);
        let titles: Vec<&str> = remaining_candidates(&catalog, &round, &history)
            .iter()
            .map(|t| t.text())
            .collect();
        assert_eq!(titles, vec!["Heat", "Coco"]);
    }

    #[test]
    fn matched_positions_must_agree() {
        let heat = Title::new("Heat").unwrap();
        let coco = Title::new("Coco").unwrap();
        let history = vec![("Hxxx".to_string(), GuessResult::calculate("Hxxx", &heat))];
        assert!(is_consistent(&heat, 4, &history));
        assert!(!is_consistent(&coco, 4, &history));
    }

    #[test]
    fn overlong_guess_still_informs() {
        let drive = Title::new("Drive").unwrap();
        let dunes = Title::new("Dunes").unwrap();
        let history = vec![(
            "Drivers".to_string(),
            GuessResult::calculate("Drivers", &drive),
        )];
        assert!(is_consistent(&drive, 5, &history));
        assert!(!is_consistent(&dunes, 5, &history));
    }

    #[test]
    fn candidate_guesser_solves_round() {
        let catalog = catalog();
        let guesser = CandidateGuesser::new(&catalog);
        let mut round = Round::start("Coco", RoundConfig::default()).unwrap();
        let mut history = Vec::new();

        while !round.status().is_finished() {
            let guess = guesser.next_guess(&round, &history).unwrap();
            let (outcome, next) = round.evaluate(&guess);
            history.push((guess, outcome.result().unwrap().clone()));
            round = next;
        }

        assert_eq!(round.status(), crate::engine::RoundStatus::Won);
        assert!(round.score_delta() >= 3);
    }

    #[test]
    fn random_guesser_skips_tried_titles() {
        let catalog = parse_catalog("Up\t2009\ta\tb\tc\td\nHer\t2013\ta\tb\tc\td\n");
        let guesser = RandomGuesser::new(&catalog);
        let round = Round::start("Her", RoundConfig::default()).unwrap();
        let history = history_for(&round, &["Up"]);

        for _ in 0..10 {
            assert_eq!(guesser.next_guess(&round, &history).as_deref(), Some("Her"));
        }
    }

    #[test]
    fn from_name_defaults_to_candidate() {
        let catalog = catalog();
        assert!(matches!(
            GuesserType::from_name("whatever", &catalog),
            GuesserType::Candidate(_)
        ));
        assert!(matches!(
            GuesserType::from_name("random", &catalog),
            GuesserType::Random(_)
        ));
    }
}
