//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::engine::{GuessOutcome, Round, RoundConfig, RoundStatus, ScoreState};
use crate::movies::{Catalog, MetadataBoard, RandomTitles, TitleSource};
use crate::output::{print_guess_feedback, print_round, print_round_end};
use crate::scores::ScoreSink;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, if the catalog
/// is empty, or if the score sink fails.
pub fn run_simple(
    catalog: &Arc<Catalog>,
    config: RoundConfig,
    sink: &mut dyn ScoreSink,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Guess the Movie - Simple Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type the movie title. Matching letters are revealed in place.");
    println!(
        "You have {} chances; every miss sharpens the poster and unlocks a hint.\n",
        config.max_chances()
    );
    println!("Commands: ':next' for another movie, ':quit' to exit\n");

    let mut score = sink.load().context("failed to load score")?;
    if let Some(player) = sink.identity() {
        println!("Welcome back, {}! Score: {}\n", player.bright_cyan(), score.total);
    }

    let mut titles = RandomTitles::new(catalog);
    let board = MetadataBoard::new();

    loop {
        let title = titles.next_title().context("the movie catalog is empty")?;
        board.fetch_in_background(Arc::clone(catalog), title.text().to_string());
        let mut round = Round::with_title(title, config);

        print_round(&round, board.latest(round.title().text()).as_ref(), &score);

        while !round.status().is_finished() {
            let Some(input) = get_user_input("Your guess")? else {
                println!("\n👋 Thanks for playing! Final score: {}\n", score.total);
                return Ok(());
            };

            match input.to_lowercase().as_str() {
                ":quit" | ":q" | ":exit" => {
                    println!("\n👋 Thanks for playing! Final score: {}\n", score.total);
                    return Ok(());
                }
                ":next" | ":n" => break,
                _ => {}
            }

            let (outcome, next) = round.evaluate(&input);
            if let GuessOutcome::Evaluated(result) = &outcome {
                print_guess_feedback(result, &next);
            }
            round = next;

            if !round.status().is_finished() {
                print_round(&round, board.latest(round.title().text()).as_ref(), &score);
            }
        }

        if round.status().is_finished() {
            finish_round(&round, &mut score, sink)?;
            print_round_end(&round, board.latest(round.title().text()).as_ref(), &score);
        }

        let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
        match answer.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🎬 Next movie!\n"),
            _ => {
                println!("\n👋 Thanks for playing! Final score: {}\n", score.total);
                return Ok(());
            }
        }
    }
}

/// Record a finished round and persist the total after a win
fn finish_round(round: &Round, score: &mut ScoreState, sink: &mut dyn ScoreSink) -> Result<()> {
    score.record(round);
    if round.status() == RoundStatus::Won {
        sink.store(score).context("failed to save score")?;
    }
    Ok(())
}

/// Get user input with a prompt
///
/// Returns `None` once stdin is closed.
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    read_input(&mut io::stdin().lock())
}

/// Read one trimmed line, or `None` at end of input
fn read_input(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::LocalScore;

    #[test]
    fn finish_round_stores_wins() {
        let (_, round) = Round::start("Up", RoundConfig::default())
            .unwrap()
            .evaluate("up");
        let mut score = ScoreState::new(1);
        let mut sink = LocalScore::new();

        finish_round(&round, &mut score, &mut sink).unwrap();

        assert_eq!(score.total, 6);
        assert_eq!(sink.load().unwrap().total, 6);
    }

    #[test]
    fn finish_round_does_not_store_losses() {
        let mut round = Round::start("Up", RoundConfig::default()).unwrap();
        for _ in 0..5 {
            round = round.evaluate("no").1;
        }
        let mut score = ScoreState::new(4);
        let mut sink = LocalScore::new();

        finish_round(&round, &mut score, &mut sink).unwrap();

        assert_eq!(score.total, 4);
        assert_eq!(sink.load().unwrap().total, 0);
    }

    #[test]
    fn read_input_stops_at_end_of_input() {
        let mut empty = io::Cursor::new("");
        assert_eq!(read_input(&mut empty).unwrap(), None);
    }

    #[test]
    fn read_input_trims_lines_then_ends() {
        let mut lines = io::Cursor::new("  Up \n\n");
        assert_eq!(read_input(&mut lines).unwrap(), Some("Up".to_string()));
        assert_eq!(read_input(&mut lines).unwrap(), Some(String::new()));
        assert_eq!(read_input(&mut lines).unwrap(), None);
    }
}
