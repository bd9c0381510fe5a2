//! Display functions for rounds and command results

use super::formatters::{blur_bar, stars_line};
use crate::commands::SimulationStatistics;
use crate::core::GuessResult;
use crate::engine::{Round, RoundStatus, ScoreState};
use crate::movies::MovieMeta;
use colored::Colorize;

/// Print the current state of a round
pub fn print_round(round: &Round, meta: Option<&MovieMeta>, score: &ScoreState) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "  {}   {} {}",
        round.hint_line().bright_white().bold(),
        stars_line(&round.stars()).bright_yellow(),
        format!("⭐ x {}", score.total).bright_black()
    );
    println!(
        "  Poster blur: [{}] {:.0}",
        blur_bar(round.blur_level(), round.config().max_blur(), 20).cyan(),
        round.blur_level()
    );

    print_hints(round, meta);
    println!("{}", "─".repeat(60).cyan());
}

fn print_hints(round: &Round, meta: Option<&MovieMeta>) {
    let visible = round.visible_hints();
    if visible.is_empty() {
        return;
    }

    for field in visible.iter() {
        let text = meta.map_or("(still loading)", |m| m.field(field));
        println!("  {:<9} {}", format!("{field}:").bright_cyan(), text);
    }
}

/// Print the feedback for one guess
pub fn print_guess_feedback(result: &GuessResult, round: &Round) {
    if result.is_exact_match() {
        return;
    }

    let matched = result.matched_count();
    let mut line = format!(
        "❌ Not quite: {matched} letter{} in place",
        if matched == 1 { "" } else { "s" }
    );
    if result.length_mismatch() {
        line.push_str(&format!(", title has {} characters", round.title().len()));
    }
    println!("\n{}", line.red());
}

/// Print the end of a round
pub fn print_round_end(round: &Round, meta: Option<&MovieMeta>, score: &ScoreState) {
    let title = round.disclosed_title().unwrap_or_default();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match round.status() {
        RoundStatus::Won => {
            println!(
                "  {} {}",
                "🎉 Correct!".bright_green().bold(),
                title.on_green().black().bold()
            );
            println!(
                "  +{} points, total {}",
                round.score_delta().to_string().bright_yellow().bold(),
                score.total.to_string().bright_cyan().bold()
            );
        }
        RoundStatus::Lost => {
            println!(
                "  {} {}",
                "💀 Out of chances. It was".red().bold(),
                title.on_red().white().bold()
            );
            println!("  Total {}", score.total.to_string().bright_cyan());
        }
        RoundStatus::InProgress => {}
    }

    if let Some(meta) = meta {
        println!(
            "  {} ({}), directed by {}, starring {}",
            meta.title.text().bright_white(),
            meta.year,
            meta.director,
            meta.actor
        );
        println!("  {}", meta.synopsis.bright_black());
        println!("  Poster: {}", meta.poster);
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics, guesser_name: &str) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ({guesser_name}) ");
    println!("{}", "═".repeat(70));

    if stats.total_rounds == 0 {
        println!("\nNo rounds played.");
        return;
    }

    let total = stats.total_rounds as f64;

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Rounds played:   {}", stats.total_rounds);
    println!(
        "  Won:             {} {}",
        stats.won,
        format!("({:.1}%)", stats.won as f64 / total * 100.0).green()
    );
    if stats.lost > 0 {
        println!(
            "  Lost:            {} {}",
            stats.lost,
            format!("({:.1}%)", stats.lost as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Total score:     {}",
        stats.score.total.to_string().bright_yellow().bold()
    );
    println!("  Average score:   {:.2}", stats.average_score);
    println!("  Time taken:      {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Winning Guess".bright_cyan().bold());
    let max_count = stats.win_distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.win_distribution {
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        println!(
            "  {guesses}: {}{} {count:4}",
            "█".repeat(bar_len).green(),
            "░".repeat(40 - bar_len).bright_black()
        );
    }

    if !stats.lost_titles.is_empty() {
        println!("\n💀 {}", "Lost Titles".bright_cyan().bold());
        for title in stats.lost_titles.iter().take(10) {
            println!("  • {title}");
        }
    }
    println!();
}
