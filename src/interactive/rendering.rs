//! TUI rendering with ratatui
//!
//! The poster has no image in a terminal, so it is drawn as a text card hidden
//! behind noise whose density follows the current blur level.

use super::app::{App, InputMode, MessageStyle, ViewState};
use crate::engine::{HintField, TitleVerdict};
use crate::movies::MovieMeta;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

const NOISE: &[char] = &['░', '▒', '▓', '#', '%', '&', '*', '+', '=', '~'];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Poster + hints
            Constraint::Length(3), // Title hint line
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, now, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Poster
            Constraint::Percentage(45), // Hints + messages
        ])
        .split(chunks[1]);

    let meta = app.metadata();
    render_poster(f, app, meta.as_ref(), now, main_chunks[0]);
    render_side_panel(f, app, meta.as_ref(), now, main_chunks[1]);

    render_title_hint(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, now, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let mut spans = vec![Span::styled(
        "🎬 GUESS THE MOVIE   ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, &lit) in app.view.stars.iter().enumerate() {
        let (symbol, color) = if app.view.is_star_spinning(i, now) {
            ("✦", Color::Yellow)
        } else if lit {
            ("★", Color::Yellow)
        } else {
            ("☆", Color::DarkGray)
        };
        spans.push(Span::styled(format!("{symbol} "), Style::default().fg(color)));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Lines printed on the poster card underneath the noise
fn poster_card(app: &App, meta: Option<&MovieMeta>) -> Vec<String> {
    let title = app.round.title().text().to_uppercase();
    match meta {
        Some(meta) => vec![
            String::new(),
            meta.actor.to_uppercase(),
            String::new(),
            title,
            String::new(),
            format!("a film by {}", meta.director),
            String::new(),
            meta.poster.clone(),
        ],
        None => vec![String::new(), title],
    }
}

/// Cheap deterministic per-cell hash, so the noise holds still between frames
fn cell_hash(x: usize, y: usize, seed: usize) -> usize {
    let mut h = x.wrapping_mul(0x9E37_79B9) ^ y.wrapping_mul(0x85EB_CA6B) ^ seed;
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}

/// Fraction of poster cells hidden behind noise, from 0.0 to 1.0
fn blur_ratio(view: &ViewState, app: &App) -> f32 {
    let floor = app.config.reveal_floor();
    let span = app.config.max_blur() - floor;
    if span <= 0.0 {
        return 0.0;
    }
    ((view.blur - floor) / span).clamp(0.0, 1.0)
}

fn render_poster(f: &mut Frame, app: &App, meta: Option<&MovieMeta>, now: Instant, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let ratio = blur_ratio(&app.view, app);
    let threshold = (ratio * 1000.0) as usize;
    let seed = app.round.title().len();

    let card = poster_card(app, meta);
    let lines: Vec<Line> = (0..inner_height)
        .map(|y| {
            let text = card.get(y).map_or("", String::as_str);
            let chars: Vec<char> = text.chars().collect();
            let pad = inner_width.saturating_sub(chars.len()) / 2;

            let row: String = (0..inner_width)
                .map(|x| {
                    let h = cell_hash(x, y, seed);
                    if h % 1000 < threshold {
                        NOISE[h % NOISE.len()]
                    } else {
                        x.checked_sub(pad)
                            .and_then(|i| chars.get(i).copied())
                            .unwrap_or(' ')
                    }
                })
                .collect();
            Line::from(row)
        })
        .collect();

    let border_color = if app.view.is_poster_spinning(now) {
        Color::Yellow
    } else {
        Color::Magenta
    };

    let poster = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Poster (blur {:.0}) ", app.view.blur))
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(poster, area);
}

fn render_side_panel(f: &mut Frame, app: &App, meta: Option<&MovieMeta>, now: Instant, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Hints
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_hints(f, app, meta, now, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hints(f: &mut Frame, app: &App, meta: Option<&MovieMeta>, now: Instant, area: Rect) {
    let lines: Vec<Line> = HintField::ALL
        .iter()
        .map(|&field| {
            let label = Span::styled(
                format!("{:<10}", format!("{field}:")),
                Style::default().fg(Color::Cyan),
            );

            if !app.view.hints.contains(field) {
                return Line::from(vec![label, Span::styled("🔒", Style::default().fg(Color::DarkGray))]);
            }

            let text = meta.map_or_else(|| "…".to_string(), |m| m.field(field).to_string());
            let color = if app.view.is_hint_fading(field, now) {
                Color::DarkGray
            } else {
                Color::White
            };
            Line::from(vec![label, Span::styled(text, Style::default().fg(color))])
        })
        .collect();

    let hints = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Hints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(hints, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_title_hint(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.view.verdict {
        Some(TitleVerdict::Correct) => (
            app.round.hint_line(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Some(TitleVerdict::Wrong) => (
            app.round.hint_line(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            app.round.hint_line(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let hint = Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Title ").borders(Borders::ALL));
    f.render_widget(hint, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Enter/Tab: next movie | Esc: quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your Guess | Enter: submit | Tab: skip movie ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let star = if app.view.score_star_lit || app.view.is_score_star_spinning(now) {
        "⭐"
    } else {
        "☆"
    };
    let score = Paragraph::new(format!("{star} x {}", app.view.shown_score))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(score, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Won: {:.0}%",
        app.stats.rounds_played,
        if app.stats.rounds_played > 0 {
            app.stats.rounds_won as f64 / app.stats.rounds_played as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let chances_text = format!("Chances: {}", app.round.remaining_chances());
    let chances = Paragraph::new(chances_text).alignment(Alignment::Center);
    f.render_widget(chances, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Tab: Next Movie")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_hash_is_stable() {
        assert_eq!(cell_hash(3, 4, 7), cell_hash(3, 4, 7));
        assert_ne!(cell_hash(3, 4, 7), cell_hash(4, 3, 7));
    }
}
