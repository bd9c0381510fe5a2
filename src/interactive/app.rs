//! TUI application state and logic

use crate::engine::{
    GuessOutcome, HintField, HintSet, RevealAction, RevealTimeline, Round, RoundConfig,
    RoundStatus, ScoreState, TitleVerdict, reveal, reveal_schedule,
};
use crate::movies::{Catalog, MetadataBoard, MovieMeta, RandomTitles, TitleSource};
use crate::scores::ScoreSink;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a> {
    pub catalog: &'a Arc<Catalog>,
    titles: RandomTitles<'a>,
    sink: Box<dyn ScoreSink>,
    pub config: RoundConfig,
    pub round: Round,
    pub board: MetadataBoard,
    pub score: ScoreState,
    pub view: ViewState,
    timeline: Option<RevealTimeline>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

/// What is currently on screen
///
/// Trails the engine's `Round` while a reveal schedule plays out, so a win or a
/// miss animates instead of snapping to the final state.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub blur: f32,
    pub stars: Vec<bool>,
    pub spinning_star: Option<(usize, Instant)>,
    pub poster_spin: Option<Instant>,
    pub hints: HintSet,
    pub hint_fades: Vec<(HintField, Instant)>,
    pub verdict: Option<TitleVerdict>,
    pub score_star_lit: bool,
    pub score_star_spin: Option<Instant>,
    pub shown_score: u32,
}

impl ViewState {
    fn for_round(round: &Round, score: u32) -> Self {
        Self {
            blur: round.blur_level(),
            stars: round.stars(),
            spinning_star: None,
            poster_spin: None,
            hints: round.visible_hints(),
            hint_fades: Vec::new(),
            verdict: None,
            score_star_lit: false,
            score_star_spin: None,
            shown_score: score,
        }
    }

    /// Apply one scheduled action
    pub fn apply(&mut self, action: RevealAction, now: Instant) {
        match action {
            RevealAction::SpinStar { index } => self.spinning_star = Some((index, now)),
            RevealAction::SetStar { index, lit } => {
                if let Some(star) = self.stars.get_mut(index) {
                    *star = lit;
                }
            }
            RevealAction::FadeInHint(field) => {
                self.hints = self.hints.with(field);
                self.hint_fades.push((field, now));
            }
            RevealAction::ShowHint(field) => self.hints = self.hints.with(field),
            RevealAction::SetBlur(blur) => self.blur = blur,
            RevealAction::SpinPoster => self.poster_spin = Some(now),
            RevealAction::ShowTitle(verdict) => self.verdict = Some(verdict),
            RevealAction::SpinScoreStar => self.score_star_spin = Some(now),
            RevealAction::LightScoreStar => self.score_star_lit = true,
            RevealAction::ShowScore(total) => self.shown_score = total,
        }
    }

    /// Check if the star at `index` is mid-spin
    #[must_use]
    pub fn is_star_spinning(&self, index: usize, now: Instant) -> bool {
        self.spinning_star
            .is_some_and(|(i, started)| i == index && now.duration_since(started) < reveal::SPIN)
    }

    #[must_use]
    pub fn is_poster_spinning(&self, now: Instant) -> bool {
        self.poster_spin
            .is_some_and(|started| now.duration_since(started) < reveal::SPIN)
    }

    #[must_use]
    pub fn is_score_star_spinning(&self, now: Instant) -> bool {
        self.score_star_spin
            .is_some_and(|started| now.duration_since(started) < reveal::SPIN)
    }

    /// Check if a hint is still fading in
    #[must_use]
    pub fn is_hint_fading(&self, field: HintField, now: Instant) -> bool {
        self.hint_fades
            .iter()
            .any(|&(f, started)| f == field && now.duration_since(started) < reveal::HINT_FADE)
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the score cannot be loaded or the catalog is empty.
    pub fn new(
        catalog: &'a Arc<Catalog>,
        config: RoundConfig,
        sink: Box<dyn ScoreSink>,
    ) -> Result<Self> {
        let score = sink.load().context("failed to load score")?;
        let mut titles = RandomTitles::new(catalog);
        let title = titles.next_title().context("the movie catalog is empty")?;
        let round = Round::with_title(title, config);

        let mut app = Self {
            catalog,
            titles,
            sink,
            config,
            view: ViewState::for_round(&round, score.total),
            round,
            board: MetadataBoard::new(),
            score,
            timeline: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        app.fetch_metadata();
        app.add_message("Guess the movie! Type a title and press Enter.", MessageStyle::Info);
        if let Some(player) = app.sink.identity() {
            let greeting = format!("Playing as {player}");
            app.add_message(&greeting, MessageStyle::Info);
        }

        Ok(app)
    }

    fn fetch_metadata(&self) {
        self.board
            .fetch_in_background(Arc::clone(self.catalog), self.round.title().text().to_string());
    }

    /// Metadata for the current round, once it has arrived
    #[must_use]
    pub fn metadata(&self) -> Option<MovieMeta> {
        self.board.latest(self.round.title().text())
    }

    /// Abandon the current round and draw a new movie
    pub fn next_round(&mut self) {
        let Some(title) = self.titles.next_title() else {
            self.add_message("No more movies!", MessageStyle::Error);
            return;
        };

        self.round = Round::with_title(title, self.config);
        self.view = ViewState::for_round(&self.round, self.score.total);
        self.timeline = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.fetch_metadata();
        self.add_message("🎬 New movie!", MessageStyle::Info);
    }

    /// Score the input buffer against the current round
    pub fn submit_guess(&mut self, now: Instant) {
        let guess = self.input_buffer.trim().to_string();
        if guess.is_empty() {
            return;
        }

        let (outcome, next) = self.round.evaluate(&guess);
        let GuessOutcome::Evaluated(result) = outcome else {
            return;
        };

        if next.status().is_finished() {
            self.finish_round(&next);
        }

        // Whatever an earlier schedule had left is applied before the new one starts
        if let Some(mut timeline) = self.timeline.take() {
            for action in timeline.finish() {
                self.view.apply(action, now);
            }
        }

        let schedule = reveal_schedule(&self.round, &next, self.score.total);
        self.timeline = Some(RevealTimeline::new(schedule, now));
        self.round = next;
        self.input_buffer.clear();

        match self.round.status() {
            RoundStatus::Won => {
                let text = format!("🎉 Correct! +{} points", self.round.score_delta());
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Press Enter or Tab for the next movie.", MessageStyle::Info);
            }
            RoundStatus::Lost => {
                let text = format!(
                    "💀 Out of chances. It was {}",
                    self.round.title().text()
                );
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press Enter or Tab for the next movie.", MessageStyle::Info);
            }
            RoundStatus::InProgress => {
                let text = format!(
                    "Not quite: {} in place, {} chance{} left",
                    result.matched_count(),
                    self.round.remaining_chances(),
                    if self.round.remaining_chances() == 1 { "" } else { "s" }
                );
                self.add_message(&text, MessageStyle::Error);
            }
        }

        self.tick(now);
    }

    fn finish_round(&mut self, finished: &Round) {
        self.score.record(finished);
        self.stats.rounds_played += 1;
        self.input_mode = InputMode::RoundOver;

        if finished.status() == RoundStatus::Won {
            self.stats.rounds_won += 1;
            match self.sink.store(&self.score) {
                Ok(()) => info!(total = self.score.total, "score updated"),
                Err(e) => {
                    warn!(error = %e, "failed to save score");
                    self.add_message(&format!("Could not save score: {e}"), MessageStyle::Error);
                }
            }
        }
    }

    /// Run any scheduled reveal steps that are due
    pub fn tick(&mut self, now: Instant) {
        if let Some(timeline) = &mut self.timeline {
            for action in timeline.due(now) {
                self.view.apply(action, now);
            }
            if timeline.is_done() {
                self.timeline = None;
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => {
                    app.next_round();
                }
                _ => match app.input_mode {
                    InputMode::RoundOver => {
                        if key.code == KeyCode::Enter {
                            app.next_round();
                        }
                    }
                    InputMode::Guessing => match key.code {
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => {
                            app.submit_guess(Instant::now());
                        }
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::loader::parse_catalog;
    use crate::scores::LocalScore;

    fn one_movie() -> Arc<Catalog> {
        Arc::new(parse_catalog(
            "Up\t2009\tPete Docter\tEd Asner\tBalloons.\tup.jpg\n",
        ))
    }

    fn app(catalog: &Arc<Catalog>) -> App<'_> {
        App::new(catalog, RoundConfig::default(), Box::new(LocalScore::new())).unwrap()
    }

    #[test]
    fn new_app_starts_guessing() {
        let catalog = one_movie();
        let app = app(&catalog);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.round.title().text(), "Up");
        assert_eq!(app.view.stars, vec![true; 5]);
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let catalog = Arc::new(Catalog::default());
        assert!(App::new(&catalog, RoundConfig::default(), Box::new(LocalScore::new())).is_err());
    }

    #[test]
    fn miss_animates_star_then_turns_it_off() {
        let catalog = one_movie();
        let mut app = app(&catalog);
        let start = Instant::now();

        app.input_buffer = "Up2".to_string();
        app.submit_guess(start);

        assert_eq!(app.round.remaining_chances(), 4);
        assert!(app.view.is_star_spinning(4, start));
        assert!(app.view.stars[4], "star goes out only after the swap point");
        assert!(app.view.hints.contains(HintField::Year));

        app.tick(start + reveal::SPIN_SWAP);
        assert!(!app.view.stars[4]);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn win_updates_score_after_delay() {
        let catalog = one_movie();
        let mut app = app(&catalog);
        let start = Instant::now();

        app.input_buffer = "up".to_string();
        app.submit_guess(start);

        assert_eq!(app.score.total, 5);
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.view.verdict, Some(TitleVerdict::Correct));
        assert_eq!(app.view.shown_score, 0);

        app.tick(start + reveal::SCORE_DELAY);
        assert_eq!(app.view.shown_score, 5);
        assert!(app.view.score_star_lit);
        assert_eq!(app.stats.rounds_won, 1);
    }

    #[test]
    fn next_round_resets_view() {
        let catalog = one_movie();
        let mut app = app(&catalog);
        app.input_buffer = "nope".to_string();
        app.submit_guess(Instant::now());

        app.next_round();
        assert_eq!(app.round.remaining_chances(), 5);
        assert_eq!(app.view.stars, vec![true; 5]);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn blank_guess_is_ignored() {
        let catalog = one_movie();
        let mut app = app(&catalog);
        app.input_buffer = "   ".to_string();
        app.submit_guess(Instant::now());
        assert_eq!(app.round.remaining_chances(), 5);
    }
}
