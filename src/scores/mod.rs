//! Score persistence

mod store;

pub use store::{FileScoreStore, LocalScore, ScoreError, ScoreSink};

/// Pick a sink: a file store for a named player, memory otherwise
#[must_use]
pub fn sink_for(player: Option<&str>, path: &std::path::Path) -> Box<dyn ScoreSink> {
    match player {
        Some(name) => Box::new(FileScoreStore::new(path, name)),
        None => Box::new(LocalScore::new()),
    }
}
