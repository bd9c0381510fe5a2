//! Score sinks
//!
//! Signed-in players get their total stored in a JSON file keyed by name;
//! anonymous play keeps a score of the same shape in memory only.

use crate::engine::ScoreState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised by persistent score sinks
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Failed to access score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Score file {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Somewhere to keep the running total
pub trait ScoreSink {
    /// The total to resume from
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn load(&self) -> Result<ScoreState, ScoreError>;

    /// Save the current total
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn store(&mut self, score: &ScoreState) -> Result<(), ScoreError>;

    /// Who the score belongs to; `None` for anonymous play
    fn identity(&self) -> Option<&str>;
}

/// In-memory score for anonymous play
#[derive(Debug, Default)]
pub struct LocalScore {
    score: ScoreState,
}

impl LocalScore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreSink for LocalScore {
    fn load(&self) -> Result<ScoreState, ScoreError> {
        Ok(self.score)
    }

    fn store(&mut self, score: &ScoreState) -> Result<(), ScoreError> {
        self.score = *score;
        Ok(())
    }

    fn identity(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreBook {
    players: BTreeMap<String, ScoreState>,
}

/// Per-player totals in a JSON file
#[derive(Debug)]
pub struct FileScoreStore {
    path: PathBuf,
    player: String,
}

impl FileScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, player: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            player: player.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_book(&self) -> Result<ScoreBook, ScoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ScoreBook::default()),
            Err(source) => {
                return Err(ScoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ScoreError::Format {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreSink for FileScoreStore {
    fn load(&self) -> Result<ScoreState, ScoreError> {
        let book = self.read_book()?;
        Ok(book.players.get(&self.player).copied().unwrap_or_default())
    }

    fn store(&mut self, score: &ScoreState) -> Result<(), ScoreError> {
        let mut book = self.read_book()?;
        book.players.insert(self.player.clone(), *score);

        let json = serde_json::to_string_pretty(&book).map_err(|source| ScoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| ScoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(player = %self.player, total = score.total, "score saved");
        Ok(())
    }

    fn identity(&self) -> Option<&str> {
        Some(&self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "guess_the_movie_{name}_{}.json",
            std::process::id()
        ))
    }

    #[test]
    fn local_score_round_trip() {
        let mut sink = LocalScore::new();
        assert_eq!(sink.load().unwrap(), ScoreState::default());

        sink.store(&ScoreState::new(8)).unwrap();
        assert_eq!(sink.load().unwrap().total, 8);
        assert!(sink.identity().is_none());
    }

    #[test]
    fn file_store_missing_file_starts_at_zero() {
        let store = FileScoreStore::new(temp_path("missing"), "ana");
        assert_eq!(store.load().unwrap().total, 0);
    }

    #[test]
    fn file_store_keeps_players_apart() {
        let path = temp_path("players");
        let mut ana = FileScoreStore::new(&path, "ana");
        let mut ben = FileScoreStore::new(&path, "ben");

        ana.store(&ScoreState::new(5)).unwrap();
        ben.store(&ScoreState::new(2)).unwrap();
        ana.store(&ScoreState::new(9)).unwrap();

        let ana_total = ana.load().unwrap().total;
        let ben_total = ben.load().unwrap().total;
        fs::remove_file(&path).ok();

        assert_eq!(ana_total, 9);
        assert_eq!(ben_total, 2);
        assert_eq!(ana.identity(), Some("ana"));
    }

    #[test]
    fn file_store_rejects_garbage() {
        let path = temp_path("garbage");
        fs::write(&path, "not json").unwrap();

        let result = FileScoreStore::new(&path, "ana").load();
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ScoreError::Format { .. })));
    }
}
