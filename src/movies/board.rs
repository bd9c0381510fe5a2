//! Shared metadata side table
//!
//! Metadata lookups are fire-and-forget: a background fetch publishes its result
//! here whenever it lands, and readers only ever see the latest published value.
//! Round progression never waits on it.

use super::catalog::MovieMeta;
use super::source::MetadataSource;
use rustc_hash::FxHashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Latest known metadata per title, shareable across threads
#[derive(Debug, Clone, Default)]
pub struct MetadataBoard {
    entries: Arc<RwLock<FxHashMap<String, MovieMeta>>>,
}

impl MetadataBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish metadata, replacing anything earlier for the same title
    pub fn publish(&self, meta: MovieMeta) {
        let key = meta.title.text().to_lowercase();
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, meta);
    }

    /// The latest published metadata for `title`, if any has arrived
    #[must_use]
    pub fn latest(&self, title: &str) -> Option<MovieMeta> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&title.to_lowercase())
            .cloned()
    }

    /// Look `title` up on a background thread and publish the result
    ///
    /// Nothing is published when the source knows nothing about the title.
    pub fn fetch_in_background<S>(&self, source: Arc<S>, title: String) -> JoinHandle<()>
    where
        S: MetadataSource + Send + Sync + 'static,
    {
        let board = self.clone();
        thread::spawn(move || {
            if let Some(meta) = source.fetch(&title) {
                debug!(title = %title, "metadata published");
                board.publish(meta);
            } else {
                debug!(title = %title, "no metadata found");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::Catalog;

    fn meta(title: &str, year: &str) -> MovieMeta {
        MovieMeta::from_row([title, year, "d", "a", "s", "p"]).unwrap()
    }

    #[test]
    fn latest_is_none_before_publish() {
        let board = MetadataBoard::new();
        assert!(board.latest("Up").is_none());
    }

    #[test]
    fn publish_replaces_previous() {
        let board = MetadataBoard::new();
        board.publish(meta("Up", "2009"));
        board.publish(meta("Up", "2010"));
        assert_eq!(board.latest("up").unwrap().year, "2010");
    }

    #[test]
    fn clones_share_entries() {
        let board = MetadataBoard::new();
        let reader = board.clone();
        board.publish(meta("Soul", "2020"));
        assert!(reader.latest("Soul").is_some());
    }

    #[test]
    fn background_fetch_publishes() {
        let catalog = Arc::new(Catalog::new([meta("Dune", "2021")]));
        let board = MetadataBoard::new();

        board
            .fetch_in_background(Arc::clone(&catalog), "dune".to_string())
            .join()
            .unwrap();

        assert_eq!(board.latest("Dune").unwrap().year, "2021");
    }

    #[test]
    fn background_fetch_unknown_title_publishes_nothing() {
        let catalog = Arc::new(Catalog::default());
        let board = MetadataBoard::new();

        board
            .fetch_in_background(catalog, "Nothing".to_string())
            .join()
            .unwrap();

        assert!(board.latest("Nothing").is_none());
    }
}
