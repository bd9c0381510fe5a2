//! Movie catalog, title sources and metadata
//!
//! Provides an embedded catalog compiled into the binary, plus loaders and the
//! source traits the front ends draw titles and hints from.

mod board;
mod catalog;
mod embedded;
pub mod loader;
mod source;

pub use board::MetadataBoard;
pub use catalog::{Catalog, MovieMeta};
pub use embedded::{MOVIES, MOVIES_COUNT};
pub use loader::CatalogError;
pub use source::{CyclingTitles, MetadataSource, RandomTitles, TitleSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movies_count_matches_const() {
        assert_eq!(MOVIES.len(), MOVIES_COUNT);
    }

    #[test]
    fn movie_titles_are_valid() {
        for row in MOVIES {
            assert!(!row[0].trim().is_empty(), "catalog row without a title");
        }
    }

    #[test]
    fn embedded_titles_are_unique() {
        assert_eq!(Catalog::embedded().len(), MOVIES_COUNT);
    }
}
