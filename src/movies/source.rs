//! Title and metadata sources
//!
//! The round engine only needs a title to start and never waits on metadata, so
//! both sources are small traits that front ends pick implementations for.

use super::catalog::{Catalog, MovieMeta};
use crate::core::Title;
use rand::prelude::IndexedRandom;

/// Supplies secret titles for new rounds
pub trait TitleSource {
    /// Draw the next title, or `None` if the source has nothing to offer
    fn next_title(&mut self) -> Option<Title>;
}

/// Supplies metadata for a title
pub trait MetadataSource {
    /// Look up the movie; `None` when nothing is known about it
    fn fetch(&self, title: &str) -> Option<MovieMeta>;
}

impl MetadataSource for Catalog {
    fn fetch(&self, title: &str) -> Option<MovieMeta> {
        self.get(title).cloned()
    }
}

/// Uniform random draw from a catalog, repeats allowed
pub struct RandomTitles<'a> {
    catalog: &'a Catalog,
}

impl<'a> RandomTitles<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl TitleSource for RandomTitles<'_> {
    fn next_title(&mut self) -> Option<Title> {
        self.catalog.movies().choose(&mut rand::rng()).map(|movie| movie.title.clone())
    }
}

/// Walks the catalog in order and wraps around
///
/// Handy for playing through every movie once.
pub struct CyclingTitles<'a> {
    catalog: &'a Catalog,
    position: usize,
}

impl<'a> CyclingTitles<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            position: 0,
        }
    }
}

impl TitleSource for CyclingTitles<'_> {
    fn next_title(&mut self) -> Option<Title> {
        if self.catalog.is_empty() {
            return None;
        }
        let title = self.catalog.movies()[self.position].title.clone();
        self.position = (self.position + 1) % self.catalog.len();
        Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::loader::parse_catalog;

    fn small_catalog() -> Catalog {
        parse_catalog(
            "Up\t2009\tPete Docter\tEd Asner\tBalloons.\tup.jpg\n\
             Jaws\t1975\tSteven Spielberg\tRoy Scheider\tShark.\tjaws.jpg\n",
        )
    }

    #[test]
    fn random_titles_come_from_catalog() {
        let catalog = small_catalog();
        let mut source = RandomTitles::new(&catalog);
        for _ in 0..20 {
            let title = source.next_title().unwrap();
            assert!(catalog.get(title.text()).is_some());
        }
    }

    #[test]
    fn random_titles_empty_catalog() {
        let catalog = Catalog::default();
        assert!(RandomTitles::new(&catalog).next_title().is_none());
    }

    #[test]
    fn cycling_titles_wrap_around() {
        let catalog = small_catalog();
        let mut source = CyclingTitles::new(&catalog);
        let drawn: Vec<String> = (0..3)
            .filter_map(|_| source.next_title())
            .map(|t| t.text().to_string())
            .collect();
        assert_eq!(drawn, vec!["Up", "Jaws", "Up"]);
    }

    #[test]
    fn catalog_is_a_metadata_source() {
        let catalog = small_catalog();
        assert_eq!(catalog.fetch("jaws").unwrap().year, "1975");
        assert!(catalog.fetch("Alien").is_none());
    }
}
