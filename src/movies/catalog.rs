//! Movie metadata and the catalog that holds it

use super::embedded::MOVIES;
use crate::core::Title;
use crate::engine::HintField;
use rustc_hash::FxHashMap;
use tracing::warn;

/// Everything known about one movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieMeta {
    pub title: Title,
    pub year: String,
    pub director: String,
    pub actor: String,
    pub synopsis: String,
    pub poster: String,
}

impl MovieMeta {
    /// Build from the six catalog columns
    ///
    /// Returns `None` if the title column is empty.
    #[must_use]
    pub fn from_row(row: [&str; 6]) -> Option<Self> {
        let [title, year, director, actor, synopsis, poster] = row;
        Some(Self {
            title: Title::new(title).ok()?,
            year: year.trim().to_string(),
            director: director.trim().to_string(),
            actor: actor.trim().to_string(),
            synopsis: synopsis.trim().to_string(),
            poster: poster.trim().to_string(),
        })
    }

    /// The text for a hint field
    #[must_use]
    pub fn field(&self, field: HintField) -> &str {
        match field {
            HintField::Year => &self.year,
            HintField::Director => &self.director,
            HintField::Actor => &self.actor,
            HintField::Synopsis => &self.synopsis,
        }
    }
}

/// A set of movies, looked up by title ignoring case
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieMeta>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the first entry for duplicate titles
    #[must_use]
    pub fn new(movies: impl IntoIterator<Item = MovieMeta>) -> Self {
        let mut catalog = Self::default();
        for movie in movies {
            let key = movie.title.text().to_lowercase();
            if catalog.index.contains_key(&key) {
                warn!(title = %movie.title, "duplicate catalog entry skipped");
                continue;
            }
            catalog.index.insert(key, catalog.movies.len());
            catalog.movies.push(movie);
        }
        catalog
    }

    /// The catalog compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use guess_the_movie::movies::{Catalog, MOVIES};
    ///
    /// let catalog = Catalog::embedded();
    /// assert_eq!(catalog.len(), MOVIES.len());
    /// assert!(catalog.get("up").is_some());
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(MOVIES.iter().filter_map(|&row| MovieMeta::from_row(row)))
    }

    /// Look up a movie by title, ignoring case
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&MovieMeta> {
        self.index
            .get(&title.trim().to_lowercase())
            .map(|&i| &self.movies[i])
    }

    #[must_use]
    pub fn movies(&self) -> &[MovieMeta] {
        &self.movies
    }

    /// All titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &Title> {
        self.movies.iter().map(|movie| &movie.title)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
