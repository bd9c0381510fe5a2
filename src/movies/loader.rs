//! Catalog loading utilities
//!
//! Reads tab-separated catalogs: `title, year, director, actor, synopsis, poster`.
//! Blank lines and lines starting with `#` are skipped.

use super::catalog::{Catalog, MovieMeta};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Catalog {0} contains no usable movies")]
    Empty(PathBuf),
}

/// Load a catalog from a file
///
/// Malformed lines are skipped with a warning.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or
/// `CatalogError::Empty` if no line holds a usable movie.
///
/// # Examples
/// ```no_run
/// use guess_the_movie::movies::loader::load_from_file;
///
/// let catalog = load_from_file("data/movies.tsv").unwrap();
/// println!("Loaded {} movies", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&content);
    if catalog.is_empty() {
        return Err(CatalogError::Empty(path.to_path_buf()));
    }

    Ok(catalog)
}

/// Parse catalog text, skipping anything that is not a complete row
#[must_use]
pub fn parse_catalog(content: &str) -> Catalog {
    let movies = content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let movie = parse_line(line);
            if movie.is_none() {
                warn!(line = number + 1, "skipping malformed catalog line");
            }
            movie
        })
        .collect::<Vec<_>>();

    Catalog::new(movies)
}

fn parse_line(line: &str) -> Option<MovieMeta> {
    let fields: Vec<&str> = line.split('\t').collect();
    let row: [&str; 6] = fields.try_into().ok()?;
    MovieMeta::from_row(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog_reads_rows() {
        let text = "# header\nUp\t2009\tPete Docter\tEd Asner\tBalloons.\tup.jpg\n\n\
                    Jaws\t1975\tSteven Spielberg\tRoy Scheider\tShark.\tjaws.jpg\n";
        let catalog = parse_catalog(text);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("up").unwrap().director, "Pete Docter");
        assert_eq!(catalog.get("jaws").unwrap().year, "1975");
    }

    #[test]
    fn parse_catalog_skips_malformed() {
        let text = "Up\t2009\tonly three\n\
                    \t2001\ta\tb\tc\td\n\
                    Coco\t2017\tLee Unkrich\tAnthony Gonzalez\tMusic.\tcoco.jpg\n";
        let catalog = parse_catalog(text);

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("coco").is_some());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here.tsv");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_empty_file_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "guess_the_movie_empty_{}.tsv",
            std::process::id()
        ));
        fs::write(&path, "# nothing here\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(CatalogError::Empty(_))));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "guess_the_movie_catalog_{}.tsv",
            std::process::id()
        ));
        fs::write(&path, "Her\t2013\tSpike Jonze\tJoaquin Phoenix\tAn OS.\ther.jpg\n").unwrap();

        let catalog = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("HER").unwrap().actor, "Joaquin Phoenix");
    }
}
