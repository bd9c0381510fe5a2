//! Secret movie title representation
//!
//! A Title stores the display text of a movie together with its characters, so that
//! guesses can be compared position-by-position without re-decoding UTF-8.

use std::fmt;
use thiserror::Error;

/// A movie title to be guessed
///
/// The display casing is preserved; comparisons against guesses ignore case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid titles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("Title must not be empty")]
    Empty,
}

impl Title {
    /// Create a new Title from a string
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns `TitleError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use guess_the_movie::core::Title;
    ///
    /// let title = Title::new("The Matrix").unwrap();
    /// assert_eq!(title.text(), "The Matrix");
    /// assert_eq!(title.len(), 10);
    ///
    /// assert!(Title::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, TitleError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(TitleError::Empty);
        }

        Ok(Self {
            text: text.to_string(),
            chars: text.chars().collect(),
        })
    }

    /// Get the title as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the title's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the title (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: an empty title cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// Returns `None` past the end of the title.
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Check if the title has a space at a position
    ///
    /// Spaces are shown as gaps in the hint line and never need guessing.
    #[inline]
    #[must_use]
    pub fn is_space_at(&self, position: usize) -> bool {
        self.char_at(position).is_some_and(char::is_whitespace)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
