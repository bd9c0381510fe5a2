//! Guess evaluation against a secret title
//!
//! A guess is compared with the title position by position, ignoring case:
//! - a position matches when both strings have a character there and they agree
//! - positions past the end of the guess never match
//! - extra characters past the end of the title never earn credit
//!
//! A guess is exact only when every position matches and the lengths agree, so an
//! overlong guess with a correct prefix still counts as a miss.

use super::Title;

/// Feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    per_character_match: Vec<bool>,
    is_exact_match: bool,
    length_mismatch: bool,
}

impl GuessResult {
    /// Calculate the feedback when `guess` is submitted against `title`
    ///
    /// # Examples
    /// ```
    /// use guess_the_movie::core::{GuessResult, Title};
    ///
    /// let title = Title::new("Up").unwrap();
    ///
    /// let result = GuessResult::calculate("up", &title);
    /// assert!(result.is_exact_match());
    ///
    /// let result = GuessResult::calculate("Up2", &title);
    /// assert!(!result.is_exact_match());
    /// assert!(result.length_mismatch());
    /// assert_eq!(result.per_character_match(), &[true, true]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, title: &Title) -> Self {
        let guess: Vec<char> = guess.chars().collect();

        let per_character_match: Vec<bool> = title
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &secret)| guess.get(i).is_some_and(|&typed| same_letter(typed, secret)))
            .collect();

        let length_mismatch = guess.len() != title.len();
        let is_exact_match = !length_mismatch && per_character_match.iter().all(|&m| m);

        Self {
            per_character_match,
            is_exact_match,
            length_mismatch,
        }
    }

    /// One flag per title character, true where the guess matched
    #[inline]
    #[must_use]
    pub fn per_character_match(&self) -> &[bool] {
        &self.per_character_match
    }

    /// Check if the guess is the title, ignoring case
    #[inline]
    #[must_use]
    pub const fn is_exact_match(&self) -> bool {
        self.is_exact_match
    }

    /// Check if the guess length differs from the title length
    #[inline]
    #[must_use]
    pub const fn length_mismatch(&self) -> bool {
        self.length_mismatch
    }

    /// Count the matched positions
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.per_character_match.iter().filter(|&&m| m).count()
    }
}

/// Case-insensitive character equality
///
/// Each side is lowered to a single character, so 'É' matches 'é' and 'İ'
/// matches 'i' even though its full lowercase form is two characters.
#[must_use]
pub fn same_letter(a: char, b: char) -> bool {
    a == b || lower_char(a) == lower_char(b)
}

fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
