//! Core domain types for guessing movie titles
//!
//! Pure types with no I/O: the secret title, per-guess feedback and the hint line.

mod hint;
mod matching;
mod title;

pub use hint::hint_line;
pub use matching::{GuessResult, same_letter};
pub use title::{Title, TitleError};
