//! Title hint line rendering
//!
//! Hidden characters render as `_`, revealed ones as themselves, spaces as a gap.
//! Every cell is followed by a single space so the line reads like `_ _   _ _`.

use super::Title;

/// Render the hint line for a title
///
/// `revealed` holds one flag per title character; missing flags count as hidden.
/// When `disclosed` is set the whole title is shown.
///
/// # Examples
/// ```
/// use guess_the_movie::core::{Title, hint_line};
///
/// let title = Title::new("La La").unwrap();
/// assert_eq!(hint_line(&title, &[false; 5], false), "_ _   _ _");
/// assert_eq!(hint_line(&title, &[true, false, false, false, true], false), "L _   _ a");
/// assert_eq!(hint_line(&title, &[], true), "L a   L a");
/// ```
#[must_use]
pub fn hint_line(title: &Title, revealed: &[bool], disclosed: bool) -> String {
    let mut line = String::with_capacity(title.len() * 2);

    for (i, &ch) in title.chars().iter().enumerate() {
        let shown = disclosed || revealed.get(i).copied().unwrap_or(false);
        if ch.is_whitespace() {
            line.push(' ');
        } else if shown {
            line.push(ch);
        } else {
            line.push('_');
        }
        line.push(' ');
    }

    line.truncate(line.trim_end().len());
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_title_is_all_blanks() {
        let title = Title::new("Up").unwrap();
        assert_eq!(hint_line(&title, &[false, false], false), "_ _");
    }

    #[test]
    fn spaces_are_gaps_even_when_hidden() {
        let title = Title::new("Get Out").unwrap();
        assert_eq!(hint_line(&title, &[false; 7], false), "_ _ _   _ _ _");
    }

    #[test]
    fn revealed_keeps_title_casing() {
        let title = Title::new("Coco").unwrap();
        assert_eq!(hint_line(&title, &[true, false, false, true], false), "C _ _ o");
    }

    #[test]
    fn disclosed_shows_everything() {
        let title = Title::new("Her").unwrap();
        assert_eq!(hint_line(&title, &[false; 3], true), "H e r");
    }

    #[test]
    fn short_mask_treated_as_hidden() {
        let title = Title::new("Drive").unwrap();
        assert_eq!(hint_line(&title, &[true], false), "D _ _ _ _");
    }
}
