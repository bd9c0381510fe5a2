//! Metadata hint schedule
//!
//! Each wrong guess unlocks one more metadata field, always in the same order:
//! year, director, actor, synopsis. With the default five chances the last field
//! unlocks when a single chance is left.

use std::fmt;

/// A metadata field that can be shown as a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintField {
    Year,
    Director,
    Actor,
    Synopsis,
}

impl HintField {
    /// All fields in unlock order
    pub const ALL: [Self; 4] = [Self::Year, Self::Director, Self::Actor, Self::Synopsis];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Director => "Director",
            Self::Actor => "Actor",
            Self::Synopsis => "Synopsis",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for HintField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of visible hint fields, stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HintSet(u8);

impl HintSet {
    /// No hints visible
    pub const NONE: Self = Self(0);

    /// Every hint visible
    pub const ALL: Self = Self(0b1111);

    /// The first `count` fields in unlock order
    #[must_use]
    pub fn first(count: usize) -> Self {
        HintField::ALL
            .iter()
            .take(count)
            .fold(Self::NONE, |set, &field| set.with(field))
    }

    #[must_use]
    pub const fn with(self, field: HintField) -> Self {
        Self(self.0 | field.bit())
    }

    #[must_use]
    pub const fn contains(self, field: HintField) -> bool {
        self.0 & field.bit() != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Fields in `self` that are not in `earlier`, in unlock order
    #[must_use]
    pub fn newly_unlocked(self, earlier: Self) -> Vec<HintField> {
        self.iter().filter(|&field| !earlier.contains(field)).collect()
    }

    /// Iterate the visible fields in unlock order
    pub fn iter(self) -> impl Iterator<Item = HintField> {
        HintField::ALL
            .into_iter()
            .filter(move |&field| self.contains(field))
    }
}

/// Which hint fields are visible with `remaining_chances` left
///
/// One field per chance consumed once fewer than five chances remain, so the
/// whole set is visible by the last chance. Zero chances means the round is
/// lost and everything is shown.
///
/// # Examples
/// ```
/// use guess_the_movie::engine::{HintField, HintSet, hint_schedule_for};
///
/// assert_eq!(hint_schedule_for(5), HintSet::NONE);
/// assert!(hint_schedule_for(4).contains(HintField::Year));
/// assert_eq!(hint_schedule_for(1), HintSet::ALL);
/// ```
#[must_use]
pub fn hint_schedule_for(remaining_chances: u32) -> HintSet {
    let total = HintField::ALL.len();

    if remaining_chances == 0 {
        return HintSet::ALL;
    }

    // remaining - 1 chances still to spend before the last one
    let hidden = usize::try_from(remaining_chances - 1).map_or(total, |n| n.min(total));
    HintSet::first(total - hidden)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_unlocks_in_order() {
        assert_eq!(hint_schedule_for(5), HintSet::NONE);
        assert_eq!(
            hint_schedule_for(4).iter().collect::<Vec<_>>(),
            vec![HintField::Year]
        );
        assert_eq!(
            hint_schedule_for(3).iter().collect::<Vec<_>>(),
            vec![HintField::Year, HintField::Director]
        );
        assert_eq!(
            hint_schedule_for(2).iter().collect::<Vec<_>>(),
            vec![HintField::Year, HintField::Director, HintField::Actor]
        );
        assert_eq!(hint_schedule_for(1), HintSet::ALL);
        assert_eq!(hint_schedule_for(0), HintSet::ALL);
    }

    #[test]
    fn schedule_with_many_chances_starts_empty() {
        assert!(hint_schedule_for(10).is_empty());
        assert!(hint_schedule_for(u32::MAX).is_empty());
    }

    #[test]
    fn schedule_is_monotonic() {
        for remaining in 1..=6u32 {
            let later = hint_schedule_for(remaining - 1);
            let earlier = hint_schedule_for(remaining);
            assert!(later.len() >= earlier.len());
            assert!(earlier.iter().all(|field| later.contains(field)));
        }
    }

    #[test]
    fn newly_unlocked_reports_difference() {
        let before = hint_schedule_for(4);
        let after = hint_schedule_for(3);
        assert_eq!(after.newly_unlocked(before), vec![HintField::Director]);
        assert!(before.newly_unlocked(after).is_empty());
    }

    #[test]
    fn hint_set_all_has_four() {
        assert_eq!(HintSet::ALL.len(), 4);
        assert_eq!(HintSet::first(4), HintSet::ALL);
        assert_eq!(HintSet::first(9), HintSet::ALL);
    }
}
