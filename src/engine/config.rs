//! Round configuration

use thiserror::Error;

/// Errors raised when a round cannot be started
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoundError {
    #[error("Invalid round config: {0}")]
    InvalidRoundConfig(String),
}

/// Tuning for a single round
///
/// Blur values are in the same unit as the poster renderer's blur radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundConfig {
    max_chances: u32,
    max_blur: f32,
    blur_step: f32,
    reveal_floor: f32,
}

impl RoundConfig {
    /// Default number of chances per round
    pub const DEFAULT_MAX_CHANCES: u32 = 5;
    /// Default starting blur
    pub const DEFAULT_MAX_BLUR: f32 = 55.0;
    /// Default blur removed per wrong guess
    pub const DEFAULT_BLUR_STEP: f32 = 9.0;
    /// Blur of a fully revealed poster
    pub const DEFAULT_REVEAL_FLOOR: f32 = 1.0;
    /// Most chances a round may have; one star is drawn per chance
    pub const MAX_CHANCES_LIMIT: u32 = 99;

    /// Create a validated config
    ///
    /// # Errors
    /// Returns `RoundError::InvalidRoundConfig` if `max_chances` is zero or above
    /// `MAX_CHANCES_LIMIT`, or if `max_blur` or `blur_step` is not a finite
    /// positive number.
    pub fn new(max_chances: u32, max_blur: f32, blur_step: f32) -> Result<Self, RoundError> {
        if max_chances == 0 {
            return Err(RoundError::InvalidRoundConfig(
                "max_chances must be greater than zero".to_string(),
            ));
        }
        if max_chances > Self::MAX_CHANCES_LIMIT {
            return Err(RoundError::InvalidRoundConfig(format!(
                "max_chances must be at most {}, got {max_chances}",
                Self::MAX_CHANCES_LIMIT
            )));
        }
        if !(max_blur.is_finite() && max_blur > 0.0) {
            return Err(RoundError::InvalidRoundConfig(format!(
                "max_blur must be positive, got {max_blur}"
            )));
        }
        if !(blur_step.is_finite() && blur_step > 0.0) {
            return Err(RoundError::InvalidRoundConfig(format!(
                "blur_step must be positive, got {blur_step}"
            )));
        }

        Ok(Self {
            max_chances,
            max_blur,
            blur_step,
            reveal_floor: Self::DEFAULT_REVEAL_FLOOR.min(max_blur),
        })
    }

    #[inline]
    #[must_use]
    pub const fn max_chances(&self) -> u32 {
        self.max_chances
    }

    #[inline]
    #[must_use]
    pub const fn max_blur(&self) -> f32 {
        self.max_blur
    }

    #[inline]
    #[must_use]
    pub const fn blur_step(&self) -> f32 {
        self.blur_step
    }

    /// Blur level once the poster is fully revealed
    #[inline]
    #[must_use]
    pub const fn reveal_floor(&self) -> f32 {
        self.reveal_floor
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_chances: Self::DEFAULT_MAX_CHANCES,
            max_blur: Self::DEFAULT_MAX_BLUR,
            blur_step: Self::DEFAULT_BLUR_STEP,
            reveal_floor: Self::DEFAULT_REVEAL_FLOOR,
        }
    }
}
