// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.
//!
//! ```
//! use understory_carousel::config::{CarouselConfig, Easing, Transition};
//! use understory_carousel::direction::Direction;
//!
//! let config = CarouselConfig::default()
//!     .with_direction(Direction::Rtl)
//!     .with_commit_threshold(80.0)
//!     .with_transition(Transition::new(250, Easing::EaseOut));
//! assert!(config.validate().is_ok());
//! assert_eq!(config.transition.to_string(), "250ms ease-out");
//! ```

use core::fmt;

use crate::direction::Direction;
use crate::error::ConfigError;

/// Minimum drag distance, in pixels, needed to change slides on release.
pub const DEFAULT_COMMIT_THRESHOLD: f64 = 50.0;

/// Duration of the snap animation when not dragging.
pub const DEFAULT_TRANSITION_MS: u32 = 300;

/// Timing function for the snap animation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Easing {
    /// CSS `ease`.
    #[default]
    Ease,
    /// CSS `linear`.
    Linear,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
}

impl Easing {
    /// The CSS timing-function keyword.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Snap animation applied to the track whenever no drag is in progress.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Transition {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Timing function.
    pub easing: Easing,
}

impl Transition {
    /// Create a transition.
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_MS, Easing::Ease)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms {}", self.duration_ms, self.easing)
    }
}

/// Carousel configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct CarouselConfig {
    /// Layout direction.
    pub direction: Direction,
    /// Drag distance in pixels that must be exceeded to commit a slide change.
    pub commit_threshold: f64,
    /// Snap animation.
    pub transition: Transition,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            transition: Transition::default(),
        }
    }
}

impl CarouselConfig {
    /// Set the layout direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the commit threshold in pixels.
    #[must_use]
    pub fn with_commit_threshold(mut self, threshold: f64) -> Self {
        self.commit_threshold = threshold;
        self
    }

    /// Set the snap animation.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.commit_threshold;
        if !t.is_finite() || t < 0.0 {
            return Err(ConfigError::InvalidCommitThreshold { value: t });
        }
        Ok(())
    }
}
