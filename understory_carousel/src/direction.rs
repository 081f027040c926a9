// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout direction and the sign conventions that depend on it.
//!
//! ## Conventions
//!
//! - A *raw* delta is the physical pointer movement, `current - start`, in pixels.
//! - A *logical* delta is the raw delta after direction normalization:
//!   unchanged for [`Ltr`](Direction::Ltr), negated for [`Rtl`](Direction::Rtl).
//!   Drag offsets are stored logically everywhere in this crate.
//! - The *base position* of an index is the translation with no live drag:
//!   `-index * width` for LTR and `+index * width` for RTL.
//!
//! ## Mirroring
//!
//! For RTL the whole track is mirrored horizontally so slide order reads right to left, and the
//! positive base position compensates for that. Every slide's content carries the
//! equal-and-opposite mirror, otherwise the content itself renders flipped.
//! [`Direction::mirrors_track`] and [`Direction::mirrors_content`] always agree; renderers should
//! apply both or neither.
//!
//! ```
//! use understory_carousel::direction::Direction;
//!
//! assert_eq!(Direction::Ltr.to_logical_delta(-60.0), -60.0);
//! assert_eq!(Direction::Rtl.to_logical_delta(-60.0), 60.0);
//! assert_eq!(Direction::Ltr.base_position(2, 300.0), -600.0);
//! assert_eq!(Direction::Rtl.base_position(2, 300.0), 600.0);
//! ```

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseDirectionError;

/// Horizontal layout direction, fixed for a carousel's lifetime.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// True for [`Direction::Rtl`].
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// The `dir` attribute value, `"ltr"` or `"rtl"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Convert a raw pointer delta into a logical delta.
    pub fn to_logical_delta(self, raw: f64) -> f64 {
        match self {
            Self::Ltr => raw,
            Self::Rtl => -raw,
        }
    }

    /// Convert a logical delta back into a physical pixel offset.
    ///
    /// This is the inverse of [`to_logical_delta`](Self::to_logical_delta) and is applied once,
    /// when a live drag offset is added to the base position.
    pub fn to_physical_delta(self, logical: f64) -> f64 {
        match self {
            Self::Ltr => logical,
            Self::Rtl => -logical,
        }
    }

    /// Translation of the track for `index` with no live drag.
    pub fn base_position(self, index: usize, container_width: f64) -> f64 {
        let extent = index as f64 * container_width;
        match self {
            Self::Ltr => -extent,
            Self::Rtl => extent,
        }
    }

    /// Sign a logical offset carries when the drag moves toward the end of the sequence.
    ///
    /// Dragging content toward the left reveals the next slide in both directions, so the
    /// logical offset is negative for LTR and positive for RTL.
    pub const fn advance_sign(self) -> f64 {
        match self {
            Self::Ltr => -1.0,
            Self::Rtl => 1.0,
        }
    }

    /// Whether the slide track is mirrored horizontally.
    pub const fn mirrors_track(self) -> bool {
        self.is_rtl()
    }

    /// Whether each slide's content carries the compensating mirror.
    pub const fn mirrors_content(self) -> bool {
        self.mirrors_track()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("ltr") {
            Ok(Self::Ltr)
        } else if s.eq_ignore_ascii_case("rtl") {
            Ok(Self::Rtl)
        } else {
            Err(ParseDirectionError {
                input: s.to_string(),
            })
        }
    }
}
