// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core data: slide payloads, drag state, and the carousel state snapshot.
//!
//! ## Overview
//!
//! These types carry no behavior beyond small accessors.
//! They are produced by the [`carousel`](crate::carousel) orchestrator and consumed by
//! [`position`](crate::position) and [`view`](crate::view).

use alloc::string::String;

use crate::direction::Direction;

/// An opaque slide payload.
///
/// The carousel only reads slides; it never mutates or reorders them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Slide {
    /// Image reference (URL or asset key).
    #[cfg_attr(feature = "serde", serde(alias = "imgSrc"))]
    pub image_source: String,
    /// Title shown under the image, also used as the image's alt text.
    pub title: String,
    /// Optional secondary text.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
}

impl Slide {
    /// Create a slide without a description.
    pub fn new(image_source: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image_source: image_source.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Pointer drag state.
///
/// `offset` is a logical delta (see [`direction`](crate::direction)): for LTR it equals the raw
/// pointer movement, for RTL it is negated.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Horizontal coordinate where the drag started.
        start: f64,
        /// Current logical offset from `start`.
        offset: f64,
    },
}

impl DragState {
    /// True while a drag is in progress.
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The live logical offset, `0.0` when idle.
    pub const fn live_offset(&self) -> f64 {
        match *self {
            Self::Idle => 0.0,
            Self::Dragging { offset, .. } => offset,
        }
    }
}

/// A snapshot of the carousel's mutable state.
///
/// Positioning is a pure function of this value; see
/// [`placement`](crate::position::placement).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarouselState {
    /// Committed slide index; always `< slide_count` unless the carousel is empty.
    pub active_index: usize,
    /// Number of slides.
    pub slide_count: usize,
    /// Measured container width in pixels; `0.0` means not yet measured.
    pub container_width: f64,
    /// Current drag state.
    pub drag: DragState,
    /// Layout direction.
    pub direction: Direction,
}

impl CarouselState {
    /// Index of the last slide, or `None` when there are no slides.
    pub const fn last_index(&self) -> Option<usize> {
        self.slide_count.checked_sub(1)
    }

    /// True once a positive container width has been measured.
    pub fn is_measured(&self) -> bool {
        self.container_width > 0.0
    }

    /// True when there is nothing to render.
    pub const fn is_empty(&self) -> bool {
        self.slide_count == 0
    }
}
