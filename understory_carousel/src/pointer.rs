// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking: normalize mouse and touch input and follow a single drag.
//!
//! ## Input
//!
//! Both mouse and single-finger touch yield one horizontal coordinate. For touch, only the first
//! point of the list is used; an empty list yields nothing and the event is dropped.
//!
//! ## Transitions
//!
//! - [`PointerTracker::start`]: `Idle → Dragging { start, offset: 0 }`. Rejected while dragging.
//! - [`PointerTracker::update`]: only while dragging; stores the logical offset.
//! - [`PointerTracker::end`]: returns the final logical offset and resets to `Idle`.
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::direction::Direction;
//! use understory_carousel::pointer::{InputPoint, PointerTracker};
//!
//! let mut tracker = PointerTracker::new();
//! assert!(tracker.start(InputPoint::Touch(&[Point::new(100.0, 5.0)])));
//! assert_eq!(
//!     tracker.update(InputPoint::Mouse(Point::new(40.0, 5.0)), Direction::Rtl),
//!     Some(60.0)
//! );
//! assert_eq!(tracker.end(), Some(60.0));
//! assert!(!tracker.is_dragging());
//! ```

use kurbo::Point;

use crate::direction::Direction;
use crate::types::DragState;

/// A pointer sample from the host toolkit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputPoint<'a> {
    /// Mouse or pen position.
    Mouse(Point),
    /// Active touch points; only the first one is consulted.
    Touch(&'a [Point]),
}

impl InputPoint<'_> {
    /// The horizontal coordinate, if the sample carries a usable one.
    pub fn horizontal(&self) -> Option<f64> {
        let x = match self {
            Self::Mouse(p) => p.x,
            Self::Touch(points) => points.first()?.x,
        };
        x.is_finite().then_some(x)
    }
}

/// Drag tracker over a single horizontal coordinate stream.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerTracker {
    state: DragState,
}

impl PointerTracker {
    /// Create an idle tracker.
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Current drag state.
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// True while dragging.
    pub const fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Begin a drag at the sample's coordinate.
    ///
    /// Returns `false` (and changes nothing) when already dragging or when the sample has no
    /// coordinate.
    pub fn start(&mut self, input: InputPoint<'_>) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(start) = input.horizontal() else {
            return false;
        };
        self.state = DragState::Dragging { start, offset: 0.0 };
        true
    }

    /// Follow the pointer and return the new logical offset.
    ///
    /// Returns `None` when idle or when the sample has no coordinate; nothing changes then.
    pub fn update(&mut self, input: InputPoint<'_>, direction: Direction) -> Option<f64> {
        let DragState::Dragging { start, .. } = self.state else {
            return None;
        };
        let x = input.horizontal()?;
        let offset = direction.to_logical_delta(x - start);
        self.state = DragState::Dragging { start, offset };
        Some(offset)
    }

    /// Finish the drag, returning its final logical offset.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn end(&mut self) -> Option<f64> {
        let offset = match self.state {
            DragState::Idle => return None,
            DragState::Dragging { offset, .. } => offset,
        };
        self.state = DragState::Idle;
        Some(offset)
    }

    /// Abandon the drag without reporting an offset. Returns whether a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
