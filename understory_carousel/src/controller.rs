// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide index controller: the only mutator of the active index.
//!
//! ## Drag end
//!
//! `Idle → Dragging → {CommitForward | CommitBackward | Revert} → Idle`
//!
//! With final logical offset `o`, threshold `T`, and `intent = o * direction.advance_sign()`:
//!
//! - `intent > T` and not at the last slide: [`DragOutcome::CommitForward`].
//! - `intent < -T` and not at the first slide: [`DragOutcome::CommitBackward`].
//! - otherwise (inside the threshold, at a boundary, or with an unmeasured container):
//!   [`DragOutcome::Revert`].
//!
//! A commit moves the index by exactly one step.
//!
//! ## Direct navigation
//!
//! [`advance`](SlideIndexController::advance), [`retreat`](SlideIndexController::retreat) and
//! [`jump_to`](SlideIndexController::jump_to) respect bounds; out-of-range jumps clamp.
//! Rejecting navigation during a drag is the orchestrator's job.

use crate::config::DEFAULT_COMMIT_THRESHOLD;
use crate::direction::Direction;

/// Result of ending a drag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DragOutcome {
    /// The index moved one step toward the end.
    CommitForward,
    /// The index moved one step toward the start.
    CommitBackward,
    /// The index is unchanged; the track snaps back to its base position.
    Revert,
}

impl DragOutcome {
    /// True for either commit.
    pub const fn is_commit(self) -> bool {
        !matches!(self, Self::Revert)
    }
}

/// A step request along the logical sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NavAction {
    /// Toward index `0`.
    Prev,
    /// Toward the last index.
    Next,
}

impl NavAction {
    /// The opposite step.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Prev => Self::Next,
            Self::Next => Self::Prev,
        }
    }
}

/// Owns the committed slide index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideIndexController {
    active: usize,
    len: usize,
    threshold: f64,
}

impl SlideIndexController {
    /// Create a controller for `len` slides starting at index `0`.
    pub const fn new(len: usize, threshold: f64) -> Self {
        Self {
            active: 0,
            len,
            threshold,
        }
    }

    /// Create a controller with the default 50px threshold.
    pub const fn with_default_threshold(len: usize) -> Self {
        Self::new(len, DEFAULT_COMMIT_THRESHOLD)
    }

    /// The committed index.
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Number of slides.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when there are no slides.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the last slide.
    pub const fn last_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Commit threshold in pixels.
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a forward step is possible.
    pub const fn can_advance(&self) -> bool {
        self.active + 1 < self.len
    }

    /// Whether a backward step is possible.
    pub const fn can_retreat(&self) -> bool {
        self.active > 0
    }

    /// Whether `action` is possible.
    pub const fn can(&self, action: NavAction) -> bool {
        match action {
            NavAction::Prev => self.can_retreat(),
            NavAction::Next => self.can_advance(),
        }
    }

    /// Decide the outcome for a drag ending at logical `offset`, without applying it.
    pub fn classify(&self, offset: f64, direction: Direction, container_width: f64) -> DragOutcome {
        if self.is_empty() || container_width.is_nan() || container_width <= 0.0 {
            return DragOutcome::Revert;
        }
        let intent = offset * direction.advance_sign();
        if intent > self.threshold && self.can_advance() {
            DragOutcome::CommitForward
        } else if intent < -self.threshold && self.can_retreat() {
            DragOutcome::CommitBackward
        } else {
            DragOutcome::Revert
        }
    }

    /// Decide and apply the outcome for a drag ending at logical `offset`.
    pub fn finish_drag(
        &mut self,
        offset: f64,
        direction: Direction,
        container_width: f64,
    ) -> DragOutcome {
        let outcome = self.classify(offset, direction, container_width);
        match outcome {
            DragOutcome::CommitForward => self.active += 1,
            DragOutcome::CommitBackward => self.active -= 1,
            DragOutcome::Revert => {}
        }
        outcome
    }

    /// Step toward the end. Returns whether the index changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.active += 1;
        true
    }

    /// Step toward the start. Returns whether the index changed.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.active -= 1;
        true
    }

    /// Apply a step request. Returns whether the index changed.
    pub fn step(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Prev => self.retreat(),
            NavAction::Next => self.advance(),
        }
    }

    /// Jump to `index`, clamped to the last slide. Returns whether the index changed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        let Some(last) = self.last_index() else {
            return false;
        };
        let target = index.min(last);
        if target == self.active {
            return false;
        }
        self.active = target;
        true
    }
}
