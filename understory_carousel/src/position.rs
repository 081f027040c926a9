// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position model: from state to track translation.
//!
//! ## Formula
//!
//! `translation = base_position(index, width, direction) + to_physical_delta(offset)`
//!
//! The drag offset is stored logically and converted back to pixels exactly once, here.
//! Re-applying the formula to the same state always yields the same translation.
//!
//! ## Animation
//!
//! While dragging, updates must be instantaneous, so [`TrackPlacement::transition`] is `None`.
//! Otherwise the configured [`Transition`] animates the snap.

use kurbo::{Affine, Vec2};

use crate::config::{CarouselConfig, Transition};
use crate::direction::Direction;
use crate::types::CarouselState;

/// Pixel translation of the track for an index and a logical drag offset.
pub fn compute_translation(
    index: usize,
    drag_offset: f64,
    container_width: f64,
    direction: Direction,
) -> f64 {
    direction.base_position(index, container_width) + direction.to_physical_delta(drag_offset)
}

/// Track transform to apply for a state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackPlacement {
    /// Horizontal translation in pixels.
    pub translate_x: f64,
    /// Animation to use, or `None` for an instantaneous update.
    pub transition: Option<Transition>,
    /// Whether the track is mirrored horizontally (RTL).
    pub mirrored: bool,
}

impl TrackPlacement {
    /// The full track transform as an affine.
    ///
    /// The mirror is applied about the track's horizontal center, matching a CSS
    /// `scaleX(-1)` with the default transform origin, then the translation.
    pub fn to_affine(&self, track_width: f64) -> Affine {
        let translate = Affine::translate(Vec2::new(self.translate_x, 0.0));
        if !self.mirrored {
            return translate;
        }
        let center = Vec2::new(track_width * 0.5, 0.0);
        translate
            * Affine::translate(center)
            * Affine::scale_non_uniform(-1.0, 1.0)
            * Affine::translate(-center)
    }
}

/// Placement for `state`, or `None` when there is nothing to position.
///
/// Positioning is inert until a positive container width is measured, and an empty carousel
/// renders nothing.
pub fn placement(state: &CarouselState, config: &CarouselConfig) -> Option<TrackPlacement> {
    if state.is_empty() || !state.is_measured() {
        return None;
    }
    let dragging = state.drag.is_dragging();
    Some(TrackPlacement {
        translate_x: compute_translation(
            state.active_index,
            state.drag.live_offset(),
            state.container_width,
            state.direction,
        ),
        transition: (!dragging).then_some(config.transition),
        mirrored: state.direction.mirrors_track(),
    })
}
