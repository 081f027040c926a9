// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless render model.
//!
//! [`build`] turns a state snapshot into everything a renderer needs: the two navigation
//! buttons, the track transform, per-slide layout, indicator dots, and the position readout.
//! It holds no state and allocates only for the slide and dot lists.
//!
//! ## Buttons
//!
//! Buttons are listed in markup order. For LTR the first sits on the left and steps to the
//! previous slide; for RTL the first sits on the right and steps to the next slide. Labels always
//! follow the action, so "Previous slide" means toward index `0` in both directions. A button is
//! disabled at the boundary of its action and while a drag is in progress.
//!
//! ## Readout
//!
//! LTR counts from the start (`index + 1 / total`); RTL counts from the other end
//! (`total - index / total`).

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::config::CarouselConfig;
use crate::controller::NavAction;
use crate::direction::Direction;
use crate::position::{TrackPlacement, placement};
use crate::types::{CarouselState, Slide};

/// Physical side of the carousel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl Side {
    /// The other side.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A previous/next control.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NavButton {
    /// Edge the button is pinned to.
    pub side: Side,
    /// Step performed on activation.
    pub action: NavAction,
    /// Accessible label.
    pub label: &'static str,
    /// Direction the chevron glyph points.
    pub chevron: Side,
    /// Whether the control is inert.
    pub disabled: bool,
}

/// One indicator dot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dot {
    /// Slide the dot jumps to.
    pub index: usize,
    /// True for the active slide.
    pub active: bool,
    /// Accessible label, 1-based.
    pub label: String,
}

/// The `position / total` readout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PositionReadout {
    /// 1-based position, counted from the direction-appropriate end.
    pub position: usize,
    /// Number of slides.
    pub total: usize,
}

impl fmt::Display for PositionReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.total)
    }
}

/// Layout for one slide.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideView<'a> {
    /// Slide index.
    pub index: usize,
    /// Caller-owned payload.
    pub slide: &'a Slide,
    /// Width in pixels; `None` means fill the container until it is measured.
    pub width: Option<f64>,
    /// Whether the content carries the counter-mirror for an RTL track.
    pub content_mirrored: bool,
}

/// Layout for the slide strip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackView {
    /// Total strip width in pixels, once measured.
    pub width: Option<f64>,
    /// Transform to apply, once measured.
    pub placement: Option<TrackPlacement>,
    /// True while dragging (grabbing cursor).
    pub grabbing: bool,
}

/// Everything a renderer draws for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselView<'a> {
    /// Value for the container's `dir` attribute.
    pub direction: Direction,
    /// Navigation buttons in markup order.
    pub buttons: [NavButton; 2],
    /// The slide strip.
    pub track: TrackView,
    /// Slides in sequence order.
    pub slides: Vec<SlideView<'a>>,
    /// Indicator dots, one per slide.
    pub dots: Vec<Dot>,
    /// Position readout.
    pub readout: PositionReadout,
}

/// Accessible label for a step action.
pub const fn action_label(action: NavAction) -> &'static str {
    match action {
        NavAction::Prev => "Previous slide",
        NavAction::Next => "Next slide",
    }
}

/// Build the render model, or `None` when there is nothing to render.
///
/// The slide list is authoritative: the state is read as if it had `slides.len()` slides, and an
/// out-of-range index is clamped to the last slide.
pub fn build<'a>(
    slides: &'a [Slide],
    state: &CarouselState,
    config: &CarouselConfig,
) -> Option<CarouselView<'a>> {
    let last = slides.len().checked_sub(1)?;
    let state = &CarouselState {
        active_index: state.active_index.min(last),
        slide_count: slides.len(),
        ..*state
    };
    let total = state.slide_count;
    let rtl = state.direction.is_rtl();
    let measured = state.is_measured().then_some(state.container_width);

    let (first_action, first_side) = if rtl {
        (NavAction::Next, Side::Right)
    } else {
        (NavAction::Prev, Side::Left)
    };
    let buttons = [
        nav_button(state, first_action, first_side),
        nav_button(state, first_action.reversed(), first_side.opposite()),
    ];

    let content_mirrored = state.direction.mirrors_content();
    let slide_views = slides
        .iter()
        .enumerate()
        .map(|(index, slide)| SlideView {
            index,
            slide,
            width: measured,
            content_mirrored,
        })
        .collect();

    let dots = (0..total)
        .map(|index| Dot {
            index,
            active: index == state.active_index,
            label: format!("Go to slide {}", index + 1),
        })
        .collect();

    let position = if rtl {
        total - state.active_index
    } else {
        state.active_index + 1
    };

    Some(CarouselView {
        direction: state.direction,
        buttons,
        track: TrackView {
            width: measured.map(|w| total as f64 * w),
            placement: placement(state, config),
            grabbing: state.drag.is_dragging(),
        },
        slides: slide_views,
        dots,
        readout: PositionReadout { position, total },
    })
}

fn nav_button(state: &CarouselState, action: NavAction, side: Side) -> NavButton {
    let at_boundary = match action {
        NavAction::Prev => state.active_index == 0,
        NavAction::Next => state.last_index() == Some(state.active_index),
    };
    NavButton {
        side,
        action,
        label: action_label(action),
        chevron: side,
        disabled: at_boundary || state.drag.is_dragging(),
    }
}
