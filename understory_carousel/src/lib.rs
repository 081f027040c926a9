// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, `no_std` drag carousel state machine.
//!
//! ## Overview
//!
//! This crate owns the stateful part of a one-slide-per-view carousel: pointer capture, drag
//! offsets, the commit/revert decision on release, and the translation that keeps the slide
//! track aligned with the active index and the measured container width.
//! It does not render anything.
//! Instead, feed it pointer, touch, and resize notifications from your toolkit, and read back a
//! [`TrackPlacement`](crate::position::TrackPlacement) (or a full
//! [`CarouselView`](crate::view::CarouselView)) to apply.
//!
//! ## Components
//!
//! - [`PointerTracker`](crate::pointer::PointerTracker): normalizes mouse and touch input into a
//!   single horizontal coordinate stream and tracks `Idle` / `Dragging`.
//! - [`Direction`](crate::direction::Direction): left-to-right / right-to-left sign mapping, so the
//!   rest of the crate is written once for both.
//! - [`compute_translation`](crate::position::compute_translation): a pure function from index,
//!   drag offset, width, and direction to a pixel translation.
//! - [`SlideIndexController`](crate::controller::SlideIndexController): the only mutator of the
//!   active index; decides between commit and revert when a drag ends.
//! - [`ResizeAdapter`](crate::resize::ResizeAdapter): container width measurement and change
//!   detection.
//! - [`Carousel`](crate::carousel::Carousel): the orchestrator that composes the above and manages
//!   window-level listener subscriptions through a [`Host`](crate::host::Host).
//!
//! ## Drag termination
//!
//! A drag must end even when the pointer is released outside the carousel.
//! On drag start the carousel asks its [`Host`](crate::host::Host) to subscribe to
//! [`GlobalListeners`](crate::host::GlobalListeners) (mouse up, touch end, touch cancel) and
//! releases them again on drag end, cancel, direction change, and [`unmount`](crate::carousel::Carousel::unmount).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::carousel::Carousel;
//! use understory_carousel::direction::Direction;
//! use understory_carousel::pointer::InputPoint;
//! use understory_carousel::types::Slide;
//!
//! let slides = vec![
//!     Slide::new("a.jpg", "First"),
//!     Slide::new("b.jpg", "Second"),
//!     Slide::new("c.jpg", "Third"),
//! ];
//! let mut carousel = Carousel::new(slides, Direction::Ltr);
//! carousel.mount(300.0);
//!
//! // Drag content 60px to the left and release.
//! carousel.pointer_down(InputPoint::Mouse(Point::new(200.0, 10.0)));
//! carousel.pointer_move(InputPoint::Mouse(Point::new(140.0, 10.0)));
//! carousel.pointer_up();
//!
//! assert_eq!(carousel.active_index(), 1);
//! assert_eq!(carousel.placement().unwrap().translate_x, -300.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod carousel;
pub mod config;
pub mod controller;
pub mod direction;
pub mod error;
pub mod host;
pub mod pointer;
pub mod position;
pub mod resize;
pub mod types;
pub mod view;
