// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration: window-level listener subscriptions and lifecycle hooks.
//!
//! ## Listener scope
//!
//! A drag that starts on the track must end even if the pointer is released elsewhere.
//! The [`Carousel`](crate::carousel::Carousel) calls [`Host::subscribe`] with
//! [`GlobalListeners::DRAG_TERMINATION`] when a drag starts and [`Host::unsubscribe`] with the
//! same set when the drag ends, is canceled, or the carousel is unmounted. A host never sees a
//! subscribe for a set it already holds, or an unsubscribe for a set it does not hold.
//!
//! ## Hooks
//!
//! [`Host::on_mount`], [`Host::on_resize`], and [`Host::on_state_change`] let a renderer apply
//! the new [`TrackPlacement`] without polling. All methods have no-op defaults.

use crate::position::TrackPlacement;
use crate::types::CarouselState;

bitflags::bitflags! {
    /// Window-level listeners that can terminate a drag.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GlobalListeners: u8 {
        /// Mouse button released anywhere.
        const MOUSE_UP     = 0b0000_0001;
        /// Touch lifted anywhere.
        const TOUCH_END    = 0b0000_0010;
        /// Touch sequence canceled by the platform.
        const TOUCH_CANCEL = 0b0000_0100;
        /// Every listener needed while a drag is in flight.
        const DRAG_TERMINATION = Self::MOUSE_UP.bits() | Self::TOUCH_END.bits() | Self::TOUCH_CANCEL.bits();
    }
}

/// A window-level event delivered to the carousel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GlobalEvent {
    /// Mouse button released.
    MouseUp,
    /// Touch lifted.
    TouchEnd,
    /// Touch sequence canceled.
    TouchCancel,
}

impl GlobalEvent {
    /// The listener that delivers this event.
    pub const fn listener(self) -> GlobalListeners {
        match self {
            Self::MouseUp => GlobalListeners::MOUSE_UP,
            Self::TouchEnd => GlobalListeners::TOUCH_END,
            Self::TouchCancel => GlobalListeners::TOUCH_CANCEL,
        }
    }

    /// True when the event abandons the drag rather than releasing it.
    pub const fn is_cancel(self) -> bool {
        matches!(self, Self::TouchCancel)
    }
}

/// Toolkit side of the carousel.
pub trait Host {
    /// Start delivering `listeners` as [`GlobalEvent`]s.
    fn subscribe(&mut self, _listeners: GlobalListeners) {}

    /// Stop delivering `listeners`.
    fn unsubscribe(&mut self, _listeners: GlobalListeners) {}

    /// The carousel was mounted and measured.
    fn on_mount(&mut self, _state: &CarouselState, _placement: Option<TrackPlacement>) {}

    /// The container width changed.
    fn on_resize(&mut self, _width: f64) {}

    /// The state changed; `placement` is what should now be applied to the track.
    fn on_state_change(&mut self, _state: &CarouselState, _placement: Option<TrackPlacement>) {}
}

/// A host that ignores everything.
///
/// Used by [`Carousel::new`](crate::carousel::Carousel::new). Callers poll
/// [`Carousel::placement`](crate::carousel::Carousel::placement) instead.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHost;

impl Host for NoHost {}

impl<H: Host + ?Sized> Host for &mut H {
    fn subscribe(&mut self, listeners: GlobalListeners) {
        (**self).subscribe(listeners);
    }

    fn unsubscribe(&mut self, listeners: GlobalListeners) {
        (**self).unsubscribe(listeners);
    }

    fn on_mount(&mut self, state: &CarouselState, placement: Option<TrackPlacement>) {
        (**self).on_mount(state, placement);
    }

    fn on_resize(&mut self, width: f64) {
        (**self).on_resize(width);
    }

    fn on_state_change(&mut self, state: &CarouselState, placement: Option<TrackPlacement>) {
        (**self).on_state_change(state, placement);
    }
}
