// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel orchestrator.
//!
//! ## Overview
//!
//! [`Carousel`] composes the [`PointerTracker`], [`SlideIndexController`], and
//! [`ResizeAdapter`], and owns the single mutable state. Every handler runs to completion and
//! leaves the carousel in a consistent state, so handlers may be called in any order:
//!
//! - A move is only acted on after a start.
//! - Any end path (local pointer up or leave, global mouse up or touch end) clears the drag, even
//!   without a prior move.
//! - Touch cancel, a resize, or a direction change abandons the drag without committing.
//! - Direct navigation is ignored while dragging.
//! - With no slides every handler is a no-op.
//!
//! ## Wiring
//!
//! - Track pointer down / touch start: [`Carousel::pointer_down`].
//! - Track pointer move / touch move: [`Carousel::pointer_move`].
//! - Track pointer up / pointer leave: [`Carousel::pointer_up`] / [`Carousel::pointer_leave`].
//! - Window mouse up / touch end / touch cancel, while subscribed: [`Carousel::global_event`].
//! - Container mount / resize: [`Carousel::mount`] / [`Carousel::resize`].
//! - Buttons and dots: [`Carousel::navigate`] / [`Carousel::go_to`].
//!
//! [`CarouselEvent`] bundles these for hosts that prefer a single entry point.
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::carousel::Carousel;
//! use understory_carousel::direction::Direction;
//! use understory_carousel::host::GlobalEvent;
//! use understory_carousel::pointer::InputPoint;
//! use understory_carousel::types::Slide;
//!
//! let slides = vec![Slide::new("a.jpg", "A"), Slide::new("b.jpg", "B")];
//! let mut carousel = Carousel::new(slides, Direction::Ltr);
//! carousel.mount(320.0);
//!
//! // Released outside the carousel: the window-level listener ends the drag.
//! carousel.pointer_down(InputPoint::Mouse(Point::new(300.0, 0.0)));
//! carousel.pointer_move(InputPoint::Mouse(Point::new(100.0, 0.0)));
//! assert!(carousel.global_event(GlobalEvent::MouseUp).is_some());
//! assert!(!carousel.is_dragging());
//! assert_eq!(carousel.active_index(), 1);
//! ```

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::config::CarouselConfig;
use crate::controller::{DragOutcome, NavAction, SlideIndexController};
use crate::direction::Direction;
use crate::error::ConfigError;
use crate::host::{GlobalEvent, GlobalListeners, Host, NoHost};
use crate::pointer::{InputPoint, PointerTracker};
use crate::position::{self, TrackPlacement};
use crate::resize::ResizeAdapter;
use crate::types::{CarouselState, DragState, Slide};
use crate::view::{self, CarouselView};

/// An input notification for [`Carousel::handle`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CarouselEvent<'a> {
    /// Pointer down or touch start on the track.
    PointerDown(InputPoint<'a>),
    /// Pointer or touch move over the track.
    PointerMove(InputPoint<'a>),
    /// Pointer released over the track.
    PointerUp,
    /// Pointer left the track.
    PointerLeave,
    /// Window-level event from a subscribed listener.
    Global(GlobalEvent),
    /// New container width measurement.
    Resize(f64),
    /// Previous/next button.
    Navigate(NavAction),
    /// Indicator dot.
    GoTo(usize),
}

/// Drag carousel state machine.
///
/// ## Usage
///
/// - Construct with [`Carousel::new`] to poll [`Carousel::placement`] yourself, or with
///   [`Carousel::with_config`] to supply a [`Host`] that receives listener subscriptions and
///   lifecycle hooks.
/// - Call [`Carousel::mount`] once the container can be measured, and
///   [`Carousel::unmount`] when it goes away.
/// - Route input to the handlers (or [`Carousel::handle`]) and apply the resulting
///   [`TrackPlacement`], or render [`Carousel::view`].
pub struct Carousel<H: Host = NoHost> {
    slides: Vec<Slide>,
    config: CarouselConfig,
    controller: SlideIndexController,
    tracker: PointerTracker,
    resize: ResizeAdapter,
    subscribed: GlobalListeners,
    mounted: bool,
    host: H,
}

impl<H: Host> fmt::Debug for Carousel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.slides.len())
            .field("config", &self.config)
            .field("controller", &self.controller)
            .field("tracker", &self.tracker)
            .field("resize", &self.resize)
            .field("subscribed", &self.subscribed)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl Carousel<NoHost> {
    /// Create a carousel with the default configuration and no host.
    pub fn new(slides: Vec<Slide>, direction: Direction) -> Self {
        Self::from_parts(
            slides,
            CarouselConfig::default().with_direction(direction),
            NoHost,
        )
    }
}

impl<H: Host> Carousel<H> {
    /// Create a carousel with an explicit configuration and host.
    pub fn with_config(
        slides: Vec<Slide>,
        config: CarouselConfig,
        host: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(slides, config, host))
    }

    fn from_parts(slides: Vec<Slide>, config: CarouselConfig, host: H) -> Self {
        let controller = SlideIndexController::new(slides.len(), config.commit_threshold);
        Self {
            slides,
            config,
            controller,
            tracker: PointerTracker::new(),
            resize: ResizeAdapter::new(),
            subscribed: GlobalListeners::empty(),
            mounted: false,
            host,
        }
    }

    /// Caller-provided slides.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Active configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Layout direction.
    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    /// Committed slide index.
    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.controller.len()
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.controller.is_empty()
    }

    /// Last measured container width, `0.0` until measured.
    pub fn container_width(&self) -> f64 {
        self.resize.width()
    }

    /// Current drag state.
    pub fn drag_state(&self) -> DragState {
        self.tracker.state()
    }

    /// True while dragging.
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// True between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Window-level listeners currently held through the host.
    pub fn subscribed_listeners(&self) -> GlobalListeners {
        self.subscribed
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Snapshot of the mutable state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            active_index: self.controller.active_index(),
            slide_count: self.controller.len(),
            container_width: self.resize.width(),
            drag: self.tracker.state(),
            direction: self.config.direction,
        }
    }

    /// Track transform for the current state; `None` while unmeasured or empty.
    pub fn placement(&self) -> Option<TrackPlacement> {
        position::placement(&self.state(), &self.config)
    }

    /// Full render model; `None` when there are no slides.
    pub fn view(&self) -> Option<CarouselView<'_>> {
        view::build(&self.slides, &self.state(), &self.config)
    }

    /// Mount with the container's initial width.
    ///
    /// Input is ignored until the carousel is mounted. Mounting again only reports the width,
    /// exactly like [`resize`](Self::resize).
    pub fn mount(&mut self, width: f64) {
        if self.mounted {
            self.resize(width);
            return;
        }
        self.mounted = true;
        if !self.is_empty() {
            self.resize.observe(width);
        }
        debug!(
            "carousel mounted: {} slides, width {}, {}",
            self.slide_count(),
            self.resize.width(),
            self.config.direction
        );
        let state = self.state();
        let placement = self.placement();
        self.host.on_mount(&state, placement);
    }

    /// Unmount, releasing any held listeners, and return the host.
    pub fn unmount(mut self) -> H {
        if self.tracker.cancel() {
            debug!("carousel unmounted mid-drag");
        }
        self.release_listeners();
        self.host
    }

    /// Record a container width measurement.
    ///
    /// A changed width abandons any drag and repositions the track for the current index.
    /// Returns whether the width changed.
    pub fn resize(&mut self, width: f64) -> bool {
        if self.inert() {
            return false;
        }
        let Some(width) = self.resize.observe(width) else {
            return false;
        };
        if self.tracker.cancel() {
            debug!("resize abandoned in-flight drag");
            self.release_listeners();
        }
        debug!("container width now {width}");
        self.host.on_resize(width);
        self.notify();
        true
    }

    /// Pointer down or touch start on the track. Returns whether a drag started.
    pub fn pointer_down(&mut self, input: InputPoint<'_>) -> bool {
        if self.inert() || !self.tracker.start(input) {
            return false;
        }
        self.acquire_listeners();
        debug!("drag started at index {}", self.active_index());
        self.notify();
        true
    }

    /// Pointer or touch move. Returns whether the live offset was updated.
    pub fn pointer_move(&mut self, input: InputPoint<'_>) -> bool {
        if self.inert() {
            return false;
        }
        let Some(offset) = self.tracker.update(input, self.config.direction) else {
            if self.tracker.is_dragging() {
                debug!("dropping move without a usable coordinate");
            }
            return false;
        };
        trace!("drag offset {offset}");
        self.notify();
        true
    }

    /// Pointer released over the track.
    pub fn pointer_up(&mut self) -> Option<DragOutcome> {
        self.end_drag(false)
    }

    /// Pointer left the track; ends the drag like a release.
    pub fn pointer_leave(&mut self) -> Option<DragOutcome> {
        self.end_drag(false)
    }

    /// Window-level event. Ignored unless its listener is currently subscribed.
    pub fn global_event(&mut self, event: GlobalEvent) -> Option<DragOutcome> {
        if !self.subscribed.contains(event.listener()) {
            trace!("ignoring {event:?} without a subscription");
            return None;
        }
        self.end_drag(event.is_cancel())
    }

    /// Step one slide. Ignored while dragging. Returns whether the index changed.
    pub fn navigate(&mut self, action: NavAction) -> bool {
        if self.inert() || self.navigation_blocked() {
            return false;
        }
        let changed = self.controller.step(action);
        if changed {
            debug!("{action:?} to index {}", self.active_index());
            self.notify();
        }
        changed
    }

    /// Step toward the last slide.
    pub fn go_to_next(&mut self) -> bool {
        self.navigate(NavAction::Next)
    }

    /// Step toward the first slide.
    pub fn go_to_prev(&mut self) -> bool {
        self.navigate(NavAction::Prev)
    }

    /// Jump to `index`, clamped to the last slide. Ignored while dragging.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.inert() || self.navigation_blocked() {
            return false;
        }
        let changed = self.controller.jump_to(index);
        if changed {
            debug!("jumped to index {} (requested {index})", self.active_index());
            self.notify();
        }
        changed
    }

    /// Change the layout direction, abandoning any drag.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.config.direction {
            return;
        }
        if self.tracker.cancel() {
            debug!("direction change abandoned in-flight drag");
            self.release_listeners();
        }
        self.config.direction = direction;
        self.notify();
    }

    /// Dispatch a bundled event. Returns whether the state changed.
    pub fn handle(&mut self, event: CarouselEvent<'_>) -> bool {
        match event {
            CarouselEvent::PointerDown(input) => self.pointer_down(input),
            CarouselEvent::PointerMove(input) => self.pointer_move(input),
            CarouselEvent::PointerUp => self.pointer_up().is_some(),
            CarouselEvent::PointerLeave => self.pointer_leave().is_some(),
            CarouselEvent::Global(ev) => self.global_event(ev).is_some(),
            CarouselEvent::Resize(width) => self.resize(width),
            CarouselEvent::Navigate(action) => self.navigate(action),
            CarouselEvent::GoTo(index) => self.go_to(index),
        }
    }

    fn end_drag(&mut self, cancel: bool) -> Option<DragOutcome> {
        let offset = self.tracker.end()?;
        self.release_listeners();
        let outcome = if cancel {
            DragOutcome::Revert
        } else {
            self.controller
                .finish_drag(offset, self.config.direction, self.resize.width())
        };
        debug!(
            "drag ended at offset {offset} (canceled: {cancel}): {outcome:?}, index {}",
            self.active_index()
        );
        self.notify();
        Some(outcome)
    }

    /// Unmounted or empty: nothing to drive.
    fn inert(&self) -> bool {
        !self.mounted || self.is_empty()
    }

    fn navigation_blocked(&self) -> bool {
        let dragging = self.tracker.is_dragging();
        if dragging {
            debug!("ignoring navigation while dragging");
        }
        dragging
    }

    fn acquire_listeners(&mut self) {
        let missing = GlobalListeners::DRAG_TERMINATION.difference(self.subscribed);
        if missing.is_empty() {
            return;
        }
        self.host.subscribe(missing);
        self.subscribed.insert(missing);
    }

    fn release_listeners(&mut self) {
        if self.subscribed.is_empty() {
            return;
        }
        let held = core::mem::replace(&mut self.subscribed, GlobalListeners::empty());
        self.host.unsubscribe(held);
    }

    fn notify(&mut self) {
        let state = self.state();
        let placement = self.placement();
        self.host.on_state_change(&state, placement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;

    #[derive(Debug)]
    struct Recorder {
        held: GlobalListeners,
        subscribes: usize,
        unsubscribes: usize,
        mounts: usize,
        resizes: Vec<f64>,
        placements: Vec<Option<TrackPlacement>>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                held: GlobalListeners::empty(),
                subscribes: 0,
                unsubscribes: 0,
                mounts: 0,
                resizes: Vec::new(),
                placements: Vec::new(),
            }
        }
    }

    impl Host for Recorder {
        fn subscribe(&mut self, listeners: GlobalListeners) {
            assert!(
                !self.held.intersects(listeners),
                "double subscription of {listeners:?}"
            );
            self.held.insert(listeners);
            self.subscribes += 1;
        }

        fn unsubscribe(&mut self, listeners: GlobalListeners) {
            assert!(
                self.held.contains(listeners),
                "releasing {listeners:?} that were never held"
            );
            self.held.remove(listeners);
            self.unsubscribes += 1;
        }

        fn on_mount(&mut self, _state: &CarouselState, placement: Option<TrackPlacement>) {
            self.mounts += 1;
            self.placements.push(placement);
        }

        fn on_resize(&mut self, width: f64) {
            self.resizes.push(width);
        }

        fn on_state_change(&mut self, _state: &CarouselState, placement: Option<TrackPlacement>) {
            self.placements.push(placement);
        }
    }

    fn three_slides() -> Vec<Slide> {
        vec![
            Slide::new("headphones.jpg", "Wireless Headphones"),
            Slide::new("watch.jpg", "Smart Watch"),
            Slide::new("speaker.jpg", "Bluetooth Speaker"),
        ]
    }

    fn mounted(direction: Direction) -> Carousel {
        let mut c = Carousel::new(three_slides(), direction);
        c.mount(300.0);
        c
    }

    fn recorded(direction: Direction) -> Carousel<Recorder> {
        let config = CarouselConfig::default().with_direction(direction);
        let mut c = Carousel::with_config(three_slides(), config, Recorder::new()).unwrap();
        c.mount(300.0);
        c
    }

    fn mouse(x: f64) -> InputPoint<'static> {
        InputPoint::Mouse(Point::new(x, 40.0))
    }

    /// Drag physically from `from` to `to` and release over the track.
    fn drag<H: Host>(c: &mut Carousel<H>, from: f64, to: f64) -> Option<DragOutcome> {
        c.pointer_down(mouse(from));
        c.pointer_move(mouse(to));
        c.pointer_up()
    }

    fn translation<H: Host>(c: &Carousel<H>) -> f64 {
        c.placement().unwrap().translate_x
    }

    #[test]
    fn ltr_drag_left_commits_forward() {
        let mut c = mounted(Direction::Ltr);
        assert!(c.is_mounted());
        assert_eq!(drag(&mut c, 200.0, 140.0), Some(DragOutcome::CommitForward));
        assert_eq!(c.active_index(), 1);
        assert_eq!(translation(&c), -300.0);
    }

    #[test]
    fn ltr_short_drag_reverts() {
        let mut c = mounted(Direction::Ltr);
        assert_eq!(drag(&mut c, 100.0, 130.0), Some(DragOutcome::Revert));
        assert_eq!(c.active_index(), 0);
        assert_eq!(translation(&c), 0.0);
    }

    #[test]
    fn rtl_drag_in_same_physical_direction_commits_forward() {
        let mut c = mounted(Direction::Rtl);
        c.pointer_down(mouse(200.0));
        c.pointer_move(mouse(140.0));
        assert_eq!(c.drag_state().live_offset(), 60.0);
        assert_eq!(c.pointer_up(), Some(DragOutcome::CommitForward));
        assert_eq!(c.active_index(), 1);
        let p = c.placement().unwrap();
        assert_eq!(p.translate_x, 300.0);
        assert!(p.mirrored);
    }

    #[test]
    fn last_slide_boundary_reverts() {
        let mut c = mounted(Direction::Ltr);
        c.go_to(2);
        assert_eq!(drag(&mut c, 200.0, 120.0), Some(DragOutcome::Revert));
        assert_eq!(c.active_index(), 2);
        assert_eq!(translation(&c), -600.0);
    }

    #[test]
    fn resize_repositions_without_index_change() {
        let mut c = recorded(Direction::Ltr);
        c.go_to(1);
        assert_eq!(translation(&c), -300.0);
        assert!(c.resize(600.0));
        assert_eq!(c.active_index(), 1);
        assert_eq!(translation(&c), -600.0);
        assert_eq!(c.host().resizes, vec![600.0]);
        // Same width again is a no-op.
        assert!(!c.resize(600.0));
        assert_eq!(c.host().resizes.len(), 1);
    }

    #[test]
    fn threshold_law() {
        for offset in [-200.0, -51.0, -50.0, -10.0, 0.0, 10.0, 50.0, 51.0, 200.0] {
            let mut c = mounted(Direction::Ltr);
            c.go_to(1);
            drag(&mut c, 500.0, 500.0 + offset);
            let moved = c.active_index().abs_diff(1);
            if offset > 50.0 || offset < -50.0 {
                assert_eq!(moved, 1, "offset {offset} should commit one step");
            } else {
                assert_eq!(moved, 0, "offset {offset} should revert");
            }
        }
    }

    #[test]
    fn mirror_law() {
        for start in 0..3 {
            for d in [-90.0, -60.0, -20.0, 20.0, 60.0, 90.0] {
                let mut ltr = mounted(Direction::Ltr);
                let mut rtl = mounted(Direction::Rtl);
                ltr.go_to(start);
                rtl.go_to(start);
                // Logical `d` under LTR is a raw `d`; logical `-d` under RTL is also a raw `d`.
                drag(&mut ltr, 400.0, 400.0 + d);
                drag(&mut rtl, 400.0, 400.0 + d);
                assert_eq!(ltr.drag_state(), DragState::Idle);
                assert_eq!(
                    ltr.active_index(),
                    rtl.active_index(),
                    "start {start}, delta {d}"
                );
            }
        }
    }

    #[test]
    fn placement_is_idempotent() {
        let mut c = mounted(Direction::Rtl);
        c.pointer_down(mouse(10.0));
        c.pointer_move(mouse(35.0));
        assert_eq!(c.placement(), c.placement());
        assert_eq!(c.placement().unwrap().translate_x, 25.0);
    }

    #[test]
    fn navigation_ignored_while_dragging() {
        let mut c = mounted(Direction::Ltr);
        c.pointer_down(mouse(100.0));
        assert!(!c.go_to_next());
        assert!(!c.go_to(2));
        assert_eq!(c.active_index(), 0);
        c.pointer_up();
        assert!(c.go_to_next());
        assert!(c.go_to_prev());
        assert!(!c.go_to_prev());
    }

    #[test]
    fn go_to_clamps_out_of_range() {
        let mut c = mounted(Direction::Ltr);
        assert!(c.go_to(usize::MAX));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn release_outside_is_caught_by_global_listener() {
        let mut c = recorded(Direction::Ltr);
        c.pointer_down(mouse(250.0));
        assert_eq!(c.subscribed_listeners(), GlobalListeners::DRAG_TERMINATION);
        assert_eq!(c.host().held, GlobalListeners::DRAG_TERMINATION);
        c.pointer_move(mouse(100.0));
        assert_eq!(
            c.global_event(GlobalEvent::TouchEnd),
            Some(DragOutcome::CommitForward)
        );
        assert!(!c.is_dragging());
        assert!(c.subscribed_listeners().is_empty());
        assert!(c.host().held.is_empty());
        // A second release finds nothing subscribed.
        assert_eq!(c.global_event(GlobalEvent::MouseUp), None);
    }

    #[test]
    fn end_without_move_clears_drag() {
        let mut c = recorded(Direction::Ltr);
        c.pointer_down(mouse(50.0));
        assert_eq!(c.pointer_leave(), Some(DragOutcome::Revert));
        assert!(!c.is_dragging());
        assert_eq!(c.host().subscribes, 1);
        assert_eq!(c.host().unsubscribes, 1);
    }

    #[test]
    fn move_before_start_is_ignored() {
        let mut c = mounted(Direction::Ltr);
        assert!(!c.pointer_move(mouse(10.0)));
        assert_eq!(c.drag_state(), DragState::Idle);
        assert_eq!(c.pointer_up(), None);
    }

    #[test]
    fn touch_cancel_reverts_regardless_of_offset() {
        let mut c = mounted(Direction::Ltr);
        c.pointer_down(InputPoint::Touch(&[Point::new(300.0, 0.0)]));
        c.pointer_move(InputPoint::Touch(&[Point::new(10.0, 0.0)]));
        assert_eq!(
            c.global_event(GlobalEvent::TouchCancel),
            Some(DragOutcome::Revert)
        );
        assert_eq!(c.active_index(), 0);
        assert_eq!(translation(&c), 0.0);
    }

    #[test]
    fn empty_touch_list_does_not_move() {
        let mut c = mounted(Direction::Ltr);
        c.pointer_down(InputPoint::Touch(&[Point::new(300.0, 0.0)]));
        c.pointer_move(InputPoint::Touch(&[Point::new(200.0, 0.0)]));
        assert!(!c.pointer_move(InputPoint::Touch(&[])));
        assert_eq!(c.drag_state().live_offset(), -100.0);
    }

    #[test]
    fn unmeasured_width_never_commits() {
        let mut c = Carousel::new(three_slides(), Direction::Ltr);
        c.mount(0.0);
        assert_eq!(c.placement(), None);
        assert_eq!(drag(&mut c, 300.0, 0.0), Some(DragOutcome::Revert));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(Vec::new(), Direction::Ltr);
        c.mount(300.0);
        assert!(!c.pointer_down(mouse(10.0)));
        assert!(!c.pointer_move(mouse(100.0)));
        assert_eq!(c.pointer_up(), None);
        assert!(!c.go_to_next());
        assert!(!c.go_to(4));
        assert!(!c.resize(500.0));
        assert!(c.view().is_none());
        assert!(c.placement().is_none());
    }

    #[test]
    fn input_before_mount_is_ignored() {
        let config = CarouselConfig::default();
        let mut c = Carousel::with_config(three_slides(), config, Recorder::new()).unwrap();
        assert!(!c.pointer_down(mouse(200.0)));
        assert!(!c.pointer_move(mouse(100.0)));
        assert_eq!(c.pointer_up(), None);
        assert!(!c.go_to_next());
        assert!(!c.go_to(2));
        assert!(!c.resize(600.0));
        assert_eq!(c.host().subscribes, 0);
        assert!(c.subscribed_listeners().is_empty());
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.container_width(), 0.0);
        assert!(c.host().placements.is_empty());

        c.mount(300.0);
        assert!(c.pointer_down(mouse(200.0)));
        assert_eq!(c.host().subscribes, 1);
    }

    #[test]
    fn mounting_again_acts_as_resize() {
        let mut c = recorded(Direction::Ltr);
        c.pointer_down(mouse(200.0));
        c.pointer_move(mouse(100.0));
        c.mount(600.0);
        assert!(!c.is_dragging());
        assert!(c.host().held.is_empty());
        assert_eq!(c.container_width(), 600.0);
        assert_eq!(c.host().mounts, 1);
        assert_eq!(c.host().resizes, vec![600.0]);
        assert_eq!(c.active_index(), 0);
        let last = c.host().placements.last().copied().flatten().unwrap();
        assert_eq!(last.translate_x, 0.0);

        // Same width again changes nothing.
        c.mount(600.0);
        assert_eq!(c.host().resizes.len(), 1);
    }

    #[test]
    fn direction_change_resets_drag() {
        let mut c = recorded(Direction::Ltr);
        c.pointer_down(mouse(100.0));
        c.pointer_move(mouse(20.0));
        c.set_direction(Direction::Rtl);
        assert!(!c.is_dragging());
        assert!(c.host().held.is_empty());
        assert_eq!(c.direction(), Direction::Rtl);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn resize_mid_drag_abandons_drag() {
        let mut c = recorded(Direction::Ltr);
        c.pointer_down(mouse(100.0));
        c.pointer_move(mouse(0.0));
        assert!(c.resize(450.0));
        assert!(!c.is_dragging());
        assert!(c.host().held.is_empty());
        assert_eq!(c.pointer_up(), None);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn unmount_releases_listeners() {
        let mut c = recorded(Direction::Ltr);
        c.pointer_down(mouse(100.0));
        let host = c.unmount();
        assert!(host.held.is_empty());
        assert_eq!(host.subscribes, 1);
        assert_eq!(host.unsubscribes, 1);
        assert_eq!(host.mounts, 1);
    }

    #[test]
    fn host_sees_placement_on_every_change() {
        let mut c = recorded(Direction::Ltr);
        drag(&mut c, 200.0, 100.0);
        let xs: Vec<Option<f64>> = c
            .host()
            .placements
            .iter()
            .map(|p| p.map(|p| p.translate_x))
            .collect();
        // mount, start, move, end
        assert_eq!(xs, vec![Some(0.0), Some(0.0), Some(-100.0), Some(-300.0)]);
        let last = c.host().placements.last().copied().flatten().unwrap();
        assert_eq!(last.transition, Some(c.config().transition));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = CarouselConfig::default().with_commit_threshold(f64::NAN);
        assert!(Carousel::with_config(three_slides(), config, NoHost).is_err());
    }

    #[test]
    fn custom_threshold_is_honored() {
        let config = CarouselConfig::default().with_commit_threshold(120.0);
        let mut c = Carousel::with_config(three_slides(), config, NoHost).unwrap();
        c.mount(300.0);
        assert_eq!(drag(&mut c, 200.0, 100.0), Some(DragOutcome::Revert));
        assert_eq!(drag(&mut c, 200.0, 60.0), Some(DragOutcome::CommitForward));
    }

    #[test]
    fn bundled_events_drive_the_same_handlers() {
        let mut c = mounted(Direction::Ltr);
        assert!(c.handle(CarouselEvent::PointerDown(mouse(200.0))));
        assert!(c.handle(CarouselEvent::PointerMove(mouse(100.0))));
        assert!(c.handle(CarouselEvent::Global(GlobalEvent::MouseUp)));
        assert_eq!(c.active_index(), 1);
        assert!(c.handle(CarouselEvent::Navigate(NavAction::Next)));
        assert!(c.handle(CarouselEvent::GoTo(0)));
        assert!(c.handle(CarouselEvent::Resize(480.0)));
        assert!(!c.handle(CarouselEvent::PointerLeave));
    }

    #[test]
    fn index_stays_in_bounds_under_arbitrary_input() {
        // Small LCG so the sequence is deterministic without a test dependency.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            seed >> 33
        };
        for direction in [Direction::Ltr, Direction::Rtl] {
            let mut c = recorded(direction);
            for _ in 0..2_000 {
                let x = (next() % 1_000) as f64;
                let event = match next() % 9 {
                    0 => CarouselEvent::PointerDown(mouse(x)),
                    1 | 2 => CarouselEvent::PointerMove(mouse(x)),
                    3 => CarouselEvent::PointerUp,
                    4 => CarouselEvent::Global(GlobalEvent::TouchCancel),
                    5 => CarouselEvent::Global(GlobalEvent::MouseUp),
                    6 => CarouselEvent::Navigate(NavAction::Next),
                    7 => CarouselEvent::GoTo(usize::try_from(next() % 10).unwrap()),
                    _ => CarouselEvent::Resize(x),
                };
                c.handle(event);
                assert!(c.active_index() < c.slide_count());
                assert_eq!(c.is_dragging(), !c.subscribed_listeners().is_empty());
                assert_eq!(c.host().held, c.subscribed_listeners());
            }
        }
    }
}
