// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! This minimal example mounts a three-slide carousel, drags past and short of the commit
//! threshold, and prints the track translation after each step.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_basics`

use kurbo::Point;
use understory_carousel::carousel::Carousel;
use understory_carousel::direction::Direction;
use understory_carousel::pointer::InputPoint;
use understory_carousel::types::Slide;

fn mouse(x: f64) -> InputPoint<'static> {
    InputPoint::Mouse(Point::new(x, 120.0))
}

fn report(label: &str, carousel: &Carousel) {
    let x = carousel.placement().map(|p| p.translate_x);
    println!(
        "  {label:<28} index={}  drag={:?}  translate_x={x:?}",
        carousel.active_index(),
        carousel.drag_state(),
    );
}

fn main() {
    let slides = vec![
        Slide::new("headphones.jpg", "Wireless Headphones")
            .with_description("Premium noise-cancelling headphones with 30-hour battery life."),
        Slide::new("watch.jpg", "Smart Watch")
            .with_description("Track your fitness goals and stay connected with notifications."),
        Slide::new("speaker.jpg", "Bluetooth Speaker")
            .with_description("Waterproof portable speaker with 360 degree sound."),
    ];

    let mut carousel = Carousel::new(slides, Direction::Ltr);
    println!("== LTR, 300px container ==");
    report("before mount", &carousel);
    carousel.mount(300.0);
    report("mounted", &carousel);

    // Past the threshold: commits forward.
    carousel.pointer_down(mouse(200.0));
    carousel.pointer_move(mouse(140.0));
    report("dragging -60px", &carousel);
    let outcome = carousel.pointer_up();
    report(&format!("released ({outcome:?})"), &carousel);

    // Short of the threshold: snaps back.
    carousel.pointer_down(mouse(100.0));
    carousel.pointer_move(mouse(130.0));
    let outcome = carousel.pointer_up();
    report(&format!("released ({outcome:?})"), &carousel);

    // Buttons and dots.
    carousel.go_to_next();
    report("next button", &carousel);
    carousel.go_to(0);
    report("dot 1", &carousel);

    // Resize keeps the index and rescales the translation.
    carousel.go_to(1);
    carousel.resize(600.0);
    report("resized to 600px", &carousel);
}
