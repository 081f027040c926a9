// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Right-to-left carousel rendered as text.
//!
//! Shows how the headless view model lays out buttons, the readout, and dots for RTL, and which
//! parts of the track and slide content carry the mirror.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_rtl`

use kurbo::Point;
use understory_carousel::carousel::Carousel;
use understory_carousel::direction::Direction;
use understory_carousel::pointer::InputPoint;
use understory_carousel::types::Slide;
use understory_carousel::view::Side;

fn render(carousel: &Carousel) {
    let Some(view) = carousel.view() else {
        println!("  (nothing to render)");
        return;
    };
    let arrow = |side: Side| match side {
        Side::Left => "<",
        Side::Right => ">",
    };
    for button in view.buttons {
        println!(
            "  button {:?}: {} {:?} \"{}\"{}",
            button.side,
            arrow(button.chevron),
            button.action,
            button.label,
            if button.disabled { " (disabled)" } else { "" },
        );
    }
    if let Some(placement) = view.track.placement {
        println!(
            "  track width={:?} translate_x={} mirrored={} grabbing={}",
            view.track.width, placement.translate_x, placement.mirrored, view.track.grabbing,
        );
    }
    for slide in &view.slides {
        let marker = if slide.index == carousel.active_index() {
            "  <- active"
        } else {
            ""
        };
        println!(
            "  slide {} \"{}\" content_mirrored={}{marker}",
            slide.index, slide.slide.title, slide.content_mirrored,
        );
    }
    let dots: String = view
        .dots
        .iter()
        .map(|d| if d.active { '#' } else { '.' })
        .collect();
    println!("  readout {}  dots [{dots}]", view.readout);
}

fn main() {
    let slides = vec![
        Slide::new("headphones.jpg", "Wireless Headphones"),
        Slide::new("watch.jpg", "Smart Watch"),
        Slide::new("speaker.jpg", "Bluetooth Speaker"),
    ];
    let mut carousel = Carousel::new(slides, Direction::Rtl);
    carousel.mount(300.0);

    println!("== RTL at index 0 ==");
    render(&carousel);

    // Same physical gesture as the LTR example: content dragged left by 60px.
    carousel.pointer_down(InputPoint::Touch(&[Point::new(200.0, 50.0)]));
    carousel.pointer_move(InputPoint::Touch(&[Point::new(140.0, 50.0)]));
    println!("== RTL while dragging (logical offset {}) ==", carousel.drag_state().live_offset());
    render(&carousel);

    let outcome = carousel.pointer_up();
    println!("== RTL after release ({outcome:?}) ==");
    render(&carousel);
}
