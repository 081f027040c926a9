// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration.
//!
//! Loads slides and configuration from JSON, then drives the carousel through a host that logs
//! window-level listener subscriptions and lifecycle hooks. The drag is released "outside" the
//! carousel, so only the window-level mouse-up listener can end it.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_host`

use kurbo::Point;
use understory_carousel::carousel::{Carousel, CarouselEvent};
use understory_carousel::config::CarouselConfig;
use understory_carousel::host::{GlobalEvent, GlobalListeners, Host};
use understory_carousel::pointer::InputPoint;
use understory_carousel::position::TrackPlacement;
use understory_carousel::types::{CarouselState, Slide};

const SLIDES: &str = r#"[
  { "imgSrc": "headphones.jpg", "title": "Wireless Headphones" },
  { "imageSource": "watch.jpg", "title": "Smart Watch", "description": "Stay connected." },
  { "imageSource": "speaker.jpg", "title": "Bluetooth Speaker" }
]"#;

const CONFIG: &str = r#"{ "direction": "ltr", "commitThreshold": 40.0 }"#;

#[derive(Debug, Default)]
struct LoggingHost {
    held: Option<GlobalListeners>,
}

impl Host for LoggingHost {
    fn subscribe(&mut self, listeners: GlobalListeners) {
        println!("  host: subscribe {listeners:?}");
        self.held = Some(listeners);
    }

    fn unsubscribe(&mut self, listeners: GlobalListeners) {
        println!("  host: unsubscribe {listeners:?}");
        self.held = None;
    }

    fn on_mount(&mut self, state: &CarouselState, placement: Option<TrackPlacement>) {
        println!(
            "  host: mounted {} slides at width {} -> {:?}",
            state.slide_count,
            state.container_width,
            placement.map(|p| p.translate_x)
        );
    }

    fn on_resize(&mut self, width: f64) {
        println!("  host: resized to {width}");
    }

    fn on_state_change(&mut self, state: &CarouselState, placement: Option<TrackPlacement>) {
        if let Some(p) = placement {
            let transition = p
                .transition
                .map_or_else(|| "none".to_string(), |t| t.to_string());
            println!(
                "  host: index {} translate_x={} transition={transition}",
                state.active_index, p.translate_x
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let slides: Vec<Slide> = serde_json::from_str(SLIDES)?;
    let config: CarouselConfig = serde_json::from_str(CONFIG)?;
    println!("== config: {config:?} ==");

    let mut carousel = Carousel::with_config(slides, config, LoggingHost::default())?;
    carousel.mount(320.0);

    let events = [
        CarouselEvent::PointerDown(InputPoint::Mouse(Point::new(300.0, 10.0))),
        CarouselEvent::PointerMove(InputPoint::Mouse(Point::new(250.0, 10.0))),
        // Pointer leaves the window; only the global listener sees the release.
        CarouselEvent::Global(GlobalEvent::MouseUp),
        // Already released: ignored.
        CarouselEvent::Global(GlobalEvent::MouseUp),
        CarouselEvent::Resize(640.0),
        CarouselEvent::GoTo(7),
    ];
    for event in events {
        let changed = carousel.handle(event);
        println!("{event:?} -> changed={changed}");
    }

    let host = carousel.unmount();
    println!("== unmounted, listeners held: {:?} ==", host.held);
    Ok(())
}
