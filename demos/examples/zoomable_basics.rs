// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted gesture stream against a controller and prints the
//! immediate (non-animated) transform after each event.
//!
//! Run with: `cargo run -p loupe_demos --example zoomable_basics`

use loupe_demos::{VIEW, describe, scripted_gestures};
use loupe_zoomable::{ZoomableConfig, ZoomableController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = ZoomableController::new(ZoomableConfig {
        animate: false,
        ..Default::default()
    })?;
    controller.set_view_size(VIEW);

    println!(
        "viewport {}x{}, scale range [{}, {}]",
        VIEW.width,
        VIEW.height,
        controller.config().min_scale,
        controller.config().max_scale
    );

    for event in scripted_gestures() {
        controller.handle(event);
        let t = controller.transform();
        println!(
            "{:<44} -> scale {:.3} offset ({:8.2}, {:8.2}){}",
            describe(&event),
            t.scale,
            t.offset.x,
            t.offset.y,
            if controller.is_at_rest() { "  [rest]" } else { "" },
        );
    }

    Ok(())
}
