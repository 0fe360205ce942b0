// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Loupe demos.
//!
//! The demos are headless: instead of a windowing stack they replay a
//! scripted gesture stream against a controller and print the transforms a
//! renderer would apply.

use kurbo::{Point, Size, Vec2};
use loupe_zoomable::GestureEvent;

/// The viewport used by all demos: a portrait 200 x 400 area.
pub const VIEW: Size = Size::new(200.0, 400.0);

/// A scripted interaction: pinch in over a few ticks, drag around, pinch
/// back out, then double-tap in and out.
pub fn scripted_gestures() -> Vec<GestureEvent> {
    let mut events = Vec::new();
    // Pinch in: several multiplicative ticks, the way a detector reports them.
    for _ in 0..6 {
        events.push(GestureEvent::TransformDelta {
            pan_delta: Vec2::ZERO,
            zoom_factor: 1.2,
        });
    }
    // Drag toward the top-left corner until the bound pins the offset.
    for _ in 0..8 {
        events.push(GestureEvent::TransformDelta {
            pan_delta: Vec2::new(12.0, 20.0),
            zoom_factor: 1.0,
        });
    }
    // Pinch back out past the floor; the offset snaps home with the scale.
    for _ in 0..4 {
        events.push(GestureEvent::TransformDelta {
            pan_delta: Vec2::ZERO,
            zoom_factor: 0.7,
        });
    }
    // Double-tap off-center to zoom in, then again anywhere to come back.
    events.push(GestureEvent::DoubleTap {
        point: Point::new(60.0, 300.0),
    });
    events.push(GestureEvent::DoubleTap {
        point: Point::new(150.0, 80.0),
    });
    events
}

/// Formats a gesture event compactly for the demo transcripts.
pub fn describe(event: &GestureEvent) -> String {
    match event {
        GestureEvent::TransformDelta {
            pan_delta,
            zoom_factor,
        } => format!("pinch/drag pan=({:.1}, {:.1}) zoom={zoom_factor:.2}", pan_delta.x, pan_delta.y),
        GestureEvent::DoubleTap { point } => {
            format!("double-tap at ({:.0}, {:.0})", point.x, point.y)
        }
    }
}
