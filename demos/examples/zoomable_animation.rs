// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the controller through `TransformAnimator` at a fixed frame rate,
//! printing the interpolated transform a renderer would apply each frame.
//!
//! Gesture events are delivered at scripted times, so double-tap tweens and
//! gesture springs can be seen redirecting mid-flight.
//!
//! Run with: `cargo run -p loupe_demos --example zoomable_animation`

use kurbo::{Point, Vec2};
use loupe_animate::TransformAnimator;
use loupe_demos::VIEW;
use loupe_zoomable::{GestureEvent, ZoomableConfig, ZoomableController};

const FPS: f64 = 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = ZoomableController::new(ZoomableConfig::default())?;
    controller.set_view_size(VIEW);
    let mut animator = TransformAnimator::new(controller.transform());

    // (time, event): a double-tap in, a drag while the tween is still
    // running, and a double-tap back out.
    let schedule = [
        (
            0.1,
            GestureEvent::DoubleTap {
                point: Point::new(60.0, 300.0),
            },
        ),
        (
            0.35,
            GestureEvent::TransformDelta {
                pan_delta: Vec2::new(-20.0, 10.0),
                zoom_factor: 1.0,
            },
        ),
        (
            1.2,
            GestureEvent::DoubleTap {
                point: Point::new(100.0, 200.0),
            },
        ),
    ];
    let mut pending = schedule.iter().peekable();

    let frames = (2.5 * FPS) as usize;
    for frame in 0..frames {
        let now = frame as f64 / FPS;
        while let Some((at, event)) = pending.peek() {
            if *at > now {
                break;
            }
            controller.handle(*event);
            pending.next();
        }

        if controller.take_changed() {
            animator.retarget(now, &controller);
        }
        let t = animator.sample(now);
        // Only print frames where something is in flight, plus a heartbeat.
        if !animator.is_settled() || frame % 30 == 0 {
            println!(
                "t={now:5.2}s  scale {:.3}  offset ({:8.2}, {:8.2})  target scale {:.3}",
                t.scale,
                t.offset.x,
                t.offset.y,
                animator.target().scale,
            );
        }
    }

    Ok(())
}
