// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use loupe_animate::TransformAnimator;
use loupe_zoomable::{GestureEvent, ZoomableConfig, ZoomableController};

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_unit(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as f64 / f64::from(u32::MAX)
    }
}

fn build_event_stream(n: usize, seed: u64) -> Vec<GestureEvent> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|i| match i % 16 {
            // Mostly pan ticks, a few pinch ticks, the occasional double-tap.
            15 => GestureEvent::DoubleTap {
                point: Point::new(rng.next_unit() * 200.0, rng.next_unit() * 400.0),
            },
            0 | 8 => GestureEvent::TransformDelta {
                pan_delta: Vec2::ZERO,
                zoom_factor: 0.6 + rng.next_unit() * 1.2,
            },
            _ => GestureEvent::TransformDelta {
                pan_delta: Vec2::new(rng.next_unit() * 80.0 - 40.0, rng.next_unit() * 80.0 - 40.0),
                zoom_factor: 1.0,
            },
        })
        .collect()
}

fn controller() -> ZoomableController {
    let mut controller =
        ZoomableController::new(ZoomableConfig::default()).expect("default config is valid");
    controller.set_view_size(Size::new(200.0, 400.0));
    controller
}

fn bench_gesture_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_stream");
    for n in [1_000_usize, 10_000] {
        let events = build_event_stream(n, 0xDEAD_BEEF);
        group.bench_function(format!("events_{n}"), |b| {
            b.iter_batched(
                || (controller(), events.clone()),
                |(mut controller, events)| {
                    for event in events {
                        controller.handle(event);
                    }
                    black_box(controller.transform())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_animator_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator_sampling");

    // 600 frames at 60 fps with a retarget every 10 frames, the pattern an
    // interactive host produces while the user keeps gesturing.
    group.bench_function("frames_600", |b| {
        let events = build_event_stream(60, 0xFEED_F00D);
        b.iter_batched(
            || {
                let controller = controller();
                let animator = TransformAnimator::new(controller.transform());
                (controller, animator, events.clone())
            },
            |(mut controller, mut animator, events)| {
                let mut events = events.into_iter();
                for frame in 0..600_usize {
                    let now = frame as f64 / 60.0;
                    if frame % 10 == 0 {
                        if let Some(event) = events.next() {
                            controller.handle(event);
                        }
                        animator.retarget(now, &controller);
                    }
                    black_box(animator.sample(now));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_gesture_stream, bench_animator_sampling);
criterion_main!(benches);
