// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_animate --heading-base-level=0

//! Loupe Animate: retargetable animation channels for zoomable transforms.
//!
//! This crate interprets the [`Motion`](loupe_zoomable::Motion) descriptors
//! carried by a `loupe_zoomable` configuration into per-frame samples. It is
//! host-driven: there are no clocks or timers inside, the host passes a
//! monotonic time (in seconds) into every call, typically from its
//! animation-frame scheduler.
//!
//! The building block is [`Animator`], one independent channel animating a
//! single value. A channel is always *retargetable*: feeding it a new target
//! mid-flight redirects the motion smoothly from the currently sampled value,
//! it never restarts from the original starting point. Retargeting with an
//! unchanged target and curve is a no-op, so hosts may retarget every frame.
//!
//! [`TransformAnimator`] bundles the two channels of a zoomable transform
//! (scale and offset) and selects curve pairs by the controller's double-tap
//! mode flag.
//!
//! ## Minimal example
//!
//! ```rust
//! use loupe_animate::Animator;
//! use loupe_zoomable::{Easing, Motion};
//!
//! let linear = Motion::Tween {
//!     duration: 1.0,
//!     easing: Easing::Linear,
//! };
//! let mut channel = Animator::new(0.0, linear);
//! channel.retarget(0.0, 10.0, linear);
//! assert_eq!(channel.sample(0.5), 5.0);
//! assert_eq!(channel.sample(1.0), 10.0);
//! assert!(channel.is_settled());
//! ```
//!
//! ## Driving a controller
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use loupe_animate::TransformAnimator;
//! use loupe_zoomable::{ZoomableConfig, ZoomableController};
//!
//! let mut controller = ZoomableController::new(ZoomableConfig::default())?;
//! controller.set_view_size(Size::new(200.0, 400.0));
//! let mut animator = TransformAnimator::new(controller.transform());
//!
//! // Per frame: feed pending gesture events, then retarget and sample.
//! controller.on_transform_gesture(Vec2::ZERO, 2.0);
//! animator.retarget(0.016, &controller);
//! let frame = animator.sample(0.016);
//! assert!(frame.scale < 2.0); // still on its way to the target
//! # Ok::<(), loupe_zoomable::ConfigError>(())
//! ```
//!
//! This crate is `no_std`; it requires either the `std` or `libm` feature for
//! its math backend, mirroring Kurbo.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("loupe_animate requires either the `std` or `libm` feature");

mod animatable;
mod animator;
mod transform;

pub use animatable::Animatable;
pub use animator::Animator;
pub use transform::TransformAnimator;
