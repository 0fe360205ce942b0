// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_zoomable --heading-base-level=0

//! Loupe Zoomable: a headless pinch-zoom / pan / double-tap controller.
//!
//! This crate turns raw pointer gesture deltas into a bounded 2D transform
//! (uniform scale plus translation) for content displayed in a rectangular
//! viewport, typically an image shown crop-filled. It focuses on:
//! - Accumulating scale and offset from continuous pinch/drag ticks.
//! - Clamping the pan offset to the bounds implied by the current scale and
//!   viewport size, so the content edge never reveals a gap.
//! - The double-tap toggle between the rest ("fit") state and a configured
//!   zoom level, centering the tapped point.
//!
//! It does **not** own any input recognition, rendering, or animation loop.
//! Callers are expected to:
//! - Detect pinch/drag and double-tap gestures in their input layer (for
//!   example from `ui-events`) and feed them in as [`GestureEvent`]s.
//! - Apply [`TransformState`] to the rendered content each frame, either
//!   directly or through an interpolating layer such as `loupe_animate`.
//! - Report viewport size changes via [`ZoomableController::set_view_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use loupe_zoomable::{ZoomableConfig, ZoomableController};
//!
//! let mut controller = ZoomableController::new(ZoomableConfig::default())?;
//! controller.set_view_size(Size::new(200.0, 400.0));
//!
//! // A pinch tick doubling the scale, without panning.
//! controller.on_transform_gesture(Vec2::ZERO, 2.0);
//! assert_eq!(controller.transform().scale, 2.0);
//!
//! // Double-tap while zoomed always returns to rest.
//! controller.on_double_tap(Point::new(100.0, 200.0));
//! assert!(controller.is_at_rest());
//! # Ok::<(), loupe_zoomable::ConfigError>(())
//! ```
//!
//! ## Design notes
//!
//! - The controller is a synchronous, single-threaded state machine. Events
//!   must be delivered one at a time per controller; there is no interior
//!   locking.
//! - Configuration is validated once at construction and immutable afterward;
//!   every gesture input is total after that (out-of-range values are clamped,
//!   never rejected).
//! - The animation-curve descriptors in [`ZoomableConfig`] are pure data.
//!   Interpreting them is left to a higher layer (see `loupe_animate`), so the
//!   state machine stays free of any rendering-loop concerns.
//! - Hosts that redraw on demand can poll [`ZoomableController::take_changed`]
//!   once per frame instead of registering a callback.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod motion;
mod transform;

pub use config::{ConfigError, ZoomableConfig};
pub use controller::{GestureEvent, ZoomableController};
pub use motion::{Easing, Motion};
pub use transform::{TransformState, clamp_pan, max_pan_offset};
