// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::config::{ConfigError, ZoomableConfig};
use crate::transform::{TransformState, clamp_pan};

/// A raw gesture event, as produced by the host's pointer-input layer.
///
/// The controller does not recognize gestures itself; the host's detector
/// feeds it one event at a time, in device order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// One tick of a continuous pinch/drag gesture.
    TransformDelta {
        /// Pointer movement since the previous tick, in viewport coordinates.
        pan_delta: Vec2,
        /// Multiplicative zoom change since the previous tick; `1.0` when the
        /// tick only pans.
        zoom_factor: f64,
    },
    /// A recognized double-tap.
    DoubleTap {
        /// The tapped position in viewport coordinates.
        point: Point,
    },
}

/// Gesture-to-transform state machine for one viewport.
///
/// The controller owns the current scale and offset, applies clamping and the
/// double-tap toggle, and exposes the result as a [`TransformState`] snapshot.
/// It has two conceptual states:
/// - **Rest**: scale at the configured floor, zero offset. Entered initially
///   and whenever the scale returns to the floor.
/// - **Zoomed**: scale above the floor; panning is permitted within the
///   pan-bound box for the current scale and viewport.
///
/// Calls must not overlap: one event at a time per controller. If a host
/// shares a controller across threads, mutual exclusion is its responsibility.
#[derive(Clone, Debug)]
pub struct ZoomableController {
    config: ZoomableConfig,
    view: Size,
    scale: f64,
    offset: Vec2,
    double_tap_mode: bool,
    changed: bool,
}

impl ZoomableController {
    /// Creates a controller at rest for an as-yet-unsized viewport.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a configuration invariant is violated;
    /// no partial controller is produced.
    pub fn new(config: ZoomableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            view: Size::ZERO,
            scale: config.min_scale,
            offset: Vec2::ZERO,
            double_tap_mode: false,
            changed: false,
        })
    }

    /// Returns the configuration the controller was built with.
    #[must_use]
    pub fn config(&self) -> &ZoomableConfig {
        &self.config
    }

    /// Returns the viewport size the controller currently clamps against.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view
    }

    /// Sets the viewport size in device coordinates.
    ///
    /// Layout changes (for example a rotation) shrink or grow the pan-bound
    /// box, so the current offset is re-clamped against the new size.
    pub fn set_view_size(&mut self, view: Size) {
        if self.view == view {
            return;
        }
        self.view = view;
        let clamped = clamp_pan(self.offset, self.view, self.scale);
        if clamped != self.offset {
            self.offset = clamped;
            self.changed = true;
        }
    }

    /// Applies one tick of a continuous pinch/drag gesture.
    ///
    /// The new scale is `scale * zoom_factor`, clamped into the configured
    /// range. While the result stays above the floor, the pan delta (scaled by
    /// the panning speed multiplier) moves the offset within the pan-bound box
    /// of the *new* scale; the instant the scale lands exactly on the floor,
    /// the offset snaps back to zero.
    ///
    /// Ignored when the controller is disabled.
    pub fn on_transform_gesture(&mut self, pan_delta: Vec2, zoom_factor: f64) {
        if !self.config.enabled {
            return;
        }
        self.double_tap_mode = false;

        let scale = (self.scale * zoom_factor).clamp(self.config.min_scale, self.config.max_scale);
        let offset = if scale == self.config.min_scale {
            Vec2::ZERO
        } else {
            let candidate = self.offset + pan_delta * self.config.panning_speed_multiplier;
            clamp_pan(candidate, self.view, scale)
        };
        self.commit(scale, offset);
    }

    /// Applies a recognized double-tap at `point`.
    ///
    /// Strict two-state toggle: from rest, zoom to the configured double-tap
    /// scale with the tapped point pulled toward the viewport center (clamped
    /// to the pan bounds); from any zoomed scale, return to rest.
    ///
    /// Ignored when the controller is disabled or double-tap is disabled.
    pub fn on_double_tap(&mut self, point: Point) {
        if !self.config.enabled || !self.config.double_tap_enabled {
            return;
        }
        self.double_tap_mode = true;

        if self.scale == self.config.min_scale {
            let scale = self.config.double_tap_scale;
            // A double-tap scale at the floor is legal; the rest invariant
            // (no offset at the floor) still applies, as in the gesture path.
            let offset = if scale == self.config.min_scale {
                Vec2::ZERO
            } else {
                let centroid = Point::new(self.view.width / 2.0, self.view.height / 2.0);
                clamp_pan((centroid - point) * scale, self.view, scale)
            };
            self.commit(scale, offset);
        } else {
            self.commit(self.config.min_scale, Vec2::ZERO);
        }
    }

    /// Dispatches a [`GestureEvent`] to the matching handler.
    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::TransformDelta {
                pan_delta,
                zoom_factor,
            } => self.on_transform_gesture(pan_delta, zoom_factor),
            GestureEvent::DoubleTap { point } => self.on_double_tap(point),
        }
    }

    /// Returns the live transform snapshot.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        TransformState {
            scale: self.scale,
            offset: self.offset,
        }
    }

    /// Returns `true` while the controller is in the rest state.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.scale == self.config.min_scale
    }

    /// Returns `true` when the most recent event was a double-tap.
    ///
    /// The animation layer selects the double-tap curves while this is set;
    /// any continuous gesture tick clears it again.
    #[must_use]
    pub fn double_tap_mode(&self) -> bool {
        self.double_tap_mode
    }

    /// Returns whether the transform changed since the last call, clearing
    /// the flag.
    ///
    /// Hosts that redraw on demand can poll this once per frame and skip
    /// retargeting/redrawing when nothing moved.
    pub fn take_changed(&mut self) -> bool {
        core::mem::replace(&mut self.changed, false)
    }

    fn commit(&mut self, scale: f64, offset: Vec2) {
        if scale != self.scale || offset != self.offset {
            self.scale = scale;
            self.offset = offset;
            self.changed = true;
        }
    }
}
