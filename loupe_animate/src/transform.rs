// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use loupe_zoomable::{Motion, TransformState, ZoomableController};

use crate::animator::Animator;

/// The two animation channels of a zoomable transform.
///
/// Scale and offset run as independent channels (a scalar and one 2D value),
/// each under the curve pair selected by the controller's double-tap mode
/// flag: continuous-gesture curves normally, the double-tap curves right
/// after a double-tap.
///
/// The host retargets once per frame after delivering gesture events, then
/// samples and renders:
///
/// ```rust
/// # use kurbo::Size;
/// # use loupe_animate::TransformAnimator;
/// # use loupe_zoomable::{ZoomableConfig, ZoomableController};
/// # let mut controller = ZoomableController::new(ZoomableConfig::default()).unwrap();
/// # controller.set_view_size(Size::new(200.0, 400.0));
/// # let mut animator = TransformAnimator::new(controller.transform());
/// # let now = 0.0;
/// if controller.take_changed() {
///     animator.retarget(now, &controller);
/// }
/// let frame = animator.sample(now);
/// // render with frame.scale / frame.offset
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TransformAnimator {
    scale: Animator<f64>,
    offset: Animator<Vec2>,
}

impl TransformAnimator {
    /// Creates an animator already settled at `initial`, typically the
    /// controller's rest state.
    #[must_use]
    pub fn new(initial: TransformState) -> Self {
        // The motions are placeholders until the first retarget; a fresh
        // channel is settled and never samples them.
        Self {
            scale: Animator::new(initial.scale, Motion::GESTURE_SCALE),
            offset: Animator::new(initial.offset, Motion::GESTURE_PAN),
        }
    }

    /// Redirects both channels toward the controller's current transform.
    ///
    /// Curve selection follows [`ZoomableController::double_tap_mode`].
    /// Retargeting is idempotent, so this may be called every frame; hosts
    /// polling [`ZoomableController::take_changed`] can also skip the call
    /// while nothing changed.
    pub fn retarget(&mut self, now: f64, controller: &ZoomableController) {
        let config = controller.config();
        let (scale_motion, pan_motion) = if controller.double_tap_mode() {
            (
                config.double_tap_scale_motion,
                config.double_tap_pan_motion,
            )
        } else {
            (config.scale_motion, config.pan_motion)
        };
        let target = controller.transform();
        self.scale.retarget(now, target.scale, scale_motion);
        self.offset.retarget(now, target.offset, pan_motion);
    }

    /// Samples the interpolated transform at time `now`.
    pub fn sample(&mut self, now: f64) -> TransformState {
        TransformState {
            scale: self.scale.sample(now),
            offset: self.offset.sample(now),
        }
    }

    /// Returns the transform both channels are heading toward.
    #[must_use]
    pub fn target(&self) -> TransformState {
        TransformState {
            scale: self.scale.target(),
            offset: self.offset.target(),
        }
    }

    /// Returns `true` once both channels have reached their targets.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.scale.is_settled() && self.offset.is_settled()
    }
}
