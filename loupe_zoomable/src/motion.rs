// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Describes how an animated value should approach its target.
///
/// `Motion` is pure data. The controller only stores these descriptors;
/// interpreting them into per-frame samples is the job of an animation layer
/// such as `loupe_animate`. Hosts that render the transform immediately can
/// ignore them entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// A damped spring toward the target.
    ///
    /// The spring is retargetable mid-flight: changing the target redirects
    /// the motion smoothly instead of restarting it.
    Spring {
        /// Damping ratio: `1.0` is critically damped, below `1.0` bounces.
        damping_ratio: f64,
        /// Spring stiffness; higher values settle faster.
        stiffness: f64,
    },
    /// A fixed-duration interpolation with an easing curve.
    Tween {
        /// Duration in seconds.
        duration: f64,
        /// Easing applied to the normalized progress.
        easing: Easing,
    },
}

impl Motion {
    /// A gently bouncing spring suited to continuous scale gestures.
    pub const GESTURE_SCALE: Self = Self::Spring {
        damping_ratio: 0.75,
        stiffness: 200.0,
    };

    /// A softer spring suited to continuous pan gestures.
    pub const GESTURE_PAN: Self = Self::Spring {
        damping_ratio: 0.75,
        stiffness: 50.0,
    };

    /// The half-second tween used for both double-tap channels.
    pub const DOUBLE_TAP: Self = Self::Tween {
        duration: 0.5,
        easing: Easing::EaseInOutCubic,
    };
}

/// Easing curve for [`Motion::Tween`].
///
/// All curves are polynomial so that evaluation stays available in `no_std`
/// builds without a math backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Accelerate then decelerate; the conventional choice for tap-triggered
    /// transitions.
    #[default]
    EaseInOutCubic,
    /// Start fast and decelerate toward the target.
    EaseOutCubic,
}
