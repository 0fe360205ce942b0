// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// A value an [`Animator`](crate::Animator) channel can interpolate.
///
/// Implementations form a small vector space: addition, scalar scaling, and
/// linear interpolation, plus a squared distance used for settle detection.
/// Provided for `f64` (the scale channel) and [`Vec2`] (the offset channel,
/// animated as one 2D value so both components arrive together).
pub trait Animatable: Copy + PartialEq + core::fmt::Debug {
    /// The additive identity.
    const ZERO: Self;

    /// Linear interpolation from `from` to `to` by `t` in `[0, 1]`.
    fn lerp(from: Self, to: Self, t: f64) -> Self;

    /// Component-wise addition.
    fn add(self, other: Self) -> Self;

    /// Component-wise subtraction.
    fn sub(self, other: Self) -> Self;

    /// Scaling by a scalar factor.
    fn scale(self, factor: f64) -> Self;

    /// Squared distance to `other`; square-root-free on purpose so settle
    /// checks stay available without a math backend.
    fn dist2(self, other: Self) -> f64;
}

impl Animatable for f64 {
    const ZERO: Self = 0.0;

    fn lerp(from: Self, to: Self, t: f64) -> Self {
        from + (to - from) * t
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn dist2(self, other: Self) -> f64 {
        (self - other) * (self - other)
    }
}

impl Animatable for Vec2 {
    const ZERO: Self = Self::ZERO;

    fn lerp(from: Self, to: Self, t: f64) -> Self {
        from + (to - from) * t
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn dist2(self, other: Self) -> f64 {
        (self - other).hypot2()
    }
}
