// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// The bounded transform applied to the displayed content.
///
/// The consumer renders the content with `scale_x = scale_y = scale` and a
/// translation of `offset` relative to the viewport center. A state with
/// `scale` at the configured floor always carries a zero offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation in viewport coordinates, `(0, 0)` when centered.
    pub offset: Vec2,
}

impl TransformState {
    /// The rest state for a given scale floor: fitted, not panned.
    #[must_use]
    pub const fn rest(min_scale: f64) -> Self {
        Self {
            scale: min_scale,
            offset: Vec2::ZERO,
        }
    }
}

/// Computes the largest valid pan offset per axis for a viewport and scale.
///
/// The content is assumed to cover the viewport at scale 1 (crop-fill), so
/// panning may move each edge by at most half of the scaled overhang:
/// `size * (scale - 1) / 2`. Degenerate viewports and scales at or below 1
/// collapse the bounds to zero rather than producing an inverted range.
#[must_use]
pub fn max_pan_offset(view: Size, scale: f64) -> Vec2 {
    Vec2::new(
        (view.width * (scale - 1.0) / 2.0).max(0.0),
        (view.height * (scale - 1.0) / 2.0).max(0.0),
    )
}

/// Clamps a candidate offset component-wise into the pan-bound box for the
/// given viewport and scale.
#[must_use]
pub fn clamp_pan(offset: Vec2, view: Size, scale: f64) -> Vec2 {
    let max = max_pan_offset(view, scale);
    Vec2::new(offset.x.clamp(-max.x, max.x), offset.y.clamp(-max.y, max.y))
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{TransformState, clamp_pan, max_pan_offset};

    #[test]
    fn rest_state_has_zero_offset() {
        let rest = TransformState::rest(1.0);
        assert_eq!(rest.scale, 1.0);
        assert_eq!(rest.offset, Vec2::ZERO);
    }

    #[test]
    fn pan_bounds_grow_with_scale() {
        let view = Size::new(200.0, 400.0);
        assert_eq!(max_pan_offset(view, 1.0), Vec2::ZERO);
        assert_eq!(max_pan_offset(view, 2.0), Vec2::new(100.0, 200.0));
        assert_eq!(max_pan_offset(view, 3.0), Vec2::new(200.0, 400.0));
    }

    #[test]
    fn pan_bounds_collapse_for_degenerate_viewports() {
        assert_eq!(max_pan_offset(Size::new(0.0, 400.0), 2.0), Vec2::new(0.0, 200.0));
        assert_eq!(max_pan_offset(Size::new(200.0, 0.0), 2.0), Vec2::new(100.0, 0.0));
        assert_eq!(max_pan_offset(Size::ZERO, 3.0), Vec2::ZERO);
    }

    #[test]
    fn pan_bounds_never_invert_below_unit_scale() {
        let view = Size::new(200.0, 400.0);
        assert_eq!(max_pan_offset(view, 0.5), Vec2::ZERO);
        let clamped = clamp_pan(Vec2::new(30.0, -30.0), view, 0.5);
        assert_eq!(clamped, Vec2::ZERO);
    }

    #[test]
    fn clamp_is_component_wise() {
        let view = Size::new(200.0, 400.0);
        // At scale 2 the box is 100 x 200.
        let clamped = clamp_pan(Vec2::new(150.0, -500.0), view, 2.0);
        assert_eq!(clamped, Vec2::new(100.0, -200.0));
        // A candidate inside the box is untouched.
        let inside = Vec2::new(-40.0, 60.0);
        assert_eq!(clamp_pan(inside, view, 2.0), inside);
    }
}
