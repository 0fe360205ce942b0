// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::motion::Motion;

/// Immutable configuration for a [`ZoomableController`](crate::ZoomableController).
///
/// Validated once at construction; changing any option afterward means
/// constructing a new controller. The defaults mirror a typical crop-filled
/// image viewer: scale between 1 and 4, double-tap to 3, pan deltas doubled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomableConfig {
    /// When `false` the whole controller is an inert pass-through: gesture
    /// handlers are ignored and the transform stays at rest.
    pub enabled: bool,
    /// The scale floor, conventionally `1.0` for crop-filled content.
    pub min_scale: f64,
    /// The scale ceiling for pinch gestures.
    pub max_scale: f64,
    /// Multiplier applied to incoming pan deltas while zoomed.
    pub panning_speed_multiplier: f64,
    /// Whether double-tap toggles between rest and [`Self::double_tap_scale`].
    pub double_tap_enabled: bool,
    /// The scale a double-tap from rest zooms to; must lie within
    /// `[min_scale, max_scale]`.
    pub double_tap_scale: f64,
    /// Whether consumers should interpolate toward the transform instead of
    /// applying it immediately. Advisory for the animation layer; the state
    /// machine itself is unaffected.
    pub animate: bool,
    /// Curve for the scale channel during continuous gestures.
    pub scale_motion: Motion,
    /// Curve for the pan channel during continuous gestures.
    pub pan_motion: Motion,
    /// Curve for the scale channel after a double-tap.
    pub double_tap_scale_motion: Motion,
    /// Curve for the pan channel after a double-tap.
    pub double_tap_pan_motion: Motion,
}

impl Default for ZoomableConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_scale: 1.0,
            max_scale: 4.0,
            panning_speed_multiplier: 2.0,
            double_tap_enabled: true,
            double_tap_scale: 3.0,
            animate: true,
            scale_motion: Motion::GESTURE_SCALE,
            pan_motion: Motion::GESTURE_PAN,
            double_tap_scale_motion: Motion::DOUBLE_TAP,
            double_tap_pan_motion: Motion::DOUBLE_TAP,
        }
    }
}

impl ZoomableConfig {
    /// Checks the configuration invariants.
    ///
    /// Called by [`ZoomableController::new`](crate::ZoomableController::new);
    /// exposed so hosts can validate user-supplied settings up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_scale <= 0.0 {
            return Err(ConfigError::MinScaleNotPositive);
        }
        if self.min_scale >= self.max_scale {
            return Err(ConfigError::MinScaleNotBelowMax);
        }
        if self.panning_speed_multiplier <= 0.0 {
            return Err(ConfigError::PanningSpeedNotPositive);
        }
        if self.double_tap_scale < self.min_scale || self.double_tap_scale > self.max_scale {
            return Err(ConfigError::DoubleTapScaleOutOfRange);
        }
        Ok(())
    }
}

/// A configuration invariant was violated at controller construction.
///
/// Construction fails atomically; no partial controller is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_scale` must be greater than zero.
    MinScaleNotPositive,
    /// `min_scale` must be strictly less than `max_scale`.
    MinScaleNotBelowMax,
    /// `panning_speed_multiplier` must be greater than zero.
    PanningSpeedNotPositive,
    /// `double_tap_scale` must lie within `[min_scale, max_scale]`.
    DoubleTapScaleOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::MinScaleNotPositive => "min_scale must be greater than 0",
            Self::MinScaleNotBelowMax => "min_scale must be less than max_scale",
            Self::PanningSpeedNotPositive => "panning_speed_multiplier must be greater than 0",
            Self::DoubleTapScaleOutOfRange => {
                "double_tap_scale must lie between min_scale and max_scale"
            }
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ZoomableConfig};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ZoomableConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_min_scale() {
        let config = ZoomableConfig {
            min_scale: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MinScaleNotPositive));

        let config = ZoomableConfig {
            min_scale: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MinScaleNotPositive));
    }

    #[test]
    fn rejects_inverted_scale_range() {
        let config = ZoomableConfig {
            min_scale: 2.0,
            max_scale: 1.0,
            double_tap_scale: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MinScaleNotBelowMax));

        // Equality is also rejected: a degenerate range leaves nothing to zoom.
        let config = ZoomableConfig {
            min_scale: 2.0,
            max_scale: 2.0,
            double_tap_scale: 2.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MinScaleNotBelowMax));
    }

    #[test]
    fn rejects_non_positive_panning_speed() {
        let config = ZoomableConfig {
            panning_speed_multiplier: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PanningSpeedNotPositive));
    }

    #[test]
    fn rejects_double_tap_scale_outside_range() {
        let config = ZoomableConfig {
            double_tap_scale: 5.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DoubleTapScaleOutOfRange));

        let config = ZoomableConfig {
            double_tap_scale: 0.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DoubleTapScaleOutOfRange));

        // The range is inclusive at both ends.
        let config = ZoomableConfig {
            double_tap_scale: 4.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_error_messages_name_the_violated_option() {
        extern crate std;
        use std::string::ToString;

        assert!(
            ConfigError::MinScaleNotPositive
                .to_string()
                .contains("min_scale"),
            "message should name the option"
        );
        assert!(
            ConfigError::DoubleTapScaleOutOfRange
                .to_string()
                .contains("double_tap_scale"),
            "message should name the option"
        );
    }
}
