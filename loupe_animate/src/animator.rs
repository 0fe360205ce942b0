// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_zoomable::{Easing, Motion};

use crate::animatable::Animatable;

/// Squared settle tolerance for position and velocity (one thousandth of a
/// unit). Springs snap exactly onto the target once inside it.
const SETTLE_EPS2: f64 = 1e-6;

/// Largest integration step for springs, in seconds. Frame times above this
/// are split into substeps so stiff springs stay stable.
const MAX_SPRING_STEP: f64 = 1.0 / 240.0;

/// Upper bound on substeps per sample, so a host that stalls for minutes
/// cannot make a single sample call arbitrarily expensive.
const MAX_SPRING_SUBSTEPS: usize = 4096;

#[inline]
fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::sqrt(x)
    }
}

fn ease(easing: Easing, t: f64) -> f64 {
    match easing {
        Easing::Linear => t,
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
        Easing::EaseOutCubic => {
            let u = 1.0 - t;
            1.0 - u * u * u
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Channel<T> {
    /// At the target; samples return it unchanged.
    Settled,
    Tween { from: T, start: f64, last: f64 },
    Spring { position: T, velocity: T, last: f64 },
}

/// One retargetable animation channel.
///
/// The channel owns a moving target and the in-flight state needed to approach
/// it under the current [`Motion`]. All methods are driven by a host-supplied
/// monotonic time in seconds; sampling never blocks and never allocates.
#[derive(Clone, Copy, Debug)]
pub struct Animator<T: Animatable> {
    motion: Motion,
    target: T,
    channel: Channel<T>,
}

impl<T: Animatable> Animator<T> {
    /// Creates a channel already settled at `initial`.
    #[must_use]
    pub fn new(initial: T, motion: Motion) -> Self {
        Self {
            motion,
            target: initial,
            channel: Channel::Settled,
        }
    }

    /// Returns the current target value.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Returns `true` once the channel has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(self.channel, Channel::Settled)
    }

    /// Redirects the channel toward `target` under `motion`.
    ///
    /// The motion continues from the value sampled at `now`; a spring also
    /// carries its velocity across the retarget, so mid-flight redirection is
    /// smooth rather than a restart. Retargeting with an unchanged target and
    /// motion is a no-op, making it safe to call once per frame.
    pub fn retarget(&mut self, now: f64, target: T, motion: Motion) {
        if motion == self.motion && target == self.target {
            return;
        }
        let current = self.sample(now);
        let velocity = match self.channel {
            Channel::Spring { velocity, .. } => velocity,
            _ => T::ZERO,
        };
        self.motion = motion;
        self.target = target;
        self.channel = match motion {
            Motion::Tween { .. } => {
                if current == target {
                    Channel::Settled
                } else {
                    Channel::Tween {
                        from: current,
                        start: now,
                        last: now,
                    }
                }
            }
            Motion::Spring { .. } => Channel::Spring {
                position: current,
                velocity,
                last: now,
            },
        };
    }

    /// Samples the channel at time `now`, advancing in-flight state.
    ///
    /// Sampling with a time at or before the previous sample returns the
    /// value unchanged, so out-of-order frame timestamps cannot rewind the
    /// animation.
    pub fn sample(&mut self, now: f64) -> T {
        match self.channel {
            Channel::Settled => self.target,
            Channel::Tween { from, start, last } => self.sample_tween(from, start, last, now),
            Channel::Spring {
                position,
                velocity,
                last,
            } => self.sample_spring(position, velocity, last, now),
        }
    }

    fn sample_tween(&mut self, from: T, start: f64, last: f64, now: f64) -> T {
        let Motion::Tween { duration, easing } = self.motion else {
            // Channel/motion mismatch cannot be constructed through the public
            // API; settle rather than guess.
            self.channel = Channel::Settled;
            return self.target;
        };
        // An out-of-order timestamp holds at the furthest point seen.
        let now = now.max(last);
        if duration <= 0.0 || now - start >= duration {
            self.channel = Channel::Settled;
            return self.target;
        }
        self.channel = Channel::Tween {
            from,
            start,
            last: now,
        };
        let t = (now - start) / duration;
        T::lerp(from, self.target, ease(easing, t))
    }

    fn sample_spring(&mut self, position: T, velocity: T, last: f64, now: f64) -> T {
        let Motion::Spring {
            damping_ratio,
            stiffness,
        } = self.motion
        else {
            self.channel = Channel::Settled;
            return self.target;
        };
        let dt = now - last;
        if dt <= 0.0 {
            return position;
        }

        // A stall longer than the whole integration budget means the spring
        // settled long ago; snap instead of integrating a huge interval.
        if dt >= MAX_SPRING_STEP * MAX_SPRING_SUBSTEPS as f64 {
            self.channel = Channel::Settled;
            return self.target;
        }

        // Unit mass: acceleration = k * (target - x) - c * v, with the
        // damping coefficient derived from the ratio as c = 2 * zeta * sqrt(k).
        let damping = 2.0 * damping_ratio * sqrt(stiffness);
        let steps = ((dt / MAX_SPRING_STEP) as usize + 1).min(MAX_SPRING_SUBSTEPS);
        let h = dt / steps as f64;

        let mut position = position;
        let mut velocity = velocity;
        for _ in 0..steps {
            let accel = self
                .target
                .sub(position)
                .scale(stiffness)
                .add(velocity.scale(-damping));
            velocity = velocity.add(accel.scale(h));
            position = position.add(velocity.scale(h));
        }

        if position.dist2(self.target) <= SETTLE_EPS2 && velocity.dist2(T::ZERO) <= SETTLE_EPS2 {
            self.channel = Channel::Settled;
            return self.target;
        }
        self.channel = Channel::Spring {
            position,
            velocity,
            last: now,
        };
        position
    }
}
