// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle animation with shortest-path retargeting.

use core::f64::consts::TAU;

use crate::spring::{Spring, SpringConfig};

/// A [`Spring`] over an angle in radians.
///
/// Retargeting picks, among `target`, `target - 2π`, and `target + 2π`, the
/// representation closest to the current value. When a shifted candidate
/// wins, the current value is first frame-shifted by that same full turn
/// (discontinuously, which is invisible on a circle) and the spring then
/// animates toward the un-shifted target. The animated sweep at a retarget
/// therefore never exceeds π radians.
#[derive(Clone, Copy, Debug)]
pub struct AngleSpring {
    spring: Spring,
}

impl AngleSpring {
    /// Creates an angle spring at rest at `value` radians.
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            spring: Spring::new(value, config),
        }
    }

    /// Returns the instantaneous angle.
    pub fn value(&self) -> f64 {
        self.spring.value()
    }

    /// Returns the current target angle.
    pub fn target(&self) -> f64 {
        self.spring.target()
    }

    /// Replaces the physics parameters, keeping value and velocity.
    pub fn set_config(&mut self, config: SpringConfig) {
        self.spring.set_config(config);
    }

    /// Returns whether the angle has effectively reached its target.
    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Advances the animation by `dt` seconds and returns the new angle.
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.spring.tick(dt)
    }

    /// Re-aims at `target`, sweeping the short way around the circle.
    ///
    /// Ties prefer the un-shifted target, so an exact half-turn animates
    /// without a frame shift.
    pub fn set_target_shortest(&mut self, target: f64) {
        let current = self.spring.value();
        let plain = (target - current).abs();
        let up = (target - (current + TAU)).abs();
        let down = (target - (current - TAU)).abs();

        if up < plain && up <= down {
            self.spring.jump(current + TAU);
        } else if down < plain && down < up {
            self.spring.jump(current - TAU);
        }
        self.spring.set_target(target);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::PI;

    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn config() -> SpringConfig {
        SpringConfig::new().with_damping(20.0)
    }

    #[test]
    fn retarget_never_sweeps_more_than_half_a_turn() {
        for i in -20..=20 {
            for j in -20..=20 {
                let current = f64::from(i) * 0.37;
                let target = f64::from(j) * 0.53;
                let mut angle = AngleSpring::new(current, config());
                angle.set_target_shortest(target);
                let sweep = (angle.target() - angle.value()).abs();
                assert!(
                    sweep <= PI + 1e-9,
                    "sweep {sweep} for current {current} target {target}"
                );
            }
        }
    }

    #[test]
    fn frame_shift_is_a_whole_turn() {
        // 0.1 -> 6.0 is a long way round; the short way crosses the wrap.
        let mut angle = AngleSpring::new(0.1, config());
        angle.set_target_shortest(6.0);
        assert!((angle.value() - (0.1 + TAU)).abs() < 1e-12);
        assert_eq!(angle.target(), 6.0);
    }

    #[test]
    fn nearby_target_does_not_shift() {
        let mut angle = AngleSpring::new(1.0, config());
        angle.set_target_shortest(2.0);
        assert_eq!(angle.value(), 1.0);
        assert_eq!(angle.target(), 2.0);
    }

    #[test]
    fn exact_half_turn_prefers_unshifted() {
        let mut angle = AngleSpring::new(0.0, config());
        angle.set_target_shortest(PI);
        assert_eq!(angle.value(), 0.0);
        assert_eq!(angle.target(), PI);
    }

    #[test]
    fn settles_on_the_retargeted_angle() {
        let mut angle = AngleSpring::new(0.1, config());
        angle.set_target_shortest(6.0);
        for _ in 0..240 {
            angle.tick(FRAME);
        }
        assert!(angle.is_settled());
        assert_eq!(angle.value(), 6.0);
    }
}
