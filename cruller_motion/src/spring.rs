// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped-spring scalar animation.

/// Rest threshold on distance to the target.
const REST_DELTA: f64 = 1e-3;

/// Rest threshold on velocity, in units per second.
const REST_SPEED: f64 = 1e-3;

/// Maximum integration substep in seconds.
///
/// Host frames arrive at display rate, but a stiff spring integrated at a
/// full frame step loses accuracy, so large `dt`s are subdivided.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Spring physics parameters.
///
/// The defaults (stiffness 100, damping 10, mass 1) are underdamped and
/// bouncy. `damping² = 4·stiffness·mass` is critically damped: the fastest
/// approach with no overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Stiffness `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`.
    pub mass: f64,
}

impl SpringConfig {
    /// Creates the default spring configuration.
    pub const fn new() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
        }
    }

    /// Sets the stiffness.
    pub const fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Sets the damping coefficient.
    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the mass.
    pub const fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A continuously animated scalar.
///
/// The spring exposes its instantaneous value each frame and supports
/// interruption: [`Spring::set_target`] re-aims the animation mid-flight
/// without touching the current value or velocity.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    /// Creates a spring at rest at `value`.
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    /// Returns the instantaneous value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the instantaneous velocity in units per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the current target.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Replaces the physics parameters, keeping value and velocity.
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Re-aims the animation at a new target.
    ///
    /// Value and velocity are preserved, so a retarget mid-flight is
    /// continuous.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Discontinuously moves the value, bypassing animation.
    ///
    /// Velocity is reset and the spring comes to rest at `value` until the
    /// next retarget.
    pub fn jump(&mut self, value: f64) {
        self.value = value;
        self.velocity = 0.0;
        self.target = value;
    }

    /// Returns whether the spring has effectively reached its target.
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advances the animation by `dt` seconds and returns the new value.
    ///
    /// A settled spring snaps exactly onto its target and stays there.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            // Semi-implicit Euler: update velocity first, then position.
            let accel = (-self.config.stiffness * (self.value - self.target)
                - self.config.damping * self.velocity)
                / self.config.mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn critically_damped() -> SpringConfig {
        SpringConfig::new().with_damping(20.0)
    }

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.tick(FRAME);
        }
    }

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::new(0.0, critically_damped());
        spring.set_target(1.0);
        run(&mut spring, 180);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn critically_damped_does_not_overshoot() {
        let mut spring = Spring::new(0.0, critically_damped());
        spring.set_target(1.0);
        let mut prev = spring.value();
        for _ in 0..600 {
            let v = spring.tick(FRAME);
            assert!(v >= prev - 1e-9, "value moved backwards: {prev} -> {v}");
            assert!(v <= 1.0 + 1e-6, "overshoot: {v}");
            prev = v;
        }
    }

    #[test]
    fn retarget_mid_flight_is_continuous() {
        let mut spring = Spring::new(0.0, critically_damped());
        spring.set_target(1.0);
        run(&mut spring, 6);
        let before = spring.value();
        let velocity = spring.velocity();
        spring.set_target(-1.0);
        assert_eq!(spring.value(), before);
        assert_eq!(spring.velocity(), velocity);
        run(&mut spring, 180);
        assert_eq!(spring.value(), -1.0);
    }

    #[test]
    fn jump_bypasses_animation() {
        let mut spring = Spring::new(0.0, critically_damped());
        spring.set_target(1.0);
        run(&mut spring, 6);
        spring.jump(5.0);
        assert_eq!(spring.value(), 5.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn settled_spring_retargeted_to_same_value_stays_still() {
        let mut spring = Spring::new(2.0, critically_damped());
        spring.set_target(2.0);
        for _ in 0..10 {
            assert_eq!(spring.tick(FRAME), 2.0);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn underdamped_default_overshoots() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        let mut max = 0.0_f64;
        for _ in 0..600 {
            max = max.max(spring.tick(FRAME));
        }
        assert!(max > 1.0 + REST_DELTA, "expected overshoot, peaked at {max}");
    }
}
