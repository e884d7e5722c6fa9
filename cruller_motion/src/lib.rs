// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spring animation for the `cruller` chart gallery.
//!
//! A [`Spring`] animates one scalar toward a target using the damped
//! harmonic oscillator
//!
//! ```text
//! m·x''(t) = -k·(x(t) - target) - c·x'(t)
//! ```
//!
//! where `k` is stiffness, `c` damping, and `m` mass. The spring is driven by
//! explicit `tick(dt)` calls from the host render loop and carries its value
//! and velocity as state, so retargeting mid-flight is seamless: the value
//! keeps moving from wherever it is, at whatever speed it had.
//!
//! [`AngleSpring`] layers the angle-specific retargeting policy on top:
//! among the equivalent representations of a target angle (`θ`, `θ ± 2π`) it
//! animates toward whichever is closest to the current value, frame-shifting
//! the current value by a full turn first when that wins. A wedge therefore
//! always sweeps the short way around the circle instead of unwinding a full
//! turn.
//!
//! This crate integrates numerically rather than evaluating a closed-form
//! solution in `t`; a closed form would have to be re-derived at every
//! interruption, while the integrated state is interruption-free by
//! construction.

#![no_std]

mod angle;
mod spring;

pub use angle::AngleSpring;
pub use spring::{Spring, SpringConfig};
