// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared donut configuration.

/// Visual configuration shared by every wedge of one donut.
///
/// The owning [`Donut`](crate::Donut) passes the same configuration by
/// reference into each piece operation, so all descendants see identical
/// values for one render pass. There is no validation beyond the types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutConfig {
    /// Inner ring radius in scene coordinates (0 for a pie).
    pub inner_radius: f64,
    /// Outer ring radius in scene coordinates.
    pub outer_radius: f64,
    /// Angular gap reserved between adjacent wedges, in radians.
    pub pad_angle: f64,
    /// Corner rounding radius in scene coordinates.
    pub corner_radius: f64,
    /// Angle newly entering wedges grow out of and exiting wedges collapse
    /// toward. `None` means wedges enter at their own angles and exit
    /// relative to angle 0.
    pub enter_angle: Option<f64>,
}

impl DonutConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            inner_radius: 20.0,
            outer_radius: 80.0,
            pad_angle: 0.05,
            corner_radius: 4.0,
            enter_angle: None,
        }
    }

    /// Sets the inner radius.
    pub const fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Sets the outer radius.
    pub const fn with_outer_radius(mut self, outer_radius: f64) -> Self {
        self.outer_radius = outer_radius;
        self
    }

    /// Sets the pad angle.
    pub const fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Sets the corner radius.
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Sets the enter/exit transition angle.
    pub const fn with_enter_angle(mut self, enter_angle: f64) -> Self {
        self.enter_angle = Some(enter_angle);
        self
    }

    /// Returns the enter angle, defaulting to 0 when none is configured.
    pub fn enter_angle(&self) -> f64 {
        self.enter_angle.unwrap_or(0.0)
    }
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = DonutConfig::default();
        assert_eq!(config.inner_radius, 20.0);
        assert_eq!(config.outer_radius, 80.0);
        assert_eq!(config.pad_angle, 0.05);
        assert_eq!(config.corner_radius, 4.0);
        assert_eq!(config.enter_angle, None);
        assert_eq!(config.enter_angle(), 0.0);
    }
}
