// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface description and pointer math.

use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

/// The drawing area a component tree renders into.
///
/// Radial components share one surface read-only: it supplies the center used
/// to convert absolute pointer coordinates into angles. The surface is never
/// mutated by the components that hold it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// Surface width in scene coordinates.
    pub width: f64,
    /// Surface height in scene coordinates.
    pub height: f64,
}

impl Surface {
    /// Creates a surface of the given size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the surface center.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Converts an absolute pointer position into an angle around the center.
    ///
    /// Angles use the chart convention: 0 at 12 o'clock, increasing
    /// clockwise, normalized into `[0, 2π)`.
    pub fn pointer_angle(&self, pos: Point) -> f64 {
        let center = self.center();
        let dx = pos.x - center.x;
        let dy = pos.y - center.y;
        let angle = dy.atan2(dx) + FRAC_PI_2;
        angle - TAU * (angle / TAU).floor()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(300.0, 300.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn cardinal_directions_map_to_quarter_turns() {
        let surface = Surface::new(200.0, 200.0);
        // Straight up from center is angle 0.
        assert!((surface.pointer_angle(Point::new(100.0, 0.0)) - 0.0).abs() < EPS);
        // Right is a quarter turn.
        assert!((surface.pointer_angle(Point::new(200.0, 100.0)) - FRAC_PI_2).abs() < EPS);
        // Down is a half turn.
        assert!((surface.pointer_angle(Point::new(100.0, 200.0)) - PI).abs() < EPS);
        // Left is three quarters.
        assert!((surface.pointer_angle(Point::new(0.0, 100.0)) - 3.0 * FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn pointer_angle_is_normalized() {
        let surface = Surface::new(100.0, 100.0);
        for &(x, y) in &[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0)] {
            let a = surface.pointer_angle(Point::new(x, y));
            assert!((0.0..core::f64::consts::TAU).contains(&a));
        }
    }
}
