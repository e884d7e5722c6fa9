// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annular-sector path generation.
//!
//! Builds the outline of one donut wedge as a [`BezPath`]: outer arc, radial
//! edges, inner arc, with an angular pad gap between neighbors and optional
//! rounded corners. Arcs are emitted as cubic Bézier approximations via
//! [`kurbo::Arc`].
//!
//! Angles follow the chart convention (0 at 12 o'clock, clockwise positive),
//! so the unit vector for angle `a` is `(sin a, -cos a)`. Corner rounding
//! uses tangent circles: a corner circle of radius `rc` touching the outer
//! ring sits at distance `r1 - rc` from the center, inset from the radial
//! edge by `asin(rc / (r1 - rc))`; the inner-ring case mirrors this with
//! `r0 + rc`. Corner radii are clamped to half the ring thickness and to the
//! available sweep.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Arc, BezPath, Point, Vec2};

/// Below this, radii and sweeps are treated as degenerate.
const GEOM_EPS: f64 = 1e-9;

fn unit(a: f64) -> Vec2 {
    Vec2::new(a.sin(), -a.cos())
}

/// Wraps an angle difference into `[-π, π)`.
fn wrap_pm_pi(a: f64) -> f64 {
    a - TAU * ((a + PI) / TAU).floor()
}

/// Appends a circular arc around `center` from chart angle `a_from` to
/// `a_to`. The path's current point must already be at the arc start.
fn ring_arc(path: &mut BezPath, center: Point, r: f64, a_from: f64, a_to: f64, tolerance: f64) {
    let arc = Arc {
        center,
        radii: Vec2::new(r, r),
        start_angle: a_from - FRAC_PI_2,
        sweep_angle: a_to - a_from,
        x_rotation: 0.0,
    };
    arc.to_cubic_beziers(tolerance, |p1, p2, p3| {
        path.curve_to(p1, p2, p3);
    });
}

/// Appends the corner arc around `c` from `from` to `to`, sweeping the short
/// way. The path's current point must already be at `from`.
fn corner_arc(path: &mut BezPath, c: Point, rc: f64, from: Point, to: Point, tolerance: f64) {
    let va = from - c;
    let vb = to - c;
    let start = va.y.atan2(va.x);
    let sweep = wrap_pm_pi(vb.y.atan2(vb.x) - start);
    let arc = Arc {
        center: c,
        radii: Vec2::new(rc, rc),
        start_angle: start,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    arc.to_cubic_beziers(tolerance, |p1, p2, p3| {
        path.curve_to(p1, p2, p3);
    });
}

/// Builds the outline of one annular sector.
///
/// Returns `None` for degenerate input: a non-finite value, a zero outer
/// radius, or an angle range the pad gap swallows entirely. Callers should
/// treat `None` as "nothing to render this frame" rather than an error —
/// wedges routinely pass through degenerate ranges while collapsing.
///
/// `start_angle`/`end_angle` may be given in either order. The pad is an
/// angular inset of `pad_angle / 2` on each side.
pub fn sector_path(
    center: Point,
    start_angle: f64,
    end_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    pad_angle: f64,
    corner_radius: f64,
    tolerance: f64,
) -> Option<BezPath> {
    if !(start_angle.is_finite()
        && end_angle.is_finite()
        && inner_radius.is_finite()
        && outer_radius.is_finite())
    {
        return None;
    }

    let (a0, a1) = if start_angle <= end_angle {
        (start_angle, end_angle)
    } else {
        (end_angle, start_angle)
    };
    let pad = pad_angle.max(0.0);
    if (a1 - a0) - pad <= GEOM_EPS {
        return None;
    }
    let a0 = a0 + pad / 2.0;
    let a1 = a1 - pad / 2.0;
    let sweep = a1 - a0;

    let mut r0 = inner_radius.max(0.0);
    let mut r1 = outer_radius.max(0.0);
    if r0 > r1 {
        core::mem::swap(&mut r0, &mut r1);
    }
    if r1 <= GEOM_EPS {
        return None;
    }

    let rc = corner_radius.max(0.0).min((r1 - r0) / 2.0);
    let s = (sweep / 2.0).sin();

    // Outer corner radius and its angular inset from each radial edge.
    let (rc1, d1) = if rc > GEOM_EPS {
        let mut rc1 = rc;
        let mut d1 = (rc1 / (r1 - rc1)).asin();
        if 2.0 * d1 > sweep {
            rc1 = (r1 * s / (1.0 + s)).min(rc);
            d1 = (rc1 / (r1 - rc1)).asin();
        }
        (rc1, d1)
    } else {
        (0.0, 0.0)
    };

    // Inner corners only exist when there is an inner ring.
    let (rc0, d0) = if rc > GEOM_EPS && r0 > GEOM_EPS {
        let mut rc0 = rc;
        let mut d0 = (rc0 / (r0 + rc0)).asin();
        if 2.0 * d0 > sweep && s < 1.0 {
            rc0 = (r0 * s / (1.0 - s)).min(rc);
            d0 = (rc0 / (r0 + rc0)).asin();
        }
        (rc0, d0)
    } else {
        (0.0, 0.0)
    };

    let pt = |r: f64, a: f64| center + unit(a) * r;
    let mut path = BezPath::new();

    // Outer ring, clockwise.
    if rc1 > GEOM_EPS {
        let cos_d1 = d1.cos();
        let q0 = center + unit(a0) * ((r1 - rc1) * cos_d1);
        path.move_to(q0);
        let c_start = center + unit(a0 + d1) * (r1 - rc1);
        corner_arc(&mut path, c_start, rc1, q0, pt(r1, a0 + d1), tolerance);
        ring_arc(&mut path, center, r1, a0 + d1, a1 - d1, tolerance);
        let c_end = center + unit(a1 - d1) * (r1 - rc1);
        let q1 = center + unit(a1) * ((r1 - rc1) * cos_d1);
        corner_arc(&mut path, c_end, rc1, pt(r1, a1 - d1), q1, tolerance);
    } else {
        path.move_to(pt(r1, a0));
        ring_arc(&mut path, center, r1, a0, a1, tolerance);
    }

    // Inner ring, counter-clockwise back to the start edge.
    if r0 > GEOM_EPS {
        if rc0 > GEOM_EPS {
            let cos_d0 = d0.cos();
            let q2 = center + unit(a1) * ((r0 + rc0) * cos_d0);
            path.line_to(q2);
            let c_end = center + unit(a1 - d0) * (r0 + rc0);
            corner_arc(&mut path, c_end, rc0, q2, pt(r0, a1 - d0), tolerance);
            ring_arc(&mut path, center, r0, a1 - d0, a0 + d0, tolerance);
            let c_start = center + unit(a0 + d0) * (r0 + rc0);
            let q3 = center + unit(a0) * ((r0 + rc0) * cos_d0);
            corner_arc(&mut path, c_start, rc0, pt(r0, a0 + d0), q3, tolerance);
        } else {
            path.line_to(pt(r0, a1));
            ring_arc(&mut path, center, r0, a1, a0, tolerance);
        }
    } else {
        path.line_to(center);
    }

    path.close_path();
    Some(path)
}

/// Returns the visual center of a sector: the mid-ring point at the raw
/// mid-angle. The pad gap is ignored, matching the usual arc-centroid
/// contract.
pub fn sector_centroid(
    center: Point,
    start_angle: f64,
    end_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
) -> Point {
    let mid = (start_angle + end_angle) / 2.0;
    let r = (inner_radius + outer_radius) / 2.0;
    center + unit(mid) * r
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape;

    use super::*;

    const TOL: f64 = 0.1;

    fn quarter(corner_radius: f64) -> Option<BezPath> {
        sector_path(
            Point::ZERO,
            0.0,
            FRAC_PI_2,
            20.0,
            80.0,
            0.05,
            corner_radius,
            TOL,
        )
    }

    #[test]
    fn quarter_sector_stays_inside_the_outer_ring() {
        let path = quarter(0.0).expect("non-degenerate sector");
        let b = path.bounding_box();
        assert!(b.x1 <= 80.0 + 1e-6);
        assert!(b.y0 >= -80.0 - 1e-6);
        // A 12-to-3-o'clock wedge lives in the upper-right quadrant.
        assert!(b.x0 >= -1e-6);
        assert!(b.y1 <= 1e-6);
        assert!(b.width() > 50.0);
    }

    #[test]
    fn rounded_corners_shrink_the_outline() {
        let sharp = quarter(0.0).expect("sharp sector");
        let round = quarter(4.0).expect("rounded sector");
        let sb = sharp.bounding_box();
        let rb = round.bounding_box();
        assert!(rb.area() < sb.area());
        assert!(rb.x1 <= sb.x1 + 1e-6);
        assert!(rb.y0 >= sb.y0 - 1e-6);
    }

    #[test]
    fn sector_starts_on_the_padded_edge() {
        let path = quarter(0.0).expect("sector");
        let Some(kurbo::PathEl::MoveTo(p)) = path.elements().first().copied() else {
            panic!("expected a leading MoveTo");
        };
        let a: f64 = 0.025; // pad / 2
        let expected = Point::new(80.0 * a.sin(), -80.0 * a.cos());
        assert!((p - expected).hypot() < 1e-9);
    }

    #[test]
    fn angle_order_does_not_matter() {
        let forward = quarter(4.0).expect("sector");
        let reversed = sector_path(Point::ZERO, FRAC_PI_2, 0.0, 20.0, 80.0, 0.05, 4.0, TOL)
            .expect("reversed sector");
        let fb = forward.bounding_box();
        let rb = reversed.bounding_box();
        assert!((fb.x0 - rb.x0).abs() < 1e-9);
        assert!((fb.y1 - rb.y1).abs() < 1e-9);
    }

    #[test]
    fn pad_swallowing_the_range_yields_nothing() {
        assert!(sector_path(Point::ZERO, 1.0, 1.0, 20.0, 80.0, 0.05, 4.0, TOL).is_none());
        assert!(sector_path(Point::ZERO, 1.0, 1.04, 20.0, 80.0, 0.05, 4.0, TOL).is_none());
    }

    #[test]
    fn zero_outer_radius_yields_nothing() {
        assert!(sector_path(Point::ZERO, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, TOL).is_none());
    }

    #[test]
    fn pie_sector_reaches_the_center() {
        let path = sector_path(Point::ZERO, 0.0, FRAC_PI_2, 0.0, 80.0, 0.0, 0.0, TOL)
            .expect("pie sector");
        let b = path.bounding_box();
        assert!(b.x0 <= 1e-9 && b.y1 >= -1e-9);
    }

    #[test]
    fn centroid_sits_on_the_mid_ring() {
        let c = sector_centroid(Point::ZERO, 0.0, FRAC_PI_2, 20.0, 80.0);
        let mid = FRAC_PI_2 / 2.0;
        let expected = Point::new(50.0 * mid.sin(), -50.0 * mid.cos());
        assert!((c - expected).hypot() < 1e-12);
    }

    #[test]
    fn centroid_is_translated_by_the_center() {
        let c = sector_centroid(Point::new(100.0, 200.0), 0.0, FRAC_PI_2, 20.0, 80.0);
        let base = sector_centroid(Point::ZERO, 0.0, FRAC_PI_2, 20.0, 80.0);
        assert!((c - (base + Vec2::new(100.0, 200.0))).hypot() < 1e-12);
    }
}
