// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (y - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns “nice-ish” tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Infer a `(min, max)` domain over an iterator of values.
///
/// Non-finite values are ignored. Returns `None` if no finite values are
/// present.
pub fn infer_domain(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn maps_endpoints_to_range() {
        let s = ScaleLinear::new((-10.0, 10.0), (0.0, 640.0));
        assert!((s.map(-10.0) - 0.0).abs() < EPS);
        assert!((s.map(10.0) - 640.0).abs() < EPS);
        assert!((s.map(0.0) - 320.0).abs() < EPS);
    }

    #[test]
    fn map_and_invert_round_trip() {
        let s = ScaleLinear::new((3.0, 17.0), (400.0, 20.0));
        for i in 0..=20 {
            let x = 3.0 + f64::from(i) * 0.7;
            assert!((s.invert(s.map(x)) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.map(5.0), 0.0);
        assert_eq!(s.invert(s.map(5.0)), 5.0);
    }

    #[test]
    fn ticks_cover_the_domain_with_a_nice_step() {
        let s = ScaleLinear::new((0.0, 10.0), (0.0, 1.0));
        let ticks = s.ticks(5);
        assert!(ticks.len() >= 2);
        assert!(ticks.first().copied().unwrap() <= 0.0);
        assert!(ticks.last().copied().unwrap() >= 10.0);
        let step = ticks[1] - ticks[0];
        assert!((step - 2.0).abs() < EPS);
    }

    #[test]
    fn infer_domain_skips_non_finite_values() {
        let d = infer_domain([1.0, f64::NAN, -3.0, f64::INFINITY, 2.0]);
        assert_eq!(d, Some((-3.0, 2.0)));
        assert_eq!(infer_domain([f64::NAN]), None);
        assert_eq!(infer_domain([]), None);
    }
}
