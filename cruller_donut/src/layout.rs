// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie layout: values to angle spans.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::TAU;

/// One wedge's angular extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSpan {
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

impl AngleSpan {
    /// Creates a span.
    pub const fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
        }
    }

    /// Returns the bisecting angle.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Returns whether `angle` falls inside the span, tolerating either
    /// ordering of the endpoints.
    pub fn contains(&self, angle: f64) -> bool {
        let lo = self.start_angle.min(self.end_angle);
        let hi = self.start_angle.max(self.end_angle);
        (lo..hi).contains(&angle)
    }
}

/// Lays out values as angle spans around the full circle.
///
/// Each value receives a span of `value · k + pad_angle` radians where
/// `k = (2π - n · pad_angle) / Σ values`, so span sizes net of padding are
/// proportional to the values. The result is index-aligned with the input:
/// `layout(values)[i]` is the span for `values[i]` whether or not sorting is
/// enabled — sorting only changes where each span sits on the circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayoutSpec {
    /// Angular gap reserved per wedge, in radians.
    pub pad_angle: f64,
    /// Whether spans are placed in descending-value order (ties keep input
    /// order). When false, spans are placed in input order.
    pub sort_descending: bool,
}

impl PieLayoutSpec {
    /// Creates a layout with no padding, placing spans in descending-value
    /// order.
    pub const fn new() -> Self {
        Self {
            pad_angle: 0.0,
            sort_descending: true,
        }
    }

    /// Sets the per-wedge pad angle.
    pub const fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Enables or disables descending-value placement.
    pub const fn with_sort_descending(mut self, sort_descending: bool) -> Self {
        self.sort_descending = sort_descending;
        self
    }

    /// Computes spans for `values`, in stable input-index order.
    ///
    /// Negative values occupy only their pad. An all-zero input degenerates
    /// to pad-sized spans.
    pub fn layout(&self, values: &[f64]) -> Vec<AngleSpan> {
        let n = values.len();
        if n == 0 {
            return Vec::new();
        }

        let pad = self.pad_angle.max(0.0).min(TAU / n as f64);
        let sum: f64 = values.iter().map(|v| v.max(0.0)).sum();
        let k = if sum > 0.0 {
            (TAU - pad * n as f64) / sum
        } else {
            0.0
        };

        let mut order: Vec<usize> = (0..n).collect();
        if self.sort_descending {
            order.sort_by(|&a, &b| {
                values[b]
                    .partial_cmp(&values[a])
                    .unwrap_or(core::cmp::Ordering::Equal)
                    .then(a.cmp(&b))
            });
        }

        let mut spans = alloc::vec![AngleSpan::new(0.0, 0.0); n];
        let mut a = 0.0;
        for &idx in &order {
            let span = values[idx].max(0.0) * k + pad;
            spans[idx] = AngleSpan::new(a, a + span);
            a += span;
        }
        spans
    }
}

impl Default for PieLayoutSpec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn spans_are_proportional_net_of_padding() {
        let values = [100.0, 50.0, 200.0, 100.0];
        let spans = PieLayoutSpec::new()
            .with_pad_angle(0.3)
            .with_sort_descending(false)
            .layout(&values);
        assert_eq!(spans.len(), 4);

        let k = (TAU - 4.0 * 0.3) / 450.0;
        for (span, v) in spans.iter().zip(values) {
            let net = (span.end_angle - span.start_angle) - 0.3;
            assert!((net - v * k).abs() < EPS, "net {net} for value {v}");
        }

        let total: f64 = spans.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((total - TAU).abs() < EPS);
    }

    #[test]
    fn unsorted_layout_is_contiguous_in_input_order() {
        let spans = PieLayoutSpec::new()
            .with_sort_descending(false)
            .layout(&[1.0, 2.0, 3.0]);
        assert_eq!(spans[0].start_angle, 0.0);
        for pair in spans.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < EPS);
        }
        assert!((spans[2].end_angle - TAU).abs() < EPS);
    }

    #[test]
    fn sorted_layout_places_largest_first_but_keeps_index_order() {
        let values = [1.0, 3.0, 2.0];
        let spans = PieLayoutSpec::new().layout(&values);
        // Index correspondence: spans[1] belongs to the value 3.0 and is the
        // widest; it also starts the circle.
        assert_eq!(spans[1].start_angle, 0.0);
        let width = |s: &AngleSpan| s.end_angle - s.start_angle;
        assert!(width(&spans[1]) > width(&spans[2]));
        assert!(width(&spans[2]) > width(&spans[0]));
    }

    #[test]
    fn zero_sum_degenerates_to_pad_spans() {
        let spans = PieLayoutSpec::new()
            .with_pad_angle(0.1)
            .with_sort_descending(false)
            .layout(&[0.0, 0.0]);
        for span in &spans {
            assert!((span.end_angle - span.start_angle - 0.1).abs() < EPS);
        }
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(PieLayoutSpec::new().layout(&[]).is_empty());
    }

    #[test]
    fn span_contains_tolerates_reversed_endpoints() {
        let span = AngleSpan::new(2.0, 1.0);
        assert!(span.contains(1.5));
        assert!(!span.contains(2.5));
        assert!((span.mid_angle() - 1.5).abs() < EPS);
    }
}
