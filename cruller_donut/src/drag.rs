// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-reorder angle tracking.

use crate::layout::AngleSpan;

/// Offsets a wedge's span so its mid-angle tracks the pointer.
///
/// The rendered wedge keeps its width; only its position follows the drag.
pub fn drag_offset(span: AngleSpan, pointer_angle: f64) -> AngleSpan {
    let diff = span.mid_angle() - pointer_angle;
    AngleSpan::new(span.start_angle - diff, span.end_angle - diff)
}

/// Edge-triggered crossing detection for drag-to-reorder.
///
/// Each pointer sample is compared against the *previous* sample relative to
/// every wedge's mid-angle; a swap triggers only when the dragged angle
/// crosses a mid-angle between the two samples. Hovering near a boundary
/// therefore cannot thrash.
///
/// Known limitation, inherited from the behavior this models: because only
/// the immediately preceding sample is consulted, a pointer moving fast
/// enough to jump clear over a neighbor's mid-angle *and back* between
/// samples can miss a crossing pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    last_angle: Option<f64>,
}

impl DragTracker {
    /// Creates an idle tracker.
    pub const fn new() -> Self {
        Self { last_angle: None }
    }

    /// Feeds one pointer-angle sample; returns the index of the first
    /// mid-angle crossed since the previous sample, if any.
    ///
    /// The first sample after [`DragTracker::reset`] (or construction) never
    /// reports a crossing — there is nothing to compare against yet.
    pub fn crossing(&mut self, angle: f64, mid_angles: &[f64]) -> Option<usize> {
        let last = self.last_angle.replace(angle)?;
        mid_angles
            .iter()
            .position(|&mid| (angle < mid) != (last < mid))
    }

    /// Clears the tracked angle. Call on drag end.
    pub fn reset(&mut self) {
        self.last_angle = None;
    }

    /// Returns whether a sample has been observed since the last reset.
    pub fn is_tracking(&self) -> bool {
        self.last_angle.is_some()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn crossing_triggers_once_at_the_crossing_sample() {
        // Mid-angles of three wedges; the wedge at index 0 is being dragged.
        let mids = [0.5, 1.5, 2.5];
        let mut tracker = DragTracker::new();

        // First sample: nothing to compare against.
        assert_eq!(tracker.crossing(0.4, &mids), None);
        // 0.4 -> 0.6 crosses the dragged wedge's own mid (a self-swap the
        // page treats as a no-op).
        assert_eq!(tracker.crossing(0.6, &mids), Some(0));
        // 0.6 -> 1.6 crosses the neighbor at 1.5: exactly one swap, here.
        assert_eq!(tracker.crossing(1.6, &mids), Some(1));
        // Staying past 1.5 must not re-trigger.
        assert_eq!(tracker.crossing(1.7, &mids), None);
        assert_eq!(tracker.crossing(1.6, &mids), None);
    }

    #[test]
    fn hovering_at_a_boundary_does_not_thrash() {
        let mids = [1.0];
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.crossing(0.99, &mids), None);
        assert_eq!(tracker.crossing(0.999, &mids), None);
        assert_eq!(tracker.crossing(0.99, &mids), None);
        // Only an actual crossing reports.
        assert_eq!(tracker.crossing(1.001, &mids), Some(0));
        assert_eq!(tracker.crossing(0.999, &mids), Some(0));
    }

    #[test]
    fn reset_forgets_the_previous_sample() {
        let mids = [1.0];
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.crossing(0.9, &mids), None);
        tracker.reset();
        assert!(!tracker.is_tracking());
        // Would have been a crossing without the reset.
        assert_eq!(tracker.crossing(1.1, &mids), None);
    }

    #[test]
    fn drag_offset_keeps_the_span_width_and_centers_on_the_pointer() {
        let span = AngleSpan::new(1.0, 2.0);
        let dragged = drag_offset(span, 3.0);
        assert!((dragged.mid_angle() - 3.0).abs() < 1e-12);
        assert!(
            ((dragged.end_angle - dragged.start_angle) - (span.end_angle - span.start_angle))
                .abs()
                < 1e-12
        );
    }
}
