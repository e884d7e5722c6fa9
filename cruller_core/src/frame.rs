// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-render-pass mark collection.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use crate::mark::Mark;

/// The flat list of marks one render pass produced.
///
/// Animated components re-derive geometry every tick, so a frame is built
/// fresh each time rather than diffed against the previous one. Renderers
/// should iterate [`Frame::sorted`] for deterministic paint order.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    marks: Vec<Mark>,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mark.
    pub fn push(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    /// Appends all marks from an iterator.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    /// Returns the marks in insertion order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns the number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns whether the frame is empty.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Consumes the frame, returning marks sorted by `(z_index, id)`.
    pub fn sorted(mut self) -> Vec<Mark> {
        self.marks.sort_by_key(|m| (m.z_index, m.id));
        self.marks
    }

    /// Unions the geometry bounds of all marks that have them.
    pub fn bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for mark in &self.marks {
            let Some(b) = mark.payload.bounds() else {
                continue;
            };
            rect = Some(match rect {
                None => b,
                Some(r) => Rect::new(
                    r.x0.min(b.x0),
                    r.y0.min(b.y0),
                    r.x1.max(b.x1),
                    r.y1.max(b.y1),
                ),
            });
        }
        rect
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{Rect, Shape};
    use peniko::color::palette::css;

    use crate::mark::{MarkId, PathMark};

    use super::*;

    fn rect_mark(id: u64, z: i32, rect: Rect) -> Mark {
        Mark::path(
            MarkId::from_raw(id),
            z,
            PathMark {
                path: rect.to_path(0.1),
                fill: css::BLACK.into(),
                stroke: css::BLACK.into(),
                stroke_width: 0.0,
            },
        )
    }

    #[test]
    fn sorted_orders_by_z_then_id() {
        let mut frame = Frame::new();
        frame.push(rect_mark(2, 10, Rect::new(0.0, 0.0, 1.0, 1.0)));
        frame.push(rect_mark(1, 10, Rect::new(0.0, 0.0, 1.0, 1.0)));
        frame.push(rect_mark(3, -5, Rect::new(0.0, 0.0, 1.0, 1.0)));

        let ids: Vec<u64> = frame.sorted().iter().map(|m| m.id.to_raw()).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn bounds_union_spans_all_paths() {
        let mut frame = Frame::new();
        frame.push(rect_mark(1, 0, Rect::new(0.0, 0.0, 10.0, 10.0)));
        frame.push(rect_mark(2, 0, Rect::new(40.0, -5.0, 50.0, 8.0)));

        let b = frame.bounds().expect("two path marks");
        assert_eq!(b, Rect::new(0.0, -5.0, 50.0, 10.0));
    }

    #[test]
    fn empty_frame_has_no_bounds() {
        assert!(Frame::new().bounds().is_none());
    }
}
