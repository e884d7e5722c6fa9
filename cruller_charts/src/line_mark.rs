// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use cruller_core::{Mark, MarkId, PathMark, SERIES_STROKE};
use kurbo::{BezPath, Point};
use peniko::{Brush, Color};

use crate::axis::StrokeStyle;
use crate::scale::ScaleLinear;

/// How a line enters the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnter {
    /// The full line is shown immediately.
    None,
    /// The line draws itself starting from its first point.
    DrawFromLeft,
    /// The line draws itself starting from its last point.
    DrawFromRight,
}

/// A polyline mark derived from data points and two scales.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Data points, in draw order.
    pub points: Vec<(f64, f64)>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Stroke style for the line.
    pub stroke: StrokeStyle,
    /// Enter behavior, driven by the `progress` argument of
    /// [`LineMarkSpec::marks`].
    pub enter: LineEnter,
    /// Rendering order hint.
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line mark spec with the default sky-blue stroke at
    /// width 1.5.
    pub fn new(
        id: MarkId,
        points: Vec<(f64, f64)>,
        x_scale: ScaleLinear,
        y_scale: ScaleLinear,
    ) -> Self {
        Self {
            id,
            points,
            x_scale,
            y_scale,
            stroke: StrokeStyle::solid(Color::from_rgb8(0x38, 0xbd, 0xf8), 1.5),
            enter: LineEnter::None,
            z_index: SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the enter behavior.
    pub fn with_enter(mut self, enter: LineEnter) -> Self {
        self.enter = enter;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    fn mapped(&self) -> Vec<Point> {
        self.points
            .iter()
            .map(|&(x, y)| Point::new(self.x_scale.map(x), self.y_scale.map(y)))
            .collect()
    }

    /// Generates marks for this line.
    ///
    /// `progress` in `[0, 1]` is the enter draw fraction, measured by arc
    /// length along the polyline; it is ignored when `enter` is
    /// [`LineEnter::None`]. An empty or fully-undrawn line generates no
    /// marks.
    pub fn marks(&self, progress: f64) -> Vec<Mark> {
        let mut pts = self.mapped();
        if matches!(self.enter, LineEnter::DrawFromRight) {
            pts.reverse();
        }
        let pts = match self.enter {
            LineEnter::None => pts,
            _ => prefix_by_length(&pts, progress.clamp(0.0, 1.0)),
        };
        if pts.len() < 2 {
            return Vec::new();
        }

        let mut path = BezPath::new();
        path.move_to(pts[0]);
        for &p in &pts[1..] {
            path.line_to(p);
        }

        alloc::vec![Mark::path(
            self.id,
            self.z_index,
            PathMark {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: self.stroke.brush.clone(),
                stroke_width: self.stroke.stroke_width,
            },
        )]
    }
}

/// Returns the prefix of `pts` covering `t` of its total arc length, with an
/// interpolated final point.
fn prefix_by_length(pts: &[Point], t: f64) -> Vec<Point> {
    if pts.len() < 2 || t <= 0.0 {
        return Vec::new();
    }
    if t >= 1.0 {
        return pts.to_vec();
    }

    let total: f64 = pts.windows(2).map(|w| (w[1] - w[0]).hypot()).sum();
    if total == 0.0 {
        return pts.to_vec();
    }
    let budget = total * t;

    let mut out = alloc::vec![pts[0]];
    let mut used = 0.0;
    for w in pts.windows(2) {
        let seg = (w[1] - w[0]).hypot();
        if used + seg >= budget {
            let remain = budget - used;
            let frac = if seg == 0.0 { 0.0 } else { remain / seg };
            out.push(w[0] + (w[1] - w[0]) * frac);
            return out;
        }
        used += seg;
        out.push(w[1]);
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use cruller_core::MarkPayload;
    use kurbo::Shape;

    use super::*;

    fn spec(enter: LineEnter) -> LineMarkSpec {
        let x = ScaleLinear::new((0.0, 10.0), (0.0, 100.0));
        let y = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        LineMarkSpec::new(
            MarkId::from_raw(1),
            alloc::vec![(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)],
            x,
            y,
        )
        .with_enter(enter)
    }

    fn path_bounds(marks: &[Mark]) -> kurbo::Rect {
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected a path mark");
        };
        p.path.bounding_box()
    }

    #[test]
    fn full_line_spans_the_mapped_points() {
        let marks = spec(LineEnter::None).marks(0.0);
        assert_eq!(marks.len(), 1);
        let b = path_bounds(&marks);
        assert_eq!((b.x0, b.x1), (0.0, 100.0));
        assert_eq!((b.y0, b.y1), (50.0, 100.0));
    }

    #[test]
    fn draw_from_left_half_reaches_the_middle() {
        let marks = spec(LineEnter::DrawFromLeft).marks(0.5);
        let b = path_bounds(&marks);
        // Half the arc length of the symmetric tent ends at its apex.
        assert!((b.x1 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn draw_from_right_grows_from_the_last_point() {
        let marks = spec(LineEnter::DrawFromRight).marks(0.25);
        let b = path_bounds(&marks);
        assert!(b.x0 > 50.0);
        assert_eq!(b.x1, 100.0);
    }

    #[test]
    fn undrawn_enter_line_emits_nothing() {
        assert!(spec(LineEnter::DrawFromLeft).marks(0.0).is_empty());
        let two = LineMarkSpec::new(
            MarkId::from_raw(2),
            Vec::new(),
            ScaleLinear::new((0.0, 1.0), (0.0, 1.0)),
            ScaleLinear::new((0.0, 1.0), (0.0, 1.0)),
        );
        assert!(two.marks(1.0).is_empty());
    }

    #[test]
    fn full_progress_matches_the_static_line() {
        let full = spec(LineEnter::None).marks(0.0);
        let drawn = spec(LineEnter::DrawFromLeft).marks(1.0);
        assert_eq!(path_bounds(&full), path_bounds(&drawn));
    }
}
