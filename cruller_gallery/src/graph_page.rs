// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Function-graph demo page.
//!
//! Plots `y = f(x)` over a fixed window with math-style axes crossing at the
//! origin. The function comes in as a plain closure; parsing equation text
//! is an upstream concern. The curve draws itself in from the left on mount.

use cruller_charts::{AxisSpec, GridStyle, LineEnter, LineMarkSpec, PlotFrame, PlotPadding,
    ScaleLinear};
use cruller_core::{Frame, MarkId};
use cruller_motion::{Spring, SpringConfig};

/// The plotted x and y window.
const WINDOW: (f64, f64) = (-10.0, 10.0);

/// Sampling step along x.
const SAMPLE_STEP: f64 = 0.1;

/// The function-graph page.
pub(crate) struct GraphPage {
    function: Box<dyn Fn(f64) -> f64>,
    points: Vec<(f64, f64)>,
    draw: Spring,
    frame: PlotFrame,
    x_scale: ScaleLinear,
    y_scale: ScaleLinear,
}

impl core::fmt::Debug for GraphPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GraphPage")
            .field("points", &self.points.len())
            .field("draw", &self.draw)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl GraphPage {
    pub(crate) fn new(function: impl Fn(f64) -> f64 + 'static) -> Self {
        let frame = PlotFrame::new(640.0, 400.0).with_padding(PlotPadding::uniform(10.0));
        let x_scale = ScaleLinear::new(WINDOW, frame.x_range());
        let y_scale = ScaleLinear::new(WINDOW, frame.y_range());
        let mut draw = Spring::new(0.0, SpringConfig::new().with_damping(20.0));
        draw.set_target(1.0);
        let mut page = Self {
            function: Box::new(function),
            points: Vec::new(),
            draw,
            frame,
            x_scale,
            y_scale,
        };
        page.resample();
        page
    }

    fn resample(&mut self) {
        self.points.clear();
        let mut x = WINDOW.0;
        while x <= WINDOW.1 + 1e-9 {
            self.points.push((x, (self.function)(x)));
            x += SAMPLE_STEP;
        }
    }

    /// Replaces the plotted function (e.g. after the user typed a new
    /// equation) and resamples the curve.
    pub(crate) fn set_function(&mut self, function: impl Fn(f64) -> f64 + 'static) {
        self.function = Box::new(function);
        self.resample();
    }

    /// Advances the draw-in animation; returns whether it is still running.
    pub(crate) fn tick(&mut self, dt: f64) -> bool {
        self.draw.tick(dt);
        !self.draw.is_settled()
    }

    /// Returns the draw-in progress in `[0, 1]`.
    pub(crate) fn draw_progress(&self) -> f64 {
        self.draw.value().clamp(0.0, 1.0)
    }

    pub(crate) fn frame(&self) -> Frame {
        let mut frame = Frame::new();
        frame.extend(
            AxisSpec::horizontal_at_zero(0x100, 1.0)
                .with_grid(GridStyle::default())
                .marks(&self.x_scale, &self.y_scale, &self.frame),
        );
        frame.extend(
            AxisSpec::vertical_at_zero(0x200, 1.0)
                .with_grid(GridStyle::default())
                .marks(&self.x_scale, &self.y_scale, &self.frame),
        );
        frame.extend(
            LineMarkSpec::new(
                MarkId::from_raw(0x300),
                self.points.clone(),
                self.x_scale,
                self.y_scale,
            )
            .with_enter(LineEnter::DrawFromLeft)
            .marks(self.draw_progress()),
        );
        frame
    }
}

#[cfg(test)]
mod tests {
    use cruller_core::MarkPayload;
    use kurbo::Shape;

    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn line_bounds(frame: &Frame) -> Option<kurbo::Rect> {
        frame
            .marks()
            .iter()
            .filter(|m| m.id == MarkId::from_raw(0x300))
            .find_map(|m| match &m.payload {
                MarkPayload::Path(p) => Some(p.path.bounding_box()),
                _ => None,
            })
    }

    #[test]
    fn curve_draws_in_from_the_left() {
        let mut page = GraphPage::new(|x| x);
        // Nothing drawn before the first tick.
        assert!(line_bounds(&page.frame()).is_none());

        for _ in 0..6 {
            page.tick(FRAME);
        }
        let partial = line_bounds(&page.frame()).expect("curve partially drawn");

        for _ in 0..600 {
            page.tick(FRAME);
        }
        assert!(!page.tick(FRAME));
        let full = line_bounds(&page.frame()).expect("curve fully drawn");
        assert!(partial.x1 < full.x1);
        // The identity line spans the whole plot area.
        assert!((full.x0 - 10.0).abs() < 1e-6);
        assert!((full.x1 - 630.0).abs() < 1e-6);
    }

    #[test]
    fn replacing_the_function_resamples() {
        let mut page = GraphPage::new(|x| x);
        for _ in 0..600 {
            page.tick(FRAME);
        }
        let linear = line_bounds(&page.frame()).expect("line drawn");

        page.set_function(|x: f64| x.powi(2));
        let squared = line_bounds(&page.frame()).expect("parabola drawn");
        // The parabola leaves the bottom half of the window.
        assert!(squared.y1 < linear.y1);
    }

    #[test]
    fn axes_cross_at_the_origin() {
        let page = GraphPage::new(|x| x);
        let frame = page.frame();
        let x_mid = page.x_scale.map(0.0);
        let y_mid = page.y_scale.map(0.0);
        // Both domain lines pass through the origin's screen position.
        let hits = frame
            .marks()
            .iter()
            .filter(|m| m.z_index == cruller_core::AXIS_RULES)
            .filter_map(|m| match &m.payload {
                MarkPayload::Path(p) => Some(p.path.bounding_box()),
                _ => None,
            })
            .filter(|b| {
                (b.y0 == b.y1 && (b.y0 - y_mid).abs() < 1e-9 && b.width() > 600.0)
                    || (b.x0 == b.x1 && (b.x0 - x_mid).abs() < 1e-9 && b.height() > 380.0)
            })
            .count();
        assert_eq!(hits, 2);
    }
}
