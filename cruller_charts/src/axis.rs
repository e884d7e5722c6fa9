// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a single spec with an orient: pinned to a plot edge, or — for
//! math-style graphs — crossing the plot at data zero. Ticks are placed at a
//! fixed data-unit spacing, matching how the graph pages iterate their
//! domains.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use cruller_core::{
    AXIS_LABELS, AXIS_RULES, GRID_LINES, Mark, MarkId, PathMark, TextAnchor, TextBaseline,
    TextMark,
};
use kurbo::BezPath;
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::plot::PlotFrame;
use crate::scale::ScaleLinear;

/// A paint + width pair for stroked paths (domain lines, ticks, gridlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            rule,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(0.15)),
                stroke_width: 1.0,
            },
        }
    }
}

/// Axis placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis along the top plot edge.
    Top,
    /// A horizontal axis along the bottom plot edge.
    Bottom,
    /// A vertical axis along the left plot edge.
    Left,
    /// A vertical axis along the right plot edge.
    Right,
    /// A horizontal axis crossing the plot where y = 0.
    HorizontalAtZero,
    /// A vertical axis crossing the plot where x = 0.
    VerticalAtZero,
}

/// Distance from a plot edge to horizontal-axis tick labels.
const LABEL_OFFSET_H: f64 = 13.0;

/// Distance from a plot edge to vertical-axis tick labels.
const LABEL_OFFSET_V: f64 = 8.0;

fn push_line(
    marks: &mut Vec<Mark>,
    next_id: &mut u64,
    z: i32,
    style: &StrokeStyle,
    p0: (f64, f64),
    p1: (f64, f64),
) {
    let mut path = BezPath::new();
    path.move_to(p0);
    path.line_to(p1);
    let id = MarkId::from_raw(*next_id);
    *next_id += 1;
    marks.push(Mark::path(
        id,
        z,
        PathMark {
            path,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: style.brush.clone(),
            stroke_width: style.stroke_width,
        },
    ));
}

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from
    /// this base.
    pub id_base: u64,
    /// Axis placement.
    pub orient: AxisOrient,
    /// Distance between ticks, in data units.
    pub tick_spacing: f64,
    /// Tick line length in scene coordinates. At-zero axes center it on the
    /// domain line.
    pub tick_size: f64,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the axis domain line.
    pub show_domain: bool,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional gridline styling. If `Some`, one gridline per tick spans the
    /// whole surface.
    pub grid: Option<GridStyle>,
    /// Optional tick label formatter. The default rounds to two decimals.
    pub tick_formatter: Option<Arc<dyn Fn(f64) -> String>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("orient", &self.orient)
            .field("tick_spacing", &self.tick_spacing)
            .field("tick_size", &self.tick_size)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("style", &self.style)
            .field("grid", &self.grid)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification.
    ///
    /// At-zero orients default to no labels (the graph pages draw bare
    /// crosshair axes); edge orients default to labeled ticks.
    pub fn new(id_base: u64, orient: AxisOrient, tick_spacing: f64) -> Self {
        let labels = !matches!(
            orient,
            AxisOrient::HorizontalAtZero | AxisOrient::VerticalAtZero
        );
        Self {
            id_base,
            orient,
            tick_spacing,
            tick_size: 6.0,
            labels,
            show_domain: true,
            style: AxisStyle::default(),
            grid: None,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, tick_spacing: f64) -> Self {
        Self::new(id_base, AxisOrient::Bottom, tick_spacing)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, tick_spacing: f64) -> Self {
        Self::new(id_base, AxisOrient::Left, tick_spacing)
    }

    /// Convenience constructor for a horizontal axis crossing at y = 0.
    pub fn horizontal_at_zero(id_base: u64, tick_spacing: f64) -> Self {
        Self::new(id_base, AxisOrient::HorizontalAtZero, tick_spacing)
    }

    /// Convenience constructor for a vertical axis crossing at x = 0.
    pub fn vertical_at_zero(id_base: u64, tick_spacing: f64) -> Self {
        Self::new(id_base, AxisOrient::VerticalAtZero, tick_spacing)
    }

    /// Sets the tick size.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enables or disables tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enables or disables the domain line.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enables gridlines using the provided style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Sets a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Returns tick values covering the scale's domain at the configured
    /// spacing.
    ///
    /// # Panics
    ///
    /// Panics if `tick_spacing` is not a positive finite number — that is a
    /// wiring mistake, not a data condition.
    pub fn ticks(&self, scale: &ScaleLinear) -> Vec<f64> {
        assert!(
            self.tick_spacing.is_finite() && self.tick_spacing > 0.0,
            "axis tick_spacing must be positive"
        );
        let min = scale.domain_min().min(scale.domain_max());
        let max = scale.domain_min().max(scale.domain_max());
        let mut ticks = Vec::new();
        let mut t = min;
        while t <= max + 1e-9 {
            ticks.push(t);
            t += self.tick_spacing;
        }
        ticks
    }

    fn is_horizontal(&self) -> bool {
        matches!(
            self.orient,
            AxisOrient::Top | AxisOrient::Bottom | AxisOrient::HorizontalAtZero
        )
    }

    fn format_tick(&self, value: f64) -> String {
        match &self.tick_formatter {
            Some(f) => f(value),
            None => ((value * 100.0).round() / 100.0).to_string(),
        }
    }

    /// Generates marks for this axis.
    ///
    /// Horizontal orients tick along `x_scale`, vertical ones along
    /// `y_scale`; the other scale positions at-zero axes.
    pub fn marks(
        &self,
        x_scale: &ScaleLinear,
        y_scale: &ScaleLinear,
        frame: &PlotFrame,
    ) -> Vec<Mark> {
        let mut marks = Vec::new();
        let mut next_id = self.id_base;

        let (x0, x1) = frame.x_range();
        let (y_bottom, y_top) = frame.y_range();
        let scale = if self.is_horizontal() { x_scale } else { y_scale };
        let ticks = self.ticks(scale);

        // Gridlines span the whole surface, behind everything else.
        if let Some(grid) = &self.grid {
            for &tick in &ticks {
                let p = scale.map(tick);
                if self.is_horizontal() {
                    push_line(
                        &mut marks,
                        &mut next_id,
                        GRID_LINES,
                        &grid.stroke,
                        (p, 0.0),
                        (p, frame.height),
                    );
                } else {
                    push_line(
                        &mut marks,
                        &mut next_id,
                        GRID_LINES,
                        &grid.stroke,
                        (0.0, p),
                        (frame.width, p),
                    );
                }
            }
        }

        let rule = self.style.rule.clone();
        match self.orient {
            AxisOrient::Top | AxisOrient::Bottom | AxisOrient::HorizontalAtZero => {
                let (base, full_span) = match self.orient {
                    AxisOrient::Top => (y_top, false),
                    AxisOrient::Bottom => (y_bottom, false),
                    _ => (y_scale.map(0.0), true),
                };
                if self.show_domain {
                    let (dx0, dx1) = if full_span { (0.0, frame.width) } else { (x0, x1) };
                    push_line(
                        &mut marks,
                        &mut next_id,
                        AXIS_RULES,
                        &rule,
                        (dx0, base),
                        (dx1, base),
                    );
                }
                for &tick in &ticks {
                    let x = x_scale.map(tick);
                    let (t0, t1) = match self.orient {
                        AxisOrient::Top => (base, base - self.tick_size),
                        AxisOrient::Bottom => (base, base + self.tick_size),
                        _ => (base - self.tick_size / 2.0, base + self.tick_size / 2.0),
                    };
                    push_line(&mut marks, &mut next_id, AXIS_RULES, &rule, (x, t0), (x, t1));
                    if self.labels {
                        let y = if self.orient == AxisOrient::Top {
                            base - LABEL_OFFSET_H
                        } else {
                            base + LABEL_OFFSET_H
                        };
                        let id = MarkId::from_raw(next_id);
                        next_id += 1;
                        marks.push(Mark::text(
                            id,
                            AXIS_LABELS,
                            TextMark {
                                pos: kurbo::Point::new(x, y),
                                text: self.format_tick(tick),
                                font_size: self.style.label_font_size,
                                angle: 0.0,
                                anchor: TextAnchor::Middle,
                                baseline: TextBaseline::Middle,
                                fill: self.style.label_fill.clone(),
                            },
                        ));
                    }
                }
            }
            AxisOrient::Left | AxisOrient::Right | AxisOrient::VerticalAtZero => {
                let (base, full_span) = match self.orient {
                    AxisOrient::Left => (x0, false),
                    AxisOrient::Right => (x1, false),
                    _ => (x_scale.map(0.0), true),
                };
                if self.show_domain {
                    let (dy0, dy1) = if full_span {
                        (0.0, frame.height)
                    } else {
                        (y_bottom, y_top)
                    };
                    push_line(
                        &mut marks,
                        &mut next_id,
                        AXIS_RULES,
                        &rule,
                        (base, dy0),
                        (base, dy1),
                    );
                }
                for &tick in &ticks {
                    let y = y_scale.map(tick);
                    let (t0, t1) = match self.orient {
                        AxisOrient::Left => (base, base - self.tick_size),
                        AxisOrient::Right => (base, base + self.tick_size),
                        _ => (base - self.tick_size / 2.0, base + self.tick_size / 2.0),
                    };
                    push_line(&mut marks, &mut next_id, AXIS_RULES, &rule, (t0, y), (t1, y));
                    if self.labels {
                        let (x, anchor) = if self.orient == AxisOrient::Right {
                            (base + LABEL_OFFSET_V, TextAnchor::Start)
                        } else {
                            (base - LABEL_OFFSET_V, TextAnchor::End)
                        };
                        let id = MarkId::from_raw(next_id);
                        next_id += 1;
                        marks.push(Mark::text(
                            id,
                            AXIS_LABELS,
                            TextMark {
                                pos: kurbo::Point::new(x, y),
                                text: self.format_tick(tick),
                                font_size: self.style.label_font_size,
                                angle: 0.0,
                                anchor,
                                baseline: TextBaseline::Middle,
                                fill: self.style.label_fill.clone(),
                            },
                        ));
                    }
                }
            }
        }

        marks
    }
}
