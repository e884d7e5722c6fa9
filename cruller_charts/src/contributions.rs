// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contributions (activity calendar) chart.
//!
//! Packages the scales, remainder-trimmed tick arrays, line path, and
//! hover/pin interaction of the contributions page. Days are numeric (index
//! or epoch offset) with a caller-supplied label per day; fetching the data
//! is the caller's problem.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use cruller_core::{
    HOVER_RULES, Mark, MarkId, OVERLAY, OVERLAY_TEXT, PathMark, TextAnchor, TextBaseline, TextMark,
};
use hashbrown::HashMap;
use kurbo::{BezPath, Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::axis::StrokeStyle;
use crate::line_mark::LineMarkSpec;
use crate::plot::{PlotFrame, PlotPadding};
use crate::scale::{ScaleLinear, infer_domain};

/// Number of x-axis ticks.
const X_TICK_COUNT: usize = 20;

/// Number of y-axis ticks.
const Y_TICK_COUNT: usize = 10;

/// Half-size of the pinned info card.
const CARD_HALF: f64 = 55.0;

/// One day of activity.
#[derive(Clone, Debug, PartialEq)]
pub struct ContributionDay {
    /// Day position on the x axis (day index or epoch offset, whole-valued).
    pub day: f64,
    /// Number of contributions that day.
    pub count: f64,
    /// Display label for the day (typically a date string).
    pub label: String,
}

impl ContributionDay {
    /// Creates a day entry.
    pub fn new(day: f64, count: f64, label: impl Into<String>) -> Self {
        Self {
            day,
            count,
            label: label.into(),
        }
    }
}

/// What the pointer is over, resolved to the nearest whole day.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverInfo {
    /// Scene x of the snapped day.
    pub x_pos: f64,
    /// The snapped day value.
    pub day: f64,
    /// The day's contribution count (0 when the day has no entry).
    pub count: f64,
    /// The day's label.
    pub label: String,
}

/// The hover interaction state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HoverState {
    /// Pointer outside the data region.
    #[default]
    Idle,
    /// Pointer over a day; follows further pointer motion.
    Hover(HoverInfo),
    /// A click pinned the info; pointer motion is ignored until closed.
    Pinned(HoverInfo),
}

/// Drives [`HoverState`] from pointer events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContributionsHover {
    state: HoverState,
}

impl ContributionsHover {
    /// Creates an idle hover machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// Feeds a pointer position. Ignored while pinned.
    pub fn pointer_move(&mut self, chart: &ContributionsChart, x: f64, y: f64) {
        if matches!(self.state, HoverState::Pinned(_)) {
            return;
        }
        self.state = match chart.hover_at(x, y) {
            Some(info) => HoverState::Hover(info),
            None => HoverState::Idle,
        };
    }

    /// Pins the currently hovered day, if any.
    pub fn click(&mut self) {
        if let HoverState::Hover(info) = &self.state {
            self.state = HoverState::Pinned(info.clone());
        }
    }

    /// Closes a pinned card, returning to idle.
    pub fn close(&mut self) {
        if matches!(self.state, HoverState::Pinned(_)) {
            self.state = HoverState::Idle;
        }
    }
}

/// The contributions chart: data, scales, ticks, and mark generation.
#[derive(Clone)]
pub struct ContributionsChart {
    days: Vec<ContributionDay>,
    frame: PlotFrame,
    x_scale: ScaleLinear,
    y_scale: ScaleLinear,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    by_day: HashMap<i64, usize>,
    x_tick_formatter: Option<Arc<dyn Fn(f64) -> String>>,
}

impl core::fmt::Debug for ContributionsChart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContributionsChart")
            .field("days", &self.days.len())
            .field("frame", &self.frame)
            .field("x_bounds", &self.x_bounds)
            .field("y_bounds", &self.y_bounds)
            .field("x_tick_formatter", &self.x_tick_formatter.is_some())
            .finish_non_exhaustive()
    }
}

impl ContributionsChart {
    /// Creates a chart over `days` on a surface of the given size.
    ///
    /// Margins are 20 top, 20 right, 30 bottom, 40 left.
    ///
    /// # Panics
    ///
    /// Panics when `days` is empty or contains no finite values — the page
    /// must not construct a chart before its data resolves.
    pub fn new(days: Vec<ContributionDay>, width: f64, height: f64) -> Self {
        assert!(!days.is_empty(), "contributions chart requires data");
        let frame = PlotFrame::new(width, height)
            .with_padding(PlotPadding::new(20.0, 20.0, 30.0, 40.0));
        let x_bounds =
            infer_domain(days.iter().map(|d| d.day)).expect("finite day values required");
        let y_bounds =
            infer_domain(days.iter().map(|d| d.count)).expect("finite count values required");
        let x_scale = ScaleLinear::new(x_bounds, frame.x_range());
        let y_scale = ScaleLinear::new(y_bounds, frame.y_range());

        let mut by_day = HashMap::with_capacity(days.len());
        for (i, d) in days.iter().enumerate() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "day values are whole-valued indexes or epoch offsets"
            )]
            by_day.insert(d.day.round() as i64, i);
        }

        Self {
            days,
            frame,
            x_scale,
            y_scale,
            x_bounds,
            y_bounds,
            by_day,
            x_tick_formatter: None,
        }
    }

    /// Sets the x tick label formatter (e.g. day number to date string).
    pub fn with_x_tick_formatter(mut self, f: impl Fn(f64) -> String + 'static) -> Self {
        self.x_tick_formatter = Some(Arc::new(f));
        self
    }

    /// Returns the total contribution count.
    pub fn total_contributions(&self) -> f64 {
        self.days.iter().map(|d| d.count).sum()
    }

    /// Returns the x scale.
    pub fn x_scale(&self) -> &ScaleLinear {
        &self.x_scale
    }

    /// Returns the y scale.
    pub fn y_scale(&self) -> &ScaleLinear {
        &self.y_scale
    }

    /// Returns evenly spaced x ticks whose span divides the domain exactly,
    /// dropping the remainder at the high end.
    pub fn x_ticks(&self) -> Vec<f64> {
        trimmed_ticks(self.x_bounds, X_TICK_COUNT)
    }

    /// Returns evenly spaced y ticks, remainder-trimmed like the x ticks.
    pub fn y_ticks(&self) -> Vec<f64> {
        trimmed_ticks(self.y_bounds, Y_TICK_COUNT)
    }

    /// Resolves a pointer position to the day under it.
    ///
    /// The pointer must be strictly inside the data region (the low x edge
    /// excluded); the day is snapped downward to a whole day and the scene x
    /// recomputed from the snapped value. Days without an entry report
    /// count 0.
    pub fn hover_at(&self, x: f64, y: f64) -> Option<HoverInfo> {
        let xc = self.x_scale.invert(x);
        let yc = self.y_scale.invert(y);
        let (x0, x1) = self.x_bounds;
        let (y0, y1) = self.y_bounds;
        if xc <= x0 || xc > x1 || yc < y0 || yc > y1 {
            return None;
        }

        let day = xc.floor();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "day values are whole-valued indexes or epoch offsets"
        )]
        let entry = self.by_day.get(&(day as i64)).map(|&i| &self.days[i]);
        Some(HoverInfo {
            x_pos: self.x_scale.map(day),
            day,
            count: entry.map_or(0.0, |d| d.count),
            label: entry.map_or_else(|| format_number(day), |d| d.label.clone()),
        })
    }

    fn format_x_tick(&self, value: f64) -> String {
        match &self.x_tick_formatter {
            Some(f) => f(value),
            None => format_number(value),
        }
    }

    /// Generates this frame's marks for the given hover state.
    pub fn marks(&self, hover: &HoverState) -> Vec<Mark> {
        let mut marks = Vec::new();
        let mut next_id = 0_u64;
        let line = |marks: &mut Vec<Mark>,
                    next_id: &mut u64,
                    z: i32,
                    p0: Point,
                    p1: Point,
                    style: StrokeStyle| {
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
                    stroke: style.brush,
                    stroke_width: style.stroke_width,
                },
            ));
        };
        let text = |marks: &mut Vec<Mark>,
                    next_id: &mut u64,
                    z: i32,
                    pos: Point,
                    s: String,
                    font_size: f64,
                    anchor: TextAnchor,
                    baseline: TextBaseline| {
            let id = MarkId::from_raw(*next_id);
            *next_id += 1;
            marks.push(Mark::text(
                id,
                z,
                TextMark {
                    pos,
                    text: s,
                    font_size,
                    angle: 0.0,
                    anchor,
                    baseline,
                    fill: css::BLACK.into(),
                },
            ));
        };

        let rule = StrokeStyle::default();
        let y_zero = self.y_scale.map(0.0);
        let x_left = self.x_scale.map(self.x_bounds.0);

        // X axis: baseline at count zero, ticks below, staggered labels.
        line(
            &mut marks,
            &mut next_id,
            cruller_core::AXIS_RULES,
            Point::new(0.0, y_zero),
            Point::new(self.frame.width, y_zero),
            rule.clone(),
        );
        let x_ticks = self.x_ticks();
        for &tick in &x_ticks {
            let x = self.x_scale.map(tick);
            line(
                &mut marks,
                &mut next_id,
                cruller_core::AXIS_RULES,
                Point::new(x, y_zero),
                Point::new(x, y_zero + 10.0),
                rule.clone(),
            );
        }
        for (i, &tick) in x_ticks.iter().enumerate() {
            let x = self.x_scale.map(tick);
            text(
                &mut marks,
                &mut next_id,
                cruller_core::AXIS_LABELS,
                Point::new(x, y_zero + 15.0 + (i % 2) as f64 * 7.0),
                self.format_x_tick(tick),
                8.0,
                TextAnchor::Middle,
                TextBaseline::Hanging,
            );
        }

        // Y axis: rule at the left bound, ticks and labels outward.
        line(
            &mut marks,
            &mut next_id,
            cruller_core::AXIS_RULES,
            Point::new(x_left, 0.0),
            Point::new(x_left, self.frame.height),
            rule.clone(),
        );
        let y_ticks = self.y_ticks();
        for &tick in &y_ticks {
            let y = self.y_scale.map(tick);
            line(
                &mut marks,
                &mut next_id,
                cruller_core::AXIS_RULES,
                Point::new(x_left - 10.0, y),
                Point::new(x_left, y),
                rule.clone(),
            );
        }
        for &tick in &y_ticks {
            let y = self.y_scale.map(tick);
            text(
                &mut marks,
                &mut next_id,
                cruller_core::AXIS_LABELS,
                Point::new(x_left - 15.0, y),
                format_number(tick),
                8.0,
                TextAnchor::End,
                TextBaseline::Middle,
            );
        }

        // The data line.
        let points: Vec<(f64, f64)> = self.days.iter().map(|d| (d.day, d.count)).collect();
        marks.extend(
            LineMarkSpec::new(
                MarkId::from_raw(1000),
                points,
                self.x_scale,
                self.y_scale,
            )
            .marks(0.0),
        );

        // Hover rule and info.
        match hover {
            HoverState::Idle => {}
            HoverState::Hover(info) => {
                line(
                    &mut marks,
                    &mut next_id,
                    HOVER_RULES,
                    Point::new(info.x_pos, self.y_scale.map(self.y_bounds.0)),
                    Point::new(info.x_pos, self.y_scale.map(self.y_bounds.1)),
                    rule,
                );
                let mid_y = (self.y_scale.map(self.y_bounds.0)
                    + self.y_scale.map(self.y_bounds.1))
                    / 2.0;
                text(
                    &mut marks,
                    &mut next_id,
                    OVERLAY_TEXT,
                    Point::new(info.x_pos + 4.0, mid_y),
                    format!("{}: {}", info.label, format_number(info.count)),
                    10.0,
                    TextAnchor::Start,
                    TextBaseline::Middle,
                );
            }
            HoverState::Pinned(info) => {
                let center = Point::new(self.frame.width / 2.0, self.frame.height / 2.0);
                let card = Rect::new(
                    center.x - CARD_HALF,
                    center.y - CARD_HALF,
                    center.x + CARD_HALF,
                    center.y + CARD_HALF,
                );
                let id = MarkId::from_raw(next_id);
                next_id += 1;
                marks.push(Mark::path(
                    id,
                    OVERLAY,
                    PathMark {
                        path: card.to_path(0.1),
                        fill: css::WHITE.into(),
                        stroke: css::BLACK.into(),
                        stroke_width: 1.0,
                    },
                ));
                text(
                    &mut marks,
                    &mut next_id,
                    OVERLAY_TEXT,
                    Point::new(card.x0 + 8.0, card.y0 + 16.0),
                    format!("Date: {}", info.label),
                    10.0,
                    TextAnchor::Start,
                    TextBaseline::Middle,
                );
                text(
                    &mut marks,
                    &mut next_id,
                    OVERLAY_TEXT,
                    Point::new(card.x0 + 8.0, card.y0 + 32.0),
                    format!("Count: {}", format_number(info.count)),
                    10.0,
                    TextAnchor::Start,
                    TextBaseline::Middle,
                );
            }
        }

        marks
    }
}

/// Formats a numeric value with up-to-two decimals, whole numbers bare.
fn format_number(value: f64) -> String {
    ((value * 100.0).round() / 100.0).to_string()
}

/// Evenly spaced ticks over `bounds`: the span is trimmed by its remainder
/// modulo `count` so the step divides it exactly, leaving the high end bare.
fn trimmed_ticks(bounds: (f64, f64), count: usize) -> Vec<f64> {
    let (lo, hi) = bounds;
    let range = hi - lo;
    if !range.is_finite() || range <= 0.0 || count == 0 {
        return alloc::vec![lo];
    }
    let remainder = range % count as f64;
    let step = (range - remainder) / count as f64;
    (0..count).map(|i| lo + step * i as f64).collect()
}
