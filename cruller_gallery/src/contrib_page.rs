// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contributions demo page.
//!
//! Wires the contributions chart to pointer input: moving the pointer over
//! the data region tracks the day under it, clicking pins an info card,
//! closing the card resumes tracking. The data would normally come from an
//! API client; the demo fabricates a deterministic year of activity.

use cruller_charts::{ContributionDay, ContributionsChart, ContributionsHover, HoverState};
use cruller_core::Frame;
use kurbo::Point;

/// A deterministic fake year of contribution counts.
pub(crate) fn demo_days() -> Vec<ContributionDay> {
    (0..365)
        .map(|i| {
            // A weekly rhythm with occasional spikes; quiet on "weekends".
            let week_day = i % 7;
            let count = if week_day >= 5 {
                0
            } else {
                (i * 37 % 11) + if i % 53 == 0 { 14 } else { 0 }
            };
            let month = i / 30 + 1;
            let day = i % 30 + 1;
            ContributionDay::new(
                f64::from(i),
                f64::from(count),
                format!("2025-{month:02}-{day:02}"),
            )
        })
        .collect()
}

/// The contributions page.
#[derive(Debug)]
pub(crate) struct ContributionsPage {
    chart: ContributionsChart,
    hover: ContributionsHover,
}

impl ContributionsPage {
    pub(crate) fn new(days: Vec<ContributionDay>) -> Self {
        Self {
            chart: ContributionsChart::new(days, 640.0, 400.0),
            hover: ContributionsHover::new(),
        }
    }

    pub(crate) fn total_contributions(&self) -> f64 {
        self.chart.total_contributions()
    }

    pub(crate) fn chart(&self) -> &ContributionsChart {
        &self.chart
    }

    pub(crate) fn hover_state(&self) -> &HoverState {
        self.hover.state()
    }

    pub(crate) fn pointer_move(&mut self, pos: Point) {
        self.hover.pointer_move(&self.chart, pos.x, pos.y);
    }

    pub(crate) fn click(&mut self) {
        self.hover.click();
    }

    pub(crate) fn close(&mut self) {
        self.hover.close();
    }

    pub(crate) fn frame(&self) -> Frame {
        let mut frame = Frame::new();
        frame.extend(self.chart.marks(self.hover.state()));
        frame
    }
}
