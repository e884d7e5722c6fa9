// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot frame: surface size plus padding, resolved to scale ranges.

use kurbo::Rect;

/// Padding between the surface edge and the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPadding {
    /// Top padding in scene coordinates.
    pub top: f64,
    /// Right padding in scene coordinates.
    pub right: f64,
    /// Bottom padding in scene coordinates.
    pub bottom: f64,
    /// Left padding in scene coordinates.
    pub left: f64,
}

impl PlotPadding {
    /// Creates uniform padding.
    pub const fn uniform(pad: f64) -> Self {
        Self {
            top: pad,
            right: pad,
            bottom: pad,
            left: pad,
        }
    }

    /// Creates per-side padding.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self::uniform(16.0)
    }
}

/// The drawing area of one graph.
///
/// Resolves a surface size and padding into the coordinate ranges scales map
/// into. The y range is inverted: larger data values sit higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    /// Surface width in scene coordinates.
    pub width: f64,
    /// Surface height in scene coordinates.
    pub height: f64,
    /// Padding around the plot area.
    pub padding: PlotPadding,
}

impl PlotFrame {
    /// Creates a frame with default padding.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: PlotPadding::default(),
        }
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the x range for scales: left to right.
    pub fn x_range(&self) -> (f64, f64) {
        (self.padding.left, self.width - self.padding.right)
    }

    /// Returns the y range for scales: bottom to top (screen-inverted).
    pub fn y_range(&self) -> (f64, f64) {
        (self.height - self.padding.bottom, self.padding.top)
    }

    /// Returns the plot area rectangle.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            self.padding.left,
            self.padding.top,
            self.width - self.padding.right,
            self.height - self.padding.bottom,
        )
    }
}
