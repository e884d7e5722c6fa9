// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-graph building blocks for the `cruller` gallery.
//!
//! This crate is a small reusable layer under the graph-flavored demo pages:
//! - **Scales** map data values into screen coordinates (and back).
//! - **Axes** and **line marks** are built by generating `cruller_core`
//!   marks.
//! - The **contributions chart** packages the activity-calendar page's
//!   scales, ticks, and hover/pin state machine.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings.

#![no_std]

extern crate alloc;

mod axis;
mod contributions;
#[cfg(not(feature = "std"))]
mod float;
mod line_mark;
mod plot;
mod scale;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, GridStyle, StrokeStyle};
pub use contributions::{
    ContributionDay, ContributionsChart, ContributionsHover, HoverInfo, HoverState,
};
pub use line_mark::{LineEnter, LineMarkSpec};
pub use plot::{PlotFrame, PlotPadding};
pub use scale::{ScaleLinear, infer_domain};
