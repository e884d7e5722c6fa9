// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated donut/pie chart components.
//!
//! The building blocks, leaf first:
//! - [`sector_path`]/[`sector_centroid`] turn angles and radii into
//!   renderable geometry (pad angle and rounded corners included).
//! - [`PieLayoutSpec`] lays out values as angle spans around the circle.
//! - [`WedgePiece`] is one animated wedge: four independent spring-driven
//!   scalars (two radii, two angles) with an explicit
//!   entering/steady/exiting lifecycle and shortest-path angle retargeting.
//! - [`Donut`] owns the shared [`DonutConfig`] and a keyed set of pieces,
//!   reconciling piece identity against the data each render pass.
//! - [`DrillStack`] and [`DragTracker`] are the page-level state machines for
//!   hierarchy drill-down and drag-to-reorder.
//!
//! Angles are in radians throughout, in the chart convention: 0 at
//! 12 o'clock, increasing clockwise.

#![no_std]

extern crate alloc;

mod arc;
mod config;
mod donut;
mod drag;
mod drill;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod wedge;

pub use arc::{sector_centroid, sector_path};
pub use config::DonutConfig;
pub use donut::Donut;
pub use drag::{DragTracker, drag_offset};
pub use drill::{DrillLevel, DrillStack};
pub use layout::{AngleSpan, PieLayoutSpec};
pub use wedge::{WedgeInfo, WedgePhase, WedgePiece, WedgeSpec};
