// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for component-generated marks.
//!
//! Marks carry an explicit `z_index` for render ordering. The component
//! crates set z-indexes consistently so callers don't hand-tune paint order
//! in every demo page.
//!
//! These values are intentionally coarse. Renderers should sort by
//! `(z_index, MarkId)` for a deterministic tie-break.

/// Plot background/frame fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (wedges, areas).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (lines, rules).
pub const SERIES_STROKE: i32 = 10;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Wedge/series labels drawn above the series.
pub const SERIES_LABELS: i32 = 50;

/// Hover rules and floating annotations.
pub const HOVER_RULES: i32 = 60;
/// Overlay surfaces (tutorial bubbles, pinned info cards).
pub const OVERLAY: i32 = 80;
/// Text drawn on top of overlay surfaces.
pub const OVERLAY_TEXT: i32 = 90;
