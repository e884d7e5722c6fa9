// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared mark model for the `cruller` chart gallery.
//!
//! This crate is the thin foundation the component crates build on:
//! - **Marks** are stable-identity drawing primitives (paths and text) with
//!   an explicit z-index.
//! - A [`Frame`] is the flat list of marks one render pass produces. Animated
//!   components re-derive their geometry every tick, so a frame is rebuilt
//!   from scratch each time and handed to whatever paints it.
//! - A [`Surface`] describes the drawing area and owns the pointer-to-angle
//!   math that radial components share.
//!
//! Text marks store unshaped strings; shaping and measurement are a renderer
//! concern.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
mod float;
mod frame;
mod mark;
mod surface;
mod z_order;

pub use frame::Frame;
pub use mark::{Mark, MarkId, MarkPayload, PathMark, TextAnchor, TextBaseline, TextMark};
pub use surface::Surface;
pub use z_order::*;
