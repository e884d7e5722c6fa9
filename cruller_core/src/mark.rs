// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable-identity drawing primitives.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// Stable mark identity.
///
/// Components derive their mark ids deterministically from an id base so the
/// same logical element keeps the same id across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start of the text run.
    Start,
    /// Anchor at the middle of the text run.
    Middle,
    /// Anchor at the end of the text run.
    End,
}

/// Vertical text baseline placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Centered on the anchor point.
    Middle,
    /// Alphabetic baseline at the anchor point.
    Alphabetic,
    /// Hanging baseline at the anchor point.
    Hanging,
    /// Ideographic baseline at the anchor point.
    Ideographic,
}

/// A filled/stroked path payload.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path outline in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint. Ignored when `stroke_width` is zero.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

/// A text payload (unshaped).
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The drawable content of a mark.
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A filled/stroked path.
    Path(PathMark),
    /// A text run.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns geometry bounds for this payload, if it has any.
    ///
    /// Text bounds depend on shaping and are left to the renderer.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// One drawing primitive with identity and paint order.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable mark id.
    pub id: MarkId,
    /// Rendering order hint. Renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a path mark.
    pub fn path(id: MarkId, z_index: i32, payload: PathMark) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Path(payload),
        }
    }

    /// Creates a text mark.
    pub fn text(id: MarkId, z_index: i32, payload: TextMark) -> Self {
        Self {
            id,
            z_index,
            payload: MarkPayload::Text(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Circle;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn path_payload_reports_bounds() {
        let path = Circle::new(Point::new(10.0, 10.0), 5.0).to_path(0.1);
        let mark = Mark::path(
            MarkId::from_raw(1),
            0,
            PathMark {
                path,
                fill: css::TOMATO.into(),
                stroke: css::BLACK.into(),
                stroke_width: 1.0,
            },
        );
        let bounds = mark.payload.bounds().expect("paths have bounds");
        assert!(bounds.x0 < 6.0 && bounds.x1 > 14.0);
    }

    #[test]
    fn text_payload_has_no_bounds() {
        let mark = Mark::text(
            MarkId::from_raw(2),
            0,
            TextMark {
                pos: Point::new(0.0, 0.0),
                text: String::from("hi"),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                fill: css::BLACK.into(),
            },
        );
        assert!(mark.payload.bounds().is_none());
    }
}
