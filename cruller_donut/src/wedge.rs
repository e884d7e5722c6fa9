// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One animated wedge.

extern crate alloc;

use alloc::string::String;

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use cruller_core::{Mark, MarkId, PathMark, TextAnchor, TextBaseline, TextMark};
use cruller_motion::{AngleSpring, Spring, SpringConfig};
use kurbo::{Point, Vec2};
use peniko::{Brush, Color};
use smallvec::SmallVec;

use crate::arc::{sector_centroid, sector_path};
use crate::config::DonutConfig;

/// Curve flattening tolerance for wedge outlines.
const TOLERANCE: f64 = 0.1;

/// Fill opacity of a fully present wedge.
const FILL_ALPHA: f64 = 0.65;

/// Stroke width of the wedge outline.
const STROKE_WIDTH: f64 = 1.5;

/// Distance from the centroid to the label anchor, before the per-character
/// allowance.
const LABEL_OFFSET: f64 = 40.0;

/// The data one wedge displays.
#[derive(Clone, Debug, PartialEq)]
pub struct WedgeSpec {
    /// Start angle in radians. Either ordering relative to `end_angle` is
    /// tolerated; dragging inverts spans transiently.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Wedge color. The fill uses it at reduced opacity, the outline at full.
    pub color: Color,
    /// Label drawn outside the wedge.
    pub label: String,
    /// Value text drawn at the wedge centroid.
    pub value: String,
    /// Radius multiplier for hover/drag feedback. Applied to both radii
    /// targets without touching the underlying data.
    pub scale: f64,
}

impl WedgeSpec {
    /// Creates a spec for the given angle span.
    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
            color: peniko::color::palette::css::STEEL_BLUE,
            label: String::new(),
            value: String::new(),
            scale: 1.0,
        }
    }

    /// Sets the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the value text.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the radius multiplier.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns the bisecting angle of the spec's span.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Event payload for wedge interactions.
///
/// Carries the wedge's mid-angle *at the moment of interaction* — the
/// animated value, not the layout target — so drill-down can grow the next
/// level out of the point actually clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeInfo {
    /// The wedge's current animated mid-angle.
    pub mid_angle: f64,
}

/// Wedge lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WedgePhase {
    /// Animating in from the enter angle.
    Entering,
    /// Tracking its spec.
    Steady,
    /// Collapsing toward the exit angle; discarded once settled.
    Exiting,
}

/// One wedge instance: spec targets plus animated state.
///
/// Four scalars animate independently — inner radius, outer radius, start
/// angle, end angle — and everything rendered is derived from their
/// instantaneous values each frame. A fifth spring animates presence
/// (opacity) across enter/exit.
#[derive(Clone, Debug)]
pub struct WedgePiece {
    spec: WedgeSpec,
    phase: WedgePhase,
    inner_radius: Spring,
    outer_radius: Spring,
    start_angle: AngleSpring,
    end_angle: AngleSpring,
    presence: Spring,
}

impl WedgePiece {
    /// Mounts a wedge.
    ///
    /// Angles seed at the config's enter angle when one is set (the wedge
    /// grows out of that point), otherwise at the spec's own angles. Radii
    /// seed unscaled and immediately animate toward the scaled targets.
    pub fn enter(spec: WedgeSpec, config: &DonutConfig, springs: SpringConfig) -> Self {
        let seed_start = config.enter_angle.unwrap_or(spec.start_angle);
        let seed_end = config.enter_angle.unwrap_or(spec.end_angle);
        let mut piece = Self {
            inner_radius: Spring::new(config.inner_radius, springs),
            outer_radius: Spring::new(config.outer_radius, springs),
            start_angle: AngleSpring::new(seed_start, springs),
            end_angle: AngleSpring::new(seed_end, springs),
            presence: Spring::new(0.0, springs),
            phase: WedgePhase::Entering,
            spec,
        };
        piece.presence.set_target(1.0);
        piece.retarget(config);
        piece
    }

    /// Applies a new spec, retargeting the animators.
    ///
    /// Angle targets use shortest-path normalization, so the wedge sweeps
    /// the short way around regardless of how far the new span sits from the
    /// old one. Also revives an exiting wedge whose key reappeared.
    pub fn update(&mut self, spec: WedgeSpec, config: &DonutConfig) {
        self.spec = spec;
        if self.phase == WedgePhase::Exiting {
            self.phase = WedgePhase::Steady;
            self.presence.set_target(1.0);
        }
        self.retarget(config);
    }

    fn retarget(&mut self, config: &DonutConfig) {
        self.inner_radius
            .set_target(config.inner_radius * self.spec.scale);
        self.outer_radius
            .set_target(config.outer_radius * self.spec.scale);
        self.start_angle.set_target_shortest(self.spec.start_angle);
        self.end_angle.set_target_shortest(self.spec.end_angle);
    }

    /// Begins the exit transition. Runs at most once; later calls are no-ops.
    ///
    /// The exit angle is `enter - π` when the *current animated* mid-angle is
    /// below the enter angle, `enter + π` otherwise. Both angle animators
    /// collapse onto it, shrinking the wedge to a zero-width sliver at the
    /// hierarchy boundary before the instance is discarded.
    pub fn begin_exit(&mut self, config: &DonutConfig) {
        if self.phase == WedgePhase::Exiting {
            return;
        }
        self.phase = WedgePhase::Exiting;
        let enter = config.enter_angle();
        let exit = if self.mid_angle() < enter {
            enter - PI
        } else {
            enter + PI
        };
        self.start_angle.set_target_shortest(exit);
        self.end_angle.set_target_shortest(exit);
        self.presence.set_target(0.0);
    }

    /// Swaps the spring parameters on all animators, preserving motion.
    pub fn set_spring_config(&mut self, springs: SpringConfig) {
        self.inner_radius.set_config(springs);
        self.outer_radius.set_config(springs);
        self.start_angle.set_config(springs);
        self.end_angle.set_config(springs);
        self.presence.set_config(springs);
    }

    /// Advances all animators by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.inner_radius.tick(dt);
        self.outer_radius.tick(dt);
        self.start_angle.tick(dt);
        self.end_angle.tick(dt);
        self.presence.tick(dt);
        if self.phase == WedgePhase::Entering && self.is_settled() {
            self.phase = WedgePhase::Steady;
        }
    }

    /// Returns whether every animator has reached its target.
    pub fn is_settled(&self) -> bool {
        self.inner_radius.is_settled()
            && self.outer_radius.is_settled()
            && self.start_angle.is_settled()
            && self.end_angle.is_settled()
            && self.presence.is_settled()
    }

    /// Returns whether the exit transition has finished.
    pub fn is_exited(&self) -> bool {
        self.phase == WedgePhase::Exiting && self.is_settled()
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> WedgePhase {
        self.phase
    }

    /// Returns the spec currently applied.
    pub fn spec(&self) -> &WedgeSpec {
        &self.spec
    }

    /// Returns the current animated mid-angle.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle.value() + self.end_angle.value()) / 2.0
    }

    /// Returns the current animated angle span.
    pub fn current_span(&self) -> (f64, f64) {
        (self.start_angle.value(), self.end_angle.value())
    }

    /// Returns the interaction payload, computed at invocation time.
    pub fn info(&self) -> WedgeInfo {
        WedgeInfo {
            mid_angle: self.mid_angle(),
        }
    }

    /// Derives this frame's marks from the animated state.
    ///
    /// Emits up to three marks with ids `id_base`, `id_base + 1`,
    /// `id_base + 2` (outline, label, value). A degenerate angle range emits
    /// no outline.
    pub fn marks(&self, id_base: u64, config: &DonutConfig, center: Point) -> SmallVec<[Mark; 3]> {
        let start = self.start_angle.value();
        let end = self.end_angle.value();
        let inner = self.inner_radius.value();
        let outer = self.outer_radius.value();

        let mid = (start + end) / 2.0;
        let out = Vec2::new(mid.sin(), -mid.cos());
        let centroid = sector_centroid(center, start, end, inner, outer);

        let presence = self.presence.value().clamp(0.0, 1.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "alpha values fit in f32 exactly enough"
        )]
        let alpha = |a: f64| (a * presence) as f32;

        let mut marks = SmallVec::new();
        if let Some(path) = sector_path(
            center,
            start,
            end,
            inner,
            outer,
            config.pad_angle,
            config.corner_radius,
            TOLERANCE,
        ) {
            marks.push(Mark::path(
                MarkId::from_raw(id_base),
                cruller_core::SERIES_FILL,
                PathMark {
                    path,
                    fill: Brush::Solid(self.spec.color.with_alpha(alpha(FILL_ALPHA))),
                    stroke: Brush::Solid(self.spec.color.with_alpha(alpha(1.0))),
                    stroke_width: STROKE_WIDTH,
                },
            ));
        }

        let label_reach = LABEL_OFFSET + 2.0 * self.spec.label.chars().count() as f64;
        let text_fill = Brush::Solid(
            peniko::color::palette::css::BLACK.with_alpha(alpha(1.0)),
        );
        marks.push(Mark::text(
            MarkId::from_raw(id_base + 1),
            cruller_core::SERIES_LABELS,
            TextMark {
                pos: centroid + out * label_reach,
                text: self.spec.label.clone(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                fill: text_fill.clone(),
            },
        ));
        marks.push(Mark::text(
            MarkId::from_raw(id_base + 2),
            cruller_core::SERIES_LABELS,
            TextMark {
                pos: centroid,
                text: self.spec.value.clone(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                fill: text_fill,
            },
        ));
        marks
    }
}
