// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tutorial-overlay demo.
//!
//! A sequence of steps, each anchored to a target rectangle on the page.
//! The step matching the current index shows a highlight bubble just above
//! and left of its target; Next/Back move through the sequence without
//! clamping, so stepping past either end simply hides the bubble.

use cruller_core::{
    Frame, Mark, MarkId, OVERLAY, OVERLAY_TEXT, PathMark, TextAnchor, TextBaseline, TextMark,
};
use kurbo::{Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::Color;

/// Offset of the bubble from its target's origin.
const BUBBLE_OFFSET: f64 = 10.0;

/// Fixed bubble size.
const BUBBLE_SIZE: (f64, f64) = (220.0, 96.0);

/// One tutorial step.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TutorialStep {
    pub(crate) title: String,
    pub(crate) content: String,
    /// The page region this step explains.
    pub(crate) target: Rect,
}

impl TutorialStep {
    pub(crate) fn new(title: &str, content: &str, target: Rect) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            target,
        }
    }
}

/// The tutorial overlay widget.
#[derive(Clone, Debug)]
pub(crate) struct Tutorial {
    name: String,
    steps: Vec<TutorialStep>,
    current: i32,
}

impl Tutorial {
    pub(crate) fn new(name: &str, steps: Vec<TutorialStep>) -> Self {
        Self {
            name: name.into(),
            steps,
            current: 0,
        }
    }

    pub(crate) fn current_step(&self) -> i32 {
        self.current
    }

    /// Advances to the next step. Stepping past the last hides the bubble.
    pub(crate) fn next(&mut self) {
        self.current += 1;
    }

    /// Returns to the previous step. Stepping before the first hides the
    /// bubble.
    pub(crate) fn back(&mut self) {
        self.current -= 1;
    }

    /// Returns the active step and its bubble placement, when the current
    /// index is in range.
    pub(crate) fn bubble(&self) -> Option<(&TutorialStep, Rect)> {
        if self.current < 0 {
            return None;
        }
        let step = self.steps.get(self.current as usize)?;
        let origin = Point::new(
            step.target.x0 - BUBBLE_OFFSET,
            step.target.y0 - BUBBLE_OFFSET,
        );
        let (w, h) = BUBBLE_SIZE;
        Some((step, Rect::new(origin.x, origin.y, origin.x + w, origin.y + h)))
    }

    /// Generates the overlay marks: nothing when no step matches.
    pub(crate) fn marks(&self, id_base: u64) -> Vec<Mark> {
        let Some((step, rect)) = self.bubble() else {
            return Vec::new();
        };

        let mut marks = Vec::new();
        marks.push(Mark::path(
            MarkId::from_raw(id_base),
            OVERLAY,
            PathMark {
                path: rect.to_rounded_rect(5.0).to_path(0.1),
                fill: Color::from_rgb8(0x34, 0xd3, 0x99).with_alpha(0.95).into(),
                stroke: Color::from_rgb8(0x05, 0x96, 0x69).into(),
                stroke_width: 1.0,
            },
        ));
        let text = |id: u64, y: f64, s: String, font_size: f64| {
            Mark::text(
                MarkId::from_raw(id),
                OVERLAY_TEXT,
                TextMark {
                    pos: Point::new(rect.x0 + 16.0, y),
                    text: s,
                    font_size,
                    angle: 0.0,
                    anchor: TextAnchor::Start,
                    baseline: TextBaseline::Middle,
                    fill: css::BLACK.into(),
                },
            )
        };
        marks.push(text(
            id_base + 1,
            rect.y0 + 20.0,
            format!("{} - {}", self.name, step.title),
            13.0,
        ));
        marks.push(text(id_base + 2, rect.y0 + 44.0, step.content.clone(), 11.0));
        marks.push(text(id_base + 3, rect.y1 - 18.0, String::from("Back"), 11.0));
        marks.push(Mark::text(
            MarkId::from_raw(id_base + 4),
            OVERLAY_TEXT,
            TextMark {
                pos: Point::new(rect.x0 + 64.0, rect.y1 - 18.0),
                text: String::from("Next"),
                font_size: 11.0,
                angle: 0.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                fill: css::BLACK.into(),
            },
        ));
        marks
    }
}

/// The demo tutorial: three steps over a mock article layout.
pub(crate) fn demo_tutorial() -> (Tutorial, Vec<Rect>) {
    let targets = vec![
        Rect::new(60.0, 40.0, 580.0, 120.0),
        Rect::new(100.0, 160.0, 540.0, 190.0),
        Rect::new(60.0, 230.0, 580.0, 330.0),
    ];
    let tutorial = Tutorial::new(
        "Tutorial",
        vec![
            TutorialStep::new("First step", "This is a decent paragraph", targets[0]),
            TutorialStep::new("Second step", "This is a list", targets[1]),
            TutorialStep::new(
                "Last step",
                "Something, something, something, darkside",
                targets[2],
            ),
        ],
    );
    (tutorial, targets)
}

/// Renders the mock page content plus the overlay into one frame.
pub(crate) fn demo_frame(tutorial: &Tutorial, targets: &[Rect]) -> Frame {
    let mut frame = Frame::new();
    for (i, target) in targets.iter().enumerate() {
        frame.push(Mark::path(
            MarkId::from_raw(10 + i as u64),
            cruller_core::PLOT_BACKGROUND,
            PathMark {
                path: target.to_path(0.1),
                fill: css::GAINSBORO.into(),
                stroke: css::DARK_GRAY.into(),
                stroke_width: 1.0,
            },
        ));
    }
    frame.extend(tutorial.marks(0x100));
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_follows_the_matching_step() {
        let (mut tutorial, targets) = demo_tutorial();
        let (step, rect) = tutorial.bubble().expect("step 0 active");
        assert_eq!(step.title, "First step");
        assert_eq!(rect.x0, targets[0].x0 - 10.0);
        assert_eq!(rect.y0, targets[0].y0 - 10.0);

        tutorial.next();
        let (step, rect) = tutorial.bubble().expect("step 1 active");
        assert_eq!(step.title, "Second step");
        assert_eq!(rect.y0, targets[1].y0 - 10.0);
    }

    #[test]
    fn stepping_out_of_range_hides_the_bubble() {
        let (mut tutorial, _) = demo_tutorial();
        tutorial.back();
        assert_eq!(tutorial.current_step(), -1);
        assert!(tutorial.bubble().is_none());
        assert!(tutorial.marks(0).is_empty());

        tutorial.next();
        assert!(tutorial.bubble().is_some());
        for _ in 0..3 {
            tutorial.next();
        }
        assert_eq!(tutorial.current_step(), 3);
        assert!(tutorial.bubble().is_none());
    }

    #[test]
    fn back_returns_to_the_previous_step() {
        let (mut tutorial, _) = demo_tutorial();
        tutorial.next();
        tutorial.next();
        assert_eq!(tutorial.bubble().expect("step 2").0.title, "Last step");
        tutorial.back();
        assert_eq!(tutorial.bubble().expect("step 1").0.title, "Second step");
    }

    #[test]
    fn overlay_marks_sit_above_the_page_content() {
        let (tutorial, targets) = demo_tutorial();
        let frame = demo_frame(&tutorial, &targets);
        let max_bg = frame
            .marks()
            .iter()
            .filter(|m| m.id.to_raw() < 0x100)
            .map(|m| m.z_index)
            .max()
            .expect("page content");
        let min_overlay = frame
            .marks()
            .iter()
            .filter(|m| m.id.to_raw() >= 0x100)
            .map(|m| m.z_index)
            .min()
            .expect("overlay content");
        assert!(min_overlay > max_bg);
    }
}
