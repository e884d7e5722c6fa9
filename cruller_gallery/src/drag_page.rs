// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-reorder donut demo page.
//!
//! Wedges can be dragged around the ring; crossing a neighbor's mid-angle
//! swaps the two items. Clicking a wedge opens an edit form for its name and
//! value.

use cruller_core::{Frame, Surface};
use cruller_donut::{
    AngleSpan, Donut, DonutConfig, DragTracker, PieLayoutSpec, WedgeSpec, drag_offset,
};
use cruller_motion::SpringConfig;
use kurbo::Point;
use peniko::Color;

use crate::palette::color_for;

/// One draggable slice.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DragItem {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) value: f64,
    pub(crate) color: Color,
}

/// The demo items.
pub(crate) fn demo_items() -> Vec<DragItem> {
    let data = [
        ("clothes", "Clothes", 100.0),
        ("coffee", "Coffee", 50.0),
        ("groceries", "Groceries", 200.0),
        ("gas", "Gas", 100.0),
    ];
    data.iter()
        .enumerate()
        .map(|(i, &(id, name, value))| DragItem {
            id: id.into(),
            name: name.into(),
            value,
            color: color_for(i),
        })
        .collect()
}

/// The drag-to-reorder page.
#[derive(Debug)]
pub(crate) struct DragPage {
    items: Vec<DragItem>,
    donut: Donut<String>,
    tracker: DragTracker,
    dragging: Option<String>,
    drag_angle: Option<f64>,
    hovered: Option<String>,
    editing: Option<String>,
}

impl DragPage {
    pub(crate) fn new() -> Self {
        let mut page = Self {
            items: demo_items(),
            donut: Donut::new(DonutConfig::new(), Surface::new(300.0, 300.0)),
            tracker: DragTracker::new(),
            dragging: None,
            drag_angle: None,
            hovered: None,
            editing: None,
        };
        page.sync();
        page
    }

    fn layout(&self) -> Vec<AngleSpan> {
        let values: Vec<f64> = self.items.iter().map(|d| d.value).collect();
        PieLayoutSpec::new()
            .with_sort_descending(false)
            .with_pad_angle(0.3)
            .layout(&values)
    }

    /// Rebuilds wedge specs: canonical spans, except the dragged wedge which
    /// tracks the pointer.
    fn sync(&mut self) {
        let spans = self.layout();
        let desired: Vec<(String, WedgeSpec)> = self
            .items
            .iter()
            .zip(spans)
            .map(|(data, span)| {
                let dragging = self.dragging.as_deref() == Some(data.id.as_str());
                let span = match (dragging, self.drag_angle) {
                    (true, Some(angle)) => drag_offset(span, angle),
                    _ => span,
                };
                let scale = if dragging {
                    1.2
                } else if self.hovered.as_deref() == Some(data.id.as_str()) {
                    1.1
                } else {
                    1.0
                };
                let spec = WedgeSpec::new(span.start_angle, span.end_angle)
                    .with_color(data.color)
                    .with_label(data.name.clone())
                    .with_value(format!("{}", data.value))
                    .with_scale(scale);
                (data.id.clone(), spec)
            })
            .collect();
        self.donut.sync(&desired);
    }

    /// Pointer down: begin dragging the wedge under the pointer, with a
    /// stiffer spring so it tracks closely.
    pub(crate) fn pointer_down(&mut self, pos: Point) {
        let angle = self.donut.pointer_angle(pos);
        let Some(key) = self.donut.wedge_at(angle).cloned() else {
            return;
        };
        self.tracker = DragTracker::new();
        if let Some(piece) = self.donut.piece_mut(&key) {
            piece.set_spring_config(SpringConfig::new().with_stiffness(300.0).with_damping(40.0));
        }
        self.dragging = Some(key);
    }

    /// Pointer move: track the drag and swap on mid-angle crossings.
    pub(crate) fn pointer_move(&mut self, pos: Point) {
        let angle = self.donut.pointer_angle(pos);
        let Some(dragged) = self.dragging.clone() else {
            // Plain hover feedback when not dragging.
            let hovered = self.donut.wedge_at(angle).cloned();
            if hovered != self.hovered {
                self.hovered = hovered;
                self.sync();
            }
            return;
        };

        self.drag_angle = Some(angle);
        let mids: Vec<f64> = self.layout().iter().map(|s| s.mid_angle()).collect();
        if let Some(crossed) = self.tracker.crossing(angle, &mids) {
            let from = self
                .items
                .iter()
                .position(|d| d.id == dragged)
                .expect("dragged item exists");
            if crossed != from {
                self.items.swap(from, crossed);
            }
        }
        self.sync();
    }

    /// Pointer up: the wedge animates back to its (possibly reordered)
    /// canonical angle.
    pub(crate) fn pointer_up(&mut self) {
        if let Some(key) = self.dragging.take() {
            if let Some(piece) = self.donut.piece_mut(&key) {
                piece.set_spring_config(SpringConfig::new().with_damping(20.0));
            }
        }
        self.drag_angle = None;
        self.tracker.reset();
        self.sync();
    }

    /// Click: open the edit form for the wedge under the pointer.
    pub(crate) fn click(&mut self, pos: Point) {
        let angle = self.donut.pointer_angle(pos);
        self.editing = self.donut.wedge_at(angle).cloned();
    }

    /// Returns the item currently being edited, if a form is open.
    pub(crate) fn editing(&self) -> Option<&DragItem> {
        let id = self.editing.as_deref()?;
        self.items.iter().find(|d| d.id == id)
    }

    /// Submits the edit form. Empty names are rejected, as is submitting
    /// with no form open; returns whether the update applied.
    pub(crate) fn submit_edit(&mut self, name: &str, value: f64) -> bool {
        if name.is_empty() || !value.is_finite() {
            return false;
        }
        let Some(id) = self.editing.take() else {
            return false;
        };
        let Some(data) = self.items.iter_mut().find(|d| d.id == id) else {
            return false;
        };
        data.name = name.into();
        data.value = value;
        self.sync();
        true
    }

    /// Returns item ids in their current order.
    pub(crate) fn order(&self) -> Vec<&str> {
        self.items.iter().map(|d| d.id.as_str()).collect()
    }

    pub(crate) fn surface(&self) -> Surface {
        self.donut.surface()
    }

    /// Advances animation; returns whether anything is still moving.
    pub(crate) fn tick(&mut self, dt: f64) -> bool {
        self.donut.tick(dt)
    }

    pub(crate) fn frame(&self) -> Frame {
        let mut frame = Frame::new();
        frame.extend(self.donut.marks());
        frame
    }

    #[cfg(test)]
    pub(crate) fn donut(&self) -> &Donut<String> {
        &self.donut
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(page: &mut DragPage) {
        for _ in 0..600 {
            page.tick(FRAME);
        }
    }

    /// A pointer position at the given angle around the donut center.
    fn at_angle(page: &DragPage, angle: f64) -> Point {
        let center = page.surface().center();
        center + Vec2::new(angle.sin(), -angle.cos()) * 50.0
    }

    #[test]
    fn dragging_across_a_neighbor_swaps_once() {
        let mut page = DragPage::new();
        settle(&mut page);
        assert_eq!(page.order(), ["clothes", "coffee", "groceries", "gas"]);

        let mids: Vec<f64> = page.layout().iter().map(|s| s.mid_angle()).collect();

        // Grab the first wedge and cross the second wedge's mid-angle.
        page.pointer_down(at_angle(&page, mids[0]));
        page.pointer_move(at_angle(&page, mids[0] + 0.05));
        page.pointer_move(at_angle(&page, mids[1] + 0.05));
        assert_eq!(page.order(), ["coffee", "clothes", "groceries", "gas"]);

        // Wiggling on the far side must not swap again.
        page.pointer_move(at_angle(&page, mids[1] + 0.08));
        assert_eq!(page.order(), ["coffee", "clothes", "groceries", "gas"]);

        page.pointer_up();
        settle(&mut page);
        // The released wedge settled onto its new canonical span.
        let spans = page.layout();
        let (s, e) = page
            .donut()
            .piece(&"clothes".to_string())
            .expect("wedge")
            .current_span();
        assert!((s - spans[1].start_angle).abs() < 1e-6);
        assert!((e - spans[1].end_angle).abs() < 1e-6);
    }

    #[test]
    fn dragged_wedge_tracks_the_pointer() {
        let mut page = DragPage::new();
        settle(&mut page);
        let mids: Vec<f64> = page.layout().iter().map(|s| s.mid_angle()).collect();

        page.pointer_down(at_angle(&page, mids[0]));
        page.pointer_move(at_angle(&page, mids[0] + 0.2));
        let spec = page
            .donut()
            .piece(&"clothes".to_string())
            .expect("wedge")
            .spec()
            .clone();
        assert!(((spec.start_angle + spec.end_angle) / 2.0 - (mids[0] + 0.2)).abs() < 1e-9);
        assert_eq!(spec.scale, 1.2);
    }

    #[test]
    fn hover_scales_without_dragging() {
        let mut page = DragPage::new();
        settle(&mut page);
        let mids: Vec<f64> = page.layout().iter().map(|s| s.mid_angle()).collect();
        page.pointer_move(at_angle(&page, mids[2]));
        let scale = page
            .donut()
            .piece(&"groceries".to_string())
            .expect("wedge")
            .spec()
            .scale;
        assert_eq!(scale, 1.1);
    }

    #[test]
    fn edit_form_updates_name_and_value() {
        let mut page = DragPage::new();
        settle(&mut page);
        let mids: Vec<f64> = page.layout().iter().map(|s| s.mid_angle()).collect();

        page.click(at_angle(&page, mids[1]));
        assert_eq!(page.editing().expect("form open").id, "coffee");

        assert!(!page.submit_edit("", 10.0));
        assert!(page.submit_edit("Tea", 75.0));
        assert!(page.editing().is_none());
        let item = page.items.iter().find(|d| d.id == "coffee").expect("item");
        assert_eq!(item.name, "Tea");
        assert_eq!(item.value, 75.0);
    }
}
