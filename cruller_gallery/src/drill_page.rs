// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drill-down donut demo page.
//!
//! A hierarchy of spending categories; clicking a wedge with children
//! descends into them, growing the new level out of the clicked point. A
//! "Back" action pops the level and the wedges collapse into the angle the
//! level was entered at.

use cruller_core::{Frame, Surface};
use cruller_donut::{Donut, DonutConfig, DrillStack, PieLayoutSpec, WedgeSpec};
use kurbo::Point;

use crate::palette::color_for;

/// One spending category, possibly with sub-categories.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DrillItem {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) value: f64,
    pub(crate) children: Vec<DrillItem>,
}

fn item(id: &str, name: &str, value: f64, children: Vec<DrillItem>) -> DrillItem {
    DrillItem {
        id: id.into(),
        name: name.into(),
        value,
        children,
    }
}

/// The demo hierarchy.
pub(crate) fn demo_data() -> Vec<DrillItem> {
    vec![
        item(
            "clothes",
            "Clothes",
            100.0,
            vec![
                item("shirts", "Shirts", 50.0, vec![]),
                item("pants", "Pants", 10.0, vec![]),
                item("hats", "Funny hats", 40.0, vec![]),
            ],
        ),
        item(
            "coffee",
            "Coffee",
            50.0,
            vec![
                item("starbucks", "Starbucks", 20.0, vec![]),
                item(
                    "local",
                    "Local place",
                    30.0,
                    vec![
                        item("good-coffee", "Good coffee", 10.0, vec![]),
                        item("bad-coffee", "Bad coffee", 20.0, vec![]),
                    ],
                ),
            ],
        ),
        item(
            "groceries",
            "Groceries",
            200.0,
            vec![
                item("whole-foods", "Whole Foods", 100.0, vec![]),
                item("trader-joes", "Trader Joes", 30.0, vec![]),
                item("local-groceries", "Local place", 20.0, vec![]),
                item("costco", "Costco", 50.0, vec![]),
            ],
        ),
        item(
            "gas",
            "Gas",
            100.0,
            vec![
                item("shell", "Shell", 50.0, vec![]),
                item("exxon", "Exxon", 50.0, vec![]),
            ],
        ),
    ]
}

/// The drill-down page: a level stack driving one donut.
#[derive(Debug)]
pub(crate) struct DrillPage {
    stack: DrillStack<DrillItem>,
    donut: Donut<String>,
    hovered: Option<String>,
}

impl DrillPage {
    pub(crate) fn new() -> Self {
        let mut page = Self {
            stack: DrillStack::new(demo_data()),
            donut: Donut::new(
                DonutConfig::new().with_enter_angle(0.0),
                Surface::new(640.0, 400.0),
            ),
            hovered: None,
        };
        page.sync();
        page
    }

    /// Rebuilds the wedge specs from the top level and hover state.
    fn sync(&mut self) {
        self.donut.set_enter_angle(Some(self.stack.enter_angle()));
        let level = self.stack.top().clone();
        let values: Vec<f64> = level.items.iter().map(|d| d.value).collect();
        let spans = PieLayoutSpec::new().with_pad_angle(0.3).layout(&values);

        let desired: Vec<(String, WedgeSpec)> = level
            .items
            .iter()
            .zip(spans)
            .enumerate()
            .map(|(i, (data, span))| {
                let clickable = !data.children.is_empty();
                let scale = if clickable && self.hovered.as_deref() == Some(data.id.as_str()) {
                    1.1
                } else {
                    1.0
                };
                let spec = WedgeSpec::new(span.start_angle, span.end_angle)
                    .with_color(color_for(i))
                    .with_label(data.name.clone())
                    .with_value(format!("{}", data.value))
                    .with_scale(scale);
                (data.id.clone(), spec)
            })
            .collect();
        self.donut.sync(&desired);
    }

    fn item_by_id(&self, id: &str) -> Option<&DrillItem> {
        self.stack.top().items.iter().find(|d| d.id == id)
    }

    /// Pointer click: descend into the clicked wedge's children, entering at
    /// the wedge's mid-angle at this very moment.
    pub(crate) fn click(&mut self, pos: Point) {
        let angle = self.donut.pointer_angle(pos);
        let Some(key) = self.donut.wedge_at(angle).cloned() else {
            return;
        };
        let Some(data) = self.item_by_id(&key) else {
            return;
        };
        if data.children.is_empty() {
            return;
        }
        let children = data.children.clone();
        let info = self.donut.info(&key).expect("clicked wedge exists");
        self.stack.push(children, info.mid_angle);
        self.hovered = None;
        self.sync();
    }

    /// Pointer move: hover feedback on clickable wedges.
    pub(crate) fn pointer_move(&mut self, pos: Point) {
        let angle = self.donut.pointer_angle(pos);
        let hovered = self
            .donut
            .wedge_at(angle)
            .cloned()
            .filter(|key| self.item_by_id(key).is_some_and(|d| !d.children.is_empty()));
        if hovered != self.hovered {
            self.hovered = hovered;
            self.sync();
        }
    }

    /// The "Back" button: pops the top level.
    pub(crate) fn back(&mut self) {
        if self.stack.pop() {
            self.hovered = None;
            self.sync();
        }
    }

    pub(crate) fn can_go_back(&self) -> bool {
        self.stack.can_pop()
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.depth()
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
