// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive chart demos for the `cruller` crates.
//!
//! Each demo page owns its interaction state machine and is driven here by a
//! scripted sequence of pointer events and animation ticks; snapshots along
//! the way land in an HTML report.

mod contrib_page;
mod drag_page;
mod drill_page;
mod graph_page;
mod html;
mod palette;
mod svg;
mod tutorial;

use cruller_core::Frame;
use kurbo::{Point, Rect, Vec2};

use crate::contrib_page::ContributionsPage;
use crate::drag_page::DragPage;
use crate::drill_page::DrillPage;
use crate::graph_page::GraphPage;
use crate::html::HtmlSection;
use crate::svg::SvgScene;

/// Animation step used by the demo scripts.
const FRAME_DT: f64 = 1.0 / 60.0;

fn main() {
    let sections = vec![
        drill_demo(),
        drag_demo(),
        graph_demo(),
        contributions_demo(),
        tutorial_demo(),
    ];

    let html = html::render_report("Cruller gallery", &sections);
    std::fs::write("cruller_gallery.html", html).expect("write cruller_gallery.html");
    println!("wrote cruller_gallery.html");
}

fn snapshot(view: Rect, frame: Frame) -> String {
    SvgScene::with_view_box(view).render(frame)
}

/// Runs a page's tick function until it settles or the budget runs out.
fn run_until_settled(mut tick: impl FnMut(f64) -> bool) {
    for _ in 0..600 {
        if !tick(FRAME_DT) {
            break;
        }
    }
}

/// Ticks a fixed number of frames, for mid-transition snapshots.
fn run_frames(mut tick: impl FnMut(f64) -> bool, frames: usize) {
    for _ in 0..frames {
        let _ = tick(FRAME_DT);
    }
}

fn at_angle(center: Point, angle: f64) -> Point {
    center + Vec2::new(angle.sin(), -angle.cos()) * 50.0
}

fn drill_demo() -> HtmlSection {
    let view = Rect::new(0.0, 0.0, 640.0, 400.0);
    let mut page = DrillPage::new();
    let mut svgs = String::new();

    run_until_settled(|dt| page.tick(dt));
    svgs.push_str(&snapshot(view, page.frame()));

    // Drill into the largest wedge: hover it, click it, catch the
    // transition mid-flight, then let it settle.
    let center = page.surface().center();
    // The sorted layout places the largest wedge first, starting at angle 0.
    let target = at_angle(center, 0.8);
    page.pointer_move(target);
    page.click(target);
    run_frames(|dt| page.tick(dt), 8);
    svgs.push_str(&snapshot(view, page.frame()));
    run_until_settled(|dt| page.tick(dt));
    svgs.push_str(&snapshot(view, page.frame()));

    // And back out again.
    let had_back = page.can_go_back();
    page.back();
    run_until_settled(|dt| page.tick(dt));
    svgs.push_str(&snapshot(view, page.frame()));

    HtmlSection {
        title: "Donut drill-down",
        description: format!(
            "Click a wedge to descend into its children; the new level grows out of the \
             clicked point. Frames: settled root, mid-transition after a click, settled \
             child level (Back shown: {had_back}), and back at the root (depth {}).",
            page.depth()
        ),
        svg: svgs,
    }
}

fn drag_demo() -> HtmlSection {
    let view = Rect::new(0.0, 0.0, 300.0, 300.0);
    let mut page = DragPage::new();
    let mut svgs = String::new();

    run_until_settled(|dt| page.tick(dt));
    svgs.push_str(&snapshot(view, page.frame()));

    // Grab the first wedge and haul it across its neighbor.
    let center = page.surface().center();
    page.pointer_down(at_angle(center, 0.7));
    for step in 0..12 {
        page.pointer_move(at_angle(center, 0.7 + 0.12 * f64::from(step)));
        run_frames(|dt| page.tick(dt), 2);
    }
    svgs.push_str(&snapshot(view, page.frame()));

    page.pointer_up();
    run_until_settled(|dt| page.tick(dt));
    svgs.push_str(&snapshot(view, page.frame()));

    // Rename an item through the edit form.
    page.click(at_angle(center, 0.3));
    if page.editing().is_some() {
        page.submit_edit("Renamed", 120.0);
    }
    run_until_settled(|dt| page.tick(dt));
    svgs.push_str(&snapshot(view, page.frame()));

    HtmlSection {
        title: "Donut drag-to-reorder",
        description: format!(
            "Drag a wedge around the ring; crossing a neighbor's mid-angle swaps the two \
             items, and releasing snaps the wedge to its reordered slot. Final order: {}.",
            page.order().join(", ")
        ),
        svg: svgs,
    }
}

fn graph_demo() -> HtmlSection {
    let view = Rect::new(0.0, 0.0, 640.0, 400.0);
    let mut page = GraphPage::new(|x: f64| x.powi(2) / 10.0);
    let mut svgs = String::new();

    // Catch the draw-from-left enter mid-flight.
    run_frames(|dt| page.tick(dt), 6);
    svgs.push_str(&snapshot(view, page.frame()));
    run_until_settled(|dt| page.tick(dt));
    svgs.push_str(&snapshot(view, page.frame()));

    // "Type" a new equation.
    page.set_function(|x: f64| x.sin() * 5.0);
    svgs.push_str(&snapshot(view, page.frame()));

    HtmlSection {
        title: "Function graph",
        description: String::from(
            "A sampled function plotted over axes that cross at the origin, drawing itself \
             in from the left. Entering a new equation resamples the curve.",
        ),
        svg: svgs,
    }
}

fn contributions_demo() -> HtmlSection {
    let view = Rect::new(0.0, 0.0, 640.0, 400.0);
    let mut page = ContributionsPage::new(contrib_page::demo_days());
    let mut svgs = String::new();

    svgs.push_str(&snapshot(view, page.frame()));

    // Hover a day, then pin it.
    let x = page.chart().x_scale().map(140.4);
    let y = page.chart().y_scale().map(3.0);
    page.pointer_move(Point::new(x, y));
    svgs.push_str(&snapshot(view, page.frame()));
    page.click();
    svgs.push_str(&snapshot(view, page.frame()));
    let pinned = matches!(page.hover_state(), cruller_charts::HoverState::Pinned(_));
    page.close();

    HtmlSection {
        title: "Contributions",
        description: format!(
            "A year of activity as a line chart: hovering snaps to the day under the \
             pointer, clicking pins an info card (pinned during snapshot: {pinned}). \
             Total contributions: {}.",
            page.total_contributions()
        ),
        svg: svgs,
    }
}

fn tutorial_demo() -> HtmlSection {
    let view = Rect::new(0.0, 0.0, 640.0, 360.0);
    let (mut tut, targets) = tutorial::demo_tutorial();
    let mut svgs = String::new();

    svgs.push_str(&snapshot(view, tutorial::demo_frame(&tut, &targets)));
    tut.next();
    svgs.push_str(&snapshot(view, tutorial::demo_frame(&tut, &targets)));
    tut.next();
    svgs.push_str(&snapshot(view, tutorial::demo_frame(&tut, &targets)));

    HtmlSection {
        title: "Tutorial overlay",
        description: format!(
            "A step-by-step overlay anchored to page regions; Next and Back move the \
             highlight bubble between targets (finishing on step {}).",
            tut.current_step()
        ),
        svg: svgs,
    }
}
