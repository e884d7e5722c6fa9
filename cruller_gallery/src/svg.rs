// Copyright 2026 the Cruller Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `cruller_gallery`.

use cruller_core::{Frame, MarkPayload, TextAnchor, TextBaseline};
use kurbo::Rect;
use peniko::Brush;

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn with_view_box(view_box: Rect) -> Self {
        Self {
            view_box: Some(view_box),
        }
    }

    pub(crate) fn render(&self, frame: Frame) -> String {
        // An explicit view box wins outright: pages size their surface and
        // rely on the viewport clipping off-plot geometry.
        let view_box = self
            .view_box
            .or_else(|| computed_view_box(&frame))
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));

        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for mark in frame.sorted() {
            match &mark.payload {
                MarkPayload::Path(p) => {
                    let d = p.path.to_svg();
                    out.push_str(&format!(r#"<path d="{d}""#));
                    write_paint_attr(&mut out, "fill", &p.fill);
                    if p.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &p.stroke);
                        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    }
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                        TextBaseline::Ideographic => "ideographic",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        t.pos.x, t.pos.y, t.font_size, baseline
                    ));
                    if t.angle != 0.0 {
                        out.push_str(&format!(
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        ));
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn computed_view_box(frame: &Frame) -> Option<Rect> {
    let mut rect: Option<Rect> = None;
    for mark in frame.marks() {
        let b = match &mark.payload {
            MarkPayload::Text(t) => estimate_text_bounds_anchored(
                t.pos.x,
                t.pos.y,
                t.font_size,
                t.anchor,
                t.baseline,
                &t.text,
            ),
            other => match other.bounds() {
                Some(b) => b,
                None => continue,
            },
        };
        rect = Some(match rect {
            None => b,
            Some(r) => r.union(b),
        });
    }

    rect.map(|r| {
        // Add a small padding margin.
        let pad = 10.0;
        Rect::new(r.x0 - pad, r.y0 - pad, r.x1 + pad, r.y1 + pad)
    })
}

fn estimate_text_bounds_anchored(
    x: f64,
    y: f64,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    text: &str,
) -> Rect {
    // Very rough heuristic: assume ~0.6em average glyph width.
    //
    // `y` is interpreted according to the given baseline; we approximate a
    // midline from it.
    let glyph_w = 0.6 * font_size;
    let width = glyph_w * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let y_midline = match baseline {
        TextBaseline::Middle => y,
        // Approximate ascent/descent splits; this is only for demo SVG
        // viewBox computation.
        TextBaseline::Alphabetic => y - 0.3 * font_size,
        TextBaseline::Hanging => y + 0.3 * font_size,
        TextBaseline::Ideographic => y - 0.2 * font_size,
    };
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - width / 2.0, x + width / 2.0),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y_midline - half_height, x1, y_midline + half_height)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use cruller_core::{Mark, MarkId, TextMark};
    use kurbo::Point;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn renders_text_with_escapes() {
        let mut frame = Frame::new();
        frame.push(Mark::text(
            MarkId::from_raw(1),
            0,
            TextMark {
                pos: Point::new(5.0, 5.0),
                text: String::from("a<b & c"),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                fill: css::BLACK.into(),
            },
        ));
        let svg = SvgScene::default().render(frame);
        assert!(svg.contains("a&lt;b &amp; c"));
        assert!(svg.contains("<svg "));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn explicit_view_box_wins() {
        let frame = Frame::new();
        let svg = SvgScene::with_view_box(Rect::new(0.0, 0.0, 300.0, 300.0)).render(frame);
        assert!(svg.contains(r#"viewBox="0 0 300 300""#));
    }
}
