// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG output for `ychart_demo`.

use std::fmt::Write as _;

use kurbo::{Line, Point, Rect};
use peniko::Brush;
use ychart_axis::{StrokeStyle, TextStyle, TickRenderer};

/// Collects axis draw commands as SVG elements.
#[derive(Debug, Default)]
pub(crate) struct SvgRenderer {
    body: String,
    bounds: Option<Rect>,
}

impl SvgRenderer {
    pub(crate) fn to_svg_string(&self, min_height: f64) -> String {
        let b = self.bounds.unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 0.0));
        let pad = 10.0;
        let view_box = Rect::new(
            b.x0 - pad,
            b.y0.min(0.0) - pad,
            b.x1 + pad,
            b.y1.max(min_height) + pad,
        );

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn include(&mut self, r: Rect) {
        self.bounds = Some(match self.bounds {
            None => r,
            Some(b) => b.union(r),
        });
    }
}

impl TickRenderer for SvgRenderer {
    fn draw_line(&mut self, line: Line, stroke: &StrokeStyle) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y, stroke.stroke_width
        );
        write_paint_attr(&mut self.body, "stroke", &stroke.brush);
        self.body.push_str("/>\n");
        self.include(Rect::from_points(line.p0, line.p1));
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle, fill: &Brush) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}""#,
            origin.x,
            origin.y,
            style.font_size,
            style.font_family.as_css_family()
        );
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");

        // Rough extent for the view box: ~0.6em per glyph, baseline at `origin.y`.
        let width = 0.6 * style.font_size * text.chars().count() as f64;
        self.include(Rect::new(
            origin.x,
            origin.y - style.font_size,
            origin.x + width,
            origin.y + 0.25 * style.font_size,
        ));
    }
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
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
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
