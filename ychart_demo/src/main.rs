// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis demos for `ychart_axis`.
//!
//! Lays out the x axis of each chart kind and writes the result to
//! `ychart_demo.html`. Pass a chart tag (`1` bar, `2` wave, `3` line) to render
//! a single chart.

mod chart;
mod svg;

use std::fmt::Write as _;

use chart::{AxisScreen, ChartKind};
use ychart_axis::{AxisError, TextMeasurer, XAxis};

struct Section {
    title: &'static str,
    summary: String,
    svg: String,
}

fn main() {
    let kinds = match std::env::args().nth(1) {
        None => ChartKind::ALL.to_vec(),
        Some(arg) => match arg.parse().ok().and_then(ChartKind::from_tag) {
            Some(kind) => vec![kind],
            None => {
                eprintln!("unknown chart tag {arg:?}; expected 1 (bar), 2 (wave) or 3 (line)");
                std::process::exit(2);
            }
        },
    };

    let measurer = demo_measurer();
    let mut sections = Vec::new();
    for kind in kinds {
        match render_axis(&*measurer, kind.screen()) {
            Ok(section) => sections.push(section),
            Err(err) => {
                eprintln!("{kind:?}: {err}");
                std::process::exit(1);
            }
        }
    }

    let html = render_report("YChart axis demo", &sections);
    std::fs::write("ychart_demo.html", html).expect("write ychart_demo.html");
    println!("wrote ychart_demo.html");
}

fn render_axis(measurer: &dyn TextMeasurer, screen: AxisScreen) -> Result<Section, AxisError> {
    let axis = XAxis::new(screen.config)?;
    let layout = axis.layout(measurer, &screen.placement, &screen.points)?;

    let mut renderer = svg::SvgRenderer::default();
    layout.render(&mut renderer);

    let scale = layout.scale;
    let ellipsized = layout
        .ticks
        .iter()
        .filter(|t| t.label.overflows && axis.config().ellipsize_label)
        .count();
    let summary = format!(
        "scale min={} max={} step={}; {} ticks; reserved height {:.1}; {} labels ellipsized",
        scale.min,
        scale.max,
        scale.step,
        layout.ticks.len(),
        layout.reserved_height,
        ellipsized
    );
    Ok(Section {
        title: screen.title,
        summary,
        svg: renderer.to_svg_string(layout.reserved_height),
    })
}

fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head><body>",
        svg::escape_xml(title)
    );
    let _ = writeln!(out, "<h1>{}</h1>", svg::escape_xml(title));
    for section in sections {
        let _ = writeln!(out, "<h2>{}</h2>", svg::escape_xml(section.title));
        let _ = writeln!(out, "<p>{}</p>", svg::escape_xml(&section.summary));
        out.push_str(&section.svg);
    }
    out.push_str("</body></html>\n");
    out
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(ychart_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(ychart_axis::HeuristicTextMeasurer)
    }
}
