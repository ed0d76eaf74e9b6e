// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use peniko::Brush;

use crate::{
    AxisConfig, AxisError, AxisPlacement, AxisStyle, DrawCommand, EllipsizeMode,
    HeuristicTextMeasurer, MeasureError, StepCount, StrokeStyle, TextMeasurer, TextMetrics,
    TextStyle, TickRenderer, XAxis,
};

fn sample_points() -> [Point; 3] {
    [
        Point::new(0.0, 1.0),
        Point::new(5.0, 3.0),
        Point::new(10.0, 2.0),
    ]
}

fn axis(steps: u32) -> XAxis {
    XAxis::new(AxisConfig {
        step_count: StepCount::new(steps).unwrap(),
        step_size: 30.0,
        label_padding: 4.0,
        indicator_length: 5.0,
        style: AxisStyle {
            label: TextStyle::new(10.0),
            line: StrokeStyle::solid(Brush::default(), 1.0),
            ..AxisStyle::default()
        },
        ..AxisConfig::default()
    })
    .unwrap()
}

/// Every glyph is 5 wide; height grows by 2 per character so longer labels are taller.
struct GrowingMeasurer;

impl TextMeasurer for GrowingMeasurer {
    fn measure(&self, text: &str, _: TextStyle) -> Result<TextMetrics, MeasureError> {
        let n = text.chars().count() as f64;
        Ok(TextMetrics {
            advance_width: 5.0 * n,
            ascent: 2.0 * n,
            descent: 0.0,
            leading: 0.0,
        })
    }
}

struct MissingFont;

impl TextMeasurer for MissingFont {
    fn measure(&self, _: &str, style: TextStyle) -> Result<TextMetrics, MeasureError> {
        Err(MeasureError::FontUnavailable {
            family: style.font_family.as_css_family().to_string(),
        })
    }
}

#[derive(Default)]
struct Recorder {
    lines: Vec<Line>,
    texts: Vec<String>,
}

impl TickRenderer for Recorder {
    fn draw_line(&mut self, line: Line, _: &StrokeStyle) {
        self.lines.push(line);
    }

    fn draw_text(&mut self, text: &str, _: Point, _: &TextStyle, _: &Brush) {
        self.texts.push(text.to_string());
    }
}

#[test]
fn sample_points_produce_evenly_spaced_labelled_ticks() {
    let layout = axis(5)
        .layout(&HeuristicTextMeasurer, &AxisPlacement::at(20.0), &sample_points())
        .unwrap();

    assert_eq!((layout.scale.min, layout.scale.max, layout.scale.step), (0.0, 10.0, 2.0));
    assert_eq!(layout.ticks.len(), 6);

    let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.text.as_str()).collect();
    assert_eq!(labels, ["0", "2", "4", "6", "8", "10"]);

    let xs: Vec<f64> = layout.tick_positions().collect();
    assert_eq!(xs, [20.0, 80.0, 140.0, 200.0, 260.0, 320.0]);
}

#[test]
fn tick_positions_are_non_decreasing_with_uniform_spacing() {
    let points = [Point::new(-7.0, 0.0), Point::new(31.0, 0.0)];
    for zoom in [0.25, 1.0, 3.5] {
        for steps in 1..=9 {
            let axis = axis(steps);
            let placement = AxisPlacement {
                zoom,
                scroll_offset: 12.0,
                ..AxisPlacement::at(40.0)
            };
            let layout = axis
                .layout(&HeuristicTextMeasurer, &placement, &points)
                .unwrap();
            let spacing = 30.0 * zoom * layout.scale.step;
            let xs: Vec<f64> = layout.tick_positions().collect();
            assert_eq!(xs.len(), steps as usize + 1, "tick count for {steps} steps");
            assert!((xs[0] - 28.0).abs() < 1e-9, "first tick honors scroll offset");
            for pair in xs.windows(2) {
                assert!(pair[1] >= pair[0], "positions decrease: {xs:?}");
                assert!(
                    (pair[1] - pair[0] - spacing).abs() < 1e-9,
                    "spacing {} != {spacing}",
                    pair[1] - pair[0]
                );
            }
        }
    }
}

#[test]
fn empty_points_stack_every_tick_at_the_start() {
    let layout = axis(4)
        .layout(&HeuristicTextMeasurer, &AxisPlacement::at(10.0), &[])
        .unwrap();
    assert_eq!(layout.scale.step, 0.0);
    assert_eq!(layout.ticks.len(), 5);
    assert!(layout.ticks.iter().all(|t| t.x == 10.0 && t.label.text == "0"));
}

#[test]
fn axis_line_and_indicators_follow_each_tick() {
    let layout = axis(2)
        .layout(&HeuristicTextMeasurer, &AxisPlacement::at(0.0), &sample_points())
        .unwrap();
    // step = ceil(10 / 2) = 5, spacing = 150
    let mut recorder = Recorder::default();
    layout.render(&mut recorder);

    assert_eq!(recorder.texts, ["0", "5", "10"]);
    assert_eq!(
        recorder.lines,
        [
            Line::new((0.0, 0.0), (150.0, 0.0)),
            Line::new((0.0, 0.0), (0.0, 5.0)),
            Line::new((150.0, 0.0), (300.0, 0.0)),
            Line::new((150.0, 0.0), (150.0, 5.0)),
            Line::new((300.0, 0.0), (450.0, 0.0)),
            Line::new((300.0, 0.0), (300.0, 5.0)),
        ]
    );
}

#[test]
fn disabling_the_axis_line_leaves_only_labels() {
    let axis = XAxis::new(AxisConfig {
        line_required: false,
        ..axis(3).config().clone()
    })
    .unwrap();
    let layout = axis
        .layout(&HeuristicTextMeasurer, &AxisPlacement::at(0.0), &sample_points())
        .unwrap();
    assert_eq!(layout.commands().count(), 4);
    assert!(
        layout
            .commands()
            .all(|c| matches!(c, DrawCommand::Text { .. }))
    );
}

#[test]
fn bar_chart_line_starts_before_the_first_tick() {
    let placement = AxisPlacement {
        line_start: 0.0,
        ..AxisPlacement::at(25.0)
    };
    let layout = axis(1)
        .layout(&HeuristicTextMeasurer, &placement, &sample_points())
        .unwrap();
    let Some(DrawCommand::Line { line, .. }) = &layout.leading_line else {
        panic!("expected a leading line, got {:?}", layout.leading_line);
    };
    assert_eq!(*line, Line::new((0.0, 0.0), (25.0, 0.0)));
    assert_eq!(layout.commands().next(), layout.leading_line.as_ref());

    let aligned = axis(1)
        .layout(&HeuristicTextMeasurer, &AxisPlacement::at(25.0), &sample_points())
        .unwrap();
    assert!(aligned.leading_line.is_none());
}

#[test]
fn reserved_height_is_the_maximum_band_height() {
    let points = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
    let layout = axis(4)
        .layout(&GrowingMeasurer, &AxisPlacement::at(0.0), &points)
        .unwrap();
    // Labels 0, 25, 50, 75, 100: the three-character label is tallest (6).
    // 6 + line 1 + indicator 5 + padding 4
    assert_eq!(layout.reserved_height, 16.0);
    let max_band = layout
        .ticks
        .iter()
        .map(|t| t.label.band_height)
        .fold(0.0, f64::max);
    assert_eq!(layout.reserved_height, max_band);
    assert!(layout.ticks[0].label.band_height < layout.reserved_height);
}

#[test]
fn ellipsized_labels_fit_one_step() {
    let axis = XAxis::new(AxisConfig {
        ellipsize_label: true,
        ellipsize_mode: EllipsizeMode::End,
        label_formatter: Arc::new(|v: i64| std::format!("day {v} of the trip")),
        ..axis(5).config().clone()
    })
    .unwrap();
    let layout = axis
        .layout(&HeuristicTextMeasurer, &AxisPlacement::at(0.0), &sample_points())
        .unwrap();
    for tick in &layout.ticks {
        assert!(tick.label.overflows);
        let width = HeuristicTextMeasurer
            .measure(&tick.label.text, TextStyle::new(10.0))
            .unwrap()
            .advance_width;
        assert!(width <= 30.0, "{:?} is {width} wide", tick.label.text);
        assert!(tick.label.text.ends_with(crate::ELLIPSIS));
    }
}

#[test]
fn layout_is_deterministic() {
    let axis = axis(3);
    let placement = AxisPlacement::at(5.0);
    let a = axis
        .layout(&HeuristicTextMeasurer, &placement, &sample_points())
        .unwrap();
    let b = axis
        .layout(&HeuristicTextMeasurer, &placement, &sample_points())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn measurement_failures_reach_the_caller() {
    let err = axis(2)
        .layout(&MissingFont, &AxisPlacement::at(0.0), &sample_points())
        .unwrap_err();
    assert_eq!(
        err,
        AxisError::Measure(MeasureError::FontUnavailable {
            family: "sans-serif".to_string()
        })
    );
}

#[test]
fn invalid_inputs_are_rejected_before_layout() {
    let err = XAxis::new(AxisConfig {
        step_size: f64::NAN,
        ..AxisConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, AxisError::InvalidConfiguration { .. }));

    let placement = AxisPlacement {
        zoom: -1.0,
        ..AxisPlacement::default()
    };
    let err = axis(2)
        .layout(&HeuristicTextMeasurer, &placement, &sample_points())
        .unwrap_err();
    assert!(matches!(err, AxisError::InvalidConfiguration { .. }));
}
