// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart kinds and their axis setups.

use std::f64::consts::TAU;
use std::sync::Arc;

use kurbo::Point;
use peniko::color::palette::css;
use ychart_axis::{
    AxisConfig, AxisPlacement, AxisStyle, EllipsizeMode, StepCount, StrokeStyle, TextStyle,
};

/// The chart screens the demo can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ChartKind {
    Bar,
    /// Combined wave chart.
    Wave,
    Line,
}

/// Everything needed to lay out one chart's x axis.
#[derive(Debug)]
pub(crate) struct AxisScreen {
    pub(crate) title: &'static str,
    pub(crate) config: AxisConfig,
    pub(crate) placement: AxisPlacement,
    pub(crate) points: Vec<Point>,
}

impl ChartKind {
    pub(crate) const ALL: [Self; 3] = [Self::Bar, Self::Wave, Self::Line];

    /// Maps the numeric chart tags used by platform launchers.
    pub(crate) fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            1 => Some(Self::Bar),
            2 => Some(Self::Wave),
            3 => Some(Self::Line),
            _ => None,
        }
    }

    pub(crate) fn screen(self) -> AxisScreen {
        match self {
            Self::Bar => {
                // One bar per category; the axis line starts before the first bar.
                let points = (0..8).map(|i| Point::new(f64::from(i), f64::from(i % 3))).collect();
                AxisScreen {
                    title: "Bar chart",
                    config: AxisConfig {
                        step_count: steps(7),
                        step_size: 40.0,
                        ellipsize_label: true,
                        ellipsize_mode: EllipsizeMode::End,
                        label_formatter: Arc::new(|v: i64| format!("Category {v}")),
                        label_padding: 8.0,
                        ..AxisConfig::default()
                    },
                    placement: AxisPlacement {
                        line_start: 0.0,
                        ..AxisPlacement::at(30.0)
                    },
                    points,
                }
            }
            Self::Wave => {
                let points = (0..=60)
                    .map(|i| {
                        let x = f64::from(i);
                        Point::new(x, (x / 60.0 * TAU).sin())
                    })
                    .collect();
                AxisScreen {
                    title: "Wave chart",
                    config: AxisConfig {
                        step_count: steps(6),
                        step_size: 6.0,
                        label_formatter: Arc::new(|v: i64| format!("{v}s")),
                        label_padding: 6.0,
                        style: AxisStyle {
                            line: StrokeStyle::solid(css::STEEL_BLUE, 1.5),
                            label: TextStyle::new(12.0),
                            label_fill: css::STEEL_BLUE.into(),
                        },
                        ..AxisConfig::default()
                    },
                    placement: AxisPlacement::at(20.0),
                    points,
                }
            }
            Self::Line => {
                let points = [0.0, 1.2, 2.7, 4.1, 5.8, 7.3, 10.0]
                    .into_iter()
                    .map(|x| Point::new(x, x * 0.5))
                    .collect();
                AxisScreen {
                    title: "Line chart (zoomed, scrolled)",
                    config: AxisConfig {
                        step_count: steps(5),
                        step_size: 30.0,
                        ellipsize_label: true,
                        ellipsize_mode: EllipsizeMode::Middle,
                        label_formatter: Arc::new(|v: i64| format!("{v} km")),
                        ..AxisConfig::default()
                    },
                    placement: AxisPlacement {
                        scroll_offset: 15.0,
                        zoom: 1.5,
                        ..AxisPlacement::at(40.0)
                    },
                    points,
                }
            }
        }
    }
}

fn steps(n: u32) -> StepCount {
    StepCount::new(n).unwrap_or(StepCount::ONE)
}
