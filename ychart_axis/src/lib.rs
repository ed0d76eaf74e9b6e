// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis tick-scale computation and label layout for YChart.
//!
//! Bar, line and wave charts share one horizontal axis model:
//! - an [`AxisScale`] derived from the chart's points and a fixed step count,
//! - `steps + 1` evenly spaced ticks whose labels come from a formatter,
//! - labels measured through a [`TextMeasurer`] and optionally ellipsized to
//!   fit one step, and
//! - a reserved axis height returned from each layout pass.
//!
//! Layout produces [`DrawCommand`]s; the host toolkit replays them through a
//! [`TickRenderer`]. Shaping, theming and gesture handling are out of scope.
//!
//! ```
//! use kurbo::Point;
//! use ychart_axis::{AxisConfig, AxisPlacement, HeuristicTextMeasurer, StepCount, XAxis};
//!
//! let axis = XAxis::new(AxisConfig {
//!     step_count: StepCount::new(5)?,
//!     ..AxisConfig::default()
//! })?;
//! let points = [Point::new(0.0, 1.0), Point::new(5.0, 3.0), Point::new(10.0, 2.0)];
//! let layout = axis.layout(&HeuristicTextMeasurer, &AxisPlacement::at(0.0), &points)?;
//! assert_eq!(layout.scale.step, 2.0);
//! assert_eq!(layout.ticks[3].label.text, "6");
//! # Ok::<(), ychart_axis::AxisError>(())
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
#[cfg(test)]
mod axis_tests;
mod config;
mod draw;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod label;
mod scale;

pub use axis::{AxisLayout, TickLayout, XAxis};
pub use config::{AxisConfig, AxisPlacement, AxisStyle, LabelFormatter, StepCount, StrokeStyle};
pub use draw::{DrawCommand, TickRenderer};
pub use error::{AxisError, AxisResult};
pub use label::TickLabel;
pub use scale::AxisScale;
pub use ychart_text::{
    ELLIPSIS, EllipsizeMode, FontFamily, FontStyle, FontWeight, HeuristicTextMeasurer,
    MeasureError, TextMeasurer, TextMetrics, TextStyle,
};
