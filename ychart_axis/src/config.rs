// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis configuration.
//!
//! Configuration is a plain struct built with named fields (usually starting
//! from [`AxisConfig::default`]). It is validated once, when an
//! [`XAxis`](crate::XAxis) is created from it, and is read-only afterwards.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::num::NonZeroU32;

use peniko::Brush;
use peniko::color::palette::css;
use ychart_text::{EllipsizeMode, TextStyle};

use crate::error::{AxisError, AxisResult};

/// Formats the label for a tick, given the tick's integral data value.
pub type LabelFormatter = Arc<dyn Fn(i64) -> String>;

/// The number of steps an axis is divided into.
///
/// An axis with `n` steps has `n + 1` ticks. A step count is always at least one;
/// zero and negative counts are rejected when the value is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepCount(NonZeroU32);

impl StepCount {
    /// A single step (two ticks).
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates a step count, rejecting zero.
    pub fn new(steps: u32) -> AxisResult<Self> {
        NonZeroU32::new(steps)
            .map(Self)
            .ok_or(AxisError::InvalidConfiguration {
                reason: "step count must be at least 1",
            })
    }

    /// Returns the number of steps.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i32> for StepCount {
    type Error = AxisError;

    fn try_from(steps: i32) -> AxisResult<Self> {
        let steps = u32::try_from(steps).map_err(|_| AxisError::InvalidConfiguration {
            reason: "step count must be at least 1",
        })?;
        Self::new(steps)
    }
}

/// A paint + width pair for the axis line and tick indicators.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width (line thickness) in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 2.0)
    }
}

/// Axis line and label styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis line and tick indicators.
    pub line: StrokeStyle,
    /// Font used to measure and draw tick labels.
    pub label: TextStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let line = StrokeStyle::default();
        Self {
            label_fill: line.brush.clone(),
            line,
            label: TextStyle::new(14.0),
        }
    }
}

/// Configuration of a horizontal (x) axis.
#[derive(Clone)]
pub struct AxisConfig {
    /// Number of steps; the axis draws `step_count + 1` ticks.
    pub step_count: StepCount,
    /// Width of one step in scene coordinates, before zoom and step scaling.
    ///
    /// Ellipsized labels are shortened to fit this width.
    pub step_size: f64,
    /// Whether to draw the axis line and the tick indicators.
    pub line_required: bool,
    /// Whether labels wider than one step are shortened with an ellipsis.
    pub ellipsize_label: bool,
    /// Where the ellipsis goes when a label is shortened.
    pub ellipsize_mode: EllipsizeMode,
    /// Produces the label text for a tick value.
    pub label_formatter: LabelFormatter,
    /// Gap between the axis line (or indicator end) and the labels.
    pub label_padding: f64,
    /// Length of the perpendicular indicator stroke drawn at each tick.
    pub indicator_length: f64,
    /// Axis styling.
    pub style: AxisStyle,
}

impl core::fmt::Debug for AxisConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisConfig")
            .field("step_count", &self.step_count)
            .field("step_size", &self.step_size)
            .field("line_required", &self.line_required)
            .field("ellipsize_label", &self.ellipsize_label)
            .field("ellipsize_mode", &self.ellipsize_mode)
            .field("label_formatter", &"<fn>")
            .field("label_padding", &self.label_padding)
            .field("indicator_length", &self.indicator_length)
            .field("style", &self.style)
            .finish()
    }
}

impl Default for AxisConfig {
    /// One step of 30 units, axis line on, labels drawn as plain integers and
    /// never ellipsized.
    fn default() -> Self {
        Self {
            step_count: StepCount::ONE,
            step_size: 30.0,
            line_required: true,
            ellipsize_label: false,
            ellipsize_mode: EllipsizeMode::End,
            label_formatter: Arc::new(|value: i64| value.to_string()),
            label_padding: 15.0,
            indicator_length: 5.0,
            style: AxisStyle::default(),
        }
    }
}

impl AxisConfig {
    /// Returns the axis line thickness.
    pub fn line_thickness(&self) -> f64 {
        self.style.line.stroke_width
    }

    /// Checks every length in the configuration.
    ///
    /// Lengths must be finite and non-negative.
    pub fn validate(&self) -> AxisResult<()> {
        check_length(self.step_size, "step size must be finite and non-negative")?;
        check_length(
            self.label_padding,
            "label padding must be finite and non-negative",
        )?;
        check_length(
            self.indicator_length,
            "indicator length must be finite and non-negative",
        )?;
        check_length(
            self.line_thickness(),
            "line thickness must be finite and non-negative",
        )?;
        check_length(
            self.style.label.font_size,
            "label font size must be finite and non-negative",
        )?;
        Ok(())
    }
}

/// Where the axis sits within the host chart for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPlacement {
    /// X position of the first tick, before scrolling.
    pub start: f64,
    /// X position where the axis line begins.
    ///
    /// Bar charts start the line before the first bar; when this differs from
    /// [`start`](Self::start) a leading line segment is emitted.
    pub line_start: f64,
    /// Horizontal scroll offset subtracted from [`start`](Self::start).
    pub scroll_offset: f64,
    /// Zoom factor applied to the step width. Must be positive.
    pub zoom: f64,
}

impl Default for AxisPlacement {
    fn default() -> Self {
        Self {
            start: 0.0,
            line_start: 0.0,
            scroll_offset: 0.0,
            zoom: 1.0,
        }
    }
}

impl AxisPlacement {
    /// Placement starting the first tick and the axis line at `start`.
    pub fn at(start: f64) -> Self {
        Self {
            start,
            line_start: start,
            ..Self::default()
        }
    }

    /// Checks that all coordinates are finite and the zoom is positive.
    pub fn validate(&self) -> AxisResult<()> {
        if !(self.start.is_finite() && self.line_start.is_finite()) {
            return Err(AxisError::InvalidConfiguration {
                reason: "axis start positions must be finite",
            });
        }
        if !self.scroll_offset.is_finite() {
            return Err(AxisError::InvalidConfiguration {
                reason: "scroll offset must be finite",
            });
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(AxisError::InvalidConfiguration {
                reason: "zoom must be finite and positive",
            });
        }
        Ok(())
    }
}

fn check_length(value: f64, reason: &'static str) -> AxisResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AxisError::InvalidConfiguration { reason })
    }
}
