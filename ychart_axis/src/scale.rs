// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis step scale.
//!
//! An axis is divided into a fixed number of steps. The step scale is the data
//! span covered by one step, rounded up to a whole number so that consecutive
//! tick labels land on integral values.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

use crate::config::StepCount;

/// The `(min, max, step)` triple computed for an axis from its data.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisScale {
    /// Smallest data value on the axis (`0` without data).
    pub min: f64,
    /// Largest data value on the axis (`0` without data).
    pub max: f64,
    /// Data span represented by one tick-to-tick interval.
    pub step: f64,
}

impl AxisScale {
    /// Computes the scale of a horizontal axis from the `x` coordinates of `points`.
    ///
    /// An empty slice yields `(0, 0, 0)`.
    pub fn from_points(points: &[Point], steps: StepCount) -> Self {
        Self::from_values(points.iter().map(|p| p.x), steps)
    }

    /// Computes the scale of a vertical axis from the `y` coordinates of `points`.
    pub fn from_points_y(points: &[Point], steps: StepCount) -> Self {
        Self::from_values(points.iter().map(|p| p.y), steps)
    }

    /// Computes the scale for arbitrary data values.
    ///
    /// Non-finite values are ignored. With no finite values the axis collapses
    /// to `(0, 0, 0)`.
    pub fn from_values(values: impl IntoIterator<Item = f64>, steps: StepCount) -> Self {
        let bounds = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            });
        let (min, max) = bounds.unwrap_or((0.0, 0.0));
        let step = ((max - min) / f64::from(steps.get())).ceil();
        log::debug!("axis scale: min={min} max={max} steps={} step={step}", steps.get());
        Self { min, max, step }
    }

    /// Returns the data span `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the integral data value shown at tick `index`: `floor(index * step)`.
    pub fn tick_value(&self, index: u32) -> i64 {
        let v = (f64::from(index) * self.step).floor();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "float-to-int casts saturate; tick values beyond i64 are not meaningful"
        )]
        {
            v as i64
        }
    }
}
