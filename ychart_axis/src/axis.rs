// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal axis layout.
//!
//! An [`XAxis`] turns a point list into a fixed number of evenly spaced ticks.
//! Each layout pass:
//! 1. computes the [`AxisScale`] from the data,
//! 2. walks the ticks `0..=steps`, laying out each label and emitting the axis
//!    line segment and indicator for that tick, and
//! 3. returns the reserved axis height as part of the [`AxisLayout`].
//!
//! Coordinates are relative to the axis band: `y = 0` is the axis line and
//! labels sit below it.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;
use ychart_text::TextMeasurer;

use crate::config::{AxisConfig, AxisPlacement};
use crate::draw::{DrawCommand, TickRenderer};
use crate::error::AxisResult;
use crate::label::{TickLabel, layout_label};
use crate::scale::AxisScale;

/// A validated horizontal axis.
#[derive(Clone, Debug)]
pub struct XAxis {
    config: AxisConfig,
}

/// Layout of one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLayout {
    /// Tick index, `0..=steps`.
    pub index: u32,
    /// X position of the tick in scene coordinates.
    pub x: f64,
    /// The tick label.
    pub label: TickLabel,
    /// Commands for this tick: the label, then (if the axis line is drawn) the
    /// line segment to the next tick and the indicator.
    pub commands: SmallVec<[DrawCommand; 3]>,
}

/// The result of one axis layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    /// The scale used for this pass.
    pub scale: AxisScale,
    /// Axis line drawn ahead of the first tick, when the line starts before it.
    pub leading_line: Option<DrawCommand>,
    /// All `steps + 1` ticks, in order.
    pub ticks: Vec<TickLayout>,
    /// Height the axis band needs: the maximum tick band height.
    pub reserved_height: f64,
}

impl AxisLayout {
    /// Iterates every draw command in emission order.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.leading_line
            .iter()
            .chain(self.ticks.iter().flat_map(|t| t.commands.iter()))
    }

    /// Replays all draw commands on `renderer`.
    pub fn render(&self, renderer: &mut dyn TickRenderer) {
        for command in self.commands() {
            command.render(renderer);
        }
    }

    /// Iterates tick x positions.
    pub fn tick_positions(&self) -> impl Iterator<Item = f64> {
        self.ticks.iter().map(|t| t.x)
    }
}

impl XAxis {
    /// Validates `config` and creates an axis from it.
    pub fn new(config: AxisConfig) -> AxisResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the axis configuration.
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Computes the scale of this axis for `points`.
    pub fn scale(&self, points: &[Point]) -> AxisScale {
        AxisScale::from_points(points, self.config.step_count)
    }

    /// Distance between consecutive ticks for the given placement and scale.
    pub fn tick_spacing(&self, placement: &AxisPlacement, scale: &AxisScale) -> f64 {
        self.config.step_size * (placement.zoom * scale.step)
    }

    /// Lays out the label of tick `index` centered at `x`.
    pub fn layout_tick(
        &self,
        measurer: &dyn TextMeasurer,
        index: u32,
        scale: &AxisScale,
        x: f64,
    ) -> AxisResult<TickLabel> {
        layout_label(&self.config, measurer, index, scale, x)
    }

    /// Lays out every tick of the axis for `points`.
    pub fn layout(
        &self,
        measurer: &dyn TextMeasurer,
        placement: &AxisPlacement,
        points: &[Point],
    ) -> AxisResult<AxisLayout> {
        placement.validate()?;

        let config = &self.config;
        let scale = self.scale(points);
        let spacing = self.tick_spacing(placement, &scale);
        let stroke = &config.style.line;
        let mut x = placement.start - placement.scroll_offset;

        let leading_line = (placement.line_start != placement.start)
            .then(|| DrawCommand::line((placement.line_start, 0.0), (x, 0.0), stroke));

        let steps = config.step_count.get();
        let mut ticks = Vec::with_capacity(steps as usize + 1);
        let mut reserved_height = 0.0_f64;
        for index in 0..=steps {
            let label = self.layout_tick(measurer, index, &scale, x)?;
            reserved_height = reserved_height.max(label.band_height);

            let mut commands = SmallVec::new();
            commands.push(DrawCommand::Text {
                text: label.text.clone(),
                origin: Point::new(label.draw_x, label.draw_y),
                style: config.style.label.clone(),
                fill: config.style.label_fill.clone(),
            });
            if config.line_required {
                commands.push(DrawCommand::line((x, 0.0), (x + spacing, 0.0), stroke));
                commands.push(DrawCommand::line(
                    (x, 0.0),
                    (x, config.indicator_length),
                    stroke,
                ));
            }

            ticks.push(TickLayout {
                index,
                x,
                label,
                commands,
            });
            x += spacing;
        }

        log::debug!(
            "x axis layout: {} ticks, spacing {spacing}, reserved height {reserved_height}",
            ticks.len()
        );
        Ok(AxisLayout {
            scale,
            leading_line,
            ticks,
            reserved_height,
        })
    }
}
