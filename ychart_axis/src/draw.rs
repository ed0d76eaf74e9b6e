// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw commands emitted by axis layout.
//!
//! Axis layout never touches a canvas. It produces a list of line and text
//! commands that a host replays through a [`TickRenderer`].

extern crate alloc;

use alloc::string::String;

use kurbo::{Line, Point};
use peniko::Brush;
use ychart_text::TextStyle;

use crate::config::StrokeStyle;

/// A drawing surface able to render axis lines and labels.
pub trait TickRenderer {
    /// Strokes a straight line segment.
    fn draw_line(&mut self, line: Line, stroke: &StrokeStyle);

    /// Draws a single line of text with its left edge at `origin.x`.
    ///
    /// `origin.y` is the label's vertical position measured down from the axis line.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle, fill: &Brush);
}

/// One drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A stroked line segment (axis line, tick indicator).
    Line {
        /// Segment in scene coordinates.
        line: Line,
        /// Stroke paint and width.
        stroke: StrokeStyle,
    },
    /// A tick label.
    Text {
        /// Label text as displayed (possibly ellipsized).
        text: String,
        /// Left edge / vertical position of the label.
        origin: Point,
        /// Font used for the label.
        style: TextStyle,
        /// Fill paint.
        fill: Brush,
    },
}

impl DrawCommand {
    /// Creates a line command.
    pub fn line(p0: impl Into<Point>, p1: impl Into<Point>, stroke: &StrokeStyle) -> Self {
        Self::Line {
            line: Line::new(p0, p1),
            stroke: stroke.clone(),
        }
    }

    /// Replays this command on `renderer`.
    pub fn render(&self, renderer: &mut dyn TickRenderer) {
        match self {
            Self::Line { line, stroke } => renderer.draw_line(*line, stroke),
            Self::Text {
                text,
                origin,
                style,
                fill,
            } => renderer.draw_text(text, *origin, style, fill),
        }
    }
}
