// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis layout.
//!
//! Axis layout needs label extents (to center labels under ticks and to reserve
//! the axis band height) and a way to shorten labels that do not fit within one
//! tick step. Shaping and glyph rendering stay with the host toolkit, so axis
//! code depends only on the small [`TextMeasurer`] interface defined here.
//!
//! This crate is:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned strings), and
//! - renderer-agnostic (shaping engines and platform font metrics can both
//!   implement the same trait).

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use thiserror_no_std::Error;

/// The marker inserted where an ellipsized label was shortened.
pub const ELLIPSIS: char = '\u{2026}';

/// Errors reported by a text measurement backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// No font could be resolved for the requested family.
    #[error("no font available for family `{family}`")]
    FontUnavailable {
        /// The CSS-style family name that failed to resolve.
        family: String,
    },
}

/// Where to place the ellipsis when a label is shortened.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EllipsizeMode {
    /// Keep the tail of the text: `…6789`.
    Start,
    /// Keep the head and tail of the text: `12…89`.
    Middle,
    /// Keep the head of the text: `1234…`.
    #[default]
    End,
}

impl EllipsizeMode {
    /// Builds a candidate keeping `keep` characters of `chars` plus the ellipsis.
    fn elide(self, chars: &[char], keep: usize) -> String {
        let keep = keep.min(chars.len());
        let n = chars.len();
        let mut out = String::with_capacity(keep + ELLIPSIS.len_utf8());
        match self {
            Self::End => {
                out.extend(&chars[..keep]);
                out.push(ELLIPSIS);
            }
            Self::Start => {
                out.push(ELLIPSIS);
                out.extend(&chars[n - keep..]);
            }
            Self::Middle => {
                let head = keep.div_ceil(2);
                let tail = keep / 2;
                out.extend(&chars[..head]);
                out.push(ELLIPSIS);
                out.extend(&chars[n - tail..]);
            }
        }
        out
    }
}

/// A minimal text measurement interface used by axis layout.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley), or
/// - backed by platform font metrics.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: TextStyle) -> Result<TextMetrics, MeasureError>;

    /// Shorten `text` so that its advance width fits within `max_width`.
    ///
    /// Text that already fits is returned unchanged. Otherwise the longest
    /// candidate (as many original characters as possible plus [`ELLIPSIS`],
    /// placed according to `mode`) whose measured width is at most `max_width`
    /// is returned. If not even the bare ellipsis fits, the result is empty.
    ///
    /// The default implementation binary-searches the kept character count and
    /// assumes that measured width grows with the number of characters.
    fn ellipsize(
        &self,
        text: &str,
        style: TextStyle,
        max_width: f64,
        mode: EllipsizeMode,
    ) -> Result<String, MeasureError> {
        if self.measure(text, style.clone())?.advance_width <= max_width {
            return Ok(String::from(text));
        }

        let chars: Vec<char> = text.chars().collect();
        let mut best = None;
        let mut lo = 0_usize;
        let mut hi = chars.len().saturating_sub(1);
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            let candidate = mode.elide(&chars, mid);
            if self.measure(&candidate, style.clone())?.advance_width <= max_width {
                best = Some(candidate);
                lo = mid + 1;
            } else if mid == 0 {
                break;
            } else {
                hi = mid - 1;
            }
        }
        Ok(best.unwrap_or_default())
    }
}

/// Text styling inputs relevant to measurement.
///
/// Just enough to keep axis layout consistent between measurement and drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart’s coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(14.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Roboto"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A tiny heuristic text measurer suitable for tests, demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em. It
/// never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> Result<TextMetrics, MeasureError> {
        let advance_width = 0.6 * style.font_size * text.chars().count() as f64;
        Ok(TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        })
    }
}
