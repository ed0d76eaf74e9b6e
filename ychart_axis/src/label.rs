// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label layout.

extern crate alloc;

use alloc::string::String;

use ychart_text::TextMeasurer;

use crate::config::AxisConfig;
use crate::error::AxisResult;
use crate::scale::AxisScale;

/// Layout of one tick label.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    /// Text as displayed: the formatted label, ellipsized when configured and needed.
    pub text: String,
    /// Measured advance width of [`text`](Self::text).
    pub width: f64,
    /// Line height of the formatted label.
    pub height: f64,
    /// Left edge of the label; the label is centered on its tick.
    pub draw_x: f64,
    /// Vertical position of the label below the axis line.
    pub draw_y: f64,
    /// Whether the formatted label is wider than one step.
    ///
    /// Without ellipsizing such a label is drawn as-is and overlaps its neighbors.
    pub overflows: bool,
    /// Vertical space this tick needs: label, padding and (if drawn) axis line
    /// and indicator.
    pub band_height: f64,
}

pub(crate) fn layout_label(
    config: &AxisConfig,
    measurer: &dyn TextMeasurer,
    index: u32,
    scale: &AxisScale,
    x: f64,
) -> AxisResult<TickLabel> {
    let raw = (config.label_formatter)(scale.tick_value(index));
    let style = config.style.label.clone();
    let raw_metrics = measurer.measure(&raw, style.clone())?;
    let overflows = raw_metrics.advance_width > config.step_size;

    let (text, width) = if config.ellipsize_label && overflows {
        let text = measurer.ellipsize(&raw, style.clone(), config.step_size, config.ellipsize_mode)?;
        let width = measurer.measure(&text, style)?.advance_width;
        log::trace!("tick {index}: label {raw:?} ellipsized to {text:?}");
        (text, width)
    } else {
        if overflows {
            log::trace!(
                "tick {index}: label {raw:?} ({} wide) overflows step of {}",
                raw_metrics.advance_width,
                config.step_size
            );
        }
        (raw, raw_metrics.advance_width)
    };

    let height = raw_metrics.line_height();
    let band_height = if config.line_required {
        height + config.line_thickness() + config.indicator_length + config.label_padding
    } else {
        height + config.label_padding
    };

    Ok(TickLabel {
        text,
        width,
        height,
        draw_x: x - width / 2.0,
        draw_y: height / 2.0 + config.indicator_length + config.label_padding,
        overflows,
        band_height,
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::sync::Arc;

    use ychart_text::{EllipsizeMode, HeuristicTextMeasurer, TextStyle};

    use super::*;
    use crate::config::AxisStyle;

    fn config() -> AxisConfig {
        AxisConfig {
            step_size: 30.0,
            label_padding: 4.0,
            indicator_length: 5.0,
            style: AxisStyle {
                label: TextStyle::new(10.0),
                ..AxisStyle::default()
            },
            ..AxisConfig::default()
        }
    }

    fn scale(step: f64) -> AxisScale {
        AxisScale {
            min: 0.0,
            max: 0.0,
            step,
        }
    }

    #[test]
    fn label_text_comes_from_index_times_step() {
        let label = layout_label(&config(), &HeuristicTextMeasurer, 3, &scale(2.0), 100.0).unwrap();
        assert_eq!(label.text, "6");
        assert!((label.width - 6.0).abs() < 1e-9);
        assert!((label.draw_x - 97.0).abs() < 1e-9);
        assert!(!label.overflows);
    }

    #[test]
    fn fractional_products_are_floored() {
        let label = layout_label(&config(), &HeuristicTextMeasurer, 3, &scale(1.5), 0.0).unwrap();
        assert_eq!(label.text, "4");
    }

    #[test]
    fn band_height_includes_line_and_indicator_only_when_drawn() {
        // height 10, padding 4, line 2, indicator 5
        let with_line = layout_label(&config(), &HeuristicTextMeasurer, 0, &scale(1.0), 0.0).unwrap();
        assert!((with_line.band_height - 21.0).abs() < 1e-9);
        assert!((with_line.draw_y - 14.0).abs() < 1e-9);

        let without_line = AxisConfig {
            line_required: false,
            ..config()
        };
        let label = layout_label(&without_line, &HeuristicTextMeasurer, 0, &scale(1.0), 0.0).unwrap();
        assert!((label.band_height - 14.0).abs() < 1e-9);
    }

    #[test]
    fn overflowing_label_is_kept_without_ellipsizing() {
        let config = AxisConfig {
            label_formatter: Arc::new(|v: i64| std::format!("value {v}")),
            ..config()
        };
        let label = layout_label(&config, &HeuristicTextMeasurer, 1, &scale(1.0), 0.0).unwrap();
        assert_eq!(label.text, "value 1");
        assert!(label.overflows);
        assert!(label.width > config.step_size);
    }

    #[test]
    fn ellipsized_label_fits_within_one_step() {
        let config = AxisConfig {
            ellipsize_label: true,
            ellipsize_mode: EllipsizeMode::Middle,
            label_formatter: Arc::new(|v: i64| std::format!("{v} kilometres")),
            ..config()
        };
        let label = layout_label(&config, &HeuristicTextMeasurer, 2, &scale(5.0), 50.0).unwrap();
        assert!(label.overflows);
        assert!(label.width <= config.step_size, "{label:?}");
        assert_eq!(label.text, "10\u{2026}es");
        // Height still reflects the label font, not the shortened text.
        assert!((label.height - 10.0).abs() < 1e-9);
        assert!((label.draw_x - (50.0 - label.width / 2.0)).abs() < 1e-9);
    }
}
