// Copyright 2025 the YChart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by axis configuration and layout.

use thiserror_no_std::Error;
use ychart_text::MeasureError;

/// Error type for axis configuration and layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AxisError {
    /// The caller supplied a configuration or placement that violates the axis contract.
    #[error("invalid axis configuration: {reason}")]
    InvalidConfiguration {
        /// What was rejected.
        reason: &'static str,
    },

    /// The text measurement backend failed.
    #[error("label measurement failed: {0}")]
    Measure(#[from] MeasureError),
}

/// Result type for axis operations.
pub type AxisResult<T> = Result<T, AxisError>;
