//! Fatal error type.
//!
//! Only configuration/data mismatches that would silently corrupt a whole
//! output column are errors. Per-frame numeric failures are NaN or
//! empty-categorical sentinels, handled inside the metric calculators.

use thiserror::Error;

/// Errors raised while resolving landmarks against a configuration.
#[derive(Debug, Error)]
pub enum SwimkinError {
    /// The configuration references a landmark that the supplied set does
    /// not contain.
    #[error("landmark '{name}' is referenced by the configuration but missing from the landmark set")]
    MissingLandmark { name: String },

    /// One landmark's x/y/conf sequences disagree in length.
    #[error("landmark '{name}' has ragged series: x={x}, y={y}, conf={conf}")]
    RaggedSeries {
        name: String,
        x: usize,
        y: usize,
        conf: usize,
    },

    /// Two landmarks used in the same run disagree on the frame count.
    #[error("landmark '{name}' has {len} frames, expected {expected}")]
    FrameCountMismatch {
        name: String,
        len: usize,
        expected: usize,
    },

    /// A configured anatomical group is too small to measure.
    #[error("landmark group '{group}' must contain at least {min} points, got {got}")]
    GroupTooSmall {
        group: &'static str,
        min: usize,
        got: usize,
    },

    /// No landmarks were supplied at all.
    #[error("landmark set is empty")]
    EmptyLandmarkSet,
}
