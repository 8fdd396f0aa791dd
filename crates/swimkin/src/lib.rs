//! swimkin — swim-bout kinematics from 2D pose-tracking landmarks.
//!
//! Converts per-frame landmark coordinates of a swimming animal into
//! kinematic descriptor series and segments the recording into discrete
//! movement bouts. The pipeline stages are:
//!
//! 1. **Geometry** – signed three-point angles, heading angles, signed
//!    perpendicular offsets from the per-frame centerline.
//! 2. **Metrics** – per-frame series: fin angles, head yaw and position,
//!    tail angle/side/distance, furthest tail point, spine joint angles.
//! 3. **Peaks** – fixed-window local extrema and threshold-crossing run
//!    extrema over the metric series.
//! 4. **Bouts** – a sequential state machine fusing three peak streams into
//!    merged, non-overlapping movement-bout intervals.
//! 5. **Orchestrator** – assembles the frame-indexed result table and
//!    centers the head yaw per bout.
//!
//! Data flows strictly upward: landmarks → metrics → peaks → bouts → table.
//! Every run is self-contained; inputs are never mutated and no state
//! survives between invocations. Per-frame numeric failures become NaN or
//! empty-categorical sentinels for that frame alone; only configuration
//! references that cannot be satisfied fail loudly, as [`SwimkinError`].
//!
//! # Public API
//! [`Analyzer`] and [`KinematicsConfig`] are the primary entry points; the
//! individual calculators and detectors are exported for callers that need
//! one stage in isolation.

mod api;
mod bouts;
mod config;
mod error;
mod frequency;
mod geometry;
mod landmarks;
mod metrics;
mod peaks;
mod pipeline;
mod summary;
mod table;
#[cfg(test)]
mod test_utils;

pub use api::Analyzer;
pub use bouts::{compute_bout_ranges, merge_bout_ranges, BoutRange};
pub use config::{GraphCutoffs, HeadPoints, KinematicsConfig, PointGroups, VideoParameters};
pub use error::SwimkinError;
pub use frequency::{beat_stats, BeatStats, FrequencyConvention};
pub use geometry::{
    heading_angle, signed_angle_between, signed_perpendicular_offset, wrap_degrees,
};
pub use landmarks::{LandmarkSeries, LandmarkSet};
pub use metrics::{
    fin_angle_series, fin_three_point_angle_series, furthest_tail_point_series,
    head_position_series, head_yaw_series, spine_angle_series, tail_angle_series,
    tail_side_distance_series, TailSide,
};
pub use peaks::{detect_window_peaks, scan_threshold_peaks, PeakMark};
pub use pipeline::run_pipeline;
pub use summary::{summarize_bouts, BoutSummary};
pub use table::KinematicsTable;
