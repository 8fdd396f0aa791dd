//! Per-bout summary statistics.
//!
//! Net travel, mean speed, and beat statistics for each detected bout,
//! computed from the finished result table. Consumers that only need the
//! frame-indexed columns can skip this entirely.

use crate::bouts::BoutRange;
use crate::config::GraphCutoffs;
use crate::frequency::{beat_stats, BeatStats, FrequencyConvention};
use crate::table::KinematicsTable;

/// Summary of one movement bout.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BoutSummary {
    pub range: BoutRange,
    /// Net displacement of the head over the bout, meters.
    pub travel_distance_m: f64,
    /// Net displacement divided by the bout duration, meters per second.
    pub mean_speed_m_per_s: f64,
    pub left_fin: BeatStats,
    pub right_fin: BeatStats,
    pub tail: BeatStats,
}

/// Summarize every bout recorded in `table`.
pub fn summarize_bouts(
    table: &KinematicsTable,
    cutoffs: &GraphCutoffs,
    fps: f64,
    convention: FrequencyConvention,
) -> Vec<BoutSummary> {
    let n = table.n_frames();
    table
        .bouts
        .iter()
        .filter(|r| r.start < n)
        .map(|r| {
            let range = BoutRange::new(r.start, r.end.min(n - 1));
            let dx = table.head_x[range.end] - table.head_x[range.start];
            let dy = table.head_y[range.end] - table.head_y[range.start];
            let travel_distance_m = dx.hypot(dy);

            let duration_s = (range.end - range.start) as f64 / fps;
            let mean_speed_m_per_s = if duration_s > 0.0 {
                travel_distance_m / duration_s
            } else {
                0.0
            };

            let single = [range];
            BoutSummary {
                range,
                travel_distance_m,
                mean_speed_m_per_s,
                left_fin: beat_stats(
                    &table.lf_angle,
                    cutoffs.left_fin_angle,
                    false,
                    &single,
                    fps,
                    convention,
                ),
                right_fin: beat_stats(
                    &table.rf_angle,
                    cutoffs.right_fin_angle,
                    false,
                    &single,
                    fps,
                    convention,
                ),
                tail: beat_stats(
                    &table.tail_distance,
                    cutoffs.tail_angle,
                    true,
                    &single,
                    fps,
                    convention,
                ),
            }
        })
        .collect()
}
