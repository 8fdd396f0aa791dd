//! Pipeline orchestration: landmarks → metrics → peaks → bouts → table.

use crate::bouts::{compute_bout_ranges, BoutRange};
use crate::config::{KinematicsConfig, PointGroups};
use crate::error::SwimkinError;
use crate::landmarks::{LandmarkSeries, LandmarkSet};
use crate::metrics::{
    fin_angle_series, furthest_tail_point_series, head_position_series, head_yaw_series,
    spine_angle_series, tail_angle_series, tail_side_distance_series,
};
use crate::peaks::detect_window_peaks;
use crate::table::KinematicsTable;

/// Landmark series resolved against the configured anatomical groups.
pub(crate) struct ResolvedPoints<'a> {
    pub head1: &'a LandmarkSeries,
    pub head2: &'a LandmarkSeries,
    pub spine: Vec<&'a LandmarkSeries>,
    pub left_fin: Vec<&'a LandmarkSeries>,
    pub right_fin: Vec<&'a LandmarkSeries>,
    pub tail: Vec<&'a LandmarkSeries>,
    pub tail_labels: &'a [String],
    /// Reference head position: the first spine landmark.
    pub head: &'a LandmarkSeries,
    /// Tail tip: the last spine landmark.
    pub tail_tip: &'a LandmarkSeries,
    pub n_frames: usize,
}

/// Resolve every configured landmark name, failing loudly on absences,
/// undersized groups, and frame-count mismatches. Silent defaulting here
/// would corrupt whole output columns, which is worse than stopping.
pub(crate) fn resolve_points<'a>(
    landmarks: &'a LandmarkSet,
    points: &'a PointGroups,
) -> Result<ResolvedPoints<'a>, SwimkinError> {
    let resolve_group = |group: &'static str,
                         names: &[String],
                         min: usize|
     -> Result<Vec<&'a LandmarkSeries>, SwimkinError> {
        if names.len() < min {
            return Err(SwimkinError::GroupTooSmall {
                group,
                min,
                got: names.len(),
            });
        }
        names.iter().map(|name| landmarks.require(name)).collect()
    };

    let head1 = landmarks.require(&points.head.pt1)?;
    let head2 = landmarks.require(&points.head.pt2)?;
    let spine = resolve_group("spine", &points.spine, 2)?;
    let left_fin = resolve_group("left_fin", &points.left_fin, 2)?;
    let right_fin = resolve_group("right_fin", &points.right_fin, 2)?;
    let tail = resolve_group("tail", &points.tail, 1)?;

    let n_frames = head1.len();
    let check = |name: &str, series: &LandmarkSeries| -> Result<(), SwimkinError> {
        if series.len() != n_frames {
            return Err(SwimkinError::FrameCountMismatch {
                name: name.to_string(),
                len: series.len(),
                expected: n_frames,
            });
        }
        Ok(())
    };
    check(&points.head.pt2, head2)?;
    for (name, series) in points.spine.iter().zip(&spine) {
        check(name, series)?;
    }
    for (name, series) in points.left_fin.iter().zip(&left_fin) {
        check(name, series)?;
    }
    for (name, series) in points.right_fin.iter().zip(&right_fin) {
        check(name, series)?;
    }
    for (name, series) in points.tail.iter().zip(&tail) {
        check(name, series)?;
    }

    let head = spine[0];
    let tail_tip = spine[spine.len() - 1];

    Ok(ResolvedPoints {
        head1,
        head2,
        spine,
        left_fin,
        right_fin,
        tail,
        tail_labels: &points.tail,
        head,
        tail_tip,
        n_frames,
    })
}

/// Run the full kinematics pipeline.
///
/// Computes the scale factor, every per-frame metric series, the fin peak
/// marks, and the bout ranges (automatic, configured, or the whole-range
/// fallback), then centers the head yaw per bout and assembles the table.
/// The output row count is exactly the input frame count.
pub fn run_pipeline(
    landmarks: &LandmarkSet,
    config: &KinematicsConfig,
) -> Result<KinematicsTable, SwimkinError> {
    let pts = resolve_points(landmarks, &config.points)?;
    let n = pts.n_frames;
    let scale_factor = config.video_parameters.scale_factor();
    let cutoffs = &config.graph_cutoffs;

    let lf_angle = fin_angle_series(pts.head1, pts.head2, &pts.left_fin, true);
    let rf_angle = fin_angle_series(pts.head1, pts.head2, &pts.right_fin, false);
    let head_yaw = head_yaw_series(pts.head1, pts.head2);
    let (head_x, head_y) = head_position_series(pts.head, scale_factor);
    let tail_angle = tail_angle_series(pts.head1, pts.head2, pts.tail_tip);
    let (tail_side, tail_distance) =
        tail_side_distance_series(pts.head1, pts.head2, pts.tail_tip, scale_factor);
    let furthest_tail_point =
        furthest_tail_point_series(pts.head1, pts.head2, &pts.tail, pts.tail_labels);
    let spine_angles = spine_angle_series(&pts.spine);

    let left_fin_peaks = detect_window_peaks(&lf_angle, cutoffs.peak_horizontal_buffer);
    let right_fin_peaks = detect_window_peaks(&rf_angle, cutoffs.peak_horizontal_buffer);

    let bouts = if n == 0 {
        Vec::new()
    } else {
        select_bout_ranges(&lf_angle, &rf_angle, &tail_distance, config, n)
    };

    let mut bout_head_yaw = vec![None; n];
    for range in &bouts {
        let center = head_yaw[range.start];
        for i in range.start..=range.end {
            bout_head_yaw[i] = Some(head_yaw[i] - center);
        }
    }

    Ok(KinematicsTable {
        time: (0..n).collect(),
        lf_angle,
        rf_angle,
        head_yaw,
        head_x,
        head_y,
        tail_angle,
        tail_distance,
        tail_side,
        furthest_tail_point,
        left_fin_peaks,
        right_fin_peaks,
        bout_head_yaw,
        spine_angles,
        bouts,
    })
}

/// Pick the bout ranges for a run of `n` frames.
///
/// Automatic detection falls back to the whole recording when no bout is
/// found; manual mode uses the configured ranges (clamped into bounds),
/// honoring the legacy `[[0, 0]]` whole-recording sentinel.
fn select_bout_ranges(
    lf_angle: &[f64],
    rf_angle: &[f64],
    tail_distance: &[f64],
    config: &KinematicsConfig,
    n: usize,
) -> Vec<BoutRange> {
    let whole = vec![BoutRange::new(0, n - 1)];

    if !config.auto_find_time_ranges {
        let supplied = sanitize_ranges(&config.time_ranges, n);
        if supplied.is_empty() {
            return whole;
        }
        return supplied;
    }

    let found = compute_bout_ranges(lf_angle, rf_angle, tail_distance, &config.graph_cutoffs);
    if found.is_empty() {
        whole
    } else {
        found
    }
}

fn sanitize_ranges(ranges: &[BoutRange], n: usize) -> Vec<BoutRange> {
    if ranges.len() == 1 && ranges[0] == BoutRange::new(0, 0) {
        return Vec::new();
    }
    ranges
        .iter()
        .map(|r| {
            let start = r.start.min(n - 1);
            BoutRange::new(start, r.end.clamp(start, n - 1))
        })
        .collect()
}
