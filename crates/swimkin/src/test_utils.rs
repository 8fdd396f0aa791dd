//! Shared test fixtures: synthetic landmark sets with scripted fin beats.
//!
//! Consolidated here so the pipeline, API, and summary tests all drive the
//! same fish instead of each rebuilding its own.

use crate::config::KinematicsConfig;
use crate::landmarks::{LandmarkSeries, LandmarkSet};

const FIN_LENGTH: f64 = 5.0;
const BEAT_ANGLE_DEG: f64 = 40.0;

/// A motionless fish facing +x, laid out to match the default
/// [`crate::config::PointGroups`] names. Fins rest parallel to the body, so
/// every angle signal stays at 0°.
pub(crate) fn resting_fish(n_frames: usize) -> (LandmarkSet, KinematicsConfig) {
    swimming_fish(n_frames, &[])
}

/// Like [`resting_fish`], but both fins sweep out to ±40° on the `active`
/// frames, well past the default 20° cutoffs, while the tail stays on the
/// centerline.
pub(crate) fn swimming_fish(
    n_frames: usize,
    active: &[usize],
) -> (LandmarkSet, KinematicsConfig) {
    let mut set = LandmarkSet::new();

    for (name, x, y) in [
        ("head", 100.0, 100.0),
        ("spine_1", 110.0, 100.0),
        ("spine_2", 120.0, 100.0),
        ("spine_3", 130.0, 100.0),
        ("tail_tip", 140.0, 100.0),
        ("left_fin_base", 105.0, 95.0),
        ("right_fin_base", 105.0, 105.0),
    ] {
        set.insert(name, constant_series(n_frames, x, y));
    }

    // Fin tips: parallel to the heading at rest, rotated on active frames.
    // The right fin rotates the opposite way so both angle signals come out
    // positive after the right-fin sign flip.
    let mut left_tip = constant_series(n_frames, 105.0 + FIN_LENGTH, 95.0);
    let mut right_tip = constant_series(n_frames, 105.0 + FIN_LENGTH, 105.0);
    for &frame in active {
        let theta = BEAT_ANGLE_DEG.to_radians();
        left_tip.x[frame] = 105.0 + FIN_LENGTH * theta.cos();
        left_tip.y[frame] = 95.0 + FIN_LENGTH * theta.sin();
        right_tip.x[frame] = 105.0 + FIN_LENGTH * theta.cos();
        right_tip.y[frame] = 105.0 - FIN_LENGTH * theta.sin();
    }
    set.insert("left_fin_tip", left_tip);
    set.insert("right_fin_tip", right_tip);

    (set, KinematicsConfig::default())
}

pub(crate) fn constant_series(n_frames: usize, x: f64, y: f64) -> LandmarkSeries {
    LandmarkSeries::new(vec![x; n_frames], vec![y; n_frames], vec![1.0; n_frames])
}
