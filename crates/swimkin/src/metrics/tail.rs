//! Tail deflection, side, distance, and furthest-point calculators.

use crate::geometry::{signed_angle_between, signed_perpendicular_offset};
use crate::landmarks::LandmarkSeries;

/// Which side of the centerline the tail tip sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TailSide {
    Left,
    Right,
    #[serde(rename = "On the line")]
    OnTheLine,
}

impl TailSide {
    /// Legacy column vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            TailSide::Left => "Left",
            TailSide::Right => "Right",
            TailSide::OnTheLine => "On the line",
        }
    }
}

/// Deflection of the tail tip from the centerline's straight extension,
/// per frame, in degrees.
pub fn tail_angle_series(
    head1: &LandmarkSeries,
    head2: &LandmarkSeries,
    tail_tip: &LandmarkSeries,
) -> Vec<f64> {
    (0..head1.len())
        .map(|i| signed_angle_between(head1.point(i), head2.point(i), tail_tip.point(i)))
        .collect()
}

/// Side classification and scaled perpendicular distance of the tail tip
/// from the centerline, per frame.
///
/// The side comes from the raw (unscaled) offset sign; the distance is the
/// raw offset times `scale_factor`. A frame with a degenerate centerline
/// reports `None` and NaN.
pub fn tail_side_distance_series(
    head1: &LandmarkSeries,
    head2: &LandmarkSeries,
    tail_tip: &LandmarkSeries,
    scale_factor: f64,
) -> (Vec<Option<TailSide>>, Vec<f64>) {
    let n = head1.len();
    let mut sides = vec![None; n];
    let mut distances = vec![f64::NAN; n];

    for i in 0..n {
        let raw = signed_perpendicular_offset(head1.point(i), head2.point(i), tail_tip.point(i));
        distances[i] = raw * scale_factor;
        sides[i] = if raw < 0.0 {
            Some(TailSide::Right)
        } else if raw > 0.0 {
            Some(TailSide::Left)
        } else if raw == 0.0 {
            Some(TailSide::OnTheLine)
        } else {
            None
        };
    }
    (sides, distances)
}

/// Label of the tail landmark furthest from the centerline, per frame.
///
/// Only a strictly larger absolute offset displaces the running winner, so
/// ties keep the earliest-indexed landmark of the configured tail group.
/// Frames where no offset exceeds zero (including all-NaN frames) report
/// the first label.
pub fn furthest_tail_point_series(
    head1: &LandmarkSeries,
    head2: &LandmarkSeries,
    tail: &[&LandmarkSeries],
    labels: &[String],
) -> Vec<String> {
    let n = head1.len();
    let default = labels.first().cloned().unwrap_or_default();
    let mut out = vec![default; n];

    for (i, slot) in out.iter_mut().enumerate() {
        let mut best_abs = 0.0f64;
        for (k, series) in tail.iter().enumerate() {
            let offset =
                signed_perpendicular_offset(head1.point(i), head2.point(i), series.point(i));
            if offset.abs() > best_abs {
                best_abs = offset.abs();
                if let Some(label) = labels.get(k) {
                    slot.clone_from(label);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(points: &[(f64, f64)]) -> LandmarkSeries {
        LandmarkSeries::new(
            points.iter().map(|p| p.0).collect(),
            points.iter().map(|p| p.1).collect(),
            vec![1.0; points.len()],
        )
    }

    #[test]
    fn side_and_distance_follow_the_offset_sign() {
        let head1 = series(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
        let head2 = series(&[(1.0, 0.0), (1.0, 0.0), (1.0, 0.0)]);
        let tip = series(&[(2.0, 1.0), (2.0, -1.0), (2.0, 0.0)]);

        let (sides, distances) = tail_side_distance_series(&head1, &head2, &tip, 2.0);
        assert_eq!(sides[0], Some(TailSide::Right));
        assert_eq!(sides[1], Some(TailSide::Left));
        assert_eq!(sides[2], Some(TailSide::OnTheLine));
        assert_relative_eq!(distances[0], -2.0, max_relative = 1e-12);
        assert_relative_eq!(distances[1], 2.0, max_relative = 1e-12);
        assert_relative_eq!(distances[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_centerline_reports_sentinels() {
        let head1 = series(&[(1.0, 1.0)]);
        let head2 = series(&[(1.0, 1.0)]);
        let tip = series(&[(2.0, 2.0)]);

        let (sides, distances) = tail_side_distance_series(&head1, &head2, &tip, 1.0);
        assert_eq!(sides[0], None);
        assert!(distances[0].is_nan());
    }

    #[test]
    fn tail_angle_measures_deflection_from_straight() {
        let head1 = series(&[(0.0, 0.0)]);
        let head2 = series(&[(1.0, 0.0)]);
        // Straight ahead of the centerline: no deflection.
        let straight = series(&[(2.0, 0.0)]);
        let angles = tail_angle_series(&head1, &head2, &straight);
        assert_relative_eq!(angles[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn furthest_point_takes_the_largest_offset() {
        let head1 = series(&[(0.0, 0.0)]);
        let head2 = series(&[(1.0, 0.0)]);
        let near = series(&[(2.0, 0.1)]);
        let far = series(&[(2.0, -0.7)]);
        let mid = series(&[(2.0, 0.5)]);
        let labels = vec!["near".to_string(), "far".to_string(), "mid".to_string()];

        let out = furthest_tail_point_series(&head1, &head2, &[&near, &far, &mid], &labels);
        assert_eq!(out[0], "far");
    }

    #[test]
    fn tie_keeps_the_earlier_landmark() {
        let head1 = series(&[(0.0, 0.0)]);
        let head2 = series(&[(1.0, 0.0)]);
        let a = series(&[(2.0, 0.5)]);
        let b = series(&[(3.0, -0.5)]);
        let labels = vec!["a".to_string(), "b".to_string()];

        let out = furthest_tail_point_series(&head1, &head2, &[&a, &b], &labels);
        assert_eq!(out[0], "a");
    }

    #[test]
    fn all_nan_offsets_fall_back_to_the_first_label() {
        let head1 = series(&[(1.0, 0.0)]);
        let head2 = series(&[(1.0, 5.0)]);
        let a = series(&[(2.0, 0.5)]);
        let labels = vec!["a".to_string()];

        let out = furthest_tail_point_series(&head1, &head2, &[&a], &labels);
        assert_eq!(out[0], "a");
    }
}
