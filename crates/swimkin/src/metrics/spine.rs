//! Spine segment angle calculator.

use crate::geometry::signed_angle_between;
use crate::landmarks::LandmarkSeries;

/// Joint angles along an ordered spine of K landmarks: one series per
/// consecutive triple `(i, i+1, i+2)`, so K−2 series in total.
pub fn spine_angle_series(spine: &[&LandmarkSeries]) -> Vec<Vec<f64>> {
    if spine.len() < 3 {
        return Vec::new();
    }
    let n = spine[0].len();

    (0..spine.len() - 2)
        .map(|joint| {
            let (a, b, c) = (spine[joint], spine[joint + 1], spine[joint + 2]);
            (0..n)
                .map(|i| signed_angle_between(a.point(i), b.point(i), c.point(i)))
                .collect()
        })
        .collect()
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
    fn straight_spine_reads_zero_everywhere() {
        let a = series(&[(0.0, 0.0), (0.0, 0.0)]);
        let b = series(&[(1.0, 0.0), (1.0, 0.0)]);
        let c = series(&[(2.0, 0.0), (2.0, 0.0)]);
        let d = series(&[(3.0, 0.0), (3.0, 0.0)]);

        let joints = spine_angle_series(&[&a, &b, &c, &d]);
        assert_eq!(joints.len(), 2);
        for joint in &joints {
            for &angle in joint {
                assert_relative_eq!(angle, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn bend_appears_only_at_the_bent_joint() {
        let a = series(&[(0.0, 0.0)]);
        let b = series(&[(1.0, 0.0)]);
        let c = series(&[(2.0, 0.0)]);
        let d = series(&[(2.0, 1.0)]);

        let joints = spine_angle_series(&[&a, &b, &c, &d]);
        assert_relative_eq!(joints[0][0], 0.0, epsilon = 1e-12);
        assert!(joints[1][0].abs() > 1.0);
    }

    #[test]
    fn two_point_spine_has_no_joints() {
        let a = series(&[(0.0, 0.0)]);
        let b = series(&[(1.0, 0.0)]);
        assert!(spine_angle_series(&[&a, &b]).is_empty());
    }
}
