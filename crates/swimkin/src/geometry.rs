//! Pure 2D geometry primitives shared by the per-frame metric calculators.
//!
//! All angles are in degrees. Coordinates live in the tracker's image frame:
//! x grows rightward, y grows downward. Heading angles are negated so that a
//! positive yaw reads counter-clockwise in conventional orientation.
//!
//! Failures are values, not panics: a degenerate input (zero-length vector,
//! unrepresentable centerline) yields NaN, which per-frame callers store as
//! the missing-value sentinel for that frame.

use nalgebra::{Point2, Vector2};

/// Signed deflection of segment `BC` from the straight extension of `AB`,
/// in degrees, range (−180°, 180°].
///
/// A collinear continuation (`C` straight ahead of `A→B`) reads 0°; the sign
/// follows the cross product of `BA` × `BC`. Returns NaN when either vector
/// has zero length (the joint is unmeasurable).
pub fn signed_angle_between(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    let ba: Vector2<f64> = a - b;
    let bc: Vector2<f64> = c - b;
    if ba.norm() == 0.0 || bc.norm() == 0.0 {
        return f64::NAN;
    }

    let dot = ba.dot(&bc);
    let cross = ba.perp(&bc);

    // Unsigned angle between BA and BC in [0, π]; deflection from straight
    // (π) carries the sign of the cross product.
    let unsigned = cross.abs().atan2(dot);
    (sign(cross) * (std::f64::consts::PI - unsigned)).to_degrees()
}

/// Heading (yaw) of the segment `p1 → p2`, in degrees.
///
/// The sign is inverted relative to `atan2` because the image y-axis points
/// downward.
pub fn heading_angle(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    let d: Vector2<f64> = p2 - p1;
    -d.y.atan2(d.x).to_degrees()
}

/// Signed perpendicular offset of `point` from the line through `line_p1`
/// and `line_p2`, in the line's pixel units.
///
/// Positive offsets classify as "Left" of the line in this coordinate
/// system, negative as "Right", zero as on the line. The line is fitted in
/// slope/intercept form; a vertical or degenerate pair of line points has no
/// such form and yields NaN.
pub fn signed_perpendicular_offset(
    line_p1: Point2<f64>,
    line_p2: Point2<f64>,
    point: Point2<f64>,
) -> f64 {
    let dx = line_p2.x - line_p1.x;
    let dy = line_p2.y - line_p1.y;
    if dx == 0.0 {
        return f64::NAN;
    }

    let m = dy / dx;
    let b = line_p1.y - m * line_p1.x;
    (m * point.x - point.y + b) / (m * m + 1.0).sqrt()
}

/// Fold an angle in degrees into (−180°, 180°] with a single ±360° step.
pub fn wrap_degrees(angle: f64) -> f64 {
    if angle < -180.0 {
        angle + 360.0
    } else if angle > 180.0 {
        angle - 360.0
    } else {
        angle
    }
}

/// Zero-preserving sign: −1, 0, or +1, NaN for NaN.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else if v == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn right_angle_bend_is_signed_quarter_turn() {
        let theta = signed_angle_between(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0));
        assert_relative_eq!(theta, 90.0, max_relative = 1e-12);
    }

    #[test]
    fn reversing_point_order_negates_the_angle() {
        let forward = signed_angle_between(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0));
        let reversed = signed_angle_between(p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0));
        assert_relative_eq!(forward, -reversed, max_relative = 1e-12);
        assert_relative_eq!(forward.abs(), reversed.abs(), max_relative = 1e-12);
    }

    #[test]
    fn straight_continuation_reads_zero() {
        let theta = signed_angle_between(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        assert_relative_eq!(theta, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_vector_is_nan() {
        assert!(signed_angle_between(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 1.0)).is_nan());
        assert!(signed_angle_between(p(1.0, 1.0), p(0.0, 0.0), p(0.0, 0.0)).is_nan());
    }

    #[test]
    fn nan_coordinate_propagates() {
        assert!(signed_angle_between(p(f64::NAN, 0.0), p(0.0, 0.0), p(0.0, 1.0)).is_nan());
        assert!(heading_angle(p(0.0, f64::NAN), p(1.0, 0.0)).is_nan());
    }

    #[test]
    fn heading_follows_image_axis_convention() {
        assert_relative_eq!(heading_angle(p(0.0, 0.0), p(1.0, 0.0)), 0.0, epsilon = 1e-12);
        // y grows downward, so a segment toward +y points to negative yaw.
        assert_relative_eq!(
            heading_angle(p(0.0, 0.0), p(0.0, 1.0)),
            -90.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            heading_angle(p(0.0, 0.0), p(-1.0, 0.0)),
            -180.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn perpendicular_offset_signs_match_side_convention() {
        let l1 = p(0.0, 0.0);
        let l2 = p(1.0, 0.0);
        // Below the x-axis in image coordinates (larger y) is "Right".
        assert_relative_eq!(
            signed_perpendicular_offset(l1, l2, p(0.5, 1.0)),
            -1.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            signed_perpendicular_offset(l1, l2, p(0.5, -1.0)),
            1.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            signed_perpendicular_offset(l1, l2, p(0.5, 0.0)),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn offset_from_sloped_line_is_normalized() {
        // Line y = x; the point (1, 0) sits 1/sqrt(2) away.
        let off = signed_perpendicular_offset(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0));
        assert_relative_eq!(off, 1.0 / 2.0f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn degenerate_centerline_offset_is_nan() {
        assert!(signed_perpendicular_offset(p(1.0, 1.0), p(1.0, 1.0), p(0.0, 0.0)).is_nan());
        // Vertical line: no slope/intercept form.
        assert!(signed_perpendicular_offset(p(1.0, 0.0), p(1.0, 5.0), p(0.0, 0.0)).is_nan());
    }

    #[test]
    fn wrap_degrees_folds_once() {
        assert_relative_eq!(wrap_degrees(190.0), -170.0, max_relative = 1e-12);
        assert_relative_eq!(wrap_degrees(-190.0), 170.0, max_relative = 1e-12);
        assert_relative_eq!(wrap_degrees(180.0), 180.0, max_relative = 1e-12);
        assert_relative_eq!(wrap_degrees(-45.0), -45.0, max_relative = 1e-12);
    }
}
