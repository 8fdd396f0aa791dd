//! Fin angle calculators.

use crate::geometry::{signed_angle_between, wrap_degrees};
use crate::landmarks::LandmarkSeries;

/// Angle of the fin vector relative to the heading vector, per frame, in
/// degrees within (−180°, 180°].
///
/// The heading vector is `head2 − head1`; the fin vector runs base → tip
/// (first → last landmark of the group, so intermediate points are
/// irrelevant). The result is negated for the right fin so that symmetric
/// beats of either fin report comparable sign and magnitude.
pub fn fin_angle_series(
    head1: &LandmarkSeries,
    head2: &LandmarkSeries,
    fin: &[&LandmarkSeries],
    is_left: bool,
) -> Vec<f64> {
    let n = head1.len();
    let mut out = vec![f64::NAN; n];
    let (base, tip) = match (fin.first(), fin.last()) {
        (Some(&base), Some(&tip)) if fin.len() >= 2 => (base, tip),
        _ => return out,
    };

    for (i, slot) in out.iter_mut().enumerate() {
        let heading = head2.point(i) - head1.point(i);
        let fin_vec = tip.point(i) - base.point(i);
        let raw = (fin_vec.y.atan2(fin_vec.x) - heading.y.atan2(heading.x)).to_degrees();
        let wrapped = wrap_degrees(raw);
        *slot = if is_left { wrapped } else { -wrapped };
    }
    out
}

/// Interior bend of a fin measured over its first, middle, and last
/// landmarks, per frame.
///
/// All-NaN when the group has fewer than three landmarks (a two-point fin
/// has no interior joint).
pub fn fin_three_point_angle_series(fin: &[&LandmarkSeries]) -> Vec<f64> {
    let n = fin.first().map_or(0, |s| s.len());
    let mut out = vec![f64::NAN; n];
    if fin.len() < 3 {
        return out;
    }
    let first = fin[0];
    let middle = fin[fin.len() / 2];
    let last = fin[fin.len() - 1];

    for (i, slot) in out.iter_mut().enumerate() {
        *slot = signed_angle_between(first.point(i), middle.point(i), last.point(i));
    }
    out
}
