//! Movement-bout segmentation by peak synchrony.
//!
//! A bout is a contiguous frame interval judged to contain active movement.
//! The segmenter fuses threshold peaks from the two fin-angle signals and
//! the tail-distance signal: a bout opens when the watched signals have all
//! peaked recently enough, and closes the first frame any of them falls
//! silent for longer than the configured gap. This is a genuinely sequential
//! state machine; it must run as a single ordered forward pass.

use crate::config::GraphCutoffs;
use crate::peaks::scan_threshold_peaks;

/// Inclusive frame interval `[start, end]`.
///
/// Serializes as a two-element array `[start, end]`, the shape the legacy
/// `time_ranges` configuration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct BoutRange {
    pub start: usize,
    pub end: usize,
}

impl BoutRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of frames covered, inclusive of both ends.
    pub fn n_frames(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, frame: usize) -> bool {
        self.start <= frame && frame <= self.end
    }
}

impl From<[usize; 2]> for BoutRange {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<BoutRange> for [usize; 2] {
    fn from(r: BoutRange) -> Self {
        [r.start, r.end]
    }
}

/// Segment the recording into movement bouts.
///
/// Threshold peaks are collected for the left fin and right fin (positive
/// cutoff) and for the tail distance (positive and negative cutoffs,
/// merged). With `use_tail_angle` set, a bout requires all three signals to
/// have peaked within `movement_bout_width` frames of the current frame;
/// otherwise only the two fins are consulted. Start and end indices extend
/// past the earliest/latest contributing peak by `swim_bout_buffer` plus
/// `swim_bout_right_shift`, clamped into `[0, n - 1]`. A bout still open at
/// scan end is force-closed with the same end formula. The returned list is
/// merged: sorted ascending by start and pairwise non-overlapping.
///
/// Degenerate inputs never panic: all-NaN signals produce no peaks (and so
/// no bouts), and cutoffs larger than the frame count only saturate the
/// clamps. Callers treat an empty result as "use the whole recording".
pub fn compute_bout_ranges(
    left_fin: &[f64],
    right_fin: &[f64],
    tail_distance: &[f64],
    cutoffs: &GraphCutoffs,
) -> Vec<BoutRange> {
    let n = left_fin.len().min(right_fin.len()).min(tail_distance.len());
    if n == 0 {
        return Vec::new();
    }

    let lf_mask = peak_mask(
        &scan_threshold_peaks(left_fin, cutoffs.left_fin_angle, false),
        n,
    );
    let rf_mask = peak_mask(
        &scan_threshold_peaks(right_fin, cutoffs.right_fin_angle, false),
        n,
    );
    let mut tail_mask = peak_mask(
        &scan_threshold_peaks(tail_distance, cutoffs.tail_angle, false),
        n,
    );
    for p in scan_threshold_peaks(tail_distance, -cutoffs.tail_angle, true) {
        if p < n {
            tail_mask[p] = true;
        }
    }

    let gap = cutoffs.movement_bout_width;
    let buffer = cutoffs.swim_bout_buffer;
    let shift = cutoffs.swim_bout_right_shift;
    let last_frame = (n - 1) as i64;

    let start_index = |earliest: i64| -> usize { (earliest - buffer + shift).max(0) as usize };
    let end_index = |latest: i64| -> usize {
        (latest + buffer + shift).clamp(0, last_frame) as usize
    };

    // Trackers start far enough in the past that nothing counts as recent.
    let sentinel = -2 * gap;
    let mut last_lf = sentinel;
    let mut last_rf = sentinel;
    let mut last_tail = sentinel;

    let mut ranges = Vec::new();
    let mut on_range = false;
    let mut range_start = 0usize;
    let mut latest_peak = sentinel;

    for i in 0..n {
        let fi = i as i64;
        if lf_mask[i] {
            last_lf = fi;
        }
        if rf_mask[i] {
            last_rf = fi;
        }
        if tail_mask[i] {
            last_tail = fi;
        }

        let (all_recent, earliest, latest) = if cutoffs.use_tail_angle {
            (
                fi - last_lf <= gap && fi - last_rf <= gap && fi - last_tail <= gap,
                last_lf.min(last_rf).min(last_tail),
                last_lf.max(last_rf).max(last_tail),
            )
        } else {
            (
                fi - last_lf <= gap && fi - last_rf <= gap,
                last_lf.min(last_rf),
                last_lf.max(last_rf),
            )
        };
        latest_peak = latest;

        if !on_range && all_recent {
            range_start = start_index(earliest);
            on_range = true;
        } else if on_range && !all_recent {
            let end = end_index(latest).max(range_start);
            ranges.push(BoutRange::new(range_start, end));
            on_range = false;
        }
    }
    if on_range {
        let end = end_index(latest_peak).max(range_start);
        ranges.push(BoutRange::new(range_start, end));
    }

    merge_bout_ranges(ranges)
}

/// Merge a bout list into a sorted, pairwise non-overlapping one.
///
/// Accepts arbitrary order and overlap; the accumulator end only ever grows,
/// so the pass is idempotent.
pub fn merge_bout_ranges(mut ranges: Vec<BoutRange>) -> Vec<BoutRange> {
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<BoutRange> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }
    merged
}

fn peak_mask(peaks: &[usize], n: usize) -> Vec<bool> {
    let mut mask = vec![false; n];
    for &p in peaks {
        if p < n {
            mask[p] = true;
        }
    }
    mask
}
