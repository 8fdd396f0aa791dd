//! Peak detectors over per-frame metric series.
//!
//! Two distinct algorithms live here and must not be conflated:
//!
//! - [`detect_window_peaks`] marks local extrema inside a fixed symmetric
//!   window; every output frame is decided independently.
//! - [`scan_threshold_peaks`] is a single ordered forward pass: each run of
//!   cutoff-exceeding frames yields exactly one peak, at the most extreme
//!   frame of the run.

/// Label assigned by the window local-extremum detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeakMark {
    #[default]
    Unmarked,
    Max,
    Min,
}

impl PeakMark {
    /// Legacy column vocabulary: "max", "min", or the empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            PeakMark::Unmarked => "",
            PeakMark::Max => "max",
            PeakMark::Min => "min",
        }
    }
}

/// Mark local extrema of `signal` within the symmetric window
/// `[i - buffer, i + buffer]`.
///
/// A frame is `Max` when its value is ≥ every value in the window, `Min`
/// when ≤ every value; the max test runs first, so a flat plateau satisfying
/// both resolves to `Max`. Windows containing any NaN stay unmarked, and so
/// do the `buffer` frames at each boundary; there is no extrapolation.
pub fn detect_window_peaks(signal: &[f64], buffer: usize) -> Vec<PeakMark> {
    let n = signal.len();
    let mut marks = vec![PeakMark::Unmarked; n];
    if n < 2 * buffer + 1 {
        return marks;
    }

    for i in buffer..n - buffer {
        let window = &signal[i - buffer..=i + buffer];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        let center = signal[i];
        if window.iter().all(|&v| center >= v) {
            marks[i] = PeakMark::Max;
        } else if window.iter().all(|&v| center <= v) {
            marks[i] = PeakMark::Min;
        }
    }
    marks
}

/// Scan `signal` for threshold-crossing runs and return the index of the
/// most extreme frame of each run.
///
/// With `negative = false` a run is entered at the first frame strictly
/// above `cutoff` and ends at the first frame back at or below it; the
/// running maximum's index is emitted. With `negative = true` the
/// comparisons flip and the running minimum is tracked. A run still open
/// when the scan ends emits its running extreme. NaN frames satisfy no
/// comparison: they never open a run and never update the extreme.
pub fn scan_threshold_peaks(signal: &[f64], cutoff: f64, negative: bool) -> Vec<usize> {
    let mut peaks = Vec::new();
    let mut on_peak = false;
    let mut extreme_pos = 0usize;
    let mut extreme_val = 0.0f64;

    for (i, &v) in signal.iter().enumerate() {
        let enters = if negative { v < cutoff } else { v > cutoff };
        let ends = if negative { v >= cutoff } else { v <= cutoff };

        if !on_peak && enters {
            extreme_pos = i;
            extreme_val = v;
            on_peak = true;
        } else if on_peak && ends {
            peaks.push(extreme_pos);
            on_peak = false;
        } else if on_peak {
            let more_extreme = if negative {
                v < extreme_val
            } else {
                v > extreme_val
            };
            if more_extreme {
                extreme_val = v;
                extreme_pos = i;
            }
        }
    }
    if on_peak {
        peaks.push(extreme_pos);
    }
    peaks
}
