//! Beat-frequency estimation from threshold-peak spacing.
//!
//! The repository this core descends from carried two near-duplicate
//! frequency formulas that disagree on dividing the mean peak spacing by
//! two "for fin alternation". Rather than silently resolving the
//! divergence, the convention is an explicit configuration mode.

use crate::bouts::BoutRange;

/// How consecutive threshold runs map onto physical beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyConvention {
    /// Every threshold run is one full beat.
    #[default]
    PerPeak,
    /// Consecutive runs are opposite strokes of an alternating pair: the
    /// reported frequency doubles and the beat count halves.
    FinAlternation,
}

/// Beat statistics for one signal over a set of bout ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeatStats {
    /// Beats per second; 0 when fewer than two runs were observed.
    pub frequency_hz: f64,
    /// Number of beats, halved under [`FrequencyConvention::FinAlternation`].
    pub n_peaks: f64,
}

/// Count threshold runs of `signal` inside `bouts` and convert the mean
/// spacing between run terminations into a beat frequency.
///
/// `two_sided` treats excursions below `-cutoff` the same as excursions
/// above `cutoff` (tail signals deflect to both sides). The run state is
/// deliberately carried across bout boundaries, matching the behavior of
/// the measurement this reimplements.
pub fn beat_stats(
    signal: &[f64],
    cutoff: f64,
    two_sided: bool,
    bouts: &[BoutRange],
    fps: f64,
    convention: FrequencyConvention,
) -> BeatStats {
    let mut peaks: Vec<usize> = Vec::new();
    let mut on_peak = false;

    for r in bouts {
        if r.start >= signal.len() {
            continue;
        }
        let end = r.end.min(signal.len() - 1);
        for (i, &v) in signal.iter().enumerate().take(end + 1).skip(r.start) {
            let above = if two_sided {
                v > cutoff || v < -cutoff
            } else {
                v > cutoff
            };
            let back = if two_sided {
                (-cutoff..=cutoff).contains(&v)
            } else {
                v <= cutoff
            };
            if !on_peak && above {
                on_peak = true;
            } else if on_peak && back {
                peaks.push(i);
                on_peak = false;
            }
        }
    }

    let n_peaks = match convention {
        FrequencyConvention::PerPeak => peaks.len() as f64,
        FrequencyConvention::FinAlternation => peaks.len() as f64 / 2.0,
    };

    if peaks.len() < 2 {
        return BeatStats {
            frequency_hz: 0.0,
            n_peaks,
        };
    }

    let mean_spacing = peaks
        .windows(2)
        .map(|w| (w[1] - w[0]) as f64)
        .sum::<f64>()
        / (peaks.len() - 1) as f64;

    let frequency_hz = match convention {
        FrequencyConvention::PerPeak => fps / mean_spacing,
        FrequencyConvention::FinAlternation => 2.0 * fps / mean_spacing,
    };

    BeatStats {
        frequency_hz,
        n_peaks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_wave(n: usize, period: usize, amplitude: f64) -> Vec<f64> {
        (0..n)
            .map(|i| {
                if i % period < period / 2 {
                    amplitude
                } else {
                    0.0
                }
            })
            .collect()
    }

    #[test]
    fn per_peak_frequency_matches_run_spacing() {
        // Runs terminate every 10 frames; at 100 fps that is 10 Hz.
        let signal = square_wave(100, 10, 5.0);
        let bouts = [BoutRange::new(0, 99)];
        let stats = beat_stats(&signal, 1.0, false, &bouts, 100.0, FrequencyConvention::PerPeak);
        assert_relative_eq!(stats.frequency_hz, 10.0, max_relative = 1e-9);
        assert_relative_eq!(stats.n_peaks, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn alternation_convention_doubles_frequency_and_halves_count() {
        let signal = square_wave(100, 10, 5.0);
        let bouts = [BoutRange::new(0, 99)];
        let per_peak = beat_stats(&signal, 1.0, false, &bouts, 100.0, FrequencyConvention::PerPeak);
        let alternating = beat_stats(
            &signal,
            1.0,
            false,
            &bouts,
            100.0,
            FrequencyConvention::FinAlternation,
        );
        assert_relative_eq!(
            alternating.frequency_hz,
            2.0 * per_peak.frequency_hz,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            alternating.n_peaks,
            per_peak.n_peaks / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn two_sided_cutoff_counts_negative_excursions() {
        let mut signal = vec![0.0; 20];
        signal[2] = 5.0;
        signal[8] = -5.0;
        signal[14] = 5.0;
        let bouts = [BoutRange::new(0, 19)];
        let stats = beat_stats(&signal, 1.0, true, &bouts, 100.0, FrequencyConvention::PerPeak);
        assert_relative_eq!(stats.n_peaks, 3.0, max_relative = 1e-12);

        let one_sided = beat_stats(&signal, 1.0, false, &bouts, 100.0, FrequencyConvention::PerPeak);
        assert_relative_eq!(one_sided.n_peaks, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn fewer_than_two_runs_reports_zero_frequency() {
        let mut signal = vec![0.0; 10];
        signal[4] = 5.0;
        let bouts = [BoutRange::new(0, 9)];
        let stats = beat_stats(&signal, 1.0, false, &bouts, 100.0, FrequencyConvention::PerPeak);
        assert_relative_eq!(stats.frequency_hz, 0.0, epsilon = 1e-12);
        assert_relative_eq!(stats.n_peaks, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn frames_outside_bouts_are_ignored() {
        let signal = square_wave(100, 10, 5.0);
        let bouts = [BoutRange::new(0, 9)];
        let stats = beat_stats(&signal, 1.0, false, &bouts, 100.0, FrequencyConvention::PerPeak);
        assert_relative_eq!(stats.n_peaks, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn out_of_range_bout_is_skipped() {
        let signal = vec![5.0; 4];
        let bouts = [BoutRange::new(10, 20)];
        let stats = beat_stats(&signal, 1.0, false, &bouts, 100.0, FrequencyConvention::PerPeak);
        assert_relative_eq!(stats.n_peaks, 0.0, epsilon = 1e-12);
    }
}
