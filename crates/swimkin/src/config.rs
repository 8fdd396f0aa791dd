//! Run configuration.
//!
//! The shape of incoming configuration files is validated by an
//! out-of-scope collaborator; this module only defines the runtime types.
//! Unknown JSON fields are ignored so that full legacy configuration files
//! (plot settings, file inputs, ...) load unchanged.

use std::path::Path;

use crate::bouts::BoutRange;
use crate::frequency::FrequencyConvention;

/// The two landmarks whose line defines the per-frame centerline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeadPoints {
    pub pt1: String,
    pub pt2: String,
}

/// Landmark names per anatomical group.
///
/// `spine` is ordered head → tail; its first entry is the reference head
/// position and its last entry is the tail tip. `tail` lists the candidates
/// for the furthest-tail-point metric, in priority order for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PointGroups {
    pub spine: Vec<String>,
    pub left_fin: Vec<String>,
    pub right_fin: Vec<String>,
    pub tail: Vec<String>,
    pub head: HeadPoints,
}

impl Default for PointGroups {
    fn default() -> Self {
        Self {
            spine: vec![
                "head".to_string(),
                "spine_1".to_string(),
                "spine_2".to_string(),
                "spine_3".to_string(),
                "tail_tip".to_string(),
            ],
            left_fin: vec!["left_fin_base".to_string(), "left_fin_tip".to_string()],
            right_fin: vec!["right_fin_base".to_string(), "right_fin_tip".to_string()],
            tail: vec![
                "spine_2".to_string(),
                "spine_3".to_string(),
                "tail_tip".to_string(),
            ],
            head: HeadPoints {
                pt1: "head".to_string(),
                pt2: "spine_1".to_string(),
            },
        }
    }
}

/// Recording geometry used to convert pixel offsets to physical distance.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VideoParameters {
    pub pixel_scale_factor: f64,
    /// Physical diameter of the recording dish, meters.
    pub dish_diameter_m: f64,
    /// Diameter of the dish in image pixels.
    pub pixel_diameter: f64,
    /// Frames per second of the recording.
    pub recorded_framerate: f64,
}

impl VideoParameters {
    /// Pixel-to-meter conversion constant, computed once per run.
    pub fn scale_factor(&self) -> f64 {
        self.pixel_scale_factor * self.dish_diameter_m / self.pixel_diameter
    }
}

impl Default for VideoParameters {
    fn default() -> Self {
        Self {
            pixel_scale_factor: 1.0,
            dish_diameter_m: 0.09,
            pixel_diameter: 900.0,
            recorded_framerate: 300.0,
        }
    }
}

/// Thresholds and window widths for peak detection and bout segmentation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GraphCutoffs {
    /// Left-fin angle threshold, degrees.
    pub left_fin_angle: f64,
    /// Right-fin angle threshold, degrees.
    pub right_fin_angle: f64,
    /// Tail threshold, applied to the scaled tail distance (legacy name).
    pub tail_angle: f64,
    /// Maximum frame gap between synchronized peaks inside one bout.
    pub movement_bout_width: i64,
    /// Frames a bout extends past its earliest/latest contributing peak.
    pub swim_bout_buffer: i64,
    /// Signed shift applied to both bout ends, frames.
    pub swim_bout_right_shift: i64,
    /// Half-width of the window local-extremum detector, frames.
    pub peak_horizontal_buffer: usize,
    /// Require the tail signal for bout detection (require-all mode) instead
    /// of the fins alone (require-any mode).
    pub use_tail_angle: bool,
}

impl Default for GraphCutoffs {
    fn default() -> Self {
        Self {
            left_fin_angle: 20.0,
            right_fin_angle: 20.0,
            tail_angle: 0.004,
            movement_bout_width: 20,
            swim_bout_buffer: 5,
            swim_bout_right_shift: 0,
            peak_horizontal_buffer: 3,
            use_tail_angle: false,
        }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KinematicsConfig {
    pub points: PointGroups,
    #[serde(default)]
    pub video_parameters: VideoParameters,
    #[serde(default)]
    pub graph_cutoffs: GraphCutoffs,
    /// Run the bout segmenter; when false, `time_ranges` (or the whole
    /// recording) is used instead.
    #[serde(default = "default_true")]
    pub auto_find_time_ranges: bool,
    /// Manually supplied bout ranges, `[[start, end], ...]`. The legacy
    /// sentinel `[[0, 0]]` means "the whole recording".
    #[serde(default)]
    pub time_ranges: Vec<BoutRange>,
    #[serde(default)]
    pub frequency_convention: FrequencyConvention,
}

impl KinematicsConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        Ok(config)
    }
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            points: PointGroups::default(),
            video_parameters: VideoParameters::default(),
            graph_cutoffs: GraphCutoffs::default(),
            auto_find_time_ranges: true,
            time_ranges: Vec::new(),
            frequency_convention: FrequencyConvention::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
