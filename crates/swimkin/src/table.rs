//! Final frame-indexed result table.
//!
//! Columnar in memory; [`KinematicsTable::to_records`] renders the
//! row-oriented legacy layout that downstream export/plotting collaborators
//! consume, including its deliberately sparse bout metadata: the
//! `timeRangeStart_i`/`timeRangeEnd_i` keys appear on row 0 only.

use serde_json::{Map, Value};

use crate::bouts::BoutRange;
use crate::metrics::TailSide;
use crate::peaks::PeakMark;

/// Per-frame kinematic descriptors plus the detected bout list.
///
/// Every column has exactly one entry per input frame. Numeric columns are
/// value-or-NaN; categorical columns use a fixed small vocabulary with
/// `None`/empty-string as the per-frame failure sentinel. `bout_head_yaw`
/// is set only inside a bout; `None` there means "outside every bout",
/// never "zero centered yaw".
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct KinematicsTable {
    pub time: Vec<usize>,
    pub lf_angle: Vec<f64>,
    pub rf_angle: Vec<f64>,
    pub head_yaw: Vec<f64>,
    pub head_x: Vec<f64>,
    pub head_y: Vec<f64>,
    pub tail_angle: Vec<f64>,
    pub tail_distance: Vec<f64>,
    pub tail_side: Vec<Option<TailSide>>,
    pub furthest_tail_point: Vec<String>,
    pub left_fin_peaks: Vec<PeakMark>,
    pub right_fin_peaks: Vec<PeakMark>,
    /// Head yaw re-centered on each bout's first frame; `None` outside bouts.
    pub bout_head_yaw: Vec<Option<f64>>,
    /// One series per spine joint, exported as `TailAngle_0..`.
    pub spine_angles: Vec<Vec<f64>>,
    pub bouts: Vec<BoutRange>,
}

impl KinematicsTable {
    /// Number of frames (rows).
    pub fn n_frames(&self) -> usize {
        self.time.len()
    }

    /// Number of spine joint columns.
    pub fn n_spine_joints(&self) -> usize {
        self.spine_angles.len()
    }

    /// Render the legacy row-oriented layout.
    ///
    /// NaN serializes as JSON null; categorical sentinels serialize as the
    /// empty string. Bout metadata is emitted on the first row only;
    /// consumers read it exclusively from there.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        let mut records = Vec::with_capacity(self.n_frames());

        for i in 0..self.n_frames() {
            let mut row = Map::new();
            row.insert("Time".to_string(), Value::from(self.time[i]));
            row.insert("LF_Angle".to_string(), Value::from(self.lf_angle[i]));
            row.insert("RF_Angle".to_string(), Value::from(self.rf_angle[i]));
            row.insert("HeadYaw".to_string(), Value::from(self.head_yaw[i]));
            row.insert("HeadX".to_string(), Value::from(self.head_x[i]));
            row.insert("HeadY".to_string(), Value::from(self.head_y[i]));
            row.insert("Tail_Angle".to_string(), Value::from(self.tail_angle[i]));
            row.insert(
                "Tail_Distance".to_string(),
                Value::from(self.tail_distance[i]),
            );
            row.insert(
                "Tail_Side".to_string(),
                Value::from(self.tail_side[i].map_or("", TailSide::as_str)),
            );
            row.insert(
                "Furthest_Tail_Point".to_string(),
                Value::from(self.furthest_tail_point[i].as_str()),
            );
            row.insert(
                "leftFinPeaks".to_string(),
                Value::from(self.left_fin_peaks[i].as_str()),
            );
            row.insert(
                "rightFinPeaks".to_string(),
                Value::from(self.right_fin_peaks[i].as_str()),
            );
            row.insert(
                "curBoutHeadYaw".to_string(),
                match self.bout_head_yaw[i] {
                    Some(v) => Value::from(v),
                    None => Value::from(""),
                },
            );
            for (joint, angles) in self.spine_angles.iter().enumerate() {
                row.insert(format!("TailAngle_{joint}"), Value::from(angles[i]));
            }
            if i == 0 {
                for (b, range) in self.bouts.iter().enumerate() {
                    row.insert(format!("timeRangeStart_{b}"), Value::from(range.start));
                    row.insert(format!("timeRangeEnd_{b}"), Value::from(range.end));
                }
            }
            records.push(row);
        }
        records
    }
}
