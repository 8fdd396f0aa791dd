//! Landmark series data model.
//!
//! A landmark is a named tracked anatomical point with three parallel
//! frame-indexed sequences (x, y, confidence). Sets of landmarks are handed
//! in by an out-of-scope parsing collaborator; this module only defines the
//! runtime shape and the loud failure modes for configuration references
//! that cannot be satisfied.

use std::collections::BTreeMap;
use std::path::Path;

use nalgebra::Point2;

use crate::error::SwimkinError;

/// Per-frame coordinates and tracking confidence of one landmark.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LandmarkSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub conf: Vec<f64>,
}

impl LandmarkSeries {
    pub fn new(x: Vec<f64>, y: Vec<f64>, conf: Vec<f64>) -> Self {
        Self { x, y, conf }
    }

    /// Number of frames in this series.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Coordinates at `frame`. Callers iterate `0..len()`.
    pub fn point(&self, frame: usize) -> Point2<f64> {
        Point2::new(self.x[frame], self.y[frame])
    }

    fn check_ragged(&self, name: &str) -> Result<(), SwimkinError> {
        if self.x.len() != self.y.len() || self.x.len() != self.conf.len() {
            return Err(SwimkinError::RaggedSeries {
                name: name.to_string(),
                x: self.x.len(),
                y: self.y.len(),
                conf: self.conf.len(),
            });
        }
        Ok(())
    }
}

/// Mapping from landmark name to its per-frame series.
///
/// Serializes transparently as a JSON object
/// `{"name": {"x": [...], "y": [...], "conf": [...]}}`.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    series: BTreeMap<String, LandmarkSeries>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, series: LandmarkSeries) {
        self.series.insert(name.into(), series);
    }

    pub fn get(&self, name: &str) -> Option<&LandmarkSeries> {
        self.series.get(name)
    }

    /// Look up a landmark the configuration references, failing loudly when
    /// it is absent or internally ragged.
    pub fn require(&self, name: &str) -> Result<&LandmarkSeries, SwimkinError> {
        let series = self
            .series
            .get(name)
            .ok_or_else(|| SwimkinError::MissingLandmark {
                name: name.to_string(),
            })?;
        series.check_ragged(name)?;
        Ok(series)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Number of landmarks in the set.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Shared frame count across every landmark in the set.
    ///
    /// All series used together in one run must agree in length; a mismatch
    /// is a fatal error, not a per-frame sentinel.
    pub fn n_frames(&self) -> Result<usize, SwimkinError> {
        let mut iter = self.series.iter();
        let (first_name, first) = iter.next().ok_or(SwimkinError::EmptyLandmarkSet)?;
        first.check_ragged(first_name)?;
        let expected = first.len();
        for (name, series) in iter {
            series.check_ragged(name)?;
            if series.len() != expected {
                return Err(SwimkinError::FrameCountMismatch {
                    name: name.clone(),
                    len: series.len(),
                    expected,
                });
            }
        }
        Ok(expected)
    }

    /// Load a landmark set from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        let set: Self = serde_json::from_str(&data)?;
        Ok(set)
    }
}
