//! High-level analysis API.
//!
//! [`Analyzer`] is the primary entry point. It wraps a [`KinematicsConfig`]
//! and provides convenience methods for running the pipeline on landmark
//! sets. Create once, analyze many recordings.

use std::path::Path;

use crate::config::KinematicsConfig;
use crate::error::SwimkinError;
use crate::landmarks::LandmarkSet;
use crate::pipeline;
use crate::summary::{summarize_bouts, BoutSummary};
use crate::table::KinematicsTable;

/// Primary analysis interface.
///
/// # Examples
///
/// ```
/// use swimkin::{Analyzer, LandmarkSeries, LandmarkSet};
///
/// let mut landmarks = LandmarkSet::new();
/// for name in [
///     "head", "spine_1", "spine_2", "spine_3", "tail_tip",
///     "left_fin_base", "left_fin_tip", "right_fin_base", "right_fin_tip",
/// ] {
///     landmarks.insert(
///         name,
///         LandmarkSeries::new(vec![0.0, 1.0], vec![0.0, 0.0], vec![1.0, 1.0]),
///     );
/// }
/// let table = Analyzer::new().run(&landmarks).unwrap();
/// assert_eq!(table.n_frames(), 2);
/// ```
pub struct Analyzer {
    config: KinematicsConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: KinematicsConfig::default(),
        }
    }

    /// Create with full config control.
    pub fn with_config(config: KinematicsConfig) -> Self {
        Self { config }
    }

    /// Load configuration JSON and create an analyzer in one step.
    pub fn from_config_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::with_config(KinematicsConfig::from_json_file(path)?))
    }

    /// Access the current configuration.
    pub fn config(&self) -> &KinematicsConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut KinematicsConfig {
        &mut self.config
    }

    /// Run the kinematics pipeline on a landmark set.
    pub fn run(&self, landmarks: &LandmarkSet) -> Result<KinematicsTable, SwimkinError> {
        pipeline::run_pipeline(landmarks, &self.config)
    }

    /// Run the pipeline and summarize each detected bout.
    pub fn run_with_summaries(
        &self,
        landmarks: &LandmarkSet,
    ) -> Result<(KinematicsTable, Vec<BoutSummary>), SwimkinError> {
        let table = self.run(landmarks)?;
        let summaries = summarize_bouts(
            &table,
            &self.config.graph_cutoffs,
            self.config.video_parameters.recorded_framerate,
            self.config.frequency_convention,
        );
        Ok((table, summaries))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
