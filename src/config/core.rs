use serde::{Deserialize, Serialize};

use super::classification::ClassifierConfig;
use super::display::PlottingConfig;
use super::parallel::ParallelConfig;
use super::scoring::ConfidenceWeights;

/// Root configuration structure for speakermap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SpeakermapConfig {
    /// Confidence weight tables
    #[serde(default)]
    pub confidence: Option<ConfidenceWeights>,

    /// Classifier tunables
    #[serde(default)]
    pub classifier: Option<ClassifierConfig>,

    /// Plotting reducer configuration
    #[serde(default)]
    pub plotting: Option<PlottingConfig>,

    /// Parallel batch processing configuration
    #[serde(default)]
    pub parallel: Option<ParallelConfig>,
}

impl SpeakermapConfig {
    pub fn confidence_weights(&self) -> ConfidenceWeights {
        self.confidence.unwrap_or_default()
    }

    pub fn classifier_config(&self) -> ClassifierConfig {
        self.classifier.unwrap_or_default()
    }

    pub fn plotting_config(&self) -> PlottingConfig {
        self.plotting.unwrap_or_default()
    }

    pub fn parallel_config(&self) -> ParallelConfig {
        self.parallel.clone().unwrap_or_default()
    }
}
