//! Classifier configuration.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

fn default_year_min() -> i32 {
    1500
}

fn default_year_max() -> i32 {
    2100
}

/// Tunables for the pattern classifier.
///
/// The rule cascade itself is fixed; only the window used to decide whether a
/// trailing 4-digit token is a citation year is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Earliest value accepted as a citation year (default: 1500)
    #[serde(default = "default_year_min")]
    pub year_min: i32,

    /// Latest value accepted as a citation year (default: 2100)
    #[serde(default = "default_year_max")]
    pub year_max: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            year_min: default_year_min(),
            year_max: default_year_max(),
        }
    }
}

impl ClassifierConfig {
    pub fn year_window(&self) -> RangeInclusive<i32> {
        self.year_min..=self.year_max
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.year_min > self.year_max {
            return Err(format!(
                "classifier.year_min ({}) must not exceed classifier.year_max ({})",
                self.year_min, self.year_max
            ));
        }
        if !(1000..=9999).contains(&self.year_min) || !(1000..=9999).contains(&self.year_max) {
            return Err("classifier year window must use 4-digit years".to_string());
        }
        Ok(())
    }
}
