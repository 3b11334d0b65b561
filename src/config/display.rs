//! Plotting configuration for log-scale display values.

use serde::{Deserialize, Serialize};

fn default_extinct_offset() -> f64 {
    0.5
}

fn default_empty_corpus_min() -> f64 {
    1.0
}

/// Configuration for the plotting reducer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottingConfig {
    /// Distance below the corpus minimum at which extinct and dormant
    /// languages are plotted (default: 0.5)
    #[serde(default = "default_extinct_offset")]
    pub extinct_offset: f64,

    /// Corpus minimum used when no record resolved to a number (default: 1.0)
    #[serde(default = "default_empty_corpus_min")]
    pub empty_corpus_min: f64,

    /// Lowest value a sentinel may take. A corpus whose minimum is 0 (any
    /// "<N" or "fewer than" record) otherwise puts the sentinel below zero,
    /// which a log axis cannot show. Unset by default.
    #[serde(default)]
    pub sentinel_floor: Option<f64>,
}

impl Default for PlottingConfig {
    fn default() -> Self {
        Self {
            extinct_offset: default_extinct_offset(),
            empty_corpus_min: default_empty_corpus_min(),
            sentinel_floor: None,
        }
    }
}

impl PlottingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.extinct_offset.is_finite() && self.extinct_offset > 0.0) {
            return Err(format!(
                "plotting.extinct_offset must be a positive number, got {}",
                self.extinct_offset
            ));
        }
        if !self.empty_corpus_min.is_finite() {
            return Err("plotting.empty_corpus_min must be finite".to_string());
        }
        if let Some(floor) = self.sentinel_floor {
            if !floor.is_finite() {
                return Err(format!("plotting.sentinel_floor must be finite, got {}", floor));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlottingConfig::default();
        assert_eq!(config.extinct_offset, 0.5);
        assert_eq!(config.empty_corpus_min, 1.0);
        assert_eq!(config.sentinel_floor, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_offset_is_invalid() {
        let config = PlottingConfig {
            extinct_offset: 0.0,
            ..PlottingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
