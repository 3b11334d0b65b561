//! Plotting reducer: one log-scale-safe scalar per record.
//!
//! Intervals collapse to their midpoint, point shapes to their point, and
//! extinct/dormant languages to a sentinel just below the corpus minimum so
//! they sort under every living language. When the corpus minimum is 0 the
//! sentinel is negative unless `plotting.sentinel_floor` is set.

pub mod band;
pub mod filter;
pub mod tooltip;

pub use band::SpeakerBand;
pub use filter::SpeakerRangeFilter;
pub use tooltip::tooltip_label;

use crate::config::PlottingConfig;
use crate::core::{NumberCategory, SpeakerCountRecord};

/// Reduces records to plotting values under one configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlottingReducer {
    config: PlottingConfig,
}

impl PlottingReducer {
    pub fn new(config: PlottingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlottingConfig {
        &self.config
    }

    /// Value plotted for extinct and dormant languages.
    pub fn silent_sentinel(&self, corpus_min_numeric: f64) -> f64 {
        let sentinel = corpus_min_numeric - self.config.extinct_offset;
        match self.config.sentinel_floor {
            Some(floor) => sentinel.max(floor),
            None => sentinel,
        }
    }

    pub fn plotting_value(
        &self,
        record: &SpeakerCountRecord,
        corpus_min_numeric: f64,
    ) -> Option<f64> {
        if record.has_vitality_override() {
            return Some(self.silent_sentinel(corpus_min_numeric));
        }

        match record.category? {
            NumberCategory::Range | NumberCategory::QualitativeRange => {
                Some((record.min? + record.max?) / 2.0)
            }
            NumberCategory::Exact
            | NumberCategory::Estimate
            | NumberCategory::QualitativeEstimate => record.point,
            NumberCategory::Error | NumberCategory::Unclassified => None,
        }
    }
}

/// Plotting value with the default sentinel offset.
pub fn plotting_value(record: &SpeakerCountRecord, corpus_min_numeric: f64) -> Option<f64> {
    PlottingReducer::default().plotting_value(record, corpus_min_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bounds, Classification, Provenance, VitalityStatus};

    fn classified(text: &str, c: Classification) -> SpeakerCountRecord {
        SpeakerCountRecord::new(Some(text.into()), Provenance::default(), None)
            .with_classification(c)
    }

    #[test]
    fn test_extinct_is_corpus_min_minus_half() {
        let record = SpeakerCountRecord::new(None, Provenance::default(), Some(VitalityStatus::Extinct))
            .with_classification(Classification::unclassified())
            .with_bounds(Bounds::zero());
        assert_eq!(plotting_value(&record, 12.0), Some(11.5));
    }

    #[test]
    fn test_dormant_overrides_numeric_category() {
        let record = SpeakerCountRecord::new(
            Some("1500".into()),
            Provenance::default(),
            Some(VitalityStatus::Dormant),
        )
        .with_classification(Classification::exact(1500.0));
        assert_eq!(plotting_value(&record, 3.0), Some(2.5));
    }

    #[test]
    fn test_range_uses_midpoint() {
        let record = classified("200-300", Classification::range(200.0, 300.0));
        assert_eq!(plotting_value(&record, 1.0), Some(250.0));
    }

    #[test]
    fn test_point_categories_use_point() {
        let record = classified("~200", Classification::estimate(200.0))
            .with_bounds(Bounds::fixed(150.0, 250.0));
        assert_eq!(plotting_value(&record, 1.0), Some(200.0));
    }

    #[test]
    fn test_error_and_unclassified_have_no_value() {
        let record = classified("unknown", Classification::error());
        assert_eq!(plotting_value(&record, 1.0), None);
        let record = SpeakerCountRecord::default();
        assert_eq!(plotting_value(&record, 1.0), None);
    }

    #[test]
    fn test_configured_offset() {
        let reducer = PlottingReducer::new(PlottingConfig {
            extinct_offset: 0.25,
            ..PlottingConfig::default()
        });
        assert_eq!(reducer.silent_sentinel(1.0), 0.75);
    }

    #[test]
    fn test_sentinel_floor_keeps_zero_corpus_plottable() {
        let unfloored = PlottingReducer::default();
        assert_eq!(unfloored.silent_sentinel(0.0), -0.5);

        let floored = PlottingReducer::new(PlottingConfig {
            sentinel_floor: Some(0.1),
            ..PlottingConfig::default()
        });
        assert_eq!(floored.silent_sentinel(0.0), 0.1);
        assert_eq!(floored.silent_sentinel(12.0), 11.5);
    }
}
