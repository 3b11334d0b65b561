//! Speaker-number range filtering for map display.
//!
//! A record is shown when its bound interval overlaps the selected range.
//! Ranges are usually picked on a log scale, as powers of ten.

use crate::core::SpeakerCountRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeakerRangeFilter {
    pub lower: f64,
    pub upper: f64,
}

impl SpeakerRangeFilter {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Range `[10^lower_power, 10^upper_power]`. A lower power at the
    /// `floor_power` of the scale means "from zero", so extinct languages and
    /// open-ended "fewer than" ranges stay selectable.
    pub fn from_powers_of_ten(lower_power: f64, upper_power: f64, floor_power: f64) -> Self {
        let lower = if lower_power <= floor_power {
            0.0
        } else {
            10f64.powf(lower_power)
        };
        Self::new(lower, 10f64.powf(upper_power))
    }

    /// Smallest power of ten covering every record's upper bound.
    pub fn max_power_of_ten(records: &[SpeakerCountRecord]) -> Option<f64> {
        records
            .iter()
            .filter_map(|r| r.max)
            .filter(|max| *max > 0.0)
            .fold(None, |acc: Option<f64>, max| Some(acc.map_or(max, |a| a.max(max))))
            .map(|max| max.log10().ceil())
    }

    pub fn matches(&self, record: &SpeakerCountRecord) -> bool {
        match (record.min, record.max) {
            (Some(min), Some(max)) => max >= self.lower && min <= self.upper,
            _ => false,
        }
    }

    pub fn apply<'a>(&self, records: &'a [SpeakerCountRecord]) -> Vec<&'a SpeakerCountRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bounds, Provenance};

    fn bounded(min: f64, max: f64) -> SpeakerCountRecord {
        SpeakerCountRecord::new(None, Provenance::default(), None)
            .with_bounds(Bounds::fixed(min, max))
    }

    #[test]
    fn test_overlap_is_inclusive() {
        let filter = SpeakerRangeFilter::new(100.0, 1000.0);
        assert!(filter.matches(&bounded(50.0, 100.0)));
        assert!(filter.matches(&bounded(1000.0, 5000.0)));
        assert!(!filter.matches(&bounded(10.0, 99.0)));
        assert!(!filter.matches(&bounded(1001.0, 2000.0)));
    }

    #[test]
    fn test_unbounded_records_are_excluded() {
        let filter = SpeakerRangeFilter::new(0.0, f64::MAX);
        assert!(!filter.matches(&SpeakerCountRecord::default()));
    }

    #[test]
    fn test_floor_power_means_zero() {
        let filter = SpeakerRangeFilter::from_powers_of_ten(-1.0, 3.0, -1.0);
        assert_eq!(filter.lower, 0.0);
        assert!((filter.upper - 1000.0).abs() < 1e-9);
        assert!(filter.matches(&bounded(0.0, 0.0)));

        let filter = SpeakerRangeFilter::from_powers_of_ten(2.0, 3.0, -1.0);
        assert!((filter.lower - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_power_of_ten() {
        let records = vec![bounded(0.0, 0.0), bounded(10.0, 4500.0), bounded(1.0, 20.0)];
        assert_eq!(SpeakerRangeFilter::max_power_of_ten(&records), Some(4.0));
        assert_eq!(SpeakerRangeFilter::max_power_of_ten(&[]), None);
    }

    #[test]
    fn test_apply_keeps_order() {
        let records = vec![bounded(500.0, 600.0), bounded(1.0, 2.0), bounded(700.0, 800.0)];
        let kept = SpeakerRangeFilter::new(100.0, 1000.0).apply(&records);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].min, Some(500.0));
        assert_eq!(kept[1].min, Some(700.0));
    }
}
