//! Batch summary for operators: how many records resolved, and how.

use crate::core::{NumberCategory, SpeakerCountRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts over one enriched batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub by_category: BTreeMap<NumberCategory, usize>,
    /// Records with no text to classify
    pub unclassified: usize,
    /// Records whose text could not be resolved
    pub errors: usize,
    /// Resolved records whose provenance was incomplete
    pub absent_confidence: usize,
    /// Extinct or dormant records
    pub vitality_overrides: usize,
    pub corpus_min: Option<f64>,
}

impl BatchSummary {
    pub fn from_records(records: &[SpeakerCountRecord], corpus_min: Option<f64>) -> Self {
        let mut by_category: BTreeMap<NumberCategory, usize> = BTreeMap::new();
        for category in records.iter().filter_map(|r| r.category) {
            *by_category.entry(category).or_insert(0) += 1;
        }

        let count = |category| by_category.get(&category).copied().unwrap_or(0);

        Self {
            total: records.len(),
            unclassified: count(NumberCategory::Unclassified),
            errors: count(NumberCategory::Error),
            absent_confidence: records
                .iter()
                .filter(|r| r.category.is_some_and(NumberCategory::is_resolved))
                .filter(|r| r.confidence.is_none())
                .count(),
            vitality_overrides: records.iter().filter(|r| r.has_vitality_override()).count(),
            corpus_min,
            by_category,
        }
    }

    /// Records that need operator attention.
    pub fn unresolved(&self) -> usize {
        self.unclassified + self.errors
    }

    pub fn report(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!("\nEnriched {} record(s)\n", self.total));
        report.push_str("\nBy category:\n");
        for (category, count) in &self.by_category {
            report.push_str(&format!("  {}: {}\n", category, count));
        }

        report.push_str(&format!(
            "\nUnresolved: {} ({} unclassified, {} error)\n",
            self.unresolved(),
            self.unclassified,
            self.errors
        ));
        report.push_str(&format!(
            "Without confidence (incomplete provenance): {}\n",
            self.absent_confidence
        ));
        report.push_str(&format!(
            "Extinct or dormant: {}\n",
            self.vitality_overrides
        ));
        match self.corpus_min {
            Some(min) => report.push_str(&format!("Corpus minimum: {}\n", min)),
            None => report.push_str("Corpus minimum: (none resolved)\n"),
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classification, Provenance, VitalityStatus};

    #[test]
    fn test_counts() {
        let records = vec![
            SpeakerCountRecord::default().with_classification(Classification::exact(10.0)),
            SpeakerCountRecord::default()
                .with_classification(Classification::exact(20.0))
                .with_confidence(Some(1.0)),
            SpeakerCountRecord::default().with_classification(Classification::error()),
            SpeakerCountRecord::new(None, Provenance::default(), Some(VitalityStatus::Extinct))
                .with_classification(Classification::unclassified()),
        ];

        let summary = BatchSummary::from_records(&records, Some(10.0));
        assert_eq!(summary.total, 4);
        assert_eq!(summary.by_category.get(&NumberCategory::Exact), Some(&2));
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.unclassified, 1);
        assert_eq!(summary.unresolved(), 2);
        assert_eq!(summary.absent_confidence, 1);
        assert_eq!(summary.vitality_overrides, 1);
    }

    #[test]
    fn test_report_mentions_unresolved() {
        let records =
            vec![SpeakerCountRecord::default().with_classification(Classification::error())];
        let report = BatchSummary::from_records(&records, None).report();
        assert!(report.contains("Unresolved: 1 (0 unclassified, 1 error)"));
        assert!(report.contains("(none resolved)"));
    }
}
