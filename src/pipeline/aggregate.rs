//! Corpus-wide aggregation: the barrier between bound estimation and
//! plotting.

use crate::core::SpeakerCountRecord;

/// Numeric values a record contributes to the corpus minimum: its point and,
/// for interval categories, the lower bound the classifier found. Records
/// under a vitality override contribute nothing (their zeros are synthetic).
fn resolved_values(record: &SpeakerCountRecord) -> impl Iterator<Item = f64> {
    let overridden = record.has_vitality_override();
    let interval_min = record
        .category
        .filter(|c| c.is_interval())
        .and(record.min);
    record
        .point
        .into_iter()
        .chain(interval_min)
        .filter(move |v| !overridden && v.is_finite())
}

/// Minimum of all resolved numeric values, or `None` for a corpus with none.
pub fn corpus_min_numeric(records: &[SpeakerCountRecord]) -> Option<f64> {
    records
        .iter()
        .flat_map(resolved_values)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.min(v))))
}
