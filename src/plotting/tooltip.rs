//! Human-facing speaker value for chart tooltips.

use crate::core::{NumberCategory, SpeakerCountRecord};

/// Tooltip text: the vitality status for silent languages, a formatted count
/// for exact figures, and the source wording for everything else.
pub fn tooltip_label(record: &SpeakerCountRecord) -> Option<String> {
    if let Some(status) = record.vitality_status.filter(|s| s.is_silent()) {
        return Some(status.to_string());
    }

    match record.category? {
        NumberCategory::Exact => record.point.map(format_count),
        category if category.is_resolved() => record
            .raw_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

/// `1500000.0` -> `"1,500,000"`
pub fn format_count(value: f64) -> String {
    let digits = (value.max(0.0).round() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
