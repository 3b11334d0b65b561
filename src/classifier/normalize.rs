//! Text normalization applied before the rule cascade.
//!
//! Upstream scrapers usually replace typographic dashes and non-breaking
//! spaces already; normalizing again here makes raw and pre-cleaned text
//! classify identically.

/// Lower-case, ASCII-fold dashes and spaces, drop thousands separators and
/// collapse whitespace.
///
/// # Examples
///
/// ```rust
/// use speakermap::classifier::normalize_text;
///
/// assert_eq!(normalize_text("  1,500\u{2013}2,000 "), "1500-2000");
/// assert_eq!(normalize_text("A\u{00A0}few   Hundred"), "a few hundred");
/// ```
pub fn normalize_text(raw: &str) -> String {
    let folded: String = raw
        .chars()
        .filter(|&c| c != ',')
        .map(fold_char)
        .collect::<String>()
        .to_lowercase();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_char(c: char) -> char {
    match c {
        '\u{2010}'..='\u{2015}' | '\u{2212}' => '-',
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => ' ',
        other => other,
    }
}
