//! Multiplier phrases: "2 million", "3-4 thousand", "a few hundred".

use super::rules::RuleResult;
use super::tokens::{decimal_tokens, parse_decimal};
use crate::core::Classification;
use once_cell::sync::Lazy;
use regex::Regex;

/// A scale word and the value it multiplies by.
pub struct Multiplier {
    pub keyword: &'static str,
    pub factor: f64,
    occurrence: Regex,
    trailing: Regex,
}

/// Keywords in priority order. Only the first keyword that resolves is used.
pub static MULTIPLIERS: Lazy<Vec<Multiplier>> = Lazy::new(|| {
    [
        ("million", 1_000_000.0),
        ("thousand", 1_000.0),
        ("hundred", 100.0),
        ("dozen", 12.0),
    ]
    .into_iter()
    .map(|(keyword, factor)| Multiplier {
        keyword,
        factor,
        occurrence: Regex::new(&format!(r"\b{}s?\b", regex::escape(keyword))).unwrap(),
        trailing: Regex::new(&format!(r"\b{}s?(?:\s+of)?$", regex::escape(keyword))).unwrap(),
    })
    .collect()
});

/// Quantifiers accepted directly before a keyword. Longer phrases first so
/// "a few" wins over "a".
const QUANTIFIERS: &[(&str, f64)] = &[
    ("a couple of", 2.0),
    ("a couple", 2.0),
    ("couple of", 2.0),
    ("couple", 2.0),
    ("a few", 3.0),
    ("few", 3.0),
    ("several", 3.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("an", 1.0),
    ("a", 1.0),
];

/// Quantity of a keyword with no recognized quantifier in front of it
/// ("hundreds", "hundred thousand"): read as "several".
const DEFAULT_QUANTITY: f64 = 3.0;

static TRAILING_QUANTIFIER: Lazy<Regex> = Lazy::new(|| {
    let alternatives = QUANTIFIERS
        .iter()
        .map(|(phrase, _)| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?P<quantifier>{})$", alternatives)).unwrap()
});

const UPPER_BOUND_QUALIFIERS: &[&str] = &["fewer than", "less than", "or less", "or fewer"];

fn quantifier_value(phrase: &str) -> Option<f64> {
    QUANTIFIERS
        .iter()
        .find(|(candidate, _)| *candidate == phrase)
        .map(|(_, value)| *value)
}

/// Value of the words directly before a keyword.
///
/// A lower scale word compounds ("a few hundred" before "thousand" is 300),
/// otherwise a trailing quantifier is used, otherwise the "several" default.
fn leading_quantity(prefix: &str, lower: &[Multiplier]) -> f64 {
    let prefix = prefix.trim_end();
    for (i, m) in lower.iter().enumerate() {
        if let Some(found) = m.trailing.find(prefix) {
            return m.factor * leading_quantity(&prefix[..found.start()], &lower[i + 1..]);
        }
    }
    TRAILING_QUANTIFIER
        .captures(prefix)
        .and_then(|caps| quantifier_value(&caps["quantifier"]))
        .unwrap_or(DEFAULT_QUANTITY)
}

impl Multiplier {
    /// Quantity governing the first occurrence of this keyword, or `None`
    /// when the keyword is absent.
    fn quantity(&self, text: &str, lower: &[Multiplier]) -> Option<f64> {
        self.occurrence
            .find(text)
            .map(|found| leading_quantity(&text[..found.start()], lower))
    }

    /// Resolve `text` against this keyword.
    ///
    /// `None` means the keyword did not produce a shape and the next keyword
    /// (or the fallback rule) should be tried.
    fn resolve(&self, text: &str, numbers: &[&str], lower: &[Multiplier]) -> RuleResult {
        match numbers {
            [single] => Some(parse_decimal(single).map(|n| Classification::exact(n * self.factor))),
            [first, second] => Some(parse_decimal(first).and_then(|a| {
                parse_decimal(second).map(|b| Classification::range(a * self.factor, b * self.factor))
            })),
            [] => {
                let value = self.quantity(text, lower)? * self.factor;
                if has_upper_bound_qualifier(text) {
                    Some(Ok(Classification::qualitative_range(0.0, value)))
                } else {
                    Some(Ok(Classification::qualitative_estimate(value)))
                }
            }
            _ => None,
        }
    }
}

fn has_upper_bound_qualifier(text: &str) -> bool {
    UPPER_BOUND_QUALIFIERS.iter().any(|q| text.contains(q))
}

/// Multiplier rule: the first keyword present in `text` that resolves wins.
pub(crate) fn match_multiplier(text: &str) -> RuleResult {
    let numbers = decimal_tokens(text);
    MULTIPLIERS
        .iter()
        .enumerate()
        .filter(|(_, m)| m.occurrence.is_match(text))
        .find_map(|(i, m)| m.resolve(text, &numbers, &MULTIPLIERS[i + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NumberCategory;

    fn resolved(text: &str) -> Classification {
        match_multiplier(text).unwrap().unwrap()
    }

    #[test]
    fn test_single_number_scales_to_exact() {
        assert_eq!(resolved("2 million"), Classification::exact(2_000_000.0));
        assert_eq!(resolved("1.5 million"), Classification::exact(1_500_000.0));
    }

    #[test]
    fn test_two_numbers_scale_to_range() {
        assert_eq!(
            resolved("3 to 4 thousand"),
            Classification::range(3_000.0, 4_000.0)
        );
    }

    #[test]
    fn test_quantifiers() {
        assert_eq!(resolved("a few hundred"), Classification::qualitative_estimate(300.0));
        assert_eq!(resolved("a couple of thousand"), Classification::qualitative_estimate(2_000.0));
        assert_eq!(resolved("several dozen"), Classification::qualitative_estimate(36.0));
        assert_eq!(resolved("a dozen"), Classification::qualitative_estimate(12.0));
        assert_eq!(resolved("five hundred"), Classification::qualitative_estimate(500.0));
    }

    #[test]
    fn test_plural_keyword_defaults_to_several() {
        assert_eq!(resolved("hundreds"), Classification::qualitative_estimate(300.0));
    }

    #[test]
    fn test_upper_bound_qualifier_makes_range() {
        let c = resolved("fewer than a few hundred");
        assert_eq!(c.category, NumberCategory::QualitativeRange);
        assert_eq!((c.min, c.max), (Some(0.0), Some(300.0)));

        let c = resolved("a thousand or less");
        assert_eq!((c.min, c.max), (Some(0.0), Some(1_000.0)));
    }

    #[test]
    fn test_keyword_priority_prefers_million() {
        assert_eq!(
            resolved("a few million, not hundreds"),
            Classification::qualitative_estimate(3_000_000.0)
        );
    }

    #[test]
    fn test_bare_singular_keyword_defaults_to_several() {
        assert_eq!(resolved("hundred"), Classification::qualitative_estimate(300.0));
    }

    #[test]
    fn test_lower_keyword_compounds_into_higher() {
        assert_eq!(
            resolved("a few hundred thousand"),
            Classification::qualitative_estimate(300_000.0)
        );
        assert_eq!(
            resolved("several hundred million"),
            Classification::qualitative_estimate(300_000_000.0)
        );
        assert_eq!(
            resolved("a hundred thousand"),
            Classification::qualitative_estimate(100_000.0)
        );
        assert_eq!(
            resolved("hundreds of thousands"),
            Classification::qualitative_estimate(300_000.0)
        );
    }

    #[test]
    fn test_unquantified_compound_uses_default() {
        assert_eq!(
            resolved("hundred thousand"),
            Classification::qualitative_estimate(300_000.0)
        );
    }

    #[test]
    fn test_compound_with_upper_bound_qualifier() {
        let c = resolved("fewer than a few hundred thousand");
        assert_eq!((c.min, c.max), (Some(0.0), Some(300_000.0)));
    }

    #[test]
    fn test_three_numbers_do_not_match() {
        assert!(match_multiplier("1 2 3 thousand").is_none());
    }

    #[test]
    fn test_no_keyword_does_not_match() {
        assert!(match_multiplier("about 40 speakers").is_none());
    }
}
