//! The ordered classification rules.
//!
//! Each rule is a standalone matcher. [`Rule::CASCADE`] fixes their order:
//! symbol-anchored patterns run before keyword patterns, which run before the
//! permissive digit scrape. The first rule that matches decides the result.

use super::multiplier::match_multiplier;
use super::tokens::{as_year, first_year, integer_tokens, parse_integer};
use crate::config::ClassifierConfig;
use crate::core::errors::ClassifyError;
use crate::core::Classification;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// `None` = rule does not apply; `Some(Err)` = rule applied but a number
/// could not be converted.
pub type RuleResult = Option<Result<Classification, ClassifyError>>;

/// What a matcher sees: the untouched text and its normalized form.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub raw: &'a str,
    pub text: &'a str,
    pub config: &'a ClassifierConfig,
}

pub type Matcher = fn(&RuleInput<'_>) -> RuleResult;

static APPROXIMATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^~\s*(\d+)").unwrap());
static BELOW_SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<\s*(\d+)").unwrap());
static FEWER_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^fewer than\s+(\d+)").unwrap());
static EXPLICIT_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").unwrap());

const CITED: &str = "cited";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Blank,
    AllDigits,
    Cited,
    Approximate,
    BelowSymbol,
    FewerThan,
    ExplicitRange,
    Multiplier,
    FirstInteger,
}

impl Rule {
    /// Priority order of the cascade. Changing it changes classifications.
    pub const CASCADE: [Rule; 9] = [
        Rule::Blank,
        Rule::AllDigits,
        Rule::Cited,
        Rule::Approximate,
        Rule::BelowSymbol,
        Rule::FewerThan,
        Rule::ExplicitRange,
        Rule::Multiplier,
        Rule::FirstInteger,
    ];

    pub fn matcher(self) -> Matcher {
        match self {
            Rule::Blank => match_blank,
            Rule::AllDigits => match_all_digits,
            Rule::Cited => match_cited,
            Rule::Approximate => match_approximate,
            Rule::BelowSymbol => match_below_symbol,
            Rule::FewerThan => match_fewer_than,
            Rule::ExplicitRange => match_explicit_range,
            Rule::Multiplier => match_multiplier_phrase,
            Rule::FirstInteger => match_first_integer,
        }
    }

    pub fn apply(self, input: &RuleInput<'_>) -> RuleResult {
        (self.matcher())(input)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Rule::Blank => "blank",
            Rule::AllDigits => "all_digits",
            Rule::Cited => "cited",
            Rule::Approximate => "approximate",
            Rule::BelowSymbol => "below_symbol",
            Rule::FewerThan => "fewer_than",
            Rule::ExplicitRange => "explicit_range",
            Rule::Multiplier => "multiplier",
            Rule::FirstInteger => "first_integer",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn match_blank(input: &RuleInput<'_>) -> RuleResult {
    input
        .raw
        .trim()
        .is_empty()
        .then(|| Ok(Classification::unclassified()))
}

fn match_all_digits(input: &RuleInput<'_>) -> RuleResult {
    let text = input.text;
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(parse_integer(text).map(Classification::exact))
}

fn match_cited(input: &RuleInput<'_>) -> RuleResult {
    let split = input.text.find(CITED)?;
    let first = *integer_tokens(input.text).first()?;
    let year = first_year(&input.text[split + CITED.len()..]);
    Some(parse_integer(first).map(|point| Classification::exact(point).with_cited_year(year)))
}

fn single_capture(pattern: &Regex, text: &str) -> Option<Result<f64, ClassifyError>> {
    let caps = pattern.captures(text)?;
    Some(parse_integer(caps.get(1)?.as_str()))
}

fn match_approximate(input: &RuleInput<'_>) -> RuleResult {
    single_capture(&APPROXIMATE, input.text).map(|n| n.map(Classification::estimate))
}

fn match_below_symbol(input: &RuleInput<'_>) -> RuleResult {
    single_capture(&BELOW_SYMBOL, input.text).map(|n| n.map(|max| Classification::range(0.0, max)))
}

fn match_fewer_than(input: &RuleInput<'_>) -> RuleResult {
    single_capture(&FEWER_THAN, input.text).map(|n| n.map(|max| Classification::range(0.0, max)))
}

fn match_explicit_range(input: &RuleInput<'_>) -> RuleResult {
    let caps = EXPLICIT_RANGE.captures(input.text)?;
    let (first, second) = (caps.get(1)?.as_str(), caps.get(2)?.as_str());
    Some(parse_integer(first).and_then(|a| parse_integer(second).map(|b| Classification::range(a, b))))
}

fn match_multiplier_phrase(input: &RuleInput<'_>) -> RuleResult {
    match_multiplier(input.text)
}

fn match_first_integer(input: &RuleInput<'_>) -> RuleResult {
    let tokens = integer_tokens(input.text);
    let first = *tokens.first()?;
    let window = input.config.year_window();
    let year = tokens.get(1).and_then(|token| as_year(token, &window));
    Some(parse_integer(first).map(|point| Classification::exact(point).with_cited_year(year)))
}
