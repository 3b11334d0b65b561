//! Pattern classifier: raw speaker-count text to a numeric shape.
//!
//! Classification is total. Every input resolves to exactly one
//! [`NumberCategory`]: absent or blank text is `Unclassified`, text no rule
//! understands (or whose numbers cannot be converted) is `Error`, and
//! everything else is one of the five numeric shapes.
//!
//! ```rust
//! use speakermap::classifier::classify;
//! use speakermap::core::NumberCategory;
//!
//! let c = classify(Some("fewer than a few hundred"));
//! assert_eq!(c.category, NumberCategory::QualitativeRange);
//! assert_eq!((c.min, c.max), (Some(0.0), Some(300.0)));
//! ```
//!
//! [`NumberCategory`]: crate::core::NumberCategory

mod multiplier;
mod normalize;
pub mod rules;
mod tokens;

pub use multiplier::{Multiplier, MULTIPLIERS};
pub use normalize::normalize_text;
pub use rules::{Rule, RuleInput, RuleResult};

use crate::config::ClassifierConfig;
use crate::core::Classification;

/// Classifier bound to one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, raw_text: Option<&str>) -> Classification {
        self.classify_traced(raw_text).1
    }

    /// Classify and report which rule decided the result. `None` means no
    /// rule matched and the result is `Error`.
    pub fn classify_traced(&self, raw_text: Option<&str>) -> (Option<Rule>, Classification) {
        let raw = raw_text.unwrap_or_default();
        let text = normalize_text(raw);
        let input = RuleInput {
            raw,
            text: &text,
            config: &self.config,
        };

        Rule::CASCADE
            .iter()
            .find_map(|&rule| rule.apply(&input).map(|outcome| (rule, outcome)))
            .map_or((None, Classification::error()), |(rule, outcome)| {
                (Some(rule), outcome.unwrap_or_else(|_| Classification::error()))
            })
    }
}

/// Classify with the default configuration.
pub fn classify(raw_text: Option<&str>) -> Classification {
    Classifier::default().classify(raw_text)
}
