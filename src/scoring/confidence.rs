//! Provenance-based confidence scoring.
//!
//! Confidence is the product of one configured weight per provenance axis,
//! rounded to two decimals. It is a pure function of its four inputs: the
//! same inputs always give the same score.

use crate::config::ConfidenceWeights;
use crate::core::{AccessRoute, NumberCategory, Provenance, SourceCategory, SourceType};
use serde::{Deserialize, Serialize};

/// Per-axis weights that went into a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub source_category: f64,
    pub source_type: f64,
    pub access_route: f64,
    pub number_category: f64,
}

impl ConfidenceBreakdown {
    pub fn raw_product(&self) -> f64 {
        self.source_category * self.source_type * self.access_route * self.number_category
    }

    /// The product rounded to two decimals (half away from zero).
    pub fn score(&self) -> f64 {
        round_to_hundredths(self.raw_product())
    }
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores observations against an injected weight table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceScorer {
    weights: ConfidenceWeights,
}

impl ConfidenceScorer {
    pub fn new(weights: ConfidenceWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ConfidenceWeights {
        &self.weights
    }

    /// Weights for each axis, or `None` if any axis is absent or has no
    /// weight (an unresolved number category).
    pub fn breakdown(
        &self,
        source_category: Option<SourceCategory>,
        source_type: Option<SourceType>,
        access_route: Option<AccessRoute>,
        number_category: Option<NumberCategory>,
    ) -> Option<ConfidenceBreakdown> {
        Some(ConfidenceBreakdown {
            source_category: self.weights.source_category.weight(source_category?),
            source_type: self.weights.source_type.weight(source_type?),
            access_route: self.weights.access_route.weight(access_route?),
            number_category: self.weights.number_category.weight(number_category?)?,
        })
    }

    /// Confidence in [0, 1], or `None` when provenance is incomplete.
    ///
    /// Absence is distinct from zero: `None` means "cannot compute".
    pub fn score(
        &self,
        source_category: Option<SourceCategory>,
        source_type: Option<SourceType>,
        access_route: Option<AccessRoute>,
        number_category: Option<NumberCategory>,
    ) -> Option<f64> {
        self.breakdown(source_category, source_type, access_route, number_category)
            .map(|b| b.score())
    }

    pub fn score_provenance(
        &self,
        provenance: &Provenance,
        number_category: Option<NumberCategory>,
    ) -> Option<f64> {
        self.score(
            provenance.source_category,
            provenance.source_type,
            provenance.access_route,
            number_category,
        )
    }
}
