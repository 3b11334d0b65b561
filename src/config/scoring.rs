//! Confidence weight configuration
//!
//! Each provenance axis maps its values to a weight in [0.0, 1.0]. The
//! confidence of an observation is the rounded product of one weight per axis.
//! The tables are plain configuration; nothing is learned or calibrated.

use crate::core::{AccessRoute, NumberCategory, SourceCategory, SourceType};
use serde::{Deserialize, Serialize};

/// Weights for the `source_category` axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceCategoryWeights {
    #[serde(default = "default_primary_weight")]
    pub primary: f64,
    #[serde(default = "default_secondary_weight")]
    pub secondary: f64,
    #[serde(default = "default_tertiary_weight")]
    pub tertiary: f64,
}

impl Default for SourceCategoryWeights {
    fn default() -> Self {
        Self {
            primary: default_primary_weight(),
            secondary: default_secondary_weight(),
            tertiary: default_tertiary_weight(),
        }
    }
}

impl SourceCategoryWeights {
    pub fn weight(&self, category: SourceCategory) -> f64 {
        match category {
            SourceCategory::Primary => self.primary,
            SourceCategory::Secondary => self.secondary,
            SourceCategory::Tertiary => self.tertiary,
        }
    }
}

/// Weights for the `source_type` axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceTypeWeights {
    #[serde(default = "default_expert_curated_weight")]
    pub expert_curated: f64,
    #[serde(default = "default_community_curated_weight")]
    pub community_curated: f64,
}

impl Default for SourceTypeWeights {
    fn default() -> Self {
        Self {
            expert_curated: default_expert_curated_weight(),
            community_curated: default_community_curated_weight(),
        }
    }
}

impl SourceTypeWeights {
    pub fn weight(&self, source_type: SourceType) -> f64 {
        match source_type {
            SourceType::ExpertCurated => self.expert_curated,
            SourceType::CommunityCurated => self.community_curated,
        }
    }
}

/// Weights for the `access_route` axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessRouteWeights {
    #[serde(default = "default_direct_weight")]
    pub direct: f64,
    #[serde(default = "default_indirect_weight")]
    pub indirect: f64,
}

impl Default for AccessRouteWeights {
    fn default() -> Self {
        Self {
            direct: default_direct_weight(),
            indirect: default_indirect_weight(),
        }
    }
}

impl AccessRouteWeights {
    pub fn weight(&self, route: AccessRoute) -> f64 {
        match route {
            AccessRoute::Direct => self.direct,
            AccessRoute::Indirect => self.indirect,
        }
    }
}

/// Weights for the speaker number category axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberCategoryWeights {
    #[serde(default = "default_exact_weight")]
    pub exact: f64,
    #[serde(default = "default_estimate_weight")]
    pub estimate: f64,
    #[serde(default = "default_range_weight")]
    pub range: f64,
    #[serde(default = "default_qualitative_weight")]
    pub qualitative_estimate: f64,
    #[serde(default = "default_qualitative_weight")]
    pub qualitative_range: f64,
}

impl Default for NumberCategoryWeights {
    fn default() -> Self {
        Self {
            exact: default_exact_weight(),
            estimate: default_estimate_weight(),
            range: default_range_weight(),
            qualitative_estimate: default_qualitative_weight(),
            qualitative_range: default_qualitative_weight(),
        }
    }
}

impl NumberCategoryWeights {
    /// `None` for categories that carry no numeric shape.
    pub fn weight(&self, category: NumberCategory) -> Option<f64> {
        match category {
            NumberCategory::Exact => Some(self.exact),
            NumberCategory::Estimate => Some(self.estimate),
            NumberCategory::Range => Some(self.range),
            NumberCategory::QualitativeEstimate => Some(self.qualitative_estimate),
            NumberCategory::QualitativeRange => Some(self.qualitative_range),
            NumberCategory::Error | NumberCategory::Unclassified => None,
        }
    }
}

/// Full confidence weight table, one sub-table per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    #[serde(default)]
    pub source_category: SourceCategoryWeights,
    #[serde(default)]
    pub source_type: SourceTypeWeights,
    #[serde(default)]
    pub access_route: AccessRouteWeights,
    #[serde(default)]
    pub number_category: NumberCategoryWeights,
}

impl ConfidenceWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0, got {}", name, weight))
        }
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        let sc = &self.source_category;
        let st = &self.source_type;
        let ar = &self.access_route;
        let nc = &self.number_category;
        vec![
            Self::validate_weight(sc.primary, "source_category.primary"),
            Self::validate_weight(sc.secondary, "source_category.secondary"),
            Self::validate_weight(sc.tertiary, "source_category.tertiary"),
            Self::validate_weight(st.expert_curated, "source_type.expert_curated"),
            Self::validate_weight(st.community_curated, "source_type.community_curated"),
            Self::validate_weight(ar.direct, "access_route.direct"),
            Self::validate_weight(ar.indirect, "access_route.indirect"),
            Self::validate_weight(nc.exact, "number_category.exact"),
            Self::validate_weight(nc.estimate, "number_category.estimate"),
            Self::validate_weight(nc.range, "number_category.range"),
            Self::validate_weight(nc.qualitative_estimate, "number_category.qualitative_estimate"),
            Self::validate_weight(nc.qualitative_range, "number_category.qualitative_range"),
        ]
    }

    /// Validate that every weight lies in [0.0, 1.0]
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }
        Ok(())
    }
}

pub fn default_primary_weight() -> f64 {
    1.0
}
pub fn default_secondary_weight() -> f64 {
    0.75
}
pub fn default_tertiary_weight() -> f64 {
    0.5
}
pub fn default_expert_curated_weight() -> f64 {
    1.0
}
pub fn default_community_curated_weight() -> f64 {
    0.75
}
pub fn default_direct_weight() -> f64 {
    1.0
}
pub fn default_indirect_weight() -> f64 {
    0.5
}
pub fn default_exact_weight() -> f64 {
    1.0
}
pub fn default_estimate_weight() -> f64 {
    0.75
}
pub fn default_range_weight() -> f64 {
    0.5
}
pub fn default_qualitative_weight() -> f64 {
    0.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(ConfidenceWeights::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_weight_is_rejected() {
        let mut weights = ConfidenceWeights::default();
        weights.access_route.indirect = 1.5;
        let err = weights.validate().unwrap_err();
        assert!(err.contains("access_route.indirect"));
    }

    #[test]
    fn test_partial_table_fills_defaults() {
        let weights: ConfidenceWeights = toml::from_str(
            r#"
            [source_type]
            community_curated = 0.6
            "#,
        )
        .unwrap();
        assert_eq!(weights.source_type.community_curated, 0.6);
        assert_eq!(weights.source_type.expert_curated, 1.0);
        assert_eq!(weights.source_category, SourceCategoryWeights::default());
    }

    #[test]
    fn test_unresolved_categories_have_no_weight() {
        let weights = NumberCategoryWeights::default();
        assert_eq!(weights.weight(NumberCategory::Error), None);
        assert_eq!(weights.weight(NumberCategory::Unclassified), None);
        assert_eq!(weights.weight(NumberCategory::QualitativeRange), Some(0.25));
    }
}
