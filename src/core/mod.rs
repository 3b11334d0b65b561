//! Core data model for speaker-count normalization.
//!
//! A [`SpeakerCountRecord`] is created from an upstream [`RecordInput`] row with
//! only its observation fields populated. Each pipeline stage returns a new
//! record value through one of the `with_*` transformations; nothing mutates a
//! record in place.

pub mod errors;

use errors::ParseCategoricalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric shape of a raw speaker-count observation.
///
/// Set exactly once by the classifier. `Unclassified` means there was no text
/// to classify; `Error` means text was present but could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCategory {
    Exact,
    Estimate,
    Range,
    QualitativeEstimate,
    QualitativeRange,
    Error,
    Unclassified,
}

impl NumberCategory {
    pub const ALL: [NumberCategory; 7] = [
        NumberCategory::Exact,
        NumberCategory::Estimate,
        NumberCategory::Range,
        NumberCategory::QualitativeEstimate,
        NumberCategory::QualitativeRange,
        NumberCategory::Error,
        NumberCategory::Unclassified,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Estimate => "estimate",
            Self::Range => "range",
            Self::QualitativeEstimate => "qualitative_estimate",
            Self::QualitativeRange => "qualitative_range",
            Self::Error => "error",
            Self::Unclassified => "unclassified",
        }
    }

    /// True for every category that carries a numeric shape.
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Error | Self::Unclassified)
    }

    /// Categories whose representative value is a single point.
    pub fn carries_point(self) -> bool {
        matches!(
            self,
            Self::Exact | Self::Estimate | Self::QualitativeEstimate
        )
    }

    /// Categories whose representative value is an interval.
    pub fn is_interval(self) -> bool {
        matches!(self, Self::Range | Self::QualitativeRange)
    }
}

impl fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cases a categorical value and treats `-`, `_` and spaces alike.
fn canonical_token(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Primary,
    Secondary,
    Tertiary,
}

impl FromStr for SourceCategory {
    type Err = ParseCategoricalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "tertiary" => Ok(Self::Tertiary),
            _ => Err(ParseCategoricalError::new("source_category", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    ExpertCurated,
    CommunityCurated,
}

impl FromStr for SourceType {
    type Err = ParseCategoricalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "expert_curated" => Ok(Self::ExpertCurated),
            "community_curated" => Ok(Self::CommunityCurated),
            _ => Err(ParseCategoricalError::new("source_type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRoute {
    Direct,
    Indirect,
}

impl FromStr for AccessRoute {
    type Err = ParseCategoricalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "direct" => Ok(Self::Direct),
            "indirect" => Ok(Self::Indirect),
            _ => Err(ParseCategoricalError::new("access_route", s)),
        }
    }
}

/// Vitality of the language, independent of any numeric text.
///
/// `Extinct` and `Dormant` override category-derived bounds. Every other
/// reported status (endangered, vulnerable, ...) is `Living`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalityStatus {
    Extinct,
    Dormant,
    #[serde(rename = "none")]
    Living,
}

impl VitalityStatus {
    /// Extinct or dormant: no living speakers to count.
    pub fn is_silent(self) -> bool {
        matches!(self, Self::Extinct | Self::Dormant)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Extinct => "extinct",
            Self::Dormant => "dormant",
            Self::Living => "none",
        }
    }
}

impl fmt::Display for VitalityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VitalityStatus {
    type Err = ParseCategoricalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_token(s).as_str() {
            "" => Err(ParseCategoricalError::new("vitality_status", s)),
            "extinct" => Ok(Self::Extinct),
            "dormant" => Ok(Self::Dormant),
            _ => Ok(Self::Living),
        }
    }
}

/// Caller-supplied provenance of an observation. Never derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provenance {
    pub source_category: Option<SourceCategory>,
    pub source_type: Option<SourceType>,
    pub access_route: Option<AccessRoute>,
}

impl Provenance {
    pub fn new(
        source_category: SourceCategory,
        source_type: SourceType,
        access_route: AccessRoute,
    ) -> Self {
        Self {
            source_category: Some(source_category),
            source_type: Some(source_type),
            access_route: Some(access_route),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.source_category.is_some() && self.source_type.is_some() && self.access_route.is_some()
    }
}

/// Classifier output: the numeric shape of one raw text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: NumberCategory,
    pub point: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub cited_year: Option<i32>,
}

impl Classification {
    const fn empty(category: NumberCategory) -> Self {
        Self {
            category,
            point: None,
            min: None,
            max: None,
            cited_year: None,
        }
    }

    pub const fn unclassified() -> Self {
        Self::empty(NumberCategory::Unclassified)
    }

    pub const fn error() -> Self {
        Self::empty(NumberCategory::Error)
    }

    pub fn exact(point: f64) -> Self {
        Self::with_point(NumberCategory::Exact, point)
    }

    pub fn estimate(point: f64) -> Self {
        Self::with_point(NumberCategory::Estimate, point)
    }

    pub fn qualitative_estimate(point: f64) -> Self {
        Self::with_point(NumberCategory::QualitativeEstimate, point)
    }

    /// Explicit range. Reversed bounds are swapped so `min <= max`.
    pub fn range(first: f64, second: f64) -> Self {
        Self::with_interval(NumberCategory::Range, first, second)
    }

    pub fn qualitative_range(first: f64, second: f64) -> Self {
        Self::with_interval(NumberCategory::QualitativeRange, first, second)
    }

    pub fn with_cited_year(self, year: Option<i32>) -> Self {
        Self {
            cited_year: year,
            ..self
        }
    }

    fn with_point(category: NumberCategory, point: f64) -> Self {
        Self {
            point: Some(point),
            ..Self::empty(category)
        }
    }

    fn with_interval(category: NumberCategory, first: f64, second: f64) -> Self {
        let (min, max) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::empty(category)
        }
    }
}

/// Refined `[min, max]` interval produced by the bound estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub const fn unset() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub const fn fixed(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn zero() -> Self {
        Self::fixed(0.0, 0.0)
    }
}

/// Tabular row consumed from the upstream collaborator. All fields are raw
/// strings exactly as scraped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordInput {
    pub language_id: Option<String>,
    pub language: Option<String>,
    pub speaker_source: Option<String>,
    #[serde(alias = "speaker_number_raw")]
    pub raw_text: Option<String>,
    pub source_category: Option<String>,
    pub source_type: Option<String>,
    pub access_route: Option<String>,
    pub vitality_status: Option<String>,
}

/// One language-source observation and everything derived from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerCountRecord {
    pub language_id: Option<String>,
    pub language: Option<String>,
    pub speaker_source: Option<String>,
    pub raw_text: Option<String>,
    pub vitality_status: Option<VitalityStatus>,
    #[serde(flatten)]
    pub provenance: Provenance,

    pub category: Option<NumberCategory>,
    pub point: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub cited_year: Option<i32>,
    pub confidence: Option<f64>,
    pub plotting_value: Option<f64>,
    pub tooltip_label: Option<String>,
}

impl SpeakerCountRecord {
    pub fn new(
        raw_text: Option<String>,
        provenance: Provenance,
        vitality_status: Option<VitalityStatus>,
    ) -> Self {
        Self {
            raw_text,
            provenance,
            vitality_status,
            ..Self::default()
        }
    }

    /// The record as the upstream collaborator produced it, with every
    /// derived field cleared.
    pub fn observation(&self) -> Self {
        Self {
            language_id: self.language_id.clone(),
            language: self.language.clone(),
            speaker_source: self.speaker_source.clone(),
            raw_text: self.raw_text.clone(),
            vitality_status: self.vitality_status,
            provenance: self.provenance,
            ..Self::default()
        }
    }

    /// Extinct or dormant records have their bounds forced to zero.
    pub fn has_vitality_override(&self) -> bool {
        self.vitality_status.is_some_and(VitalityStatus::is_silent)
    }

    pub fn with_classification(self, classification: Classification) -> Self {
        Self {
            category: Some(classification.category),
            point: classification.point,
            min: classification.min,
            max: classification.max,
            cited_year: classification.cited_year,
            ..self
        }
    }

    pub fn with_confidence(self, confidence: Option<f64>) -> Self {
        Self { confidence, ..self }
    }

    pub fn with_bounds(self, bounds: Bounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
            ..self
        }
    }

    pub fn with_plotting_value(self, plotting_value: Option<f64>) -> Self {
        Self {
            plotting_value,
            ..self
        }
    }

    pub fn with_tooltip_label(self, tooltip_label: Option<String>) -> Self {
        Self {
            tooltip_label,
            ..self
        }
    }
}

fn parse_optional<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}

impl From<RecordInput> for SpeakerCountRecord {
    fn from(input: RecordInput) -> Self {
        let provenance = Provenance {
            source_category: parse_optional(input.source_category.as_deref()),
            source_type: parse_optional(input.source_type.as_deref()),
            access_route: parse_optional(input.access_route.as_deref()),
        };
        Self {
            language_id: input.language_id,
            language: input.language,
            speaker_source: input.speaker_source,
            vitality_status: parse_optional(input.vitality_status.as_deref()),
            ..Self::new(input.raw_text, provenance, None)
        }
    }
}
