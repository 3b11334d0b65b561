//! Bound estimation: widening point estimates into intervals.
//!
//! Precedence, first match wins:
//!
//! 1. Extinct or dormant: `[0, 0]` regardless of anything else.
//! 2. `Exact`: `[point, point]`.
//! 3. `Estimate` / `QualitativeEstimate`: `[point * c, point * (2 - c)]`.
//!    Higher confidence gives a tighter interval; at `c = 0` the interval is
//!    `[0, 2 * point]`.
//! 4. `QualitativeRange`: the upper bound is widened to `max * (2 - c)`.
//! 5. `Range`: bounds from the classifier are kept.
//!
//! Inputs a rule needs but does not have (no confidence, no point) leave the
//! corresponding bounds unset.

use crate::core::{Bounds, NumberCategory, SpeakerCountRecord, VitalityStatus};

/// Everything the estimator reads from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundInputs {
    pub category: Option<NumberCategory>,
    pub point: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub confidence: Option<f64>,
    pub vitality_status: Option<VitalityStatus>,
}

impl BoundInputs {
    pub fn from_record(record: &SpeakerCountRecord) -> Self {
        Self {
            category: record.category,
            point: record.point,
            min: record.min,
            max: record.max,
            confidence: record.confidence,
            vitality_status: record.vitality_status,
        }
    }
}

/// Refine `[min, max]` for one observation.
pub fn estimate_bounds(inputs: &BoundInputs) -> Bounds {
    if inputs.vitality_status.is_some_and(VitalityStatus::is_silent) {
        return Bounds::zero();
    }

    match inputs.category {
        Some(NumberCategory::Exact) => Bounds::new(inputs.point, inputs.point),
        Some(NumberCategory::Estimate | NumberCategory::QualitativeEstimate) => {
            match (inputs.point, inputs.confidence) {
                (Some(point), Some(confidence)) => spread(point, confidence),
                _ => Bounds::new(inputs.min, inputs.max),
            }
        }
        Some(NumberCategory::QualitativeRange) => Bounds::new(
            inputs.min,
            match (inputs.max, inputs.confidence) {
                (Some(max), Some(confidence)) => Some(max * widening(confidence)),
                (max, _) => max,
            },
        ),
        Some(NumberCategory::Range)
        | Some(NumberCategory::Error)
        | Some(NumberCategory::Unclassified)
        | None => Bounds::new(inputs.min, inputs.max),
    }
}

/// `2 - c`, the upper-bound factor for confidence `c`.
fn widening(confidence: f64) -> f64 {
    2.0 - confidence.clamp(0.0, 1.0)
}

fn spread(point: f64, confidence: f64) -> Bounds {
    let confidence = confidence.clamp(0.0, 1.0);
    Bounds::fixed(point * confidence, point * widening(confidence))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(category: NumberCategory) -> BoundInputs {
        BoundInputs {
            category: Some(category),
            point: None,
            min: None,
            max: None,
            confidence: None,
            vitality_status: None,
        }
    }

    #[test]
    fn test_exact_collapses_to_point() {
        let b = estimate_bounds(&BoundInputs {
            point: Some(1500.0),
            ..inputs(NumberCategory::Exact)
        });
        assert_eq!(b, Bounds::fixed(1500.0, 1500.0));
    }

    #[test]
    fn test_estimate_spreads_by_confidence() {
        let b = estimate_bounds(&BoundInputs {
            point: Some(200.0),
            confidence: Some(0.75),
            ..inputs(NumberCategory::Estimate)
        });
        assert_eq!(b, Bounds::fixed(150.0, 250.0));
    }

    #[test]
    fn test_zero_confidence_widens_to_double() {
        let b = estimate_bounds(&BoundInputs {
            point: Some(300.0),
            confidence: Some(0.0),
            ..inputs(NumberCategory::QualitativeEstimate)
        });
        assert_eq!(b, Bounds::fixed(0.0, 600.0));
    }

    #[test]
    fn test_estimate_without_confidence_stays_unset() {
        let b = estimate_bounds(&BoundInputs {
            point: Some(200.0),
            ..inputs(NumberCategory::Estimate)
        });
        assert_eq!(b, Bounds::unset());
    }

    #[test]
    fn test_qualitative_range_widens_max_only() {
        let b = estimate_bounds(&BoundInputs {
            min: Some(0.0),
            max: Some(300.0),
            confidence: Some(0.5),
            ..inputs(NumberCategory::QualitativeRange)
        });
        assert_eq!(b, Bounds::fixed(0.0, 450.0));
    }

    #[test]
    fn test_qualitative_range_without_confidence_is_unchanged() {
        let b = estimate_bounds(&BoundInputs {
            min: Some(0.0),
            max: Some(300.0),
            ..inputs(NumberCategory::QualitativeRange)
        });
        assert_eq!(b, Bounds::fixed(0.0, 300.0));
    }

    #[test]
    fn test_range_is_unchanged() {
        let b = estimate_bounds(&BoundInputs {
            min: Some(200.0),
            max: Some(300.0),
            confidence: Some(0.1),
            ..inputs(NumberCategory::Range)
        });
        assert_eq!(b, Bounds::fixed(200.0, 300.0));
    }

    #[test]
    fn test_vitality_overrides_every_category() {
        for category in NumberCategory::ALL {
            for status in [VitalityStatus::Extinct, VitalityStatus::Dormant] {
                let b = estimate_bounds(&BoundInputs {
                    point: Some(1000.0),
                    min: Some(10.0),
                    max: Some(20.0),
                    confidence: Some(0.3),
                    vitality_status: Some(status),
                    ..inputs(category)
                });
                assert_eq!(b, Bounds::zero(), "{category} / {status}");
            }
        }
    }

    #[test]
    fn test_living_status_does_not_override() {
        let b = estimate_bounds(&BoundInputs {
            point: Some(40.0),
            vitality_status: Some(VitalityStatus::Living),
            ..inputs(NumberCategory::Exact)
        });
        assert_eq!(b, Bounds::fixed(40.0, 40.0));
    }

    #[test]
    fn test_higher_confidence_never_widens() {
        let at = |c: f64| {
            estimate_bounds(&BoundInputs {
                point: Some(1000.0),
                confidence: Some(c),
                ..inputs(NumberCategory::Estimate)
            })
        };
        let loose = at(0.25);
        let tight = at(0.75);
        assert!(tight.min >= loose.min);
        assert!(tight.max <= loose.max);
    }
}
