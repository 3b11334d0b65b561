//! Pipeline stage abstractions for composable record enrichment.
//!
//! Every stage is a pure transformation from one record value to the next:
//! no I/O, deterministic, and safe to run on any thread. Stages compose with
//! [`Stage::then`]; the type system only allows chaining stages whose types
//! line up.

use crate::bounds::{estimate_bounds, BoundInputs};
use crate::classifier::Classifier;
use crate::core::SpeakerCountRecord;
use crate::plotting::{tooltip_label, PlottingReducer};
use crate::scoring::ConfidenceScorer;

/// A pipeline stage that transforms data.
pub trait Stage {
    type Input;
    type Output;

    /// Execute this stage with the given input.
    fn execute(&self, input: Self::Input) -> Self::Output;

    /// Get the stage name for logging.
    fn name(&self) -> &str;

    /// Run `next` on this stage's output.
    fn then<S>(self, next: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Stage<Input = Self::Output>,
    {
        Chain { first: self, second: next }
    }
}

/// Two stages run back to back.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Stage for Chain<A, B>
where
    A: Stage,
    B: Stage<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn execute(&self, input: Self::Input) -> Self::Output {
        self.second.execute(self.first.execute(input))
    }

    /// Name of the last stage the chain runs through.
    fn name(&self) -> &str {
        self.second.name()
    }
}

/// Stage 1: classify `raw_text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyStage {
    classifier: Classifier,
}

impl ClassifyStage {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }
}

impl Stage for ClassifyStage {
    type Input = SpeakerCountRecord;
    type Output = SpeakerCountRecord;

    fn execute(&self, record: SpeakerCountRecord) -> SpeakerCountRecord {
        let classification = self.classifier.classify(record.raw_text.as_deref());
        record.with_classification(classification)
    }

    fn name(&self) -> &str {
        "classify"
    }
}

/// Stage 2: score provenance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceStage {
    scorer: ConfidenceScorer,
}

impl ConfidenceStage {
    pub fn new(scorer: ConfidenceScorer) -> Self {
        Self { scorer }
    }
}

impl Stage for ConfidenceStage {
    type Input = SpeakerCountRecord;
    type Output = SpeakerCountRecord;

    fn execute(&self, record: SpeakerCountRecord) -> SpeakerCountRecord {
        let confidence = self
            .scorer
            .score_provenance(&record.provenance, record.category);
        record.with_confidence(confidence)
    }

    fn name(&self) -> &str {
        "confidence"
    }
}

/// Stage 3: widen bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsStage;

impl Stage for BoundsStage {
    type Input = SpeakerCountRecord;
    type Output = SpeakerCountRecord;

    fn execute(&self, record: SpeakerCountRecord) -> SpeakerCountRecord {
        let bounds = estimate_bounds(&BoundInputs::from_record(&record));
        record.with_bounds(bounds)
    }

    fn name(&self) -> &str {
        "bounds"
    }
}

/// Stage 4: plotting value and tooltip. Needs the corpus minimum, so it can
/// only be built after stages 1-3 have run over the whole batch.
#[derive(Debug, Clone, Copy)]
pub struct PlottingStage {
    reducer: PlottingReducer,
    corpus_min_numeric: f64,
}

impl PlottingStage {
    pub fn new(reducer: PlottingReducer, corpus_min_numeric: f64) -> Self {
        Self {
            reducer,
            corpus_min_numeric,
        }
    }
}

impl Stage for PlottingStage {
    type Input = SpeakerCountRecord;
    type Output = SpeakerCountRecord;

    fn execute(&self, record: SpeakerCountRecord) -> SpeakerCountRecord {
        let value = self
            .reducer
            .plotting_value(&record, self.corpus_min_numeric);
        let label = tooltip_label(&record);
        record.with_plotting_value(value).with_tooltip_label(label)
    }

    fn name(&self) -> &str {
        "plotting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccessRoute, NumberCategory, Provenance, SourceCategory, SourceType};

    fn record(text: &str) -> SpeakerCountRecord {
        SpeakerCountRecord::new(
            Some(text.to_string()),
            Provenance::new(
                SourceCategory::Secondary,
                SourceType::ExpertCurated,
                AccessRoute::Direct,
            ),
            None,
        )
    }

    #[test]
    fn test_classify_stage() {
        let out = ClassifyStage::default().execute(record("~200"));
        assert_eq!(out.category, Some(NumberCategory::Estimate));
        assert_eq!(out.point, Some(200.0));
        assert_eq!(out.confidence, None);
    }

    #[test]
    fn test_chain_runs_in_order() {
        let stages = ClassifyStage::default()
            .then(ConfidenceStage::default())
            .then(BoundsStage);
        let out = stages.execute(record("~200"));
        // 0.75 * 1.0 * 1.0 * 0.75
        assert_eq!(out.confidence, Some(0.56));
        assert_eq!(out.min, Some(200.0 * 0.56));
        assert_eq!(out.max, Some(200.0 * (2.0 - 0.56)));
        assert_eq!(stages.name(), "bounds");
    }

    #[test]
    fn test_confidence_before_classification_is_absent() {
        let out = ConfidenceStage::default().execute(record("1500"));
        assert_eq!(out.confidence, None);
    }

    #[test]
    fn test_plotting_stage_sets_value_and_label() {
        let classified = ClassifyStage::default().execute(record("1,500"));
        let out = PlottingStage::new(PlottingReducer::default(), 1.0).execute(classified);
        assert_eq!(out.plotting_value, Some(1500.0));
        assert_eq!(out.tooltip_label.as_deref(), Some("1,500"));
    }
}
