//! Batch enrichment.
//!
//! Stages 1-3 (classify, confidence, bounds) are independent per record and
//! run on rayon's pool when the batch is large enough. The corpus minimum is
//! the single barrier; stage 4 (plotting) runs after it. Output order always
//! equals input order.

pub mod aggregate;
pub mod stage;
pub mod summary;

pub use aggregate::corpus_min_numeric;
pub use stage::{BoundsStage, Chain, ClassifyStage, ConfidenceStage, PlottingStage, Stage};
pub use summary::BatchSummary;

use crate::classifier::Classifier;
use crate::config::{ParallelConfig, PlottingConfig, SpeakermapConfig};
use crate::core::SpeakerCountRecord;
use crate::observability::{
    increment_processed, set_current_record, set_phase, set_progress, PipelinePhase,
};
use crate::plotting::PlottingReducer;
use crate::scoring::ConfidenceScorer;
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

type EnrichStages = Chain<Chain<ClassifyStage, ConfidenceStage>, BoundsStage>;

/// Result of enriching one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBatch {
    pub records: Vec<SpeakerCountRecord>,
    /// Corpus minimum used for the extinct/dormant sentinel. Falls back to
    /// `plotting.empty_corpus_min` when nothing resolved.
    pub corpus_min: f64,
    pub summary: BatchSummary,
}

/// The full enrichment pipeline under one configuration.
#[derive(Debug, Clone)]
pub struct RecordPipeline {
    enrich: EnrichStages,
    reducer: PlottingReducer,
    plotting: PlottingConfig,
    parallel: ParallelConfig,
}

impl Default for RecordPipeline {
    fn default() -> Self {
        Self::new(&SpeakermapConfig::default())
    }
}

impl RecordPipeline {
    pub fn new(config: &SpeakermapConfig) -> Self {
        let plotting = config.plotting_config();
        let enrich = ClassifyStage::new(Classifier::new(config.classifier_config()))
            .then(ConfidenceStage::new(ConfidenceScorer::new(
                config.confidence_weights(),
            )))
            .then(BoundsStage);

        Self {
            enrich,
            reducer: PlottingReducer::new(plotting),
            plotting,
            parallel: config.parallel_config(),
        }
    }

    pub fn with_parallel(self, parallel: ParallelConfig) -> Self {
        Self { parallel, ..self }
    }

    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Stages 1-3 for one record. Derived fields already on the record are
    /// discarded first, so enriching an enriched record is a no-op.
    pub fn enrich_record(&self, record: &SpeakerCountRecord) -> SpeakerCountRecord {
        self.enrich.execute(record.observation())
    }

    /// Stage 4 for one record, once the corpus minimum is known.
    pub fn finish_record(
        &self,
        record: SpeakerCountRecord,
        corpus_min_numeric: f64,
    ) -> SpeakerCountRecord {
        PlottingStage::new(self.reducer, corpus_min_numeric).execute(record)
    }

    pub fn enrich_batch(&self, records: Vec<SpeakerCountRecord>) -> EnrichedBatch {
        let total = records.len();
        let execution = self.execution(total);
        let span = info_span!(
            "enrich_batch",
            records = total,
            parallel = execution.is_parallel()
        );
        let _guard = span.enter();

        set_progress(0, total);

        let enriched = {
            let _phase = set_phase(PipelinePhase::RecordEnrichment);
            let _span = info_span!("record_enrichment", through = self.enrich.name()).entered();
            execution.map(records, |index, record| {
                let _record = set_current_record(index, record.language.as_deref());
                let enriched = self.enrich_record(&record);
                increment_processed();
                enriched
            })
        };

        let resolved_min = {
            let _phase = set_phase(PipelinePhase::CorpusAggregation);
            corpus_min_numeric(&enriched)
        };
        let corpus_min = resolved_min.unwrap_or_else(|| {
            debug!(
                fallback = self.plotting.empty_corpus_min,
                "No resolved values in batch, using fallback corpus minimum"
            );
            self.plotting.empty_corpus_min
        });

        let finished = {
            let _phase = set_phase(PipelinePhase::Plotting);
            let stage = PlottingStage::new(self.reducer, corpus_min);
            let _span =
                info_span!("plotting", stage = stage.name(), corpus_min = corpus_min).entered();
            execution.map(enriched, |_, record| stage.execute(record))
        };

        let summary = BatchSummary::from_records(&finished, resolved_min);
        info!(
            records = summary.total,
            unclassified = summary.unclassified,
            errors = summary.errors,
            "Batch enrichment complete"
        );

        EnrichedBatch {
            records: finished,
            corpus_min,
            summary,
        }
    }

    /// Decide how a batch of `len` records runs. The pool is built once per
    /// batch and shared by both per-record passes.
    fn execution(&self, len: usize) -> Execution {
        if !self.parallel.should_parallelize(len) {
            return Execution::Sequential;
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallel.effective_concurrency())
            .build()
        {
            Ok(pool) => Execution::Pool(pool),
            Err(e) => {
                warn!("Failed to build thread pool, using global pool: {}", e);
                Execution::GlobalPool
            }
        }
    }
}

/// Where per-record work runs for one batch.
enum Execution {
    Sequential,
    Pool(rayon::ThreadPool),
    GlobalPool,
}

impl Execution {
    fn is_parallel(&self) -> bool {
        !matches!(self, Execution::Sequential)
    }

    /// Apply `f` to every record, keeping input order.
    fn map<F>(&self, records: Vec<SpeakerCountRecord>, f: F) -> Vec<SpeakerCountRecord>
    where
        F: Fn(usize, SpeakerCountRecord) -> SpeakerCountRecord + Sync + Send,
    {
        if let Execution::Sequential = self {
            return records
                .into_iter()
                .enumerate()
                .map(|(index, record)| f(index, record))
                .collect();
        }

        let work = || {
            records
                .into_par_iter()
                .enumerate()
                .map(|(index, record)| f(index, record))
                .collect()
        };

        match self {
            Execution::Pool(pool) => pool.install(work),
            _ => work(),
        }
    }
}

/// Enrich a batch with the default configuration.
pub fn enrich(records: Vec<SpeakerCountRecord>) -> EnrichedBatch {
    RecordPipeline::default().enrich_batch(records)
}
