//! Thread-local context tracking for crash reports.
//!
//! Records which pipeline phase and which record the current thread is
//! working on. Uses thread-local storage for per-thread context (works with
//! rayon parallel iterators) and atomic counters for global progress.
//!
//! ## Thread Safety
//!
//! - Thread-local context: Each thread has its own context (via `thread_local!`)
//! - Global progress: Atomic counters for records processed/total
//! - Context guards use RAII for automatic cleanup on drop

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Global progress counters (atomic for thread-safety)
static RECORDS_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static RECORDS_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<PipelineContext> = const { RefCell::new(PipelineContext::new()) };
}

/// Snapshot of what the current thread was doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineContext {
    /// Current pipeline phase
    pub phase: Option<PipelinePhase>,
    /// Index of the record being enriched within its batch
    pub record_index: Option<usize>,
    /// Language of the record being enriched, when known
    pub language: Option<String>,
}

impl PipelineContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            record_index: None,
            language: None,
        }
    }
}

/// Phases of batch enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    /// Reading input records
    Loading,
    /// Classification, confidence scoring and bound estimation
    RecordEnrichment,
    /// Computing the corpus-wide minimum
    CorpusAggregation,
    /// Reducing records to plotting values
    Plotting,
    /// Writing enriched records
    OutputGeneration,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::RecordEnrichment => write!(f, "record_enrichment"),
            Self::CorpusAggregation => write!(f, "corpus_aggregation"),
            Self::Plotting => write!(f, "plotting"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard for restoring pipeline context on drop.
pub struct ContextGuard {
    previous: PipelineContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update_context(update: impl FnOnce(&mut PipelineContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        update(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current pipeline phase.
///
/// Returns a guard that restores the previous phase on drop.
#[must_use]
pub fn set_phase(phase: PipelinePhase) -> ContextGuard {
    update_context(|ctx| ctx.phase = Some(phase))
}

/// Set the record being enriched.
///
/// Returns a guard that restores the previous record on drop.
#[must_use]
pub fn set_current_record(index: usize, language: Option<&str>) -> ContextGuard {
    update_context(|ctx| {
        ctx.record_index = Some(index);
        ctx.language = language.map(str::to_string);
    })
}

/// Set the progress counters (processed and total records).
pub fn set_progress(processed: usize, total: usize) {
    RECORDS_PROCESSED.store(processed, Ordering::Relaxed);
    RECORDS_TOTAL.store(total, Ordering::Relaxed);
}

/// Increment the processed record count.
///
/// Thread-safe; can be called from parallel iterators.
pub fn increment_processed() {
    RECORDS_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// Get the current context snapshot.
#[must_use]
pub fn get_current_context() -> PipelineContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Get the current progress (processed, total).
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        RECORDS_PROCESSED.load(Ordering::Relaxed),
        RECORDS_TOTAL.load(Ordering::Relaxed),
    )
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = PipelineContext::new();
    });
}
