//! Parallelism configuration for batch enrichment.
//!
//! Records are independent of each other, so the per-record stages can run
//! on rayon's thread pool. Only the corpus minimum needs every record.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Default batch size below which records are processed sequentially
fn default_min_parallel_batch() -> usize {
    256
}

/// Configuration for parallel processing operations.
///
/// # Example
///
/// ```rust
/// use speakermap::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     max_concurrency: Some(4),
///     min_parallel_batch: 64,
/// };
/// assert!(config.should_parallelize(100));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum worker threads (default: all available cores)
    #[serde(default)]
    pub max_concurrency: Option<usize>,

    /// Batches smaller than this are processed sequentially (default: 256)
    #[serde(default = "default_min_parallel_batch")]
    pub min_parallel_batch: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_concurrency: None,
            min_parallel_batch: default_min_parallel_batch(),
        }
    }
}

impl ParallelConfig {
    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Get the effective concurrency level.
    ///
    /// Returns the configured max_concurrency, or the number of
    /// available CPU cores if not specified.
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.filter(|&n| n > 0).unwrap_or_else(num_cpus)
    }

    /// Whether a batch of `len` records should use the thread pool.
    pub fn should_parallelize(&self, len: usize) -> bool {
        self.enabled && len >= self.min_parallel_batch && self.effective_concurrency() > 1
    }
}

/// Returns the number of available CPU cores.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1)
}
