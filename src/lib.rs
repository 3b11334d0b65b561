//! Speaker-count normalization.
//!
//! Turns free-text speaker counts ("~200", "fewer than a few hundred",
//! "1,500 (cited 2005)") into a numeric shape, scores each observation's
//! provenance, widens point estimates into bounds, and reduces every record
//! to one value that is safe to plot on a logarithmic axis.
//!
//! ```rust
//! use speakermap::core::{Provenance, SpeakerCountRecord, VitalityStatus};
//! use speakermap::pipeline::enrich;
//!
//! let batch = enrich(vec![
//!     SpeakerCountRecord::new(Some("12".into()), Provenance::default(), None),
//!     SpeakerCountRecord::new(None, Provenance::default(), Some(VitalityStatus::Extinct)),
//! ]);
//! assert_eq!(batch.records[1].plotting_value, Some(11.5));
//! ```

pub mod bounds;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;
pub mod pipeline;
pub mod plotting;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AccessRoute, Bounds, Classification, NumberCategory, Provenance, RecordInput, SourceCategory,
    SourceType, SpeakerCountRecord, VitalityStatus,
};

pub use crate::bounds::{estimate_bounds, BoundInputs};
pub use crate::classifier::{classify, Classifier};
pub use crate::config::SpeakermapConfig;
pub use crate::pipeline::{corpus_min_numeric, enrich, BatchSummary, EnrichedBatch, RecordPipeline};
pub use crate::plotting::{plotting_value, PlottingReducer};
pub use crate::scoring::ConfidenceScorer;
