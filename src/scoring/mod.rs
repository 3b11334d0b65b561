pub mod confidence;

pub use confidence::{ConfidenceBreakdown, ConfidenceScorer};
