//! Configuration for the normalization engine.
//!
//! Every table is an immutable value handed to the component that needs it.
//! A `.speakermap.toml` file in the working directory (or up to ten parent
//! directories) overrides the built-in defaults section by section.

mod classification;
mod core;
mod display;
mod loader;
mod parallel;
mod scoring;

pub use classification::ClassifierConfig;
pub use core::SpeakermapConfig;
pub use display::PlottingConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, parse_config_strict, CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
pub use scoring::{
    AccessRouteWeights, ConfidenceWeights, NumberCategoryWeights, SourceCategoryWeights,
    SourceTypeWeights,
};
