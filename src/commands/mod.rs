//! CLI command implementations.
//!
//! - **normalize**: enrich a batch of records and write them out
//! - **classify**: classify one string and explain the result
//! - **init**: write a default `.speakermap.toml`

pub mod classify;
pub mod init;
pub mod normalize;

pub use classify::classify_text;
pub use init::init_config;
pub use normalize::{handle_normalize, NormalizeConfig};
