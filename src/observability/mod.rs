//! Observability infrastructure for crash reports and debugging.
//!
//! - **Panic Hook**: Produces structured crash reports with context
//! - **Context Tracking**: Thread-local pipeline phase and record tracking
//! - **Progress Tracking**: Atomic counters for overall batch progress
//!
//! ```ignore
//! use speakermap::observability::{install_panic_hook, set_phase, PipelinePhase};
//!
//! fn main() {
//!     install_panic_hook();
//!     let _phase = set_phase(PipelinePhase::Loading);
//!     // ...
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, reset_context, set_current_record,
    set_phase, set_progress, ContextGuard, PipelineContext, PipelinePhase,
};
pub use panic_hook::install_panic_hook;
