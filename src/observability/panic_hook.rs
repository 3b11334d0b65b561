//! Custom panic hook for structured crash reports.
//!
//! The engine itself is total and should never panic. If something does go
//! wrong the report says which phase and which record were being processed.

use super::context::{get_current_context, get_progress, PipelineContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook.
///
/// Call early in `main()` before any records are processed.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (processed, total) = get_progress();

    eprintln!();
    eprintln!("{}", RULE);
    eprintln!("SPEAKERMAP CRASH REPORT");
    eprintln!("  Version: {}", VERSION);
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!("  Time: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    eprintln!("{}", RULE);
    eprintln!("  PANIC: {}", truncate(&extract_panic_message(info), 200));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    for line in context_lines(&context, processed, total) {
        eprintln!("  {}", line);
    }

    let current_span = Span::current();
    if let Some(metadata) = current_span.metadata() {
        eprintln!("  Span: {}", metadata.name());
    }

    eprintln!("{}", RULE);
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
}

/// Context section of the report, one line per known fact.
fn context_lines(context: &PipelineContext, processed: usize, total: usize) -> Vec<String> {
    let mut lines = vec![match &context.phase {
        Some(phase) => format!("Phase: {}", phase),
        None => "Phase: (not set - crash occurred before processing started)".to_string(),
    }];

    if let Some(index) = context.record_index {
        let language = context.language.as_deref().unwrap_or("unknown language");
        lines.push(format!("Record: #{} ({})", index, truncate(language, 60)));
    }

    if total > 0 {
        let pct = (processed as f64 / total as f64 * 100.0) as usize;
        lines.push(format!("Progress: {} / {} records ({}%)", processed, total, pct));
    }

    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Truncate on a character boundary; language names are often non-ASCII.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
