//! Logging utilities.
//!
//! Structured log context for pipeline processing.

pub mod structured;

pub use structured::LogContext;

/// Initialize the process-level logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
