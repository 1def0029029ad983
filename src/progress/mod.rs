//! Progress reporting for long-running pipeline stages.
//!
//! Discovery and analysis accept an injected [`ProgressSink`] so core logic
//! stays decoupled from any display technology. Updates are fire-and-forget
//! free text; no acknowledgment is expected.

/// Receiver for free-text status updates.
pub trait ProgressSink {
    fn report(&self, status: &str);
}

/// Prints status updates to stderr, keeping stdout free for results.
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn report(&self, status: &str) {
        eprintln!("{}", status);
    }
}

/// Discards all updates. Useful for tests and quiet runs.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&self, _status: &str) {}
}
