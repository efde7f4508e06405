//! Progress observation for potentially long executions.

/// Trait for receiving progress ticks during an execution.
///
/// The reporter is invoked synchronously, inline with the executing loop —
/// never buffered or batched — so a caller can pump an event loop or update
/// a progress bar between ticks. CLI implements this with indicatif; tests
/// implement it with counters.
pub trait ProgressReporter: Send + Sync {
    /// Called with the number of units examined so far and the total.
    fn tick(&self, completed: usize, total: usize);
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn tick(&self, _completed: usize, _total: usize) {}
}
