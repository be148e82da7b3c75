use std::time::Duration;

use thiserror::Error;

/// Errors that can abort a benchmark run.
///
/// Every variant is fatal. The benchmark has no recovery path and never reports partial
/// results.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BenchError {
    /// The worker count resolved to zero.
    #[error("invalid worker count: {requested} (at least one worker is required)")]
    Configuration { requested: usize },

    /// A range was constructed with `start > end`.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: i64, end: i64 },

    /// A range was asked to split into zero chunks.
    #[error("cannot partition a range into zero chunks")]
    EmptyPartition,

    /// The worker pool could not be started.
    #[error("failed to start worker pool")]
    WorkerPool(#[source] rayon::ThreadPoolBuildError),

    /// A worker panicked while evaluating its chunk.
    #[error("worker for chunk {chunk} failed: {message}")]
    WorkerFailure { chunk: usize, message: String },

    /// The parallel phase measured zero elapsed time, so speedup is undefined.
    #[error("speedup is undefined: parallel run measured {parallel:?}")]
    DivisionGuard { parallel: Duration },
}

pub type Result<T> = std::result::Result<T, BenchError>;
