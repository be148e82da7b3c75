use std::num::NonZeroUsize;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{BenchError, Result};

/// Number of isolated workers used by the parallel phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerCount(NonZeroUsize);

impl WorkerCount {
    /// Uses `requested` if given, otherwise the number of logical processors.
    pub fn resolve(requested: Option<usize>) -> Result<Self> {
        let count = requested.unwrap_or_else(num_cpus::get);
        Self::new(count)
    }

    pub fn new(count: usize) -> Result<Self> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(BenchError::Configuration { requested: count })
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Starts a private pool with exactly one thread per worker.
    pub fn build_pool(&self) -> Result<ThreadPool> {
        ThreadPoolBuilder::new()
            .num_threads(self.get())
            .thread_name(|i| format!("prime-worker-{i}"))
            .build()
            .map_err(BenchError::WorkerPool)
    }
}
