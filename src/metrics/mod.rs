use std::time::Duration;

use crate::error::{BenchError, Result};
use crate::parallel::WorkerCount;

/// Speedup and efficiency derived from one sequential and one parallel run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pub speedup: f64,
    pub efficiency: f64,
}

impl Scaling {
    /// `speedup = sequential / parallel`, `efficiency = speedup / workers`.
    ///
    /// Fails with [`BenchError::DivisionGuard`] when the parallel run measured zero time.
    pub fn compute(sequential: Duration, parallel: Duration, workers: WorkerCount) -> Result<Self> {
        if parallel.is_zero() {
            return Err(BenchError::DivisionGuard { parallel });
        }

        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64();
        let efficiency = speedup / workers.get() as f64;

        Ok(Self {
            speedup,
            efficiency,
        })
    }
}
