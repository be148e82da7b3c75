use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use log::debug;
use rayon::prelude::*;

use crate::error::{BenchError, Result};
use crate::parallel::WorkerCount;
use crate::partition::{partition, Chunk, Range, RemainderPolicy};
use crate::primality::{find_primes, PrimeSet};

/// Result of one timed executor run.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Finds the primes in `range` on the calling thread.
pub fn run_sequential(range: Range) -> Timed<PrimeSet> {
    let start_time = Instant::now();
    let value = find_primes(range);
    let elapsed = start_time.elapsed();

    Timed { value, elapsed }
}

/// Finds the primes in `range` using one isolated worker per chunk.
pub fn run_parallel(
    range: Range,
    workers: WorkerCount,
    policy: RemainderPolicy,
    progress: Option<&ProgressBar>,
) -> Result<Timed<PrimeSet>> {
    run_parallel_with(range, workers, policy, progress, |chunk| find_primes(chunk.range))
}

/// Splits `range` into `workers` chunks and runs `work` on each one in its own task.
///
/// The timing window covers pool startup, every chunk and the final join. Tasks share no
/// mutable state; their sets are joined in chunk order once all of them have finished.
/// If any worker panics, the whole run fails and no partial result is returned.
pub fn run_parallel_with<F>(
    range: Range,
    workers: WorkerCount,
    policy: RemainderPolicy,
    progress: Option<&ProgressBar>,
    work: F,
) -> Result<Timed<PrimeSet>>
where
    F: Fn(Chunk) -> PrimeSet + Sync,
{
    let chunks = partition(range, workers.get(), policy)?;
    for chunk in &chunks {
        debug!(
            "chunk {}: [{}, {})",
            chunk.index,
            chunk.range.start(),
            chunk.range.end()
        );
    }

    let start_time = Instant::now();

    let pool = workers.build_pool()?;
    let sets = pool.install(|| {
        chunks
            .par_iter()
            .with_max_len(1)
            .map(|&chunk| -> Result<PrimeSet> {
                let set = panic::catch_unwind(AssertUnwindSafe(|| work(chunk))).map_err(
                    |payload| BenchError::WorkerFailure {
                        chunk: chunk.index,
                        message: panic_message(payload.as_ref()),
                    },
                )?;

                if let Some(pb) = progress {
                    pb.inc(1);
                }

                Ok(set)
            })
            .collect::<Result<Vec<_>>>()
    })?;
    drop(pool);

    let elapsed = start_time.elapsed();

    Ok(Timed {
        value: PrimeSet::concat(sets),
        elapsed,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
