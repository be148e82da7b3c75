use crate::error::Result;
use crate::partition::{Range, RemainderPolicy};

pub const DEFAULT_RANGE_START: i64 = 2;
pub const DEFAULT_RANGE_END: i64 = 1_000_000;

/// Values passed into the benchmark pipeline at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub range: Range,
    /// Worker count override; `None` means one worker per logical processor.
    pub workers: Option<usize>,
    pub remainder: RemainderPolicy,
    pub show_progress: bool,
}

impl BenchConfig {
    pub fn new(workers: Option<usize>, show_progress: bool) -> Result<Self> {
        Ok(Self {
            range: Range::new(DEFAULT_RANGE_START, DEFAULT_RANGE_END)?,
            workers,
            remainder: RemainderPolicy::default(),
            show_progress,
        })
    }
}
