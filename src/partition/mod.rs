use std::fmt;

use crate::error::{BenchError, Result};

/// Half-open interval `[start, end)` of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: i64,
    end: i64,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(BenchError::InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn iter(&self) -> std::ops::Range<i64> {
        self.start..self.end
    }

    // `offset` never exceeds `len()`, so the result stays within `[start, end]`.
    fn at_offset(&self, offset: u64) -> i64 {
        self.start.saturating_add_unsigned(offset)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// What happens to the elements left over when a range does not split evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// The tail beyond `start + count * chunk_size` is never tested.
    Drop,
    /// The last chunk is extended to the end of the range.
    #[default]
    AppendToLast,
}

/// One contiguous sub-range assigned to a single worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub range: Range,
}

/// Splits `range` into `count` contiguous, non-overlapping chunks of `len / count`
/// elements each.
///
/// Leftover elements are handled according to `policy`. A `count` larger than the range
/// produces empty chunks.
pub fn partition(range: Range, count: usize, policy: RemainderPolicy) -> Result<Vec<Chunk>> {
    if count == 0 {
        return Err(BenchError::EmptyPartition);
    }

    let chunk_size = range.len() / count as u64;
    let last = count - 1;

    let chunks = (0..count)
        .map(|index| {
            let start = range.at_offset(index as u64 * chunk_size);
            let end = match policy {
                RemainderPolicy::AppendToLast if index == last => range.end(),
                _ => range.at_offset((index as u64 + 1) * chunk_size),
            };

            Chunk {
                index,
                range: Range { start, end },
            }
        })
        .collect();

    Ok(chunks)
}
