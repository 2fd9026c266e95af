//! Pure summation of a single chunk

use super::partition::Chunk;
use crate::error::{PipelineError, Result};

/// Sum one chunk's values with an explicit overflow check.
///
/// Overflow fails loudly with the offending chunk's bounds rather than
/// silently wrapping. Chunks are disjoint and read-only, so any number
/// of calls may run concurrently.
pub fn sum_chunk(chunk: &Chunk) -> Result<i64> {
    let mut acc: i64 = 0;
    for value in chunk.values() {
        acc = acc
            .checked_add(value)
            .ok_or(PipelineError::ChunkSumOverflow {
                index: chunk.index,
                start: chunk.start,
                end: chunk.end,
            })?;
    }
    Ok(acc)
}
