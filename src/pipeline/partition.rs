//! Pure range partitioning
//!
//! Splits an inclusive integer range into contiguous chunks without any
//! I/O, enabling testability and composition. Same inputs always produce
//! the same chunks.

use serde::{Deserialize, Serialize};

/// A contiguous, inclusive subrange of the input range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position of this chunk in partition order
    pub index: usize,
    /// First value in the chunk
    pub start: i64,
    /// Last value in the chunk
    pub end: i64,
}

impl Chunk {
    /// Number of values in the chunk. Produced chunks are never empty.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// The chunk's values, in range order.
    pub fn values(&self) -> impl Iterator<Item = i64> {
        self.start..=self.end
    }
}

/// Pure: split `[from_value, to_value]` into ordered chunks of at most
/// `chunk_size` values.
///
/// The chunks partition the range exactly: no overlap, no gaps, union
/// equals the range, order preserved. Every chunk has length
/// `chunk_size` except possibly the last. A reversed range
/// (`from_value > to_value`) yields no chunks.
///
/// `chunk_size >= 1` is enforced by config validation before this is
/// called.
pub fn partition_range(from_value: i64, to_value: i64, chunk_size: u64) -> Vec<Chunk> {
    debug_assert!(chunk_size >= 1, "chunk_size is validated upstream");
    if from_value > to_value {
        return Vec::new();
    }

    // Width of a full chunk, capped so start + step cannot wrap.
    let step = i64::try_from(chunk_size.saturating_sub(1)).unwrap_or(i64::MAX);

    let mut chunks = Vec::new();
    let mut start = from_value;
    loop {
        let end = start.saturating_add(step).min(to_value);
        chunks.push(Chunk {
            index: chunks.len(),
            start,
            end,
        });
        match end.checked_add(1) {
            Some(next) if next <= to_value => start = next,
            _ => break,
        }
    }
    chunks
}
