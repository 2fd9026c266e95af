//! Fan-in aggregation of partial sums
//!
//! Pure combination of per-chunk results into a grand total. Input order
//! is irrelevant since addition is commutative.

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Result of summing one chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSum {
    /// Index of the chunk this sum came from
    pub chunk_index: usize,
    /// Sum of the chunk's values
    pub sum: i64,
}

/// Combined outcome of the reduce step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationSummary {
    /// Number of partial sums combined
    pub chunk_count: usize,
    /// Grand total over all chunks
    pub total: i64,
}

/// Combine partial sums into a grand total.
///
/// Returns the total explicitly; logging it is the caller's concern.
/// Zero partial sums yield a total of 0. Overflow fails loudly instead
/// of wrapping.
pub fn aggregate(partial_sums: &[PartialSum]) -> Result<AggregationSummary> {
    let mut total: i64 = 0;
    for partial in partial_sums {
        total = total
            .checked_add(partial.sum)
            .ok_or(PipelineError::TotalOverflow {
                partials: partial_sums.len(),
            })?;
    }
    Ok(AggregationSummary {
        chunk_count: partial_sums.len(),
        total,
    })
}
