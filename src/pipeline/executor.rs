//! Map phase execution
//!
//! Fans chunk summation out over a bounded pool of workers and collects
//! every partial sum at the fan-in barrier. Concurrency is bounded with
//! a semaphore; completions are drained in whatever order workers
//! finish.

use super::aggregate::PartialSum;
use super::partition::Chunk;
use super::sum;
use crate::error::{PipelineError, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

/// Execute the map phase: one summation worker per chunk, at most
/// `max_parallel` running at once.
///
/// The barrier requires exactly as many partial sums as there are
/// chunks; a panicked or vanished worker is a terminal error for the
/// run. Results are returned sorted by chunk index for deterministic
/// reporting.
pub async fn execute_map_phase(chunks: Vec<Chunk>, max_parallel: usize) -> Result<Vec<PartialSum>> {
    let expected = chunks.len();
    let semaphore = Arc::new(Semaphore::new(max_parallel));
    let mut workers = FuturesUnordered::new();

    for chunk in chunks {
        let permit = semaphore.clone().acquire_owned().await.unwrap();
        let index = chunk.index;

        let handle = tokio::spawn(async move {
            let result = sum::sum_chunk(&chunk);
            if let Ok(sum) = &result {
                debug!(
                    chunk = chunk.index,
                    start = chunk.start,
                    end = chunk.end,
                    sum = *sum,
                    "chunk summed"
                );
            }
            drop(permit);
            result
        });

        workers.push(async move { (index, handle.await) });
    }

    let mut partial_sums = Vec::with_capacity(expected);
    while let Some((index, joined)) = workers.next().await {
        match joined {
            Ok(Ok(sum)) => partial_sums.push(PartialSum {
                chunk_index: index,
                sum,
            }),
            Ok(Err(err)) => return Err(err),
            Err(join_err) => {
                return Err(PipelineError::WorkerFailed {
                    index,
                    reason: join_err.to_string(),
                })
            }
        }
    }

    if partial_sums.len() != expected {
        return Err(PipelineError::IncompleteMapPhase {
            produced: partial_sums.len(),
            expected,
        });
    }

    partial_sums.sort_by_key(|partial| partial.chunk_index);
    Ok(partial_sums)
}
