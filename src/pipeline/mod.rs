//! Chunked map-reduce pipeline for summing integer ranges
//!
//! Orchestrates one run end to end: validate the configuration,
//! partition the range, fan the chunks out to parallel workers, collect
//! every partial sum at the fan-in barrier, and aggregate the grand
//! total. All data flows through explicit parameters; nothing persists
//! between runs.

pub mod aggregate;
pub mod executor;
pub mod partition;
pub mod sum;

use crate::config::{PipelineConfig, RangeParams};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;
use uuid::Uuid;

/// Summary of one completed pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Unique id for log correlation
    pub run_id: String,
    /// Parameters the run was started with
    pub params: RangeParams,
    /// Number of chunks the range was split into
    pub chunk_count: usize,
    /// Grand total over the range
    pub total: i64,
    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,
    /// Time from validation through aggregation
    #[serde(with = "humantime_serde")]
    pub duration: Duration,
}

/// Run the pipeline: partition, fan out, fan in, aggregate.
///
/// The total is returned explicitly; the human-readable summary line is
/// logged as a side effect. Runs with identical parameters produce
/// identical totals.
pub async fn run(config: &PipelineConfig) -> Result<RunSummary> {
    config.validate()?;

    let run_id = Uuid::new_v4().to_string();
    let started_at = Utc::now();
    let start = Instant::now();
    let params = config.params;

    let chunks = partition::partition_range(params.from_value, params.to_value, params.chunk_size);
    let chunk_count = chunks.len();
    info!(
        run_id = %run_id,
        pipeline = %config.name,
        max_parallel = config.max_parallel,
        "partitioned [{}, {}] into {} chunk(s)",
        params.from_value,
        params.to_value,
        chunk_count
    );

    let partial_sums = executor::execute_map_phase(chunks, config.max_parallel).await?;
    let summary = aggregate::aggregate(&partial_sums)?;

    info!(
        run_id = %run_id,
        "Sum of integers from {} to {} is: {}",
        params.from_value,
        params.to_value,
        summary.total
    );

    Ok(RunSummary {
        run_id,
        params,
        chunk_count,
        total: summary.total,
        started_at,
        duration: start.elapsed(),
    })
}
