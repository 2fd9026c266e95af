//! Structured error types for pipeline runs
//!
//! Every failure is local and terminal for the run; there is no retry
//! machinery behind these variants.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pipeline operations
#[derive(Debug, Error)]
pub enum PipelineError {
    // Configuration errors
    #[error("Invalid pipeline configuration: {reason} (field: {field}, value: {value})")]
    InvalidConfiguration {
        reason: String,
        field: String,
        value: String,
    },

    #[error("Failed to read pipeline file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pipeline file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    // Summation errors
    #[error("Sum of chunk {index} [{start}, {end}] overflowed i64")]
    ChunkSumOverflow { index: usize, start: i64, end: i64 },

    #[error("Grand total overflowed i64 while combining {partials} partial sums")]
    TotalOverflow { partials: usize },

    // Map phase errors
    #[error("Worker for chunk {index} failed: {reason}")]
    WorkerFailed { index: usize, reason: String },

    #[error("Map phase produced {produced} partial sums, expected {expected}")]
    IncompleteMapPhase { produced: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
