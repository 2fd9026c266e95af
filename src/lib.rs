//! # Rangesum
//!
//! Sum an inclusive integer range `[from_value, to_value]` with a
//! three-stage map-reduce pipeline: partition the range into contiguous
//! chunks, sum each chunk on a bounded pool of parallel workers, and
//! aggregate the partial sums into a grand total.
//!
//! ## Usage
//!
//! ```bash
//! rangesum run [--config pipeline.yml] [--from 1] [--to 1000] [--chunk-size 10]
//! ```
//!
//! ## Modules
//!
//! - `config` - Typed pipeline configuration: YAML loading, CLI override merging, validation
//! - `error` - Structured error types for pipeline runs
//! - `pipeline` - Partitioning, chunk summation, fan-out/fan-in execution, aggregation
pub mod config;
pub mod error;
pub mod pipeline;
