//! Configuration management for pipeline runs

mod pipeline;

pub use pipeline::{ParamOverrides, PipelineConfig, RangeParams};
