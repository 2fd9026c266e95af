//! Pipeline configuration parsing
//!
//! Handles loading of pipeline YAML files, merging of command-line
//! overrides, and fail-fast validation of the merged configuration
//! before any partitioning happens.

use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Range parameters for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeParams {
    /// Inclusive lower bound of the range
    #[serde(default = "default_from_value")]
    pub from_value: i64,

    /// Inclusive upper bound of the range
    #[serde(default = "default_to_value")]
    pub to_value: i64,

    /// Maximum number of elements per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u64,
}

fn default_from_value() -> i64 {
    1
}

fn default_to_value() -> i64 {
    100
}

fn default_chunk_size() -> u64 {
    10
}

impl Default for RangeParams {
    fn default() -> Self {
        Self {
            from_value: default_from_value(),
            to_value: default_to_value(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl RangeParams {
    /// Validate the parameters before partitioning.
    ///
    /// A reversed range (`from_value > to_value`) is NOT an error: it
    /// yields an empty run with a total of 0.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(PipelineError::InvalidConfiguration {
                reason: "chunk_size must be at least 1".to_string(),
                field: "chunk_size".to_string(),
                value: self.chunk_size.to_string(),
            });
        }
        Ok(())
    }

    /// Number of values in the range; 0 for a reversed range.
    pub fn range_len(&self) -> u128 {
        if self.from_value > self.to_value {
            0
        } else {
            u128::from(self.to_value.abs_diff(self.from_value)) + 1
        }
    }
}

/// Pipeline configuration from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Pipeline name, used in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Range parameters for the run
    #[serde(default)]
    pub params: RangeParams,

    /// Maximum number of chunks summed concurrently
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,
}

fn default_name() -> String {
    "range-sum".to_string()
}

fn default_max_parallel() -> usize {
    8
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            params: RangeParams::default(),
            max_parallel: default_max_parallel(),
        }
    }
}

/// Command-line overrides applied on top of a loaded configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamOverrides {
    pub from_value: Option<i64>,
    pub to_value: Option<i64>,
    pub chunk_size: Option<u64>,
    pub max_parallel: Option<usize>,
}

impl PipelineConfig {
    /// Load a pipeline definition from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| PipelineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| PipelineError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace individual values with command-line overrides.
    pub fn apply_overrides(mut self, overrides: &ParamOverrides) -> Self {
        if let Some(from_value) = overrides.from_value {
            self.params.from_value = from_value;
        }
        if let Some(to_value) = overrides.to_value {
            self.params.to_value = to_value;
        }
        if let Some(chunk_size) = overrides.chunk_size {
            self.params.chunk_size = chunk_size;
        }
        if let Some(max_parallel) = overrides.max_parallel {
            self.max_parallel = max_parallel;
        }
        self
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        if self.max_parallel == 0 {
            return Err(PipelineError::InvalidConfiguration {
                reason: "max_parallel must be at least 1".to_string(),
                field: "max_parallel".to_string(),
                value: self.max_parallel.to_string(),
            });
        }
        Ok(())
    }
}
