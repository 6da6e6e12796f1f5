//! Runtime configuration: JSON file plus command-line overrides.

pub mod cli;
pub mod experiment;

pub use cli::{parse_args, CliCommand};
pub use experiment::ExperimentConfig;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the experiment report as JSON to this path.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    #[serde(flatten)]
    pub experiment: ExperimentConfig,
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::config(format!("failed to read config {}: {e}", path.display())))?;
    serde_json::from_str(&contents)
        .map_err(|e| Error::config(format!("failed to parse config {}: {e}", path.display())))
}
