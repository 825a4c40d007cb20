use crate::error::{EtlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Runtime configuration for an ETL run, loaded from a toml file and passed
/// explicitly into the pipeline drivers.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub inputs: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Handshake student export: one row per (student, major)
    pub handshake_data: String,
    /// Reference csv mapping raw major strings to department and college
    pub major_data: String,
    /// Athletics roster csv: one row per (university id, sport)
    pub athlete_data: String,
    /// Per-student pell/URM/first-generation flags
    pub demographic_data: String,
    /// Student leadership org membership roster
    pub sli_data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EtlError::Config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
