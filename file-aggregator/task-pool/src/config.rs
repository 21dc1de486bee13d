// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use file_aggregator_core::{ConfigError, PoolConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

const DEFAULT_WORKERS: usize = 4;
const DEFAULT_TIMEOUT_MS: u64 = 2_000;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings loaded from a JSON config file, e.g. `{ "workers": 3, "timeout_ms": 1000 }`
/// Missing fields fall back to 4 workers and a 2 second timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AggregatorConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AggregatorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config file if one is given
    /// A file that cannot be read or parsed falls back to the defaults
    pub fn resolve(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// Command-line values take precedence over file values
    pub fn with_overrides(self, workers: Option<usize>, timeout_ms: Option<u64>) -> Self {
        Self {
            workers: workers.unwrap_or(self.workers),
            timeout_ms: timeout_ms.unwrap_or(self.timeout_ms),
        }
    }

    pub fn pool_config(&self) -> Result<PoolConfig, ConfigError> {
        PoolConfig::from_millis(self.workers, self.timeout_ms)
    }
}
