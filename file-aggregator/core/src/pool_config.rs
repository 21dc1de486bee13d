// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ConfigError;
use std::time::Duration;

/// Worker count and per-item timeout, fixed for the lifetime of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    workers: usize,
    timeout: Duration,
}

impl PoolConfig {
    /// A zero timeout is accepted: every item then resolves as `Timeout`
    pub fn new(workers: usize, timeout: Duration) -> Result<Self, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(Self { workers, timeout })
    }

    pub fn from_millis(workers: usize, timeout_ms: u64) -> Result<Self, ConfigError> {
        Self::new(workers, Duration::from_millis(timeout_ms))
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
