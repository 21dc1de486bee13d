// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use file_aggregator_core::{CollectorError, ConfigError};
use file_aggregator_file_stats::SetupError;
use thiserror::Error;

/// Hard failures of a run
/// Per-item failures are never reported here, they arrive as `Outcome::Timeout`
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("invalid pool configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),

    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),

    /// An internal invariant was broken; this is a bug, not a runtime condition
    #[error("result coordination failed: {0}")]
    Coordination(#[from] CollectorError),
}
