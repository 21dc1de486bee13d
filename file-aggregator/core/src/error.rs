// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

/// Failure reported by an item processor
/// The pool never surfaces it to callers, it is recorded as `Outcome::Timeout`
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("resource unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("processing failed: {0}")]
    Failed(String),
}

/// Violations of the one-write-per-position invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectorError {
    #[error("position {position} is out of range for {len} slots")]
    OutOfRange { position: usize, len: usize },

    #[error("position {0} was written twice")]
    AlreadyFilled(usize),

    #[error("only {filled} of {expected} positions were filled")]
    Unfilled { filled: usize, expected: usize },
}
