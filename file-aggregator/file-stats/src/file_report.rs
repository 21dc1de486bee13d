// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::FileStats;
use file_aggregator_core::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Timeout,
}

/// One entry of the JSON report
/// Counts are omitted for files that timed out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<usize>,
    pub status: FileStatus,
}

impl FileReport {
    pub fn from_outcome(path: String, outcome: Outcome<FileStats>) -> Self {
        match outcome {
            Outcome::Success(stats) => Self {
                path,
                lines: Some(stats.lines),
                words: Some(stats.words),
                status: FileStatus::Ok,
            },
            Outcome::Timeout => Self {
                path,
                lines: None,
                words: None,
                status: FileStatus::Timeout,
            },
        }
    }
}
