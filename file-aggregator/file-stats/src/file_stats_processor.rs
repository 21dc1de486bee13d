// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use file_aggregator_core::{ItemProcessor, ProcessError};
use std::path::PathBuf;
use std::time::Duration;
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};
use tracing::debug;

/// First-line marker declaring a think time in whole seconds, e.g. `#sleep=3`
pub const SLEEP_MARKER: &str = "#sleep=";

/// Line and word counts for one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub lines: usize,
    pub words: usize,
}

/// Counts lines and whitespace-separated words of files relative to a base directory
#[derive(Debug, Clone)]
pub struct FileStatsProcessor {
    base_dir: PathBuf,
}

impl FileStatsProcessor {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

/// Think time declared by a marker line, if any
/// Only the leading integer counts, so `#sleep=3s` declares three seconds.
/// Missing and non-positive values declare no delay
fn think_time(marker_line: &str) -> Option<Duration> {
    let value = marker_line.strip_prefix(SLEEP_MARKER)?.trim_start();
    let unsigned = value.strip_prefix(&['+', '-'][..]).unwrap_or(value);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let leading = &value[..value.len() - unsigned.len() + digits];

    leading
        .parse::<i64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(|secs| Duration::from_secs(secs.unsigned_abs()))
}

#[async_trait]
impl ItemProcessor<String> for FileStatsProcessor {
    type Summary = FileStats;

    async fn summarize(&self, relative_path: &String) -> Result<FileStats, ProcessError> {
        let path = self.base_dir.join(relative_path);
        let file = File::open(&path).await?;
        let mut lines = BufReader::new(file).lines();

        let mut stats = FileStats::default();
        let mut first = true;

        while let Some(line) = lines.next_line().await? {
            if first {
                first = false;
                if line.starts_with(SLEEP_MARKER) {
                    if let Some(delay) = think_time(&line) {
                        debug!(path = %path.display(), ?delay, "think time declared");
                        tokio::time::sleep(delay).await;
                    }
                    // The marker line is never counted
                    continue;
                }
            }

            stats.lines += 1;
            stats.words += line.split_whitespace().count();
        }

        Ok(stats)
    }
}

