// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::SetupError;
use std::path::{Path, PathBuf};

/// Relative file paths read from a list file, resolved against the list's directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    pub base_dir: PathBuf,
    pub paths: Vec<String>,
}

impl FileList {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Reads one path per line, trimming whitespace and skipping blank lines
pub async fn read_file_list(list_path: impl AsRef<Path>) -> Result<FileList, SetupError> {
    let list_path = list_path.as_ref();
    let contents =
        tokio::fs::read_to_string(list_path)
            .await
            .map_err(|source| SetupError::ListUnreadable {
                path: list_path.to_path_buf(),
                source,
            })?;

    let paths = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let base_dir = match list_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(FileList { base_dir, paths })
}
