// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce the input sequence; fatal to the whole run
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read file list '{}': {source}", path.display())]
    ListUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
