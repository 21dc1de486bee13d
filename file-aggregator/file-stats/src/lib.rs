// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod file_stats_processor;
pub use file_stats_processor::{FileStats, FileStatsProcessor, SLEEP_MARKER};

mod file_list;
pub use file_list::{read_file_list, FileList};

mod file_report;
pub use file_report::{FileReport, FileStatus};

mod setup_error;
pub use setup_error::SetupError;
