// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod channel_wrappers;
pub use channel_wrappers::{ChannelCompletionSender, ChannelWorkReceiver};

mod tokio_runtime;
pub use tokio_runtime::TokioRuntime;

mod pool_worker;
pub use pool_worker::PoolWorker;

mod orchestrator;
pub use orchestrator::{aggregate, aggregate_blocking, aggregate_file_list, Aggregator};

mod aggregate_error;
pub use aggregate_error::AggregateError;

mod config;
pub use config::{AggregatorConfig, ConfigFileError};
