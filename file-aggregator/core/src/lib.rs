// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod work_item;
pub use work_item::{enumerate, WorkItem};

mod outcome;
pub use outcome::Outcome;

mod completion;
pub use completion::Completion;

mod pool_config;
pub use pool_config::PoolConfig;

mod error;
pub use error::{CollectorError, ConfigError, ProcessError};

pub mod item_processor;
pub use item_processor::ItemProcessor;

pub mod deadline;
pub use deadline::process_with_deadline;

mod result_slots;
pub use result_slots::ResultSlots;

pub mod worker_io;
pub use worker_io::{AsyncCompletionSender, AsyncWorkReceiver};

pub mod worker_runtime;
pub use worker_runtime::WorkerRuntime;
