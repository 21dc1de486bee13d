// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ProcessError;
use async_trait::async_trait;

/// The per-item unit of work, keyed by an opaque descriptor
///
/// Implementations read whatever resource the descriptor names and derive a
/// summary from it. They must not mutate state shared with other items.
/// Deadlines are enforced by the caller (see [`crate::process_with_deadline`]),
/// which drives each call on its own blocking thread. Async work is dropped
/// when its deadline passes; synchronously blocking work is abandoned and
/// keeps its thread until it returns.
#[async_trait]
pub trait ItemProcessor<D>: Send + Sync + 'static
where
    D: Send + Sync,
{
    type Summary: Send + 'static;

    async fn summarize(&self, descriptor: &D) -> Result<Self::Summary, ProcessError>;
}
