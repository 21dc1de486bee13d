// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Races a single item's work against its deadline.
//!
//! The work runs on a dedicated blocking thread that drives it to completion,
//! so a processor that blocks synchronously can never starve the executor
//! thread deciding the race. When the deadline wins, the work's cancellation
//! token fires: async work is dropped at its next await point, while work
//! stuck in a blocking call keeps its thread until that call returns. Either
//! way its result is discarded.
//!
//! Work that has not finished strictly before the deadline resolves as
//! `Timeout`. The deadline branch is polled first and a completion observed
//! at or after the deadline is discarded, so a tie always goes to the deadline.

use crate::{ItemProcessor, Outcome, WorkItem};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

// Stand-in deadline for timeouts too large to represent as an instant
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

pub async fn process_with_deadline<D, P>(
    processor: &Arc<P>,
    item: &WorkItem<D>,
    timeout: Duration,
) -> Outcome<P::Summary>
where
    D: Clone + Send + Sync + 'static,
    P: ItemProcessor<D>,
{
    // Fixed before the work starts so the work can never finish ahead of a tie
    let now = Instant::now();
    let deadline = now
        .checked_add(timeout)
        .unwrap_or_else(|| now + FAR_FUTURE);

    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let processor = Arc::clone(processor);
    let descriptor = item.descriptor.clone();
    let runtime = Handle::current();
    let mut work = tokio::task::spawn_blocking(move || {
        runtime.block_on(async move {
            tokio::select! {
                _ = cancel.cancelled() => None,
                result = processor.summarize(&descriptor) => Some(result),
            }
        })
    });

    tokio::select! {
        biased;

        _ = sleep_until(deadline) => {
            debug!(position = item.position, ?timeout, "deadline reached, abandoning item");
            Outcome::Timeout
        }
        joined = &mut work => match joined {
            _ if Instant::now() >= deadline => {
                debug!(position = item.position, ?timeout, "item finished at or past its deadline");
                Outcome::Timeout
            }
            Ok(Some(Ok(summary))) => Outcome::Success(summary),
            Ok(Some(Err(e))) => {
                debug!(position = item.position, error = %e, "item could not be processed");
                Outcome::Timeout
            }
            Ok(None) => Outcome::Timeout,
            Err(e) => {
                warn!(position = item.position, error = %e, "item task ended abnormally");
                Outcome::Timeout
            }
        },
    }
}
