// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use file_aggregator_core::{
    process_with_deadline, AsyncCompletionSender, AsyncWorkReceiver, Completion, ItemProcessor,
    WorkItem,
};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Long-lived pool worker
/// Resolves one item at a time, each under its own deadline, until its work channel closes
pub struct PoolWorker<D, P, W, C> {
    id: usize,
    processor: Arc<P>,
    timeout: Duration,
    work_rx: W,
    complete_tx: C,
    _descriptor: PhantomData<fn() -> D>,
}

impl<D, P, W, C> PoolWorker<D, P, W, C>
where
    D: Clone + Send + Sync + 'static,
    P: ItemProcessor<D>,
    W: AsyncWorkReceiver<WorkItem<D>>,
    C: AsyncCompletionSender<Completion<P::Summary>>,
{
    pub fn new(id: usize, processor: Arc<P>, timeout: Duration, work_rx: W, complete_tx: C) -> Self {
        Self {
            id,
            processor,
            timeout,
            work_rx,
            complete_tx,
            _descriptor: PhantomData,
        }
    }

    pub async fn run(mut self) {
        let mut processed = 0usize;

        while let Some(item) = self.work_rx.recv().await {
            let outcome = process_with_deadline(&self.processor, &item, self.timeout).await;
            if outcome.is_timeout() {
                warn!(worker = self.id, position = item.position, "item timed out");
            }

            let completion = Completion {
                worker_id: self.id,
                position: item.position,
                outcome,
            };
            if !self.complete_tx.send(completion).await {
                warn!(worker = self.id, "completion listener gone, stopping");
                return;
            }
            processed += 1;
        }

        debug!(worker = self.id, processed, "worker finished");
    }
}
