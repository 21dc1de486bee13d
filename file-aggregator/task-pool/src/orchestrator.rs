// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    AggregateError, ChannelCompletionSender, ChannelWorkReceiver, PoolWorker, TokioRuntime,
};
use file_aggregator_core::{
    enumerate, Completion, ItemProcessor, Outcome, PoolConfig, ResultSlots, WorkItem,
    WorkerRuntime,
};
use file_aggregator_file_stats::{read_file_list, FileReport, FileStatsProcessor};
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Aggregator drives one run: a fixed pool of workers, a dispatcher handing
/// out items as workers free up, and a collector placing every outcome at
/// its input position.
///
/// `run` consumes the aggregator, so positions of two runs can never mix.
pub struct Aggregator<P, R = TokioRuntime> {
    processor: Arc<P>,
    config: PoolConfig,
    _runtime: PhantomData<fn() -> R>,
}

impl<P> Aggregator<P, TokioRuntime> {
    pub fn new(processor: P, config: PoolConfig) -> Self {
        Self::with_runtime(processor, config)
    }
}

impl<P, R: WorkerRuntime> Aggregator<P, R> {
    pub fn with_runtime(processor: P, config: PoolConfig) -> Self {
        Self {
            processor: Arc::new(processor),
            config,
            _runtime: PhantomData,
        }
    }

    /// Processes every item exactly once and returns the outcomes in input order
    ///
    /// Exactly `workers` workers are started for a non-empty input, none for an
    /// empty one. At most `workers` items are in flight at any instant.
    pub async fn run<D, I>(
        self,
        items: I,
    ) -> Result<Vec<Outcome<<P as ItemProcessor<D>>::Summary>>, AggregateError>
    where
        I: IntoIterator<Item = D>,
        D: Clone + Send + Sync + 'static,
        P: ItemProcessor<D>,
    {
        let items = enumerate(items);
        let total = items.len();
        let workers = self.config.workers();
        let timeout = self.config.timeout();

        if total == 0 {
            debug!("no items to aggregate");
            return Ok(Vec::new());
        }

        info!(
            items = total,
            workers,
            timeout_ms = timeout.as_millis() as u64,
            "aggregation started"
        );
        debug!(phase = "dispatching", "run phase changed");

        let (complete_tx, mut complete_rx) =
            mpsc::channel::<Completion<<P as ItemProcessor<D>>::Summary>>(workers);

        // Create worker pool
        let mut work_senders = Vec::with_capacity(workers);
        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let (work_tx, work_rx) = mpsc::channel::<WorkItem<D>>(1);
            let worker = PoolWorker::new(
                worker_id,
                Arc::clone(&self.processor),
                timeout,
                ChannelWorkReceiver { rx: work_rx },
                ChannelCompletionSender {
                    tx: complete_tx.clone(),
                },
            );
            handles.push(R::spawn(move || worker.run()));
            work_senders.push(Some(work_tx));
        }
        drop(complete_tx);

        let mut pending = items.into_iter();
        let mut slots = ResultSlots::new(total);
        let mut in_flight = 0usize;

        // Assign initial work to all workers
        for (worker_id, sender) in work_senders.iter_mut().enumerate() {
            if dispatch_next(&mut pending, sender, worker_id).await {
                in_flight += 1;
            }
        }

        // As workers complete, place their outcome and assign them more work
        while in_flight > 0 {
            let Some(completion) = complete_rx.recv().await else {
                error!(in_flight, "all workers exited with items still in flight");
                break;
            };
            in_flight -= 1;

            let worker_id = completion.worker_id;
            slots.place(completion.position, completion.outcome)?;
            debug!(
                worker = worker_id,
                position = completion.position,
                filled = slots.filled(),
                total,
                "item resolved"
            );

            if dispatch_next(&mut pending, &mut work_senders[worker_id], worker_id).await {
                in_flight += 1;
            }
        }
        debug!(phase = "all-completed", "run phase changed");

        // Close any channel still open so idle workers exit, then wait for them
        drop(work_senders);
        for (worker_id, handle) in handles.into_iter().enumerate() {
            if let Err(e) = R::join(handle).await {
                warn!(worker = worker_id, error = %e, "worker task failed");
            }
        }

        let outcomes = slots.into_outcomes()?;

        info!(
            items = total,
            timeouts = outcomes.iter().filter(|o| o.is_timeout()).count(),
            "aggregation finished"
        );
        Ok(outcomes)
    }
}

/// Hands the next pending item to a worker, or closes its channel when none remain
/// Returns true if an item was dispatched
async fn dispatch_next<D>(
    pending: &mut impl Iterator<Item = WorkItem<D>>,
    sender: &mut Option<mpsc::Sender<WorkItem<D>>>,
    worker_id: usize,
) -> bool {
    let Some(tx) = sender.as_ref() else {
        return false;
    };

    let Some(item) = pending.next() else {
        *sender = None;
        return false;
    };

    let position = item.position;
    if tx.send(item).await.is_err() {
        // The slot stays empty and the run ends with a coordination error
        error!(worker = worker_id, position, "worker gone, item not dispatched");
        *sender = None;
        return false;
    }
    true
}

/// Runs one aggregation on the current tokio runtime
pub async fn aggregate<D, P>(
    items: impl IntoIterator<Item = D>,
    processor: P,
    config: PoolConfig,
) -> Result<Vec<Outcome<P::Summary>>, AggregateError>
where
    D: Clone + Send + Sync + 'static,
    P: ItemProcessor<D>,
{
    Aggregator::new(processor, config).run(items).await
}

/// Blocks the calling thread until every item has resolved
///
/// Work abandoned at its deadline is not waited for when the runtime shuts down.
///
/// # Panics
///
/// Panics if called from within an asynchronous execution context.
pub fn aggregate_blocking<D, P>(
    items: impl IntoIterator<Item = D>,
    processor: P,
    config: PoolConfig,
) -> Result<Vec<Outcome<P::Summary>>, AggregateError>
where
    D: Clone + Send + Sync + 'static,
    P: ItemProcessor<D>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(aggregate(items, processor, config));
    runtime.shutdown_background();
    result
}

/// Reads a list file and reports line/word counts for every listed file, in list order
/// An unreadable list fails the whole run before any worker starts
pub async fn aggregate_file_list(
    list_path: impl AsRef<Path>,
    config: PoolConfig,
) -> Result<Vec<FileReport>, AggregateError> {
    let list = read_file_list(list_path).await?;
    let processor = FileStatsProcessor::new(list.base_dir.clone());

    let outcomes = aggregate(list.paths.clone(), processor, config).await?;

    Ok(list
        .paths
        .into_iter()
        .zip(outcomes)
        .map(|(path, outcome)| FileReport::from_outcome(path, outcome))
        .collect())
}
