// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use file_aggregator_core::worker_io::{AsyncCompletionSender, AsyncWorkReceiver};
use tokio::sync::mpsc;

pub struct ChannelWorkReceiver<A> {
    pub rx: mpsc::Receiver<A>,
}

#[async_trait]
impl<A> AsyncWorkReceiver<A> for ChannelWorkReceiver<A>
where
    A: Send,
{
    async fn recv(&mut self) -> Option<A> {
        self.rx.recv().await
    }
}

pub struct ChannelCompletionSender<M> {
    pub tx: mpsc::Sender<M>,
}

// Derive would require M: Clone
impl<M> Clone for ChannelCompletionSender<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

#[async_trait]
impl<M> AsyncCompletionSender<M> for ChannelCompletionSender<M>
where
    M: Send + 'static,
{
    async fn send(&self, message: M) -> bool {
        self.tx.send(message).await.is_ok()
    }
}
