// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;

/// Trait for receiving work items asynchronously
#[async_trait]
pub trait AsyncWorkReceiver<A>: Send {
    /// Receive the next work item
    /// Returns None once the dispatcher has no more work for this worker
    async fn recv(&mut self) -> Option<A>;
}

/// Trait for sending completion messages asynchronously
#[async_trait]
pub trait AsyncCompletionSender<M>: Send + Sync + Clone {
    /// Returns true if the message was delivered, false if the listener is gone
    async fn send(&self, message: M) -> bool;
}
