// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Outcome;

/// Message emitted by a worker after it resolves an item
/// The worker id lets the dispatcher hand the freed worker its next item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion<S> {
    pub worker_id: usize,
    pub position: usize,
    pub outcome: Outcome<S>,
}
