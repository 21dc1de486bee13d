// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// One unit of input work, tagged with its original position in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem<D> {
    pub position: usize,
    pub descriptor: D,
}

impl<D> WorkItem<D> {
    pub fn new(position: usize, descriptor: D) -> Self {
        Self {
            position,
            descriptor,
        }
    }
}

/// Assigns positions 0..N-1 to the items in input order
pub fn enumerate<D>(items: impl IntoIterator<Item = D>) -> Vec<WorkItem<D>> {
    items
        .into_iter()
        .enumerate()
        .map(|(position, descriptor)| WorkItem::new(position, descriptor))
        .collect()
}
