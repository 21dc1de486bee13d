// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CollectorError, Outcome};

/// Position-indexed, write-once result storage
///
/// Arrival order is irrelevant: each outcome lands at its own position, and
/// the sequence is only released once every position holds exactly one value.
#[derive(Debug)]
pub struct ResultSlots<S> {
    slots: Vec<Option<Outcome<S>>>,
    filled: usize,
}

impl<S> ResultSlots<S> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
            filled: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.slots.len()
    }

    pub fn place(&mut self, position: usize, outcome: Outcome<S>) -> Result<(), CollectorError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(CollectorError::OutOfRange { position, len })?;

        if slot.is_some() {
            return Err(CollectorError::AlreadyFilled(position));
        }

        *slot = Some(outcome);
        self.filled += 1;
        Ok(())
    }

    /// Releases the outcomes in position order
    /// Fails if any position is still empty, never returns a partial sequence
    pub fn into_outcomes(self) -> Result<Vec<Outcome<S>>, CollectorError> {
        if !self.is_complete() {
            return Err(CollectorError::Unfilled {
                filled: self.filled,
                expected: self.slots.len(),
            });
        }

        Ok(self.slots.into_iter().flatten().collect())
    }
}
