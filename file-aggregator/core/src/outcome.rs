// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Result of processing a single work item
///
/// Any failure to access the underlying resource is reported as `Timeout`,
/// the same as work that did not finish before its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S> {
    Success(S),
    Timeout,
}

impl<S> Outcome<S> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Outcome::Timeout)
    }
}
