//! Accumulation of streamed function-call chunks

use crate::FunctionCallContent;
use std::collections::BTreeMap;

/// Collects interleaved chunks of several calls, keyed by the call index the
/// provider attaches to each chunk.
///
/// Chunks for one index are combined strictly in the order they are pushed.
#[derive(Debug, Clone, Default)]
pub struct FunctionCallAccumulator {
    calls: BTreeMap<usize, FunctionCallContent>,
}

impl FunctionCallAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, chunk: FunctionCallContent) {
        let combined = match self.calls.get(&index) {
            Some(running) => running.combine(Some(&chunk)),
            None => chunk,
        };
        self.calls.insert(index, combined);
    }

    /// Current state of the call at `index`, possibly incomplete
    pub fn get(&self, index: usize) -> Option<&FunctionCallContent> {
        self.calls.get(&index)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The accumulated calls ordered by index
    pub fn finish(self) -> Vec<FunctionCallContent> {
        self.calls.into_values().collect()
    }
}
