//! Fan-in of terminal events.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts terminal events; exactly one `arrive` call observes the total.
#[derive(Debug)]
pub struct CompletionCounter {
    arrived: AtomicUsize,
    total: usize,
}

impl CompletionCounter {
    pub fn new(total: usize) -> Self {
        Self {
            arrived: AtomicUsize::new(0),
            total,
        }
    }

    /// Register one finished run. Returns true for the run that completes the set.
    pub fn arrive(&self) -> bool {
        self.arrived.fetch_add(1, Ordering::AcqRel) + 1 == self.total
    }

    pub fn arrived(&self) -> usize {
        self.arrived.load(Ordering::Acquire)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.arrived() >= self.total
    }
}
