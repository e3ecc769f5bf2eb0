//! Step events and the listener protocol consumed by presentation layers.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;

/// One observable operation of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    /// Run that produced the event
    pub algorithm: Algorithm,
    /// Copy of the working data right after the operation
    pub snapshot: Vec<u32>,
    /// Positions touched by the operation (empty on the terminal event)
    pub active: Vec<usize>,
    /// Milliseconds since the run's first emitted step
    pub elapsed_ms: u64,
    /// Set only on the last event of the run
    pub completed: bool,
}

impl StepEvent {
    /// Whether this is the terminal event of its run
    pub fn is_terminal(&self) -> bool {
        self.completed
    }
}

/// Receives progress from every run of a session.
///
/// `on_progress` is called from the run's own thread. Events of one algorithm
/// arrive in order; events of different algorithms interleave freely.
/// `on_all_completed` is called once, after the last terminal event.
pub trait ProgressListener: Send + Sync {
    fn on_progress(&self, event: StepEvent);

    fn on_all_completed(&self);
}

impl<L: ProgressListener + ?Sized> ProgressListener for Arc<L> {
    fn on_progress(&self, event: StepEvent) {
        (**self).on_progress(event);
    }

    fn on_all_completed(&self) {
        (**self).on_all_completed();
    }
}

/// Channel form of the listener protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Step of one run
    Progress(StepEvent),
    /// Every run has emitted its terminal event
    AllCompleted,
}

impl ProgressListener for Sender<SessionEvent> {
    fn on_progress(&self, event: StepEvent) {
        // Ignore send errors (receiver gone is ok)
        let _ = self.send(SessionEvent::Progress(event));
    }

    fn on_all_completed(&self) {
        let _ = self.send(SessionEvent::AllCompleted);
    }
}
