//! Listener that keeps every event of a session for inspection or export.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::algorithms::Algorithm;
use crate::session::{ProgressListener, StepEvent};

/// Collects step events per algorithm, in emission order
#[derive(Debug, Default)]
pub struct EventRecorder {
    streams: Mutex<BTreeMap<Algorithm, Vec<StepEvent>>>,
    all_completed: AtomicUsize,
}

/// Serialized form of a recorded session
#[derive(Serialize)]
struct RecordedSession<'a> {
    all_completed: usize,
    runs: Vec<RecordedRun<'a>>,
}

#[derive(Serialize)]
struct RecordedRun<'a> {
    algorithm: &'a str,
    events: &'a [StepEvent],
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of one algorithm's event stream
    pub fn events_for(&self, algorithm: Algorithm) -> Vec<StepEvent> {
        self.streams()
            .get(&algorithm)
            .cloned()
            .unwrap_or_default()
    }

    /// Total events across all algorithms
    pub fn total_events(&self) -> usize {
        self.streams().values().map(Vec::len).sum()
    }

    /// Times `on_all_completed` has fired
    pub fn all_completed_count(&self) -> usize {
        self.all_completed.load(Ordering::Acquire)
    }

    /// Algorithms whose terminal event has been recorded
    pub fn completed_algorithms(&self) -> Vec<Algorithm> {
        self.streams()
            .iter()
            .filter(|(_, events)| events.last().is_some_and(|e| e.completed))
            .map(|(algorithm, _)| *algorithm)
            .collect()
    }

    /// Export every stream as JSON
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let streams = self.streams();
        let session = RecordedSession {
            all_completed: self.all_completed_count(),
            runs: streams
                .iter()
                .map(|(algorithm, events)| RecordedRun {
                    algorithm: algorithm.name(),
                    events,
                })
                .collect(),
        };

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &session)?;
        writer.flush()
    }

    fn streams(&self) -> MutexGuard<'_, BTreeMap<Algorithm, Vec<StepEvent>>> {
        self.streams
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProgressListener for EventRecorder {
    fn on_progress(&self, event: StepEvent) {
        self.streams().entry(event.algorithm).or_default().push(event);
    }

    fn on_all_completed(&self) {
        self.all_completed.fetch_add(1, Ordering::AcqRel);
    }
}
