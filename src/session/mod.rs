//! Concurrent sorting sessions.
//!
//! A session starts one thread per algorithm. Every thread sorts its own copy
//! of the dataset and reports through a [`ProgressListener`]:
//!
//! - **Runs**: independent, paced by the shared [`Pacing`] delay
//! - **Completion**: a [`CompletionCounter`] fires `on_all_completed` once
//! - **Cancellation**: a [`CancelToken`] stops every run between steps
//!
//! ```no_run
//! use std::sync::mpsc;
//! use sortrace::dataset::Dataset;
//! use sortrace::session::{Pacing, Session, SessionEvent};
//!
//! let (tx, rx) = mpsc::channel();
//! let handle = Session::start(&Dataset::new(vec![3, 1, 2]), Pacing::instant(), tx).unwrap();
//!
//! for event in rx {
//!     if let SessionEvent::AllCompleted = event {
//!         break;
//!     }
//! }
//! println!("{}", handle.join());
//! ```

mod cancel;
mod completion;
mod context;
mod events;

pub use cancel::{CancelToken, Interrupted};
pub use completion::CompletionCounter;
pub use context::{Pacing, RunContext};
pub use events::{ProgressListener, SessionEvent, StepEvent};

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use thiserror::Error;

use crate::algorithms::Algorithm;
use crate::dataset::{Dataset, MAX_VALUE};
use crate::report::{RunOutcome, SessionReport};

/// Errors raised when starting a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to spawn run thread for {algorithm}: {source}")]
    Spawn {
        algorithm: Algorithm,
        #[source]
        source: std::io::Error,
    },

    #[error("no algorithms to run")]
    NoAlgorithms,

    #[error("dataset value {value} exceeds the supported maximum {max}")]
    ValueOutOfRange { value: u32, max: u32 },
}

/// Entry point for starting sessions
pub struct Session;

impl Session {
    /// Start every algorithm on its own copy of `dataset`.
    pub fn start<L>(dataset: &Dataset, pacing: Pacing, listener: L) -> Result<SessionHandle, SessionError>
    where
        L: ProgressListener + 'static,
    {
        Self::start_with(&Algorithm::ALL, dataset, pacing, listener)
    }

    /// Start a chosen set of algorithms; completion fires once all of them finish.
    ///
    /// Fails before spawning anything when `algorithms` is empty or a value
    /// exceeds [`MAX_VALUE`].
    pub fn start_with<L>(
        algorithms: &[Algorithm],
        dataset: &Dataset,
        pacing: Pacing,
        listener: L,
    ) -> Result<SessionHandle, SessionError>
    where
        L: ProgressListener + 'static,
    {
        if algorithms.is_empty() {
            return Err(SessionError::NoAlgorithms);
        }
        if let Some(value) = dataset.max_value().filter(|&v| v > MAX_VALUE) {
            return Err(SessionError::ValueOutOfRange {
                value,
                max: MAX_VALUE,
            });
        }

        let listener: Arc<dyn ProgressListener> = Arc::new(listener);
        let counter = Arc::new(CompletionCounter::new(algorithms.len()));
        let cancel = CancelToken::new();

        log::info!(
            "Session start: {} runs, {} values, delay={:?}",
            algorithms.len(),
            dataset.len(),
            pacing.delay()
        );

        let mut handle = SessionHandle {
            runs: Vec::with_capacity(algorithms.len()),
            cancel: cancel.clone(),
            counter: counter.clone(),
        };

        for &algorithm in algorithms {
            let data = dataset.to_vec();
            let listener = listener.clone();
            let counter = counter.clone();
            let cancel = cancel.clone();

            let spawned = thread::Builder::new()
                .name(format!("sort-{}", algorithm.slug()))
                .spawn(move || run_algorithm(algorithm, data, pacing, listener, cancel, counter));

            match spawned {
                Ok(thread) => handle.runs.push((algorithm, thread)),
                Err(source) => {
                    // handle drop cancels and joins the runs already started
                    return Err(SessionError::Spawn { algorithm, source });
                }
            }
        }

        Ok(handle)
    }
}

/// Handle for controlling the run threads of a session
pub struct SessionHandle {
    runs: Vec<(Algorithm, JoinHandle<RunOutcome>)>,
    cancel: CancelToken,
    counter: Arc<CompletionCounter>,
}

impl SessionHandle {
    /// Stop every run at its next step or pacing delay
    pub fn cancel(&self) {
        log::info!("Session cancelled");
        self.cancel.cancel();
    }

    /// Whether every run thread has exited
    pub fn is_finished(&self) -> bool {
        self.runs.iter().all(|(_, thread)| thread.is_finished())
    }

    /// Number of runs that emitted their terminal event
    pub fn completed_runs(&self) -> usize {
        self.counter.arrived()
    }

    /// Shared completion counter, still readable after the handle is gone
    pub fn completion(&self) -> Arc<CompletionCounter> {
        self.counter.clone()
    }

    /// Wait for every run and collect their outcomes
    pub fn join(mut self) -> SessionReport {
        let runs = std::mem::take(&mut self.runs);
        let outcomes = runs
            .into_iter()
            .map(|(algorithm, thread)| {
                let outcome = thread.join().unwrap_or_else(|_| {
                    log::error!("{} run panicked", algorithm);
                    RunOutcome::Interrupted
                });
                (algorithm, outcome)
            })
            .collect();

        let report = SessionReport::new(outcomes);
        log::info!(
            "Session finished: {}/{} runs completed",
            report.completed_count(),
            report.len()
        );
        report
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if self.runs.is_empty() {
            return;
        }
        self.cancel.cancel();
        for (_, thread) in self.runs.drain(..) {
            let _ = thread.join();
        }
    }
}

/// Body of one run thread
fn run_algorithm(
    algorithm: Algorithm,
    mut data: Vec<u32>,
    pacing: Pacing,
    listener: Arc<dyn ProgressListener>,
    cancel: CancelToken,
    counter: Arc<CompletionCounter>,
) -> RunOutcome {
    let mut ctx = RunContext::new(algorithm, listener.as_ref(), &cancel, pacing);

    if algorithm.sort(&mut data, &mut ctx).is_err() {
        log::debug!("{} interrupted after {} steps", algorithm, ctx.steps());
        return RunOutcome::Interrupted;
    }

    let steps = ctx.steps();
    let elapsed_ms = ctx.finish(data);
    log::debug!("{} completed: {} steps in {}ms", algorithm, steps, elapsed_ms);

    if counter.arrive() {
        log::info!("All {} algorithms completed", counter.total());
        listener.on_all_completed();
    }

    RunOutcome::Completed { elapsed_ms, steps }
}
