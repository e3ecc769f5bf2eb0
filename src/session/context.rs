//! Per-run state threaded through an algorithm's steps.

use std::time::{Duration, Instant};

use crate::algorithms::Algorithm;
use crate::config::PacingConfig;

use super::cancel::{CancelToken, Interrupted};
use super::events::{ProgressListener, StepEvent};

/// Pause inserted after every emitted step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No pause between steps
    pub fn instant() -> Self {
        Self::default()
    }

    /// Delay for a session over `dataset_size` values
    pub fn for_size(config: &PacingConfig, dataset_size: usize) -> Self {
        Self::new(config.step_delay(dataset_size))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Emission state owned by a single run.
///
/// The elapsed-time clock starts on the first emitted event, not when the
/// context is created.
pub struct RunContext<'a> {
    algorithm: Algorithm,
    listener: &'a dyn ProgressListener,
    cancel: &'a CancelToken,
    pacing: Pacing,
    started_at: Option<Instant>,
    steps: u64,
}

impl<'a> RunContext<'a> {
    pub fn new(
        algorithm: Algorithm,
        listener: &'a dyn ProgressListener,
        cancel: &'a CancelToken,
        pacing: Pacing,
    ) -> Self {
        Self {
            algorithm,
            listener,
            cancel,
            pacing,
            started_at: None,
            steps: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of non-terminal events emitted so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Emit one step and wait out the pacing delay.
    pub fn step(&mut self, data: &[u32], active: &[usize]) -> Result<(), Interrupted> {
        if self.cancel.is_cancelled() {
            return Err(Interrupted);
        }

        let elapsed_ms = self.elapsed_ms();
        self.steps += 1;
        log::trace!(
            "[{}] step {} active={:?} t={}ms",
            self.algorithm,
            self.steps,
            active,
            elapsed_ms
        );
        self.listener.on_progress(StepEvent {
            algorithm: self.algorithm,
            snapshot: data.to_vec(),
            active: active.to_vec(),
            elapsed_ms,
            completed: false,
        });

        self.cancel.sleep(self.pacing.delay())
    }

    /// Emit the terminal event. Returns its elapsed time.
    pub fn finish(mut self, data: Vec<u32>) -> u64 {
        let elapsed_ms = self.elapsed_ms();
        self.listener.on_progress(StepEvent {
            algorithm: self.algorithm,
            snapshot: data,
            active: Vec::new(),
            elapsed_ms,
            completed: true,
        });
        elapsed_ms
    }

    fn elapsed_ms(&mut self) -> u64 {
        let started_at = *self.started_at.get_or_insert_with(Instant::now);
        started_at.elapsed().as_millis() as u64
    }
}
