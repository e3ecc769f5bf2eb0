//! Cancellation shared by the runs of a session.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::Duration;

use thiserror::Error;

/// A run stopped before finishing because its session was cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("run interrupted by cancellation")]
pub struct Interrupted;

/// Cloneable flag that also wakes runs sleeping through their pacing delay
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake every sleeper
    pub fn cancel(&self) {
        let (_, condvar) = &*self.inner;
        *self.flag() = true;
        condvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.flag()
    }

    /// Sleep for `duration` unless cancelled first.
    pub fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        let (_, condvar) = &*self.inner;
        let guard = self.flag();
        if duration.is_zero() {
            return if *guard { Err(Interrupted) } else { Ok(()) };
        }

        let (guard, _) = condvar
            .wait_timeout_while(guard, duration, |cancelled| !*cancelled)
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *guard {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }

    fn flag(&self) -> MutexGuard<'_, bool> {
        // a panicking run must not wedge the others
        self.inner
            .0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
