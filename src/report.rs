//! Per-session results and finish-time ranking.

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Terminal event emitted
    Completed { elapsed_ms: u64, steps: u64 },
    /// Stopped by cancellation (or a panic) before finishing
    Interrupted,
}

impl RunOutcome {
    pub fn elapsed_ms(&self) -> Option<u64> {
        match self {
            RunOutcome::Completed { elapsed_ms, .. } => Some(*elapsed_ms),
            RunOutcome::Interrupted => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }
}

/// Outcome of every run in a session, in start order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionReport {
    outcomes: Vec<(Algorithm, RunOutcome)>,
}

impl SessionReport {
    pub fn new(outcomes: Vec<(Algorithm, RunOutcome)>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[(Algorithm, RunOutcome)] {
        &self.outcomes
    }

    pub fn outcome(&self, algorithm: Algorithm) -> Option<RunOutcome> {
        self.outcomes
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, outcome)| *outcome)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_completed()).count()
    }

    pub fn all_completed(&self) -> bool {
        !self.outcomes.is_empty() && self.completed_count() == self.outcomes.len()
    }

    /// Completed runs ordered by final elapsed time (ties keep start order)
    pub fn ranking(&self) -> Vec<(Algorithm, u64)> {
        let mut ranked: Vec<(Algorithm, u64)> = self
            .outcomes
            .iter()
            .filter_map(|(algorithm, outcome)| outcome.elapsed_ms().map(|ms| (*algorithm, ms)))
            .collect();
        ranked.sort_by_key(|&(_, ms)| ms);
        ranked
    }
}

impl std::fmt::Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Session Results ===")?;
        for (rank, (algorithm, ms)) in self.ranking().iter().enumerate() {
            let steps = match self.outcome(*algorithm) {
                Some(RunOutcome::Completed { steps, .. }) => steps,
                _ => 0,
            };
            writeln!(
                f,
                "{:>2}. {:<22} {:>7}ms {:>6} steps",
                rank + 1,
                algorithm.name(),
                ms,
                steps
            )?;
        }
        for (algorithm, outcome) in &self.outcomes {
            if !outcome.is_completed() {
                writeln!(f, "    {:<22} interrupted", algorithm.name())?;
            }
        }
        Ok(())
    }
}
