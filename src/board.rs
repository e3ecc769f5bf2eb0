//! Consumer-side view of a session, keyed by algorithm.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::session::StepEvent;

/// Display status of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunStatus {
    /// Dataset loaded, session not started
    #[default]
    Ready,
    /// Session started, no event yet
    Queued,
    /// At least one step received
    Running,
    /// Terminal event received
    Completed,
}

impl RunStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Ready => "ready",
            RunStatus::Queued => "queued",
            RunStatus::Running => "running",
            RunStatus::Completed => "done",
        }
    }
}

/// Latest known state of one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Panel {
    pub status: RunStatus,
    pub values: Vec<u32>,
    pub active: Vec<usize>,
    pub elapsed_ms: u64,
    pub steps: u64,
}

/// Panels for every algorithm plus final times of finished runs
#[derive(Debug, Clone, Default)]
pub struct ProgressBoard {
    panels: BTreeMap<Algorithm, Panel>,
    final_times: BTreeMap<Algorithm, u64>,
    all_completed: bool,
}

impl ProgressBoard {
    /// Board showing `values` in every panel
    pub fn new(values: &[u32]) -> Self {
        let mut board = Self::default();
        board.load(values);
        board
    }

    /// Reset every panel to `values` (new dataset)
    pub fn load(&mut self, values: &[u32]) {
        self.panels = Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let panel = Panel {
                    values: values.to_vec(),
                    ..Panel::default()
                };
                (algorithm, panel)
            })
            .collect();
        self.final_times.clear();
        self.all_completed = false;
    }

    /// Mark every panel as waiting for its first step
    pub fn start(&mut self) {
        for panel in self.panels.values_mut() {
            panel.status = RunStatus::Queued;
            panel.elapsed_ms = 0;
            panel.steps = 0;
        }
        self.final_times.clear();
        self.all_completed = false;
    }

    /// Apply one event; returns true when it completed its run
    pub fn apply(&mut self, event: StepEvent) -> bool {
        let panel = self.panels.entry(event.algorithm).or_default();
        panel.values = event.snapshot;
        panel.active = event.active;
        panel.elapsed_ms = event.elapsed_ms;

        if event.completed {
            panel.status = RunStatus::Completed;
            self.final_times.insert(event.algorithm, event.elapsed_ms);
            true
        } else {
            panel.status = RunStatus::Running;
            panel.steps += 1;
            false
        }
    }

    pub fn mark_all_completed(&mut self) {
        self.all_completed = true;
    }

    pub fn is_all_completed(&self) -> bool {
        self.all_completed
    }

    pub fn panel(&self, algorithm: Algorithm) -> Option<&Panel> {
        self.panels.get(&algorithm)
    }

    /// Finished runs by final time, fastest first
    pub fn standings(&self) -> Vec<(Algorithm, u64)> {
        let mut standings: Vec<_> = self.final_times.iter().map(|(a, ms)| (*a, *ms)).collect();
        standings.sort_by_key(|&(_, ms)| ms);
        standings
    }

    /// One status line per algorithm
    pub fn render(&self) -> String {
        self.panels
            .iter()
            .map(|(algorithm, panel)| {
                format!(
                    "{:<22} {:<8} {:>6} steps {:>7}ms",
                    algorithm.name(),
                    panel.status.label(),
                    panel.steps,
                    panel.elapsed_ms
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
