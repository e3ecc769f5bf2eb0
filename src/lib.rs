//! # SORTRACE
//!
//! Nine classic sorting algorithms racing side by side, one observable step at a time.
//!
//! ## Features
//!
//! - **Concurrent**: every algorithm runs on its own thread over its own copy of the data
//! - **Observable**: each comparison, swap and write is pushed to a [`ProgressListener`]
//! - **Paced**: per-step delay scales with the dataset so sessions take similar time
//! - **Exactly-once completion**: `on_all_completed` fires once, after the last run finishes
//! - **Reproducible**: seeded dataset generation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sortrace::{Config, SortingEngine};
//! use sortrace::recorder::EventRecorder;
//!
//! let mut engine = SortingEngine::new(Config::default()).unwrap();
//! let recorder = Arc::new(EventRecorder::new());
//!
//! let report = engine.start_sorting(recorder.clone()).unwrap().join();
//! println!("{}", report);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use sortrace::Config;
//!
//! let mut config = Config::default();
//! config.dataset.size = 50;
//! config.pacing.unit_micros = 0; // no pacing
//! assert!(config.validate().is_ok());
//! ```

pub mod algorithms;
pub mod board;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod recorder;
pub mod report;
pub mod session;

// Re-export main types
pub use algorithms::Algorithm;
pub use config::Config;
pub use dataset::Dataset;
pub use engine::SortingEngine;
pub use report::{RunOutcome, SessionReport};
pub use session::{ProgressListener, Session, SessionEvent, SessionHandle, StepEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
