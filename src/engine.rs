//! Engine facade held by a presentation layer.

use std::sync::Arc;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::{Config, ConfigError};
use crate::dataset::Dataset;
use crate::session::{
    CompletionCounter, Pacing, ProgressListener, Session, SessionError, SessionHandle,
};

/// Owns the current dataset and starts sessions over it
pub struct SortingEngine {
    config: Config,
    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
    dataset: Dataset,
    // Completion of the last session started over `dataset`
    last_session: Option<Arc<CompletionCounter>>,
}

impl SortingEngine {
    /// Create an engine with the configured (or a random) seed
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let seed = config
            .dataset
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        Self::new_with_seed(config, seed)
    }

    /// Create an engine with a specific seed for reproducibility
    pub fn new_with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dataset = Dataset::generate(config.dataset.size, config.dataset.max_value, &mut rng);

        Ok(Self {
            config,
            rng,
            seed,
            dataset,
            last_session: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn dataset_size(&self) -> usize {
        self.config.dataset.size
    }

    /// Change the dataset size and draw a new dataset of that size
    pub fn set_dataset_size(&mut self, size: usize) -> Result<(), ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidDatasetSize(size));
        }
        self.config.dataset.size = size;
        self.generate_new_dataset();
        Ok(())
    }

    /// Draw a fresh dataset of the configured size
    pub fn generate_new_dataset(&mut self) {
        self.dataset = Dataset::generate(
            self.config.dataset.size,
            self.config.dataset.max_value,
            &mut self.rng,
        );
        self.last_session = None;
        log::debug!("New dataset: {:?}", &*self.dataset);
    }

    /// Copy of the current dataset
    pub fn original_data(&self) -> Vec<u32> {
        self.dataset.to_vec()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Per-step delay for the current dataset
    pub fn pacing(&self) -> Pacing {
        Pacing::for_size(&self.config.pacing, self.dataset.len())
    }

    /// Whether every run of the last session over this dataset completed
    pub fn is_sorted_state(&self) -> bool {
        self.last_session
            .as_ref()
            .is_some_and(|completion| completion.is_complete())
    }

    /// Start a session over the current dataset.
    ///
    /// Once a session has sorted the current dataset a new one is drawn first.
    /// A cancelled or unfinished session keeps the dataset for the next start.
    pub fn start_sorting<L>(&mut self, listener: L) -> Result<SessionHandle, SessionError>
    where
        L: ProgressListener + 'static,
    {
        if self.is_sorted_state() {
            self.generate_new_dataset();
        }
        let handle = Session::start(&self.dataset, self.pacing(), listener)?;
        self.last_session = Some(handle.completion());
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::EventRecorder;
    use std::sync::Arc;
    use std::time::Duration;

    fn instant_config(size: usize) -> Config {
        let mut config = Config::default();
        config.dataset.size = size;
        config.pacing.unit_micros = 0;
        config
    }

    #[test]
    fn test_seeded_engines_agree() {
        let a = SortingEngine::new_with_seed(Config::default(), 42).unwrap();
        let b = SortingEngine::new_with_seed(Config::default(), 42).unwrap();
        assert_eq!(a.original_data(), b.original_data());
        assert_eq!(a.original_data().len(), 12);
    }

    #[test]
    fn test_invalid_size_rejected() {
        let mut engine = SortingEngine::new_with_seed(Config::default(), 1).unwrap();
        assert!(matches!(
            engine.set_dataset_size(0),
            Err(ConfigError::InvalidDatasetSize(0))
        ));
        assert!(SortingEngine::new(instant_config(0)).is_err());
    }

    #[test]
    fn test_size_change_draws_matching_dataset() {
        let mut engine = SortingEngine::new_with_seed(Config::default(), 3).unwrap();
        let before = engine.original_data();

        engine.set_dataset_size(50).unwrap();
        assert_eq!(engine.original_data().len(), 50);
        assert_eq!(engine.pacing().delay(), Duration::from_millis(48));

        engine.set_dataset_size(12).unwrap();
        assert_eq!(engine.original_data().len(), 12);
        assert_ne!(engine.original_data(), before);
        assert_eq!(engine.pacing().delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_restart_draws_new_dataset() {
        let mut engine = SortingEngine::new_with_seed(instant_config(20), 5).unwrap();
        let first = engine.original_data();

        let recorder = Arc::new(EventRecorder::new());
        let report = engine.start_sorting(recorder.clone()).unwrap().join();
        assert!(report.all_completed());
        assert_eq!(engine.original_data(), first);

        assert!(engine.is_sorted_state());

        engine.start_sorting(Arc::new(EventRecorder::new())).unwrap().join();
        assert_ne!(engine.original_data(), first);
    }

    #[test]
    fn test_cancelled_session_keeps_dataset() {
        let mut config = Config::default();
        config.dataset.size = 20;
        config.pacing.unit_micros = 10_000;
        let mut engine = SortingEngine::new_with_seed(config, 8).unwrap();
        let first = engine.original_data();

        let handle = engine.start_sorting(Arc::new(EventRecorder::new())).unwrap();
        handle.cancel();
        let report = handle.join();
        assert_eq!(report.completed_count(), 0);
        assert!(!engine.is_sorted_state());

        let handle = engine.start_sorting(Arc::new(EventRecorder::new())).unwrap();
        assert_eq!(engine.original_data(), first);
        handle.cancel();
        handle.join();
    }
}
