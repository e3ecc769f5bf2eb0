//! Integration tests for SORTRACE

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::time::{Duration, Instant};

use sortrace::recorder::EventRecorder;
use sortrace::session::{Pacing, Session, SessionEvent, StepEvent};
use sortrace::{Algorithm, Config, Dataset, ProgressListener, SortingEngine};

fn run_instant(values: Vec<u32>) -> Arc<EventRecorder> {
    let recorder = Arc::new(EventRecorder::new());
    let handle = Session::start(&Dataset::new(values), Pacing::instant(), recorder.clone())
        .expect("session should start");
    handle.join();
    recorder
}

#[test]
fn test_every_run_ends_sorted() {
    let mut config = Config::default();
    config.dataset.size = 100;
    config.pacing.unit_micros = 0;

    let engine = SortingEngine::new_with_seed(config, 2024).unwrap();
    let mut expected = engine.original_data();
    expected.sort();

    let recorder = run_instant(engine.original_data());
    for algorithm in Algorithm::ALL {
        let events = recorder.events_for(algorithm);
        let last = events.last().expect("every run emits");
        assert_eq!(last.snapshot, expected, "{} final snapshot", algorithm);
    }
}

#[test]
fn test_single_terminal_event_is_last() {
    let recorder = run_instant(vec![12, 40, 7, 7, 1, 33, 19, 2, 25, 8, 40, 3]);

    for algorithm in Algorithm::ALL {
        let events = recorder.events_for(algorithm);
        let terminal: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.completed)
            .map(|(i, _)| i)
            .collect();

        assert_eq!(terminal, vec![events.len() - 1], "{}", algorithm);
        assert!(events.last().unwrap().active.is_empty());
        assert!(events[..events.len() - 1].iter().all(|e| !e.active.is_empty()));
    }
}

#[test]
fn test_elapsed_never_decreases() {
    let recorder = Arc::new(EventRecorder::new());
    let dataset = Dataset::new(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    Session::start(&dataset, Pacing::new(Duration::from_micros(300)), recorder.clone())
        .unwrap()
        .join();

    for algorithm in Algorithm::ALL {
        let events = recorder.events_for(algorithm);
        assert_eq!(events[0].elapsed_ms, 0, "{} clock anchors on first step", algorithm);
        assert!(events.windows(2).all(|w| w[0].elapsed_ms <= w[1].elapsed_ms));
    }
}

/// Records the causal position of `on_all_completed` relative to terminal events
#[derive(Default)]
struct CompletionOrder {
    terminals: AtomicUsize,
    fired_after: Mutex<Vec<usize>>,
}

impl ProgressListener for CompletionOrder {
    fn on_progress(&self, event: StepEvent) {
        if event.completed {
            self.terminals.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn on_all_completed(&self) {
        let seen = self.terminals.load(Ordering::SeqCst);
        self.fired_after.lock().unwrap().push(seen);
    }
}

#[test]
fn test_all_completed_fires_once_after_ninth_terminal() {
    for _ in 0..20 {
        let order = Arc::new(CompletionOrder::default());
        Session::start(&Dataset::new(vec![4, 2, 3, 1]), Pacing::instant(), order.clone())
            .unwrap()
            .join();

        assert_eq!(*order.fired_after.lock().unwrap(), vec![Algorithm::ALL.len()]);
    }
}

#[test]
fn test_channel_stream_ends_with_all_completed() {
    let (tx, rx) = mpsc::channel();
    let handle = Session::start(&Dataset::new(vec![3, 1, 2]), Pacing::instant(), tx).unwrap();
    let report = handle.join();

    let events: Vec<SessionEvent> = rx.iter().collect();
    let all_completed = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::AllCompleted))
        .count();
    assert_eq!(all_completed, 1);
    assert_eq!(events.last(), Some(&SessionEvent::AllCompleted));
    assert!(report.all_completed());
    assert_eq!(report.ranking().len(), Algorithm::ALL.len());
}

#[test]
fn test_empty_dataset_completes_immediately() {
    let recorder = run_instant(Vec::new());

    for algorithm in Algorithm::ALL {
        let events = recorder.events_for(algorithm);
        assert_eq!(events.len(), 1, "{}", algorithm);
        assert!(events[0].completed);
        assert!(events[0].snapshot.is_empty());
        assert_eq!(events[0].elapsed_ms, 0);
    }
    assert_eq!(recorder.all_completed_count(), 1);
}

#[test]
fn test_counting_sort_event_counts() {
    let recorder = run_instant(vec![5, 3, 5, 1, 3]);
    let events = recorder.events_for(Algorithm::Counting);

    let steps: Vec<&StepEvent> = events.iter().filter(|e| !e.completed).collect();
    let (counts, writes) = steps.split_at(5);
    assert_eq!(counts.len(), 5);
    assert_eq!(writes.len(), 5);
    assert!(counts.iter().all(|e| e.snapshot == vec![5, 3, 5, 1, 3]));
    assert_eq!(events.last().unwrap().snapshot, vec![1, 3, 3, 5, 5]);
}

#[test]
fn test_quick_sort_partition_trace() {
    let recorder = run_instant(vec![3, 1, 2]);
    let events = recorder.events_for(Algorithm::Quick);

    let actives: Vec<Vec<usize>> = events.iter().map(|e| e.active.clone()).collect();
    assert_eq!(
        actives,
        vec![vec![0, 2], vec![1, 2], vec![0, 1], vec![1, 2], vec![]]
    );
    assert_eq!(events.last().unwrap().snapshot, vec![1, 2, 3]);
}

#[test]
fn test_bubble_sorted_input_one_pass() {
    let input: Vec<u32> = (1..=12).collect();
    let recorder = run_instant(input.clone());
    let events = recorder.events_for(Algorithm::Bubble);

    // n-1 comparisons without swaps, then the terminal event
    assert_eq!(events.len(), input.len());
    assert!(events.iter().all(|e| e.snapshot == input));
}

#[test]
fn test_cancelled_session_never_completes() {
    let recorder = Arc::new(EventRecorder::new());
    let dataset = Dataset::new((1..=40).rev().collect());

    let handle = Session::start(
        &dataset,
        Pacing::new(Duration::from_millis(40)),
        recorder.clone(),
    )
    .unwrap();
    std::thread::sleep(Duration::from_millis(10));
    handle.cancel();
    let report = handle.join();

    assert_eq!(report.completed_count(), 0);
    assert_eq!(recorder.all_completed_count(), 0);
    assert!(recorder.completed_algorithms().is_empty());
}

#[test]
fn test_dropping_handle_stops_runs() {
    let recorder = Arc::new(EventRecorder::new());
    let dataset = Dataset::new((1..=30).rev().collect());

    let handle = Session::start(
        &dataset,
        Pacing::new(Duration::from_secs(5)),
        recorder.clone(),
    )
    .unwrap();

    let dropped_at = Instant::now();
    drop(handle);

    // every run was parked in a 5s delay; dropping must wake them
    assert!(dropped_at.elapsed() < Duration::from_secs(1));
    assert_eq!(recorder.all_completed_count(), 0);
    assert!(recorder.completed_algorithms().is_empty());
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sortrace.yaml");

    let mut config = Config::default();
    config.dataset.size = 20;
    config.dataset.seed = Some(7);
    config.save(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.dataset.size, 20);
    assert_eq!(loaded.dataset.seed, Some(7));

    let a = SortingEngine::new(loaded.clone()).unwrap();
    let b = SortingEngine::new(loaded).unwrap();
    assert_eq!(a.original_data(), b.original_data());
}
