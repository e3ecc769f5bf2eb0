//! SORTRACE - CLI Entry Point
//!
//! Races nine sorting algorithms in the terminal.

use clap::{Parser, Subcommand};
use sortrace::board::ProgressBoard;
use sortrace::recorder::EventRecorder;
use sortrace::{Algorithm, Config, ProgressListener, SessionEvent, SortingEngine, StepEvent};
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "sortrace")]
#[command(version)]
#[command(about = "Nine sorting algorithms racing side by side")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Race all algorithms over a fresh dataset
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "sortrace.yaml")]
        config: PathBuf,

        /// Number of values (12, 20, 50 or 100 are the usual presets)
        #[arg(short, long)]
        size: Option<usize>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Write every step event to this JSON file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Disable pacing between steps
        #[arg(long)]
        instant: bool,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "sortrace.yaml")]
        output: PathBuf,
    },

    /// List the algorithms
    List,
}

/// Forwards events to the terminal loop and, optionally, to a recorder
struct CliListener {
    tx: Sender<SessionEvent>,
    recorder: Option<Arc<EventRecorder>>,
}

impl ProgressListener for CliListener {
    fn on_progress(&self, event: StepEvent) {
        if let Some(recorder) = &self.recorder {
            recorder.on_progress(event.clone());
        }
        self.tx.on_progress(event);
    }

    fn on_all_completed(&self) {
        if let Some(recorder) = &self.recorder {
            recorder.on_all_completed();
        }
        self.tx.on_all_completed();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            size,
            seed,
            export,
            instant,
        } => run_session(config, size, seed, export, instant),

        Commands::Init { output } => generate_config(output),

        Commands::List => list_algorithms(),
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run_session(
    config_path: PathBuf,
    size: Option<usize>,
    seed: Option<u64>,
    export: Option<PathBuf>,
    instant: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let (mut config, loaded) = if config_path.exists() {
        (Config::from_file(&config_path)?, true)
    } else {
        (Config::default(), false)
    };
    init_logging(&config.logging.log_level);
    if loaded {
        log::info!("Loaded config from: {:?}", config_path);
    } else {
        log::info!("Using default configuration");
    }

    if let Some(size) = size {
        config.dataset.size = size;
    }
    if seed.is_some() {
        config.dataset.seed = seed;
    }
    if instant {
        config.pacing.unit_micros = 0;
    }

    let mut engine = SortingEngine::new(config)?;
    let mut board = ProgressBoard::new(&engine.original_data());

    println!("Starting session");
    println!("  Values: {:?}", engine.original_data());
    println!("  Seed: {}", engine.seed());
    println!("  Step delay: {:?}", engine.pacing().delay());
    println!();

    let recorder = export.as_ref().map(|_| Arc::new(EventRecorder::new()));
    let (tx, rx) = mpsc::channel();
    let listener = CliListener {
        tx,
        recorder: recorder.clone(),
    };

    board.start();
    let handle = engine.start_sorting(listener)?;

    for event in rx {
        match event {
            SessionEvent::Progress(step) => {
                let algorithm = step.algorithm;
                if board.apply(step) {
                    if let Some(panel) = board.panel(algorithm) {
                        println!(
                            "  {:<22} done in {:>6}ms ({} steps)",
                            algorithm.name(),
                            panel.elapsed_ms,
                            panel.steps
                        );
                    }
                }
            }
            SessionEvent::AllCompleted => {
                board.mark_all_completed();
                break;
            }
        }
    }

    let report = handle.join();
    println!();
    println!("{}", report);
    log::debug!("Final board:\n{}", board.render());

    if let (Some(path), Some(recorder)) = (export, recorder) {
        recorder.export_json(&path)?;
        println!("Events: {:?} ({} events)", path, recorder.total_events());
    }

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

fn list_algorithms() -> Result<(), Box<dyn std::error::Error>> {
    for algorithm in Algorithm::ALL {
        println!("{:<18} {}", algorithm.slug(), algorithm.description());
    }
    Ok(())
}
