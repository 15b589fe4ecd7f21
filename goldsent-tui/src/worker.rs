//! Background worker thread — acquisition and the metrics pipeline run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. A slow feed
//! request never blocks rendering.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use goldsent_core::data::{DataProvider, FeedProvider, SampleProvider, SpreadsheetProvider};
use goldsent_core::{analyze, Analysis, DashboardConfig, DashboardError, ErrorCategory};

/// Which source to load from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Sample,
    Feed,
    Spreadsheet(PathBuf),
}

impl SourceKind {
    pub fn label(&self) -> String {
        match self {
            SourceKind::Sample => "sample".to_string(),
            SourceKind::Feed => "feed".to_string(),
            SourceKind::Spreadsheet(path) => format!("file {}", path.display()),
        }
    }
}

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Load {
        source: SourceKind,
        config: Box<DashboardConfig>,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    Loaded {
        source: SourceKind,
        analysis: Box<Analysis>,
    },
    Failed {
        category: ErrorCategory,
        message: String,
        context: String,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("goldsent-worker".into())
        .spawn(move || worker_loop(rx, tx))
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Load { source, config }) => {
                let resp = handle_load(source, &config);
                if tx.send(resp).is_err() {
                    break;
                }
            }
        }
    }
}

/// Run one load synchronously. Exposed for tests.
pub fn handle_load(source: SourceKind, config: &DashboardConfig) -> WorkerResponse {
    match run_pipeline(&source, config) {
        Ok(analysis) => WorkerResponse::Loaded {
            source,
            analysis: Box::new(analysis),
        },
        Err(err) => {
            log::warn!("load from {} failed: {err}", source.label());
            WorkerResponse::Failed {
                category: err.category(),
                message: err.user_message(),
                context: source.label(),
            }
        }
    }
}

fn run_pipeline(source: &SourceKind, config: &DashboardConfig) -> Result<Analysis, DashboardError> {
    let provider: Box<dyn DataProvider> = match source {
        SourceKind::Sample => Box::new(SampleProvider),
        SourceKind::Feed => Box::new(FeedProvider::new(config.feed_settings())?),
        SourceKind::Spreadsheet(path) => Box::new(SpreadsheetProvider::new(path)),
    };
    analyze(provider.as_ref(), config.record_order())
}
