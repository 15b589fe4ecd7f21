//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use goldsent_core::{Analysis, DashboardConfig, ErrorCategory};

use crate::worker::{SourceKind, WorkerCommand, WorkerResponse};

const MAX_ERROR_HISTORY: usize = 50;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Chart,
    Table,
    Commentary,
    Help,
}

impl Panel {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            Panel::Chart => 0,
            Panel::Table => 1,
            Panel::Commentary => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Chart),
            1 => Some(Panel::Table),
            2 => Some(Panel::Commentary),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Chart => "Chart",
            Panel::Table => "Signals",
            Panel::Commentary => "Commentary",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Chart)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(Panel::Chart)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    ErrorHistory,
}

pub struct AppState {
    pub running: bool,
    pub active_panel: Panel,
    pub overlay: Overlay,

    pub config: DashboardConfig,
    /// Spreadsheet path given on the command line, if any.
    pub upload: Option<std::path::PathBuf>,
    pub source: SourceKind,
    pub loading: bool,

    /// Last successful analysis. Kept on screen when a reload fails.
    pub analysis: Option<Analysis>,
    pub table_scroll: usize,
    pub commentary_scroll: usize,

    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,

    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        config: DashboardConfig,
        upload: Option<std::path::PathBuf>,
    ) -> Self {
        let source = match &upload {
            Some(path) => SourceKind::Spreadsheet(path.clone()),
            None => SourceKind::Sample,
        };
        Self {
            running: true,
            active_panel: Panel::Chart,
            overlay: Overlay::None,
            config,
            upload,
            source,
            loading: false,
            analysis: None,
            table_scroll: 0,
            commentary_scroll: 0,
            status_message: None,
            error_history: VecDeque::new(),
            error_scroll: 0,
            worker_tx,
            worker_rx,
        }
    }

    /// Ask the worker to (re)load `source`.
    pub fn request_load(&mut self, source: SourceKind) {
        if self.loading {
            self.set_warning("A load is already in progress");
            return;
        }
        let cmd = WorkerCommand::Load {
            source: source.clone(),
            config: Box::new(self.config.clone()),
        };
        if self.worker_tx.send(cmd).is_err() {
            self.push_error(
                ErrorCategory::Other,
                "Worker thread is not running".into(),
                source.label(),
            );
            return;
        }
        self.set_status(format!("Loading {}...", source.label()));
        self.source = source;
        self.loading = true;
    }

    pub fn reload(&mut self) {
        self.request_load(self.source.clone());
    }

    pub fn handle_response(&mut self, resp: WorkerResponse) {
        self.loading = false;
        match resp {
            WorkerResponse::Loaded { source, analysis } => {
                self.set_status(format!(
                    "Loaded {} rows from {}",
                    analysis.rows.len(),
                    source.label()
                ));
                self.analysis = Some(*analysis);
                self.table_scroll = 0;
                self.commentary_scroll = 0;
            }
            WorkerResponse::Failed {
                category,
                message,
                context,
            } => self.push_error(category, message, context),
        }
    }

    pub fn row_count(&self) -> usize {
        self.analysis.as_ref().map_or(0, |a| a.rows.len())
    }

    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > MAX_ERROR_HISTORY {
            self.error_history.pop_back();
        }
        self.status_message = Some((
            format!("[{}] {message}", category.label()),
            StatusLevel::Error,
        ));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
