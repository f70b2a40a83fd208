// src/desktop/mod.rs
//! Desktop shell: owns the window state on the UI thread and runs each
//! analysis on a worker thread.
//!
//! Widgets are only touched from [`DesktopShell::handle`], which runs on the
//! thread draining the event channel. Workers report back by sending
//! [`UiEvent::AnalysisComplete`] into that same channel.

pub mod terminal;

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::analyzer;
use crate::errors::AssistantError;
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::providers::ModelClient;

pub const ACTION_LABEL: &str = "Analyze and Fix Code";
pub const BUSY_ACTION_LABEL: &str = "Analyzing...";
pub const STATUS_READY: &str = "Status: Ready.";
pub const STATUS_BUSY: &str = "Status: Contacting Ollama...";
pub const STATUS_SUCCESS: &str = "Status: Analysis Complete.";
pub const STATUS_ERROR: &str = "Status: Ollama Error.";
pub const OUTPUT_PENDING: &str = "Processing request, please wait...";
pub const ERROR_PREFIX: &str = "ERROR: ";
pub const INPUT_ERROR_TITLE: &str = "Input Error";

pub const SAMPLE_CODE: &str = "def calculate(a, b):\n    return a * b\n\nresult = calculate(10, '5')";
pub const SAMPLE_TRACEBACK: &str = "Traceback (most recent call last):\n  File \"script.py\", line 4, in <module>\n    result = calculate(10, '5')\nTypeError: can't multiply sequence by non-int of type 'str'";

/// Colour hint for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Busy,
    Success,
    Error,
}

/// The widgets the shell drives. Implemented by whatever toolkit hosts the window.
pub trait DesktopView {
    fn set_action(&mut self, enabled: bool, label: &str);
    fn set_status(&mut self, text: &str, tone: StatusTone);
    fn set_output(&mut self, text: &str);
    fn show_input_error(&mut self, title: &str, message: &str);
}

/// Everything that reaches the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit { code: String, traceback: String },
    AnalysisComplete(AnalysisResult),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    Submitting,
}

pub struct DesktopShell<C, V> {
    client: Arc<C>,
    model: String,
    view: V,
    state: ShellState,
    events: Sender<UiEvent>,
}

impl<C, V> DesktopShell<C, V>
where
    C: ModelClient + 'static,
    V: DesktopView,
{
    /// `events` must feed the receiver later passed to [`DesktopShell::run`].
    pub fn new(client: Arc<C>, model: impl Into<String>, mut view: V, events: Sender<UiEvent>) -> Self {
        view.set_action(true, ACTION_LABEL);
        view.set_status(STATUS_READY, StatusTone::Neutral);

        Self {
            client,
            model: model.into(),
            view,
            state: ShellState::Idle,
            events,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Drain events until `Close` arrives.
    ///
    /// The shell keeps a sender for its workers, so the channel never
    /// disconnects on its own: whoever feeds input must send `Close`.
    pub fn run(mut self, events: Receiver<UiEvent>) -> V {
        for event in events {
            if self.handle(event).is_break() {
                break;
            }
        }
        self.view
    }

    pub fn handle(&mut self, event: UiEvent) -> ControlFlow<()> {
        match event {
            UiEvent::Submit { code, traceback } => self.submit(&code, &traceback),
            UiEvent::AnalysisComplete(result) => self.complete(result),
            UiEvent::Close => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn submit(&mut self, code: &str, traceback: &str) {
        // The action control is disabled while a call is in flight.
        if self.state == ShellState::Submitting {
            log::debug!("Ignoring submit while an analysis is running");
            return;
        }

        let request = match AnalysisRequest::new(code, traceback) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("⚠️  Rejected submit: {}", e);
                self.view.show_input_error(INPUT_ERROR_TITLE, &e.to_string());
                return;
            }
        };

        self.state = ShellState::Submitting;
        self.view.set_action(false, BUSY_ACTION_LABEL);
        self.view.set_status(STATUS_BUSY, StatusTone::Busy);
        self.view.set_output(OUTPUT_PENDING);

        if let Err(e) = self.spawn_worker(request) {
            log::error!("❌ Could not start analysis worker: {}", e);
            self.complete(AnalysisResult::Failure(e.to_string()));
        }
    }

    fn spawn_worker(&self, request: AnalysisRequest) -> Result<(), AssistantError> {
        let client = Arc::clone(&self.client);
        let model = self.model.clone();
        let events = self.events.clone();

        thread::Builder::new()
            .name("analysis-worker".to_string())
            .spawn(move || {
                let result = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime.block_on(analyzer::run_analysis(&*client, &model, &request)),
                    Err(e) => AnalysisResult::Failure(AssistantError::Io(e).to_string()),
                };
                if events.send(UiEvent::AnalysisComplete(result)).is_err() {
                    log::warn!("Window closed before the analysis finished");
                }
            })?;
        Ok(())
    }

    fn complete(&mut self, result: AnalysisResult) {
        if self.state != ShellState::Submitting {
            log::debug!("Dropping stray analysis result");
            return;
        }

        self.state = ShellState::Idle;
        self.view.set_action(true, ACTION_LABEL);
        match result {
            AnalysisResult::Success(report) => {
                self.view.set_output(&report);
                self.view.set_status(STATUS_SUCCESS, StatusTone::Success);
            }
            AnalysisResult::Failure(message) => {
                self.view.set_output(&format!("{}{}", ERROR_PREFIX, message));
                self.view.set_status(STATUS_ERROR, StatusTone::Error);
            }
        }
    }
}
