//! Terminal session orchestration
//!
//! Wires the interpreter, history log, session controller, and telemetry
//! sampler into one owned session. A submitted line is evaluated, recorded
//! together with its computed result, and any side-effect descriptor is
//! applied exactly once — redrawing the transcript reads stored results and
//! never re-runs a command.

use std::sync::Arc;

use crate::config::Config;
use crate::history::HistoryLog;
use crate::interpreter::{CommandInterpreter, SideEffect};
use crate::models::{CommandResult, HistoryEntry};
use crate::session::{Navigator, SessionController, WindowHost};
use crate::storage::{self, keys, SharedStore};
use crate::telemetry::{shared_window, SharedTelemetry, TelemetrySampler, UsageProbe};

/// One line of the rendered transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// Display name of the logged-in account at session start
    pub user: Option<String>,
    /// The command line as submitted
    pub command: String,
    /// Result computed at submission time
    pub result: CommandResult,
}

impl TranscriptLine {
    /// Render as `user: command` followed by the result text
    pub fn render(&self) -> String {
        format!(
            "{}: {}\n{}",
            self.user.as_deref().unwrap_or("guest"),
            self.command,
            self.result.text()
        )
    }
}

/// A live terminal session
pub struct TerminalSession {
    interpreter: CommandInterpreter,
    history: HistoryLog,
    controller: SessionController,
    telemetry: SharedTelemetry,
    sampler: Option<TelemetrySampler>,
    user: Option<String>,
    open: bool,
}

impl TerminalSession {
    /// Open a session: restore history, read the logged-in identity, and
    /// start the telemetry sampler. Must be called within a tokio runtime.
    pub fn open(
        config: &Config,
        store: SharedStore,
        navigator: Box<dyn Navigator>,
        window: Box<dyn WindowHost>,
        probe: Box<dyn UsageProbe>,
    ) -> Self {
        let telemetry = shared_window(config.telemetry.window_capacity);
        let interpreter = CommandInterpreter::new(&config.terminal, Arc::clone(&telemetry));
        let history = HistoryLog::open(Arc::clone(&store));
        let user = storage::lock(&store).get(keys::USER);
        let controller = SessionController::new(store, navigator, window);
        let sampler = TelemetrySampler::spawn(
            probe,
            Arc::clone(&telemetry),
            config.telemetry.sample_period(),
        );
        info!(
            "terminal session opened (user: {:?}, {} restored entries)",
            user,
            history.len()
        );
        Self {
            interpreter,
            history,
            controller,
            telemetry,
            sampler: Some(sampler),
            user,
            open: true,
        }
    }

    /// Submit one line.
    ///
    /// Blank input is ignored and never recorded. Non-blank input is
    /// evaluated, appended to the history with its computed result, and any
    /// requested side effect is applied once.
    pub fn submit(&mut self, line: &str) -> Option<CommandResult> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let evaluation = self.interpreter.evaluate(line);
        debug!("evaluated {:?} -> {:?}", line, evaluation.result);
        self.history
            .append(HistoryEntry::new(line, evaluation.result.clone()));
        if let Some(effect) = evaluation.effect {
            self.apply(effect);
        }
        Some(evaluation.result)
    }

    fn apply(&mut self, effect: SideEffect) {
        match effect {
            SideEffect::ClearHistory => self.history.clear(),
            SideEffect::Logout => self.controller.logout(),
            SideEffect::RemoveUser => {
                self.controller.remove_user_data(&mut self.history);
                // Teardown closes the hosting window, so the session is over.
                self.shutdown_sampler();
                self.open = false;
            }
            SideEffect::InstallUpdate => {
                let os_version = self.interpreter.os_version().to_string();
                self.controller.install_update(&os_version);
            }
        }
    }

    /// Pure transcript view: one line per stored entry with its computed
    /// result. Nothing is re-evaluated.
    pub fn transcript(&self) -> Vec<TranscriptLine> {
        self.history
            .all()
            .iter()
            .map(|entry| TranscriptLine {
                user: self.user.clone(),
                command: entry.command.clone(),
                result: entry.result.clone(),
            })
            .collect()
    }

    /// The history log
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Shared telemetry handle fed by the sampler
    pub fn telemetry(&self) -> SharedTelemetry {
        Arc::clone(&self.telemetry)
    }

    /// Check whether the session is still open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Host onClose intent: stop the sampler and mark the session closed.
    /// Idempotent.
    pub fn close(&mut self) {
        if self.open {
            info!("terminal session closed");
        }
        self.shutdown_sampler();
        self.open = false;
    }

    fn shutdown_sampler(&mut self) {
        if let Some(sampler) = self.sampler.take() {
            sampler.stop();
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.shutdown_sampler();
    }
}
