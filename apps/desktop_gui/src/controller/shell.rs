//! Presentation shell state: trigger counter, background color, and the
//! adapter whose state decides which panel is visible.

use crossbeam_channel::Sender;
use rand::Rng;
use shared::domain::{FactTrigger, RequestState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::adapter::FactAdapter;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::theme::Hsl;

/// The three mutually exclusive things the card can show, plus the blank
/// card before the first fetch goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Empty,
    Loading,
    Error(String),
    Fact(String),
}

#[derive(Debug)]
pub struct ShellState {
    trigger: FactTrigger,
    background: Hsl,
    adapter: FactAdapter,
    status: Option<&'static str>,
}

impl ShellState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            trigger: FactTrigger::default(),
            background: Hsl::random_background(rng),
            adapter: FactAdapter::new(),
            status: None,
        }
    }

    pub fn trigger(&self) -> FactTrigger {
        self.trigger
    }

    pub fn background(&self) -> Hsl {
        self.background
    }

    /// Only set when the backend worker has failed; `None` otherwise.
    pub fn status(&self) -> Option<&str> {
        self.status
    }

    pub fn refresh_enabled(&self) -> bool {
        !self.adapter.is_loading()
    }

    /// Advances the trigger, resamples the background, and asks the backend
    /// for a fact. Called once on mount and then on every button press.
    pub fn refresh<R: Rng + ?Sized>(&mut self, cmd_tx: &Sender<BackendCommand>, rng: &mut R) {
        self.trigger = self.trigger.next();
        self.background = Hsl::random_background(rng);
        self.adapter.begin(self.trigger);
        tracing::debug!(trigger = self.trigger.0, background = %self.background, "refresh");

        let cmd = BackendCommand::FetchFact {
            trigger: self.trigger,
        };
        if let Err(err) = dispatch_backend_command(cmd_tx, cmd) {
            self.status = Some(err.status_hint());
            self.adapter.fail_pending(&err);
        }
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                tracing::debug!("{message}");
            }
            UiEvent::Error(err) => {
                tracing::error!(context = ?err.context(), "{}", err.message());
                self.status = Some(err.status_hint());
                self.adapter.fail_pending(&err);
            }
            UiEvent::FactLoaded { trigger, fact } => {
                self.adapter.resolve(trigger, Ok(fact));
            }
            UiEvent::FactFailed { trigger, error } => {
                self.adapter.resolve(trigger, Err(error));
            }
        }
    }

    pub fn panel(&self) -> Panel {
        match self.adapter.state() {
            RequestState::Idle => Panel::Empty,
            RequestState::Loading => Panel::Loading,
            RequestState::Error(message) => Panel::Error(message.clone()),
            RequestState::Success(fact) => Panel::Fact(fact.text().to_string()),
        }
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
