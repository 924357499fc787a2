//! Fact source adapter state: which trigger is outstanding and what the UI
//! should show for it.

use shared::{
    domain::{Fact, FactTrigger, RequestState},
    error::{FetchError, FETCH_FAILED_MESSAGE},
};

use crate::controller::events::UiError;

#[derive(Debug, Default)]
pub struct FactAdapter {
    state: RequestState,
    current: Option<FactTrigger>,
}

impl FactAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// A new trigger value was observed; a fetch for it is about to go out.
    pub fn begin(&mut self, trigger: FactTrigger) {
        self.current = Some(trigger);
        self.state = RequestState::Loading;
    }

    /// Settles the request for `trigger`. Returns `false` when the outcome
    /// belongs to a superseded trigger and was ignored.
    pub fn resolve(&mut self, trigger: FactTrigger, outcome: Result<Fact, FetchError>) -> bool {
        if self.current != Some(trigger) {
            tracing::debug!(
                trigger = trigger.0,
                current = ?self.current.map(|t| t.0),
                "ignoring outcome for superseded trigger"
            );
            return false;
        }
        self.state = match outcome {
            Ok(fact) => RequestState::Success(fact),
            Err(err) => {
                let err = UiError::from(&err);
                tracing::warn!(category = ?err.category(), "{}", err.message());
                RequestState::Error(err.user_message().to_string())
            }
        };
        true
    }

    /// The outstanding request can no longer complete (queue closed, worker
    /// never started). Only has an effect while loading.
    pub fn fail_pending(&mut self, reason: &UiError) {
        if !self.state.is_loading() {
            return;
        }
        tracing::warn!(
            context = ?reason.context(),
            category = ?reason.category(),
            "abandoning in-flight fact request: {}",
            reason.message()
        );
        self.state = RequestState::Error(FETCH_FAILED_MESSAGE.to_string());
    }
}

#[cfg(test)]
#[path = "tests/adapter_tests.rs"]
mod tests;
