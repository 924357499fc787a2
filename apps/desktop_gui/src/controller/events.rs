//! UI/backend events and error modeling for the fact widget controller.

use shared::{
    domain::{Fact, FactTrigger},
    error::{FetchError, FETCH_FAILED_MESSAGE},
};

#[derive(Debug, Clone)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    FactLoaded {
        trigger: FactTrigger,
        fact: Fact,
    },
    FactFailed {
        trigger: FactTrigger,
        error: FetchError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Startup,
    Transport,
    Status,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
    FetchFact,
}

/// A failure somewhere between the button and the fact service. The raw
/// message is kept for logs; [`UiError::user_message`] is what gets drawn.
#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("startup failure")
            || message_lower.contains("failed to build")
        {
            UiErrorCategory::Startup
        } else if message_lower.contains("status") {
            UiErrorCategory::Status
        } else if message_lower.contains("malformed")
            || message_lower.contains("expected")
            || message_lower.contains("missing field")
        {
            UiErrorCategory::Decode
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("dns")
            || message_lower.contains("transport")
            || message_lower.contains("disconnected")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// Short note for the line under the button when the backend itself,
    /// rather than a single fetch, is in trouble.
    pub fn status_hint(&self) -> &'static str {
        match self.category {
            UiErrorCategory::Startup | UiErrorCategory::Transport => {
                "Background worker unavailable; restart the widget to fetch facts."
            }
            _ => "Too many requests queued; please retry.",
        }
    }
}

impl From<&FetchError> for UiError {
    fn from(value: &FetchError) -> Self {
        let category = match value {
            FetchError::Transport(_) => UiErrorCategory::Transport,
            FetchError::Status(_) => UiErrorCategory::Status,
            FetchError::Decode(_) => UiErrorCategory::Decode,
        };
        Self {
            category,
            context: UiErrorContext::FetchFact,
            message: value.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
