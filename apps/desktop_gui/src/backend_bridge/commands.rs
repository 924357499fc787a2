//! Backend commands queued from UI to backend worker.

use shared::domain::FactTrigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    /// Fetch one fact on behalf of `trigger`.
    FetchFact { trigger: FactTrigger },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchFact { .. } => "fetch_fact",
        }
    }
}
