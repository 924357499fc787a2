use serde::{Deserialize, Serialize};

use crate::domain::Fact;

pub const DEFAULT_FACT_API_URL: &str = "https://catfact.ninja/fact";

/// Body returned by the fact service. Only `fact` is required; the service
/// also reports the text length, which we keep for debug output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactResponse {
    pub fact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

impl From<FactResponse> for Fact {
    fn from(value: FactResponse) -> Self {
        Fact::new(value.fact)
    }
}
