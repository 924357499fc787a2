use thiserror::Error;

/// The only message a user ever sees for a failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch fact. Please try again later.";

/// Why a fetch failed. The variants exist for logs; callers surface
/// [`FETCH_FAILED_MESSAGE`] regardless of which one occurred.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("fact service responded with status {0}")]
    Status(u16),
    #[error("malformed fact body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_the_same_user_message() {
        for err in [
            FetchError::Transport("connection refused".into()),
            FetchError::Status(503),
            FetchError::Decode("missing field `fact`".into()),
        ] {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
            assert_ne!(err.to_string(), FETCH_FAILED_MESSAGE);
        }
    }
}
