//! WMATA client error types.

/// Errors that can occur when interacting with the WMATA API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client construction rejected the configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// HTTP request failed before a response arrived (network, DNS, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API responded with an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded under the configured mode
    #[error("decode error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },
}

impl Error {
    /// Decode error carrying a truncated copy of the offending body.
    pub(crate) fn decode(message: impl Into<String>, body: &str) -> Self {
        Error::Decode {
            message: message.into(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}
