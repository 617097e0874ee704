//! Errors returned by a geolocation lookup.

/// Failure of a single geolocation request.
///
/// A lookup yields either a result or exactly one of these; nothing is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    /// The endpoint URL could not be parsed.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    /// DNS, connect, TLS, timeout or body read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// No response headers arrived within the bound.
    #[error("transport error: no response headers within {0:?}")]
    HeaderTimeout(std::time::Duration),

    /// The provider answered with a status other than 200.
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The 200 response body did not match the expected schema.
    #[error("failed to decode geolocation response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GeolocationError {
    /// HTTP status code, for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for failures below the HTTP layer (network, TLS, timeouts).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HeaderTimeout(_))
    }
}
