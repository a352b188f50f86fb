use thiserror::Error;

/// Result type for API calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Why a backend call failed. Every variant reads as "request failed" to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, DNS, TLS, or timeout failure.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The envelope said `success: false`, or carried no data.
    #[error("request failed: {0}")]
    Backend(String),

    /// The body was not the expected JSON shape.
    #[error("request failed: invalid response ({0})")]
    Decode(String),

    #[error("could not build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
