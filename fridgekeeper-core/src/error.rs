use thiserror::Error;

/// Errors from the external service clients (food existence, recipe
/// search). Timeouts surface as `RequestFailed` via reqwest.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("service not configured: {0}")]
    NotConfigured(String),
}
