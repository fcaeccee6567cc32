use thiserror::Error;

/// Errors produced by the backend product API collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the response never arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("server error: status {0}")]
    Server(u16),

    /// Response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Server(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
