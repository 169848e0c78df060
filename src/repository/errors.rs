use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The request itself failed: connect, timeout, TLS, redirect loop.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered, but not with the shape we expect.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::InvalidResponse(err.to_string())
        } else if err.is_status() {
            RepositoryError::InvalidResponse(format!(
                "unexpected status {}",
                err.status().map(|s| s.as_u16()).unwrap_or_default()
            ))
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}
