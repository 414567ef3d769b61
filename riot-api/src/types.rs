use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),
}

/// A call to the Riot API either succeeds with the decoded DTO or fails with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;
