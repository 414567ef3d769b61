use thiserror::Error;

/// Errors surfaced while serving the MCP endpoint.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to start server: {0}")]
    ServerInit(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("data dragon request failed: {0}")]
    DataDragon(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
