use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Riot API error: {0}")]
    RiotApi(#[from] league_mcp_riot_api::types::RiotApiError),

    #[error("Server error: {0}")]
    Server(#[from] league_mcp_tools::ServerError),
}
