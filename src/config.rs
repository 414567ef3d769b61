use std::env;
use std::num::NonZeroU32;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub request_timeout_secs: u64,
    pub riot_rate_limit_per_second: NonZeroU32,
    /// Data Dragon version pin; latest is resolved at first use when unset.
    pub ddragon_version: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
        const DEFAULT_RIOT_RATE_LIMIT_PER_SECOND: u32 = 20;

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let riot_rate_limit_per_second = env::var("RIOT_RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                NonZeroU32::new(DEFAULT_RIOT_RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN)
            });

        let ddragon_version = env::var("DDRAGON_VERSION").ok();

        Ok(Self {
            riot_api_key,
            request_timeout_secs,
            riot_rate_limit_per_second,
            ddragon_version,
        })
    }
}
