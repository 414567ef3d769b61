//! Typed async client for the Riot Games REST API.
//!
//! One module per endpoint family, each returning serde-decoded DTOs. The
//! client enforces a shared rate limit and a fixed request timeout; anything
//! other than a 2xx response surfaces as [`types::RiotApiError::Status`].

pub mod api;
pub mod types;

pub use api::client::ApiClient;
