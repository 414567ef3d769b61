//! MCP surface of league-mcp: the tool registry, text formatters, Data Dragon
//! resources, workflow prompts and the server handler with its transports.

pub mod error;
pub mod format;
pub mod prompts;
pub mod registry;
pub mod resources;
pub mod server;
pub mod tools;

pub use error::{Result, ServerError};
pub use server::{LeagueMcpServer, ServerTransport};
