//! League MCP server binary.
//!
//! Exposes the Riot Games API as MCP tools over stdio (default) or
//! streamable HTTP.

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use league_mcp_riot_api::ApiClient;
use league_mcp_tools::resources::DataDragon;
use league_mcp_tools::{LeagueMcpServer, ServerTransport};

use crate::config::Config;
use crate::error::AppError;

mod config;
mod error;
mod logging;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TransportArg {
    Stdio,
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "league-mcp", about = "MCP server for the Riot Games API")]
struct Args {
    /// Transport to serve over.
    #[arg(long, value_enum, default_value = "stdio")]
    transport: TransportArg,

    /// Bind address for the HTTP transport.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let api = ApiClient::new(
        config.riot_api_key.clone(),
        config.riot_rate_limit_per_second,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    api.start_metrics_logging();

    let ddragon = DataDragon::new(config.ddragon_version.clone())?;
    let server = LeagueMcpServer::new(Arc::new(api), ddragon);

    let transport = match args.transport {
        TransportArg::Stdio => ServerTransport::Stdio,
        TransportArg::Http => ServerTransport::Http(args.bind.clone()),
    };
    server.serve(transport).await?;

    tracing::info!("shutting down");
    Ok(())
}
