//! Interactive chat client demonstrating the League MCP server.
//!
//! Spawns the server binary over stdio by default; `--http` connects to an
//! already-running streamable HTTP server instead.

mod agent;
mod connection;
mod error;
mod gemini;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::agent::Agent;
use crate::connection::McpSession;
use crate::error::Result;
use crate::gemini::GeminiClient;

#[derive(Parser, Debug)]
#[command(name = "league-agent", about = "Chat agent for the League MCP server")]
struct Args {
    /// Command line used to spawn the MCP server over stdio.
    #[arg(long, default_value = "league-mcp")]
    server: String,

    /// Connect to a streamable HTTP server instead of spawning one.
    #[arg(long)]
    http: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let gemini = GeminiClient::from_env()?;

    let session = match &args.http {
        Some(url) => McpSession::http(url).await?,
        None => McpSession::stdio(&args.server).await?,
    };
    if let Some(info) = session.server_info() {
        println!(
            "Connected to {} v{}",
            info.server_info.name, info.server_info.version
        );
    }

    let agent = Agent::new(session, gemini).await?;
    println!("Ask about League accounts, matches or ranked standings. Type 'quit' to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let query = line.trim();
        if query.eq_ignore_ascii_case("quit") {
            break;
        }
        if query.is_empty() {
            continue;
        }

        match agent.run_query(query).await {
            Ok(answer) => println!("\n{answer}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    agent.close().await?;
    Ok(())
}
