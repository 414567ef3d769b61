//! MCP session over a spawned server child process or a streamable HTTP URL.

use rmcp::{
    ClientHandler, RoleClient, ServiceExt,
    model::{
        CallToolRequestParams, CallToolResult, ClientCapabilities, ClientInfo, Implementation,
        ListToolsResult, ServerInfo,
    },
    service::RunningService,
    transport::{ConfigureCommandExt, StreamableHttpClientTransport, TokioChildProcess},
};
use serde_json::Value;
use tokio::process::Command;

use crate::error::{AgentError, Result};

struct AgentClientHandler;

impl ClientHandler for AgentClientHandler {
    fn get_info(&self) -> ClientInfo {
        ClientInfo {
            protocol_version: Default::default(),
            capabilities: ClientCapabilities::default(),
            client_info: Implementation {
                name: "league-agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// An initialized connection to the League MCP server.
pub struct McpSession {
    service: RunningService<RoleClient, AgentClientHandler>,
}

impl McpSession {
    /// Spawn the server binary as a child process and talk to it over stdio.
    pub async fn stdio(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace();
        let command = parts
            .next()
            .ok_or_else(|| AgentError::Transport("empty server command".to_string()))?;
        let args: Vec<&str> = parts.collect();

        let transport = TokioChildProcess::new(Command::new(command).configure(|cmd| {
            cmd.args(&args);
        }))
        .map_err(|e| AgentError::Transport(format!("failed to spawn '{command}': {e}")))?;

        let service = AgentClientHandler.serve(transport).await.map_err(|e| {
            AgentError::Transport(format!("failed to connect to '{command_line}': {e}"))
        })?;
        Ok(Self { service })
    }

    /// Connect to an already-running server over streamable HTTP.
    pub async fn http(url: &str) -> Result<Self> {
        let transport = StreamableHttpClientTransport::from_uri(url.to_string());
        let service = AgentClientHandler
            .serve(transport)
            .await
            .map_err(|e| AgentError::Transport(format!("failed to connect to {url}: {e}")))?;
        Ok(Self { service })
    }

    pub fn server_info(&self) -> Option<&ServerInfo> {
        self.service.peer_info()
    }

    pub async fn list_tools(&self) -> Result<ListToolsResult> {
        self.service
            .list_tools(Default::default())
            .await
            .map_err(|e| AgentError::Protocol(format!("failed to list tools: {e}")))
    }

    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, Value>,
    ) -> Result<CallToolResult> {
        self.service
            .call_tool(CallToolRequestParams {
                meta: None,
                name: name.to_string().into(),
                arguments: Some(arguments),
                task: None,
            })
            .await
            .map_err(|e| AgentError::Protocol(format!("failed to call tool '{name}': {e}")))
    }

    pub async fn close(self) -> Result<()> {
        self.service
            .cancel()
            .await
            .map_err(|e| AgentError::Transport(format!("failed to close connection: {e}")))?;
        Ok(())
    }
}

/// Pull the first text block out of a tool result.
pub fn extract_text(result: &CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .unwrap_or("(no output)")
}
