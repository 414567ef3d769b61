//! Minimal Gemini REST client, just enough for single-turn text generation.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AgentError, Result};

const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiClient {
    http: reqwest::Client,
    base: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    /// Reads `GOOGLE_API_KEY` (required) and `GEMINI_MODEL` (optional).
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("GOOGLE_API_KEY").map_err(|_| AgentError::MissingEnv("GOOGLE_API_KEY"))?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(GEMINI_BASE.to_string(), api_key, model)
    }

    pub fn new(base: String, api_key: String, model: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            base,
            api_key,
            model,
        })
    }

    /// Single-turn text completion.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base, self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![json!({"parts": [{"text": prompt}]})],
        };

        tracing::debug!(model = %self.model, "sending prompt to Gemini");
        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::Model(format!(
                "Gemini returned HTTP {}",
                status.as_u16()
            )));
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .map(|t| t.trim().to_string())
            .ok_or_else(|| AgentError::Model("empty Gemini response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_text_is_extracted() {
        let raw = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "  USE_TOOL: get_platform_status()  "}]}}
            ]
        });
        let parsed: GenerateResponse = serde_json::from_value(raw).unwrap();
        let text = parsed
            .candidates
            .unwrap()
            .remove(0)
            .content
            .parts
            .remove(0)
            .text
            .unwrap();
        assert!(text.contains("USE_TOOL"));
    }
}
