//! Reasoning loop: ask Gemini, run the tool it names, feed the result back.

use rmcp::model::Tool;
use serde_json::{Map, Value};

use crate::connection::{McpSession, extract_text};
use crate::error::Result;
use crate::gemini::GeminiClient;

/// Upper bound on chained tool calls for a single user query.
const MAX_STEPS: usize = 4;

pub struct Agent {
    session: McpSession,
    gemini: GeminiClient,
    tool_catalog: String,
}

impl Agent {
    pub async fn new(session: McpSession, gemini: GeminiClient) -> Result<Self> {
        let tools = session.list_tools().await?;
        let tool_catalog = render_catalog(&tools.tools);
        tracing::info!(tools = tools.tools.len(), "connected to MCP server");
        Ok(Self {
            session,
            gemini,
            tool_catalog,
        })
    }

    pub async fn close(self) -> Result<()> {
        self.session.close().await
    }

    /// Answer one user query, chaining at most [`MAX_STEPS`] tool calls.
    pub async fn run_query(&self, query: &str) -> Result<String> {
        let mut transcript = String::new();

        for step in 0..MAX_STEPS {
            let prompt = self.build_prompt(query, &transcript, step == MAX_STEPS - 1);
            let response = self.gemini.generate(&prompt).await?;

            let Some(call) = response.strip_prefix("USE_TOOL:") else {
                return Ok(response);
            };
            let (name, arguments) = match parse_tool_call(call.trim()) {
                Some(parsed) => parsed,
                None => {
                    tracing::warn!(%response, "unparseable tool call");
                    return Ok(response);
                }
            };

            println!("  [tool] {name}");
            let result = self.session.call_tool(&name, arguments).await?;
            let text = extract_text(&result);
            transcript.push_str(&format!("Tool `{name}` returned:\n{text}\n\n"));
        }

        // Out of steps: ask for a final answer from what was gathered.
        let prompt = self.build_prompt(query, &transcript, true);
        self.gemini.generate(&prompt).await
    }

    fn build_prompt(&self, query: &str, transcript: &str, final_step: bool) -> String {
        let mut prompt = format!(
            "You are a League of Legends assistant with access to Riot Games API tools.\n\n\
             {}\n\n\
             User query: {query}\n\n",
            self.tool_catalog
        );
        if !transcript.is_empty() {
            prompt.push_str("Results gathered so far:\n");
            prompt.push_str(transcript);
        }
        if final_step {
            prompt.push_str("Answer the user's query now using the results above.\n");
        } else {
            prompt.push_str(
                "If a tool would help, respond with exactly one line:\n\
                 USE_TOOL: tool_name(param1=value1, param2=\"value two\")\n\
                 Otherwise answer the query directly.\n\n\
                 Platform regions: na1, euw1, eun1, kr, jp1, br1, la1, la2, oc1, tr1, ru \
                 (default na1). Routing regions: americas, asia, europe (default americas).\n\
                 Example: USE_TOOL: get_account_by_riot_id(game_name=\"Faker\", tag_line=\"T1\")\n",
            );
        }
        prompt
    }
}

/// One line per tool: name, description and parameter names/types from the
/// input schema.
fn render_catalog(tools: &[Tool]) -> String {
    let mut catalog = String::from("Available tools:\n");
    for tool in tools {
        catalog.push_str("- ");
        catalog.push_str(&tool.name);
        if let Some(description) = &tool.description {
            catalog.push_str(": ");
            catalog.push_str(description);
        }
        if let Some(Value::Object(props)) = tool.input_schema.get("properties") {
            let params: Vec<String> = props
                .iter()
                .map(|(name, schema)| {
                    let kind = schema
                        .get("type")
                        .and_then(Value::as_str)
                        .unwrap_or("any");
                    format!("{name} ({kind})")
                })
                .collect();
            if !params.is_empty() {
                catalog.push_str(&format!(" [{}]", params.join(", ")));
            }
        }
        catalog.push('\n');
    }
    catalog
}

/// Parse `name(key=value, key="value")` into a tool name and arguments map.
fn parse_tool_call(call: &str) -> Option<(String, Map<String, Value>)> {
    let open = call.find('(')?;
    let close = call.rfind(')')?;
    if close < open {
        return None;
    }
    let name = call[..open].trim();
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }

    let mut arguments = Map::new();
    for pair in split_args(&call[open + 1..close]) {
        let (key, raw) = pair.split_once('=')?;
        arguments.insert(key.trim().to_string(), coerce(raw.trim()));
    }
    Some((name.to_string(), arguments))
}

/// Split on commas that are not inside quotes. A span opened by one quote
/// character is only closed by the same character, so `"Kai'Sa"` stays whole.
fn split_args(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    for (i, c) in raw.char_indices() {
        match c {
            '"' | '\'' => match quote {
                None => quote = Some(c),
                Some(q) if q == c => quote = None,
                Some(_) => {}
            },
            ',' if quote.is_none() => {
                if !raw[start..i].trim().is_empty() {
                    parts.push(&raw[start..i]);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    if !raw[start..].trim().is_empty() {
        parts.push(&raw[start..]);
    }
    parts
}

/// Unquoted values become bools or numbers when they look like one.
fn coerce(raw: &str) -> Value {
    let trimmed = raw.trim();
    if (trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2)
        || (trimmed.starts_with('\'') && trimmed.ends_with('\'') && trimmed.len() >= 2)
    {
        return Value::String(trimmed[1..trimmed.len() - 1].to_string());
    }
    match trimmed {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_call_with_quoted_values_is_parsed() {
        let (name, args) = parse_tool_call(
            r#"get_account_by_riot_id(game_name="Le Conservateur", tag_line="3012")"#,
        )
        .unwrap();
        assert_eq!(name, "get_account_by_riot_id");
        assert_eq!(args["game_name"], "Le Conservateur");
        assert_eq!(args["tag_line"], "3012");
    }

    #[test]
    fn values_are_coerced_to_json_types() {
        let (_, args) = parse_tool_call(
            "get_match_ids_by_puuid(puuid=abc, count=5, queue=420, ranked=true)",
        )
        .unwrap();
        assert_eq!(args["puuid"], "abc");
        assert_eq!(args["count"], 5);
        assert_eq!(args["queue"], 420);
        assert_eq!(args["ranked"], true);
    }

    #[test]
    fn quoted_commas_do_not_split_arguments() {
        let (_, args) = parse_tool_call(r#"echo(message="a, b, c", n=1)"#).unwrap();
        assert_eq!(args["message"], "a, b, c");
        assert_eq!(args["n"], 1);
    }

    #[test]
    fn apostrophes_inside_double_quotes_do_not_break_splitting() {
        let (_, args) = parse_tool_call(
            r#"get_account_by_riot_id(game_name="Kai'Sa", tag_line="void", region=na1)"#,
        )
        .unwrap();
        assert_eq!(args["game_name"], "Kai'Sa");
        assert_eq!(args["tag_line"], "void");
        assert_eq!(args["region"], "na1");
    }

    #[test]
    fn empty_argument_list_is_allowed() {
        let (name, args) = parse_tool_call("get_platform_status()").unwrap();
        assert_eq!(name, "get_platform_status");
        assert!(args.is_empty());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_tool_call("not a tool call").is_none());
        assert!(parse_tool_call("name(missing_equals)").is_none());
    }
}
