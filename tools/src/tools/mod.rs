//! Tool handlers, one module per Riot endpoint family.
//!
//! Every handler follows the same shape: read arguments, validate the simple
//! parameters before any network call, perform exactly one API request and
//! render the response as a text block. Upstream failures become error results
//! with a short human-readable message rather than protocol faults.

use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
};
use serde_json::Value;

use league_mcp_riot_api::types::RiotApiError;

pub mod account;
pub mod challenges;
pub mod champion;
pub mod clash;
pub mod league;
pub mod match_v5;
pub mod spectator;
pub mod status;
pub mod summoner;
pub mod tournament;

/// Accessor over the arguments map of a tool call.
///
/// Missing or wrongly typed required arguments are protocol errors
/// (`invalid_params`); semantically invalid values are handled by the
/// individual tools via [`reject`].
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    map: serde_json::Map<String, Value>,
}

impl ToolArgs {
    pub fn new(arguments: Option<serde_json::Map<String, Value>>) -> Self {
        Self {
            map: arguments.unwrap_or_default(),
        }
    }

    pub fn required_str(&self, key: &str) -> Result<&str, ErrorData> {
        self.map
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| missing(key, "string"))
    }

    pub fn optional_str(&self, key: &str) -> Option<&str> {
        self.map.get(key).and_then(Value::as_str)
    }

    /// Optional string argument falling back to a default, the way the
    /// region parameters default to a home region.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.optional_str(key).unwrap_or(default)
    }

    pub fn required_i64(&self, key: &str) -> Result<i64, ErrorData> {
        self.parse_i64(key)?.ok_or_else(|| missing(key, "integer"))
    }

    pub fn optional_i64(&self, key: &str) -> Result<Option<i64>, ErrorData> {
        self.parse_i64(key)
    }

    pub fn u32_or(&self, key: &str, default: u32) -> Result<u32, ErrorData> {
        match self.parse_i64(key)? {
            Some(v) => {
                u32::try_from(v).map_err(|_| invalid(key, "a non-negative integer"))
            }
            None => Ok(default),
        }
    }

    pub fn optional_u32(&self, key: &str) -> Result<Option<u32>, ErrorData> {
        match self.parse_i64(key)? {
            Some(v) => u32::try_from(v)
                .map(Some)
                .map_err(|_| invalid(key, "a non-negative integer")),
            None => Ok(None),
        }
    }

    // Hosts are inconsistent about number encoding, so numeric strings are
    // accepted alongside JSON numbers.
    fn parse_i64(&self, key: &str) -> Result<Option<i64>, ErrorData> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => {
                n.as_i64().map(Some).ok_or_else(|| invalid(key, "an integer"))
            }
            Some(Value::String(s)) => s
                .parse::<i64>()
                .map(Some)
                .map_err(|_| invalid(key, "an integer")),
            Some(_) => Err(invalid(key, "an integer")),
        }
    }
}

fn missing(key: &str, expected: &str) -> ErrorData {
    ErrorData::invalid_params(
        format!("missing required {expected} argument '{key}'"),
        None,
    )
}

fn invalid(key: &str, expected: &str) -> ErrorData {
    ErrorData::invalid_params(format!("argument '{key}' must be {expected}"), None)
}

/// Schema snippet for a platform region parameter.
pub(crate) fn platform_property() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "Platform region (na1, euw1, eun1, kr, jp1, br1, la1, la2, oc1, tr1, ru)",
        "default": "na1"
    })
}

/// Schema snippet for a routing region parameter.
pub(crate) fn routing_property() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "Routing region (americas, asia, europe)",
        "default": "americas"
    })
}

/// Successful tool result carrying a single text block.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Tool-level failure with a message the model can act on.
pub fn reject(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Map an upstream API failure to a short readable error result.
///
/// `what` names the thing being looked up ("Account", "Match", ...).
pub fn upstream_error(what: &str, err: RiotApiError) -> CallToolResult {
    let message = match err {
        RiotApiError::Status(status) => match status.as_u16() {
            404 => format!("{what} not found."),
            401 | 403 => "Forbidden. Check that your Riot API key is valid and not expired."
                .to_string(),
            429 => "Rate limited by the Riot API. Try again shortly.".to_string(),
            code => format!("Riot API returned HTTP {code}."),
        },
        RiotApiError::Reqwest(e) => format!("Request failed: {e}"),
    };
    tracing::debug!(%message, "tool call failed upstream");
    reject(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> ToolArgs {
        ToolArgs::new(value.as_object().cloned())
    }

    #[test]
    fn numeric_arguments_accept_numbers_and_strings() {
        let a = args(json!({"count": 5, "start": "10"}));
        assert_eq!(a.required_i64("count").unwrap(), 5);
        assert_eq!(a.required_i64("start").unwrap(), 10);
        assert_eq!(a.u32_or("missing", 20).unwrap(), 20);
        assert!(a.required_i64("missing").is_err());
    }

    #[test]
    fn wrongly_typed_argument_is_a_protocol_error() {
        let a = args(json!({"count": [1, 2]}));
        assert!(a.optional_i64("count").is_err());
    }

    #[test]
    fn status_errors_map_to_readable_messages() {
        let not_found = upstream_error(
            "Account",
            RiotApiError::Status(reqwest::StatusCode::NOT_FOUND),
        );
        assert_eq!(not_found.is_error, Some(true));

        let forbidden = upstream_error(
            "Account",
            RiotApiError::Status(reqwest::StatusCode::FORBIDDEN),
        );
        assert_eq!(forbidden.is_error, Some(true));
    }
}
