//! Diversion tool telling the caller a joke.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

use crate::TRACING_TARGET;
use crate::contract::ToolContract;
use crate::error::{Result, ToolError};
use crate::registry::ToolHandler;
use crate::result::ToolResult;

/// Fallback used when the joke source returns nothing usable.
pub const FALLBACK_JOKE: &str =
    "Why don't scientists trust atoms? Because they make up everything!";

/// One joke as served by the public joke source.
#[derive(Debug, Deserialize)]
struct Joke {
    setup: String,
    punchline: String,
}

/// Arguments for the joke tool.
#[derive(Debug, Deserialize)]
struct JokeArgs {
    /// Name of the person to address.
    name: String,
}

/// Lightweight diversion tool.
///
/// Fetches a joke from a public source and composes a canned sentence
/// addressed to the caller. This tool never contacts the record service and
/// never fails the call: any unusable response substitutes [`FALLBACK_JOKE`].
pub struct JokeTool {
    http: Client,
    joke_url: Url,
}

impl JokeTool {
    /// Creates a joke tool fetching from the given source.
    pub fn new(http: Client, joke_url: Url) -> Self {
        Self { http, joke_url }
    }

    /// The contract registered for this tool.
    pub fn contract() -> ToolContract {
        ToolContract::new(
            "tell_joke",
            "Tell the caller a short joke to lighten the mood, addressed to them by name.",
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Name of the person to address"}
                },
                "required": ["name"],
                "additionalProperties": false
            }),
        )
    }

    async fn fetch_joke(&self) -> Option<String> {
        let response = self
            .http
            .get(self.joke_url.clone())
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?;
        let jokes: Vec<Joke> = response.json().await.ok()?;
        let joke = jokes.into_iter().next()?;
        Some(format!("{} {}", joke.setup, joke.punchline))
    }
}

#[async_trait]
impl ToolHandler for JokeTool {
    #[tracing::instrument(target = "vocalis_tools", skip_all)]
    async fn call(&self, args: Value) -> Result<ToolResult> {
        let args: JokeArgs =
            serde_json::from_value(args).map_err(|error| ToolError::schema(error.to_string()))?;

        let joke = match self.fetch_joke().await {
            Some(joke) => joke,
            None => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    "Joke source unusable, substituting fallback"
                );
                FALLBACK_JOKE.to_string()
            }
        };

        Ok(ToolResult::agent_text(format!(
            "Hey {}, here's one for you: {joke}",
            args.name
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ToolResultDirection;

    #[tokio::test]
    async fn test_unreachable_source_falls_back_instead_of_failing() {
        let tool = JokeTool::new(Client::new(), Url::parse("http://127.0.0.1:9").unwrap());
        let result = tool.call(json!({"name": "Ada"})).await.unwrap();

        assert_eq!(result.direction, ToolResultDirection::ToAgentContext);
        let text = result.as_text().unwrap();
        assert!(text.starts_with("Hey Ada"));
        assert!(text.contains(FALLBACK_JOKE));
    }

    #[tokio::test]
    async fn test_missing_name_is_a_schema_error() {
        let tool = JokeTool::new(Client::new(), Url::parse("http://127.0.0.1:9").unwrap());
        let error = tool.call(json!({})).await.unwrap_err();
        assert!(matches!(error, ToolError::Schema(_)));
    }
}
