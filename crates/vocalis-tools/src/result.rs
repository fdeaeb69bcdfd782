//! Tool invocation results and their delivery direction.

use serde_json::Value;

/// Where the runtime routes a tool's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolResultDirection {
    /// Injected into the model's next reasoning turn.
    ToAgentContext,
    /// Relayed directly to the end client, bypassing the model.
    ToClient,
}

/// Payload of a tool result.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPayload {
    /// Preformatted text for context injection.
    Text(String),
    /// Structured record, e.g. citation sources for client display.
    Json(Value),
}

/// Immutable result of one tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// Result payload.
    pub payload: ToolPayload,
    /// Delivery direction, fixed per tool.
    pub direction: ToolResultDirection,
}

impl ToolResult {
    /// Creates a text result destined for the agent's context.
    pub fn agent_text(text: impl Into<String>) -> Self {
        Self {
            payload: ToolPayload::Text(text.into()),
            direction: ToolResultDirection::ToAgentContext,
        }
    }

    /// Creates a structured result destined for the agent's context.
    pub fn agent_json(value: Value) -> Self {
        Self {
            payload: ToolPayload::Json(value),
            direction: ToolResultDirection::ToAgentContext,
        }
    }

    /// Creates a structured result destined for the end client.
    pub fn client_json(value: Value) -> Self {
        Self {
            payload: ToolPayload::Json(value),
            direction: ToolResultDirection::ToClient,
        }
    }

    /// Returns the payload as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            ToolPayload::Text(text) => Some(text),
            ToolPayload::Json(_) => None,
        }
    }

    /// Returns the payload as JSON, if it is structured.
    pub fn as_json(&self) -> Option<&Value> {
        match &self.payload {
            ToolPayload::Text(_) => None,
            ToolPayload::Json(value) => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_directions_are_fixed_by_constructor() {
        let text = ToolResult::agent_text("hello");
        assert_eq!(text.direction, ToolResultDirection::ToAgentContext);
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_json().is_none());

        let sources = ToolResult::client_json(json!({"sources": []}));
        assert_eq!(sources.direction, ToolResultDirection::ToClient);
        assert!(sources.as_text().is_none());
    }
}
