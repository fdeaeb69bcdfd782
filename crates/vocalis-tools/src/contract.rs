//! Static tool descriptors consumed by the agent runtime.

use serde_json::{Value, json};

/// Immutable descriptor of a callable tool: name, natural-language
/// description and closed parameter schema.
///
/// The parameter schema enumerates every accepted field and forbids
/// unspecified ones (`additionalProperties: false`); the runtime validates
/// arguments against it before the handler runs.
#[derive(Debug, Clone)]
pub struct ToolContract {
    /// Unique tool name within a registry.
    pub name: &'static str,
    /// Description shown to the model when it selects a tool.
    pub description: String,
    /// JSON-Schema subset describing the arguments object.
    pub parameters: Value,
}

impl ToolContract {
    /// Creates a new contract.
    pub fn new(name: &'static str, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name,
            description: description.into(),
            parameters,
        }
    }

    /// Renders the wire-format function definition the runtime registers
    /// with the model.
    pub fn definition(&self) -> Value {
        json!({
            "type": "function",
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_shape() {
        let contract = ToolContract::new(
            "search",
            "Search the knowledge base.",
            json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Search query"}
                },
                "required": ["query"],
                "additionalProperties": false
            }),
        );

        let definition = contract.definition();
        assert_eq!(definition["type"], "function");
        assert_eq!(definition["name"], "search");
        assert_eq!(definition["parameters"]["additionalProperties"], false);
    }
}
