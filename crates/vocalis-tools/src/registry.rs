//! Name-keyed tool registry with write-once, read-many discipline.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::TRACING_TARGET_REGISTRY;
use crate::contract::ToolContract;
use crate::error::{Result, ToolError};
use crate::result::ToolResult;

/// A callable tool implementation.
///
/// Each implementation holds its own captured dependencies (search service,
/// HTTP client, base URL) as fields; handlers are stateless with respect to
/// each other and safe for concurrent invocation.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Invokes the tool with already-validated arguments.
    async fn call(&self, args: Value) -> Result<ToolResult>;
}

/// A contract bound to its handler and compiled argument schema.
struct RegisteredTool {
    contract: ToolContract,
    validator: jsonschema::Validator,
    handler: Arc<dyn ToolHandler>,
}

/// Registry mapping tool names to their contract and handler.
///
/// Populated once during attach and treated as immutable afterwards; reads
/// during dispatch need no locking because no writer runs concurrently with
/// them.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, RegisteredTool>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a contract and handler under the contract's name.
    ///
    /// # Errors
    ///
    /// Fails fast with [`ToolError::DuplicateTool`] if the name collides
    /// with an existing entry, or [`ToolError::Schema`] if the contract's
    /// parameter schema does not compile.
    pub fn register(&mut self, contract: ToolContract, handler: Arc<dyn ToolHandler>) -> Result<()> {
        if self.tools.contains_key(contract.name) {
            return Err(ToolError::DuplicateTool(contract.name));
        }

        let validator = jsonschema::validator_for(&contract.parameters)
            .map_err(|error| ToolError::schema(error.to_string()))?;

        tracing::info!(
            target: TRACING_TARGET_REGISTRY,
            tool = contract.name,
            "Tool registered"
        );
        self.tools.insert(
            contract.name,
            RegisteredTool {
                contract,
                validator,
                handler,
            },
        );
        Ok(())
    }

    /// Returns true if a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Gets the contract registered under a name.
    pub fn contract(&self, name: &str) -> Option<&ToolContract> {
        self.tools.get(name).map(|tool| &tool.contract)
    }

    /// Renders the wire-format definitions of every registered tool.
    pub fn definitions(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|tool| tool.contract.definition())
            .collect()
    }

    /// Dispatches an invocation to the named tool.
    ///
    /// Arguments are validated against the tool's parameter schema first;
    /// non-conforming arguments are rejected with [`ToolError::Schema`]
    /// before the handler runs.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<ToolResult> {
        let registered = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        if let Err(error) = registered.validator.validate(&args) {
            tracing::warn!(
                target: TRACING_TARGET_REGISTRY,
                tool = name,
                error = %error,
                "Arguments rejected by schema"
            );
            return Err(ToolError::schema(error.to_string()));
        }

        registered.handler.call(args).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}
