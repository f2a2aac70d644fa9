//! Tool System
//!
//! Named capabilities the model may request, plus the registry that
//! resolves and dispatches them. A capability takes one parameter string
//! and produces observation text for the next prompt.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Observation returned when no registered tool matches a request.
///
/// Fed back to the model as ordinary input so it can pick another tool
/// or give up on its own.
pub const TOOL_NOT_FOUND: &str = "Tool not found";

/// Tool trait - implement to add new capabilities
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool identifier, matched exactly at dispatch
    fn name(&self) -> &str;

    /// Human-readable description (shown to the model)
    fn description(&self) -> &str;

    /// Short hint describing the expected parameter
    fn parameter_hint(&self) -> &str {
        ""
    }

    /// Run the capability with the given parameter text
    async fn invoke(&self, parameter: &str) -> Result<String>;
}

/// Registry for available tools
///
/// Built once before the loop starts and read-only afterwards. Lookup
/// is a linear scan in registration order; if two tools share a name
/// the first registered wins.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a new tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.push(Arc::new(tool));
    }

    /// Register a shared tool
    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    /// Get a tool by exact name; first match wins
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Get tool names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolve and run a tool request, producing the observation text.
    ///
    /// Unknown names and handler failures both come back as observations
    /// rather than errors, leaving the model to correct itself on the
    /// next pass.
    pub async fn dispatch(&self, name: &str, parameter: &str) -> String {
        let Some(tool) = self.get(name) else {
            tracing::warn!(tool = %name, "requested tool is not registered");
            return TOOL_NOT_FOUND.to_string();
        };

        match tool.invoke(parameter).await {
            Ok(observation) => observation,
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "tool invocation failed");
                format!("Error: {}", e)
            }
        }
    }

    /// Render the tool list section of the prompt
    pub fn describe_for_prompt(&self) -> String {
        let mut section = String::new();

        for tool in &self.tools {
            section.push_str(&format!("- {}: {}", tool.name(), tool.description()));
            if !tool.parameter_hint().is_empty() {
                section.push_str(&format!(" (parameter: {})", tool.parameter_hint()));
            }
            section.push('\n');
        }

        section
    }
}
