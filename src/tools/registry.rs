use crate::chat::Tool;
use crate::error::AgentError;

use super::context::RunContext;
use super::descriptor::ToolDescriptor;

/// The tools an agent can call, looked up by name.
#[derive(Clone, Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        let mut registry = Self::default();
        for tool in tools {
            registry.insert(tool);
        }
        registry
    }

    /// Adds a tool, replacing any existing tool with the same name.
    pub fn insert(&mut self, tool: ToolDescriptor) {
        self.tools.retain(|t| t.name != tool.name);
        self.tools.push(tool);
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Schemas sent to the model with every request.
    pub fn schemas(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDescriptor::to_tool).collect()
    }

    pub async fn execute(
        &self,
        name: &str,
        arguments: &str,
        context: &RunContext,
    ) -> Result<String, AgentError> {
        let tool = self
            .get(name)
            .ok_or_else(|| AgentError::ToolNotFound(name.to_string()))?;
        tool.invoke(context, arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{descriptor, event_log, RecordingInvoker};

    #[tokio::test]
    async fn execute_dispatches_by_name() {
        let log = event_log();
        let registry = ToolRegistry::new(vec![
            descriptor("a", RecordingInvoker::returning("a", "from a", log.clone())),
            descriptor("b", RecordingInvoker::returning("b", "from b", log)),
        ]);

        let output = registry
            .execute("b", "{}", &RunContext::new("u"))
            .await
            .unwrap();
        assert_eq!(output, "from b");
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let registry = ToolRegistry::default();
        let err = registry
            .execute("missing", "{}", &RunContext::new("u"))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::ToolNotFound(name) if name == "missing"));
    }

    #[test]
    fn insert_replaces_same_name() {
        let log = event_log();
        let mut registry = ToolRegistry::new(vec![descriptor(
            "a",
            RecordingInvoker::returning("a", "old", log.clone()),
        )]);
        registry.insert(descriptor("a", RecordingInvoker::returning("a", "new", log)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.schemas()[0].function.name, "a");
    }
}
