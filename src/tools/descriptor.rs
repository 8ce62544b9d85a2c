use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::chat::Tool;
use crate::error::AgentError;

use super::context::RunContext;
use super::gate::ConfirmationGate;
use super::interceptor::ConfirmedInvoker;

/// The callable behind a tool.
///
/// `arguments` is the raw JSON text produced by the model.
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    async fn invoke(&self, context: &RunContext, arguments: &str) -> Result<String, AgentError>;
}

/// A named capability offered to the model.
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments
    pub parameters: Value,
    pub requires_confirmation: bool,
    invoker: Arc<dyn ToolInvoker>,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
        invoker: Arc<dyn ToolInvoker>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            requires_confirmation: false,
            invoker,
        }
    }

    /// Returns a copy whose invoker asks `gate` before every call.
    pub fn gated(self, gate: Arc<dyn ConfirmationGate>) -> Self {
        let invoker = ConfirmedInvoker::new(self.name.clone(), self.invoker, gate);
        Self {
            requires_confirmation: true,
            invoker: Arc::new(invoker),
            ..self
        }
    }

    pub fn invoker(&self) -> &Arc<dyn ToolInvoker> {
        &self.invoker
    }

    pub async fn invoke(&self, context: &RunContext, arguments: &str) -> Result<String, AgentError> {
        self.invoker.invoke(context, arguments).await
    }

    /// Schema sent to the model.
    pub fn to_tool(&self) -> Tool {
        Tool::function(&self.name, &self.description, self.parameters.clone())
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("requires_confirmation", &self.requires_confirmation)
            .finish_non_exhaustive()
    }
}
