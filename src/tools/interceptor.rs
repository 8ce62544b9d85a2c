use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;

use super::context::RunContext;
use super::descriptor::{ToolDescriptor, ToolInvoker};
use super::gate::{ConfirmationGate, Decision, PendingCall};

/// Invoker that asks the gate before delegating to the wrapped invoker.
pub struct ConfirmedInvoker {
    tool_name: String,
    inner: Arc<dyn ToolInvoker>,
    gate: Arc<dyn ConfirmationGate>,
}

impl ConfirmedInvoker {
    pub fn new(
        tool_name: impl Into<String>,
        inner: Arc<dyn ToolInvoker>,
        gate: Arc<dyn ConfirmationGate>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            inner,
            gate,
        }
    }
}

#[async_trait]
impl ToolInvoker for ConfirmedInvoker {
    async fn invoke(&self, context: &RunContext, arguments: &str) -> Result<String, AgentError> {
        let call = PendingCall::new(&self.tool_name, arguments);
        match self.gate.confirm(&call).await {
            Decision::Accept => {
                log::info!("operator accepted call to {}", self.tool_name);
                self.inner.invoke(context, arguments).await
            }
            Decision::Deny => {
                log::info!("operator denied call to {}", self.tool_name);
                Err(AgentError::ToolDenied {
                    tool_name: self.tool_name.clone(),
                })
            }
        }
    }
}

/// Names of the tools that need an operator decision before running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    required: BTreeSet<String>,
}

impl ConfirmationPolicy {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn requires(&self, tool_name: &str) -> bool {
        self.required.contains(tool_name)
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }
}

/// Gates every tool listed in `policy`; the rest are returned untouched.
pub fn apply_confirmation(
    tools: Vec<ToolDescriptor>,
    policy: &ConfirmationPolicy,
    gate: Arc<dyn ConfirmationGate>,
) -> Vec<ToolDescriptor> {
    tools
        .into_iter()
        .map(|tool| {
            if policy.requires(&tool.name) {
                log::debug!("tool {} requires confirmation", tool.name);
                tool.gated(Arc::clone(&gate))
            } else {
                tool
            }
        })
        .collect()
}
