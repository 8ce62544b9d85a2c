use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;

use super::context::RunContext;
use super::descriptor::ToolDescriptor;
use super::gate::ConfirmationGate;
use super::interceptor::{apply_confirmation, ConfirmationPolicy};

/// Source of tool descriptors, one toolkit at a time.
#[async_trait]
pub trait ToolCatalog: Send + Sync {
    async fn tools(&self, toolkit: &str) -> Result<Vec<ToolDescriptor>, AgentError>;
}

/// Outcome of asking the provider whether a user may call a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    Completed,
    /// The user must visit `url` before the tool can run
    Pending { id: String, url: Option<String> },
}

/// Out-of-band authorization performed once per tool at startup.
#[async_trait]
pub trait ToolAuthorizer: Send + Sync {
    async fn authorize(
        &self,
        tool_name: &str,
        context: &RunContext,
    ) -> Result<Authorization, AgentError>;

    /// Blocks until a pending authorization completes; fails if it does not.
    async fn wait_for_completion(&self, id: &str) -> Result<(), AgentError>;
}

/// Startup sequence: fetch every toolkit, gate the configured tools and
/// authorize each tool for the run's user.
///
/// `on_pending` is called with the tool name and URL when the user has to
/// authorize in a browser. Any authorization failure aborts setup so an
/// unauthorized tool is never handed to the model.
pub async fn prepare_tools<F>(
    catalog: &dyn ToolCatalog,
    authorizer: &dyn ToolAuthorizer,
    toolkits: &[String],
    policy: &ConfirmationPolicy,
    gate: Arc<dyn ConfirmationGate>,
    context: &RunContext,
    mut on_pending: F,
) -> Result<Vec<ToolDescriptor>, AgentError>
where
    F: FnMut(&str, &str) + Send,
{
    let mut tools = Vec::new();
    for toolkit in toolkits {
        let fetched = catalog.tools(toolkit).await?;
        log::info!("toolkit {toolkit}: {} tools", fetched.len());
        tools.extend(fetched);
    }
    for name in policy.names() {
        if !tools.iter().any(|tool| tool.name == name) {
            log::warn!("confirmation configured for unknown tool {name}");
        }
    }
    let tools = apply_confirmation(tools, policy, gate);
    for tool in &tools {
        match authorizer.authorize(&tool.name, context).await? {
            Authorization::Completed => {}
            Authorization::Pending { id, url } => {
                if let Some(url) = url.as_deref() {
                    on_pending(&tool.name, url);
                }
                authorizer.wait_for_completion(&id).await?;
            }
        }
        log::info!("tool {} authorized", tool.name);
    }
    Ok(tools)
}
