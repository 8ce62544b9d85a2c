//! The agent and the runner that drives its model/tool loop.

mod hooks;
mod runner;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use async_trait::async_trait;

use crate::chat::{ChatMessage, ChatProvider, Usage};
use crate::error::AgentError;
use crate::tools::{RunContext, ToolDescriptor, ToolRegistry};

pub use hooks::{AgentHooks, LoggingHooks};
pub use runner::Runner;

/// Model calls allowed in a single run before giving up.
pub const DEFAULT_MAX_TURNS: usize = 10;

/// What a completed run hands back to the caller.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Text of the final assistant turn
    pub final_output: String,
    /// The input transcript followed by every turn produced during the run
    pub transcript: Vec<ChatMessage>,
    /// Token usage summed over the run's model calls
    pub usage: Usage,
}

impl RunResult {
    /// Transcript to submit as input on the next turn.
    pub fn to_input_list(&self) -> Vec<ChatMessage> {
        self.transcript.clone()
    }

    pub fn into_transcript(self) -> Vec<ChatMessage> {
        self.transcript
    }
}

/// Something that can run the agent over a transcript.
#[async_trait]
pub trait AgentRun: Send + Sync {
    async fn run(
        &self,
        input: &[ChatMessage],
        context: &RunContext,
    ) -> Result<RunResult, AgentError>;
}

pub struct Agent {
    pub(crate) name: String,
    pub(crate) provider: Arc<dyn ChatProvider>,
    pub(crate) tools: ToolRegistry,
    pub(crate) hooks: Option<Arc<dyn AgentHooks>>,
    pub(crate) max_turns: usize,
}

impl Agent {
    pub fn builder() -> AgentBuilder {
        AgentBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }
}

#[async_trait]
impl AgentRun for Agent {
    async fn run(
        &self,
        input: &[ChatMessage],
        context: &RunContext,
    ) -> Result<RunResult, AgentError> {
        Runner::run(self, input, context).await
    }
}

/// Builder for [`Agent`].
pub struct AgentBuilder {
    name: String,
    provider: Option<Arc<dyn ChatProvider>>,
    tools: Vec<ToolDescriptor>,
    hooks: Option<Arc<dyn AgentHooks>>,
    max_turns: usize,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self {
            name: "assistant".to_string(),
            provider: None,
            tools: Vec::new(),
            hooks: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl AgentBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn provider(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn tool(mut self, tool: ToolDescriptor) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn tools(mut self, tools: impl IntoIterator<Item = ToolDescriptor>) -> Self {
        self.tools.extend(tools);
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn AgentHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn build(self) -> Result<Agent, AgentError> {
        let provider = self
            .provider
            .ok_or_else(|| AgentError::InvalidRequest("agent needs a model provider".into()))?;
        if self.max_turns == 0 {
            return Err(AgentError::InvalidRequest(
                "max_turns must be at least 1".into(),
            ));
        }
        Ok(Agent {
            name: self.name,
            provider,
            tools: ToolRegistry::new(self.tools),
            hooks: self.hooks,
            max_turns: self.max_turns,
        })
    }
}
