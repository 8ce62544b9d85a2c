//! Scripted model backend for agent and conversation tests.

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::chat::{ChatMessage, ChatProvider, ChatResponse, Tool, Usage};
use crate::error::AgentError;
use crate::{FunctionCall, ToolCall};

#[derive(Debug, Clone, Default)]
pub struct ScriptedResponse {
    pub text: Option<String>,
    pub calls: Vec<ToolCall>,
    pub usage: Option<Usage>,
}

impl fmt::Display for ScriptedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text.as_deref().unwrap_or_default())
    }
}

impl ChatResponse for ScriptedResponse {
    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn tool_calls(&self) -> Option<Vec<ToolCall>> {
        if self.calls.is_empty() {
            None
        } else {
            Some(self.calls.clone())
        }
    }

    fn usage(&self) -> Option<Usage> {
        self.usage.clone()
    }
}

/// Provider that replays canned responses and records every request.
pub struct ScriptedProvider {
    responses: Mutex<Vec<ScriptedResponse>>,
    requests: Mutex<Vec<(Vec<ChatMessage>, usize)>>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<ScriptedResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().rev().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<(Vec<ChatMessage>, usize)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn chat_with_tools(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[Tool]>,
    ) -> Result<Box<dyn ChatResponse>, AgentError> {
        self.requests
            .lock()
            .unwrap()
            .push((messages.to_vec(), tools.map_or(0, <[Tool]>::len)));
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| AgentError::ProviderError("script exhausted".into()))?;
        Ok(Box::new(next))
    }
}

pub fn answer(text: &str) -> ScriptedResponse {
    ScriptedResponse {
        text: Some(text.to_string()),
        ..Default::default()
    }
}

pub fn calling(calls: &[(&str, &str, &str)]) -> ScriptedResponse {
    ScriptedResponse {
        calls: calls
            .iter()
            .map(|(id, name, args)| ToolCall {
                id: id.to_string(),
                call_type: "function".to_string(),
                function: FunctionCall {
                    name: name.to_string(),
                    arguments: args.to_string(),
                },
            })
            .collect(),
        ..Default::default()
    }
}
