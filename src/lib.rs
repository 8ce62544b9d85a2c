//! Human-in-the-loop tool confirmation for a chat agent.
//!
//! The crate wires a language-model agent to an external tool service and
//! places a confirmation gate in front of selected tools. A denied call is
//! surfaced as [`error::AgentError::ToolDenied`] and turned back into
//! conversation turns by [`conversation::Conversation`], so the session keeps
//! going instead of failing.

use serde::{Deserialize, Serialize};

pub mod agent;
pub mod arcade;
pub mod backends;
pub mod chat;
pub mod console;
pub mod conversation;
pub mod error;
pub mod tools;

pub use agent::{Agent, AgentBuilder, AgentRun, RunResult, Runner};
pub use conversation::{Conversation, TurnOutcome};
pub use error::AgentError;
pub use tools::{ConfirmationGate, Decision, RunContext, ToolDescriptor};

/// A function call requested by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the tool being called
    pub name: String,
    /// Arguments as raw JSON text, or the tool output on a result message
    pub arguments: String,
}

/// A tool call as it appears in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Call identifier used to pair a call with its result
    pub id: String,
    /// Call type, always "function" for now
    #[serde(rename = "type")]
    pub call_type: String,
    /// The function being called
    pub function: FunctionCall,
}

impl std::fmt::Display for ToolCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}
