//! Recording fakes for tool and gate tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::error::AgentError;

use super::context::RunContext;
use super::descriptor::{ToolDescriptor, ToolInvoker};
use super::gate::{ConfirmationGate, Decision, PendingCall};

/// Shared, ordered log of what happened during a test.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().expect("event log").clone()
}

pub enum Outcome {
    Output(String),
    Fail(String),
}

/// Invoker that records each call and replies with a fixed outcome.
pub struct RecordingInvoker {
    name: String,
    outcome: Outcome,
    calls: Mutex<Vec<(RunContext, String)>>,
    log: EventLog,
}

impl RecordingInvoker {
    pub fn returning(name: &str, output: &str, log: EventLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            outcome: Outcome::Output(output.to_string()),
            calls: Mutex::new(Vec::new()),
            log,
        })
    }

    pub fn failing(name: &str, message: &str, log: EventLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            outcome: Outcome::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
            log,
        })
    }

    pub fn calls(&self) -> Vec<(RunContext, String)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl ToolInvoker for RecordingInvoker {
    async fn invoke(&self, context: &RunContext, arguments: &str) -> Result<String, AgentError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((context.clone(), arguments.to_string()));
        self.log
            .lock()
            .expect("event log")
            .push(format!("invoke:{}", self.name));
        match &self.outcome {
            Outcome::Output(output) => Ok(output.clone()),
            Outcome::Fail(message) => Err(AgentError::ToolExecution {
                tool_name: self.name.clone(),
                message: message.clone(),
            }),
        }
    }
}

/// Gate that answers from a script and records what it was asked.
pub struct ScriptedGate {
    answers: Mutex<Vec<Decision>>,
    asked: Mutex<Vec<PendingCall>>,
    log: EventLog,
}

impl ScriptedGate {
    /// Answers are consumed front to back; an exhausted script denies.
    pub fn new(answers: Vec<Decision>, log: EventLog) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.into_iter().rev().collect()),
            asked: Mutex::new(Vec::new()),
            log,
        })
    }

    pub fn asked(&self) -> Vec<PendingCall> {
        self.asked.lock().expect("asked lock").clone()
    }
}

#[async_trait]
impl ConfirmationGate for ScriptedGate {
    async fn confirm(&self, call: &PendingCall) -> Decision {
        self.asked.lock().expect("asked lock").push(call.clone());
        self.log
            .lock()
            .expect("event log")
            .push(format!("confirm:{}", call.tool_name));
        self.answers
            .lock()
            .expect("answers lock")
            .pop()
            .unwrap_or(Decision::Deny)
    }
}

pub fn descriptor(name: &str, invoker: Arc<RecordingInvoker>) -> ToolDescriptor {
    ToolDescriptor::new(
        name,
        format!("{name} tool"),
        json!({"type": "object", "properties": {"query": {"type": "string"}}}),
        invoker,
    )
}
