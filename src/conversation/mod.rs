//! Interactive chat loop that keeps the transcript and turns an operator
//! denial into an ordinary, recoverable conversation turn.

use std::sync::Arc;

use crate::agent::AgentRun;
use crate::chat::ChatMessage;
use crate::console::{self, SharedConsole};
use crate::error::AgentError;
use crate::tools::RunContext;

/// Typing this at the prompt, in any case, ends the session.
pub const EXIT_KEYWORD: &str = "exit";

const PROMPT: &str = "You: ";

pub fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case(EXIT_KEYWORD)
}

/// How a single user turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The agent answered
    Completed { output: String },
    /// The operator denied a gated tool; `message` is the assistant's
    /// cancellation reply
    Cancelled { tool_name: String, message: String },
}

impl TurnOutcome {
    /// Text to show the operator.
    pub fn message(&self) -> &str {
        match self {
            TurnOutcome::Completed { output } => output,
            TurnOutcome::Cancelled { message, .. } => message,
        }
    }
}

pub struct Conversation {
    runner: Arc<dyn AgentRun>,
    context: RunContext,
    transcript: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(runner: Arc<dyn AgentRun>, context: RunContext) -> Self {
        Self {
            runner,
            context,
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Sends one user line through the agent.
    ///
    /// On completion the transcript becomes the run's full transcript. On a
    /// denial it gets three synthetic turns that record the cancellation.
    /// Every other error is returned.
    pub async fn send(&mut self, input: &str) -> Result<TurnOutcome, AgentError> {
        self.transcript
            .push(ChatMessage::user().content(input).build());
        match self.runner.run(&self.transcript, &self.context).await {
            Ok(result) => {
                let output = result.final_output.clone();
                self.transcript = result.into_transcript();
                Ok(TurnOutcome::Completed { output })
            }
            Err(AgentError::ToolDenied { tool_name }) => {
                log::info!("call to {tool_name} denied by operator");
                let message = self.record_cancellation(&tool_name);
                Ok(TurnOutcome::Cancelled { tool_name, message })
            }
            Err(err) => Err(err),
        }
    }

    fn record_cancellation(&mut self, tool_name: &str) -> String {
        let message = format!(
            "Sure, I cancelled the call to {tool_name}. What else can I do for you today?"
        );
        self.transcript.extend([
            ChatMessage::assistant()
                .content(format!("Please confirm the call to {tool_name}"))
                .build(),
            ChatMessage::user()
                .content("I changed my mind, please don't do it!")
                .build(),
            ChatMessage::assistant().content(message.clone()).build(),
        ]);
        message
    }

    /// Reads lines from `console` until end of input or the exit keyword.
    pub async fn run_loop(&mut self, console: &SharedConsole) -> Result<(), AgentError> {
        loop {
            let shared = console.clone();
            let line = tokio::task::spawn_blocking(move || {
                console::lock(&shared).read_line(PROMPT)
            })
            .await
            .map_err(|e| AgentError::Generic(format!("console reader stopped: {e}")))??;

            let Some(line) = line else {
                log::debug!("end of input, leaving chat loop");
                return Ok(());
            };
            if is_exit(&line) {
                return Ok(());
            }

            let outcome = self.send(&line).await?;
            console::lock(console).write_line(outcome.message())?;
        }
    }
}
