use async_trait::async_trait;

use crate::console::{self, SharedConsole};

/// A tool call waiting for an operator decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCall {
    pub tool_name: String,
    /// Raw JSON arguments as produced by the model
    pub arguments: String,
}

impl PendingCall {
    pub fn new(tool_name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: arguments.into(),
        }
    }

    /// Arguments pretty-printed when they parse as JSON, verbatim otherwise.
    pub fn display_arguments(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.arguments)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| self.arguments.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Deny,
}

/// Human checkpoint in front of sensitive tools.
///
/// The call blocks the enclosing run until the operator answers; there is no
/// timeout.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    async fn confirm(&self, call: &PendingCall) -> Decision;
}

/// Asks on the operator console with a `[y/N]` prompt.
pub struct ConsoleGate {
    console: SharedConsole,
}

impl ConsoleGate {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

#[async_trait]
impl ConfirmationGate for ConsoleGate {
    async fn confirm(&self, call: &PendingCall) -> Decision {
        let console = self.console.clone();
        let call = call.clone();
        // stdin reads block, keep them off the async workers
        tokio::task::spawn_blocking(move || ask(&console, &call))
            .await
            .unwrap_or_else(|err| {
                log::warn!("confirmation prompt aborted: {err}");
                Decision::Deny
            })
    }
}

fn ask(shared: &SharedConsole, call: &PendingCall) -> Decision {
    let mut console = console::lock(shared);
    let shown = console
        .write_line(&format!("[tool approval] {}", call.tool_name))
        .and_then(|_| console.write_line(&call.display_arguments()));
    if let Err(err) = shown {
        log::warn!("failed to show confirmation prompt: {err}");
        return Decision::Deny;
    }
    match console.read_line("Run tool? [y/N]: ") {
        Ok(Some(answer)) => parse_answer(&answer),
        Ok(None) => Decision::Deny,
        Err(err) => {
            log::warn!("failed to read confirmation answer: {err}");
            Decision::Deny
        }
    }
}

fn parse_answer(answer: &str) -> Decision {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Decision::Accept,
        _ => Decision::Deny,
    }
}
