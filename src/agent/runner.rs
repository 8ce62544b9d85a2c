use crate::chat::{ChatMessage, Usage};
use crate::error::AgentError;
use crate::tools::RunContext;
use crate::{FunctionCall, ToolCall};

use super::{Agent, RunResult};

/// Drives the model/tool loop for one run.
pub struct Runner;

impl Runner {
    /// Runs `agent` over `input` until the model answers without calling a
    /// tool.
    ///
    /// Tool calls from one model response run sequentially in the order the
    /// model issued them. Any tool error, including an operator denial, ends
    /// the run and is returned as-is.
    pub async fn run(
        agent: &Agent,
        input: &[ChatMessage],
        context: &RunContext,
    ) -> Result<RunResult, AgentError> {
        let mut transcript = input.to_vec();
        let schemas = agent.tools.schemas();
        let tools = if schemas.is_empty() {
            None
        } else {
            Some(schemas.as_slice())
        };
        let mut usage = Usage::default();

        if let Some(hooks) = &agent.hooks {
            hooks.on_start(context, &agent.name);
        }
        for turn in 1..=agent.max_turns {
            let response = agent.provider.chat_with_tools(&transcript, tools).await?;
            if let Some(turn_usage) = response.usage() {
                usage.accumulate(&turn_usage);
            }
            let text = response.text().unwrap_or_default();
            let calls = response.tool_calls().unwrap_or_default();
            log::debug!(
                "agent {} turn {turn}: {} tool calls",
                agent.name,
                calls.len()
            );

            if calls.is_empty() {
                transcript.push(ChatMessage::assistant().content(text.clone()).build());
                if let Some(hooks) = &agent.hooks {
                    hooks.on_end(context, &agent.name);
                }
                log::info!(
                    "agent {} finished after {turn} turns, {} tokens",
                    agent.name,
                    usage.total_tokens
                );
                return Ok(RunResult {
                    final_output: text,
                    transcript,
                    usage,
                });
            }

            if !text.trim().is_empty() {
                transcript.push(ChatMessage::assistant().content(text).build());
            }
            transcript.push(ChatMessage::assistant().tool_use(calls.clone()).build());
            let results = execute_calls(agent, &calls, context).await?;
            transcript.push(ChatMessage::assistant().tool_result(results).build());
        }
        Err(AgentError::MaxTurnsExceeded(agent.max_turns))
    }
}

async fn execute_calls(
    agent: &Agent,
    calls: &[ToolCall],
    context: &RunContext,
) -> Result<Vec<ToolCall>, AgentError> {
    let mut results = Vec::with_capacity(calls.len());
    for call in calls {
        let name = call.function.name.as_str();
        if let Some(hooks) = &agent.hooks {
            hooks.on_tool_start(context, &agent.name, name);
        }
        let output = agent
            .tools
            .execute(name, &call.function.arguments, context)
            .await?;
        if let Some(hooks) = &agent.hooks {
            hooks.on_tool_end(context, &agent.name, name);
        }
        results.push(tool_result_call(call, output));
    }
    Ok(results)
}

fn tool_result_call(call: &ToolCall, output: String) -> ToolCall {
    ToolCall {
        id: call.id.clone(),
        call_type: call.call_type.clone(),
        function: FunctionCall {
            name: call.function.name.clone(),
            arguments: output,
        },
    }
}
