use serde::Serialize;

use crate::chat::{ChatMessage, Tool, ToolChoice};

use super::super::{OpenAIConfig, OpenAITool};
use super::input::{build_input_items, ResponsesInputItem};

#[derive(Serialize, Debug)]
pub struct OpenAIResponsesRequest {
    pub model: String,
    pub input: Vec<ResponsesInputItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<OpenAITool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_tool_calls: Option<bool>,
}

pub struct ResponsesRequestParams<'a> {
    pub config: &'a OpenAIConfig,
    pub messages: &'a [ChatMessage],
    pub tools: Option<&'a [Tool]>,
}

pub fn build_responses_request(params: ResponsesRequestParams<'_>) -> OpenAIResponsesRequest {
    let tools = build_request_tools(params.tools);
    let tool_choice = build_request_tool_choice(&tools, &params.config.tool_choice);
    // Tool calls are gated one at a time, so ask for them one at a time.
    let parallel_tool_calls = tools.as_ref().map(|_| false);
    OpenAIResponsesRequest {
        model: params.config.model.clone(),
        input: build_input_items(params.messages),
        instructions: params.config.system.clone(),
        max_output_tokens: params.config.max_tokens,
        temperature: params.config.temperature,
        stream: false,
        tools,
        tool_choice,
        parallel_tool_calls,
    }
}

fn build_request_tools(tools: Option<&[Tool]>) -> Option<Vec<OpenAITool>> {
    match tools {
        Some(tools) if !tools.is_empty() => Some(map_function_tools(tools)),
        _ => None,
    }
}

fn build_request_tool_choice(
    tools: &Option<Vec<OpenAITool>>,
    tool_choice: &Option<ToolChoice>,
) -> Option<ToolChoice> {
    if tools.is_some() {
        tool_choice.clone()
    } else {
        None
    }
}

fn map_function_tools(tools: &[Tool]) -> Vec<OpenAITool> {
    tools
        .iter()
        .map(|tool| OpenAITool {
            tool_type: tool.tool_type.clone(),
            name: tool.function.name.clone(),
            description: tool.function.description.clone(),
            parameters: tool.function.parameters.clone(),
        })
        .collect()
}
