use serde::Serialize;

use crate::chat::{ChatMessage, ChatRole, MessageType};
use crate::ToolCall;

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum ResponsesInputItem {
    Message(ResponsesInputMessage),
    FunctionCall(ResponsesFunctionCallItem),
    FunctionCallOutput(ResponsesFunctionCallOutputItem),
}

#[derive(Serialize, Debug)]
pub struct ResponsesInputMessage {
    pub role: String,
    pub content: Vec<ResponsesInputContent>,
}

#[derive(Serialize, Debug)]
#[serde(tag = "type")]
pub enum ResponsesInputContent {
    #[serde(rename = "input_text")]
    Text { text: String },
    #[serde(rename = "output_text")]
    OutputText { text: String },
}

#[derive(Serialize, Debug)]
pub struct ResponsesFunctionCallItem {
    #[serde(rename = "type")]
    pub item_type: ResponsesFunctionCallItemType,
    pub call_id: String,
    pub name: String,
    pub arguments: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ResponsesFunctionCallItemType {
    FunctionCall,
}

#[derive(Serialize, Debug)]
pub struct ResponsesFunctionCallOutputItem {
    #[serde(rename = "type")]
    pub item_type: ResponsesFunctionCallOutputItemType,
    pub call_id: String,
    pub output: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ResponsesFunctionCallOutputItemType {
    FunctionCallOutput,
}

pub fn build_input_items(messages: &[ChatMessage]) -> Vec<ResponsesInputItem> {
    messages.iter().flat_map(map_message_items).collect()
}

fn map_message_items(message: &ChatMessage) -> Vec<ResponsesInputItem> {
    match &message.message_type {
        MessageType::ToolUse(calls) => map_tool_calls(calls),
        MessageType::ToolResult(results) => map_tool_results(results),
        MessageType::Text => vec![ResponsesInputItem::Message(map_message(message))],
    }
}

fn map_message(message: &ChatMessage) -> ResponsesInputMessage {
    ResponsesInputMessage {
        role: message.role.as_str().to_string(),
        content: vec![text_content_for_role(&message.role, &message.content)],
    }
}

// Assistant history must be replayed as output_text, user turns as input_text.
fn text_content_for_role(role: &ChatRole, text: &str) -> ResponsesInputContent {
    match role {
        ChatRole::User => ResponsesInputContent::Text {
            text: text.to_string(),
        },
        ChatRole::Assistant => ResponsesInputContent::OutputText {
            text: text.to_string(),
        },
    }
}

fn map_tool_calls(calls: &[ToolCall]) -> Vec<ResponsesInputItem> {
    calls
        .iter()
        .map(|call| {
            ResponsesInputItem::FunctionCall(ResponsesFunctionCallItem {
                item_type: ResponsesFunctionCallItemType::FunctionCall,
                call_id: call.id.clone(),
                name: call.function.name.clone(),
                arguments: call.function.arguments.clone(),
            })
        })
        .collect()
}

fn map_tool_results(results: &[ToolCall]) -> Vec<ResponsesInputItem> {
    results
        .iter()
        .map(|result| {
            ResponsesInputItem::FunctionCallOutput(ResponsesFunctionCallOutputItem {
                item_type: ResponsesFunctionCallOutputItemType::FunctionCallOutput,
                call_id: result.id.clone(),
                output: result.function.arguments.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests;
