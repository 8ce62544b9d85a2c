use super::*;
use crate::chat::ChatMessage;
use crate::{FunctionCall, ToolCall};

fn tool_call(id: &str, name: &str, arguments: &str) -> ToolCall {
    ToolCall {
        id: id.to_string(),
        call_type: "function".to_string(),
        function: FunctionCall {
            name: name.to_string(),
            arguments: arguments.to_string(),
        },
    }
}

#[test]
fn build_input_items_maps_text_message() {
    let message = ChatMessage::user().content("search for cats").build();
    let items = build_input_items(&[message]);

    assert_eq!(items.len(), 1);
    match &items[0] {
        ResponsesInputItem::Message(msg) => {
            assert_eq!(msg.role, "user");
            assert_eq!(msg.content.len(), 1);
            match &msg.content[0] {
                ResponsesInputContent::Text { text } => assert_eq!(text, "search for cats"),
                _ => panic!("expected text content"),
            }
        }
        _ => panic!("expected message item"),
    }
}

#[test]
fn build_input_items_maps_assistant_text_message() {
    let message = ChatMessage::assistant()
        .content("Please confirm the call to GoogleSearch_Search")
        .build();
    let items = build_input_items(&[message]);

    match &items[0] {
        ResponsesInputItem::Message(msg) => {
            assert_eq!(msg.role, "assistant");
            assert!(matches!(
                msg.content[0],
                ResponsesInputContent::OutputText { .. }
            ));
        }
        _ => panic!("expected message item"),
    }
}

#[test]
fn build_input_items_maps_tool_use_and_result() {
    let call = tool_call("call_1", "GoogleSearch_Search", "{\"query\":\"cats\"}");
    let use_msg = ChatMessage::assistant().tool_use(vec![call]).build();
    let result_call = tool_call("call_1", "GoogleSearch_Search", "[\"cats.com\"]");
    let result_msg = ChatMessage::assistant()
        .tool_result(vec![result_call])
        .build();

    let items = build_input_items(&[use_msg, result_msg]);

    assert_eq!(items.len(), 2);
    match &items[0] {
        ResponsesInputItem::FunctionCall(call_item) => {
            assert_eq!(call_item.call_id, "call_1");
            assert_eq!(call_item.name, "GoogleSearch_Search");
            assert_eq!(call_item.arguments, "{\"query\":\"cats\"}");
        }
        _ => panic!("expected function_call item"),
    }
    match &items[1] {
        ResponsesInputItem::FunctionCallOutput(output) => {
            assert_eq!(output.call_id, "call_1");
            assert_eq!(output.output, "[\"cats.com\"]");
        }
        _ => panic!("expected function_call_output item"),
    }
}

#[test]
fn function_call_item_serializes_type_tag() {
    let call = tool_call("call_9", "GoogleSearch_Search", "{}");
    let items = build_input_items(&[ChatMessage::assistant().tool_use(vec![call]).build()]);
    let value = serde_json::to_value(&items).unwrap();

    assert_eq!(value[0]["type"], "function_call");
    assert_eq!(value[0]["call_id"], "call_9");
}
