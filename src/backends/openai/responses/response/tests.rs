use super::*;

fn parse(body: &str) -> OpenAIResponsesChatResponse {
    serde_json::from_str(body).unwrap()
}

#[test]
fn text_comes_from_last_message() {
    let response = parse(
        r#"{
            "status": "completed",
            "output": [
                {"type": "reasoning", "summary": []},
                {"type": "message", "role": "assistant", "content": [
                    {"type": "output_text", "text": "Cats are"},
                    {"type": "output_text", "text": " great."}
                ]}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 4, "total_tokens": 14}
        }"#,
    );

    assert_eq!(response.text().as_deref(), Some("Cats are great."));
    assert!(response.tool_calls().is_none());
    assert_eq!(response.usage().map(|u| u.total_tokens), Some(14));
}

#[test]
fn function_calls_prefer_call_id() {
    let response = parse(
        r#"{
            "output": [
                {"type": "function_call", "id": "fc_1", "call_id": "call_1",
                 "name": "GoogleSearch_Search", "arguments": "{\"query\":\"cats\"}"}
            ]
        }"#,
    );

    let calls = response.tool_calls().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].id, "call_1");
    assert_eq!(calls[0].function.name, "GoogleSearch_Search");
    assert_eq!(calls[0].function.arguments, "{\"query\":\"cats\"}");
}

#[test]
fn function_call_without_any_id_is_skipped() {
    let response = parse(
        r#"{"output": [{"type": "function_call", "name": "x", "arguments": "{}"}]}"#,
    );
    assert!(response.tool_calls().is_none());
}

#[test]
fn refusal_is_reported_as_text() {
    let response = parse(
        r#"{"output": [{"type": "message", "content": [{"type": "refusal", "refusal": "No."}]}]}"#,
    );
    assert_eq!(response.text().as_deref(), Some("No."));
}

#[test]
fn embedded_error_becomes_provider_error() {
    let response = parse(
        r#"{"status": "failed", "error": {"code": "server_error", "message": "boom"}, "output": []}"#,
    );
    let err = response.into_result().unwrap_err();
    assert!(matches!(err, AgentError::ProviderError(ref msg) if msg.contains("boom")));
}

#[test]
fn display_shows_tool_calls_without_text() {
    let response = parse(
        r#"{"output": [{"type": "function_call", "call_id": "call_1",
            "name": "GoogleSearch_Search", "arguments": "{}"}]}"#,
    );
    let rendered = format!("{response}");
    assert!(rendered.contains("\"name\": \"GoogleSearch_Search\""));
}
