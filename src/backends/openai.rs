//! OpenAI API client using the Responses endpoint.
//!
//! Only the non-streaming `chat_with_tools` path is implemented; the agent
//! runner needs complete responses to decide whether tools must run.

mod responses;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::chat::{ChatMessage, ChatProvider, ChatResponse, Tool, ToolChoice};
use crate::error::AgentError;

use responses::{build_responses_request, OpenAIResponsesChatResponse, ResponsesRequestParams};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
const DEFAULT_MODEL: &str = "gpt-4.1-nano";

/// Configuration for the OpenAI client.
#[derive(Debug)]
pub struct OpenAIConfig {
    /// API key for authentication with OpenAI.
    pub api_key: String,
    /// Base URL, always ending with a slash.
    pub base_url: Url,
    /// Model identifier.
    pub model: String,
    /// Maximum tokens to generate in responses.
    pub max_tokens: Option<u32>,
    /// Sampling temperature for response randomness.
    pub temperature: Option<f32>,
    /// Agent instructions sent with every request.
    pub system: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// How the model may use tools.
    pub tool_choice: Option<ToolChoice>,
}

/// Function tool as the Responses API expects it (flat, not nested).
#[derive(Serialize, Debug)]
pub struct OpenAITool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Client for OpenAI's Responses API.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct OpenAI {
    pub config: Arc<OpenAIConfig>,
    pub client: Client,
}

impl OpenAI {
    /// Creates a new OpenAI client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Override for the API root (defaults to api.openai.com/v1)
    /// * `model` - Model to use (defaults to "gpt-4.1-nano")
    /// * `max_tokens` - Maximum tokens to generate
    /// * `temperature` - Sampling temperature
    /// * `timeout_seconds` - Request timeout in seconds
    /// * `system` - Agent instructions
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        model: Option<String>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
        timeout_seconds: Option<u64>,
        system: Option<String>,
    ) -> Result<Self, AgentError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        let client = builder.build()?;
        Self::with_client(
            client,
            api_key,
            base_url,
            model,
            max_tokens,
            temperature,
            timeout_seconds,
            system,
        )
    }

    /// Creates a new OpenAI client with a custom HTTP client.
    #[allow(clippy::too_many_arguments)]
    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        base_url: Option<String>,
        model: Option<String>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
        timeout_seconds: Option<u64>,
        system: Option<String>,
    ) -> Result<Self, AgentError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(AgentError::AuthError("Missing OpenAI API key".to_string()));
        }
        let base_url = parse_base_url(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        Ok(Self {
            config: Arc::new(OpenAIConfig {
                api_key,
                base_url,
                model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                max_tokens,
                temperature,
                system,
                timeout_seconds,
                tool_choice: Some(ToolChoice::Auto),
            }),
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    fn responses_url(&self) -> Result<Url, AgentError> {
        self.config
            .base_url
            .join("responses")
            .map_err(|e| AgentError::HttpError(e.to_string()))
    }

    fn log_request_payload<T: Serialize>(&self, label: &str, body: &T) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        if let Ok(json) = serde_json::to_string(body) {
            log::trace!("{label}: {json}");
        }
    }

    async fn send_and_parse<T: DeserializeOwned, B: Serialize>(
        &self,
        body: &B,
        context: &str,
    ) -> Result<T, AgentError> {
        let url = self.responses_url()?;
        self.log_request_payload(context, body);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;
        log::debug!("{context} HTTP status: {}", response.status());
        let status = response.status();
        let resp_text = response.text().await?;
        if !status.is_success() {
            return Err(AgentError::ResponseFormatError {
                message: format!("{context} returned error status: {status}"),
                raw_response: resp_text,
            });
        }
        serde_json::from_str(&resp_text).map_err(|e| AgentError::ResponseFormatError {
            message: format!("Failed to decode {context} response: {e}"),
            raw_response: resp_text,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, AgentError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized)
        .map_err(|e| AgentError::InvalidRequest(format!("invalid base URL {raw}: {e}")))
}

#[async_trait]
impl ChatProvider for OpenAI {
    async fn chat_with_tools(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[Tool]>,
    ) -> Result<Box<dyn ChatResponse>, AgentError> {
        let body = build_responses_request(ResponsesRequestParams {
            config: &self.config,
            messages,
            tools,
        });
        let response: OpenAIResponsesChatResponse = self
            .send_and_parse(&body, "OpenAI responses API")
            .await?;
        Ok(Box::new(response.into_result()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> OpenAI {
        OpenAI::new(
            "sk-test",
            Some(format!("{}/v1", server.url())),
            Some("gpt-4.1".to_string()),
            None,
            None,
            Some(5),
            Some("Be brief.".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let err = OpenAI::new("", None, None, None, None, None, None).unwrap_err();
        assert!(matches!(err, AgentError::AuthError(_)));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = OpenAI::new(
            "sk-test",
            Some("http://localhost:9/v1".to_string()),
            None,
            None,
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:9/v1/");
        assert_eq!(client.model(), DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn chat_with_tools_posts_to_responses_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/responses")
            .match_header("authorization", "Bearer sk-test")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4.1",
                "instructions": "Be brief.",
                "parallel_tool_calls": false
            })))
            .with_status(200)
            .with_body(
                json!({
                    "status": "completed",
                    "output": [{
                        "type": "function_call",
                        "call_id": "call_1",
                        "name": "GoogleSearch_Search",
                        "arguments": "{\"query\":\"cats\"}"
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let tools = [Tool::function(
            "GoogleSearch_Search",
            "Search Google",
            json!({"type": "object"}),
        )];
        let messages = [ChatMessage::user().content("search for cats").build()];
        let response = client
            .chat_with_tools(&messages, Some(&tools))
            .await
            .unwrap();

        mock.assert_async().await;
        let calls = response.tool_calls().unwrap();
        assert_eq!(calls[0].function.name, "GoogleSearch_Search");
    }

    #[tokio::test]
    async fn error_status_keeps_raw_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/responses")
            .with_status(401)
            .with_body("{\"error\":{\"message\":\"bad key\"}}")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .chat(&[ChatMessage::user().content("hi").build()])
            .await
            .unwrap_err();

        match err {
            AgentError::ResponseFormatError { raw_response, .. } => {
                assert!(raw_response.contains("bad key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
