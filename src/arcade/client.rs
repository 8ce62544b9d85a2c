use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AgentError;
use crate::tools::{Authorization, RunContext, ToolAuthorizer, ToolCatalog, ToolDescriptor, ToolInvoker};

use super::types::{
    AuthStatus, AuthorizationResponse, AuthorizeRequest, ExecuteRequest, ExecuteResponse,
    FormattedToolsPage,
};

const DEFAULT_BASE_URL: &str = "https://api.arcade.dev/";
const PAGE_SIZE: usize = 100;
/// Seconds the status endpoint may hold a long-poll open.
const AUTH_WAIT_SECONDS: u64 = 30;
const MAX_AUTH_POLLS: usize = 20;

/// Configuration for the Arcade client.
#[derive(Debug)]
pub struct ArcadeConfig {
    pub api_key: SecretString,
    pub base_url: Url,
    pub page_size: usize,
    pub auth_wait_seconds: u64,
    pub max_auth_polls: usize,
}

/// Client for the Arcade tool platform: catalog, authorization and execution.
#[derive(Debug, Clone)]
pub struct ArcadeClient {
    config: Arc<ArcadeConfig>,
    client: Client,
}

impl ArcadeClient {
    pub fn new(
        api_key: SecretString,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, AgentError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        Self::with_client(builder.build()?, api_key, base_url)
    }

    pub fn with_client(
        client: Client,
        api_key: SecretString,
        base_url: Option<String>,
    ) -> Result<Self, AgentError> {
        if api_key.expose_secret().is_empty() {
            return Err(AgentError::AuthError("Missing Arcade API key".to_string()));
        }
        let base_url = parse_base_url(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        Ok(Self {
            config: Arc::new(ArcadeConfig {
                api_key,
                base_url,
                page_size: PAGE_SIZE,
                auth_wait_seconds: AUTH_WAIT_SECONDS,
                max_auth_polls: MAX_AUTH_POLLS,
            }),
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Runs a tool for `user_id` and returns its output as text.
    ///
    /// String outputs are returned verbatim, anything else as compact JSON.
    pub async fn execute(
        &self,
        tool_name: &str,
        input: Value,
        user_id: &str,
    ) -> Result<String, AgentError> {
        let qualified = qualified_tool_name(tool_name);
        let body = ExecuteRequest {
            tool_name: &qualified,
            input,
            user_id,
        };
        let request = self.client.post(self.url("v1/tools/execute")?).json(&body);
        let response: ExecuteResponse = self.send(request, "Arcade execute").await?;

        let output = response.output.unwrap_or_default();
        if let Some(error) = output.error {
            return Err(AgentError::ToolExecution {
                tool_name: tool_name.to_string(),
                message: error.message,
            });
        }
        if response.success == Some(false) {
            return Err(AgentError::ToolExecution {
                tool_name: tool_name.to_string(),
                message: "tool reported failure".to_string(),
            });
        }
        Ok(match output.value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
        })
    }

    fn url(&self, path: &str) -> Result<Url, AgentError> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| AgentError::HttpError(e.to_string()))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, AgentError> {
        let response = request
            .bearer_auth(self.config.api_key.expose_secret())
            .send()
            .await?;
        let status = response.status();
        log::debug!("{context} HTTP status: {status}");
        let text = response.text().await?;
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AgentError::AuthError(format!("{context}: {status}: {text}")));
        }
        if !status.is_success() {
            return Err(AgentError::ResponseFormatError {
                message: format!("{context} returned error status: {status}"),
                raw_response: text,
            });
        }
        serde_json::from_str(&text).map_err(|e| AgentError::ResponseFormatError {
            message: format!("Failed to decode {context} response: {e}"),
            raw_response: text,
        })
    }
}

#[async_trait]
impl ToolCatalog for ArcadeClient {
    async fn tools(&self, toolkit: &str) -> Result<Vec<ToolDescriptor>, AgentError> {
        let mut tools = Vec::new();
        let mut offset = 0;
        loop {
            let mut url = self.url("v1/formatted_tools")?;
            url.query_pairs_mut()
                .append_pair("toolkit", toolkit)
                .append_pair("format", "openai")
                .append_pair("limit", &self.config.page_size.to_string())
                .append_pair("offset", &offset.to_string());
            let page: FormattedToolsPage = self
                .send(self.client.get(url), "Arcade formatted tools")
                .await?;

            let fetched = page.items.len();
            for item in page.items {
                let function = item.function;
                let invoker = Arc::new(ArcadeInvoker {
                    client: self.clone(),
                    tool_name: function.name.clone(),
                });
                tools.push(ToolDescriptor::new(
                    function.name,
                    function.description,
                    function.parameters,
                    invoker,
                ));
            }
            offset += fetched;
            let exhausted = page.total_count.is_some_and(|total| offset >= total);
            if fetched < self.config.page_size || exhausted {
                break;
            }
        }
        if tools.is_empty() {
            return Err(AgentError::ToolConfigError(format!(
                "toolkit {toolkit} has no tools"
            )));
        }
        Ok(tools)
    }
}

#[async_trait]
impl ToolAuthorizer for ArcadeClient {
    async fn authorize(
        &self,
        tool_name: &str,
        context: &RunContext,
    ) -> Result<Authorization, AgentError> {
        let qualified = qualified_tool_name(tool_name);
        let body = AuthorizeRequest {
            tool_name: &qualified,
            user_id: &context.user_id,
        };
        let request = self.client.post(self.url("v1/tools/authorize")?).json(&body);
        let response: AuthorizationResponse = self.send(request, "Arcade authorize").await?;
        match response.status {
            AuthStatus::Completed => Ok(Authorization::Completed),
            AuthStatus::Failed => Err(AgentError::AuthError(format!(
                "authorization for {tool_name} failed"
            ))),
            AuthStatus::Pending | AuthStatus::Unknown => {
                let id = response.id.ok_or_else(|| {
                    AgentError::AuthError(format!(
                        "pending authorization for {tool_name} has no id"
                    ))
                })?;
                Ok(Authorization::Pending {
                    id,
                    url: response.url,
                })
            }
        }
    }

    async fn wait_for_completion(&self, id: &str) -> Result<(), AgentError> {
        let wait = self.config.auth_wait_seconds;
        for attempt in 1..=self.config.max_auth_polls {
            let mut url = self.url("v1/auth/status")?;
            url.query_pairs_mut()
                .append_pair("id", id)
                .append_pair("wait", &wait.to_string());
            let request = self
                .client
                .get(url)
                .timeout(Duration::from_secs(wait + 10));
            let response: AuthorizationResponse = self.send(request, "Arcade auth status").await?;
            match response.status {
                AuthStatus::Completed => return Ok(()),
                AuthStatus::Failed => {
                    return Err(AgentError::AuthError(format!("authorization {id} failed")))
                }
                AuthStatus::Pending | AuthStatus::Unknown => {
                    log::debug!("authorization {id} still pending (poll {attempt})");
                }
            }
        }
        Err(AgentError::AuthError(format!(
            "authorization {id} did not complete"
        )))
    }
}

/// Invokes one Arcade tool on behalf of the run's user.
pub struct ArcadeInvoker {
    client: ArcadeClient,
    tool_name: String,
}

#[async_trait]
impl ToolInvoker for ArcadeInvoker {
    async fn invoke(&self, context: &RunContext, arguments: &str) -> Result<String, AgentError> {
        let input = if arguments.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(arguments)?
        };
        self.client
            .execute(&self.tool_name, input, &context.user_id)
            .await
    }
}

/// Maps a model-facing name (`GoogleSearch_Search`) to Arcade's qualified
/// form (`GoogleSearch.Search`). Names already qualified pass through.
pub fn qualified_tool_name(name: &str) -> String {
    if name.contains('.') {
        return name.to_string();
    }
    name.replacen('_', ".", 1)
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
