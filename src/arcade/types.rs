use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of `GET /v1/formatted_tools`.
#[derive(Deserialize, Debug)]
pub(crate) struct FormattedToolsPage {
    #[serde(default)]
    pub items: Vec<FormattedTool>,
    #[serde(default)]
    pub total_count: Option<usize>,
}

/// A tool definition in OpenAI function format.
#[derive(Deserialize, Debug)]
pub(crate) struct FormattedTool {
    pub function: FormattedFunction,
}

#[derive(Deserialize, Debug)]
pub(crate) struct FormattedFunction {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "empty_object")]
    pub parameters: Value,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

#[derive(Serialize, Debug)]
pub(crate) struct ExecuteRequest<'a> {
    pub tool_name: &'a str,
    pub input: Value,
    pub user_id: &'a str,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ExecuteResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub output: Option<ExecuteOutput>,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ExecuteOutput {
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub error: Option<ExecuteError>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ExecuteError {
    pub message: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct AuthorizeRequest<'a> {
    pub tool_name: &'a str,
    pub user_id: &'a str,
}

/// Body of both `POST /v1/tools/authorize` and `GET /v1/auth/status`.
#[derive(Deserialize, Debug)]
pub(crate) struct AuthorizationResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub status: AuthStatus,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AuthStatus {
    Pending,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}
