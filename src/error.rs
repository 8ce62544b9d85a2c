use thiserror::Error;

/// Error types that can occur while running the agent or its tools.
#[derive(Debug, Error)]
pub enum AgentError {
    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Authentication and authorization errors
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Invalid request parameters or format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Errors returned by the model provider
    #[error("Provider error: {0}")]
    ProviderError(String),
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
    /// Generic error
    #[error("Generic error: {0}")]
    Generic(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// Tool configuration error
    #[error("Tool configuration error: {0}")]
    ToolConfigError(String),
    /// The model asked for a tool that is not registered on the agent
    #[error("Tool not found: {0}")]
    ToolNotFound(String),
    /// The tool ran and reported a failure
    #[error("Tool {tool_name} failed: {message}")]
    ToolExecution { tool_name: String, message: String },
    /// The operator refused to let the tool run
    #[error("User denied call to tool {tool_name}")]
    ToolDenied { tool_name: String },
    /// The run kept calling tools past its turn limit
    #[error("Max turns ({0}) exceeded")]
    MaxTurnsExceeded(usize),
    /// Console read/write failure
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AgentError {
    /// Returns true when the error is an operator denial.
    pub fn is_denial(&self) -> bool {
        matches!(self, AgentError::ToolDenied { .. })
    }

    /// Name of the denied tool, if this is a denial.
    pub fn denied_tool(&self) -> Option<&str> {
        match self {
            AgentError::ToolDenied { tool_name } => Some(tool_name),
            _ => None,
        }
    }
}

/// Converts reqwest HTTP errors into AgentErrors
impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        AgentError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
