use serde::{Deserialize, Serialize};

const DEFAULT_MAX_TURNS: usize = 10;
const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub arcade: ArcadeConfig,
    pub tools: ToolsConfig,
    pub agent: AgentConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    pub id: Option<String>,
    /// Environment variable holding the OpenAI key
    pub api_key_env: String,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_seconds: Option<u64>,
    /// Replaces the built-in research assistant instructions
    pub instructions: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: None,
            temperature: None,
            max_tokens: None,
            timeout_seconds: None,
            instructions: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub api_key_env: String,
    pub base_url: Option<String>,
    pub user_id: Option<String>,
    pub toolkits: Vec<String>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ARCADE_API_KEY".to_string(),
            base_url: None,
            user_id: None,
            toolkits: vec!["GoogleSearch".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Tools that must be approved at the console before each call
    pub require_confirmation: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            require_confirmation: vec!["GoogleSearch_Search".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,
    pub max_turns: usize,
    pub hooks_display_name: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "research_assistant".to_string(),
            max_turns: DEFAULT_MAX_TURNS,
            hooks_display_name: "toolgate".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<String>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}
