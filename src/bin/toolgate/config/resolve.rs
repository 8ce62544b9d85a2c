use secrecy::SecretString;

use crate::args::CliArgs;
use crate::instructions::RESEARCH_ASSISTANT;

use super::error::ConfigError;
use super::types::AppConfig;

const MODEL_ENV: &str = "OPENAI_MODEL";
const USER_ID_ENV: &str = "ARCADE_USER_ID";

/// Everything the app needs, merged from command line, environment and file.
#[derive(Debug)]
pub struct Settings {
    pub model: String,
    pub openai_api_key: SecretString,
    pub openai_base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_seconds: Option<u64>,
    pub instructions: String,
    pub arcade_api_key: SecretString,
    pub arcade_base_url: Option<String>,
    pub user_id: String,
    pub toolkits: Vec<String>,
    pub require_confirmation: Vec<String>,
    pub agent_name: String,
    pub max_turns: usize,
    pub hooks_display_name: String,
}

impl Settings {
    /// Command line wins over the environment, which wins over the file.
    /// `env` looks up an environment variable; blank values count as unset.
    pub fn resolve<F>(args: &CliArgs, config: &AppConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let model = args
            .model
            .clone()
            .or_else(|| env(MODEL_ENV))
            .or_else(|| config.model.id.clone())
            .ok_or_else(|| ConfigError::Missing {
                what: "model",
                hint: format!("pass --model, set {MODEL_ENV} or [model].id"),
            })?;
        let user_id = args
            .user_id
            .clone()
            .or_else(|| env(USER_ID_ENV))
            .or_else(|| config.arcade.user_id.clone())
            .ok_or_else(|| ConfigError::Missing {
                what: "user id",
                hint: format!("pass --user-id, set {USER_ID_ENV} or [arcade].user_id"),
            })?;
        let openai_api_key = secret_from_env(&env, &config.model.api_key_env, "OpenAI API key")?;
        let arcade_api_key =
            secret_from_env(&env, &config.arcade.api_key_env, "Arcade API key")?;

        let toolkits = if args.toolkits.is_empty() {
            config.arcade.toolkits.clone()
        } else {
            args.toolkits.clone()
        };
        if toolkits.is_empty() {
            return Err(ConfigError::Invalid("toolkits: at least one is required".into()));
        }
        let require_confirmation = if args.confirm.is_empty() {
            config.tools.require_confirmation.clone()
        } else {
            args.confirm.clone()
        };
        let max_turns = args.max_turns.unwrap_or(config.agent.max_turns);
        if max_turns == 0 {
            return Err(ConfigError::Invalid("max_turns: must be at least 1".into()));
        }

        Ok(Self {
            model,
            openai_api_key,
            openai_base_url: config.model.base_url.clone(),
            temperature: config.model.temperature,
            max_tokens: config.model.max_tokens,
            timeout_seconds: config.model.timeout_seconds,
            instructions: config
                .model
                .instructions
                .clone()
                .unwrap_or_else(|| RESEARCH_ASSISTANT.to_string()),
            arcade_api_key,
            arcade_base_url: config.arcade.base_url.clone(),
            user_id,
            toolkits,
            require_confirmation,
            agent_name: config.agent.name.clone(),
            max_turns,
            hooks_display_name: config.agent.hooks_display_name.clone(),
        })
    }
}

fn secret_from_env(
    env: &impl Fn(&str) -> Option<String>,
    var: &str,
    what: &'static str,
) -> Result<SecretString, ConfigError> {
    env(var)
        .map(SecretString::new)
        .ok_or_else(|| ConfigError::Missing {
            what,
            hint: format!("set {var}"),
        })
}
