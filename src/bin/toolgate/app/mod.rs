use std::sync::Arc;

use clap::Parser;
use secrecy::{ExposeSecret, SecretString};

use toolgate::agent::LoggingHooks;
use toolgate::arcade::ArcadeClient;
use toolgate::backends::openai::OpenAI;
use toolgate::console::{self, Console, SharedConsole};
use toolgate::tools::{prepare_tools, ConfirmationGate, ConfirmationPolicy, ConsoleGate};
use toolgate::{Agent, Conversation, RunContext, ToolDescriptor};

use crate::args::CliArgs;
use crate::config::{load_config, Settings};
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;
    if !loaded.config_exists {
        log::info!(
            "no config at {}, using defaults",
            loaded.paths.config_file.display()
        );
    }
    let settings = Settings::resolve(&args, &loaded.config, |key| std::env::var(key).ok())?;

    let console = Console::stdio().shared();
    let context = RunContext::new(settings.user_id.clone());
    let tools = load_tools(&settings, &console, &context).await?;
    log::info!("{} tools ready for {}", tools.len(), settings.model);

    let provider = OpenAI::new(
        settings.openai_api_key.expose_secret().as_str(),
        settings.openai_base_url.clone(),
        Some(settings.model.clone()),
        settings.max_tokens,
        settings.temperature,
        settings.timeout_seconds,
        Some(settings.instructions.clone()),
    )?;
    let agent = Agent::builder()
        .name(settings.agent_name.clone())
        .provider(Arc::new(provider))
        .tools(tools)
        .hooks(Arc::new(LoggingHooks::new(settings.hooks_display_name.clone())))
        .max_turns(settings.max_turns)
        .build()?;

    let mut conversation = Conversation::new(Arc::new(agent), context);
    conversation.run_loop(&console).await?;
    Ok(())
}

/// Fetches the configured toolkits, gates the listed tools and authorizes
/// every tool for the user before the chat starts.
async fn load_tools(
    settings: &Settings,
    shared: &SharedConsole,
    context: &RunContext,
) -> anyhow::Result<Vec<ToolDescriptor>> {
    let arcade = ArcadeClient::new(
        SecretString::new(settings.arcade_api_key.expose_secret().clone()),
        settings.arcade_base_url.clone(),
        settings.timeout_seconds,
    )?;
    let gate: Arc<dyn ConfirmationGate> = Arc::new(ConsoleGate::new(shared.clone()));
    let policy = ConfirmationPolicy::new(settings.require_confirmation.iter().cloned());

    let tools = prepare_tools(
        &arcade,
        &arcade,
        &settings.toolkits,
        &policy,
        gate,
        context,
        |tool, url| {
            let shown = console::lock(shared)
                .write_line(&format!("Authorize {tool} by visiting: {url}"));
            if let Err(err) = shown {
                log::warn!("could not show authorization link for {tool}: {err}");
            }
        },
    )
    .await?;
    Ok(tools)
}
