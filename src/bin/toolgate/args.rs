use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "toolgate",
    about = "Research assistant chat that asks before running sensitive tools"
)]
pub struct CliArgs {
    /// Path to the config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Model id (overrides OPENAI_MODEL)
    #[arg(long, short = 'm')]
    pub model: Option<String>,
    /// Arcade user the tools run for (overrides ARCADE_USER_ID)
    #[arg(long, short = 'u')]
    pub user_id: Option<String>,
    /// Toolkit to load; repeat for several
    #[arg(long = "toolkit")]
    pub toolkits: Vec<String>,
    /// Tool that needs operator approval; repeat for several
    #[arg(long = "confirm")]
    pub confirm: Vec<String>,
    #[arg(long)]
    pub max_turns: Option<usize>,
}
