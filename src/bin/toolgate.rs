#[path = "toolgate/app/mod.rs"]
mod app;
#[path = "toolgate/args.rs"]
mod args;
#[path = "toolgate/config/mod.rs"]
mod config;
#[path = "toolgate/instructions.rs"]
mod instructions;
#[path = "toolgate/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
