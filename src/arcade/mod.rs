//! Arcade-hosted tools: toolkit catalog, per-user authorization and
//! execution.

mod client;
mod types;

pub use client::{qualified_tool_name, ArcadeClient, ArcadeConfig, ArcadeInvoker};
