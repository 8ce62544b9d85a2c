mod error;
mod load;
mod paths;
mod resolve;
mod types;

pub use load::load_config;
pub use paths::ConfigPaths;
pub use resolve::Settings;
pub use types::LoggingConfig;
