mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "KANBAN_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".kanban";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
