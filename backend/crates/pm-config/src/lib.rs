mod config;
mod error;
mod log_level;
mod logging_config;
mod validation_config;


pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "PM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".pm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_ALLOW_UNKNOWN_FIELDS: bool = false;
const DEFAULT_LIFECYCLE_STATES: [&str; 3] = ["ACTIVE", "ARCHIVED", "COMPLETED"];
