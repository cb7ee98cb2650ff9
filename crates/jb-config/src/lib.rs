mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod upload_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use upload_config::UploadConfig;

const CONFIG_DIR_NAME: &str = ".jb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

const DEFAULT_IDENTITY_DIR: &str = "identity";
const DEFAULT_COOKIE_MAX_AGE_DAYS: u32 = 7;
const MIN_COOKIE_MAX_AGE_DAYS: u32 = 1;
const MAX_COOKIE_MAX_AGE_DAYS: u32 = 365;
const SESSION_DIR_NAME: &str = "jb";

const DEFAULT_MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;
const DEFAULT_ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
