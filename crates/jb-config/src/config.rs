use crate::{
    ApiConfig, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult, LoggingConfig,
    SESSION_DIR_NAME, StorageConfig, UploadConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for JB_CONFIG_DIR env var, else use ~/.jb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply JB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: JB_CONFIG_DIR env var > ~/.jb/
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("JB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.storage.validate()?;
        self.upload.validate()?;

        Ok(())
    }

    /// Directory of the durable identity tiers.
    pub fn identity_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.identity_dir))
    }

    /// Directory of the session identity tier.
    ///
    /// Lives under the per-login runtime directory when the platform has one,
    /// so it disappears with the login session.
    pub fn session_dir(&self) -> PathBuf {
        Self::session_base(dirs::runtime_dir(), dirs::cache_dir())
            .join(SESSION_DIR_NAME)
            .join(self.storage.resolved_session_id())
    }

    /// Runtime dir, else the user's cache dir. The shared temp dir is the
    /// last resort; the identity tier creates its directories owner-only.
    pub(crate) fn session_base(
        runtime_dir: Option<PathBuf>,
        cache_dir: Option<PathBuf>,
    ) -> PathBuf {
        runtime_dir.or(cache_dir).unwrap_or_else(std::env::temp_dir)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}", self.api.base_url);
        info!(
            "  storage: identity_dir={}, session={}, cookie_max_age={}d",
            self.storage.identity_dir,
            self.storage.resolved_session_id(),
            self.storage.cookie_max_age_days
        );
        info!(
            "  upload: max_resume={} bytes, extensions={}",
            self.upload.max_resume_bytes,
            self.upload.allowed_extensions.join(",")
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("JB_API_BASE_URL", &mut self.api.base_url);

        // Storage
        Self::apply_env_option_string("JB_SESSION_ID", &mut self.storage.session_id);
        Self::apply_env_parse(
            "JB_COOKIE_MAX_AGE_DAYS",
            &mut self.storage.cookie_max_age_days,
        );

        // Upload
        Self::apply_env_parse(
            "JB_UPLOAD_MAX_RESUME_BYTES",
            &mut self.upload.max_resume_bytes,
        );

        // Logging
        Self::apply_env_parse("JB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("JB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("JB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
