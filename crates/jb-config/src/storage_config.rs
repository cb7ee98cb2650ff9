use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_MAX_AGE_DAYS, DEFAULT_IDENTITY_DIR,
    MAX_COOKIE_MAX_AGE_DAYS, MIN_COOKIE_MAX_AGE_DAYS,
};

use std::path::Path;

use serde::Deserialize;

/// Where the identity tiers keep their copies
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Durable tier directory, relative to the config directory
    pub identity_dir: String,
    /// Scope of the session tier. Unset means "the parent shell".
    pub session_id: Option<String>,
    /// Lifetime stamped on the cookie tier when it is written
    pub cookie_max_age_days: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            identity_dir: String::from(DEFAULT_IDENTITY_DIR),
            session_id: None,
            cookie_max_age_days: DEFAULT_COOKIE_MAX_AGE_DAYS,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = Path::new(&self.identity_dir);
        if self.identity_dir.is_empty() || dir.is_absolute() || self.identity_dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.identity_dir must be relative and cannot contain '..'",
            ));
        }

        if !(MIN_COOKIE_MAX_AGE_DAYS..=MAX_COOKIE_MAX_AGE_DAYS).contains(&self.cookie_max_age_days)
        {
            return Err(ConfigError::storage(format!(
                "storage.cookie_max_age_days must be {}-{}, got {}",
                MIN_COOKIE_MAX_AGE_DAYS, MAX_COOKIE_MAX_AGE_DAYS, self.cookie_max_age_days
            )));
        }

        // Becomes a directory name
        let is_valid_id = |id: &str| {
            !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        if let Some(id) = &self.session_id
            && !is_valid_id(id)
        {
            return Err(ConfigError::storage(format!(
                "storage.session_id may only contain letters, digits, '-' and '_', got '{id}'"
            )));
        }

        Ok(())
    }

    /// Configured session id, or the parent process id so every command
    /// started from the same shell shares one session.
    pub fn resolved_session_id(&self) -> String {
        if let Some(id) = &self.session_id {
            return id.clone();
        }

        #[cfg(unix)]
        {
            format!("ppid-{}", std::os::unix::process::parent_id())
        }

        #[cfg(not(unix))]
        {
            String::from("default")
        }
    }
}
