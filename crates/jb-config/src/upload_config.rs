use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_RESUME_BYTES,
};

use serde::Deserialize;

/// Limits advertised by the resume upload dialog.
///
/// Only the extension list is enforced locally; the size limit is shown to
/// the user and left to the server to enforce.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_resume_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_resume_bytes == 0 {
            return Err(ConfigError::upload(
                "upload.max_resume_bytes must be greater than 0",
            ));
        }

        if self.allowed_extensions.is_empty() {
            return Err(ConfigError::upload(
                "upload.allowed_extensions must list at least one extension",
            ));
        }

        let is_valid = |ext: &str| {
            let ext = ext.trim_start_matches('.');
            !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
        };
        if let Some(bad) = self.allowed_extensions.iter().find(|ext| !is_valid(ext)) {
            return Err(ConfigError::upload(format!(
                "upload.allowed_extensions contains invalid entry '{bad}'"
            )));
        }

        Ok(())
    }

    /// Extensions lowercased and without a leading dot
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.allowed_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect()
    }
}
