use crate::credentials::Credentials;
use crate::{CliResult, Client};

use jb_config::{Config, UploadConfig};
use jb_identity::IdentityStore;

use log::warn;

/// Everything a command needs: the API, who is signed in, and upload limits.
pub struct AppContext {
    pub client: Client,
    pub identity: IdentityStore,
    pub credentials: Credentials,
    pub upload: UploadConfig,
}

impl AppContext {
    pub fn new(
        client: Client,
        identity: IdentityStore,
        credentials: Credentials,
        upload: UploadConfig,
    ) -> Self {
        Self {
            client,
            identity,
            credentials,
            upload,
        }
    }

    /// Wire up from config and resolve the current visitor.
    ///
    /// `api_override` takes precedence over `api.base_url`.
    pub fn from_config(config: &Config, api_override: Option<&str>) -> CliResult<Self> {
        let credentials = Credentials::new(config.identity_dir()?);
        let cookie = credentials.load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable session cookie: {e}");
            None
        });

        let base_url = api_override.unwrap_or(&config.api.base_url);
        let client = Client::new(base_url, cookie.as_deref());

        let mut identity = IdentityStore::from_config(config)?;
        identity.resolve();

        Ok(Self::new(
            client,
            identity,
            credentials,
            config.upload.clone(),
        ))
    }
}
