//! Session cookie persistence.
//!
//! The API authenticates with a cookie set at sign-in. A browser would keep
//! it in its jar; the CLI keeps it next to the durable identity tiers and
//! replays it as a `Cookie` header.

use crate::{CliClientResult, ClientError};

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

const SESSION_COOKIE_FILENAME: &str = "session_cookie";

#[cfg(unix)]
const SESSION_COOKIE_MODE: u32 = 0o600;

#[derive(Debug, Clone)]
pub struct Credentials {
    path: PathBuf,
}

impl Credentials {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SESSION_COOKIE_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> CliClientResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(cookie) => {
                let cookie = cookie.trim();
                Ok((!cookie.is_empty()).then(|| cookie.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::io(&self.path, e)),
        }
    }

    /// Readable by the owner only on unix.
    pub fn save(&self, cookie: &str) -> CliClientResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| ClientError::io(dir, e))?;
        }

        let mut file = open_owner_only(&self.path).map_err(|e| ClientError::io(&self.path, e))?;
        file.write_all(cookie.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| ClientError::io(&self.path, e))?;

        debug!("Saved session cookie to {:?}", self.path);
        Ok(())
    }

    pub fn clear(&self) -> CliClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::io(&self.path, e)),
        }
    }
}

/// Open `path` for writing, truncated. A new file is created owner-only; an
/// existing one is narrowed to owner-only before anything is written.
pub(crate) fn open_owner_only(path: &Path) -> std::io::Result<File> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(SESSION_COOKIE_MODE)
            .open(path)?;
        file.set_permissions(fs::Permissions::from_mode(SESSION_COOKIE_MODE))?;
        Ok(file)
    }

    #[cfg(not(unix))]
    {
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
    }
}
