use crate::{IDENTITY_KEY, IdentityError, IdentityResult, IdentityTier};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

#[cfg(unix)]
const IDENTITY_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const IDENTITY_FILE_MODE: u32 = 0o600;

/// Tier backed by `<dir>/user.json`.
///
/// Used for both the session tier (per-shell runtime directory) and the
/// durable tier (config directory).
#[derive(Debug, Clone)]
pub struct FileTier {
    name: String,
    path: PathBuf,
}

impl FileTier {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: dir.into().join(format!("{IDENTITY_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityTier for FileTier {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> IdentityResult<Option<String>> {
        read_optional(&self.path)
    }

    fn write(&self, value: &str) -> IdentityResult<()> {
        write_atomic(&self.path, value)?;
        debug!("Wrote {} identity to {:?}", self.name, self.path);
        Ok(())
    }

    fn remove(&self) -> IdentityResult<()> {
        remove_if_present(&self.path)
    }

    /// Renames `user.json` to `user.json.corrupted.{timestamp}`.
    fn discard_corrupted(&self) -> IdentityResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .path
            .with_file_name(format!("{IDENTITY_KEY}.json.corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path)
            .map_err(|e| IdentityError::atomic_rename(self.path.clone(), backup_path.clone(), e))?;

        warn!("Backed up corrupted {} identity to {backup_path:?}", self.name);
        Ok(())
    }
}

/// Reads a file, treating "not there" as empty.
pub(crate) fn read_optional(path: &Path) -> IdentityResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(IdentityError::file_read(path.to_path_buf(), e)),
    }
}

/// Writes using the atomic write pattern.
///
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
///
/// A crash mid-write leaves the previous copy in place.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> IdentityResult<()> {
    let dir = path
        .parent()
        .ok_or_else(|| IdentityError::app_data_dir(format!("{path:?} has no parent directory")))?;

    create_private_dir(dir).map_err(|e| IdentityError::dir_creation(dir.to_path_buf(), e))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(IDENTITY_KEY));
    let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

    {
        let mut file = create_private_file(&temp_path)
            .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

        file.write_all(contents.as_bytes())
            .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        IdentityError::atomic_rename(temp_path, path.to_path_buf(), e)
    })
}

/// Creates `dir` and missing parents, owner-only on unix.
pub(crate) fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(IDENTITY_DIR_MODE);
    }

    builder.create(dir)
}

/// Creates or truncates `path`, owner-only on unix from the moment it exists.
pub(crate) fn create_private_file(path: &Path) -> std::io::Result<fs::File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(IDENTITY_FILE_MODE);
    }

    options.open(path)
}

pub(crate) fn remove_if_present(path: &Path) -> IdentityResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(IdentityError::file_write(path.to_path_buf(), e)),
    }
}
