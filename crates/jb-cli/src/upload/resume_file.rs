use crate::upload::{DocumentKind, UploadError, UploadResult};

use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A resume chosen for upload, held in memory until submitted.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
}

impl ResumeFile {
    /// Rejects names whose extension is not a known document kind.
    #[track_caller]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> UploadResult<Self> {
        let name = name.into();
        let Some(kind) = DocumentKind::from_name(&name) else {
            let allowed = DocumentKind::ALL.map(|kind| kind.extension());
            return Err(UploadError::unsupported_file_type(name, &allowed));
        };

        Ok(Self { name, bytes, kind })
    }

    /// Read a resume from disk. The extension is checked before any bytes are read.
    pub fn from_path(path: &Path) -> UploadResult<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if DocumentKind::from_name(&name).is_none() {
            let allowed = DocumentKind::ALL.map(|kind| kind.extension());
            return Err(UploadError::unsupported_file_type(name, &allowed));
        }

        let bytes = std::fs::read(path).map_err(|e| UploadError::io(path, e))?;
        Self::new(name, bytes)
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Size in megabytes with two decimals, e.g. "2.00 MB"
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size() as f64 / BYTES_PER_MB)
    }
}

// Resume contents stay out of logs
impl std::fmt::Debug for ResumeFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeFile")
            .field("name", &self.name)
            .field("size", &self.size())
            .field("kind", &self.kind)
            .finish()
    }
}
