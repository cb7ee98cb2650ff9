use crate::upload::{ImageKind, UploadError, UploadResult};

use std::path::Path;

/// A PNG or JPEG bound for the profile picture endpoint.
#[derive(Clone)]
pub struct ProfilePicture {
    pub name: String,
    pub bytes: Vec<u8>,
    pub kind: ImageKind,
}

impl ProfilePicture {
    #[track_caller]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> UploadResult<Self> {
        let name = name.into();
        let Some(kind) = ImageKind::from_name(&name) else {
            return Err(UploadError::unsupported_file_type(
                name,
                &ImageKind::EXTENSIONS,
            ));
        };

        Ok(Self { name, bytes, kind })
    }

    pub fn from_path(path: &Path) -> UploadResult<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if ImageKind::from_name(&name).is_none() {
            return Err(UploadError::unsupported_file_type(
                name,
                &ImageKind::EXTENSIONS,
            ));
        }

        let bytes = std::fs::read(path).map_err(|e| UploadError::io(path, e))?;
        Self::new(name, bytes)
    }
}

impl std::fmt::Debug for ProfilePicture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfilePicture")
            .field("name", &self.name)
            .field("size", &self.bytes.len())
            .field("kind", &self.kind)
            .finish()
    }
}
