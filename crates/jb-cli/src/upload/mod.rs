//! Upload Submission Flow: one resume, one job, one attempt at a time.

pub(crate) mod document_kind;
pub(crate) mod error;
pub(crate) mod flow;
pub(crate) mod picture;
pub(crate) mod resume_file;
pub(crate) mod state;
pub(crate) mod submitter;

pub use document_kind::{DocumentKind, ImageKind};
pub use error::{Result as UploadResult, UploadError};
pub use flow::{SubmitOutcome, SubmitTicket, UploadFlow};
pub use picture::ProfilePicture;
pub use resume_file::ResumeFile;
pub use state::{UploadState, UploadStatus};
pub use submitter::{ApplicationSubmitter, ApplyReceipt};

use std::path::Path;

/// Lowercased extension of a file name, without the dot
pub(crate) fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}
