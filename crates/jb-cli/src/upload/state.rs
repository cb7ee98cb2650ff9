use crate::upload::ResumeFile;

/// Where a single upload attempt stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Selected {
        file: ResumeFile,
    },
    /// `ticket` is the generation the in-flight request was issued under
    Submitting {
        file: ResumeFile,
        ticket: u64,
    },
    /// The file is cleared; only its name is kept for the confirmation
    Success {
        file_name: String,
        message: String,
    },
    /// The file is kept so the user can retry
    Error {
        file: ResumeFile,
        message: String,
    },
}

/// Coarse status shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    Idle,
    Selected,
    Success,
    Error,
}

impl UploadState {
    /// `Submitting` reports as `Selected`; see [`UploadState::is_submitting`].
    pub fn status(&self) -> UploadStatus {
        match self {
            Self::Idle => UploadStatus::Idle,
            Self::Selected { .. } | Self::Submitting { .. } => UploadStatus::Selected,
            Self::Success { .. } => UploadStatus::Success,
            Self::Error { .. } => UploadStatus::Error,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// The file the next submission would send
    pub fn file(&self) -> Option<&ResumeFile> {
        match self {
            Self::Selected { file } | Self::Submitting { file, .. } | Self::Error { file, .. } => {
                Some(file)
            }
            Self::Idle | Self::Success { .. } => None,
        }
    }

    /// Success or error text, once an attempt has finished
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } | Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}
