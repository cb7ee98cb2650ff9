use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Local failures of the upload flow. None of these reach the network.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file selected {location}")]
    NoFileSelected { location: ErrorLocation },

    #[error("Unsupported file type for {name} (allowed: {allowed}) {location}")]
    UnsupportedFileType {
        name: String,
        allowed: String,
        location: ErrorLocation,
    },

    #[error("Application already submitted {location}")]
    AlreadySubmitted { location: ErrorLocation },

    #[error("Submission already in flight {location}")]
    SubmissionInFlight { location: ErrorLocation },

    #[error("Failed to read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl UploadError {
    #[track_caller]
    pub fn no_file_selected() -> Self {
        Self::NoFileSelected {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unsupported_file_type(name: impl Into<String>, allowed: &[impl AsRef<str>]) -> Self {
        Self::UnsupportedFileType {
            name: name.into(),
            allowed: allowed
                .iter()
                .map(|ext| ext.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_submitted() -> Self {
        Self::AlreadySubmitted {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn submission_in_flight() -> Self {
        Self::SubmissionInFlight {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::NoFileSelected { .. } => {
                String::from("Please upload a resume before submitting.")
            }
            Self::UnsupportedFileType { name, allowed, .. } => {
                format!("{name} is not a supported file type. Allowed: {allowed}")
            }
            Self::AlreadySubmitted { .. } => {
                String::from("This application has already been submitted.")
            }
            Self::SubmissionInFlight { .. } => {
                String::from("A submission is already in progress.")
            }
            Self::Io { path, source, .. } => {
                format!("Failed to read {}: {source}", path.display())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, UploadError>;
