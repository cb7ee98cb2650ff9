use crate::{ClientError, UploadError};

use jb_config::ConfigError;
use jb_core::CoreError;
use jb_identity::IdentityError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Anything a `jb` command can fail with.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// The server turned the resume upload down
    #[error("Application not submitted: {message} {location}")]
    Submission {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The notice printed on stderr.
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(e) => e.user_message(),
            Self::Validation(e) => e.user_message(),
            Self::Identity(e @ IdentityError::RoleRequired { required, .. }) => {
                format!("This command is for {required} accounts. {}", e.recovery_hint())
            }
            Self::Identity(e @ IdentityError::NotSignedIn { .. }) => {
                format!("You are not signed in. {}", e.recovery_hint())
            }
            Self::Identity(e) => format!("{e}. {}", e.recovery_hint()),
            Self::Upload(e) => e.user_message(),
            Self::Config(e) => format!("Invalid configuration: {e}"),
            Self::Logger { message, .. }
            | Self::Submission { message, .. }
            | Self::Usage { message, .. } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
