use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid job type: {value} {location}")]
    InvalidJobType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid employment mode: {value} {location}")]
    InvalidEmploymentMode {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid job status: {value} {location}")]
    InvalidJobStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a single form field
    #[track_caller]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing next to the offending field.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidRole { value, .. } => format!("Unknown role '{value}'"),
            Self::InvalidJobType { value, .. } => format!("Unknown job type '{value}'"),
            Self::InvalidEmploymentMode { value, .. } => {
                format!("Unknown employment mode '{value}'")
            }
            Self::InvalidJobStatus { value, .. } => format!("Unknown job status '{value}'"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
