//! jb-cli library
//!
//! Exports the HTTP client and the resume upload flow for tests and the `jb`
//! binary.

pub mod application_commands;
pub mod auth_commands;
pub mod cli;
pub mod client;
pub mod commands;
pub mod context;
pub mod credentials;
pub mod error;
pub mod job_commands;
pub mod logger;
pub mod profile_commands;
pub mod upload;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, LoginOutcome};
pub use error::{CliError, Result as CliResult};
pub use upload::{
    ApplicationSubmitter, ApplyReceipt, DocumentKind, ImageKind, ProfilePicture, ResumeFile,
    SubmitOutcome, SubmitTicket, UploadError, UploadFlow, UploadResult, UploadState, UploadStatus,
};
