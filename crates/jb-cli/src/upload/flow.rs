use crate::CliClientResult;
use crate::upload::{
    ApplicationSubmitter, ApplyReceipt, ResumeFile, UploadError, UploadResult, UploadState,
    UploadStatus, extension_of,
};

use jb_config::UploadConfig;

use std::path::Path;

use log::{debug, info, warn};

const CREATED: u16 = 201;

/// Handle for one in-flight submission.
///
/// Carries the file being sent, so the state can move on without the request
/// losing its payload.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    pub generation: u64,
    pub job_id: String,
    pub file: ResumeFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 201 from the server; the flow is now `Success`
    Submitted { message: String },
    /// Server or transport failure; the flow is now `Error` with the file kept
    Rejected { message: String },
    /// The attempt was abandoned before the answer arrived
    Discarded,
}

/// State machine driving a resume upload to a single job.
///
/// Every attempt is stamped with a generation. Closing the flow or choosing
/// another file moves the generation on, and answers for older generations
/// are dropped.
#[derive(Debug)]
pub struct UploadFlow {
    state: UploadState,
    generation: u64,
    allowed_extensions: Vec<String>,
    max_resume_bytes: u64,
}

impl UploadFlow {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            state: UploadState::Idle,
            generation: 0,
            allowed_extensions: config.normalized_extensions(),
            max_resume_bytes: config.max_resume_bytes,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn status(&self) -> UploadStatus {
        self.state.status()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Choose the file for the next attempt, replacing any earlier one.
    ///
    /// On error the state is left as it was.
    pub fn select(&mut self, file: ResumeFile) -> UploadResult<()> {
        if self.state.is_submitting() {
            return Err(UploadError::submission_in_flight());
        }

        let allowed = extension_of(&file.name)
            .is_some_and(|ext| self.allowed_extensions.iter().any(|a| *a == ext));
        if !allowed {
            return Err(UploadError::unsupported_file_type(
                file.name,
                &self.allowed_extensions,
            ));
        }

        // Advertised only; the server enforces the real limit
        if file.size() > self.max_resume_bytes {
            warn!(
                "{} is {}, above the advertised {} byte limit",
                file.name,
                file.size_label(),
                self.max_resume_bytes
            );
        }

        debug!("Selected {} ({})", file.name, file.size_label());
        self.generation += 1;
        self.state = UploadState::Selected { file };
        Ok(())
    }

    /// Read `path` and select it. The extension is checked before reading.
    pub fn select_path(&mut self, path: &Path) -> UploadResult<()> {
        if self.state.is_submitting() {
            return Err(UploadError::submission_in_flight());
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let allowed =
            extension_of(&name).is_some_and(|ext| self.allowed_extensions.contains(&ext));
        if !allowed {
            return Err(UploadError::unsupported_file_type(
                name,
                &self.allowed_extensions,
            ));
        }

        let file = ResumeFile::from_path(path)?;
        self.select(file)
    }

    pub fn can_submit(&self) -> bool {
        matches!(
            self.state,
            UploadState::Selected { .. } | UploadState::Error { .. }
        )
    }

    /// Move to `Submitting` and hand out the ticket for the request.
    pub fn begin_submit(&mut self, job_id: &str) -> UploadResult<SubmitTicket> {
        let file = match &self.state {
            UploadState::Idle => return Err(UploadError::no_file_selected()),
            UploadState::Success { .. } => return Err(UploadError::already_submitted()),
            UploadState::Submitting { .. } => return Err(UploadError::submission_in_flight()),
            UploadState::Selected { file } | UploadState::Error { file, .. } => file.clone(),
        };

        self.generation += 1;
        self.state = UploadState::Submitting {
            file: file.clone(),
            ticket: self.generation,
        };
        info!("Submitting {} to job {job_id}", file.name);

        Ok(SubmitTicket {
            generation: self.generation,
            job_id: job_id.to_string(),
            file,
        })
    }

    /// Apply the answer for `ticket`. Answers for stale tickets change nothing.
    pub fn finish(
        &mut self,
        ticket: SubmitTicket,
        result: CliClientResult<ApplyReceipt>,
    ) -> SubmitOutcome {
        let is_current = matches!(
            self.state,
            UploadState::Submitting { ticket: current, .. } if current == ticket.generation
        );
        if !is_current {
            debug!(
                "Dropping answer for abandoned submission {} to job {}",
                ticket.generation, ticket.job_id
            );
            return SubmitOutcome::Discarded;
        }

        let file = ticket.file;
        match result {
            Ok(receipt) if receipt.status == CREATED => {
                info!("Application to job {} accepted", ticket.job_id);
                self.state = UploadState::Success {
                    file_name: file.name,
                    message: receipt.message.clone(),
                };
                SubmitOutcome::Submitted {
                    message: receipt.message,
                }
            }
            Ok(receipt) => {
                let message = format!("Unexpected response status {}", receipt.status);
                warn!("Application to job {}: {message}", ticket.job_id);
                self.state = UploadState::Error {
                    file,
                    message: message.clone(),
                };
                SubmitOutcome::Rejected { message }
            }
            Err(e) => {
                warn!("Application to job {} failed: {e}", ticket.job_id);
                let message = e.user_message();
                self.state = UploadState::Error {
                    file,
                    message: message.clone(),
                };
                SubmitOutcome::Rejected { message }
            }
        }
    }

    /// Begin, send and finish in one go.
    pub async fn submit<S>(&mut self, job_id: &str, submitter: &S) -> UploadResult<SubmitOutcome>
    where
        S: ApplicationSubmitter + ?Sized,
    {
        let ticket = self.begin_submit(job_id)?;
        let result = submitter
            .submit_application(&ticket.job_id, &ticket.file)
            .await;
        Ok(self.finish(ticket, result))
    }

    /// Acknowledge a success and go back to `Idle`.
    pub fn dismiss(&mut self) {
        if matches!(self.state, UploadState::Success { .. }) {
            self.state = UploadState::Idle;
        }
    }

    /// Abandon whatever is in progress. Nothing is sent to the server.
    pub fn close(&mut self) {
        self.generation += 1;
        self.state = UploadState::Idle;
    }
}
