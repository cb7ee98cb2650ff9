use crate::CliClientResult;
use crate::upload::ResumeFile;

use async_trait::async_trait;

/// What the apply endpoint answered with a 2xx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReceipt {
    pub status: u16,
    pub message: String,
}

/// The one network call the upload flow makes.
#[async_trait]
pub trait ApplicationSubmitter: Send + Sync {
    /// POST the resume as multipart field `file`.
    ///
    /// Non-2xx answers come back as `ClientError::Api`.
    async fn submit_application(
        &self,
        job_id: &str,
        file: &ResumeFile,
    ) -> CliClientResult<ApplyReceipt>;
}
