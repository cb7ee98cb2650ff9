mod flow;
mod resume_file;
mod state;

use crate::upload::{ApplicationSubmitter, ApplyReceipt, ResumeFile};
use crate::{CliClientResult, ClientError};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Submitter that counts calls and answers with a canned response.
pub(crate) struct CountingSubmitter {
    calls: AtomicUsize,
    respond: Box<dyn Fn() -> CliClientResult<ApplyReceipt> + Send + Sync>,
}

impl CountingSubmitter {
    pub(crate) fn answering(status: u16, message: &'static str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            respond: Box::new(move || {
                Ok(ApplyReceipt {
                    status,
                    message: message.to_string(),
                })
            }),
        }
    }

    pub(crate) fn failing(status: u16, message: &'static str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            respond: Box::new(move || Err(ClientError::api_error(status, message))),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApplicationSubmitter for CountingSubmitter {
    async fn submit_application(
        &self,
        _job_id: &str,
        _file: &ResumeFile,
    ) -> CliClientResult<ApplyReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.respond)()
    }
}

pub(crate) fn resume(name: &str, size: usize) -> ResumeFile {
    ResumeFile::new(name, vec![0u8; size]).unwrap()
}
