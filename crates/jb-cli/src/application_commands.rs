use crate::commands::to_output;
use crate::context::AppContext;
use crate::upload::{SubmitOutcome, UploadFlow, UploadState};
use crate::{CliError, CliResult};

use jb_core::Role;

use std::path::PathBuf;

use clap::Subcommand;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum ApplicationCommands {
    /// Apply to a job with a resume (PDF, DOC or DOCX)
    Apply {
        /// Job ID
        job_id: String,

        /// Resume file
        file: PathBuf,
    },

    /// Applications you submitted (job seekers)
    Mine,

    /// Approve an application to one of your jobs (employers)
    Approve {
        /// Application ID
        id: String,
    },

    /// Reject an application to one of your jobs (employers)
    Reject {
        /// Application ID
        id: String,
    },

    /// Withdraw an application
    Delete {
        /// Application ID
        id: String,
    },
}

impl ApplicationCommands {
    pub async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        match self {
            ApplicationCommands::Apply { job_id, file } => {
                ctx.identity.require_role(Role::Jobseeker)?;

                let mut flow = UploadFlow::new(&ctx.upload);
                flow.select_path(&file)?;
                if let UploadState::Selected { file } = flow.state() {
                    eprintln!("Uploading {} ({})", file.name, file.size_label());
                }

                match flow.submit(&job_id, &ctx.client).await? {
                    SubmitOutcome::Submitted { message } => {
                        let file_name = match flow.state() {
                            UploadState::Success { file_name, .. } => file_name.clone(),
                            _ => String::new(),
                        };
                        eprintln!("{message}");
                        flow.dismiss();
                        Ok(json!({
                            "jobId": job_id,
                            "file": file_name,
                            "message": message,
                        }))
                    }
                    SubmitOutcome::Rejected { message } => Err(CliError::submission(message)),
                    SubmitOutcome::Discarded => {
                        Err(CliError::usage("The submission was abandoned"))
                    }
                }
            }

            ApplicationCommands::Mine => {
                ctx.identity.require_role(Role::Jobseeker)?;
                let applications = ctx.client.my_applications().await?;
                to_output(&applications)
            }

            ApplicationCommands::Approve { id } => {
                ctx.identity.require_role(Role::Employer)?;
                let body = ctx.client.approve_application(&id).await?;
                eprintln!("Application approved");
                Ok(body)
            }

            ApplicationCommands::Reject { id } => {
                ctx.identity.require_role(Role::Employer)?;
                let body = ctx.client.reject_application(&id).await?;
                eprintln!("Application rejected");
                Ok(body)
            }

            ApplicationCommands::Delete { id } => {
                ctx.identity.require_signed_in()?;
                let body = ctx.client.delete_application(&id).await?;
                eprintln!("Application deleted");
                Ok(body)
            }
        }
    }
}
