use crate::commands::to_output;
use crate::context::AppContext;
use crate::{CliError, CliResult};

use jb_core::{EmploymentMode, Job, JobDraft, JobStatus, JobType, Role};

use clap::{Args, Subcommand};
use serde_json::Value;

#[derive(Subcommand)]
pub enum JobCommands {
    /// List posted jobs
    List {
        /// Keep jobs whose title, company or location contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Get a job by ID
    Get {
        /// Job ID
        id: String,
    },

    /// Jobs you posted (employers)
    Mine,

    /// Post a job (employers)
    Create {
        #[command(flatten)]
        job: CreateJobArgs,
    },

    /// Edit a job you posted (employers). Omitted fields keep their value.
    Update {
        /// Job ID
        id: String,

        #[command(flatten)]
        job: UpdateJobArgs,
    },

    /// Delete a job you posted (employers)
    Delete {
        /// Job ID
        id: String,
    },
}

#[derive(Args)]
pub struct CreateJobArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub company: String,

    #[arg(long)]
    pub location: String,

    /// Full-time, Part-time, Contract, Internship or Freelance
    #[arg(long)]
    pub job_type: JobType,

    /// Remote, On-site or Hybrid
    #[arg(long)]
    pub employment_mode: EmploymentMode,

    #[arg(long)]
    pub description: String,

    /// Repeat for several responsibilities
    #[arg(long = "responsibility")]
    pub responsibilities: Vec<String>,

    /// Repeat for several requirements
    #[arg(long = "requirement")]
    pub requirements: Vec<String>,

    /// Repeat for several benefits
    #[arg(long = "benefit")]
    pub benefits: Vec<String>,

    /// Open or Closed
    #[arg(long, default_value = "Open")]
    pub status: JobStatus,
}

impl From<CreateJobArgs> for JobDraft {
    fn from(args: CreateJobArgs) -> Self {
        Self {
            title: args.title,
            company: args.company,
            location: args.location,
            job_type: args.job_type,
            employment_mode: args.employment_mode,
            description: args.description,
            responsibilities: args.responsibilities,
            requirements: args.requirements,
            benefits: args.benefits,
            status: args.status,
        }
    }
}

#[derive(Args)]
pub struct UpdateJobArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub job_type: Option<JobType>,

    #[arg(long)]
    pub employment_mode: Option<EmploymentMode>,

    #[arg(long)]
    pub description: Option<String>,

    /// Replaces the whole list when given
    #[arg(long = "responsibility")]
    pub responsibilities: Vec<String>,

    /// Replaces the whole list when given
    #[arg(long = "requirement")]
    pub requirements: Vec<String>,

    /// Replaces the whole list when given
    #[arg(long = "benefit")]
    pub benefits: Vec<String>,

    #[arg(long)]
    pub status: Option<JobStatus>,
}

impl UpdateJobArgs {
    /// Overlay the given fields on an existing draft
    pub fn apply_to(self, draft: &mut JobDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(job_type) = self.job_type {
            draft.job_type = job_type;
        }
        if let Some(mode) = self.employment_mode {
            draft.employment_mode = mode;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if !self.responsibilities.is_empty() {
            draft.responsibilities = self.responsibilities;
        }
        if !self.requirements.is_empty() {
            draft.requirements = self.requirements;
        }
        if !self.benefits.is_empty() {
            draft.benefits = self.benefits;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

impl JobCommands {
    pub async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        match self {
            JobCommands::List { search } => {
                ctx.identity.require_signed_in()?;
                let mut jobs = ctx.client.list_jobs().await?;
                if let Some(term) = search {
                    jobs.retain(|job| job.matches_search(&term));
                }
                eprintln!("{} Jobs Found", jobs.len());
                to_output(&jobs)
            }

            JobCommands::Get { id } => {
                ctx.identity.require_signed_in()?;
                let job = ctx.client.get_job(&id).await?;
                to_output(&job)
            }

            JobCommands::Mine => {
                ctx.identity.require_role(Role::Employer)?;
                let jobs = ctx.client.my_jobs().await?;
                to_output(&jobs)
            }

            JobCommands::Create { job } => {
                ctx.identity.require_role(Role::Employer)?;
                let draft = JobDraft::from(job);
                draft.validate()?;
                let body = ctx.client.create_job(&draft).await?;
                eprintln!("Job posted successfully!");
                Ok(body)
            }

            JobCommands::Update { id, job } => {
                let user_id = ctx.identity.require_role(Role::Employer)?.id.clone();
                let existing = ctx.client.get_job(&id).await?;
                ensure_posted_by(&existing, &user_id, "edit")?;
                let mut draft = JobDraft::from(&existing);
                job.apply_to(&mut draft);
                draft.validate()?;
                let body = ctx.client.update_job(&id, &draft).await?;
                eprintln!("Job updated successfully!");
                Ok(body)
            }

            JobCommands::Delete { id } => {
                let user_id = ctx.identity.require_role(Role::Employer)?.id.clone();
                let existing = ctx.client.get_job(&id).await?;
                ensure_posted_by(&existing, &user_id, "delete")?;
                let body = ctx.client.delete_job(&id).await?;
                eprintln!("Job deleted successfully!");
                Ok(body)
            }
        }
    }
}

/// Only the employer who posted a job may edit or delete it.
fn ensure_posted_by(job: &Job, user_id: &str, action: &str) -> CliResult<()> {
    if job.is_posted_by(user_id) {
        return Ok(());
    }

    Err(CliError::usage(format!(
        "You can only {action} jobs you posted. \"{}\" was posted by someone else.",
        job.title
    )))
}
