//! Domain types shared by the job board client crates.
//!
//! Everything here mirrors the JSON the job board API speaks, plus the
//! local form checks that run before a request is sent.

pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::application::{Application, ApplicantSummary, JobSummary};
pub use models::application_status::ApplicationStatus;
pub use models::employment_mode::EmploymentMode;
pub use models::experience::Experience;
pub use models::job::{Job, JobPoster};
pub use models::job_draft::JobDraft;
pub use models::job_status::JobStatus;
pub use models::job_type::JobType;
pub use models::notification::Notification;
pub use models::profile_update::ProfileUpdate;
pub use models::registration::Registration;
pub use models::role::Role;
pub use models::social_links::SocialLinks;
pub use models::user::User;
pub use models::visitor::Visitor;
