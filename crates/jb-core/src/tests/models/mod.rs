mod application_status;
mod experience;
mod job;
mod job_draft;
mod job_type;
mod role;
mod user;
mod visitor;
