//! Job posting as returned by the listing and detail endpoints.

use crate::models::null_as_default;
use crate::{EmploymentMode, JobStatus, JobType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    pub job_type: JobType,
    pub employment_mode: EmploymentMode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub status: JobStatus,
    /// Shape depends on who is asking; employers get populated applicants
    #[serde(default, deserialize_with = "null_as_default")]
    pub applications: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<JobPoster>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPoster {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }

    /// Case-insensitive match of `term` against title, company or location.
    /// An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        [&self.title, &self.company, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    /// Whether `user_id` is the employer who posted this job
    pub fn is_posted_by(&self, user_id: &str) -> bool {
        self.posted_by.as_ref().is_some_and(|p| p.id == user_id)
    }
}
