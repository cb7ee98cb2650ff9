//! Create/edit payload for job postings.

use crate::validation::{min_chars, string_list};
use crate::{CoreResult, EmploymentMode, Job, JobStatus, JobType};

use serde::{Deserialize, Serialize};

const MIN_TITLE_CHARS: usize = 3;
const MIN_COMPANY_CHARS: usize = 2;
const MIN_LOCATION_CHARS: usize = 2;
const MIN_DESCRIPTION_CHARS: usize = 10;
const MIN_LIST_ENTRY_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub employment_mode: EmploymentMode,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub status: JobStatus,
}

impl JobDraft {
    /// Check the draft the way the posting form does, stopping at the first bad field.
    pub fn validate(&self) -> CoreResult<()> {
        min_chars(
            "title",
            &self.title,
            MIN_TITLE_CHARS,
            "Title must be at least 3 characters",
        )?;
        min_chars(
            "company",
            &self.company,
            MIN_COMPANY_CHARS,
            "Company name is required",
        )?;
        min_chars(
            "location",
            &self.location,
            MIN_LOCATION_CHARS,
            "Location is required",
        )?;
        min_chars(
            "description",
            &self.description,
            MIN_DESCRIPTION_CHARS,
            "Description must be at least 10 characters",
        )?;
        string_list(
            "responsibilities",
            &self.responsibilities,
            1,
            MIN_LIST_ENTRY_CHARS,
            "At least one responsibility is required",
        )?;
        string_list(
            "requirements",
            &self.requirements,
            1,
            MIN_LIST_ENTRY_CHARS,
            "At least one requirement is required",
        )?;
        string_list(
            "benefits",
            &self.benefits,
            0,
            MIN_LIST_ENTRY_CHARS,
            "Benefits are optional",
        )?;
        Ok(())
    }
}

/// Prefill an edit from the posting being edited
impl From<&Job> for JobDraft {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type,
            employment_mode: job.employment_mode,
            description: job.description.clone(),
            responsibilities: job.responsibilities.clone(),
            requirements: job.requirements.clone(),
            benefits: job.benefits.clone(),
            status: job.status,
        }
    }
}
