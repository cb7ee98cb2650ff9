use crate::{EmploymentMode, Job, JobStatus, JobType};

fn sample_json() -> &'static str {
    r#"{
        "_id": "j1",
        "title": "Backend Engineer",
        "company": "Acme",
        "description": "Build the API that powers everything",
        "location": "Berlin",
        "jobType": "Full-Time",
        "employmentMode": "Remote",
        "benefits": [],
        "requirements": ["Rust"],
        "responsibilities": ["Ship code"],
        "status": "Open",
        "applications": [{"_id": "a1"}],
        "postedBy": {"_id": "e1", "email": "hr@acme.test"},
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-02T10:00:00.000Z",
        "__v": 0
    }"#
}

#[test]
fn test_job_deserializes_api_shape() {
    let job: Job = serde_json::from_str(sample_json()).unwrap();

    assert_eq!(job.id, "j1");
    assert_eq!(job.job_type, JobType::FullTime);
    assert_eq!(job.employment_mode, EmploymentMode::Remote);
    assert_eq!(job.status, JobStatus::Open);
    assert_eq!(job.applications.len(), 1);
    assert!(job.created_at.is_some());
}

#[test]
fn test_job_ownership_and_status() {
    let mut job: Job = serde_json::from_str(sample_json()).unwrap();

    assert!(job.is_posted_by("e1"));
    assert!(!job.is_posted_by("someone-else"));
    assert!(job.is_open());

    job.status = JobStatus::Closed;
    assert!(!job.is_open());
}

#[test]
fn test_job_search_matches_title_company_or_location() {
    let job: Job = serde_json::from_str(sample_json()).unwrap();

    assert!(job.matches_search("backend"));
    assert!(job.matches_search("ACME"));
    assert!(job.matches_search(" berlin "));
    assert!(job.matches_search(""));
    assert!(!job.matches_search("frontend"));
}
