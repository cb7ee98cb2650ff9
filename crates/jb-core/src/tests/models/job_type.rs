use crate::{CoreError, EmploymentMode, JobStatus, JobType};

use std::str::FromStr;

#[test]
fn test_job_type_accepts_legacy_capitalisation() {
    assert_eq!(JobType::from_str("Full-Time").unwrap(), JobType::FullTime);
    assert_eq!(JobType::from_str("part time").unwrap(), JobType::PartTime);
    assert_eq!(JobType::from_str("Internship").unwrap(), JobType::Internship);
}

#[test]
fn test_job_type_serializes_form_label() {
    assert_eq!(
        serde_json::to_string(&JobType::FullTime).unwrap(),
        "\"Full-time\""
    );
    let parsed: JobType = serde_json::from_str("\"Full-Time\"").unwrap();
    assert_eq!(parsed, JobType::FullTime);
}

#[test]
fn test_job_type_invalid() {
    let err = JobType::from_str("Gig").unwrap_err();
    assert!(matches!(err, CoreError::InvalidJobType { .. }));
}

#[test]
fn test_employment_mode_round_labels() {
    assert_eq!(EmploymentMode::from_str("Onsite").unwrap(), EmploymentMode::OnSite);
    assert_eq!(EmploymentMode::OnSite.as_str(), "On-site");
    assert!(EmploymentMode::from_str("Moon").is_err());
}

#[test]
fn test_job_status_default_open() {
    assert_eq!(JobStatus::default(), JobStatus::Open);
    assert_eq!(JobStatus::from_str("closed").unwrap(), JobStatus::Closed);
}
