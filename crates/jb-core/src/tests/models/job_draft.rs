use crate::{CoreError, EmploymentMode, Job, JobDraft, JobStatus, JobType};

fn valid_draft() -> JobDraft {
    JobDraft {
        title: "Backend Engineer".into(),
        company: "Acme".into(),
        location: "Berlin".into(),
        job_type: JobType::FullTime,
        employment_mode: EmploymentMode::Hybrid,
        description: "Build and run the public API".into(),
        responsibilities: vec!["Write services".into()],
        requirements: vec!["Rust experience".into()],
        benefits: vec![],
        status: JobStatus::Open,
    }
}

fn failing_field(draft: &JobDraft) -> String {
    match draft.validate().unwrap_err() {
        CoreError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_valid_draft_when_validate_then_ok() {
    assert!(valid_draft().validate().is_ok());
}

#[test]
fn given_short_title_when_validate_then_title_rejected() {
    let draft = JobDraft {
        title: "QA".into(),
        ..valid_draft()
    };
    assert_eq!(failing_field(&draft), "title");
}

#[test]
fn given_short_description_when_validate_then_description_rejected() {
    let draft = JobDraft {
        description: "Too short".into(),
        ..valid_draft()
    };
    assert_eq!(failing_field(&draft), "description");
}

#[test]
fn given_no_responsibilities_when_validate_then_rejected() {
    let draft = JobDraft {
        responsibilities: vec![],
        ..valid_draft()
    };
    assert_eq!(failing_field(&draft), "responsibilities");
}

#[test]
fn given_short_requirement_entry_when_validate_then_entry_named() {
    let draft = JobDraft {
        requirements: vec!["Rust".into(), "Go".into()],
        ..valid_draft()
    };
    assert_eq!(failing_field(&draft), "requirements[1]");
}

#[test]
fn given_empty_benefits_when_serialize_then_field_omitted() {
    let json = serde_json::to_value(valid_draft()).unwrap();
    assert!(json.get("benefits").is_none());
    assert_eq!(json["jobType"], "Full-time");
    assert_eq!(json["employmentMode"], "Hybrid");
}

#[test]
fn given_job_when_into_draft_then_fields_carried() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "_id": "j1",
        "title": "Data Analyst",
        "company": "Acme",
        "location": "Remote",
        "description": "Crunch numbers every day",
        "jobType": "Contract",
        "employmentMode": "Remote",
        "requirements": ["SQL skills"],
        "responsibilities": ["Reporting"],
        "status": "Closed"
    }))
    .unwrap();

    let draft = JobDraft::from(&job);

    assert_eq!(draft.title, "Data Analyst");
    assert_eq!(draft.job_type, JobType::Contract);
    assert_eq!(draft.status, JobStatus::Closed);
    assert!(draft.validate().is_ok());
}
