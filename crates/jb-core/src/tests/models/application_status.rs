use crate::ApplicationStatus;

#[test]
fn test_known_statuses_parse() {
    assert_eq!(
        ApplicationStatus::from("approved".to_string()),
        ApplicationStatus::Approved
    );
    assert_eq!(
        ApplicationStatus::from("Rejected".to_string()),
        ApplicationStatus::Rejected
    );
}

#[test]
fn test_unknown_status_is_preserved() {
    let status: ApplicationStatus = serde_json::from_str("\"shortlisted\"").unwrap();
    assert_eq!(status, ApplicationStatus::Other("shortlisted".to_string()));
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"shortlisted\"");
    assert!(!status.is_decided());
}

#[test]
fn test_is_decided() {
    assert!(ApplicationStatus::Approved.is_decided());
    assert!(ApplicationStatus::Rejected.is_decided());
    assert!(!ApplicationStatus::Pending.is_decided());
}
