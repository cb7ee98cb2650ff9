use super::resume;
use crate::upload::{UploadState, UploadStatus};

#[test]
fn test_submitting_reports_selected() {
    let state = UploadState::Submitting {
        file: resume("resume.pdf", 10),
        ticket: 1,
    };

    assert_eq!(state.status(), UploadStatus::Selected);
    assert!(state.is_submitting());
    assert!(state.file().is_some());
}

#[test]
fn test_success_has_message_but_no_file() {
    let state = UploadState::Success {
        file_name: "resume.pdf".to_string(),
        message: "Application submitted".to_string(),
    };

    assert_eq!(state.status(), UploadStatus::Success);
    assert!(state.file().is_none());
    assert_eq!(state.message(), Some("Application submitted"));
}

#[test]
fn test_idle_is_default() {
    assert_eq!(UploadState::default(), UploadState::Idle);
    assert_eq!(UploadState::Idle.status(), UploadStatus::Idle);
    assert_eq!(UploadState::Idle.message(), None);
}
