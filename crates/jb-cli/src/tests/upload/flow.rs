use super::{CountingSubmitter, resume};
use crate::upload::{SubmitOutcome, UploadError, UploadFlow, UploadState, UploadStatus};
use crate::{ApplyReceipt, ClientError};

use jb_config::UploadConfig;

use googletest::prelude::*;
use tempfile::TempDir;

const TWO_MB: usize = 2 * 1024 * 1024;

fn flow() -> UploadFlow {
    UploadFlow::new(&UploadConfig::default())
}

#[tokio::test]
async fn given_exe_when_selected_then_rejected_idle_and_no_calls() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("resume.exe");
    std::fs::write(&path, b"MZ").unwrap();
    let submitter = CountingSubmitter::answering(201, "Application submitted");
    let mut flow = flow();

    let selected = flow.select_path(&path);
    let submitted = flow.submit("j1", &submitter).await;

    assert!(matches!(
        selected,
        Err(UploadError::UnsupportedFileType { .. })
    ));
    assert!(matches!(submitted, Err(UploadError::NoFileSelected { .. })));
    assert_that!(flow.status(), eq(UploadStatus::Idle));
    assert_that!(submitter.calls(), eq(0));
}

#[tokio::test]
async fn given_no_file_when_submitted_then_local_error_and_no_calls() {
    let submitter = CountingSubmitter::answering(201, "Application submitted");
    let mut flow = flow();

    let result = flow.submit("j1", &submitter).await;

    let Err(err) = result else {
        panic!("expected an error");
    };
    assert_that!(
        err.user_message(),
        eq("Please upload a resume before submitting.")
    );
    assert_that!(submitter.calls(), eq(0));
    assert_that!(flow.state(), eq(&UploadState::Idle));
}

#[tokio::test]
async fn given_pdf_when_server_answers_201_then_success_with_server_message() {
    let submitter = CountingSubmitter::answering(201, "Application submitted");
    let mut flow = flow();
    flow.select(resume("resume.pdf", TWO_MB)).unwrap();

    let outcome = flow.submit("j1", &submitter).await.unwrap();

    assert_that!(
        outcome,
        eq(&SubmitOutcome::Submitted {
            message: "Application submitted".to_string()
        })
    );
    assert_that!(
        flow.state(),
        eq(&UploadState::Success {
            file_name: "resume.pdf".to_string(),
            message: "Application submitted".to_string(),
        })
    );
    assert_that!(submitter.calls(), eq(1));
}

#[tokio::test]
async fn given_success_when_submitted_again_then_refused_without_reselecting() {
    let submitter = CountingSubmitter::answering(201, "Application submitted");
    let mut flow = flow();
    flow.select(resume("resume.pdf", 100)).unwrap();
    flow.submit("j1", &submitter).await.unwrap();

    let again = flow.submit("j1", &submitter).await;

    assert!(matches!(again, Err(UploadError::AlreadySubmitted { .. })));
    assert_that!(flow.can_submit(), eq(false));
    assert_that!(submitter.calls(), eq(1));
}

#[tokio::test]
async fn given_server_error_when_submitted_then_error_keeps_file() {
    let submitter = CountingSubmitter::failing(400, "You have already applied to this job");
    let mut flow = flow();
    flow.select(resume("resume.pdf", 100)).unwrap();

    let outcome = flow.submit("j1", &submitter).await.unwrap();

    assert_that!(
        outcome,
        eq(&SubmitOutcome::Rejected {
            message: "You have already applied to this job".to_string()
        })
    );
    assert_that!(flow.status(), eq(UploadStatus::Error));
    assert_that!(
        flow.state().file().map(|f| f.name.as_str()),
        some(eq("resume.pdf"))
    );
    assert_that!(flow.can_submit(), eq(true));
}

#[tokio::test]
async fn given_error_when_resubmitted_then_new_request_is_sent() {
    let failing = CountingSubmitter::failing(500, "Server error");
    let working = CountingSubmitter::answering(201, "Application submitted");
    let mut flow = flow();
    flow.select(resume("resume.docx", 100)).unwrap();
    flow.submit("j1", &failing).await.unwrap();

    let outcome = flow.submit("j1", &working).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Submitted { .. }));
    assert_that!(failing.calls(), eq(1));
    assert_that!(working.calls(), eq(1));
}

#[tokio::test]
async fn given_unexpected_2xx_when_submitted_then_error_with_status() {
    let submitter = CountingSubmitter::answering(200, "ok");
    let mut flow = flow();
    flow.select(resume("resume.pdf", 100)).unwrap();

    let outcome = flow.submit("j1", &submitter).await.unwrap();

    assert_that!(
        outcome,
        eq(&SubmitOutcome::Rejected {
            message: "Unexpected response status 200".to_string()
        })
    );
    assert_that!(flow.status(), eq(UploadStatus::Error));
}

#[test]
fn given_closed_dialog_when_late_answer_arrives_then_discarded() {
    let mut flow = flow();
    flow.select(resume("resume.pdf", 100)).unwrap();
    let ticket = flow.begin_submit("j1").unwrap();
    assert_that!(flow.is_submitting(), eq(true));

    flow.close();
    let outcome = flow.finish(
        ticket,
        Ok(ApplyReceipt {
            status: 201,
            message: "Application submitted".to_string(),
        }),
    );

    assert_that!(outcome, eq(&SubmitOutcome::Discarded));
    assert_that!(flow.state(), eq(&UploadState::Idle));
}

#[test]
fn given_reopened_with_new_file_when_old_answer_arrives_then_new_file_kept() {
    let mut flow = flow();
    flow.select(resume("old.pdf", 100)).unwrap();
    let stale = flow.begin_submit("j1").unwrap();
    flow.close();
    flow.select(resume("new.pdf", 100)).unwrap();

    let outcome = flow.finish(stale, Err(ClientError::api_error(500, "boom")));

    assert_that!(outcome, eq(&SubmitOutcome::Discarded));
    assert_that!(
        flow.state().file().map(|f| f.name.as_str()),
        some(eq("new.pdf"))
    );
    assert_that!(flow.status(), eq(UploadStatus::Selected));
}

#[test]
fn given_submitting_when_selecting_or_beginning_then_in_flight_error() {
    let mut flow = flow();
    flow.select(resume("resume.pdf", 100)).unwrap();
    let _ticket = flow.begin_submit("j1").unwrap();

    assert!(matches!(
        flow.select(resume("other.pdf", 100)),
        Err(UploadError::SubmissionInFlight { .. })
    ));
    assert!(matches!(
        flow.begin_submit("j1"),
        Err(UploadError::SubmissionInFlight { .. })
    ));
    assert_that!(flow.can_submit(), eq(false));
}

#[test]
fn given_success_when_dismissed_then_idle() {
    let mut flow = flow();
    flow.select(resume("resume.pdf", 100)).unwrap();
    let ticket = flow.begin_submit("j1").unwrap();
    flow.finish(
        ticket,
        Ok(ApplyReceipt {
            status: 201,
            message: "Application submitted".to_string(),
        }),
    );

    flow.dismiss();

    assert_that!(flow.state(), eq(&UploadState::Idle));
}

#[test]
fn given_success_when_new_file_selected_then_ready_again() {
    let mut flow = flow();
    flow.select(resume("resume.pdf", 100)).unwrap();
    let ticket = flow.begin_submit("j1").unwrap();
    flow.finish(
        ticket,
        Ok(ApplyReceipt {
            status: 201,
            message: "Application submitted".to_string(),
        }),
    );

    flow.select(resume("cover.doc", 100)).unwrap();

    assert_that!(flow.can_submit(), eq(true));
}

#[test]
fn given_oversized_file_when_selected_then_still_accepted() {
    let config = UploadConfig {
        max_resume_bytes: 10,
        ..UploadConfig::default()
    };
    let mut flow = UploadFlow::new(&config);

    let result = flow.select(resume("resume.pdf", 11));

    assert!(result.is_ok());
    assert_that!(flow.status(), eq(UploadStatus::Selected));
}

#[test]
fn given_narrowed_extensions_when_docx_selected_then_rejected() {
    let config = UploadConfig {
        allowed_extensions: vec![".PDF".to_string()],
        ..UploadConfig::default()
    };
    let mut flow = UploadFlow::new(&config);

    assert!(flow.select(resume("resume.pdf", 1)).is_ok());
    assert!(matches!(
        flow.select(resume("resume.docx", 1)),
        Err(UploadError::UnsupportedFileType { .. })
    ));
    assert_that!(
        flow.state().file().map(|f| f.name.as_str()),
        some(eq("resume.pdf"))
    );
}
