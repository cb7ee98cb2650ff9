use crate::Client;
use crate::client::client::error_message;

use reqwest::StatusCode;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:5000/api/", None);
    assert_eq!(client.base_url, "http://localhost:5000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:5000/api", None);
    assert_eq!(client.base_url, "http://localhost:5000/api");
}

#[test]
fn test_session_cookie_stored() {
    let client = Client::new("http://localhost:5000/api", Some("token=abc"));
    assert_eq!(client.session_cookie, Some("token=abc".to_string()));
}

#[test]
fn test_session_cookie_none() {
    let client = Client::new("http://localhost:5000/api", None);
    assert!(client.session_cookie.is_none());
}

#[test]
fn test_profile_picture_url() {
    let client = Client::new("http://localhost:5000/api/", None);
    assert_eq!(
        client.profile_picture_url("u1"),
        "http://localhost:5000/api/users-picture/u1"
    );
}

#[test]
fn test_error_message_prefers_error_string() {
    let body = r#"{"error": "You have already applied to this job", "message": "ignored"}"#;
    assert_eq!(
        error_message(body, StatusCode::BAD_REQUEST),
        "You have already applied to this job"
    );
}

#[test]
fn test_error_message_reads_nested_error_message() {
    let body = r#"{"error": {"code": "NOT_FOUND", "message": "Job not found"}}"#;
    assert_eq!(error_message(body, StatusCode::NOT_FOUND), "Job not found");
}

#[test]
fn test_error_message_falls_back_to_message_field() {
    let body = r#"{"message": "Unauthorized, please log in"}"#;
    assert_eq!(
        error_message(body, StatusCode::UNAUTHORIZED),
        "Unauthorized, please log in"
    );
}

#[test]
fn test_error_message_falls_back_to_reason_phrase() {
    assert_eq!(
        error_message("<html>oops</html>", StatusCode::INTERNAL_SERVER_ERROR),
        "Internal Server Error"
    );
    assert_eq!(error_message("", StatusCode::FORBIDDEN), "Forbidden");
}
