use crate::ClientError;

#[test]
fn test_api_error_user_message_is_server_text_verbatim() {
    let err = ClientError::api_error(400, "You have already applied to this job");

    assert_eq!(err.user_message(), "You have already applied to this job");
    assert_eq!(err.status(), Some(400));
}

#[test]
fn test_io_error_user_message_names_path() {
    let err = ClientError::io(
        "/tmp/missing.pdf",
        std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    );

    assert!(err.user_message().contains("/tmp/missing.pdf"));
    assert_eq!(err.status(), None);
}

#[test]
fn test_json_error_converts_with_location() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ClientError = parse_err.into();

    assert!(matches!(err, ClientError::Json { .. }));
    assert!(err.to_string().contains("JSON parse error"));
}
