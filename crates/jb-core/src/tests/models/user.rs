use crate::{Role, User};

#[test]
fn given_minimal_record_when_deserialize_then_optional_fields_default() {
    let user: User = serde_json::from_str(r#"{"_id":"u1","role":"employer"}"#).unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Employer);
    assert!(user.full_name.is_empty());
    assert!(user.bio.is_none());
    assert!(user.skills.is_empty());
    assert!(user.notifications.is_empty());
}

#[test]
fn given_api_nulls_and_extra_fields_when_deserialize_then_accepted() {
    let json = r#"{
        "_id": "u2",
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "role": "jobseeker",
        "bio": null,
        "skills": null,
        "socialLinks": {"github": "https://github.com/ada"},
        "notifications": [{"message": "Application approved", "type": "application", "read": false}],
        "jobs": [],
        "__v": 0
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.full_name, "Ada Lovelace");
    assert!(user.skills.is_empty());
    assert_eq!(
        user.social_links.github.as_deref(),
        Some("https://github.com/ada")
    );
    assert_eq!(user.notifications[0].kind, "application");
    assert_eq!(user.unread_notifications(), 1);
}

#[test]
fn given_unknown_role_when_deserialize_then_error() {
    let result = serde_json::from_str::<User>(r#"{"_id":"u1","role":"admin"}"#);
    assert!(result.is_err());
}

#[test]
fn given_user_when_serialize_then_flat_camel_case_with_underscore_id() {
    let user = User::new("u1", "Grace Hopper", "grace@example.com", Role::Employer);

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["_id"], "u1");
    assert_eq!(json["fullName"], "Grace Hopper");
    assert_eq!(json["role"], "employer");
    assert!(json.get("bio").is_none());
}

#[test]
fn given_mixed_notification_dates_when_sorted_then_newest_first_undated_last() {
    let json = r#"{
        "_id": "u2",
        "role": "jobseeker",
        "notifications": [
            {"message": "old", "read": true, "createdAt": "2024-05-01T10:00:00.000Z"},
            {"message": "undated", "read": false},
            {"message": "new", "read": false, "createdAt": "2024-06-01T10:00:00.000Z"}
        ]
    }"#;
    let user: User = serde_json::from_str(json).unwrap();

    let messages: Vec<&str> = user
        .notifications_newest_first()
        .iter()
        .map(|n| n.message.as_str())
        .collect();

    assert_eq!(messages, vec!["new", "old", "undated"]);
    assert_eq!(user.unread_notifications(), 2);
}
