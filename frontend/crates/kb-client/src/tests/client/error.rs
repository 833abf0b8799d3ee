use crate::{ClientError, Operation};

#[test]
fn test_failure_messages_are_static_per_operation() {
    assert_eq!(Operation::List.failure_message(), "Failed to fetch projects");
    assert_eq!(Operation::Create.failure_message(), "Failed to create project");
}

#[test]
fn test_api_error_display() {
    let err = ClientError::api(Operation::Create, 400, Some("name too short".to_string()));
    let text = err.to_string();

    assert!(text.starts_with("Failed to create project: HTTP 400: name too short"));
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.operation(), Operation::Create);
}

#[test]
fn test_api_error_without_detail() {
    let err = ClientError::api(Operation::List, 503, None);

    assert!(err.to_string().contains("no detail"));
    assert_eq!(err.failure_message(), "Failed to fetch projects");
}

#[test]
fn test_decode_error() {
    let json_err = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
    let err = ClientError::decode(Operation::List, json_err);

    assert!(err.to_string().contains("invalid response body"));
    assert!(err.status().is_none());
}
