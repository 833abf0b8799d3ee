use crate::ProjectInput;

#[test]
fn test_project_input_complete() {
    let input = ProjectInput::new("Board", "Team board");

    assert!(input.is_complete());
    assert!(input.validate().is_ok());
}

#[test]
fn test_project_input_empty_name() {
    let input = ProjectInput::new("", "Team board");

    assert!(!input.is_complete());
    let err = input.validate().unwrap_err();
    assert_eq!(err.field(), "name");
}

#[test]
fn test_project_input_empty_description() {
    let input = ProjectInput::new("Board", "");

    assert!(!input.is_complete());
    let err = input.validate().unwrap_err();
    assert_eq!(err.field(), "description");
}

#[test]
fn test_project_input_whitespace_is_present() {
    let input = ProjectInput::new(" ", " ");
    assert!(input.is_complete());
}

#[test]
fn test_project_input_serializes_two_fields() {
    let input = ProjectInput::new("A", "d");
    let json = serde_json::to_value(&input).unwrap();

    assert_eq!(json, serde_json::json!({"name": "A", "description": "d"}));
}
