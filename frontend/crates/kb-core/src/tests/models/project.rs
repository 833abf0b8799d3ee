use crate::Project;

use serde_json::json;

#[test]
fn test_project_from_minimal_json() {
    let project: Project =
        serde_json::from_value(json!({"id": 1, "name": "A", "description": "d"})).unwrap();

    assert_eq!(project, Project::new(1, "A", "d"));
    assert!(project.created_at.is_none());
    assert!(project.extra.is_empty());
}

#[test]
fn test_project_null_description_is_empty() {
    let project: Project =
        serde_json::from_value(json!({"id": 3, "name": "C", "description": null})).unwrap();

    assert_eq!(project.description, "");
}

#[test]
fn test_project_keeps_created_at() {
    let project: Project = serde_json::from_value(json!({
        "id": 4,
        "name": "D",
        "description": "x",
        "created_at": "2024-01-01T00:00:00"
    }))
    .unwrap();

    assert_eq!(project.created_at.as_deref(), Some("2024-01-01T00:00:00"));
}

#[test]
fn test_project_passes_through_unknown_fields() {
    let body = json!({
        "id": 5,
        "name": "E",
        "description": "x",
        "status": "active",
        "budget": 1200.5
    });
    let project: Project = serde_json::from_value(body.clone()).unwrap();

    assert_eq!(project.extra.get("status"), Some(&json!("active")));
    assert_eq!(serde_json::to_value(&project).unwrap(), body);
}

#[test]
fn test_project_missing_id_is_rejected() {
    let result = serde_json::from_value::<Project>(json!({"name": "A", "description": "d"}));
    assert!(result.is_err());
}
