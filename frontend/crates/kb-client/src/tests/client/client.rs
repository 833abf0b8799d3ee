use crate::Client;
use crate::client::client::error_detail;

use kb_config::ApiConfig;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_from_config_uses_base_url() {
    let config = ApiConfig {
        base_url: " http://10.1.2.3:9000/ ".to_string(),
    };
    let client = Client::from_config(&config);
    assert_eq!(client.base_url, "http://10.1.2.3:9000");
}

#[test]
fn test_error_detail_string() {
    let detail = error_detail(r#"{"detail": "Project 7 not found"}"#);
    assert_eq!(detail.as_deref(), Some("Project 7 not found"));
}

#[test]
fn test_error_detail_validation_list() {
    let body = r#"{"detail": [
        {"loc": ["body", "name"], "msg": "String should have at least 3 characters"},
        {"loc": ["body", "budget"], "msg": "Input should be greater than 0"}
    ]}"#;

    let detail = error_detail(body);
    assert_eq!(
        detail.as_deref(),
        Some("String should have at least 3 characters; Input should be greater than 0")
    );
}

#[test]
fn test_error_detail_not_json() {
    assert!(error_detail("Internal Server Error").is_none());
}

#[test]
fn test_error_detail_missing_field() {
    assert!(error_detail(r#"{"error": "boom"}"#).is_none());
}
