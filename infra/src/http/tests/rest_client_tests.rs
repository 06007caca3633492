//! Unit tests for the REST client

use verify_core::errors::TransportError;
use verify_shared::ClientConfig;

use crate::http::rest_client::error_from_response;
use crate::http::RestClient;
use crate::InfrastructureError;

fn client_for(endpoint: &str) -> RestClient {
    RestClient::new(ClientConfig::new("test_key").with_endpoint(endpoint))
        .expect("Should create REST client")
}

#[test]
fn test_missing_access_key_is_rejected() {
    let result = RestClient::new(ClientConfig::default());
    match result {
        Err(InfrastructureError::Config(msg)) => assert!(msg.contains("access key")),
        other => panic!("Expected config error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let result = RestClient::new(ClientConfig::new("test_key").with_endpoint("not a url"));
    assert!(matches!(result, Err(InfrastructureError::Config(_))));

    let result =
        RestClient::new(ClientConfig::new("test_key").with_endpoint("mailto:ops@example.com"));
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let result = RestClient::new(ClientConfig::new("test_key").with_timeout(0));
    match result {
        Err(InfrastructureError::Config(msg)) => assert!(msg.contains("timeout")),
        other => panic!("Expected config error, got {:?}", other.map(|_| ())),
    }

    assert!(RestClient::new(ClientConfig::new("test_key").with_timeout(1)).is_ok());
}

#[test]
fn test_access_key_with_newline_is_rejected() {
    let result = RestClient::new(ClientConfig::new("bad\nkey"));
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_default_endpoint() {
    let client = RestClient::new(ClientConfig::new("test_key")).unwrap();
    assert_eq!(client.base_url().as_str(), "https://rest.messagebird.com/");
    assert_eq!(
        client.url_for("verify").unwrap().as_str(),
        "https://rest.messagebird.com/verify"
    );
}

#[test]
fn test_url_for_keeps_query_string() {
    let client = client_for("https://api.example.com/");
    assert_eq!(
        client.url_for("verify/abc?token=a+b%26c").unwrap().as_str(),
        "https://api.example.com/verify/abc?token=a+b%26c"
    );
}

#[test]
fn test_url_for_with_base_path() {
    let client = client_for("https://api.example.com/v1");
    assert_eq!(client.base_url().as_str(), "https://api.example.com/v1/");
    assert_eq!(
        client.url_for("verify/messages/email/msg-1").unwrap().as_str(),
        "https://api.example.com/v1/verify/messages/email/msg-1"
    );
    assert_eq!(
        client.url_for("/verify").unwrap().as_str(),
        "https://api.example.com/v1/verify"
    );
}

#[test]
fn test_structured_error_body() {
    let body = r#"{"errors":[{"code":10,"description":"The token is invalid.","parameter":"token"}]}"#;

    match error_from_response(422, body.to_string()) {
        TransportError::Api { status, errors } => {
            assert_eq!(status, 422);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].code, 10);
            assert_eq!(errors[0].parameter.as_deref(), Some("token"));
        }
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[test]
fn test_unstructured_error_body() {
    let error = error_from_response(502, "<html>Bad Gateway</html>".to_string());
    assert_eq!(
        error,
        TransportError::UnexpectedStatus {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string()
        }
    );
}
