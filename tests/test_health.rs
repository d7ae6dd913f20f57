use http::header::CONTENT_TYPE;
use http::Method;

use griddle::{Client, GriddleError};

mod common;
use common::RecordingTransport;

#[tokio::test]
async fn test_health_request_shape() {
    let transport = RecordingTransport::ok("{\"name\":\"es\",\"version\":\"1.0\"}");
    let client = Client::with_transport(transport.clone());

    client.health().send().await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/ent/v1/internal/health");
    assert!(request.body.is_none());
    assert!(request.headers.get(CONTENT_TYPE).is_none());
}

#[tokio::test]
async fn test_health_decodes_name_and_version() {
    let transport = RecordingTransport::ok("{\"name\":\"es\",\"version\":\"1.0\"}");
    let client = Client::with_transport(transport.clone());

    let mut resp = client.health().send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "es");
    assert_eq!(body["version"], "1.0");
}

#[tokio::test]
async fn test_health_transport_failure_is_the_only_result() {
    let transport = RecordingTransport::failing("connection reset");
    let client = Client::with_transport(transport.clone());

    let err = client.health().send().await.unwrap_err();
    assert!(matches!(err, GriddleError::Transport(_)));
}
