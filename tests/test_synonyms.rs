use http::header::CONTENT_TYPE;
use http::Method;

use griddle::{Client, GriddleError};

mod common;
use common::RecordingTransport;

#[tokio::test]
async fn test_list_synonyms_request_shape() {
    let transport = RecordingTransport::ok("{\"results\":[]}");
    let client = Client::with_transport(transport.clone());

    client
        .app_search()
        .synonyms()
        .list("video-games")
        .send()
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/as/v1/engines/video-games/synonyms");
    assert!(request.body.is_none());
    assert!(request.headers.get(CONTENT_TYPE).is_none());
}

#[tokio::test]
async fn test_list_synonyms_with_paging_body() {
    let transport = RecordingTransport::ok("{\"results\":[]}");
    let client = Client::with_transport(transport.clone());

    client
        .app_search()
        .synonyms()
        .list("video-games")
        .body(r#"{"page":{"current":2,"size":10}}"#)
        .send()
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(
        request.body.as_deref(),
        Some(br#"{"page":{"current":2,"size":10}}"#.as_slice())
    );
    assert_eq!(
        request.headers.get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_get_synonym_set_request_shape() {
    let transport = RecordingTransport::ok("{}");
    let client = Client::with_transport(transport.clone());

    client
        .app_search()
        .synonyms()
        .get("video-games", "syn-1")
        .send()
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/as/v1/engines/video-games/synonyms/syn-1");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_create_synonym_set_request_shape() {
    let transport = RecordingTransport::ok("{}");
    let client = Client::with_transport(transport.clone());

    client
        .app_search()
        .synonyms()
        .create("video-games", ["ring", "rings"])
        .send()
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/as/v1/engines/video-games/synonyms");
    assert_eq!(
        request.body.as_deref(),
        Some(br#"{"synonyms":["ring","rings"]}"#.as_slice())
    );
    assert_eq!(
        request.headers.get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_update_synonym_set_request_shape() {
    let transport = RecordingTransport::ok("{}");
    let client = Client::with_transport(transport.clone());

    client
        .app_search()
        .synonyms()
        .update("e", "syn-1", ["a", "b"])
        .send()
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path, "/api/as/v1/engines/e/synonyms/syn-1");
    assert_eq!(
        request.body.as_deref(),
        Some(br#"{"id":"syn-1","synonyms":["a","b"]}"#.as_slice())
    );
}

#[tokio::test]
async fn test_delete_synonym_set_request_shape() {
    let transport = RecordingTransport::ok("{\"deleted\":true}");
    let client = Client::with_transport(transport.clone());

    client
        .app_search()
        .synonyms()
        .delete("video-games", "syn-1")
        .send()
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.path, "/api/as/v1/engines/video-games/synonyms/syn-1");
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_empty_synonym_set_still_serializes() {
    let transport = RecordingTransport::ok("{}");
    let client = Client::with_transport(transport.clone());

    client
        .app_search()
        .synonyms()
        .create("video-games", Vec::<String>::new())
        .send()
        .await
        .unwrap();

    // Required payload parameters always serialize, unlike optional ones.
    let request = transport.last_request();
    assert_eq!(
        request.body.as_deref(),
        Some(br#"{"synonyms":[]}"#.as_slice())
    );
}

#[tokio::test]
async fn test_transport_failure_is_the_only_result() {
    let transport = RecordingTransport::failing("connection reset");
    let client = Client::with_transport(transport.clone());

    let err = client
        .app_search()
        .synonyms()
        .update("e", "syn-1", ["a", "b"])
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, GriddleError::Transport(_)));
}
