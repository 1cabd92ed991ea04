//! HTTP pack service client against a mock server.

mod common;

use common::mock_service::{MockPackService, MockResponse};
use packopener::config::ServiceConfig;
use packopener::pack::PackId;
use packopener::service::{
    HttpPackService, PackService, ServiceError, CREATE_PACK_PATH, OPEN_PACK_PATH,
};

fn client_for(mock: &MockPackService) -> HttpPackService {
    let config = ServiceConfig {
        base_url: mock.base_url(),
        timeout_seconds: 1,
        connect_timeout_seconds: 1,
    };
    HttpPackService::new(&config).expect("client")
}

#[tokio::test]
async fn test_create_pack_posts_name_and_reads_id() {
    let mock = MockPackService::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"pack": {"_id": "65f0c0ffee", "name": "Common Pack", "cards": []}}"#,
    ))
    .await;

    let pack_id = client_for(&mock).create_pack("Common Pack").await.unwrap();
    assert_eq!(pack_id, PackId::new("65f0c0ffee"));

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, CREATE_PACK_PATH);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(requests[0].json(), serde_json::json!({"name": "Common Pack"}));
}

#[tokio::test]
async fn test_open_pack_returns_cards_in_order() {
    let mock = MockPackService::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[
            {"_id": "c1", "name": "Monkey.D.Luffy", "imageUrl": "/images/op01-001.png"},
            {"id": "c2", "name": "Zoro", "imageUrl": "https://cdn.example.com/op01-025.png"},
            {"_id": "c3", "name": "Nami", "imageUrl": "images/op01-016.png"}
        ]"#,
    ))
    .await;

    let records = client_for(&mock)
        .open_pack(&PackId::new("65f0c0ffee"))
        .await
        .unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
    assert_eq!(records[0].name, "Monkey.D.Luffy");
    assert_eq!(
        records[0].image_url,
        format!("{}/images/op01-001.png", mock.base_url())
    );
    assert_eq!(records[1].image_url, "https://cdn.example.com/op01-025.png");
    assert_eq!(
        records[2].image_url,
        format!("{}/images/op01-016.png", mock.base_url())
    );

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, OPEN_PACK_PATH);
    assert_eq!(requests[0].json(), serde_json::json!({"packId": "65f0c0ffee"}));
}

#[tokio::test]
async fn test_open_pack_accepts_empty_list() {
    let mock = MockPackService::start().await;
    mock.enqueue_response(MockResponse::json("[]")).await;

    let records = client_for(&mock).open_pack(&PackId::new("p1")).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mock = MockPackService::start().await;
    mock.enqueue_response(MockResponse::error(404, "Pack not found"))
        .await;

    let err = client_for(&mock)
        .open_pack(&PackId::new("missing"))
        .await
        .unwrap_err();
    match err {
        ServiceError::Status { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Pack not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_pack_id_is_rejected() {
    let mock = MockPackService::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"pack": {"_id": ""}}"#))
        .await;

    let err = client_for(&mock).create_pack("Common Pack").await.unwrap_err();
    assert!(matches!(err, ServiceError::MissingPackId));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock = MockPackService::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"unexpected": true}"#))
        .await;

    let err = client_for(&mock).create_pack("Common Pack").await.unwrap_err();
    assert_eq!(err.error_type(), "decode_error");
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let mock = MockPackService::start().await;
    mock.enqueue_response(MockResponse::json("[]").with_delay(1500))
        .await;

    let err = client_for(&mock).open_pack(&PackId::new("p1")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Timeout { duration: 1 }));
}

#[tokio::test]
async fn test_unreachable_service_is_connection_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ServiceConfig {
        base_url: format!("http://127.0.0.1:{}", port),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    let err = HttpPackService::new(&config)
        .unwrap()
        .create_pack("Common Pack")
        .await
        .unwrap_err();
    assert_eq!(err.error_type(), "connection_error");
}
