//! Tests for the API client error taxonomy and the degraded fetch path

use tally_cli::api::{ApiClient, FetchError};
use tally_cli::filter::{FilterController, FilterEvent};
use tally_cli::snapshot::load_snapshot;
use tally_cli::view::ConsoleTable;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Serve exactly one canned HTTP response on an ephemeral port
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_unreachable_server_yields_transport_error() {
    // discard port, nothing listens there
    let api = ApiClient::new("http://127.0.0.1:9");
    let result = api.fetch_inventory().await;
    assert!(matches!(result, Err(FetchError::Transport { .. })));
}

#[tokio::test]
async fn test_non_success_response_yields_status_error() {
    let base = serve_once("503 Service Unavailable", "").await;
    let api = ApiClient::new(&base);

    match api.fetch_inventory().await {
        Err(FetchError::Status { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/data"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_yields_decode_error() {
    let base = serve_once("200 OK", "this is not json").await;
    let api = ApiClient::new(&base);

    let result = api.fetch_inventory().await;
    assert!(matches!(result, Err(FetchError::Decode { .. })));
}

#[tokio::test]
async fn test_inventory_document_decodes_end_to_end() {
    let base = serve_once(
        "200 OK",
        r#"{"deployments": [{"name": "web", "namespace": "prod", "replicas": 2}], "nodes": []}"#,
    )
    .await;
    let api = ApiClient::new(&base);

    let document = api.fetch_inventory().await.unwrap();
    assert_eq!(document.deployments.len(), 1);
    assert_eq!(document.deployments[0].name.as_deref(), Some("web"));
    assert!(document.statefulsets.is_empty());
}

#[tokio::test]
async fn test_status_failure_degrades_to_empty_usable_snapshot() {
    let base = serve_once("500 Internal Server Error", "").await;
    let api = ApiClient::new(&base);

    let snapshot = load_snapshot(&api).await;
    assert!(snapshot.rows.is_empty());
    assert!(snapshot.namespaces.is_empty());

    // the controls stay operable over the empty data set
    let mut controller = FilterController::new(ConsoleTable::new());
    controller.load(snapshot.rows);
    controller.handle(FilterEvent::NamespaceSelected("prod".to_string()));
    assert_eq!(controller.view().visible_len(), 0);
    assert!(controller.view().render().contains("No results found"));
}

#[tokio::test]
async fn test_decode_failure_degrades_to_empty_snapshot() {
    let base = serve_once("200 OK", "<html>oops</html>").await;
    let api = ApiClient::new(&base);

    let snapshot = load_snapshot(&api).await;
    assert!(snapshot.rows.is_empty());
    assert!(snapshot.namespaces.is_empty());
}

#[tokio::test]
async fn test_snapshot_carries_rows_when_the_fetch_succeeds() {
    let base = serve_once(
        "200 OK",
        r#"{"deployments": [{"name": "web", "namespace": "prod"}]}"#,
    )
    .await;
    let api = ApiClient::new(&base);

    let snapshot = load_snapshot(&api).await;
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.rows[0].name.as_deref(), Some("web"));
    assert_eq!(snapshot.namespaces.iter().collect::<Vec<_>>(), vec!["prod"]);
}
