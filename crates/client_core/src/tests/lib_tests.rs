use super::*;
use axum::{extract::Query, http::StatusCode as HttpStatus, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use shared::domain::FieldValue;
use tokio::net::TcpListener;

async fn handle_search(Query(query): Query<SearchQuery>) -> axum::response::Response {
    match query.question.as_str() {
        "boom" => (HttpStatus::INTERNAL_SERVER_ERROR, "backend exploded").into_response(),
        "empty" => Json(json!({ "results": [] })).into_response(),
        "missing" => Json(json!({ "status": "ok" })).into_response(),
        "garbled" => (HttpStatus::OK, "<html>not json</html>").into_response(),
        question => Json(json!({
            "results": [
                {
                    "FirstName": "Ada",
                    "LastName": "Lovelace",
                    "Headline": "Engineer",
                    "City": "London",
                    "Question": question,
                }
            ]
        }))
        .into_response(),
    }
}

async fn spawn_search_server(prefix: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route(&format!("{prefix}/api/search"), get(handle_search));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}{prefix}")
}

/// Client that talks to the in-process server directly, whatever proxy the
/// environment configures.
fn local_client(base: &str, timeout: Option<Duration>) -> SearchClient {
    let mut builder = Client::builder().no_proxy();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    SearchClient::with_http_client(base, builder.build().expect("http client")).expect("client")
}

#[test]
fn endpoint_appends_search_path_to_base_url() {
    let cases = [
        ("https://backend.example.com", "https://backend.example.com/api/search"),
        ("https://backend.example.com/", "https://backend.example.com/api/search"),
        ("https://backend.example.com/v2", "https://backend.example.com/v2/api/search"),
        ("http://127.0.0.1:9000/v2/?x=1", "http://127.0.0.1:9000/v2/api/search"),
    ];
    for (base, expected) in cases {
        let client = SearchClient::new(base).expect("client");
        assert_eq!(client.endpoint().as_str(), expected, "base: {base}");
    }
}

#[test]
fn options_without_timeout_build_a_client() {
    let client = SearchClient::with_options(
        "http://127.0.0.1:9",
        SearchClientOptions {
            request_timeout: None,
        },
    )
    .expect("client");
    assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:9/api/search");
}

#[test]
fn rejects_non_http_base_urls() {
    for base in ["not a url", "mailto:someone@example.com", "ftp://example.com"] {
        let err = SearchClient::new(base).expect_err("must reject");
        assert!(
            matches!(err, SearchError::InvalidBaseUrl { .. }),
            "unexpected error for {base}: {err}"
        );
    }
}

#[tokio::test]
async fn search_returns_profiles_and_encodes_question() {
    let base = spawn_search_server("").await;
    let client = local_client(&base, None);

    let question = "profiles from Stockholm, Sweden & Oslo?";
    let results = client.search(question).await.expect("search");

    assert_eq!(results.len(), 1);
    let profile = &results[0];
    assert_eq!(profile.first_name.as_deref(), Some("Ada"));
    assert_eq!(profile.last_name.as_deref(), Some("Lovelace"));
    assert_eq!(profile.headline.as_deref(), Some("Engineer"));
    assert_eq!(profile.extra.get("City"), Some(&FieldValue::from("London")));
    assert_eq!(profile.extra.get("Question"), Some(&FieldValue::from(question)));
}

#[tokio::test]
async fn search_works_under_a_base_path() {
    let base = spawn_search_server("/v1").await;
    let client = local_client(&base, None);

    let results = client.search("Stockholm").await.expect("search");
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn empty_and_missing_results_are_empty_success() {
    let base = spawn_search_server("").await;
    let client = local_client(&base, None);

    assert!(client.search("empty").await.expect("empty").is_empty());
    assert!(client.search("missing").await.expect("missing").is_empty());
}

#[tokio::test]
async fn server_error_maps_to_status_failure() {
    let base = spawn_search_server("").await;
    let client = local_client(&base, None);

    let err = client.search("boom").await.expect_err("must fail");
    assert!(matches!(err, SearchError::Status(status) if status.as_u16() == 500));
    assert_eq!(FailureReason::from(&err), FailureReason::Status(500));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_failure() {
    let base = spawn_search_server("").await;
    let client = local_client(&base, None);

    let err = client.search("garbled").await.expect_err("must fail");
    assert!(matches!(err, SearchError::Decode(_)), "unexpected: {err}");
    assert_eq!(FailureReason::from(&err), FailureReason::Decode);
}

#[tokio::test]
async fn unreachable_backend_maps_to_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = local_client(&format!("http://{addr}"), None);
    let err = client.search("Stockholm").await.expect_err("must fail");
    assert!(matches!(err, SearchError::Transport(_)), "unexpected: {err}");
    assert_eq!(FailureReason::from(&err), FailureReason::Transport);
}

#[tokio::test]
async fn request_timeout_surfaces_as_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route(
        "/api/search",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "results": [] }))
        }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = local_client(&format!("http://{addr}"), Some(Duration::from_millis(100)));

    let err = client.search("slow").await.expect_err("must time out");
    assert!(matches!(err, SearchError::Transport(ref inner) if inner.is_timeout()));
}
