use folio_backend_client::FetchOptions;
use folio_backend_client::FetchResult;
use folio_backend_client::PortfolioClient;
use pretty_assertions::assert_eq;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderValue;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

use super::client_for;

#[tokio::test]
async fn unwraps_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/widgets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": [{"a": 1}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .safe_fetch("/widgets", FetchOptions::get())
        .await;

    assert_eq!(result, FetchResult::ok(json!([{"a": 1}])));
}

#[tokio::test]
async fn envelope_precedence_over_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/results"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"results": [2], "items": [3]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null, "items": [3]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/bare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": 1})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let fetch = |endpoint: &'static str| {
        let client = client.clone();
        async move { client.safe_fetch(endpoint, FetchOptions::get()).await.data }
    };

    assert_eq!(fetch("/results").await, Some(json!([2])));
    assert_eq!(fetch("/items").await, Some(json!([3])));
    assert_eq!(fetch("/bare").await, Some(json!({"foo": 1})));
}

#[tokio::test]
async fn non_success_status_is_soft_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"data": [{"title": "x"}]})))
        .mount(&server)
        .await;

    let result = client_for(&server).get_projects().await;

    assert!(!result.success);
    assert_eq!(result.data, None);
    assert_eq!(result.error.as_deref(), Some("HTTP 500"));
}

#[tokio::test]
async fn not_found_reports_status() {
    let server = MockServer::start().await;

    // No mocks mounted: wiremock answers 404.
    let result = client_for(&server)
        .safe_fetch("/missing", FetchOptions::get())
        .await;

    assert_eq!(result, FetchResult::failure("HTTP 404"));
}

#[tokio::test]
async fn invalid_json_is_soft_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).get_blogs().await;

    assert!(!result.success);
    assert_eq!(result.data, None);
    let error = result.error.expect("error message");
    assert!(error.starts_with("invalid JSON response"), "{error}");
}

#[tokio::test]
async fn unreachable_backend_is_soft_failure() {
    // Port 1 is reserved and never listening in the test environment.
    let client = PortfolioClient::with_client(reqwest::Client::new(), "http://127.0.0.1:1/api");

    let result = client.get_skills().await;

    assert!(!result.success);
    assert_eq!(result.data, None);
    let error = result.error.expect("error message");
    assert!(error.starts_with("network error"), "{error}");
}

#[tokio::test]
async fn sends_json_content_type_and_merges_caller_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/secure"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .expect(1)
        .mount(&server)
        .await;

    let options =
        FetchOptions::get().with_header(AUTHORIZATION, HeaderValue::from_static("Bearer token"));
    let result = client_for(&server).safe_fetch("/secure", options).await;

    assert_eq!(result.data, Some(json!({"ok": true})));
}

#[tokio::test]
async fn caller_content_type_wins() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/plain"))
        .and(header("content-type", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1])))
        .expect(1)
        .mount(&server)
        .await;

    let options = FetchOptions::get().with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    let result = client_for(&server).safe_fetch("/plain", options).await;

    assert_eq!(result.data, Some(json!([1])));
}

#[tokio::test]
async fn null_payload_is_success_without_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let result = client_for(&server).get_services().await;

    assert!(result.success);
    assert_eq!(result.data, None);
    assert_eq!(result.error, None);
}
