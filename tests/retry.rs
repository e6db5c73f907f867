mod common;

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;
use tokio::net::TcpListener;
use tfe_client::error::{ApiError, Error};
use tfe_client::{Config, OrganizationsApi, TfeClient};

use common::{TOKEN, api_path, client, init_logging, organization};

#[tokio::test]
async fn test_throttled_request_is_retried() {
    let mut server = mockito::Server::new_async().await;
    let throttled = server
        .mock("GET", api_path("organizations/acme").as_str())
        .with_status(429)
        .with_header("retry-after", "0")
        .with_header("x-ratelimit-limit", "30")
        .expect(1)
        .create_async()
        .await;
    let ok = server
        .mock("GET", api_path("organizations/acme").as_str())
        .with_status(200)
        .with_body(json!({ "data": organization("acme") }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client(&server);
    let org = client.read_organization("acme").await.unwrap();

    throttled.assert_async().await;
    ok.assert_async().await;
    assert_eq!(org.name, "acme");
    assert_eq!(client.rate_limit(), 30);
}

#[tokio::test]
async fn test_retries_stop_at_retry_max() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", api_path("organizations/acme").as_str())
        .with_status(429)
        .with_header("retry-after", "0")
        .expect(3)
        .create_async()
        .await;

    let err = client(&server).read_organization("acme").await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::Api(ApiError::RateLimit(_))));
}

#[tokio::test]
async fn test_server_errors_are_not_retried_by_default() {
    init_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", api_path("organizations/acme").as_str())
        .with_status(503)
        .with_body(r#"{"errors":[{"title":"unavailable","detail":"try later"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = TfeClient::new(Config::new(server.url(), TOKEN)).unwrap();
    let err = client.delete_organization("acme").await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::Api(ApiError::ServerError(ref m)) if m == "unavailable: try later"));
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    init_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", api_path("organizations/acme").as_str())
        .match_header("x-team", "platform")
        .match_header("user-agent", Matcher::Regex("^tfe-client/".to_string()))
        .with_status(200)
        .with_body(json!({ "data": organization("acme") }).to_string())
        .create_async()
        .await;

    let mut config = Config::new(server.url(), TOKEN);
    config.headers.insert("X-Team".to_string(), "platform".to_string());
    TfeClient::new(config)
        .unwrap()
        .read_organization("acme")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_slow_server_times_out() {
    init_logging();
    // Accepts connections but never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    let hold = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let mut config = Config::new(address, TOKEN);
    config.timeout_secs = 1;
    let err = TfeClient::new(config)
        .unwrap()
        .read_organization("acme")
        .await
        .unwrap_err();

    hold.abort();
    assert!(matches!(err, Error::Api(ApiError::Timeout)), "got {:?}", err);
}

#[tokio::test]
async fn test_dropped_request_stops_retrying() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", api_path("organizations/acme").as_str())
        .with_status(429)
        .with_header("retry-after", "30")
        .expect(1)
        .create_async()
        .await;

    let client = client(&server);
    let outcome = tokio::time::timeout(Duration::from_millis(300), client.read_organization("acme")).await;
    assert!(outcome.is_err());

    tokio::time::sleep(Duration::from_millis(100)).await;
    mock.assert_async().await;
}
