//! Shared helpers for integration tests against a mock server

#![allow(dead_code)]

use mockito::ServerGuard;
use serde_json::{Value, json};
use tfe_client::{Config, TfeClient};

pub const TOKEN: &str = "test-token";
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client pointed at the mock server, with retries enabled.
pub fn client(server: &ServerGuard) -> TfeClient {
    init_logging();
    let mut config = Config::new(server.url(), TOKEN);
    config.retry_max = 2;
    config.retry_server_errors = true;
    TfeClient::new(config).expect("mock client")
}

pub fn api_path(path: &str) -> String {
    format!("/api/v2/{}", path)
}

pub fn organization(name: &str) -> Value {
    json!({
        "type": "organizations",
        "id": name,
        "attributes": {
            "name": name,
            "email": format!("admin@{}.example.com", name),
            "cost-estimation-enabled": true
        }
    })
}

pub fn workspace(id: &str, name: &str) -> Value {
    json!({
        "type": "workspaces",
        "id": id,
        "attributes": {
            "name": name,
            "locked": false,
            "auto-apply": false
        },
        "relationships": {
            "organization": { "data": { "type": "organizations", "id": "acme" } }
        }
    })
}

pub fn page(data: Vec<Value>, current: usize, total_pages: usize, total_count: usize) -> String {
    let next = if current < total_pages { Some(current + 1) } else { None };
    json!({
        "data": data,
        "meta": {
            "pagination": {
                "current-page": current,
                "prev-page": if current > 1 { Some(current - 1) } else { None },
                "next-page": next,
                "total-pages": total_pages,
                "total-count": total_count
            }
        }
    })
    .to_string()
}
