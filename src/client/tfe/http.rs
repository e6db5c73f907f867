//! Request execution: retries, rate limiting and status mapping

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Method, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::TfeClient;
use crate::client::pagination::{PagedResponse, QueryParams};
use crate::client::rate_limit::limit_from_headers;
use crate::error::{ApiError, Error, Result};
use crate::jsonapi::{Decode, Document, MEDIA_TYPE};

/// First retry waits this long, doubling on every attempt.
const BACKOFF_BASE: Duration = Duration::from_millis(100);

/// Upper bound for the computed backoff.
const BACKOFF_MAX: Duration = Duration::from_secs(2);

/// Wait used for a final 429 that carried no hint.
const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);

/// Outgoing request body
pub(crate) enum Body {
    /// JSON:API document
    Document(Value),
    /// Raw upload
    Bytes(Vec<u8>),
}

impl Body {
    fn encode(&self) -> Result<(&'static str, Vec<u8>)> {
        match self {
            Body::Document(value) => Ok((MEDIA_TYPE, serde_json::to_vec(value)?)),
            Body::Bytes(bytes) => Ok(("application/octet-stream", bytes.clone())),
        }
    }
}

/// Backoff for re-attempt `attempt` (0-based).
fn backoff(attempt: u32) -> Duration {
    BACKOFF_BASE
        .checked_mul(2u32.saturating_pow(attempt))
        .unwrap_or(BACKOFF_MAX)
        .min(BACKOFF_MAX)
}

/// Server hint from `Retry-After` or `X-RateLimit-Reset`, in seconds.
fn retry_hint(headers: &HeaderMap) -> Option<Duration> {
    ["retry-after", "x-ratelimit-reset"].iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(Duration::from_secs_f64)
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorObject {
    Detailed {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        detail: Option<String>,
    },
    Plain(String),
}

#[derive(Deserialize)]
struct ErrorDocument {
    errors: Vec<ErrorObject>,
}

/// Join the `errors` array of an error body into one message.
fn error_message(body: &str) -> Option<String> {
    let document: ErrorDocument = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = document
        .errors
        .into_iter()
        .filter_map(|e| match e {
            ErrorObject::Detailed { title, detail } => match (title, detail) {
                (Some(title), Some(detail)) => Some(format!("{}: {}", title, detail)),
                (title, detail) => detail.or(title),
            },
            ErrorObject::Plain(message) => Some(message),
        })
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

/// Map a non-success response to an error.
async fn error_from_response(response: Response) -> Error {
    let status = response.status();
    let hint = retry_hint(response.headers());
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
        StatusCode::UNPROCESSABLE_ENTITY => ApiError::Unprocessable(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(hint.unwrap_or(DEFAULT_RETRY_AFTER)),
        status if status.is_server_error() => ApiError::ServerError(message),
        status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    };
    err.into()
}

impl TfeClient {
    fn is_retryable(&self, status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || (self.retry_server_errors && status.is_server_error())
    }

    /// Send a request, retrying throttled (and optionally failed) responses.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<Body>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let payload = body.as_ref().map(Body::encode).transpose()?;
        let mut attempt = 0;

        loop {
            self.rate_limiter.wait_if_active().await;

            let mut request = self.http.request(method.clone(), &url);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some((content_type, bytes)) = &payload {
                request = request.header(CONTENT_TYPE, *content_type).body(bytes.clone());
            }

            debug!("{} {}", method, url);
            let response = request.send().await.map_err(ApiError::from)?;
            let status = response.status();
            debug!("{} {} -> {}", method, url, status.as_u16());

            if status.is_success() {
                return Ok(response);
            }

            if self.is_retryable(status) && attempt < self.retry_max {
                if status == StatusCode::TOO_MANY_REQUESTS {
                    self.rate_limiter
                        .activate(limit_from_headers(response.headers()))
                        .await;
                }
                let wait = retry_hint(response.headers()).unwrap_or_else(|| backoff(attempt));
                attempt += 1;
                warn!(
                    "{} {} returned {}, retrying in {:?} (attempt {}/{})",
                    method,
                    url,
                    status.as_u16(),
                    wait,
                    attempt,
                    self.retry_max
                );
                tokio::time::sleep(wait).await;
                continue;
            }

            return Err(error_from_response(response).await);
        }
    }

    /// Send and parse the response document. An empty body is an empty
    /// document.
    pub(crate) async fn document(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Option<Body>,
    ) -> Result<Document> {
        let response = self.send(method, path, query, body).await?;
        let bytes = response.bytes().await.map_err(ApiError::from)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Document::default());
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response document: {}", e)).into()
        })
    }

    pub(crate) async fn get_one<T: Decode>(&self, path: &str, query: &QueryParams) -> Result<T> {
        let document = self.document(Method::GET, path, query, None).await?;
        Ok(document.decode_one()?)
    }

    pub(crate) async fn get_page<T: Decode>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<PagedResponse<T>> {
        let document = self.document(Method::GET, path, query, None).await?;
        let items = document.decode_many()?;
        Ok(match document.pagination() {
            Some(pagination) => PagedResponse::with_pagination(items, pagination.clone()),
            None => PagedResponse::new(items),
        })
    }

    pub(crate) async fn post_one<T: Decode>(&self, path: &str, body: Value) -> Result<T> {
        let document = self
            .document(Method::POST, path, &QueryParams::new(), Some(Body::Document(body)))
            .await?;
        Ok(document.decode_one()?)
    }

    pub(crate) async fn patch_one<T: Decode>(&self, path: &str, body: Value) -> Result<T> {
        let document = self
            .document(Method::PATCH, path, &QueryParams::new(), Some(Body::Document(body)))
            .await?;
        Ok(document.decode_one()?)
    }

    /// Send a request whose response body is ignored.
    pub(crate) async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        self.send(method, path, &QueryParams::new(), body.map(Body::Document))
            .await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None).await
    }

    pub(crate) async fn put_bytes(&self, path: &str, content: Vec<u8>) -> Result<()> {
        self.send(Method::PUT, path, &QueryParams::new(), Some(Body::Bytes(content)))
            .await?;
        Ok(())
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.send(Method::GET, path, &QueryParams::new(), None).await?;
        let bytes = response.bytes().await.map_err(ApiError::from)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_backoff_doubles_and_caps() {
        assert_eq!(backoff(0), Duration::from_millis(100));
        assert_eq!(backoff(1), Duration::from_millis(200));
        assert_eq!(backoff(3), Duration::from_millis(800));
        assert_eq!(backoff(5), BACKOFF_MAX);
        assert_eq!(backoff(40), BACKOFF_MAX);
    }

    #[test]
    fn test_retry_hint_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_hint(&headers), None);

        headers.insert("x-ratelimit-reset", HeaderValue::from_static("0.25"));
        assert_eq!(retry_hint(&headers), Some(Duration::from_millis(250)));

        headers.insert("retry-after", HeaderValue::from_static("2"));
        assert_eq!(retry_hint(&headers), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_error_message_from_errors_array() {
        let body = r#"{"errors":[{"status":"422","title":"invalid attribute","detail":"Name has already been taken"}]}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("invalid attribute: Name has already been taken")
        );

        let body = r#"{"errors":["not found"]}"#;
        assert_eq!(error_message(body).as_deref(), Some("not found"));

        assert_eq!(error_message("<html>oops</html>"), None);
        assert_eq!(error_message(r#"{"errors":[]}"#), None);
    }
}
