//! Typed client for the remote CityGuard REST API.
//!
//! Every operation takes the [`ApiClient`] and a [`Caller`] describing whose
//! bearer token (if any) to forward. Non-2xx answers become [`AppError`]s
//! carrying the remote `message`.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::{ApiConfig, AppError};
use std::sync::OnceLock;
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

pub mod auth;
pub mod issue;
pub mod payment;
pub mod stats;
pub mod user;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Identity forwarded with an upstream call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Caller {
    pub token: Option<String>,
    pub request_id: Option<String>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            request_id: None,
        }
    }

    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// HTTP client bound to one remote API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .user_agent(concat!("cityguard-portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str, caller: &Caller) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &caller.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(id) = &caller.request_id {
            builder = builder.header(REQUEST_ID_HEADER, id);
        }
        builder
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let response = self.dispatch(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| e.into_app_error())
    }

    /// Send and discard whatever body comes back.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), AppError> {
        self.dispatch(builder).await.map(|_| ())
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, base_url = %self.base_url, "Upstream request failed");
            e.into_app_error()
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), path = %path, message = %message, "Upstream server error");
        } else {
            tracing::warn!(status = status.as_u16(), path = %path, message = %message, "Upstream rejected request");
        }
        Err(AppError::from_status(status.as_u16(), message))
    }

    /// `GET /health` on the remote API.
    pub async fn ping(&self) -> Result<(), AppError> {
        let builder = self.request(Method::GET, "/health", &Caller::anonymous());
        self.send_empty(builder).await
    }
}

/// Pull `message` (or `error`) out of a JSON error body, else describe the status.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| match status {
            StatusCode::UNAUTHORIZED => "Please sign in again".to_string(),
            StatusCode::FORBIDDEN => "You do not have permission to do that".to_string(),
            StatusCode::NOT_FOUND => "Not found".to_string(),
            s if s.is_server_error() => "The CityGuard service is having trouble".to_string(),
            s => s
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        })
}

/// Percent-encode an id before splicing it into a path.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Get or build the process-wide client from the loaded configuration.
///
/// Used by Dioxus server functions. Tests build their own `ApiClient`
/// pointed at a mock server instead.
pub fn get_client() -> &'static ApiClient {
    CLIENT.get_or_init(|| ApiClient::new(&crate::config::api_config()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_body_message() {
        assert_eq!(
            error_message(StatusCode::CONFLICT, r#"{"message":"Already upvoted"}"#),
            "Already upvoted"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"error":"Bad status"}"#),
            "Bad status"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(StatusCode::UNAUTHORIZED, ""), "Please sign in again");
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>"),
            "The CityGuard service is having trouble"
        );
        assert_eq!(error_message(StatusCode::CONFLICT, r#"{"message":""}"#), "Conflict");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:5000/".into(),
            timeout_secs: 5,
        });
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/issues"), "http://localhost:5000/issues");
    }

    #[test]
    fn segment_escapes_path_characters() {
        assert_eq!(segment("abc123"), "abc123");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn caller_builder() {
        let caller = Caller::with_token("tok").request_id("req-1");
        assert!(caller.is_authenticated());
        assert_eq!(caller.request_id.as_deref(), Some("req-1"));
        assert!(!Caller::anonymous().is_authenticated());
    }
}
