//! HTTP transport boundary.
//!
//! The client never talks to the network directly; it hands a fully built
//! [`HttpRequest`] to a [`Transport`] and gets back status, headers and body.
//! Timeouts, proxies and TLS settings belong to the transport.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;
use url::Url;

use crate::HelixError;

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw response returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if the body is empty or whitespace only
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Body as lossy UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one HTTP request and returns the raw response.
///
/// Implementations must return `Ok` for every response the server produced,
/// including 4xx/5xx. `Err` is reserved for failures where no response
/// exists (connection refused, DNS, TLS, timeout).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HelixError>;
}

/// Production transport using reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a preconfigured client (timeouts, proxy, TLS roots).
    pub fn with_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HelixError> {
        let mut builder = self
            .inner
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    fn request(method: Method, url: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: Url::parse(url).unwrap(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn mock_transport_returns_configured_response() {
        let transport = MockTransport::new().on(Method::GET, "/helix/users", 200, "{}");

        let resp = transport
            .send(request(Method::GET, "https://api.twitch.tv/helix/users?id=1"))
            .await
            .unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(resp.text(), "{}");
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(transport.last_request().url.query(), Some("id=1"));
    }

    #[tokio::test]
    async fn mock_transport_errors_for_unknown_route() {
        let transport = MockTransport::new().on(Method::GET, "/helix/users", 200, "{}");

        let result = transport
            .send(request(Method::DELETE, "https://api.twitch.tv/helix/users"))
            .await;

        assert!(matches!(result, Err(HelixError::Transport(_))));
    }

    #[test]
    fn http_response_is_success() {
        let ok = |status| HttpResponse {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(204).is_success());
        assert!(!ok(401).is_success());
        assert!(!ok(500).is_success());
    }

    #[test]
    fn http_response_whitespace_body_is_empty() {
        let resp = HttpResponse {
            status: 204,
            headers: HeaderMap::new(),
            body: b" \n".to_vec(),
        };
        assert!(resp.is_empty());
    }
}
