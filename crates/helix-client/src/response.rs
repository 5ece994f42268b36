//! Response envelope shared by every endpoint.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::transport::HttpResponse;

const HEADER_RATELIMIT_LIMIT: &str = "Ratelimit-Limit";
const HEADER_RATELIMIT_REMAINING: &str = "Ratelimit-Remaining";
const HEADER_RATELIMIT_RESET: &str = "Ratelimit-Reset";

/// Rate-limit counters copied from the response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: Option<u32>,
    pub remaining: Option<u32>,
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_number(headers, HEADER_RATELIMIT_LIMIT),
            remaining: header_number(headers, HEADER_RATELIMIT_REMAINING),
            reset: header_number::<i64>(headers, HEADER_RATELIMIT_RESET)
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        }
    }
}

fn header_number<N: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<N> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Helix error body, e.g. `{"error":"Unauthorized","status":401,"message":"..."}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    status: u16,
    #[serde(default)]
    message: String,
}

/// Transport-level outcome of a call. Filled for every response.
#[derive(Debug, Clone, Default)]
pub struct ResponseCommon {
    pub status_code: u16,
    pub headers: HeaderMap,
    /// Short error name from the error body. Empty on success.
    pub error: String,
    pub error_status: u16,
    pub error_message: String,
    pub rate_limit: RateLimit,
}

impl ResponseCommon {
    /// Envelope for a response. Error fields stay empty for 2xx.
    pub(crate) fn from_response(resp: &HttpResponse) -> Self {
        let mut common = Self {
            status_code: resp.status,
            headers: resp.headers.clone(),
            rate_limit: RateLimit::from_headers(&resp.headers),
            ..Self::default()
        };

        if !resp.is_success() {
            common.hydrate_error(resp);
        }
        common
    }

    fn hydrate_error(&mut self, resp: &HttpResponse) {
        match serde_json::from_slice::<ErrorBody>(&resp.body) {
            Ok(body) => {
                self.error = body.error;
                self.error_status = body.status;
                self.error_message = body.message;
            }
            Err(_) => {
                self.error_message = resp.text().trim().to_string();
            }
        }

        if self.error.is_empty() {
            self.error = StatusCode::from_u16(resp.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown Error")
                .to_string();
        }
        if self.error_status == 0 {
            self.error_status = resp.status;
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Envelope plus decoded payload.
///
/// `data` holds the endpoint payload for 2xx responses and `T::default()`
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct HelixResponse<T> {
    pub common: ResponseCommon,
    pub data: T,
}

impl<T> HelixResponse<T> {
    pub fn is_success(&self) -> bool {
        self.common.is_success()
    }
}

/// Pagination block of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub cursor: Option<String>,
}

impl Pagination {
    /// Cursor for the next page, if the server issued a non-empty one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|cursor| !cursor.is_empty())
    }
}

/// Payload for endpoints that answer with no content (204).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct NoContent {}
