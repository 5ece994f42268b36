//! Typed client library for the Twitch Helix REST API.
//!
//! Every endpoint is a thin wrapper around one generic invoker that sends the
//! request through an injected [`Transport`], fills the common response
//! envelope, and decodes the endpoint payload.
//!
//! Non-success HTTP statuses are not errors: they are reported through
//! [`ResponseCommon`] and the caller decides what to do. Only transport
//! failures and malformed success bodies come back as [`HelixError`].

pub mod api;
pub mod client;
pub mod config;
pub mod query;
pub mod response;
pub mod transport;

pub use api::*;
pub use client::HelixClient;
pub use config::ClientConfig;
pub use query::{QueryBuilder, ToQuery};
pub use response::{HelixResponse, NoContent, Pagination, RateLimit, ResponseCommon};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Unified error type for the helix-client crate.
#[derive(Debug, thiserror::Error)]
pub enum HelixError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}
