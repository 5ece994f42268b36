//! Client configuration.
//!
//! Credentials are supplied by the caller and forwarded as request headers.
//! Nothing here refreshes or validates tokens.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use crate::HelixError;

pub const DEFAULT_BASE_URL: &str = "https://api.twitch.tv/helix";

const ENV_CLIENT_ID: &str = "HELIX_CLIENT_ID";
const ENV_ACCESS_TOKEN: &str = "HELIX_ACCESS_TOKEN";
const ENV_BASE_URL: &str = "HELIX_BASE_URL";

/// Settings shared by every request a [`crate::HelixClient`] sends.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub client_id: Option<String>,
    pub access_token: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            client_id: None,
            access_token: None,
            user_agent: concat!("helix-client/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl ClientConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self::default().with_client_id(client_id)
    }

    /// Load configuration from the environment.
    ///
    /// `HELIX_CLIENT_ID` is required; `HELIX_ACCESS_TOKEN` and
    /// `HELIX_BASE_URL` are optional.
    pub fn from_env() -> Result<Self, HelixError> {
        let client_id = non_empty_var(ENV_CLIENT_ID).ok_or(HelixError::MissingEnv(ENV_CLIENT_ID))?;
        let mut config = Self::new(client_id);
        if let Some(token) = non_empty_var(ENV_ACCESS_TOKEN) {
            config = config.with_access_token(token);
        }
        if let Some(base_url) = non_empty_var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Bearer token sent as `Authorization: Bearer <token>`.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve `path` (e.g. `/users`) against the base URL.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, HelixError> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Build the headers attached to every request.
    pub(crate) fn headers(&self) -> Result<HeaderMap, HelixError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        if let Some(client_id) = &self.client_id {
            headers.insert("Client-Id", HeaderValue::from_str(client_id)?);
        }
        if let Some(token) = &self.access_token {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }
        Ok(headers)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
