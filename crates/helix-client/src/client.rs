//! Helix client and the generic endpoint invoker.

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::query::ToQuery;
use crate::response::{HelixResponse, ResponseCommon};
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::HelixError;

/// Twitch Helix API client.
///
/// Generic over the transport so tests (or callers with their own HTTP
/// stack) can swap it out. Holds no mutable state; clone it freely and share
/// it across tasks.
#[derive(Debug, Clone)]
pub struct HelixClient<T: Transport = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
}

impl HelixClient<ReqwestTransport> {
    /// Creates a client with the default reqwest transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> HelixClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and decode the result.
    ///
    /// - transport failures come back as `Err`;
    /// - any HTTP status yields `Ok`, with the envelope filled in;
    /// - the payload is decoded only for 2xx responses with a body, and
    ///   is `P::default()` otherwise;
    /// - a 2xx body that does not match `P` is `Err(HelixError::Json)`.
    pub async fn invoke<P>(
        &self,
        method: Method,
        path: &str,
        params: &impl ToQuery,
    ) -> Result<HelixResponse<P>, HelixError>
    where
        P: DeserializeOwned + Default,
    {
        self.send::<P>(method, path, params, None).await
    }

    /// Like [`invoke`](Self::invoke), with a JSON request body.
    pub async fn invoke_with_body<P, B>(
        &self,
        method: Method,
        path: &str,
        params: &impl ToQuery,
        body: &B,
    ) -> Result<HelixResponse<P>, HelixError>
    where
        P: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        self.send::<P>(method, path, params, Some(body)).await
    }

    async fn send<P>(
        &self,
        method: Method,
        path: &str,
        params: &impl ToQuery,
        body: Option<Vec<u8>>,
    ) -> Result<HelixResponse<P>, HelixError>
    where
        P: DeserializeOwned + Default,
    {
        let mut url = self.config.endpoint_url(path)?;
        let query = params.to_query_string();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let mut headers = self.config.headers()?;
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        tracing::debug!(%method, path, "Sending Helix request");
        let resp = self
            .transport
            .send(HttpRequest {
                method: method.clone(),
                url,
                headers,
                body,
            })
            .await?;

        let common = ResponseCommon::from_response(&resp);
        tracing::debug!(
            %method,
            path,
            status = common.status_code,
            ratelimit_remaining = common.rate_limit.remaining,
            "Helix response received"
        );

        if !common.is_success() {
            tracing::warn!(
                %method,
                path,
                status = common.status_code,
                error = %common.error,
                message = %common.error_message,
                "Helix request returned an error status"
            );
            return Ok(HelixResponse {
                common,
                data: P::default(),
            });
        }

        let data = if resp.is_empty() {
            P::default()
        } else {
            serde_json::from_slice(&resp.body)?
        };

        Ok(HelixResponse { common, data })
    }

    pub(crate) async fn get<P>(
        &self,
        path: &str,
        params: &impl ToQuery,
    ) -> Result<HelixResponse<P>, HelixError>
    where
        P: DeserializeOwned + Default,
    {
        self.invoke(Method::GET, path, params).await
    }

    pub(crate) async fn put<P>(
        &self,
        path: &str,
        params: &impl ToQuery,
    ) -> Result<HelixResponse<P>, HelixError>
    where
        P: DeserializeOwned + Default,
    {
        self.invoke(Method::PUT, path, params).await
    }

    pub(crate) async fn delete<P>(
        &self,
        path: &str,
        params: &impl ToQuery,
    ) -> Result<HelixResponse<P>, HelixError>
    where
        P: DeserializeOwned + Default,
    {
        self.invoke(Method::DELETE, path, params).await
    }
}
