//! Browser transport backed by `gloo-net`.
//!
//! Client-side (hydrate): real `fetch` calls raced against a `gloo-timers`
//! timeout. Server-side (SSR): every send fails with a transport error since
//! these endpoints are only meaningful in the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;

use super::error::HttpError;
use super::http::{RequestContext, Response, Transport};
use crate::config::ClientConfig;

#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base.clone(), timeout_ms: config.request_timeout_ms }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

/// Parse a response body; empty or non-JSON payloads become `Null`.
pub fn parse_body(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or(serde_json::Value::Null)
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &RequestContext) -> Result<Response, HttpError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::Request;

            use super::http::Method;

            let url = self.url_for(&request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| HttpError::Encode(e.to_string()))?;

            let send = Box::pin(prepared.send());
            let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
            let resp = match select(send, timeout).await {
                Either::Left((result, _)) => result.map_err(|e| HttpError::Transport(e.to_string()))?,
                Either::Right(((), _)) => return Err(HttpError::Timeout(self.timeout_ms)),
            };

            let status = resp.status();
            let raw = resp.text().await.unwrap_or_default();
            Ok(Response::new(status, parse_body(&raw)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(HttpError::Transport("not available on server".to_owned()))
        }
    }
}
