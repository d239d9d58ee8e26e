//! Middleware pipeline wrapping every outbound REST call.
//!
//! ARCHITECTURE
//! ============
//! `HttpClient` owns one [`Transport`] and an ordered list of [`Middleware`]
//! stages. Each call runs every stage's `on_request` in order, sends, maps
//! non-2xx responses to [`HttpError::Status`], runs every stage's `on_error`
//! on failure, and finally hands the original result back to the caller.
//!
//! Stages only add side effects. They cannot swallow or rewrite a failure.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::HttpError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Outgoing request state, mutated by `on_request` stages.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    pub method: Method,
    /// Path relative to the API base, e.g. `/auth/me`.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encode`] if `body` cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, HttpError> {
        let value = serde_json::to_value(body).map_err(|e| HttpError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Set a header, replacing any existing value with the same
    /// case-insensitive name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.into()));
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A completed HTTP exchange. `body` is `Null` when the payload was empty or
/// not JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: serde_json::Value,
}

impl Response {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        serde_json::from_value(self.body).map_err(|e| HttpError::Decode(e.to_string()))
    }
}

/// Sends a prepared request. Implementations return `Ok` for any status the
/// server produced and `Err` only when no response arrived.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestContext) -> Result<Response, HttpError>;
}

/// One named stage of the pipeline.
pub trait Middleware: Send + Sync {
    fn name(&self) -> &'static str;

    /// Runs before the request is sent. Must not fail.
    fn on_request(&self, _request: &mut RequestContext) {}

    /// Runs after a failed call, before the error is returned to the caller.
    fn on_error(&self, _request: &RequestContext, _error: &HttpError) {}
}

#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    stages: Vec<Arc<dyn Middleware>>,
}

impl HttpClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport, stages: Vec::new() }
    }

    /// Append a stage. Stages run in insertion order for both hooks.
    #[must_use]
    pub fn with_stage(mut self, stage: Arc<dyn Middleware>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run `request` through the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the transport failure, or [`HttpError::Status`] for non-2xx
    /// responses, after every stage's `on_error` has observed it.
    pub async fn send(&self, mut request: RequestContext) -> Result<Response, HttpError> {
        for stage in &self.stages {
            stage.on_request(&mut request);
        }

        let result = match self.transport.send(&request).await {
            Ok(resp) if resp.is_success() => Ok(resp),
            Ok(resp) => Err(HttpError::Status { status: resp.status, body: resp.body }),
            Err(e) => Err(e),
        };

        if let Err(err) = &result {
            log::debug!("request failed: path={} error={err}", request.path);
            for stage in &self.stages {
                stage.on_error(&request, err);
            }
        }
        result
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Propagates pipeline failures and decode errors.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.send(RequestContext::get(path)).await?.json()
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Propagates encode, pipeline, and decode failures.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = RequestContext::post(path).with_json(body)?;
        self.send(request).await?.json()
    }
}
