//! Transport seam
//!
//! Services describe a request as an [`ApiRequest`] and hand it to a
//! [`Transport`], which returns the raw body of a successful response.
//! Headers, credentials and status handling live entirely on the transport
//! side.

use crate::error::Result;
use crate::types::{Method, Params};
use async_trait::async_trait;
use bytes::Bytes;

/// A request relative to the API base URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, without a leading slash
    pub path: String,
    /// Query parameters, in order
    pub query: Params,
    /// Form-encoded body (POST only)
    pub form: Option<Params>,
}

impl ApiRequest {
    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create a POST request with an empty form
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            ..Default::default()
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append several query parameters
    #[must_use]
    pub fn with_query(mut self, params: Params) -> Self {
        self.query.extend(params);
        self
    }

    /// Set the form body
    #[must_use]
    pub fn form(mut self, form: Params) -> Self {
        self.form = Some(form);
        self
    }
}

/// Sends requests and returns raw response bodies
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request. Non-success statuses are errors; the body is never
    /// decoded in that case.
    async fn send(&self, request: ApiRequest) -> Result<Bytes>;
}
