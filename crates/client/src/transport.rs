// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport layer for the remote collection store.
//!
//! Provides a trait-based transport that enables:
//! - Real HTTP requests for production
//! - Mock transports for unit testing
//!
//! One call issues one network request. There is no retry, no timeout and
//! no backoff; a failed attempt surfaces immediately.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::config::ClientConfig;

/// HTTP methods used by the collection store contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Returns the method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server answered outside the success range.
    #[error("http {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request could not be completed (connect, send or read failure).
    #[error("request failed: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// The response body was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Single-request transport to the remote collection store.
///
/// This trait abstracts over the actual HTTP mechanism, allowing view-model
/// tests to run against a mock without sockets.
pub trait Transport: Send + Sync {
    /// Perform one request against the configured base address.
    ///
    /// Returns the parsed JSON body of any success-range response. A JSON
    /// content type is set whenever a body is present.
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Value>> + Send + '_>>;
}

/// HTTP transport implementation using reqwest.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the configured base address.
    pub fn new(config: &ClientConfig) -> Self {
        HttpTransport {
            base_url: config.base_url.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// The base address requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Value>> + Send + '_>> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        Box::pin(async move {
            let mut request = match method {
                Method::Get => self.client.get(url),
                Method::Post => self.client.post(url),
            };
            if let Some(body) = body {
                request = request.json(&body);
            }

            let response = request
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
                });
            }

            response
                .json()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))
        })
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
