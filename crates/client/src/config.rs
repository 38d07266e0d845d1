// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! The remote base address is an explicit value handed to the transport
//! constructor, never read ambiently, so tests can point at a mock endpoint
//! without touching the environment. [`ClientConfig::from_env`] resolves it
//! once at startup.

/// Environment variable overriding the remote base address.
pub const BACKEND_URL_VAR: &str = "UPORT_BACKEND_URL";

/// Default base address of the collection store.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Configuration for the portal client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the remote collection store.
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config pointing at the given base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base address from the environment.
    ///
    /// Reads [`BACKEND_URL_VAR`], falling back to [`DEFAULT_BACKEND_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BACKEND_URL_VAR).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        ClientConfig { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
