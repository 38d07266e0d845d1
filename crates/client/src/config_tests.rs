// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for client configuration resolution.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::{ClientConfig, BACKEND_URL_VAR, DEFAULT_BACKEND_URL};

#[test]
fn explicit_config_is_taken_verbatim() {
    let config = ClientConfig::new("http://portal.test:9000");
    assert_eq!(config.base_url, "http://portal.test:9000");
}

#[test]
fn default_points_at_local_development() {
    assert_eq!(ClientConfig::default().base_url, DEFAULT_BACKEND_URL);
}

// Env default and override in one test: parallel tests must not race on the
// process environment.
#[test]
fn env_resolution_prefers_the_override() {
    std::env::remove_var(BACKEND_URL_VAR);
    assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BACKEND_URL);

    std::env::set_var(BACKEND_URL_VAR, "http://portal.test:9000");
    assert_eq!(ClientConfig::from_env().base_url, "http://portal.test:9000");
    std::env::remove_var(BACKEND_URL_VAR);
}
