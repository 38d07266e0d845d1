// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the transport module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use serde_json::json;

use super::{HttpTransport, Method, Transport, TransportError};
use crate::config::ClientConfig;
use crate::test_support::MockTransport;

#[test]
fn method_names_match_the_wire() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Post.to_string(), "POST");
}

#[test]
fn status_error_carries_code_and_text() {
    let err = TransportError::Status {
        status: 500,
        status_text: "Internal Server Error".into(),
    };
    assert_eq!(err.to_string(), "http 500 Internal Server Error");
}

#[test]
fn http_transport_keeps_the_configured_base() {
    let transport = HttpTransport::new(&ClientConfig::new("http://portal.test:9000/"));
    assert_eq!(transport.base_url(), "http://portal.test:9000/");
}

#[tokio::test]
async fn mock_replays_queued_responses_in_order() {
    let mock = MockTransport::new();
    mock.push_response(Ok(json!({ "first": true })));
    mock.push_response(Ok(json!({ "second": true })));

    let first = mock.request(Method::Get, "/classes", None).await.unwrap();
    let second = mock.request(Method::Get, "/classes", None).await.unwrap();
    assert_eq!(first, json!({ "first": true }));
    assert_eq!(second, json!({ "second": true }));
}

#[tokio::test]
async fn mock_records_method_path_and_body() {
    let mock = MockTransport::new();
    mock.push_response(Ok(json!({})));
    let body = json!({ "code": "CS101" });
    mock.request(Method::Post, "/classes", Some(body.clone()))
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/classes");
    assert_eq!(requests[0].body, Some(body));
}

#[tokio::test]
async fn mock_defaults_to_an_empty_list() {
    let mock = MockTransport::new();
    let value = mock.request(Method::Get, "/payments", None).await.unwrap();
    assert_eq!(value, json!([]));
}

#[tokio::test]
async fn mock_replays_queued_failures() {
    let mock = MockTransport::new();
    mock.push_server_error();
    let err = mock
        .request(Method::Get, "/classes", None)
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 500, .. }));
}
