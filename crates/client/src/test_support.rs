// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test support for client tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::transport::{Method, Transport, TransportError, TransportResult};

/// A request recorded by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Mock transport replaying queued responses and recording every request.
///
/// Clones share their state, so a clone can be handed to the code under
/// test while the original keeps observing it. An empty queue answers with
/// an empty JSON array (the shape of every list endpoint).
#[derive(Clone)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<VecDeque<TransportResult<Value>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue the response for the next request.
    pub fn push_response(&self, response: TransportResult<Value>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queue a 500-style status failure for the next request.
    pub fn push_server_error(&self) {
        self.push_response(Err(TransportError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }));
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Value>> + Send + '_>> {
        let requests = Arc::clone(&self.requests);
        let responses = Arc::clone(&self.responses);
        let path = path.to_string();
        Box::pin(async move {
            requests.lock().unwrap().push(Recorded { method, path, body });
            responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Value::Array(Vec::new())))
        })
    }
}

/// A class row as the server would return it.
pub fn class_json(id: i64, code: &str, name: &str) -> Value {
    json!({ "id": id, "code": code, "name": name, "instructor": "", "schedule": "" })
}

/// A notification row as the server would return it.
pub fn notification_json(id: i64, title: &str, class_code: Option<&str>) -> Value {
    match class_code {
        Some(code) => json!({ "id": id, "title": title, "body": "body", "class_code": code }),
        None => json!({ "id": id, "title": title, "body": "body" }),
    }
}

/// A payment row as the server would return it.
pub fn payment_json(id: i64, student_id: &str, amount: f64, status: &str) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "amount": amount,
        "term": "Fall 2026",
        "status": status,
    })
}

/// A message row as the server would return it.
pub fn message_json(id: i64, class_code: &str, author: &str, content: &str) -> Value {
    json!({ "id": id, "class_code": class_code, "author": author, "content": content })
}
