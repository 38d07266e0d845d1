// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed endpoint wrappers over the transport.
//!
//! One method per operation of the remote collection store contract. Routes,
//! query parameters and body shapes mirror the HTTP contract exactly; path
//! and query components are percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use up_core::models::{
    Class, Message, NewClass, NewMessage, NewNotification, NewPayment, Notification, Payment,
};

use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Method, Transport, TransportError, TransportResult};

/// Message page size requested when the caller does not specify one.
pub const DEFAULT_MESSAGE_LIMIT: usize = 50;

// RFC 3986 unreserved characters stay literal; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Typed client for the remote collection store.
pub struct PortalApi<T: Transport = HttpTransport> {
    transport: T,
}

impl PortalApi<HttpTransport> {
    /// Create an API client over HTTP for the configured base address.
    pub fn new(config: &ClientConfig) -> Self {
        PortalApi {
            transport: HttpTransport::new(config),
        }
    }
}

impl<T: Transport> PortalApi<T> {
    /// Create an API client with a custom transport (for testing).
    pub fn with_transport(transport: T) -> Self {
        PortalApi { transport }
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> TransportResult<R> {
        let value = self.transport.request(Method::Get, path, None).await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> TransportResult<R> {
        let body =
            serde_json::to_value(body).map_err(|e| TransportError::Serialize(e.to_string()))?;
        let value = self.transport.request(Method::Post, path, Some(body)).await?;
        serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// List all classes.
    pub async fn list_classes(&self) -> TransportResult<Vec<Class>> {
        self.get("/classes").await
    }

    /// Create a class; the server assigns the id.
    pub async fn create_class(&self, new: &NewClass) -> TransportResult<Class> {
        self.post("/classes", new).await
    }

    /// List notifications, optionally scoped to one class.
    pub async fn list_notifications(
        &self,
        class_code: Option<&str>,
    ) -> TransportResult<Vec<Notification>> {
        let path = match class_code {
            Some(code) => format!("/notifications?class_code={}", encode(code)),
            None => "/notifications".to_string(),
        };
        self.get(&path).await
    }

    /// Create a notification.
    pub async fn create_notification(
        &self,
        new: &NewNotification,
    ) -> TransportResult<Notification> {
        self.post("/notifications", new).await
    }

    /// List payments, optionally scoped to one student.
    pub async fn list_payments(&self, student_id: Option<&str>) -> TransportResult<Vec<Payment>> {
        let path = match student_id {
            Some(id) => format!("/payments?student_id={}", encode(id)),
            None => "/payments".to_string(),
        };
        self.get(&path).await
    }

    /// Create a payment.
    pub async fn create_payment(&self, new: &NewPayment) -> TransportResult<Payment> {
        self.post("/payments", new).await
    }

    /// Fetch the most recent messages for a class.
    pub async fn get_messages(
        &self,
        class_code: &str,
        limit: usize,
    ) -> TransportResult<Vec<Message>> {
        let path = format!("/classes/{}/messages?limit={}", encode(class_code), limit);
        self.get(&path).await
    }

    /// Post a message to a class chat.
    pub async fn post_message(
        &self,
        class_code: &str,
        new: &NewMessage,
    ) -> TransportResult<Message> {
        let path = format!("/classes/{}/messages", encode(class_code));
        self.post(&path, new).await
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
