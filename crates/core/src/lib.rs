// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! up-core - data model for the Uni Portal client.
//!
//! This crate defines the wire-level entity types of the four portal
//! collections, the creation payloads the client submits, the transient
//! draft types backing each creation form, and the pure validation gates
//! that decide whether a draft may be submitted.
//!
//! # Main Components
//!
//! - [`models`] - Entity, payload and draft types ([`Class`](models::Class),
//!   [`Notification`](models::Notification), [`Payment`](models::Payment),
//!   [`Message`](models::Message))
//! - [`validate`] - Per-kind draft checks returning a
//!   [`ValidationResult`](validate::ValidationResult)
//!
//! No I/O happens here; the transport and view-models live in `up-client`.

pub mod models;
pub mod validate;

pub use models::{
    Class, ClassDraft, Id, Message, MessageDraft, NewClass, NewMessage, NewNotification,
    NewPayment, Notification, NotificationDraft, Payment, PaymentDraft, MESSAGE_AUTHOR,
    PENDING_STATUS,
};
pub use validate::{
    validate_class, validate_message, validate_notification, validate_payment, ValidationResult,
};
