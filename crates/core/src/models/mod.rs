// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entity types for the four portal collections.
//!
//! Each collection kind comes in three shapes:
//! - the entity as returned by the server, carrying its assigned [`Id`],
//! - a `New*` creation payload (everything except the id),
//! - a `*Draft` holding in-progress form text.
//!
//! Entities are never mutated after creation; the client's view of a
//! collection is rebuilt wholesale from each list response.

mod class;
mod message;
mod notification;
mod payment;

pub use class::{Class, ClassDraft, NewClass};
pub use message::{Message, MessageDraft, NewMessage, MESSAGE_AUTHOR};
pub use notification::{NewNotification, Notification, NotificationDraft};
pub use payment::{NewPayment, Payment, PaymentDraft, PENDING_STATUS};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned record identifier.
///
/// The collection store contract does not pin down the id representation,
/// so both JSON numbers and JSON strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric identifier (e.g. an autoincrement row id).
    Int(i64),
    /// String identifier (e.g. a UUID).
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{}", n),
            Id::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
