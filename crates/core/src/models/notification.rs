// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use super::Id;

/// An announcement posted to students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Server-assigned identifier.
    pub id: Id,
    pub title: String,
    pub body: String,
    /// Class this notification is scoped to, if any. There is no
    /// client-side referential check against the classes collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_code: Option<String>,
}

/// Creation payload for [`Notification`]; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNotification {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_code: Option<String>,
}

/// Pending form state for the notifications view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub body: String,
    /// Optional class scope; blank means portal-wide.
    pub class_code: String,
}

impl NotificationDraft {
    /// Build the creation payload from the current draft text.
    ///
    /// A blank class code becomes an absent field rather than an empty
    /// string.
    pub fn to_request(&self) -> NewNotification {
        let class_code = if self.class_code.trim().is_empty() {
            None
        } else {
            Some(self.class_code.clone())
        };
        NewNotification {
            title: self.title.clone(),
            body: self.body.clone(),
            class_code,
        }
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
