// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use super::Id;

/// Author literal stamped on every outgoing message. The contract carries
/// no real identity.
pub const MESSAGE_AUTHOR: &str = "You";

/// A chat message within a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned identifier.
    pub id: Id,
    /// Partition key; messages are fetched per class.
    pub class_code: String,
    pub author: String,
    pub content: String,
}

/// Creation payload for [`Message`]; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub class_code: String,
    pub author: String,
    pub content: String,
}

/// Pending form state for the chat view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub content: String,
}

impl MessageDraft {
    /// Build the creation payload for the given class scope.
    ///
    /// The content is sent as typed; only the validation gate trims.
    pub fn to_request(&self, class_code: &str) -> NewMessage {
        NewMessage {
            class_code: class_code.to_string(),
            author: MESSAGE_AUTHOR.to_string(),
            content: self.content.clone(),
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
