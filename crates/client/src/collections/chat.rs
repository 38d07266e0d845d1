// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::{debug, warn};

use up_core::models::{Message, MessageDraft};
use up_core::validate::{validate_message, ValidationResult};

use super::{Phase, SubmitOutcome};
use crate::api::{PortalApi, DEFAULT_MESSAGE_LIMIT};
use crate::transport::{HttpTransport, Transport, TransportResult};

/// View-model for one class chat.
///
/// Messages are partitioned by class code; the view always shows exactly
/// one partition. There is no push channel: the list only changes on an
/// explicit load, including the reload after every sent message.
pub struct Chat<T: Transport = HttpTransport> {
    api: PortalApi<T>,
    items: Vec<Message>,
    draft: MessageDraft,
    /// Active partition key.
    class_code: String,
    limit: usize,
    phase: Phase,
}

impl<T: Transport> Chat<T> {
    /// Create a view-model for the given class scope.
    pub fn new(api: PortalApi<T>, class_code: impl Into<String>) -> Self {
        Chat {
            api,
            items: Vec::new(),
            draft: MessageDraft::default(),
            class_code: class_code.into(),
            limit: DEFAULT_MESSAGE_LIMIT,
            phase: Phase::Idle,
        }
    }

    /// Override the message page size requested on each load.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The active class scope.
    pub fn class_code(&self) -> &str {
        &self.class_code
    }

    /// Switch the chat to another class.
    ///
    /// An in-flight load for the old scope is not cancelled; its result is
    /// discarded on completion instead. Callers reload to fetch the new
    /// scope's messages.
    pub fn set_class_code(&mut self, class_code: impl Into<String>) {
        self.class_code = class_code.into();
    }

    /// The cached message list, in server order.
    pub fn items(&self) -> &[Message] {
        &self.items
    }

    pub fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    /// Mutable access to the pending draft.
    pub fn draft_mut(&mut self) -> &mut MessageDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fetch the current scope's messages, replacing the cached list.
    pub async fn load(&mut self) -> TransportResult<()> {
        // Tag the request with the scope at issue time; apply_loaded drops
        // results whose tag no longer matches.
        let scope = self.class_code.clone();
        self.phase = Phase::Loading;
        let result = self.api.get_messages(&scope, self.limit).await;
        self.phase = Phase::Idle;
        let fetched = result?;
        self.apply_loaded(&scope, fetched);
        Ok(())
    }

    /// Apply a completed load, discarding it if the scope changed while the
    /// request was in flight.
    fn apply_loaded(&mut self, scope: &str, fetched: Vec<Message>) {
        if scope != self.class_code {
            warn!(
                stale = scope,
                current = %self.class_code,
                "discarding stale message load"
            );
            return;
        }
        debug!(count = fetched.len(), class = scope, "messages loaded");
        self.items = fetched;
    }

    /// Validate the draft and, if it passes, post the message and reload.
    ///
    /// The payload carries the fixed author literal and the active scope
    /// key alongside the typed content.
    pub async fn submit(&mut self) -> TransportResult<SubmitOutcome> {
        match validate_message(&self.draft) {
            ValidationResult::Invalid(violations) => {
                return Ok(SubmitOutcome::Rejected(violations));
            }
            ValidationResult::Valid => {}
        }

        self.phase = Phase::Submitting;
        let request = self.draft.to_request(&self.class_code);
        let created = match self.api.post_message(&self.class_code, &request).await {
            Ok(created) => created,
            Err(e) => {
                self.phase = Phase::Idle;
                return Err(e);
            }
        };
        debug!(id = %created.id, class = %created.class_code, "message posted");

        self.draft = MessageDraft::default();
        self.load().await?;
        Ok(SubmitOutcome::Sent)
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod tests;
