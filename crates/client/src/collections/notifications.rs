// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::debug;

use up_core::models::{Notification, NotificationDraft};
use up_core::validate::{validate_notification, ValidationResult};

use super::{Phase, SubmitOutcome};
use crate::api::PortalApi;
use crate::transport::{HttpTransport, Transport, TransportResult};

/// View-model for the notifications collection.
pub struct Notifications<T: Transport = HttpTransport> {
    api: PortalApi<T>,
    items: Vec<Notification>,
    draft: NotificationDraft,
    /// Optional class filter applied to every load.
    scope: Option<String>,
    phase: Phase,
}

impl<T: Transport> Notifications<T> {
    /// Create an unscoped view-model over the given API client.
    pub fn new(api: PortalApi<T>) -> Self {
        Notifications {
            api,
            items: Vec::new(),
            draft: NotificationDraft::default(),
            scope: None,
            phase: Phase::Idle,
        }
    }

    /// The active class filter, if any.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Restrict loads to one class, or `None` for all notifications.
    ///
    /// Callers reload after changing scope; an in-flight load is not
    /// cancelled.
    pub fn set_scope(&mut self, class_code: Option<String>) {
        self.scope = class_code;
    }

    /// The cached item list, in server order.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn draft(&self) -> &NotificationDraft {
        &self.draft
    }

    /// Mutable access to the pending draft.
    pub fn draft_mut(&mut self) -> &mut NotificationDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replace the cached list with the server's current contents.
    pub async fn load(&mut self) -> TransportResult<()> {
        self.phase = Phase::Loading;
        let result = self.api.list_notifications(self.scope.as_deref()).await;
        self.phase = Phase::Idle;
        self.items = result?;
        debug!(count = self.items.len(), "notifications loaded");
        Ok(())
    }

    /// Validate the draft and, if it passes, post the notification and
    /// reload.
    pub async fn submit(&mut self) -> TransportResult<SubmitOutcome> {
        match validate_notification(&self.draft) {
            ValidationResult::Invalid(violations) => {
                return Ok(SubmitOutcome::Rejected(violations));
            }
            ValidationResult::Valid => {}
        }

        self.phase = Phase::Submitting;
        let created = match self
            .api
            .create_notification(&self.draft.to_request())
            .await
        {
            Ok(created) => created,
            Err(e) => {
                self.phase = Phase::Idle;
                return Err(e);
            }
        };
        debug!(id = %created.id, "notification posted");

        self.draft = NotificationDraft::default();
        self.load().await?;
        Ok(SubmitOutcome::Sent)
    }
}

#[cfg(test)]
#[path = "notifications_tests.rs"]
mod tests;
