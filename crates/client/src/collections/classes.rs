// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::debug;

use up_core::models::{Class, ClassDraft};
use up_core::validate::{validate_class, ValidationResult};

use super::{Phase, SubmitOutcome};
use crate::api::PortalApi;
use crate::transport::{HttpTransport, Transport, TransportResult};

/// View-model for the classes collection.
pub struct Classes<T: Transport = HttpTransport> {
    api: PortalApi<T>,
    items: Vec<Class>,
    draft: ClassDraft,
    phase: Phase,
}

impl<T: Transport> Classes<T> {
    /// Create a view-model over the given API client.
    pub fn new(api: PortalApi<T>) -> Self {
        Classes {
            api,
            items: Vec::new(),
            draft: ClassDraft::default(),
            phase: Phase::Idle,
        }
    }

    /// The cached item list, in server order.
    pub fn items(&self) -> &[Class] {
        &self.items
    }

    pub fn draft(&self) -> &ClassDraft {
        &self.draft
    }

    /// Mutable access to the pending draft.
    pub fn draft_mut(&mut self) -> &mut ClassDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replace the cached list with the server's current contents.
    ///
    /// On failure the previous items are retained and the error propagates.
    pub async fn load(&mut self) -> TransportResult<()> {
        self.phase = Phase::Loading;
        let result = self.api.list_classes().await;
        self.phase = Phase::Idle;
        self.items = result?;
        debug!(count = self.items.len(), "classes loaded");
        Ok(())
    }

    /// Validate the draft and, if it passes, create the class and reload.
    ///
    /// An invalid draft is a no-op: no request is sent and neither the
    /// items nor the draft change. The draft is reset only after the
    /// create request succeeds.
    pub async fn submit(&mut self) -> TransportResult<SubmitOutcome> {
        match validate_class(&self.draft) {
            ValidationResult::Invalid(violations) => {
                return Ok(SubmitOutcome::Rejected(violations));
            }
            ValidationResult::Valid => {}
        }

        self.phase = Phase::Submitting;
        let created = match self.api.create_class(&self.draft.to_request()).await {
            Ok(created) => created,
            Err(e) => {
                self.phase = Phase::Idle;
                return Err(e);
            }
        };
        debug!(id = %created.id, code = %created.code, "class created");

        self.draft = ClassDraft::default();
        self.load().await?;
        Ok(SubmitOutcome::Sent)
    }
}

#[cfg(test)]
#[path = "classes_tests.rs"]
mod tests;
