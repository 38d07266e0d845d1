// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::debug;

use up_core::models::{Payment, PaymentDraft};
use up_core::validate::{validate_payment, ValidationResult};

use super::{Phase, SubmitOutcome};
use crate::api::PortalApi;
use crate::transport::{HttpTransport, Transport, TransportResult};

/// View-model for the payments collection.
pub struct Payments<T: Transport = HttpTransport> {
    api: PortalApi<T>,
    items: Vec<Payment>,
    draft: PaymentDraft,
    /// Optional student filter applied to every load.
    scope: Option<String>,
    phase: Phase,
}

impl<T: Transport> Payments<T> {
    /// Create an unscoped view-model over the given API client.
    pub fn new(api: PortalApi<T>) -> Self {
        Payments {
            api,
            items: Vec::new(),
            draft: PaymentDraft::default(),
            scope: None,
            phase: Phase::Idle,
        }
    }

    /// The active student filter, if any.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Restrict loads to one student, or `None` for all payments.
    pub fn set_scope(&mut self, student_id: Option<String>) {
        self.scope = student_id;
    }

    /// The cached item list, in server order.
    pub fn items(&self) -> &[Payment] {
        &self.items
    }

    pub fn draft(&self) -> &PaymentDraft {
        &self.draft
    }

    /// Mutable access to the pending draft.
    pub fn draft_mut(&mut self) -> &mut PaymentDraft {
        &mut self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replace the cached list with the server's current contents.
    pub async fn load(&mut self) -> TransportResult<()> {
        self.phase = Phase::Loading;
        let result = self.api.list_payments(self.scope.as_deref()).await;
        self.phase = Phase::Idle;
        self.items = result?;
        debug!(count = self.items.len(), "payments loaded");
        Ok(())
    }

    /// Validate the draft and, if it passes, create the payment and reload.
    ///
    /// The amount is coerced from form text to a number here; the status is
    /// always stamped "pending". An amount that does not parse was already
    /// rejected by the validation gate.
    pub async fn submit(&mut self) -> TransportResult<SubmitOutcome> {
        match validate_payment(&self.draft) {
            ValidationResult::Invalid(violations) => {
                return Ok(SubmitOutcome::Rejected(violations));
            }
            ValidationResult::Valid => {}
        }
        let Some(amount) = self.draft.parsed_amount() else {
            return Ok(SubmitOutcome::Rejected(vec!["amount"]));
        };

        self.phase = Phase::Submitting;
        let created = match self.api.create_payment(&self.draft.to_request(amount)).await {
            Ok(created) => created,
            Err(e) => {
                self.phase = Phase::Idle;
                return Err(e);
            }
        };
        debug!(id = %created.id, amount = created.amount, "payment created");

        self.draft = PaymentDraft::default();
        self.load().await?;
        Ok(SubmitOutcome::Sent)
    }
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
