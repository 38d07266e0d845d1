// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use super::Id;

/// Status stamped on every payment the client creates. The server owns the
/// field after creation.
pub const PENDING_STATUS: &str = "pending";

/// A tuition payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Server-assigned identifier.
    pub id: Id,
    pub student_id: String,
    /// Decimal amount, parsed from form text at submit time.
    pub amount: f64,
    /// Billing term (e.g. "Fall 2026").
    pub term: String,
    /// Server-controlled after creation; always [`PENDING_STATUS`] on
    /// creation.
    pub status: String,
}

/// Creation payload for [`Payment`]; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPayment {
    pub student_id: String,
    pub amount: f64,
    pub term: String,
    pub status: String,
}

/// Pending form state for the payments view.
///
/// The amount stays as entered text until submit time; see
/// [`PaymentDraft::parsed_amount`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDraft {
    pub student_id: String,
    pub amount: String,
    pub term: String,
}

impl PaymentDraft {
    /// The amount text parsed as a number, if it parses.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount.trim().parse().ok()
    }

    /// Build the creation payload with the already-parsed amount.
    ///
    /// The status is always [`PENDING_STATUS`] regardless of draft state.
    pub fn to_request(&self, amount: f64) -> NewPayment {
        NewPayment {
            student_id: self.student_id.clone(),
            amount,
            term: self.term.clone(),
            status: PENDING_STATUS.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "payment_tests.rs"]
mod tests;
