// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-submit validation gates for the four draft kinds.
//!
//! Submitting an invalid draft is a no-op, not an error, so the gates
//! return a [`ValidationResult`] value instead of `Err`. Callers decide
//! whether and how to surface the violated field names.

use crate::models::{ClassDraft, MessageDraft, NotificationDraft, PaymentDraft};

/// Outcome of a draft validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// All required fields are present (and parseable where relevant).
    Valid,
    /// Names of the violated fields, in declaration order.
    Invalid(Vec<&'static str>),
}

impl ValidationResult {
    /// Returns `true` when the draft may be submitted.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    fn from_violations(violations: Vec<&'static str>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// A class draft needs a code and a name.
pub fn validate_class(draft: &ClassDraft) -> ValidationResult {
    let mut violations = Vec::new();
    if is_blank(&draft.code) {
        violations.push("code");
    }
    if is_blank(&draft.name) {
        violations.push("name");
    }
    ValidationResult::from_violations(violations)
}

/// A notification draft needs a title and a body; the class scope is
/// optional.
pub fn validate_notification(draft: &NotificationDraft) -> ValidationResult {
    let mut violations = Vec::new();
    if is_blank(&draft.title) {
        violations.push("title");
    }
    if is_blank(&draft.body) {
        violations.push("body");
    }
    ValidationResult::from_violations(violations)
}

/// A payment draft needs all three fields, and the amount must parse as a
/// number.
///
/// Presence is checked before numeric validity; an amount that is present
/// but unparseable reports the same "amount" violation and blocks the
/// submit.
pub fn validate_payment(draft: &PaymentDraft) -> ValidationResult {
    let mut violations = Vec::new();
    if is_blank(&draft.student_id) {
        violations.push("student_id");
    }
    if is_blank(&draft.amount) || draft.parsed_amount().is_none() {
        violations.push("amount");
    }
    if is_blank(&draft.term) {
        violations.push("term");
    }
    ValidationResult::from_violations(violations)
}

/// A message draft needs non-whitespace content.
pub fn validate_message(draft: &MessageDraft) -> ValidationResult {
    if is_blank(&draft.content) {
        ValidationResult::Invalid(vec!["content"])
    } else {
        ValidationResult::Valid
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
