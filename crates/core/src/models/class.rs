// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use super::Id;

/// A course offering in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Server-assigned identifier.
    pub id: Id,
    /// Short course code (e.g. "CS101"). Doubles as the chat scope key.
    pub code: String,
    /// Human-readable course name.
    pub name: String,
    pub instructor: String,
    pub schedule: String,
}

/// Creation payload for [`Class`]; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClass {
    pub code: String,
    pub name: String,
    pub instructor: String,
    pub schedule: String,
}

/// Pending form state for the classes view.
///
/// All fields are free text. [`validate_class`](crate::validate::validate_class)
/// requires `code` and `name`; the rest may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDraft {
    pub code: String,
    pub name: String,
    pub instructor: String,
    pub schedule: String,
}

impl ClassDraft {
    /// Build the creation payload from the current draft text.
    pub fn to_request(&self) -> NewClass {
        NewClass {
            code: self.code.clone(),
            name: self.name.clone(),
            instructor: self.instructor.clone(),
            schedule: self.schedule.clone(),
        }
    }
}

#[cfg(test)]
#[path = "class_tests.rs"]
mod tests;
